//! Board squares.

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, EngineResult};

/// A square on the 100-square board, numbered 1 to 100.
///
/// ```
/// use snakes_ladders::board::Square;
///
/// assert_eq!(Square::new(54).unwrap().get(), 54);
/// assert!(Square::new(0).is_err());
/// assert!(Square::new(101).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// Where every token starts.
    pub const START: Square = Square(1);

    /// Landing here wins.
    pub const FINISH: Square = Square(100);

    /// Create a square, rejecting numbers off the board.
    pub fn new(value: u8) -> EngineResult<Self> {
        if (Self::START.0..=Self::FINISH.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EngineError::InvalidSquare { value })
        }
    }

    /// Constructor for values already known to be on the board. Panics on an
    /// off-board value (at compile time in const contexts).
    pub(crate) const fn fixed(value: u8) -> Self {
        assert!(value >= 1 && value <= 100);
        Self(value)
    }

    /// The square number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Squares left to walk before the finish.
    #[must_use]
    pub const fn remaining(self) -> u8 {
        Self::FINISH.0 - self.0
    }

    #[must_use]
    pub const fn is_start(self) -> bool {
        self.0 == Self::START.0
    }

    #[must_use]
    pub const fn is_finish(self) -> bool {
        self.0 >= Self::FINISH.0
    }

    /// Iterate over every square on the board.
    pub fn all() -> impl Iterator<Item = Square> {
        (Self::START.0..=Self::FINISH.0).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Square::new(value)
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
