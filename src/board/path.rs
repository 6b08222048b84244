//! Square-by-square walks for step animation.

use smallvec::SmallVec;

use super::square::Square;

/// The squares a token passes through when walking from one square to
/// another, both ends included.
///
/// A die walk touches at most seven squares, so paths stay inline. Longer
/// walks (a snake slide the UI wants stepped) spill to the heap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePath {
    squares: SmallVec<[Square; 8]>,
}

impl MovePath {
    /// Walk from `from` to `to`, one square at a time, in either direction.
    #[must_use]
    pub fn between(from: Square, to: Square) -> Self {
        let squares = if from <= to {
            (from.get()..=to.get()).map(Square::fixed).collect()
        } else {
            (to.get()..=from.get()).rev().map(Square::fixed).collect()
        };
        Self { squares }
    }

    /// Number of single-square steps (squares visited minus the start).
    #[must_use]
    pub fn steps(&self) -> usize {
        self.squares.len() - 1
    }

    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    #[must_use]
    pub fn is_stationary(&self) -> bool {
        self.squares.len() == 1
    }
}
