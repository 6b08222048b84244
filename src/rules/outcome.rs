//! What a roll did, in terms the presentation layer can act on.

use serde::{Deserialize, Serialize};

use crate::board::{JumpKind, MovePath, Square};
use crate::core::PlayerId;

/// Tagged result of one accepted roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Still on the start square without a six. Turn passes.
    SkippedStart,
    /// Near the finish and the die overshoots. Turn passes.
    Frozen,
    /// Plain move. Turn passes.
    Moved,
    /// Landed on a ladder foot. Extra turn.
    Climbed,
    /// Landed on a snake head. Turn passes.
    Bitten,
    /// Rolled a six without climbing. Extra turn.
    RolledSix,
    /// Reached square 100.
    Won,
}

impl Outcome {
    /// Whether the same player rolls again.
    #[must_use]
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, Outcome::Climbed | Outcome::RolledSix)
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Outcome::Won
    }

    /// Whether the token left its square.
    #[must_use]
    pub fn moved(self) -> bool {
        !matches!(self, Outcome::SkippedStart | Outcome::Frozen)
    }

    /// Whether the active index rotates after this outcome.
    #[must_use]
    pub fn passes_turn(self) -> bool {
        !self.grants_extra_turn() && !self.is_terminal()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Outcome::SkippedStart => "needs a six to start",
            Outcome::Frozen => "needs an exact roll to finish",
            Outcome::Moved => "moved",
            Outcome::Climbed => "climbed a ladder",
            Outcome::Bitten => "was bitten by a snake",
            Outcome::RolledSix => "rolled a six",
            Outcome::Won => "wins",
        };
        f.write_str(text)
    }
}

/// Everything the UI needs to animate and announce a roll without
/// re-deriving the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollReport {
    pub player: PlayerId,
    pub die: u8,
    /// Square before the roll.
    pub from: Square,
    /// Square reached by walking the die, before any jump.
    pub landed: Square,
    /// Square after the jump, if any.
    pub to: Square,
    pub jump: Option<JumpKind>,
    pub outcome: Outcome,
    /// Who rolls next (unchanged on extra turns and wins).
    pub next_player: PlayerId,
}

impl RollReport {
    /// The walk from `from` to `landed`, one square at a time.
    #[must_use]
    pub fn path(&self) -> MovePath {
        MovePath::between(self.from, self.landed)
    }

    /// The jump leg, if the token rode a ladder or snake.
    #[must_use]
    pub fn jump_path(&self) -> Option<MovePath> {
        self.jump.map(|_| MovePath::between(self.landed, self.to))
    }
}

impl std::fmt::Display for RollReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rolled {} and {}", self.player, self.die, self.outcome)?;
        if self.outcome.moved() {
            write!(f, " ({} -> {})", self.from, self.to)?;
        }
        Ok(())
    }
}
