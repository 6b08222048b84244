//! Roll history entries.
//!
//! A session keeps one `RollRecord` per accepted roll. The die values alone
//! are enough to replay a game; the squares and outcome are kept for
//! move lists and debugging.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::Square;
use crate::rules::{Outcome, RollReport};

/// One accepted roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// The player who rolled.
    pub player: PlayerId,

    /// The die value applied.
    pub die: u8,

    /// Square before the roll.
    pub from: Square,

    /// Square after the roll, jumps included.
    pub to: Square,

    pub outcome: Outcome,

    /// Position in the game's roll sequence, starting at 0.
    pub sequence: u32,
}

impl RollRecord {
    /// Record a report as roll number `sequence`.
    #[must_use]
    pub fn from_report(report: &RollReport, sequence: u32) -> Self {
        Self {
            player: report.player,
            die: report.die,
            from: report.from,
            to: report.to,
            outcome: report.outcome,
            sequence,
        }
    }
}
