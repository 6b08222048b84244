//! Movement resolution: where does a token end up for a given die?
//!
//! Rules, checked in order:
//!
//! 1. On the start square, only a six moves.
//! 2. From square 95 up, a die larger than the distance to 100 freezes the
//!    token in place.
//! 3. Otherwise walk the die. A sum past 100 bounces back off the finish,
//!    and from square 96 up an overshooting sum is pinned to exactly 100
//!    instead. Behind the freeze rule no roll overshoots, so only direct
//!    callers of `walk` ever see these two adjustments.
//! 4. Look the landing square up in the jump table once.

use tracing::trace;

use crate::board::{JumpKind, JumpTable, Square};

/// Face that lets a token leave the start square and grants an extra turn.
pub const SIX: u8 = 6;

/// Lowest square where an overshooting die freezes the token.
pub const FREEZE_FROM: u8 = 95;

/// Lowest square where an overshooting sum is pinned to the finish.
pub const EXACT_LANDING_FROM: u8 = 96;

/// Result of applying one die to one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// Stuck on the start square.
    Skipped,
    /// Die overshoots the finish from the endgame squares.
    Frozen,
    /// The token moved.
    Moved {
        /// Square reached by the die walk.
        landed: Square,
        /// Square after any ladder or snake.
        to: Square,
        jump: Option<JumpKind>,
    },
}

impl Movement {
    /// Final square, given where the token started.
    #[must_use]
    pub fn destination(self, from: Square) -> Square {
        match self {
            Movement::Skipped | Movement::Frozen => from,
            Movement::Moved { to, .. } => to,
        }
    }
}

/// Square reached by walking `die` squares from `from`, after the bounce and
/// exact-landing rules.
///
/// # Panics
///
/// Panics if `die` is not 1-6. `RulesEngine::apply_roll` rejects such dice
/// with an error before they get here.
#[must_use]
pub fn walk(from: Square, die: u8) -> Square {
    assert!((1..=SIX).contains(&die), "die value {} is not 1-6", die);
    let pos = from.get();
    let sum = pos + die;
    let finish = Square::FINISH.get();

    let mut raw = sum;
    if raw > finish {
        raw = finish - (raw - finish);
    }
    if pos >= EXACT_LANDING_FROM && sum > finish {
        raw = finish;
    }

    // sum is 2..=106, so a bounce never drops below 94
    Square::fixed(raw)
}

/// Apply a validated die to a token on `from`.
///
/// # Panics
///
/// Panics if `die` is not 1-6.
#[must_use]
pub fn resolve_movement(table: &JumpTable, from: Square, die: u8) -> Movement {
    assert!((1..=SIX).contains(&die), "die value {} is not 1-6", die);
    if from.is_start() && die != SIX {
        trace!(from = %from, die, "no six on the start square");
        return Movement::Skipped;
    }

    if from.get() >= FREEZE_FROM && die > from.remaining() {
        trace!(from = %from, die, remaining = from.remaining(), "frozen short of the finish");
        return Movement::Frozen;
    }

    let landed = walk(from, die);
    let jump = table.jump_at(landed);
    let to = jump.map_or(landed, |j| j.to);
    let kind = jump.map(|j| j.kind);

    trace!(from = %from, die, landed = %landed, to = %to, jump = ?kind, "token moved");

    Movement::Moved { landed, to, jump: kind }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(n: u8) -> Square {
        Square::new(n).unwrap()
    }

    #[test]
    fn test_start_needs_six() {
        let table = JumpTable::standard();
        for die in 1..=5 {
            assert_eq!(resolve_movement(&table, Square::START, die), Movement::Skipped);
        }
        assert_eq!(
            resolve_movement(&table, Square::START, 6),
            Movement::Moved { landed: sq(7), to: sq(7), jump: None }
        );
    }

    #[test]
    fn test_freeze() {
        let table = JumpTable::standard();
        assert_eq!(resolve_movement(&table, sq(95), 6), Movement::Frozen);
        assert_eq!(resolve_movement(&table, sq(99), 2), Movement::Frozen);
        assert!(matches!(resolve_movement(&table, sq(99), 1), Movement::Moved { .. }));
    }

    #[test]
    fn test_walk_bounce_and_exact_landing() {
        // Below the exact-landing threshold the sum bounces.
        assert_eq!(walk(sq(94), 6), sq(100));
        assert_eq!(walk(sq(95), 6), sq(99));
        // From 96 up an overshoot is pinned to the finish.
        assert_eq!(walk(sq(96), 6), sq(100));
        assert_eq!(walk(sq(99), 3), sq(100));
        assert_eq!(walk(sq(100), 6), sq(100));
        // No overshoot, no adjustment.
        assert_eq!(walk(sq(96), 3), sq(99));
    }

    #[test]
    #[should_panic(expected = "not 1-6")]
    fn test_oversized_die_panics_instead_of_overflowing() {
        let _ = resolve_movement(&JumpTable::standard(), sq(2), 250);
    }

    #[test]
    #[should_panic(expected = "not 1-6")]
    fn test_walk_rejects_zero() {
        let _ = walk(sq(40), 0);
    }

    #[test]
    fn test_ladder_and_snake() {
        let table = JumpTable::standard();
        assert_eq!(
            resolve_movement(&table, sq(50), 4),
            Movement::Moved { landed: sq(54), to: sq(88), jump: Some(JumpKind::Ladder) }
        );
        assert_eq!(
            resolve_movement(&table, sq(45), 3),
            Movement::Moved { landed: sq(48), to: sq(16), jump: Some(JumpKind::Snake) }
        );
    }

    #[test]
    fn test_destination() {
        assert_eq!(Movement::Frozen.destination(sq(97)), sq(97));
        let moved = Movement::Moved { landed: sq(54), to: sq(88), jump: Some(JumpKind::Ladder) };
        assert_eq!(moved.destination(sq(50)), sq(88));
    }
}
