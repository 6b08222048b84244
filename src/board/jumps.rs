//! Ladders and snakes.
//!
//! The board is fixed: six ladders and six snakes. A landing square is looked
//! up once, ladders first, and the destination is never itself an origin, so a
//! roll triggers at most one jump.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Ladder origins and tops.
pub const LADDERS: [(u8, u8); 6] = [(4, 56), (12, 50), (14, 55), (22, 58), (41, 79), (54, 88)];

/// Snake heads and tails.
pub const SNAKES: [(u8, u8); 6] = [(96, 42), (94, 71), (75, 32), (48, 16), (37, 3), (28, 10)];

/// Direction of a jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpKind {
    Ladder,
    Snake,
}

/// One entry in the jump table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jump {
    pub kind: JumpKind,
    pub from: Square,
    pub to: Square,
}

/// Origin square → jump lookup.
#[derive(Clone, Debug)]
pub struct JumpTable {
    ladders: FxHashMap<Square, Square>,
    snakes: FxHashMap<Square, Square>,
}

impl JumpTable {
    /// The fixed board every game is played on.
    #[must_use]
    pub fn standard() -> Self {
        let to_map = |pairs: &[(u8, u8)]| {
            pairs
                .iter()
                .map(|&(from, to)| (Square::fixed(from), Square::fixed(to)))
                .collect::<FxHashMap<_, _>>()
        };

        Self {
            ladders: to_map(&LADDERS[..]),
            snakes: to_map(&SNAKES[..]),
        }
    }

    /// Jump starting at `square`, if any. Ladders win over snakes.
    #[must_use]
    pub fn jump_at(&self, square: Square) -> Option<Jump> {
        if let Some(&to) = self.ladders.get(&square) {
            return Some(Jump { kind: JumpKind::Ladder, from: square, to });
        }
        self.snakes
            .get(&square)
            .map(|&to| Jump { kind: JumpKind::Snake, from: square, to })
    }

    /// Where a token that lands on `square` ends up.
    #[must_use]
    pub fn resolve(&self, square: Square) -> Square {
        self.jump_at(square).map_or(square, |jump| jump.to)
    }

    /// All jumps, ladders first, each group sorted by origin.
    pub fn jumps(&self) -> Vec<Jump> {
        let mut ladders: Vec<_> = self
            .ladders
            .iter()
            .map(|(&from, &to)| Jump { kind: JumpKind::Ladder, from, to })
            .collect();
        let mut snakes: Vec<_> = self
            .snakes
            .iter()
            .map(|(&from, &to)| Jump { kind: JumpKind::Snake, from, to })
            .collect();
        ladders.sort_by_key(|j| j.from);
        snakes.sort_by_key(|j| j.from);
        ladders.extend(snakes);
        ladders
    }

    /// No square is both a ladder foot and a snake head.
    #[must_use]
    pub fn is_disjoint(&self) -> bool {
        self.ladders.keys().all(|k| !self.snakes.contains_key(k))
    }

    /// No jump lands on another jump's origin.
    #[must_use]
    pub fn is_chain_free(&self) -> bool {
        self.ladders
            .values()
            .chain(self.snakes.values())
            .all(|to| self.jump_at(*to).is_none())
    }
}

impl Default for JumpTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(n: u8) -> Square {
        Square::fixed(n)
    }

    #[test]
    fn test_standard_table_shape() {
        let table = JumpTable::standard();
        assert!(table.is_disjoint());
        assert!(table.is_chain_free());
        assert_eq!(table.jumps().len(), 12);
    }

    #[test]
    fn test_ladders_go_up_snakes_go_down() {
        for jump in JumpTable::standard().jumps() {
            match jump.kind {
                JumpKind::Ladder => assert!(jump.to > jump.from),
                JumpKind::Snake => assert!(jump.to < jump.from),
            }
        }
    }

    #[test]
    fn test_resolve() {
        let table = JumpTable::standard();
        assert_eq!(table.resolve(sq(54)), sq(88));
        assert_eq!(table.resolve(sq(96)), sq(42));
        assert_eq!(table.resolve(sq(37)), sq(3));
        assert_eq!(table.resolve(sq(99)), sq(99));
        assert_eq!(table.resolve(Square::START), Square::START);
    }

    #[test]
    fn test_jump_at() {
        let table = JumpTable::standard();
        assert_eq!(
            table.jump_at(sq(4)),
            Some(Jump { kind: JumpKind::Ladder, from: sq(4), to: sq(56) })
        );
        assert_eq!(
            table.jump_at(sq(94)),
            Some(Jump { kind: JumpKind::Snake, from: sq(94), to: sq(71) })
        );
        assert_eq!(table.jump_at(sq(5)), None);
    }

    #[test]
    fn test_no_jump_touches_finish() {
        let table = JumpTable::standard();
        assert!(table.jump_at(Square::FINISH).is_none());
        assert!(table.jumps().iter().all(|j| j.to != Square::FINISH));
    }
}
