//! Game state.
//!
//! `GameState` is a plain value: the engine takes one by reference and hands
//! back a new one. Nothing else writes to it, so the fields are private and
//! the mutators are crate-internal.
//!
//! ## Initial values
//!
//! - every token on square 1
//! - player 0 active
//! - every player's die showing 6
//! - no winner

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::{PlayerId, PlayerMap};
use crate::board::Square;

/// Face every die shows before its first roll.
pub const INITIAL_DIE_FACE: u8 = 6;

/// A broken state invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("active player {active} is not seated in a {player_count}-player game")]
    ActiveNotSeated { active: PlayerId, player_count: usize },

    #[error("winner {winner} is not seated in a {player_count}-player game")]
    WinnerNotSeated { winner: PlayerId, player_count: usize },

    #[error("winner {winner} is on square {square}, not the finish")]
    WinnerOffFinish { winner: PlayerId, square: Square },

    #[error("{player} reached the finish but no winner is recorded")]
    UnrecordedWin { player: PlayerId },

    #[error("{player} shows die face {face}")]
    BadDieFace { player: PlayerId, face: u8 },

    #[error("per-player tables are empty or disagree on player count")]
    MismatchedTables,
}

/// Full engine state for one game.
///
/// Deserializing checks every invariant, so a state that arrives over the
/// UI bridge is either consistent or rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    positions: PlayerMap<Square>,
    active: PlayerId,
    last_roll: Option<u8>,
    shown_dice: PlayerMap<u8>,
    winner: Option<PlayerId>,
    rolls: u32,
}

/// Wire form of `GameState`, before the invariants are checked.
#[derive(Deserialize)]
struct RawGameState {
    positions: PlayerMap<Square>,
    active: PlayerId,
    last_roll: Option<u8>,
    shown_dice: PlayerMap<u8>,
    winner: Option<PlayerId>,
    rolls: u32,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvariantViolation;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        if !(1..=255).contains(&raw.positions.player_count()) {
            return Err(InvariantViolation::MismatchedTables);
        }
        let state = Self {
            positions: raw.positions,
            active: raw.active,
            last_roll: raw.last_roll,
            shown_dice: raw.shown_dice,
            winner: raw.winner,
            rolls: raw.rolls,
        };
        state.check_invariants()?;
        Ok(state)
    }
}

impl GameState {
    /// Canonical starting state.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            positions: PlayerMap::with_value(player_count, Square::START),
            active: PlayerId::new(0),
            last_roll: None,
            shown_dice: PlayerMap::with_value(player_count, INITIAL_DIE_FACE),
            winner: None,
            rolls: 0,
        }
    }

    /// Mid-game setup: tokens on the given squares (turn order), `active` to
    /// roll, no winner yet.
    ///
    /// ```
    /// use snakes_ladders::board::Square;
    /// use snakes_ladders::core::{GameState, PlayerId};
    ///
    /// let squares = vec![Square::new(50)?, Square::new(97)?];
    /// let state = GameState::from_positions(squares, PlayerId::new(1)).unwrap();
    /// assert_eq!(state.position(PlayerId::new(1)).get(), 97);
    /// # Ok::<(), snakes_ladders::core::EngineError>(())
    /// ```
    pub fn from_positions(squares: Vec<Square>, active: PlayerId) -> Result<Self, InvariantViolation> {
        if squares.is_empty() || squares.len() > 255 {
            return Err(InvariantViolation::MismatchedTables);
        }
        let mut state = Self::new(squares.len());
        for (player, square) in PlayerId::all(squares.len()).zip(squares) {
            state.positions[player] = square;
        }
        state.active = active;
        state.check_invariants()?;
        Ok(state)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.positions.player_count()
    }

    /// The player whose roll is resolved next.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// A player's square. Panics for an unseated player.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Square {
        self.positions[player]
    }

    /// All positions in turn order.
    #[must_use]
    pub fn positions(&self) -> &PlayerMap<Square> {
        &self.positions
    }

    /// The most recent accepted die value, from any player.
    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    /// The die face a player's die currently shows.
    #[must_use]
    pub fn shown_die(&self, player: PlayerId) -> u8 {
        self.shown_dice[player]
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Accepted rolls since the game started or was reset.
    #[must_use]
    pub fn roll_count(&self) -> u32 {
        self.rolls
    }

    /// Check every state invariant, reporting the first one broken.
    ///
    /// States built by the engine always pass; deserialized ones may not.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let player_count = self.player_count();

        if self.shown_dice.player_count() != player_count {
            return Err(InvariantViolation::MismatchedTables);
        }
        if !self.active.is_seated(player_count) {
            return Err(InvariantViolation::ActiveNotSeated { active: self.active, player_count });
        }
        if let Some(winner) = self.winner {
            if !winner.is_seated(player_count) {
                return Err(InvariantViolation::WinnerNotSeated { winner, player_count });
            }
            let square = self.positions[winner];
            if !square.is_finish() {
                return Err(InvariantViolation::WinnerOffFinish { winner, square });
            }
        }
        for (player, square) in self.positions.iter() {
            if square.is_finish() && self.winner != Some(player) {
                return Err(InvariantViolation::UnrecordedWin { player });
            }
        }
        for (player, &face) in self.shown_dice.iter() {
            if !(1..=6).contains(&face) {
                return Err(InvariantViolation::BadDieFace { player, face });
            }
        }
        Ok(())
    }

    // === Engine-side mutation ===

    pub(crate) fn record_die(&mut self, player: PlayerId, die: u8) {
        self.last_roll = Some(die);
        self.shown_dice[player] = die;
        self.rolls += 1;
    }

    pub(crate) fn set_position(&mut self, player: PlayerId, square: Square) {
        self.positions[player] = square;
    }

    pub(crate) fn set_active(&mut self, player: PlayerId) {
        self.active = player;
    }

    pub(crate) fn set_winner(&mut self, player: PlayerId) {
        self.winner = Some(player);
    }
}
