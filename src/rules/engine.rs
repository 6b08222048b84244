//! Rules engine trait and the Snakes & Ladders implementation.
//!
//! The engine is stateless apart from its configuration: every call takes
//! the caller's `GameState` by reference and returns a fresh one, so a
//! rejected roll can never leave a half-applied state behind.

use tracing::{debug, info};

use super::movement::{resolve_movement, Movement, SIX};
use super::outcome::{Outcome, RollReport};
use crate::board::JumpTable;
use crate::core::error::{EngineError, EngineResult, RollRejection};
use crate::core::{GameConfig, GameState, PlayerId};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_roll` must be pure: same state and die, same result
/// - `apply_roll` must reject before cloning, never after
/// - randomness stays with the caller
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Canonical starting state.
    fn initial_state(&self) -> GameState;

    /// Resolve one die for `player`, returning the next state and a report.
    fn apply_roll(&self, state: &GameState, player: PlayerId, die: u8) -> EngineResult<(GameState, RollReport)>;

    // === Convenience Methods ===

    /// Whether any roll is permitted: false once a winner exists.
    fn can_roll(&self, state: &GameState) -> bool {
        state.winner().is_none()
    }

    /// Whether `player` may roll right now.
    fn can_roll_as(&self, state: &GameState, player: PlayerId) -> bool {
        self.can_roll(state) && state.active_player() == player
    }

    /// Check that `player` may roll, before any die is drawn.
    fn check_turn(&self, state: &GameState, player: PlayerId) -> EngineResult<()> {
        if let Some(winner) = state.winner() {
            return Err(EngineError::InvalidRoll {
                reason: RollRejection::GameOver { winner },
            });
        }
        let active = state.active_player();
        if player != active || !player.is_seated(state.player_count()) {
            return Err(EngineError::InvalidRoll {
                reason: RollRejection::NotYourTurn { player, active },
            });
        }
        Ok(())
    }

    /// Check the preconditions of `apply_roll` without applying anything.
    ///
    /// Order: game over, then turn order, then die range.
    fn check_roll(&self, state: &GameState, player: PlayerId, die: u8) -> EngineResult<()> {
        self.check_turn(state, player)?;
        if !(1..=SIX).contains(&die) {
            return Err(EngineError::InvalidDieValue { value: die });
        }
        Ok(())
    }

    /// Start over. Ignores whatever state the caller holds.
    fn reset(&self) -> GameState {
        info!(player_count = self.config().player_count, "game reset");
        self.initial_state()
    }

    /// The winner, if the game is over.
    fn winner(&self, state: &GameState) -> Option<PlayerId> {
        state.winner()
    }
}

/// The fixed-board Snakes & Ladders rules.
#[derive(Clone, Debug)]
pub struct SnakesAndLadders {
    config: GameConfig,
    table: JumpTable,
}

impl SnakesAndLadders {
    /// Engine for a validated configuration.
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            table: JumpTable::standard(),
        })
    }

    /// The ladders and snakes this engine plays with.
    #[must_use]
    pub fn table(&self) -> &JumpTable {
        &self.table
    }

    fn outcome_for(movement: Movement, die: u8) -> Outcome {
        match movement {
            Movement::Skipped => Outcome::SkippedStart,
            Movement::Frozen => Outcome::Frozen,
            Movement::Moved { to, .. } if to.is_finish() => Outcome::Won,
            Movement::Moved { landed, to, .. } if to > landed => Outcome::Climbed,
            Movement::Moved { .. } if die == SIX => Outcome::RolledSix,
            Movement::Moved { landed, to, .. } if to < landed => Outcome::Bitten,
            Movement::Moved { .. } => Outcome::Moved,
        }
    }
}

impl Default for SnakesAndLadders {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            table: JumpTable::standard(),
        }
    }
}

impl RulesEngine for SnakesAndLadders {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn initial_state(&self) -> GameState {
        GameState::new(self.config.player_count)
    }

    fn apply_roll(&self, state: &GameState, player: PlayerId, die: u8) -> EngineResult<(GameState, RollReport)> {
        if let Err(err) = self.check_roll(state, player, die) {
            debug!(player = %player, die, error = %err, "roll rejected");
            return Err(err);
        }

        let from = state.position(player);
        let movement = resolve_movement(&self.table, from, die);
        let outcome = Self::outcome_for(movement, die);

        let to = movement.destination(from);
        let (landed, jump) = match movement {
            Movement::Skipped | Movement::Frozen => (from, None),
            Movement::Moved { landed, jump, .. } => (landed, jump),
        };

        let mut next = state.clone();
        next.record_die(player, die);
        next.set_position(player, to);

        if outcome.is_terminal() {
            next.set_winner(player);
            let label = self.config.label(player);
            info!(player = %player, label = %label.name, rolls = next.roll_count(), "game won");
        } else if outcome.passes_turn() {
            next.set_active(player.next(next.player_count()));
        }

        let report = RollReport {
            player,
            die,
            from,
            landed,
            to,
            jump,
            outcome,
            next_player: next.active_player(),
        };

        debug!(player = %player, die, from = %from, to = %to, outcome = ?outcome, next = %report.next_player, "roll applied");

        Ok((next, report))
    }
}
