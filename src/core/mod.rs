//! Core engine types: players, configuration, state, roll history, die
//! sources, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod record;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use error::{EngineError, EngineResult, RollRejection};
pub use player::{PlayerId, PlayerLabel, PlayerMap};
pub use record::RollRecord;
pub use rng::{DieSource, FixedDice, GameRng};
pub use state::{GameState, InvariantViolation, INITIAL_DIE_FACE};
