//! # snakes-ladders
//!
//! Deterministic rules engine for two-or-more-player Snakes & Ladders.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `apply_roll` maps (state, die) to (state, report)
//!    and never touches the state it was given.
//!
//! 2. **Injected randomness**: the engine accepts die values; dice live in a
//!    `DieSource` owned by the caller.
//!
//! 3. **N-Player First**: turn rotation is `(active + 1) mod player_count`.
//!    Nothing assumes two players.
//!
//! ## Modules
//!
//! - `core`: players, configuration, state, roll history, die sources, errors
//! - `board`: squares, the fixed ladder/snake table, step paths
//! - `rules`: the `RulesEngine` trait, movement resolution, outcomes
//! - `session`: caller-side driver with roll-in-flight admission control
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::{GameState, Outcome, PlayerId, RulesEngine, SnakesAndLadders};
//!
//! let engine = SnakesAndLadders::default();
//! let state = engine.initial_state();
//!
//! let (state, report) = engine.apply_roll(&state, PlayerId::new(0), 6).unwrap();
//! assert_eq!(report.outcome, Outcome::RolledSix);
//! assert_eq!(state.position(PlayerId::new(0)).get(), 7);
//! assert_eq!(state.active_player(), PlayerId::new(0));
//! # let _: GameState = state;
//! ```

pub mod board;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    DieSource, EngineError, EngineResult, FixedDice, GameConfig, GameRng, GameState, PlayerId, PlayerLabel,
    RollRecord, RollRejection,
};

pub use crate::board::{JumpKind, JumpTable, MovePath, Square};

pub use crate::rules::{Movement, Outcome, RollReport, RulesEngine, SnakesAndLadders};

pub use crate::session::{replay, GameSession};
