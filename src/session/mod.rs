//! Game sessions: the caller-side loop around the pure engine.
//!
//! A `GameSession` owns what the engine deliberately does not:
//! - the current `GameState`
//! - a die source
//! - a roll-in-flight flag so a second roll cannot land while the first
//!   one is still being presented
//! - the roll history, as a persistent vector so sessions clone cheaply
//!
//! `replay` rebuilds a state from die values alone.

mod game;

pub use game::{replay, GameSession};
