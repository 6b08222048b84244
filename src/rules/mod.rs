//! Rules engine: movement resolution, roll outcomes, and the turn state
//! machine.
//!
//! `RulesEngine` is the call contract the presentation layer drives:
//! - whether a roll is permitted
//! - how a die moves the active token and who rolls next
//! - when the game is won
//!
//! The engine never draws dice and never holds game state.

pub mod engine;
pub mod movement;
pub mod outcome;

pub use engine::{RulesEngine, SnakesAndLadders};
pub use movement::{resolve_movement, walk, Movement};
pub use outcome::{Outcome, RollReport};
