//! Error types for the rules engine and session driver.
//!
//! Every error is a rejected precondition: the state passed in is left
//! untouched and the caller decides whether to ignore or surface it.

use thiserror::Error;

use super::player::PlayerId;

/// Why a roll request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollRejection {
    /// A winner is already decided.
    GameOver { winner: PlayerId },
    /// Someone other than the active player asked to roll.
    NotYourTurn { player: PlayerId, active: PlayerId },
}

impl std::fmt::Display for RollRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RollRejection::GameOver { winner } => write!(f, "game already won by {}", winner),
            RollRejection::NotYourTurn { player, active } => {
                write!(f, "{} rolled out of turn, {} is active", player, active)
            }
        }
    }
}

/// Errors that can occur while driving a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Die value outside 1-6
    #[error("Invalid die value: {value} (must be 1-6)")]
    InvalidDieValue { value: u8 },

    /// Roll requested when no roll is permitted
    #[error("Invalid roll: {reason}")]
    InvalidRoll { reason: RollRejection },

    /// Square number outside the board
    #[error("Invalid square: {value} (must be 1-100)")]
    InvalidSquare { value: u8 },

    /// Player count outside 1-255
    #[error("Invalid player count: {count} (must be 1-255)")]
    InvalidPlayerCount { count: usize },

    /// Second roll requested while one is still being presented
    #[error("{player} already has a roll in flight")]
    RollInFlight { player: PlayerId },

    /// Roll completion requested with nothing drawn
    #[error("No roll is pending")]
    NoRollPending,
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
