//! Game configuration.
//!
//! The board and rules are fixed; a game only chooses how many players sit
//! down and what they are called. Labels are display-only.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::player::{PlayerId, PlayerLabel};

/// Complete game configuration.
///
/// ```
/// use snakes_ladders::core::GameConfig;
///
/// let config = GameConfig::default();
/// assert_eq!(config.player_count, 2);
/// assert_eq!(config.labels[0].name, "Green");
///
/// let four = GameConfig::new(4);
/// assert_eq!(four.labels.len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    /// Display labels in turn order. Missing entries fall back to defaults.
    #[serde(default)]
    pub labels: Vec<PlayerLabel>,
}

impl GameConfig {
    /// Config for `player_count` players with default labels.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        let labels = PlayerId::all(player_count.min(255))
            .map(PlayerLabel::default_for)
            .collect();
        Self { player_count, labels }
    }

    /// Replace the display labels.
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<PlayerLabel>) -> Self {
        self.labels = labels;
        self
    }

    /// Check the player count is usable.
    pub fn validate(&self) -> EngineResult<()> {
        if (1..=255).contains(&self.player_count) {
            Ok(())
        } else {
            Err(EngineError::InvalidPlayerCount { count: self.player_count })
        }
    }

    /// Label for a player, falling back to the default for that seat.
    #[must_use]
    pub fn label(&self, player: PlayerId) -> PlayerLabel {
        self.labels
            .get(player.index())
            .cloned()
            .unwrap_or_else(|| PlayerLabel::default_for(player))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(2)
    }
}
