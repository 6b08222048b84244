//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Turn-order index of a player, 0-based. The engine never assumes a fixed
//! player count: rotation is always `(active + 1) mod player_count`.
//!
//! ## PlayerMap
//!
//! Per-player values (board positions, last shown die) backed by a `Vec`
//! and indexed by `PlayerId`.
//!
//! ## PlayerLabel
//!
//! Display-only name and color. The engine never looks at labels.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier supporting 1-255 players.
///
/// The first player to roll is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw turn-order index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player who rolls after this one.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
    /// assert_eq!(PlayerId::new(2).next(4), PlayerId::new(3));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Check whether this ID names a seat in a game of `player_count` players.
    #[must_use]
    pub fn is_seated(self, player_count: usize) -> bool {
        self.index() < player_count
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Display name and token color for a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLabel {
    pub name: String,
    pub color: String,
}

impl PlayerLabel {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Default label for a seat: Green and Red for the first two seats,
    /// numbered names after that.
    #[must_use]
    pub fn default_for(player: PlayerId) -> Self {
        match player.0 {
            0 => Self::new("Green", "green"),
            1 => Self::new("Red", "red"),
            n => Self::new(format!("Player {}", n + 1), "gray"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use snakes_ladders::core::{PlayerId, PlayerMap};
///
/// let mut shown: PlayerMap<u8> = PlayerMap::with_value(2, 6);
/// shown[PlayerId::new(1)] = 3;
///
/// assert_eq!(shown[PlayerId::new(0)], 6);
/// assert_eq!(shown[PlayerId::new(1)], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's entry, or `None` for an unseated ID.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_next_wraps_for_any_count() {
        for count in 1..=8usize {
            let mut player = PlayerId::new(0);
            for step in 1..=count {
                player = player.next(count);
                assert_eq!(player.index(), step % count);
            }
        }
    }

    #[test]
    fn test_is_seated() {
        assert!(PlayerId::new(1).is_seated(2));
        assert!(!PlayerId::new(2).is_seated(2));
    }

    #[test]
    fn test_default_labels() {
        assert_eq!(PlayerLabel::default_for(PlayerId::new(0)).name, "Green");
        assert_eq!(PlayerLabel::default_for(PlayerId::new(1)).color, "red");
        assert_eq!(PlayerLabel::default_for(PlayerId::new(2)).name, "Player 3");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u8> = PlayerMap::new(3, |p| p.0 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map.get(PlayerId::new(3)), None);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<u8> = PlayerMap::new(3, |p| p.0);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u8> = PlayerMap::with_value(2, 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u8> = PlayerMap::with_value(0, 1);
    }
}
