//! Die sources.
//!
//! The engine never draws randomness itself: a `DieSource` hands it an
//! already-rolled value. `GameRng` is the seeded production source,
//! `FixedDice` replays a scripted sequence.
//!
//! ```
//! use snakes_ladders::core::{DieSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same rolls
//! for _ in 0..20 {
//!     let die = a.roll();
//!     assert!((1..=6).contains(&die));
//!     assert_eq!(die, b.roll());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Anything that can produce die values.
pub trait DieSource {
    /// Roll one die. Production sources return 1-6.
    fn roll(&mut self) -> u8;
}

impl<D: DieSource + ?Sized> DieSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

impl<D: DieSource + ?Sized> DieSource for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Deterministic uniform die backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Roll a six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }
}

impl DieSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.roll_die()
    }
}

/// Scripted dice: returns the given values in order, then cycles.
///
/// Values are passed through unchecked so tests can feed the engine
/// out-of-range rolls.
#[derive(Clone, Debug)]
pub struct FixedDice {
    queue: VecDeque<u8>,
}

impl FixedDice {
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        let queue: VecDeque<u8> = values.into_iter().collect();
        assert!(!queue.is_empty(), "FixedDice needs at least one value");
        Self { queue }
    }

    /// Values left before the script repeats.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DieSource for FixedDice {
    fn roll(&mut self) -> u8 {
        let value = self.queue[0];
        self.queue.rotate_left(1);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_die_faces_in_range_and_all_seen() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 6];

        for _ in 0..600 {
            let die = rng.roll_die();
            assert!((1..=6).contains(&die));
            seen[(die - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fixed_dice_cycles() {
        let mut dice = FixedDice::new([6, 2, 9]);
        assert_eq!(dice.remaining(), 3);

        let rolls: Vec<_> = (0..5).map(|_| dice.roll()).collect();
        assert_eq!(rolls, vec![6, 2, 9, 6, 2]);
    }

    #[test]
    fn test_die_source_through_reference() {
        fn draw(mut source: impl DieSource) -> u8 {
            source.roll()
        }

        let mut dice = FixedDice::new([4, 5]);
        assert_eq!(draw(&mut dice), 4);
        assert_eq!(draw(&mut dice), 5);

        let boxed: Box<dyn DieSource> = Box::new(FixedDice::new([3]));
        assert_eq!(draw(boxed), 3);
    }
}
