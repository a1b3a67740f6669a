//! The randomness capability used by shuffling, pair reduction and the
//! dealer's blind draw.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness for the engine.
///
/// Every random step in a game goes through one value of this trait, so a
/// deterministic implementation makes whole games reproducible.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `0..n`.
    ///
    /// Callers never pass `n == 0`.
    fn below(&mut self, n: usize) -> usize;

    /// Uniformly permutes `items` in place.
    ///
    /// The default is a Fisher-Yates shuffle driven by [`below`](Self::below).
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

/// Seedable random source backed by ChaCha8.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Creates a random source from a seed.
    ///
    /// ```
    /// use oldmaid::{RandomSource, SeededRandom};
    ///
    /// let mut a = SeededRandom::new(7);
    /// let mut b = SeededRandom::new(7);
    /// assert_eq!(a.below(100), b.below(100));
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn below(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
