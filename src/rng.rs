//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the solver's only source of randomness.
//! Each solver owns one, so runs never touch process-wide random state and a
//! seeded generator reproduces a run exactly.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let mut columns: Vec<usize> = (0..8).collect();
//! rng.shuffle(&mut columns);
//!
//! let (i, j) = rng.distinct_pair(columns.len());
//! assert_ne!(i, j);
//! ```

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the handful of draws
/// the genetic operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns an index drawn uniformly from `0..upper`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Returns `true` with the given probability, which must lie in `[0, 1]`.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Shuffles the slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }

    /// Draws `amount` distinct indices from `0..length` in random order.
    ///
    /// `amount` is clamped to `length`, so asking for more indices than exist
    /// returns a permutation of all of them.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, length, amount.min(length)).into_vec()
    }

    /// Draws two distinct indices from `0..length`.
    ///
    /// # Panics
    ///
    /// Panics if `length` is smaller than two.
    pub fn distinct_pair(&mut self, length: usize) -> (usize, usize) {
        assert!(length >= 2, "a distinct pair needs at least two positions");
        let picked = rand::seq::index::sample(&mut self.rng, length, 2);
        (picked.index(0), picked.index(1))
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
