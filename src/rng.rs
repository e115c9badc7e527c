//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct provides the crate-wide source of
//! randomness using the `rand` crate. A single instance is threaded by
//! mutable reference through every randomized operation (seeding, mutation,
//! crossover, parent selection), which keeps a run reproducible when the
//! generator is seeded.
//!
//! ## Example
//!
//! ```rust
//! use evocube::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::new();
//! let draw: u32 = rng.gen_range(1..=100);
//! assert!((1..=100).contains(&draw));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the random
/// draws the genetic operators need.
#[derive(Clone)]
pub struct RandomNumberGenerator {
    rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system
    /// entropy.
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

    /// Generates a random number in the given range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evocube::rng::RandomNumberGenerator;
    ///
    /// let mut rng = RandomNumberGenerator::from_seed(42);
    /// let index = rng.gen_range(0..10usize);
    /// assert!(index < 10);
    /// ```
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.rng.gen_range(range)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
