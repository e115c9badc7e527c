//! # evocube
//!
//! A genetic algorithm search engine for scrambled twisty puzzles.
//!
//! The crate evolves candidate move sequences ("algorithms") against one
//! fixed scrambled puzzle state. Each generation kills the worst 75% of the
//! ranked population, breeds crossover children from fitness-biased parent
//! picks, fans the survivors out into mutation seeds, and re-scores the
//! whole next generation concurrently into a ranking that is sorted by
//! descending fitness at all times.
//!
//! The puzzle itself stays behind the [`puzzle::Move`] and
//! [`puzzle::Puzzle`] traits, so any state representation with value
//! semantics and a solved-piece count plugs in.
//!
//! ## Example
//!
//! ```rust
//! use evocube::puzzle::{Move, Puzzle};
//! use evocube::rng::RandomNumberGenerator;
//! use evocube::solver::Solver;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! struct DialTurn {
//!     dial: usize,
//!     steps: u8,
//! }
//!
//! impl Move for DialTurn {
//!     fn random_moves(count: usize, rng: &mut RandomNumberGenerator) -> Vec<Self> {
//!         (0..count)
//!             .map(|_| DialTurn {
//!                 dial: rng.gen_range(0..4),
//!                 steps: rng.gen_range(0..4),
//!             })
//!             .collect()
//!     }
//!
//!     fn same_face(&self, other: &Self) -> bool {
//!         self.dial == other.dial
//!     }
//!
//!     fn is_opposite(&self, other: &Self) -> bool {
//!         (self.steps + other.steps) % 4 == 0
//!     }
//!
//!     fn combined(&self, other: &Self) -> Self {
//!         DialTurn {
//!             dial: self.dial,
//!             steps: (self.steps + other.steps) % 4,
//!         }
//!     }
//! }
//!
//! #[derive(Clone, Debug)]
//! struct DialBank {
//!     dials: [u8; 4],
//! }
//!
//! impl Puzzle for DialBank {
//!     type Move = DialTurn;
//!
//!     fn apply(&mut self, algorithm: &[DialTurn]) {
//!         for turn in algorithm {
//!             self.dials[turn.dial] = (self.dials[turn.dial] + turn.steps) % 4;
//!         }
//!     }
//!
//!     fn solved_pieces(&self) -> usize {
//!         self.dials.iter().filter(|dial| **dial == 0).count()
//!     }
//!
//!     fn piece_count(&self) -> usize {
//!         self.dials.len()
//!     }
//! }
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let scrambled = DialBank { dials: [2, 0, 1, 0] };
//!
//! let mut solver = Solver::new(scrambled, 20).unwrap();
//! for _ in 0..5 {
//!     solver.run_generation(&mut rng);
//! }
//!
//! assert_eq!(solver.generation(), 5);
//! assert_eq!(solver.population().len(), 20);
//! let best = solver.best().unwrap();
//! assert!(best.fitness <= 4.0);
//! ```

pub mod error;
pub mod individual;
pub mod puzzle;
pub mod rng;
pub mod solver;

// Re-export commonly used types for convenience
pub use error::{Result, SolverError};
pub use individual::Individual;
pub use puzzle::{Move, Puzzle};
pub use solver::{RankedPopulation, ReproductionPlan, ScoredIndividual, Solver};
