//! # Puzzle Traits
//!
//! The [`Move`] and [`Puzzle`] traits are the seam between the solver and a
//! concrete puzzle implementation. The solver never inspects puzzle state; it
//! only needs to generate random moves, recognize when two adjacent moves on
//! the same face cancel or merge, and score a candidate move sequence by
//! counting solved pieces.
//!
//! ## Example
//!
//! A minimal puzzle: a bank of four-position dials, each turned independently
//! by quarter-turn increments.
//!
//! ```rust
//! use evocube::puzzle::{Move, Puzzle};
//! use evocube::rng::RandomNumberGenerator;
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
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// A single twist of the puzzle: a face together with a magnitude/direction.
///
/// Moves are immutable values. The solver requires just enough structure to
/// generate random moves and to canonicalize adjacent same-face pairs.
pub trait Move: Copy + Debug + PartialEq + Send + Sync {
    /// Draws `count` fresh random moves.
    fn random_moves(count: usize, rng: &mut RandomNumberGenerator) -> Vec<Self>;

    /// Returns `true` if both moves turn the same face.
    fn same_face(&self, other: &Self) -> bool;

    /// Returns `true` if the magnitudes of the two moves cancel out when
    /// applied back to back. Only meaningful for same-face moves.
    fn is_opposite(&self, other: &Self) -> bool;

    /// Combines two moves on the same face into a single move, e.g. two
    /// quarter turns become one half turn. Only meaningful for same-face
    /// moves whose magnitudes do not cancel.
    fn combined(&self, other: &Self) -> Self;
}

/// The scrambled puzzle state a candidate move sequence is scored against.
///
/// Value semantics are required: fitness evaluation clones the puzzle and
/// applies a candidate's algorithm to the clone, so `apply` mutating in
/// place never touches the solver's scrambled instance. `Send + Sync` allow
/// the clone-and-score step to fan out across worker threads.
pub trait Puzzle: Clone + Debug + Send + Sync {
    /// The move type this puzzle accepts.
    type Move: Move;

    /// Applies a move sequence to this state in execution order.
    fn apply(&mut self, algorithm: &[Self::Move]);

    /// The number of pieces currently in their solved position.
    fn solved_pieces(&self) -> usize;

    /// The total number of pieces; the upper bound of any fitness score.
    fn piece_count(&self) -> usize;
}
