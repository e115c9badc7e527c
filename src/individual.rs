//! # Individual
//!
//! An [`Individual`] is one candidate solution: an ordered sequence of moves
//! (its "algorithm") applied to the scrambled puzzle. Individuals are
//! immutable values; every genetic operator returns a new `Individual`
//! rather than editing in place.
//!
//! The operator parameterization is deliberately skewed: mutation always
//! splices in a fresh random run of moves, while trailing-move removal and
//! random-position splicing are rare. All three checks gate off the *same*
//! random draw, so in the rare draw where the trailing move is dropped, the
//! replacement run is also spliced at a random position. The correlation is
//! part of the search behavior; do not split the draw.

use crate::puzzle::{Move, Puzzle};
use crate::rng::RandomNumberGenerator;

/// Chance in [1, 100] that mutation drops the trailing move, and that the
/// fresh run is spliced at a random position instead of appended.
const MOVE_REMOVAL_CHANCE: u32 = 1;

/// Chance in [1, 100] that mutation splices in a fresh random run.
/// Currently unconditional.
const MOVE_ADDITION_CHANCE: u32 = 100;

/// Bounds of the random run length a mutation splices in.
const MIN_MUTATION_RUN: usize = 7;
const MAX_MUTATION_RUN: usize = 25;

/// Parents shorter than this skip crossover entirely.
const MIN_CROSSOVER_LEN: usize = 4;

/// One candidate solution in the population: an ordered move sequence.
///
/// Equality is content equality over the algorithm; the population neither
/// deduplicates nor relies on identity beyond that.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<M: Move> {
    algorithm: Vec<M>,
}

impl<M: Move> Individual<M> {
    /// Wraps a move sequence as an individual.
    pub fn new(algorithm: Vec<M>) -> Self {
        Self { algorithm }
    }

    /// The move sequence, in execution order.
    pub fn algorithm(&self) -> &[M] {
        &self.algorithm
    }

    /// Produces `count` individuals, each with a single random move.
    ///
    /// This is how the solver seeds its first generation.
    pub fn seed_population(count: usize, rng: &mut RandomNumberGenerator) -> Vec<Self> {
        (0..count)
            .map(|_| Self::new(M::random_moves(1, rng)))
            .collect()
    }

    /// Scores this individual against `puzzle`: clones the state, applies the
    /// algorithm to the clone, and returns the solved-piece count.
    ///
    /// The caller's puzzle instance is never mutated.
    pub fn fitness<P>(&self, puzzle: &P) -> f64
    where
        P: Puzzle<Move = M>,
    {
        let mut scratch = puzzle.clone();
        scratch.apply(&self.algorithm);
        scratch.solved_pieces() as f64
    }

    /// Returns a mutated copy of this individual.
    ///
    /// One draw in [1, 100] gates every check (see the module docs). The
    /// result is passed through [`simplify`](Self::simplify) before being
    /// returned.
    pub fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self {
        let draw: u32 = rng.gen_range(1..=100);
        let mut algorithm = self.algorithm.clone();

        if draw <= MOVE_REMOVAL_CHANCE {
            algorithm.pop();
        }

        if draw <= MOVE_ADDITION_CHANCE {
            let run_len = rng.gen_range(MIN_MUTATION_RUN..=MAX_MUTATION_RUN);
            let run = M::random_moves(run_len, rng);

            if draw <= MOVE_REMOVAL_CHANCE && !algorithm.is_empty() {
                let at = rng.gen_range(0..algorithm.len());
                algorithm.splice(at..at, run);
            } else {
                algorithm.extend(run);
            }
        }

        Self::new(algorithm).simplify()
    }

    /// Returns a crossover child of this individual and `partner`.
    ///
    /// A random-length prefix of this individual's algorithm (length in
    /// `[2, len - 1]`) is concatenated with a random-length suffix of the
    /// partner's (same bounds over the partner's length), then simplified.
    /// If either parent is shorter than four moves the operation falls back
    /// to returning `self` unchanged; this is not an error.
    pub fn crossover(&self, partner: &Self, rng: &mut RandomNumberGenerator) -> Self {
        if self.algorithm.len() < MIN_CROSSOVER_LEN || partner.algorithm.len() < MIN_CROSSOVER_LEN {
            return self.clone();
        }

        let prefix_len = rng.gen_range(2..self.algorithm.len());
        let suffix_len = rng.gen_range(2..partner.algorithm.len());

        let mut algorithm = self.algorithm[..prefix_len].to_vec();
        algorithm.extend_from_slice(&partner.algorithm[partner.algorithm.len() - suffix_len..]);

        Self::new(algorithm).simplify()
    }

    /// Canonicalizes the algorithm in a single backward pass.
    ///
    /// Adjacent moves on the same face are removed when their magnitudes
    /// cancel and merged into one move otherwise. After a removal or merge
    /// the scan steps past the now-shifted pair immediately behind it before
    /// continuing backward, so a merge can leave a newly adjacent cancelable
    /// pair in place. The pass is not a fixed point.
    pub fn simplify(&self) -> Self {
        if self.algorithm.len() < 2 {
            return self.clone();
        }

        let mut moves = self.algorithm.clone();
        let mut i = moves.len() - 1;

        while i > 0 {
            if moves[i - 1].same_face(&moves[i]) {
                if moves[i - 1].is_opposite(&moves[i]) {
                    moves.drain(i - 1..=i);
                } else {
                    moves[i - 1] = moves[i - 1].combined(&moves[i]);
                    moves.remove(i);
                }
                if i < 2 {
                    break;
                }
                i -= 2;
            } else {
                i -= 1;
            }
        }

        Self::new(moves)
    }
}
