//! # Ranked Population
//!
//! Concurrent fitness scoring with sorted-merge accumulation. Scoring a
//! population fans one fitness computation per individual out across the
//! rayon pool; each finished result is merged into a shared accumulator that
//! is kept sorted by descending fitness at all times. The accumulator is the
//! only shared mutable state in the crate and every insertion goes through a
//! single mutex, so workers compute fitness in parallel but merge one at a
//! time. `rank` returns only once every submitted computation has been
//! merged.

use std::sync::Mutex;

use rayon::prelude::*;

use crate::individual::Individual;
use crate::puzzle::{Move, Puzzle};

/// An individual together with its fitness against the scrambled puzzle.
#[derive(Debug, Clone)]
pub struct ScoredIndividual<M: Move> {
    /// The scored candidate.
    pub individual: Individual<M>,
    /// Solved-piece count after applying the candidate's algorithm.
    pub fitness: f64,
}

/// A population ordered by descending fitness.
///
/// The ordering invariant holds at every point in time, including while a
/// ranking is still being merged. Ties are placed after existing entries of
/// equal fitness; under concurrent completion the relative order of equal
/// scores is therefore stable per insertion but not deterministic across
/// runs.
#[derive(Debug, Clone)]
pub struct RankedPopulation<M: Move> {
    entries: Vec<ScoredIndividual<M>>,
}

impl<M: Move> RankedPopulation<M> {
    /// The ranking a solver starts with before its first generation.
    pub(crate) fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Scores every individual against `puzzle` in parallel and returns the
    /// full population sorted by descending fitness.
    ///
    /// Blocks until every fitness computation has been accounted for.
    pub fn rank<P>(individuals: Vec<Individual<M>>, puzzle: &P) -> Self
    where
        P: Puzzle<Move = M>,
    {
        let ranked = Mutex::new(Vec::with_capacity(individuals.len()));

        individuals.into_par_iter().for_each(|individual| {
            // Score outside the lock; only the merge is serialized.
            let fitness = individual.fitness(puzzle);

            let mut entries = ranked.lock().unwrap();
            let at = insertion_index(&entries, fitness);
            entries.insert(at, ScoredIndividual { individual, fitness });
        });

        Self {
            entries: ranked.into_inner().unwrap(),
        }
    }

    /// The ranked entries, best first.
    pub fn entries(&self) -> &[ScoredIndividual<M>] {
        &self.entries
    }

    /// The best-scoring entry, if the population is non-empty.
    pub fn best(&self) -> Option<&ScoredIndividual<M>> {
        self.entries.first()
    }

    /// Number of ranked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` before the first generation has been ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Binary search for the merge position: the index just past the last entry
/// whose fitness is still greater than or equal to `fitness`.
fn insertion_index<M: Move>(entries: &[ScoredIndividual<M>], fitness: f64) -> usize {
    entries.partition_point(|entry| entry.fitness >= fitness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomNumberGenerator;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct SetScore(usize);

    impl Move for SetScore {
        fn random_moves(count: usize, rng: &mut RandomNumberGenerator) -> Vec<Self> {
            (0..count).map(|_| SetScore(rng.gen_range(0..10))).collect()
        }

        fn same_face(&self, _other: &Self) -> bool {
            false
        }

        fn is_opposite(&self, _other: &Self) -> bool {
            false
        }

        fn combined(&self, other: &Self) -> Self {
            SetScore(self.0 + other.0)
        }
    }

    // Scores a one-move algorithm with the move's own value; enough to drive
    // the merge with hand-picked fitness values.
    #[derive(Debug, Clone)]
    struct ScoreBoard {
        pieces: usize,
    }

    impl Puzzle for ScoreBoard {
        type Move = SetScore;

        fn apply(&mut self, algorithm: &[SetScore]) {
            self.pieces = algorithm.iter().map(|m| m.0).sum();
        }

        fn solved_pieces(&self) -> usize {
            self.pieces
        }

        fn piece_count(&self) -> usize {
            10
        }
    }

    fn scored(fitness: f64) -> ScoredIndividual<SetScore> {
        ScoredIndividual {
            individual: Individual::new(Vec::new()),
            fitness,
        }
    }

    #[test]
    fn test_insertion_index_places_ties_after_equal_entries() {
        let entries = vec![scored(5.0), scored(3.0), scored(3.0), scored(1.0)];

        assert_eq!(insertion_index(&entries, 6.0), 0);
        assert_eq!(insertion_index(&entries, 3.0), 3);
        assert_eq!(insertion_index(&entries, 2.0), 3);
        assert_eq!(insertion_index(&entries, 0.5), 4);
    }

    #[test]
    fn test_insertion_index_on_an_empty_accumulator() {
        let entries: Vec<ScoredIndividual<SetScore>> = Vec::new();

        assert_eq!(insertion_index(&entries, 4.0), 0);
    }

    #[test]
    fn test_rank_sorts_descending_with_duplicates() {
        let values = [3, 7, 7, 1, 9, 0, 7, 3];
        let individuals: Vec<Individual<SetScore>> = values
            .iter()
            .map(|v| Individual::new(vec![SetScore(*v)]))
            .collect();
        let board = ScoreBoard { pieces: 0 };

        let ranked = RankedPopulation::rank(individuals, &board);

        let fitness: Vec<f64> = ranked.entries().iter().map(|e| e.fitness).collect();
        assert_eq!(fitness, vec![9.0, 7.0, 7.0, 7.0, 3.0, 3.0, 1.0, 0.0]);
        assert_eq!(ranked.best().unwrap().fitness, 9.0);
    }

    #[test]
    fn test_rank_of_an_empty_population() {
        let board = ScoreBoard { pieces: 0 };
        let ranked = RankedPopulation::rank(Vec::<Individual<SetScore>>::new(), &board);

        assert!(ranked.is_empty());
        assert!(ranked.best().is_none());
    }
}
