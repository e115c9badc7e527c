//! # Solver
//!
//! The population controller. A [`Solver`] owns the scrambled puzzle, the
//! derived reproduction quotas, the completed-generation counter and the
//! current ranked population, and advances the search one whole generation
//! at a time.
//!
//! Each [`run_generation`](Solver::run_generation) call is a single
//! transaction: read the previous ranking (or seed a random population on
//! the first call), apply the kill/breed/mutate pipeline to produce exactly
//! `population_size` candidates, re-score them all through the concurrent
//! ranking merge, and only then replace the population and bump the counter.
//! The call is synchronous; it returns after every fitness computation of
//! the generation has been merged.

mod plan;
mod ranking;

pub use plan::ReproductionPlan;
pub use ranking::{RankedPopulation, ScoredIndividual};

use tracing::debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::puzzle::Puzzle;
use crate::rng::RandomNumberGenerator;

/// Evolves candidate move sequences against one scrambled puzzle state.
///
/// The scrambled puzzle is immutable for the solver's lifetime; fitness
/// evaluation always works on clones of it.
#[derive(Debug, Clone)]
pub struct Solver<P: Puzzle> {
    puzzle: P,
    plan: ReproductionPlan,
    generation: u64,
    population: RankedPopulation<P::Move>,
}

impl<P: Puzzle> Solver<P> {
    /// Creates a solver for `puzzle` with a fixed target population size.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::Configuration`] when `population_size`
    /// is too small for the reproduction quotas (minimum is 5).
    pub fn new(puzzle: P, population_size: usize) -> Result<Self> {
        let plan = ReproductionPlan::new(population_size)?;

        Ok(Self {
            puzzle,
            plan,
            generation: 0,
            population: RankedPopulation::empty(),
        })
    }

    /// Runs one full generation: selection, reproduction, mutation and
    /// concurrent re-scoring.
    ///
    /// The first call seeds a random population of single-move individuals
    /// instead of breeding. Afterwards [`population`](Self::population)
    /// holds exactly `population_size` entries sorted by descending fitness.
    pub fn run_generation(&mut self, rng: &mut RandomNumberGenerator) {
        let next = if self.population.is_empty() {
            Individual::seed_population(self.plan.population_size(), rng)
        } else {
            self.breed(rng)
        };

        self.population = RankedPopulation::rank(next, &self.puzzle);
        self.generation += 1;

        debug!(
            generation = self.generation,
            best_fitness = self.population.best().map_or(0.0, |best| best.fitness),
            "generation ranked"
        );
    }

    /// The kill/breed/mutate pipeline producing the next generation's
    /// candidates from the current ranking.
    fn breed(&self, rng: &mut RandomNumberGenerator) -> Vec<Individual<P::Move>> {
        // Killing the worst 75% is a truncation of the descending ranking.
        let survivors = &self.population.entries()[..self.plan.survivor_count()];

        let children: Vec<Individual<P::Move>> = (0..self.plan.child_count())
            .map(|_| {
                let first = &survivors[biased_rank(survivors.len(), rng)].individual;
                let second = &survivors[biased_rank(survivors.len(), rng)].individual;
                first.crossover(second, rng)
            })
            .collect();

        let (top, remaining) = survivors.split_at(self.plan.top_count());

        let mut pool: Vec<Individual<P::Move>> = Vec::with_capacity(
            self.plan.top_count() * self.plan.top_fanout()
                + self.plan.child_count()
                + self.plan.remaining_count() * self.plan.remaining_fanout(),
        );
        for entry in top {
            for _ in 0..self.plan.top_fanout() {
                pool.push(entry.individual.clone());
            }
        }
        pool.extend(children);
        for entry in remaining {
            for _ in 0..self.plan.remaining_fanout() {
                pool.push(entry.individual.clone());
            }
        }

        // The derived fan-out may overshoot the quota; cut back before the
        // mutation sweep so the totals reconstitute the population size.
        pool.truncate(self.plan.offspring_count());

        let mut next: Vec<Individual<P::Move>> = survivors
            .iter()
            .map(|entry| entry.individual.clone())
            .collect();
        next.extend(pool.into_iter().map(|individual| individual.mutate(rng)));
        next
    }

    /// Number of completed generations: 0 before the first
    /// [`run_generation`](Self::run_generation) call.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current ranked population, best first. Empty before the first
    /// generation.
    pub fn population(&self) -> &RankedPopulation<P::Move> {
        &self.population
    }

    /// The best candidate found so far, if any generation has run.
    pub fn best(&self) -> Option<&ScoredIndividual<P::Move>> {
        self.population.best()
    }

    /// The fixed target population size.
    pub fn population_size(&self) -> usize {
        self.plan.population_size()
    }

    /// The scrambled puzzle the search runs against.
    pub fn puzzle(&self) -> &P {
        &self.puzzle
    }
}

/// Fitness-biased pick over a pool sorted by descending fitness: a uniform
/// index in `[0, len)` scaled down by a second uniform draw, skewing the
/// pick toward the front of the ranking.
fn biased_rank(len: usize, rng: &mut RandomNumberGenerator) -> usize {
    let base = rng.gen_range(0..len);
    let scale: u32 = rng.gen_range(0..=1000);
    (base as f64 * f64::from(scale) / 1000.0).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biased_rank_stays_in_bounds_and_skews_forward() {
        let mut rng = RandomNumberGenerator::from_seed(11);
        let len = 8;
        let mut counts = vec![0usize; len];

        for _ in 0..4000 {
            counts[biased_rank(len, &mut rng)] += 1;
        }

        // Every draw lands in bounds (the indexing above would panic
        // otherwise) and the front of the ranking is favored.
        assert!(counts[0] > counts[len - 1]);
    }
}
