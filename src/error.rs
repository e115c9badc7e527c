//! # Error Types
//!
//! This module defines the error type for the solver. The search itself is
//! total over well-formed inputs: once a [`crate::solver::Solver`] has been
//! constructed, running generations cannot fail. The only failure mode is
//! configuration misuse, which is rejected up front at construction time.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evocube::error::{Result, SolverError};
//!
//! fn validate(population_size: usize) -> Result<usize> {
//!     if population_size < 5 {
//!         return Err(SolverError::Configuration(format!(
//!             "population size {population_size} is too small"
//!         )));
//!     }
//!     Ok(population_size)
//! }
//!
//! assert!(validate(2).is_err());
//! assert!(validate(20).is_ok());
//! ```

use thiserror::Error;

/// Represents errors that can occur while setting up the solver.
///
/// Degenerate inputs to the genetic operators themselves (short algorithms in
/// crossover, empty algorithms in mutation) are explicit no-op fallbacks, not
/// errors; turning them into errors would change the search dynamics.
#[derive(Error, Debug)]
pub enum SolverError {
    /// Error that occurs when an invalid configuration is provided, e.g. a
    /// population size too small to fill every reproduction bucket.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A specialized Result type for solver operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `SolverError`.
pub type Result<T> = std::result::Result<T, SolverError>;
