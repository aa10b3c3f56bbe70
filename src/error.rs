//! # Error Types
//!
//! This module defines the error type shared by the solver. Configuration
//! problems are rejected when a solver is built, never deep inside the
//! evolution loop.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use nqueens_ga::error::{GeneticError, Result};
//! use nqueens_ga::Solver;
//!
//! fn build() -> Result<Solver> {
//!     Solver::new(8, 100, 100)
//! }
//!
//! match Solver::new(0, 100, 100) {
//!     Err(GeneticError::InvalidConfiguration(msg)) => assert!(msg.contains("Board size")),
//!     _ => panic!("a zero-sized board must be rejected"),
//! }
//! # build().unwrap();
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use nqueens_ga::error::{GeneticError, OptionExt};
//!
//! fn lowest(scores: &[usize]) -> nqueens_ga::error::Result<usize> {
//!     scores.iter().min().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(lowest(&[3, 1, 2]).unwrap(), 1);
//! assert!(lowest(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneticError {
    /// A board size, population size, tournament size or mutation rate is
    /// outside its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An operation needed a population but none has been initialized.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A caller-supplied column vector is not a permutation of `0..n`.
    #[error("Invalid placement: {0}")]
    InvalidPlacement(String),
}

/// A specialized Result type for solver operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GeneticError::InvalidConfiguration("Board size must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Board size must be at least 1"
        );

        let err = GeneticError::InvalidPlacement("column 4 appears twice".to_string());
        assert_eq!(err.to_string(), "Invalid placement: column 4 appears twice");
    }

    #[test]
    fn test_option_ext() {
        let some: Option<usize> = Some(3);
        assert_eq!(some.ok_or_else_genetic(|| GeneticError::EmptyPopulation), Ok(3));

        let none: Option<usize> = None;
        assert_eq!(
            none.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        );
    }
}
