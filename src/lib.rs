//! Genetic algorithm search for low-conflict N-Queens placements.
//!
//! ```rust
//! use nqueens_ga::Solver;
//!
//! let mut solver = Solver::seeded(8, 100, 500, 42).unwrap();
//! let outcome = solver.evolve().unwrap();
//! if let Some(best) = outcome.best {
//!     println!("{} conflicts\n{}", best.score, best.pheno);
//! }
//! ```

pub mod error;
pub mod evolution;
pub mod phenotype;
pub mod placement;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionOutcome, EvolutionResult, Solver};
pub use placement::Placement;
