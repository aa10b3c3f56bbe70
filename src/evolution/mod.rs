pub mod challenge;
pub mod launcher;
pub mod options;

pub use challenge::{Challenge, DiagonalConflicts};
pub use launcher::{EvolutionLauncher, EvolutionOutcome, EvolutionResult, Solver};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
