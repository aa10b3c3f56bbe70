//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of one solver run:
//! board size, population size, generation cap, tournament size, mutation rate
//! and logging level.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Board size, population size and generation cap; everything else defaulted
//! let options = EvolutionOptions::new(8, 100, 100);
//! assert_eq!(options.get_tournament_size(), 5);
//!
//! // Fluent construction
//! let options = EvolutionOptions::builder()
//!     .board_size(12)
//!     .population_size(200)
//!     .num_generations(500)
//!     .mutation_rate(0.2)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert!(options.validate().is_ok());
//! ```
//!
//! ## `LogLevel`
//!
//! - `Verbose`: a `debug` event per generation on top of everything `Minimal` logs.
//! - `Minimal`: `info` events at start, on every improvement and at termination.
//! - `None`: Disables logging.

use crate::error::{GeneticError, Result};

pub const DEFAULT_BOARD_SIZE: usize = 8;
pub const DEFAULT_POPULATION_SIZE: usize = 100;
pub const DEFAULT_NUM_GENERATIONS: usize = 100;
pub const DEFAULT_TOURNAMENT_SIZE: usize = 5;
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    board_size: usize,
    population_size: usize,
    num_generations: usize,
    tournament_size: usize,
    /// Probability that a freshly bred child gets a swap mutation
    mutation_rate: f64,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn new(board_size: usize, population_size: usize, num_generations: usize) -> Self {
        Self {
            board_size,
            population_size,
            num_generations,
            ..Self::default()
        }
    }

    pub fn get_board_size(&self) -> usize {
        self.board_size
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Sets the board size.
    pub fn set_board_size(&mut self, board_size: usize) {
        self.board_size = board_size;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the tournament size.
    pub fn set_tournament_size(&mut self, tournament_size: usize) {
        self.tournament_size = tournament_size;
    }

    /// Sets the mutation rate.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks every parameter against its valid range.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the board size, population size or
    /// tournament size is zero, or if the mutation rate lies outside `[0, 1]`.
    /// A generation cap of zero is valid and yields an empty result.
    pub fn validate(&self) -> Result<()> {
        if self.board_size < 1 {
            return Err(GeneticError::InvalidConfiguration(
                "Board size must be at least 1".to_string(),
            ));
        }

        if self.population_size < 1 {
            return Err(GeneticError::InvalidConfiguration(
                "Population size must be at least 1".to_string(),
            ));
        }

        if self.tournament_size < 1 {
            return Err(GeneticError::InvalidConfiguration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Mutation rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            population_size: DEFAULT_POPULATION_SIZE,
            num_generations: DEFAULT_NUM_GENERATIONS,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the defaults when `build` is called.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    board_size: Option<usize>,
    population_size: Option<usize>,
    num_generations: Option<usize>,
    tournament_size: Option<usize>,
    mutation_rate: Option<f64>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn board_size(mut self, value: usize) -> Self {
        self.board_size = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance. Validation happens when a solver
    /// is constructed from it.
    pub fn build(self) -> EvolutionOptions {
        EvolutionOptions {
            board_size: self.board_size.unwrap_or(DEFAULT_BOARD_SIZE),
            population_size: self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE),
            num_generations: self.num_generations.unwrap_or(DEFAULT_NUM_GENERATIONS),
            tournament_size: self.tournament_size.unwrap_or(DEFAULT_TOURNAMENT_SIZE),
            mutation_rate: self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE),
            log_level: self.log_level.unwrap_or_default(),
        }
    }
}
