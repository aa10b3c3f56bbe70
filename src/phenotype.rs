//! # Phenotype Trait
//!
//! The `Phenotype` trait defines the interface for types that represent individuals
//! in the evolutionary search: how to create a random one, how to recombine two of
//! them and how to mutate one.
//!
//! All operators have value semantics. They borrow their inputs and return a fresh
//! individual, so population slots never alias each other's storage.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::phenotype::Phenotype;
//! use nqueens_ga::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug)]
//! struct Bits(Vec<bool>);
//!
//! impl Phenotype for Bits {
//!     fn random(size: usize, rng: &mut RandomNumberGenerator) -> Self {
//!         Bits((0..size).map(|_| rng.chance(0.5)).collect())
//!     }
//!
//!     fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Self {
//!         let point = rng.index(self.0.len().max(1));
//!         Bits(self.0[..point].iter().chain(&other.0[point..]).copied().collect())
//!     }
//!
//!     fn mutate(&self, mutation_rate: f64, rng: &mut RandomNumberGenerator) -> Self {
//!         Bits(self.0.iter().map(|&b| b ^ rng.chance(mutation_rate)).collect())
//!     }
//! }
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let a = Bits::random(8, &mut rng);
//! let b = Bits::random(8, &mut rng);
//! let child = a.crossover(&b, &mut rng).mutate(0.1, &mut rng);
//! assert_eq!(child.0.len(), 8);
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for types that represent individuals in an evolutionary algorithm.
///
/// Types implementing this trait must also implement `Clone`, `Debug`, `Send`, and `Sync`
/// so that a solver owning a population of them can be moved across threads.
pub trait Phenotype: Clone + Debug + Send + Sync {
    /// Creates a uniformly random individual of the given size.
    fn random(size: usize, rng: &mut RandomNumberGenerator) -> Self;

    /// Combines `self` (the first parent) with `other` (the second parent) and
    /// returns the child. Neither parent is modified.
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Self;

    /// Returns a possibly modified copy of `self`. `mutation_rate` is the
    /// probability that a mutation is applied at all.
    fn mutate(&self, mutation_rate: f64, rng: &mut RandomNumberGenerator) -> Self;
}
