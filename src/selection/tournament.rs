use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A selection strategy that picks parents through tournament selection.
///
/// Each tournament draws `tournament_size` distinct individuals uniformly at random,
/// without replacement, and the one with the lowest score wins. When several
/// participants share the lowest score, the one drawn first wins.
///
/// If the population is smaller than the tournament, the tournament is clamped to
/// the whole population instead of failing.
///
/// # Examples
///
/// ```
/// use nqueens_ga::selection::TournamentSelection;
/// use nqueens_ga::rng::RandomNumberGenerator;
///
/// let scores = vec![4, 0, 3, 2, 5];
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// // A tournament over the whole population always finds the best individual.
/// let selection = TournamentSelection::new(5).unwrap();
/// assert_eq!(selection.select(&scores, &mut rng).unwrap(), 1);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::InvalidConfiguration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament over `scores` and returns the index of the winner.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if `scores` is empty.
    pub fn select(&self, scores: &[usize], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if scores.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let participants = rng.sample_indices(scores.len(), self.tournament_size);

        // `min_by_key` keeps the first of several equal minima.
        participants
            .into_iter()
            .min_by_key(|&idx| scores[idx])
            .ok_or(GeneticError::EmptyPopulation)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 5 }
    }
}
