use tracing::{debug, info};

use super::{
    challenge::{Challenge, DiagonalConflicts},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    phenotype::Phenotype,
    placement::Placement,
    rng::RandomNumberGenerator,
    selection::TournamentSelection,
};

/// A phenotype together with its score.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionResult<Pheno: Phenotype> {
    /// The evolved phenotype.
    pub pheno: Pheno,
    /// The score of the phenotype. Zero is a perfect score.
    pub score: usize,
}

/// Everything one call to [`EvolutionLauncher::evolve`] reports.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionOutcome<Pheno: Phenotype> {
    /// Best phenotype seen during the run, or `None` if no generation ran.
    pub best: Option<EvolutionResult<Pheno>>,
    /// Number of generations that were actually bred.
    pub generations_run: usize,
    /// Best-so-far score after each generation.
    pub history: Vec<usize>,
}

impl<Pheno: Phenotype> EvolutionOutcome<Pheno> {
    /// Whether the run found a phenotype with a perfect score.
    pub fn is_solved(&self) -> bool {
        self.best_score() == Some(0)
    }

    pub fn best_score(&self) -> Option<usize> {
        self.best.as_ref().map(|best| best.score)
    }
}

/// Runs a generational genetic algorithm with elitism, tournament selection,
/// crossover and mutation.
///
/// The launcher owns its population and its random source. Each call to
/// [`evolve`](Self::evolve) starts again from a fresh random population.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Pheno, Chall>
where
    Pheno: Phenotype,
    Chall: Challenge<Pheno>,
{
    options: EvolutionOptions,
    challenge: Chall,
    selection: TournamentSelection,
    rng: RandomNumberGenerator,
    population: Vec<Pheno>,
    /// Score of each member of `population`, index for index.
    scores: Vec<usize>,
}

/// The N-Queens solver.
pub type Solver = EvolutionLauncher<Placement, DiagonalConflicts>;

impl<Pheno, Chall> EvolutionLauncher<Pheno, Chall>
where
    Pheno: Phenotype,
    Chall: Challenge<Pheno>,
{
    /// Creates a new `EvolutionLauncher` from validated options, the challenge used
    /// to score phenotypes and the random source it will own.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the options fail validation.
    pub fn with_challenge(
        options: EvolutionOptions,
        challenge: Chall,
        rng: RandomNumberGenerator,
    ) -> Result<Self> {
        options.validate()?;
        let selection = TournamentSelection::new(options.get_tournament_size())?;

        Ok(Self {
            options,
            challenge,
            selection,
            rng,
            population: Vec::new(),
            scores: Vec::new(),
        })
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// The current population. Empty until a run has started.
    pub fn population(&self) -> &[Pheno] {
        &self.population
    }

    /// Scores a phenotype with the launcher's challenge.
    pub fn fitness(&self, phenotype: &Pheno) -> usize {
        self.challenge.score(phenotype)
    }

    /// Replaces the population with `population_size` random phenotypes.
    pub fn initialize_population(&mut self) {
        let size = self.options.get_board_size();
        let population: Vec<Pheno> = (0..self.options.get_population_size())
            .map(|_| Pheno::random(size, &mut self.rng))
            .collect();
        self.set_population(population);
    }

    /// Picks a parent from the current population by tournament.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if no population has been initialized.
    pub fn select_parent(&mut self) -> Result<Pheno> {
        let idx = self.selection.select(&self.scores, &mut self.rng)?;
        Ok(self.population[idx].clone())
    }

    /// Recombines two parents into a child.
    pub fn crossover(&mut self, parent1: &Pheno, parent2: &Pheno) -> Pheno {
        parent1.crossover(parent2, &mut self.rng)
    }

    /// Mutates a child with the configured mutation rate.
    pub fn mutate(&mut self, child: &Pheno) -> Pheno {
        child.mutate(self.options.get_mutation_rate(), &mut self.rng)
    }

    /// Evolves a fresh population until a perfect score appears or the
    /// generation cap is reached.
    ///
    /// Every generation the best member survives unchanged and the remaining
    /// `population_size - 1` slots are filled with mutated children of two
    /// tournament winners. The best-so-far result only changes when a strictly
    /// better score appears.
    ///
    /// # Errors
    ///
    /// Breeding draws from a population that always holds at least one member,
    /// so errors only surface if that invariant is broken.
    pub fn evolve(&mut self) -> Result<EvolutionOutcome<Pheno>> {
        let num_generations = self.options.get_num_generations();
        let population_size = self.options.get_population_size();
        let log_level = *self.options.get_log_level();

        self.initialize_population();

        if log_level != LogLevel::None {
            info!(
                board_size = self.options.get_board_size(),
                population_size,
                num_generations,
                "starting evolution"
            );
        }

        let mut best: Option<EvolutionResult<Pheno>> = None;
        let mut history = Vec::with_capacity(num_generations);

        for generation in 0..num_generations {
            let elite = self.best_index()?;
            let mut next_generation = Vec::with_capacity(population_size);
            next_generation.push(self.population[elite].clone());

            while next_generation.len() < population_size {
                let parent1 = self.select_parent()?;
                let parent2 = self.select_parent()?;
                let child = self.crossover(&parent1, &parent2);
                next_generation.push(self.mutate(&child));
            }

            self.set_population(next_generation);

            let current = self.best_index()?;
            let current_score = self.scores[current];
            if best.as_ref().map_or(true, |b| current_score < b.score) {
                best = Some(EvolutionResult {
                    pheno: self.population[current].clone(),
                    score: current_score,
                });
                if log_level != LogLevel::None {
                    info!(generation, score = current_score, "new best");
                }
            }

            let best_score = best.as_ref().map_or(current_score, |b| b.score);
            history.push(best_score);

            if log_level == LogLevel::Verbose {
                debug!(generation, current_score, best_score, "generation bred");
            }

            if best_score == 0 {
                break;
            }
        }

        let outcome = EvolutionOutcome {
            best,
            generations_run: history.len(),
            history,
        };

        if log_level != LogLevel::None {
            info!(
                generations_run = outcome.generations_run,
                best_score = ?outcome.best_score(),
                solved = outcome.is_solved(),
                "evolution finished"
            );
        }

        Ok(outcome)
    }

    fn set_population(&mut self, population: Vec<Pheno>) {
        self.scores = population
            .iter()
            .map(|pheno| self.challenge.score(pheno))
            .collect();
        self.population = population;
    }

    /// Index of the lowest score in the current population, first one on ties.
    fn best_index(&self) -> Result<usize> {
        self.scores
            .iter()
            .enumerate()
            .min_by_key(|&(_, score)| *score)
            .map(|(idx, _)| idx)
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }
}

impl Solver {
    /// Creates an N-Queens solver seeded from system entropy.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `board_size` or `population_size` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nqueens_ga::Solver;
    ///
    /// let mut solver = Solver::new(6, 100, 200).unwrap();
    /// let outcome = solver.evolve().unwrap();
    /// let best = outcome.best.unwrap();
    /// assert_eq!(best.pheno.len(), 6);
    /// assert_eq!(best.score, best.pheno.conflicts());
    /// ```
    pub fn new(board_size: usize, population_size: usize, num_generations: usize) -> Result<Self> {
        Self::from_options(
            EvolutionOptions::new(board_size, population_size, num_generations),
            RandomNumberGenerator::new(),
        )
    }

    /// Creates an N-Queens solver whose runs are reproducible from `seed`.
    pub fn seeded(
        board_size: usize,
        population_size: usize,
        num_generations: usize,
        seed: u64,
    ) -> Result<Self> {
        Self::from_options(
            EvolutionOptions::new(board_size, population_size, num_generations),
            RandomNumberGenerator::from_seed(seed),
        )
    }

    pub fn from_options(options: EvolutionOptions, rng: RandomNumberGenerator) -> Result<Self> {
        Self::with_challenge(options, DiagonalConflicts, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::is_permutation;

    #[test]
    fn test_initialize_population() {
        let mut solver = Solver::seeded(8, 30, 10, 1).unwrap();
        assert!(solver.population().is_empty());

        solver.initialize_population();
        assert_eq!(solver.population().len(), 30);
        for member in solver.population() {
            assert_eq!(member.len(), 8);
            assert!(is_permutation(member.columns()));
        }
    }

    #[test]
    fn test_initialize_population_replaces_previous() {
        let mut solver = Solver::seeded(8, 30, 10, 1).unwrap();
        solver.initialize_population();
        let first = solver.population().to_vec();
        solver.initialize_population();
        assert_eq!(solver.population().len(), 30);
        assert_ne!(solver.population(), first.as_slice());
    }

    #[test]
    fn test_select_parent_requires_population() {
        let mut solver = Solver::seeded(8, 30, 10, 1).unwrap();
        assert_eq!(solver.select_parent(), Err(GeneticError::EmptyPopulation));

        solver.initialize_population();
        let parent = solver.select_parent().unwrap();
        assert!(solver.population().contains(&parent));
    }

    #[test]
    fn test_select_parent_with_tiny_population() {
        let mut solver = Solver::seeded(6, 2, 10, 4).unwrap();
        solver.initialize_population();
        let best = solver
            .population()
            .iter()
            .map(|p| p.conflicts())
            .min()
            .unwrap();
        // The tournament is clamped to both members, so the better one wins.
        for _ in 0..10 {
            assert_eq!(solver.select_parent().unwrap().conflicts(), best);
        }
    }

    #[test]
    fn test_operators_preserve_permutation() {
        let mut solver = Solver::seeded(10, 20, 10, 8).unwrap();
        solver.initialize_population();
        for _ in 0..100 {
            let p1 = solver.select_parent().unwrap();
            let p2 = solver.select_parent().unwrap();
            let child = solver.crossover(&p1, &p2);
            assert!(is_permutation(child.columns()));
            let mutated = solver.mutate(&child);
            assert!(is_permutation(mutated.columns()));
        }
    }

    #[test]
    fn test_fitness_uses_challenge() {
        let solver = Solver::seeded(4, 10, 10, 0).unwrap();
        let solved = Placement::try_from(vec![2, 0, 3, 1]).unwrap();
        assert_eq!(solver.fitness(&solved), 0);
        assert_eq!(solver.fitness(&Placement::identity(4)), 6);
    }

    #[test]
    fn test_population_size_is_kept() {
        let mut solver = Solver::seeded(12, 17, 5, 2).unwrap();
        let outcome = solver.evolve().unwrap();
        assert_eq!(solver.population().len(), 17);
        assert!(outcome.generations_run <= 5);
    }

    #[test]
    fn test_best_is_in_final_population_when_elite_survives() {
        let mut solver = Solver::seeded(10, 40, 30, 6).unwrap();
        let outcome = solver.evolve().unwrap();
        let best = outcome.best.unwrap();
        let final_best = solver.population().iter().map(|p| p.conflicts()).min().unwrap();
        // Elitism makes the final population at least as good as anything seen.
        assert_eq!(final_best, best.score);
    }

    #[test]
    fn test_evolve_discards_previous_population() {
        let mut solver = Solver::seeded(8, 40, 3, 13).unwrap();
        solver.evolve().unwrap();

        // Leave behind a population of the worst possible boards.
        solver.set_population(vec![Placement::identity(8); 40]);
        assert!(solver.scores.iter().all(|&score| score == 28));

        let outcome = solver.evolve().unwrap();
        assert!(outcome.history.iter().all(|&score| score < 28));
        assert!(solver.population().iter().any(|p| *p != Placement::identity(8)));
    }

    #[test]
    fn test_evolve_breeds_through_public_operators() {
        let mut evolved = Solver::seeded(8, 20, 1, 31).unwrap();
        let mut replayed = evolved.clone();

        evolved.evolve().unwrap();

        replayed.initialize_population();
        let elite = replayed.best_index().unwrap();
        let mut expected = vec![replayed.population()[elite].clone()];
        while expected.len() < 20 {
            let parent1 = replayed.select_parent().unwrap();
            let parent2 = replayed.select_parent().unwrap();
            let child = replayed.crossover(&parent1, &parent2);
            expected.push(replayed.mutate(&child));
        }

        assert_eq!(evolved.population(), expected.as_slice());
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            Solver::new(0, 10, 10),
            Err(GeneticError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Solver::new(8, 0, 10),
            Err(GeneticError::InvalidConfiguration(_))
        ));
    }
}
