//! `nqueens`: command-line front end for the N-Queens genetic solver.

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use nqueens_ga::{
    evolution::{EvolutionOptions, LogLevel},
    rng::RandomNumberGenerator,
    EvolutionOutcome, Placement, Solver,
};
use tracing::Level;

/// Smallest board the front end accepts; below this the search is degenerate.
const MIN_BOARD_SIZE: usize = 4;

#[derive(Parser, Debug)]
#[command(name = "nqueens", version, about = "N-Queens genetic algorithm solver")]
struct Cli {
    /// Board size (N)
    #[arg(short = 'n', long, default_value_t = 8, env = "NQUEENS_BOARD_SIZE")]
    board_size: usize,

    /// Number of placements in each generation
    #[arg(short, long, default_value_t = 100, env = "NQUEENS_POPULATION_SIZE")]
    population_size: usize,

    /// Maximum number of generations to evolve
    #[arg(short, long, default_value_t = 100, env = "NQUEENS_GENERATIONS")]
    generations: usize,

    /// Seed for a reproducible run
    #[arg(long, env = "NQUEENS_SEED")]
    seed: Option<u64>,

    /// Log progress; repeat for per-generation detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> LogLevel {
        match self.verbose {
            0 => LogLevel::None,
            1 => LogLevel::Minimal,
            _ => LogLevel::Verbose,
        }
    }
}

/// Validates the board size, runs the solver and formats the result.
///
/// The error string is what the user sees before a failing exit.
fn report(cli: &Cli) -> Result<String, String> {
    if cli.board_size < MIN_BOARD_SIZE {
        return Err(format!("N must be at least {}", MIN_BOARD_SIZE));
    }

    let options = EvolutionOptions::builder()
        .board_size(cli.board_size)
        .population_size(cli.population_size)
        .num_generations(cli.generations)
        .log_level(cli.log_level())
        .build();
    let rng = cli
        .seed
        .map_or_else(RandomNumberGenerator::new, RandomNumberGenerator::from_seed);

    Solver::from_options(options, rng)
        .and_then(|mut solver| solver.evolve())
        .map(|outcome| render_outcome(&outcome))
        .map_err(|e| format!("Invalid input values: {}", e))
}

fn render_outcome(outcome: &EvolutionOutcome<Placement>) -> String {
    match &outcome.best {
        Some(best) if best.score == 0 => {
            format!("Solution found! Conflicts: {}\n{}", best.score, best.pheno)
        }
        Some(best) => format!(
            "No perfect solution found. Best conflicts: {}\n{}",
            best.score, best.pheno
        ),
        None => "No generations were run.\n".to_string(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let max_level = match cli.log_level() {
        LogLevel::Verbose => Level::DEBUG,
        LogLevel::Minimal | LogLevel::None => Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();

    match report(&cli) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nqueens_ga::EvolutionResult;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("nqueens").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_rejects_boards_below_four() {
        assert_eq!(
            report(&cli(&["-n", "3"])),
            Err("N must be at least 4".to_string())
        );
    }

    #[test]
    fn test_rejects_zero_population() {
        let result = report(&cli(&["-n", "8", "-p", "0"]));
        assert!(result.unwrap_err().starts_with("Invalid input values"));
    }

    #[test]
    fn test_zero_generations_message() {
        assert_eq!(
            report(&cli(&["-n", "8", "-g", "0", "--seed", "1"])),
            Ok("No generations were run.\n".to_string())
        );
    }

    #[test]
    fn test_report_prints_board() {
        let text = report(&cli(&["-n", "4", "-p", "50", "-g", "200", "--seed", "3"])).unwrap();
        let mut lines = text.lines();
        let headline = lines.next().unwrap();
        assert!(
            headline.starts_with("Solution found!")
                || headline.starts_with("No perfect solution found."),
            "unexpected headline {:?}",
            headline
        );
        assert_eq!(lines.count(), 4);
    }

    #[test]
    fn test_render_solved_outcome() {
        let pheno = Placement::try_from(vec![1, 3, 0, 2]).unwrap();
        let outcome = EvolutionOutcome {
            best: Some(EvolutionResult { pheno: pheno.clone(), score: 0 }),
            generations_run: 1,
            history: vec![0],
        };
        assert_eq!(
            render_outcome(&outcome),
            format!("Solution found! Conflicts: 0\n{}", pheno)
        );
    }

    #[test]
    fn test_render_unsolved_outcome() {
        let pheno = Placement::identity(4);
        let outcome = EvolutionOutcome {
            best: Some(EvolutionResult { pheno: pheno.clone(), score: 6 }),
            generations_run: 3,
            history: vec![6, 6, 6],
        };
        assert_eq!(
            render_outcome(&outcome),
            format!("No perfect solution found. Best conflicts: 6\n{}", pheno)
        );
    }

    #[test]
    fn test_verbosity_maps_to_log_level() {
        assert_eq!(cli(&[]).log_level(), LogLevel::None);
        assert_eq!(cli(&["-v"]).log_level(), LogLevel::Minimal);
        assert_eq!(cli(&["-vv"]).log_level(), LogLevel::Verbose);
    }
}
