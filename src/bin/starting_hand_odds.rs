use std::process::ExitCode;

use clap::{Parser, ValueEnum, value_parser};
use holdem_odds::core::OddsError;
use holdem_odds::holdem::{OddsSimulationBuilder, Report, StartingHand};
use tracing_subscriber::EnvFilter;

const MISSING_TRIALS: &str = "ERROR: Supply a number of simulations.";
const INVALID_TRIALS: &str = "ERROR: Number of simulations must be greater than 0.";

/// Estimate how often every holdem starting hand wins heads up against a
/// random hand.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of hands to play for every starting hand. Only whole decimal
    /// numbers of at least 1 are accepted, e.g. `1000` but not `1e3`.
    #[arg(allow_negative_numbers = true)]
    trials: Option<String>,
    /// Number of parallel tasks.
    #[arg(long, short = 'j', default_value_t = 1, value_parser = value_parser!(u16).range(1..=256))]
    tasks: u16,
    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// Only simulate these starting hands, e.g. `AA,AKs,72o`.
    #[arg(long, value_delimiter = ',')]
    hands: Vec<String>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Tsv)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Tab separated table.
    Tsv,
    /// Pretty printed JSON.
    #[cfg(feature = "serde")]
    Json,
}

/// Blank counts as not given at all.
fn trials_arg(raw: Option<&str>) -> Option<&str> {
    raw.filter(|t| !t.trim().is_empty())
}

/// Only whole numbers of at least one are accepted.
fn parse_trials(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|n| *n > 0)
}

/// Exit code for a failed run. Broken invariants get their own code.
fn exit_code(e: &OddsError) -> u8 {
    if e.is_invariant_violation() { 3 } else { 2 }
}

fn fail(e: &OddsError) -> ExitCode {
    eprintln!("ERROR: {e}");
    ExitCode::from(exit_code(e))
}

fn parse_hands(names: &[String]) -> Result<Vec<StartingHand>, OddsError> {
    names
        .iter()
        .map(|name| {
            name.trim()
                .parse::<StartingHand>()
                .map_err(|_| OddsError::UnknownStartingHand(name.clone()))
        })
        .collect()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let Some(raw_trials) = trials_arg(cli.trials.as_deref()) else {
        eprintln!("{MISSING_TRIALS}");
        return ExitCode::from(1);
    };
    let Some(trials) = parse_trials(raw_trials) else {
        eprintln!("{INVALID_TRIALS}");
        return ExitCode::from(2);
    };

    let mut builder = OddsSimulationBuilder::default()
        .trials(trials)
        .num_tasks(cli.tasks as usize);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    if !cli.hands.is_empty() {
        match parse_hands(&cli.hands) {
            Ok(hands) => builder = builder.starting_hands(hands),
            Err(e) => return fail(&e),
        }
    }

    let results = match builder.build().and_then(|sim| sim.run()) {
        Ok(results) => results,
        Err(e) => return fail(&e),
    };

    let report = Report::new(results);
    match cli.format {
        Format::Tsv => print!("{report}"),
        #[cfg(feature = "serde")]
        Format::Json => match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("ERROR: {e}");
                return ExitCode::from(3);
            }
        },
    }
    ExitCode::SUCCESS
}
