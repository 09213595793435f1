//! Holdem specific code: the 169 starting hands and the Monte Carlo
//! simulation that estimates how often each of them wins heads up.

/// Module that can generate the cards for a starting hand.
mod starting_hand;
/// Export `StartingHand`
pub use self::starting_hand::{StartingHand, Suitedness};

/// Win, tie and loss counting.
mod stats;
/// Export the counters and percentages.
pub use self::stats::{CategoryStats, Outcome, Percentages};

/// Module for playing out single hands against a random opponent.
mod trial;
/// Export the trial runners.
pub use self::trial::{
    BOARD_SIZE, DEAL_SIZE, HOLE_SIZE, REMAINING_DECK_SIZE, run_trial, run_trials,
    simulate_holding,
};

/// Running every starting hand, optionally on several threads.
mod simulation;
/// Export `OddsSimulation` and its builder.
pub use self::simulation::{CategoryResult, OddsSimulation, OddsSimulationBuilder};

/// Ranking and printing results.
mod report;
/// Export `Report`
pub use self::report::{HEADER, Report, ReportRow, rank_results};
