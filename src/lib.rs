//! # Holdem Odds
//!
//! Estimates how often each of the 169 texas holdem starting hands wins,
//! ties and loses against a single random opponent by playing out a large
//! number of random boards.
//!
//! ```
//! use holdem_odds::holdem::{OddsSimulationBuilder, Report};
//!
//! let results = OddsSimulationBuilder::default()
//!     .starting_hands(vec!["AA".parse().unwrap()])
//!     .trials(50)
//!     .seed(7)
//!     .build()
//!     .unwrap()
//!     .run()
//!     .unwrap();
//! assert_eq!(50, results[0].stats.played());
//! println!("{}", Report::new(results));
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
