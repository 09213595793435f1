//! This is the core module. It exports the non-holdem
//! related code: cards, decks, dealing and hand ranking.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Errors shared by the whole crate.
mod error;
/// Export `OddsError`
pub use self::error::OddsError;

/// The randomness used to deal cards.
mod index_source;
/// Export the trait.
pub use self::index_source::IndexSource;
/// Export the scripted source used to test dealing.
#[cfg(any(test, feature = "test-util"))]
pub use self::index_source::FixedIndices;

/// Flattened deck
mod flat_deck;
/// Export `FlatDeck`
pub use self::flat_deck::FlatDeck;

/// 5 to 7 card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Rank, Rankable};
