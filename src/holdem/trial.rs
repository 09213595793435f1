use std::cmp::Ordering;

use tracing::event;

use super::{CategoryStats, Outcome, StartingHand};
use crate::core::{Card, FlatDeck, IndexSource, OddsError, Rank, Rankable};

/// Number of shared cards on the board.
pub const BOARD_SIZE: usize = 5;
/// Number of private cards each player holds.
pub const HOLE_SIZE: usize = 2;
/// Cards dealt per trial: the board followed by the opponent's hole cards.
pub const DEAL_SIZE: usize = BOARD_SIZE + HOLE_SIZE;
/// Size of the deck once the simulated hole cards are taken out.
pub const REMAINING_DECK_SIZE: usize = FlatDeck::SIZE - HOLE_SIZE;

/// Compare the two hands at showdown. Category first, then the strength
/// inside the category; anything else is a split pot.
fn showdown(hero: Rank, villain: Rank) -> Outcome {
    let hero = (hero.category(), hero.strength());
    let villain = (villain.category(), villain.strength());
    match hero.cmp(&villain) {
        Ordering::Greater => Outcome::Win,
        Ordering::Equal => Outcome::Tie,
        Ordering::Less => Outcome::Loss,
    }
}

/// Play out one hand for `hole` against a single random opponent.
///
/// Seven cards are drawn from `remaining`. The first five are the board and
/// the last two are the opponent's hole cards. Each player makes their best
/// hand from the board plus their own two cards.
///
/// Given the same deck, hole cards and random draws this always returns the
/// same outcome.
pub fn run_trial<S: IndexSource + ?Sized>(
    remaining: &FlatDeck,
    hole: [Card; 2],
    source: &mut S,
) -> Result<Outcome, OddsError> {
    let dealt = remaining.sample_with(DEAL_SIZE, source)?;
    let (board, opponent) = dealt.split_at(BOARD_SIZE);

    // Board cards go at the end, then swap in each player's hole cards.
    let mut hand = [hole[0]; DEAL_SIZE];
    hand[HOLE_SIZE..].copy_from_slice(board);

    hand[..HOLE_SIZE].copy_from_slice(&hole);
    let hero = hand.rank();

    hand[..HOLE_SIZE].copy_from_slice(opponent);
    let villain = hand.rank();

    Ok(showdown(hero, villain))
}

/// Run `trials` hands for `hole` and count the results.
///
/// `remaining` has to be the 50 cards left after taking `hole` out of the
/// deck. Anything else means the hole cards were defined wrong and the whole
/// run for them is abandoned with `OddsError::DeckSizeMismatch` before a
/// single hand is dealt.
pub fn run_trials<S: IndexSource + ?Sized>(
    remaining: &FlatDeck,
    hole: [Card; 2],
    trials: u64,
    source: &mut S,
) -> Result<CategoryStats, OddsError> {
    if remaining.len() != REMAINING_DECK_SIZE {
        return Err(OddsError::DeckSizeMismatch {
            expected: REMAINING_DECK_SIZE,
            actual: remaining.len(),
        });
    }

    let mut stats = CategoryStats::new();
    for _ in 0..trials {
        stats.record(run_trial(remaining, hole, source)?);
    }
    Ok(stats)
}

/// Simulate `trials` hands for a starting hand.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use holdem_odds::holdem::{StartingHand, simulate_holding};
///
/// let aces: StartingHand = "AA".parse().unwrap();
/// let mut rng = StdRng::seed_from_u64(420);
/// let stats = simulate_holding(&aces, 100, &mut rng).unwrap();
/// assert_eq!(100, stats.played());
/// ```
pub fn simulate_holding<S: IndexSource + ?Sized>(
    hand: &StartingHand,
    trials: u64,
    source: &mut S,
) -> Result<CategoryStats, OddsError> {
    let hole = hand.cards();
    let remaining = FlatDeck::full().without(&hole)?;
    let stats = run_trials(&remaining, hole, trials, source)?;

    event!(
        tracing::Level::DEBUG,
        hand = %hand,
        played = stats.played(),
        won = stats.won(),
        tied = stats.tied(),
        lost = stats.lost(),
        "Finished starting hand"
    );
    Ok(stats)
}
