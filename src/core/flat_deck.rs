use std::ops::Index;

use super::{Card, IndexSource, OddsError, Suit, Value};

/// `FlatDeck` is an ordered deck of cards that allows easy
/// indexing into the cards.
///
/// The order is only there so that the same inputs always produce the same
/// deck; dealing is done by random sampling, not by taking cards off the top.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatDeck {
    /// Card storage.
    cards: Vec<Card>,
}

impl FlatDeck {
    /// Number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Create the full 52 card deck in its canonical order: spades, hearts,
    /// clubs then diamonds, each suit from the ace down to the deuce.
    ///
    /// ```
    /// use holdem_odds::core::FlatDeck;
    ///
    /// let deck = FlatDeck::full();
    /// assert_eq!(52, deck.len());
    /// assert_eq!("As", deck[0].to_string());
    /// assert_eq!("2d", deck[51].to_string());
    /// ```
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for suit in Suit::suits() {
            for value in Value::values().into_iter().rev() {
                cards.push(Card { value, suit });
            }
        }
        Self { cards }
    }

    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Create a new deck with every card of this one except the `excluded`
    /// cards, keeping the order of the ones that are left.
    ///
    /// Every excluded card has to be in the deck exactly once. If that's not
    /// the case the resulting deck has the wrong size and
    /// `OddsError::DeckSizeMismatch` is returned.
    ///
    /// ```
    /// use holdem_odds::core::{Card, FlatDeck};
    ///
    /// let hole = [Card::try_from("As").unwrap(), Card::try_from("Ah").unwrap()];
    /// let deck = FlatDeck::full().without(&hole).unwrap();
    /// assert_eq!(50, deck.len());
    /// assert!(!deck.contains(&hole[0]));
    ///
    /// // Removing the same card twice is a broken hole card definition.
    /// assert!(FlatDeck::full().without(&[hole[0], hole[0]]).is_err());
    /// ```
    pub fn without(&self, excluded: &[Card]) -> Result<Self, OddsError> {
        let cards: Vec<Card> = self
            .cards
            .iter()
            .filter(|c| !excluded.contains(c))
            .copied()
            .collect();

        match self.cards.len().checked_sub(excluded.len()) {
            Some(expected) if expected == cards.len() => Ok(Self { cards }),
            expected => Err(OddsError::DeckSizeMismatch {
                expected: expected.unwrap_or(0),
                actual: cards.len(),
            }),
        }
    }

    /// Draw `n` distinct cards uniformly at random without replacement.
    ///
    /// Every ordering of every `n` card subset is equally likely as long as
    /// `source` is uniform. This is a partial Fisher-Yates shuffle run on a
    /// scratch copy, so the deck itself never changes: each draw picks a
    /// position among the cards not yet dealt and then swaps the last undealt
    /// card into that spot.
    ///
    /// Returns `OddsError::SampleTooLarge` if `n` is bigger than the deck.
    pub fn sample_with<S: IndexSource + ?Sized>(
        &self,
        n: usize,
        source: &mut S,
    ) -> Result<Vec<Card>, OddsError> {
        if n > self.cards.len() {
            return Err(OddsError::SampleTooLarge {
                requested: n,
                available: self.cards.len(),
            });
        }

        let mut undealt = self.cards.clone();
        let mut len = undealt.len();
        let mut result = Vec::with_capacity(n);

        for _ in 0..n {
            let idx = source.next_index(len);
            result.push(undealt[idx]);
            undealt.swap(idx, len - 1);
            len -= 1;
        }
        Ok(result)
    }

    /// Give a random sample of the cards in the deck using the thread local
    /// cryptographically secure generator.
    pub fn sample(&self, n: usize) -> Result<Vec<Card>, OddsError> {
        let mut rng = rand::rng();
        self.sample_with(n, &mut rng)
    }
}

impl Index<usize> for FlatDeck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for FlatDeck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}
