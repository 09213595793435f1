use rand::{CryptoRng, Rng};

/// Where the randomness for dealing comes from.
///
/// Every random choice the simulation makes is "pick a position in the part
/// of the deck that hasn't been dealt yet". Anything that can answer that
/// question uniformly can drive a simulation.
///
/// Only cryptographically secure generators get an implementation for free;
/// the estimates are only as good as the randomness behind them. Tests can
/// use `FixedIndices` (`test-util` feature) to script the exact cards that
/// get dealt.
pub trait IndexSource {
    /// Return an index uniformly distributed over `0..upper`.
    ///
    /// Callers never pass an `upper` of zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: CryptoRng> IndexSource for R {
    fn next_index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// An `IndexSource` that replays a fixed list of indices.
///
/// ```
/// use holdem_odds::core::{FixedIndices, FlatDeck};
///
/// let deck = FlatDeck::full();
/// let mut source = FixedIndices::new(vec![0, 0]);
/// let cards = deck.sample_with(2, &mut source).unwrap();
///
/// // The first draw takes the top card and moves the bottom card into its
/// // place, so the second draw at index 0 gets what used to be the bottom.
/// assert_eq!(deck[0], cards[0]);
/// assert_eq!(deck[51], cards[1]);
/// ```
///
/// Only built for tests, or with the `test-util` feature.
///
/// # Panics
///
/// Panics if more indices are asked for than were given, or if a scripted
/// index is out of range for the draw it is used for.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone, Default)]
pub struct FixedIndices {
    indices: Vec<usize>,
    position: usize,
}

#[cfg(any(test, feature = "test-util"))]
impl FixedIndices {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            position: 0,
        }
    }

    /// How many scripted indices haven't been used yet.
    pub fn remaining(&self) -> usize {
        self.indices.len() - self.position
    }
}

#[cfg(any(test, feature = "test-util"))]
impl IndexSource for FixedIndices {
    fn next_index(&mut self, upper: usize) -> usize {
        let idx = *self
            .indices
            .get(self.position)
            .unwrap_or_else(|| panic!("ran out of scripted indices after {}", self.position));
        assert!(idx < upper, "scripted index {idx} is not below {upper}");
        self.position += 1;
        idx
    }
}
