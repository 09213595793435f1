use super::Card;

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
///
/// The derived ordering compares the variant first and then the strength,
/// so comparing two `Rank`s is the same as comparing their
/// `(category(), strength())` pairs.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all of the same suit.
    StraightFlush(u32),
}

impl Rank {
    /// The coarse category of this hand, from 0 for a high card up to 8 for
    /// a straight flush. A higher category always wins.
    pub fn category(&self) -> u8 {
        match self {
            Self::HighCard(_) => 0,
            Self::OnePair(_) => 1,
            Self::TwoPair(_) => 2,
            Self::ThreeOfAKind(_) => 3,
            Self::Straight(_) => 4,
            Self::Flush(_) => 5,
            Self::FullHouse(_) => 6,
            Self::FourOfAKind(_) => 7,
            Self::StraightFlush(_) => 8,
        }
    }

    /// How strong the hand is within its category. Only comparable with
    /// ranks of the same category.
    pub fn strength(&self) -> u32 {
        match *self {
            Self::HighCard(s)
            | Self::OnePair(s)
            | Self::TwoPair(s)
            | Self::ThreeOfAKind(s)
            | Self::Straight(s)
            | Self::Flush(s)
            | Self::FullHouse(s)
            | Self::FourOfAKind(s)
            | Self::StraightFlush(s) => s,
        }
    }
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = 0b1_0000_0000_1111;

/// Given a bitset of hand ranks. This method
/// will determine if there's a straight, and will give the
/// rank. Wheel is the lowest, broadway is the highest value.
///
/// Returns None if the hand ranks represented don't correspond
/// to a straight.
fn rank_straight(value_set: u32) -> Option<u32> {
    // Example of something with a straight:
    //       0000111111100
    //       0001111111000
    //       0011111110000
    //       0111111100000
    //       1111111000000
    //       -------------
    //       0000111000000
    //
    // So there were seven ones in a row
    // we removed the bottom 4.
    //
    // Now an example of an almost straight:
    //
    //       0001110111100
    //       0011101111000
    //       0111011110000
    //       1110111100000
    //       1101111000000
    //       -------------
    //       0000000000000
    let left =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    let idx = left.leading_zeros();

    // If this value_set has at least 5 ones in a row.
    if idx < 32 {
        // Then lets return a Rank::Straight
        // The rank will be determined by the position of the highest card.
        Some(32 - 4 - idx)
    } else if value_set & WHEEL == WHEEL {
        // Check to see if this is the wheel. It's pretty unlikely.
        Some(0)
    } else {
        // We found nothing.
        None
    }
}

/// Keep only the most significant bit.
fn keep_highest(rank: u32) -> u32 {
    if rank == 0 {
        return 0;
    }
    1 << (32 - rank.leading_zeros() - 1)
}

/// Keep the N most significant bits.
///
/// This works by removing the least significant bits.
fn keep_n(rank: u32, to_keep: u32) -> u32 {
    let mut result = rank;
    while result.count_ones() > to_keep {
        result &= result - 1;
    }
    result
}

/// From a bitset of values find the highest flush, if there is one.
fn find_flush(suit_value_sets: &[u32; 4]) -> Option<u32> {
    suit_value_sets
        .iter()
        .copied()
        .filter(|sv| sv.count_ones() >= 5)
        .max()
}

/// Can this turn into a hand rank? There are default implementations for
/// everything past getting at the cards.
pub trait Rankable {
    /// The cards to rank. This should be between 5 and 7 distinct cards.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Rank the best 5 card hand that can be made from the cards.
    ///
    /// It doesn't do any caching so it's left up to the user to understand
    /// that duplicate work will be done if this is called more than once.
    ///
    /// ```
    /// use holdem_odds::core::{Card, Rank, Rankable};
    ///
    /// let cards: Vec<Card> = ["Ad", "Ac", "9d", "9c", "9s", "2h", "3h"]
    ///     .iter()
    ///     .map(|s| Card::try_from(*s).unwrap())
    ///     .collect();
    /// assert!(matches!(cards.rank(), Rank::FullHouse(_)));
    /// ```
    fn rank(&self) -> Rank {
        let mut value_to_count: [u8; 13] = [0; 13];
        let mut count_to_value: [u32; 5] = [0; 5];
        let mut suit_value_sets: [u32; 4] = [0; 4];
        let mut value_set: u32 = 0;

        for c in self.cards() {
            let v = c.value as u8;
            let s = c.suit as u8;
            value_set |= 1 << v;
            value_to_count[v as usize] += 1;
            suit_value_sets[s as usize] |= 1 << v;
        }

        // Now rotate the value to count map.
        for (value, &count) in value_to_count.iter().enumerate() {
            count_to_value[count as usize] |= 1 << value;
        }

        if let Some(flush_set) = find_flush(&suit_value_sets) {
            // A straight flush only counts if the straight is in the flush suit.
            if let Some(rank) = rank_straight(flush_set) {
                Rank::StraightFlush(rank)
            } else {
                Rank::Flush(keep_n(flush_set, 5))
            }
        } else if count_to_value[4] != 0 {
            let high = keep_highest(value_set ^ count_to_value[4]);
            Rank::FourOfAKind(count_to_value[4] << 13 | high)
        } else if count_to_value[3].count_ones() == 2 {
            // Two sets; the lower one plays as the pair.
            let set = keep_highest(count_to_value[3]);
            let pair = count_to_value[3] ^ set;
            Rank::FullHouse(set << 13 | pair)
        } else if count_to_value[3] != 0 && count_to_value[2] != 0 {
            let set = count_to_value[3];
            let pair = keep_highest(count_to_value[2]);
            Rank::FullHouse(set << 13 | pair)
        } else if let Some(s_rank) = rank_straight(value_set) {
            Rank::Straight(s_rank)
        } else if count_to_value[3] != 0 {
            let low = keep_n(value_set ^ count_to_value[3], 2);
            Rank::ThreeOfAKind(count_to_value[3] << 13 | low)
        } else if count_to_value[2].count_ones() >= 2 {
            // With three pairs the lowest one can still be the kicker.
            let pairs = keep_n(count_to_value[2], 2);
            let low = keep_highest(value_set ^ pairs);
            Rank::TwoPair(pairs << 13 | low)
        } else if count_to_value[2] == 0 {
            Rank::HighCard(keep_n(value_set, 5))
        } else {
            let pair = count_to_value[2];
            let low = keep_n(value_set ^ pair, 3);
            Rank::OnePair(pair << 13 | low)
        }
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl<const N: usize> Rankable for [Card; N] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}
