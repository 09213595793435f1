use std::fmt;
use std::str::FromStr;

use crate::core::{Card, OddsError, Suit, Value};

/// Enum to represent how the suits of a hand correspond to each other.
/// `Suitedness::Suited` will mean that all cards have the same suit
/// `Suitedness::OffSuit` will mean that all cards have the different suit
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suitedness {
    /// All of the cards are the same suit
    Suited,
    /// None of the cards are the same suit
    OffSuit,
}

/// `StartingHand` represents one of the 169 strategically different two
/// card starting hands of texas holdem, like `AA`, `AKs` or `72o`.
///
/// Every starting hand stands for a fixed pair of real cards that gets
/// simulated on its behalf; suits don't matter before the flop so any
/// representative is as good as any other.
///
/// ```
/// use holdem_odds::holdem::StartingHand;
///
/// let hand: StartingHand = "AKs".parse().unwrap();
/// assert_eq!("AKs", hand.to_string());
/// assert_eq!("As", hand.cards()[0].to_string());
/// assert_eq!("Ks", hand.cards()[1].to_string());
/// ```
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartingHand {
    /// The higher (or equal) value.
    value_one: Value,
    /// The lower (or equal) value.
    value_two: Value,
    /// Are both cards the same suit?
    suited: Suitedness,
}

impl StartingHand {
    /// Create a starting hand from two values and a `Suitedness`.
    ///
    /// The values can be given in any order. Returns
    /// `OddsError::InvalidSuitedPairs` for a suited pocket pair.
    pub fn new(value_one: Value, value_two: Value, suited: Suitedness) -> Result<Self, OddsError> {
        if value_one == value_two && suited == Suitedness::Suited {
            return Err(OddsError::InvalidSuitedPairs);
        }
        Ok(Self {
            value_one: value_one.max(value_two),
            value_two: value_one.min(value_two),
            suited,
        })
    }

    /// Create every possible unique StartingHand.
    ///
    /// They come in chart order: aces first, and for each high card the pair,
    /// then every lower kicker suited and offsuit.
    pub fn all() -> Vec<Self> {
        let mut hands = Vec::with_capacity(169);
        let values = Value::values();
        for (i, value_one) in values.iter().enumerate().rev() {
            for value_two in values[..=i].iter().rev() {
                if value_one == value_two {
                    hands.push(Self {
                        value_one: *value_one,
                        value_two: *value_two,
                        suited: Suitedness::OffSuit,
                    });
                } else {
                    hands.push(Self {
                        value_one: *value_one,
                        value_two: *value_two,
                        suited: Suitedness::Suited,
                    });
                    hands.push(Self {
                        value_one: *value_one,
                        value_two: *value_two,
                        suited: Suitedness::OffSuit,
                    });
                }
            }
        }
        hands
    }

    /// Is this starting hand a pocket pair?
    pub fn is_pair(&self) -> bool {
        self.value_one == self.value_two
    }

    /// The two cards that get dealt when simulating this starting hand.
    ///
    /// The first card is always a spade. The second one is a spade too for
    /// suited hands and a heart otherwise.
    pub fn cards(&self) -> [Card; 2] {
        let second_suit = match self.suited {
            Suitedness::Suited => Suit::Spade,
            Suitedness::OffSuit => Suit::Heart,
        };
        [
            Card::new(self.value_one, Suit::Spade),
            Card::new(self.value_two, second_suit),
        ]
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value_one.to_char(), self.value_two.to_char())?;
        match (self.is_pair(), self.suited) {
            (true, _) => Ok(()),
            (false, Suitedness::Suited) => write!(f, "s"),
            (false, Suitedness::OffSuit) => write!(f, "o"),
        }
    }
}

/// Parse the usual short names: `"AA"`, `"AKs"`, `"T9o"`.
impl FromStr for StartingHand {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let value_one = chars
            .next()
            .ok_or(OddsError::TooFewChars)
            .map(Value::from_char)?
            .ok_or(OddsError::UnexpectedValueChar)?;
        let value_two = chars
            .next()
            .ok_or(OddsError::TooFewChars)
            .map(Value::from_char)?
            .ok_or(OddsError::UnexpectedValueChar)?;

        let suited = match chars.next() {
            None if value_one == value_two => Suitedness::OffSuit,
            None => return Err(OddsError::TooFewChars),
            Some('s') | Some('S') => Suitedness::Suited,
            Some('o') | Some('O') if value_one != value_two => Suitedness::OffSuit,
            Some(_) => return Err(OddsError::UnparsedCharsRemaining),
        };

        if chars.next().is_some() {
            return Err(OddsError::UnparsedCharsRemaining);
        }

        Self::new(value_one, value_two, suited)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::core::FlatDeck;

    #[test]
    fn test_starting_hand_count() {
        let hands = StartingHand::all();
        assert_eq!(169, hands.len());
        assert_eq!(13, hands.iter().filter(|h| h.is_pair()).count());

        let names: HashSet<String> = hands.iter().map(|h| h.to_string()).collect();
        assert_eq!(169, names.len());
    }

    #[test]
    fn test_all_order() {
        let names: Vec<String> = StartingHand::all()
            .iter()
            .take(4)
            .map(|h| h.to_string())
            .collect();
        assert_eq!(vec!["AA", "AKs", "AKo", "AQs"], names);
        assert_eq!("22", StartingHand::all().last().unwrap().to_string());
    }

    #[test]
    fn test_every_hand_leaves_fifty_cards() {
        for hand in StartingHand::all() {
            let cards = hand.cards();
            assert_ne!(cards[0], cards[1], "{hand}");
            let deck = FlatDeck::full().without(&cards).unwrap();
            assert_eq!(50, deck.len());
            assert!(!deck.contains(&cards[0]));
            assert!(!deck.contains(&cards[1]));
        }
    }

    #[test]
    fn test_cards_match_suitedness() {
        let aks: StartingHand = "AKs".parse().unwrap();
        let [one, two] = aks.cards();
        assert_eq!(one.suit, two.suit);

        let ako: StartingHand = "AKo".parse().unwrap();
        let [one, two] = ako.cards();
        assert_ne!(one.suit, two.suit);
        assert_eq!(Value::Ace, one.value);
        assert_eq!(Value::King, two.value);
    }

    #[test]
    fn test_parse() {
        for hand in StartingHand::all() {
            assert_eq!(hand, hand.to_string().parse::<StartingHand>().unwrap());
        }
        // Low card first still works.
        assert_eq!(
            "72o".parse::<StartingHand>().unwrap(),
            "27o".parse::<StartingHand>().unwrap()
        );
        assert_eq!(
            "t9S".parse::<StartingHand>().unwrap().to_string(),
            "T9s"
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Err(OddsError::InvalidSuitedPairs), "AAs".parse::<StartingHand>());
        assert_eq!(Err(OddsError::TooFewChars), "AK".parse::<StartingHand>());
        assert_eq!(Err(OddsError::TooFewChars), "A".parse::<StartingHand>());
        assert_eq!(Err(OddsError::UnexpectedValueChar), "AX".parse::<StartingHand>());
        assert_eq!(Err(OddsError::UnparsedCharsRemaining), "AKx".parse::<StartingHand>());
        assert_eq!(Err(OddsError::UnparsedCharsRemaining), "AAo".parse::<StartingHand>());
        assert_eq!(Err(OddsError::UnparsedCharsRemaining), "AKss".parse::<StartingHand>());
    }

    #[test]
    fn test_suited_pair_rejected() {
        assert_eq!(
            Err(OddsError::InvalidSuitedPairs),
            StartingHand::new(Value::Ace, Value::Ace, Suitedness::Suited)
        );
    }
}
