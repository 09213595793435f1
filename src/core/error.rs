use thiserror::Error;

/// This is the core error type for the holdem odds library. It uses
/// `thiserror` to provide readable error messages.
///
/// Errors fall in three groups. Bad input (parsing, sample sizes, trial
/// counts) can be reported back to whoever supplied it. Invariant violations
/// mean the static data or the code is wrong and the run must stop.
/// `DivisionUndefined` is reported for categories that never played.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OddsError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Pairs can't be suited.")]
    InvalidSuitedPairs,
    #[error("Unknown starting hand {0}")]
    UnknownStartingHand(String),
    #[error("Can't sample {requested} cards from a deck of {available}")]
    SampleTooLarge { requested: usize, available: usize },
    #[error("A simulation needs at least one trial per starting hand")]
    NeedTrials,
    #[error("Deck should have {expected} cards but has {actual}")]
    DeckSizeMismatch { expected: usize, actual: usize },
    #[error("No trials were played for {0}, percentages are undefined")]
    DivisionUndefined(String),
}

impl OddsError {
    /// Is this error caused by corrupted static data or a logic bug rather
    /// than bad input?
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::DeckSizeMismatch { .. })
    }
}
