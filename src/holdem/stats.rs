/// How a single simulated hand ended, from the point of view of the
/// starting hand being simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

/// Running totals for one starting hand.
///
/// The fields can only change through [`CategoryStats::record`] and
/// [`CategoryStats::merge`], so `played == won + tied + lost` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryStats {
    played: u64,
    won: u64,
    tied: u64,
    lost: u64,
}

impl CategoryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more hand played with the given outcome.
    ///
    /// ```
    /// use holdem_odds::holdem::{CategoryStats, Outcome};
    ///
    /// let mut stats = CategoryStats::new();
    /// stats.record(Outcome::Win);
    /// stats.record(Outcome::Loss);
    /// assert_eq!(2, stats.played());
    /// assert_eq!(1, stats.won());
    /// ```
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.won += 1,
            Outcome::Tie => self.tied += 1,
            Outcome::Loss => self.lost += 1,
        }
        self.played += 1;
    }

    /// Add the totals from another set of stats to these. Used to combine
    /// counts made by separate workers.
    pub fn merge(&mut self, other: &CategoryStats) {
        self.played += other.played;
        self.won += other.won;
        self.tied += other.tied;
        self.lost += other.lost;
    }

    pub fn played(&self) -> u64 {
        self.played
    }

    pub fn won(&self) -> u64 {
        self.won
    }

    pub fn tied(&self) -> u64 {
        self.tied
    }

    pub fn lost(&self) -> u64 {
        self.lost
    }
}

impl FromIterator<Outcome> for CategoryStats {
    fn from_iter<T: IntoIterator<Item = Outcome>>(iter: T) -> Self {
        let mut stats = Self::new();
        for outcome in iter {
            stats.record(outcome);
        }
        stats
    }
}

/// Win, tie and loss rates in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Percentages {
    pub win: f64,
    pub tie: f64,
    pub loss: f64,
}

impl Percentages {
    /// What gets reported when nothing was played.
    pub const UNDEFINED: Self = Self {
        win: f64::NAN,
        tie: f64::NAN,
        loss: f64::NAN,
    };

    /// Work out the percentages for some stats. Returns `None` when no
    /// hands were played since there's nothing to divide by.
    pub fn of(stats: &CategoryStats) -> Option<Self> {
        if stats.played == 0 {
            return None;
        }
        let played = stats.played as f64;
        Some(Self {
            win: 100.0 * stats.won as f64 / played,
            tie: 100.0 * stats.tied as f64 / played,
            loss: 100.0 * stats.lost as f64 / played,
        })
    }
}
