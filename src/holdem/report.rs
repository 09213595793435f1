use std::fmt;

use tracing::event;

use super::{CategoryResult, CategoryStats, Percentages};
use crate::core::OddsError;

/// Column names of the tab separated table.
pub const HEADER: &str = "Hole\tPlays\tWon\tTied\tLost\t|\tWin%\tTie%\tLoss%";

/// Order results by most wins, then by most ties.
///
/// The sort is stable: results with the same number of wins and ties keep
/// the order they came in with.
pub fn rank_results(mut results: Vec<CategoryResult>) -> Vec<CategoryResult> {
    results.sort_by(|a, b| {
        b.stats
            .won()
            .cmp(&a.stats.won())
            .then_with(|| b.stats.tied().cmp(&a.stats.tied()))
    });
    results
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReportRow {
    pub hole: String,
    pub stats: CategoryStats,
    pub percentages: Percentages,
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t|\t{}\t{}\t{}",
            self.hole,
            self.stats.played(),
            self.stats.won(),
            self.stats.tied(),
            self.stats.lost(),
            self.percentages.win,
            self.percentages.tie,
            self.percentages.loss,
        )
    }
}

/// The ranked results of a run, ready to print.
///
/// ```
/// use holdem_odds::holdem::{OddsSimulationBuilder, Report};
///
/// let results = OddsSimulationBuilder::default()
///     .starting_hands(vec!["AA".parse().unwrap(), "KK".parse().unwrap()])
///     .trials(10)
///     .build()
///     .unwrap()
///     .run()
///     .unwrap();
/// let table = Report::new(results).to_string();
/// assert!(table.starts_with("Hole\tPlays"));
/// assert_eq!(3, table.lines().count());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(results: Vec<CategoryResult>) -> Self {
        let rows = rank_results(results)
            .into_iter()
            .map(|result| {
                let hole = result.hand.to_string();
                let percentages = Percentages::of(&result.stats).unwrap_or_else(|| {
                    let error = OddsError::DivisionUndefined(hole.clone());
                    event!(tracing::Level::WARN, %error, "Reporting undefined percentages");
                    Percentages::UNDEFINED
                });
                ReportRow {
                    hole,
                    stats: result.stats,
                    percentages,
                }
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Render the report as pretty printed JSON. Undefined percentages come
    /// out as `null`.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holdem::{Outcome, StartingHand};

    fn result(name: &str, won: usize, tied: usize, lost: usize) -> CategoryResult {
        let outcomes = std::iter::repeat_n(Outcome::Win, won)
            .chain(std::iter::repeat_n(Outcome::Tie, tied))
            .chain(std::iter::repeat_n(Outcome::Loss, lost));
        CategoryResult {
            hand: name.parse::<StartingHand>().unwrap(),
            stats: outcomes.collect(),
        }
    }

    fn names(results: &[CategoryResult]) -> Vec<String> {
        results.iter().map(|r| r.hand.to_string()).collect()
    }

    #[test]
    fn test_rank_by_wins_then_ties() {
        let ranked = rank_results(vec![
            result("72o", 1, 0, 9),
            result("AA", 8, 1, 1),
            result("KK", 7, 2, 1),
            result("QQ", 7, 3, 0),
        ]);
        assert_eq!(vec!["AA", "QQ", "KK", "72o"], names(&ranked));
    }

    #[test]
    fn test_rank_is_stable() {
        let ranked = rank_results(vec![
            result("T9s", 5, 1, 4),
            result("AA", 9, 0, 1),
            result("KQo", 5, 1, 4),
            result("22", 5, 1, 4),
        ]);
        assert_eq!(vec!["AA", "T9s", "KQo", "22"], names(&ranked));
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_results(vec![]).is_empty());
    }

    #[test]
    fn test_table() {
        let report = Report::new(vec![result("72o", 1, 0, 3), result("AA", 3, 1, 0)]);
        let table = report.to_string();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(HEADER, lines[0]);
        assert_eq!("AA\t4\t3\t1\t0\t|\t75\t25\t0", lines[1]);
        assert_eq!("72o\t4\t1\t0\t3\t|\t25\t0\t75", lines[2]);
        assert_eq!(3, lines.len());
    }

    #[test]
    fn test_percentages_not_rounded() {
        let report = Report::new(vec![result("AKs", 1, 1, 1)]);
        let row = &report.rows()[0];
        assert_eq!(
            format!("AKs\t3\t1\t1\t1\t|\t{0}\t{0}\t{0}", 100.0 / 3.0),
            row.to_string()
        );
    }

    #[test_log::test]
    fn test_nothing_played() {
        let report = Report::new(vec![result("AA", 0, 0, 0)]);
        let row = &report.rows()[0];
        assert!(row.percentages.win.is_nan());
        assert_eq!("AA\t0\t0\t0\t0\t|\tNaN\tNaN\tNaN", row.to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json() {
        let report = Report::new(vec![result("AA", 1, 0, 1), result("KK", 0, 0, 0)]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        let rows = json["rows"].as_array().unwrap();
        assert_eq!(2, rows.len());
        assert_eq!("AA", rows[0]["hole"]);
        assert_eq!(2, rows[0]["stats"]["played"]);
        assert_eq!(50.0, rows[0]["percentages"]["win"]);
        assert!(rows[1]["percentages"]["win"].is_null());
    }
}
