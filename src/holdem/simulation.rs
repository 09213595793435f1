use std::thread;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{event, trace_span};

use super::{CategoryStats, StartingHand, simulate_holding};
use crate::core::OddsError;

/// The totals for one starting hand after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryResult {
    pub hand: StartingHand,
    pub stats: CategoryStats,
}

/// # OddsSimulationBuilder
///
/// `OddsSimulationBuilder` configures a run over a list of starting hands.
/// The number of trials is required, everything else is optional.
///
/// ## Setters
///
/// Each setter sets the value and returns the builder.
///
/// - `starting_hands` defaults to all 169 starting hands.
/// - `num_tasks` defaults to 1, meaning everything runs on the calling thread.
/// - `seed` makes the run reproducible. Without one every starting hand gets
///   a generator seeded from the operating system.
///
/// ## Examples
///
/// ```
/// use holdem_odds::holdem::OddsSimulationBuilder;
///
/// let sim = OddsSimulationBuilder::default()
///     .starting_hands(vec!["AA".parse().unwrap(), "72o".parse().unwrap()])
///     .trials(100)
///     .seed(420)
///     .build()
///     .unwrap();
/// let results = sim.run().unwrap();
/// assert_eq!(2, results.len());
/// assert_eq!(100, results[0].stats.played());
/// ```
#[derive(Debug, Clone)]
pub struct OddsSimulationBuilder {
    starting_hands: Option<Vec<StartingHand>>,
    trials: Option<u64>,
    num_tasks: usize,
    seed: Option<u64>,
}

impl OddsSimulationBuilder {
    /// Only simulate these starting hands, in this order.
    pub fn starting_hands(mut self, starting_hands: Vec<StartingHand>) -> Self {
        self.starting_hands = Some(starting_hands);
        self
    }

    /// Number of hands played for every starting hand.
    pub fn trials(mut self, trials: u64) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Split the starting hands over this many threads.
    pub fn num_tasks(mut self, num_tasks: usize) -> Self {
        self.num_tasks = num_tasks;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fill in the defaults and create a new `OddsSimulation`.
    ///
    /// @returns `OddsError::NeedTrials` if trials wasn't set or is zero.
    pub fn build(self) -> Result<OddsSimulation, OddsError> {
        let trials = self
            .trials
            .filter(|t| *t > 0)
            .ok_or(OddsError::NeedTrials)?;

        Ok(OddsSimulation {
            starting_hands: self.starting_hands.unwrap_or_else(StartingHand::all),
            trials,
            num_tasks: self.num_tasks.max(1),
            seed: self.seed,
        })
    }
}

impl Default for OddsSimulationBuilder {
    fn default() -> Self {
        Self {
            starting_hands: None,
            trials: None,
            num_tasks: 1,
            seed: None,
        }
    }
}

/// A configured run. Create one with [`OddsSimulationBuilder`].
#[derive(Debug, Clone)]
pub struct OddsSimulation {
    starting_hands: Vec<StartingHand>,
    trials: u64,
    num_tasks: usize,
    seed: Option<u64>,
}

impl OddsSimulation {
    pub fn starting_hands(&self) -> &[StartingHand] {
        &self.starting_hands
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Simulate every starting hand and return the results in the same order
    /// as the starting hands.
    ///
    /// An error for any starting hand stops the whole run; there are no
    /// partial results.
    pub fn run(&self) -> Result<Vec<CategoryResult>, OddsError> {
        let span = trace_span!(
            "OddsSimulation::run",
            trials = self.trials,
            num_tasks = self.num_tasks
        );
        let _enter = span.enter();

        event!(
            tracing::Level::INFO,
            starting_hands = self.starting_hands.len(),
            trials = self.trials,
            num_tasks = self.num_tasks,
            seeded = self.seed.is_some(),
            "Starting simulation"
        );

        let results = if self.num_tasks > 1 && self.starting_hands.len() > 1 {
            self.run_parallel(&span)?
        } else {
            self.run_sequential()?
        };

        event!(
            tracing::Level::INFO,
            starting_hands = results.len(),
            "Finished simulation"
        );
        Ok(results)
    }

    fn run_sequential(&self) -> Result<Vec<CategoryResult>, OddsError> {
        self.starting_hands
            .iter()
            .enumerate()
            .map(|(idx, hand)| self.run_category(idx, hand))
            .collect()
    }

    fn run_parallel(&self, parent: &tracing::Span) -> Result<Vec<CategoryResult>, OddsError> {
        let hands_per_task = self.starting_hands.len().div_ceil(self.num_tasks);

        let per_task: Vec<Result<Vec<CategoryResult>, OddsError>> = thread::scope(|s| {
            let handles: Vec<_> = self
                .starting_hands
                .chunks(hands_per_task)
                .enumerate()
                .map(|(task_id, chunk)| {
                    let start = task_id * hands_per_task;
                    s.spawn(move || {
                        let _enter = trace_span!(parent: parent, "odds_task", task_id).entered();
                        chunk
                            .iter()
                            .enumerate()
                            .map(|(i, hand)| self.run_category(start + i, hand))
                            .collect::<Result<Vec<_>, _>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect()
        });

        // Chunks are joined in order so the results stay in input order.
        let mut results = Vec::with_capacity(self.starting_hands.len());
        for task_results in per_task {
            results.extend(task_results?);
        }
        Ok(results)
    }

    /// Every starting hand gets its own generator so that the results don't
    /// depend on how the work was split between tasks.
    fn rng_for(&self, idx: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(idx as u64)),
            None => StdRng::from_os_rng(),
        }
    }

    fn run_category(&self, idx: usize, hand: &StartingHand) -> Result<CategoryResult, OddsError> {
        let mut rng = self.rng_for(idx);
        let stats = simulate_holding(hand, self.trials, &mut rng)?;
        Ok(CategoryResult { hand: *hand, stats })
    }
}
