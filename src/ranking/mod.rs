//! Batch comparison of the search engines. Every contender is run on the same
//! randomly scrambled instances and the visited states, solution lengths and
//! run times are averaged.

mod config;
mod contender;
mod report;

pub use config::{ConfigError, RankingConfig};
pub use contender::Contender;
pub use report::{Averages, ComparisonTable, RankingReport, Tally};

use crate::search::{Randomizer, SearchLimits, SearchResult, SearchStatistics, Task};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// One contender run on one instance.
#[derive(Debug)]
pub struct Trial {
    pub contender: Contender,
    pub result: SearchResult,
    pub statistics: SearchStatistics,
    pub elapsed: Duration,
}

pub fn run_contender(contender: Contender, task: &Task, limits: SearchLimits) -> Trial {
    debug!(contender = %contender.label(), "starting");
    let mut engine = contender.engine().create(limits);
    let mut heuristic = contender.heuristic().create();

    let start = Instant::now();
    let (result, statistics) = engine.search(task, heuristic.as_mut());
    let elapsed = start.elapsed();

    Trial {
        contender,
        result,
        statistics,
        elapsed,
    }
}

/// Run each contender once on `task`, in the given order.
pub fn compare(contenders: &[Contender], task: &Task, limits: SearchLimits) -> Vec<Trial> {
    contenders
        .iter()
        .map(|&contender| run_contender(contender, task, limits))
        .collect()
}

pub fn rank(config: &RankingConfig) -> RankingReport {
    info!(
        trials = config.trials,
        scramble_moves = config.scramble_moves,
        seed = config.seed,
        "comparing search algorithms"
    );
    let mut randomizer = Randomizer::new(config.seed);
    let limits = SearchLimits::unlimited()
        .with_time_limit(config.time_limit)
        .with_memory_limit_mb(config.memory_limit_mb);
    let mut tallies: Vec<(Contender, Tally)> = config
        .contenders
        .iter()
        .map(|&contender| (contender, Tally::default()))
        .collect();

    for trial in 0..config.trials {
        let initial_state = randomizer.scramble(&config.goal, config.scramble_moves);
        info!(
            trial = trial + 1,
            trials = config.trials,
            initial_state = %initial_state,
            "running test"
        );
        let task = Task::new(initial_state, config.goal);
        for (contender, tally) in tallies.iter_mut() {
            tally.record(&run_contender(*contender, &task, limits));
        }
    }

    RankingReport::new(config.trials, tallies)
}
