use crate::search::search_engines::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Memory is sampled when a search starts and then once per this many
/// expansions.
const MEMORY_SAMPLE_INTERVAL: usize = 1024;

/// Optional resource limits for a single search. The default has no limits;
/// the state space of the puzzle is small enough to be exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub time_limit: Option<Duration>,
    pub expansion_limit: Option<usize>,
    pub memory_limit_mb: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_expansion_limit(mut self, expansion_limit: Option<usize>) -> Self {
        self.expansion_limit = expansion_limit;
        self
    }

    pub fn with_memory_limit_mb(mut self, memory_limit_mb: Option<usize>) -> Self {
        self.memory_limit_mb = memory_limit_mb;
        self
    }
}

#[derive(Debug)]
pub struct TerminationCondition {
    limits: SearchLimits,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(limits: SearchLimits) -> Self {
        info!(
            time_limit = limits.time_limit.map(|d| d.as_secs_f64()),
            expansion_limit = limits.expansion_limit,
            memory_limit_mb = limits.memory_limit_mb,
        );
        Self {
            limits,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn sample_memory_usage(&mut self) -> Option<usize> {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        memory_usage
    }

    pub fn log(&mut self) {
        let memory_usage = self.sample_memory_usage();
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        let time_elapsed = self.start_time.elapsed();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = time_elapsed.as_secs_f64(),
        );
    }

    /// Checked each time a node is taken from the frontier.
    pub fn should_terminate(&mut self, expanded_nodes: usize) -> Option<SearchResult> {
        if let Some(time_limit) = self.limits.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(expansion_limit) = self.limits.expansion_limit {
            if expanded_nodes >= expansion_limit {
                return Some(SearchResult::ExpansionLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.limits.memory_limit_mb {
            if expanded_nodes % MEMORY_SAMPLE_INTERVAL == 0 {
                self.sample_memory_usage();
            }
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(SearchResult::MemoryLimitExceeded);
                }
            }
        }
        None
    }
}
