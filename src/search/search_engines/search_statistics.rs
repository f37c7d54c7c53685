use std::time::{Duration, Instant};
use tracing::info;

/// Counters collected while a search runs. Progress is logged every ten
/// seconds, and once more when the search is finalised.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of heuristic evaluations
    evaluated_nodes: usize,
    /// Number of unique nodes generated
    generated_nodes: usize,
    /// Number of nodes that were reached again by a cheaper path
    improved_nodes: usize,
    /// Number of distinct states seen, set when the search finishes
    visited_states: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time the search took, set when the search finishes
    search_duration: Option<Duration>,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            improved_nodes: 0,
            visited_states: 0,
            search_start_time: Instant::now(),
            search_duration: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self, num_nodes: usize) {
        self.evaluated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
        self.log_if_needed();
    }

    pub fn increment_improved_nodes(&mut self) {
        self.improved_nodes += 1;
        self.log_if_needed();
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            improved_nodes = self.improved_nodes,
        );
    }

    pub fn finalise_search(&mut self, visited_states: usize) {
        info!("finalising search");
        self.visited_states = visited_states;
        let duration = self.search_start_time.elapsed();
        self.search_duration = Some(duration);
        self.log();
        info!(
            visited_states = visited_states,
            search_duration = duration.as_secs_f64()
        );
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn improved_nodes(&self) -> usize {
        self.improved_nodes
    }

    pub fn visited_states(&self) -> usize {
        self.visited_states
    }

    /// Duration of the finished search, or the time elapsed so far.
    pub fn search_duration(&self) -> Duration {
        self.search_duration
            .unwrap_or_else(|| self.search_start_time.elapsed())
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
