//! A* search

use crate::search::{
    search_engines::{
        best_first::{best_first_search, PathCost},
        SearchEngine, SearchLimits, SearchResult, SearchStatistics,
    },
    Heuristic, Task,
};

/// A* search, ordered by `f = g + h` with ties broken towards deeper nodes.
/// With an admissible heuristic the first goal taken from the frontier is
/// reached by a shortest path.
#[derive(Debug, Default)]
pub struct AStar {
    limits: SearchLimits,
}

impl AStar {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl SearchEngine for AStar {
    fn search(
        &mut self,
        task: &Task,
        heuristic: &mut dyn Heuristic,
    ) -> (SearchResult, SearchStatistics) {
        best_first_search(task, heuristic, self.limits, PathCost::Accumulated)
    }
}
