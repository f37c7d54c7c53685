//! This module implements the greedy best-first search algorithm.

use crate::search::{
    search_engines::{
        best_first::{best_first_search, PathCost},
        SearchEngine, SearchLimits, SearchResult, SearchStatistics,
    },
    Heuristic, Task,
};

/// Greedy best-first search. Path cost is disregarded (every node has
/// `g = 0`), so the returned path is not necessarily the shortest one.
#[derive(Debug, Default)]
pub struct GBFS {
    limits: SearchLimits,
}

impl GBFS {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl SearchEngine for GBFS {
    fn search(
        &mut self,
        task: &Task,
        heuristic: &mut dyn Heuristic,
    ) -> (SearchResult, SearchStatistics) {
        best_first_search(task, heuristic, self.limits, PathCost::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{ManhattanDistance, NumDisplaced, State};
    use crate::test_utils::*;

    #[test]
    fn goal_is_returned_immediately() {
        let task = Task::from_initial_state(State::goal());
        let (result, _) = GBFS::default().search(&task, &mut ManhattanDistance::new());
        let solution = result.into_solution().expect("goal should be solved");
        assert_eq!(solution.path_length(), 1);
        assert_eq!(solution.visited_states(), 1);
    }

    #[test]
    fn nodes_carry_no_path_cost() {
        let task = Task::from_initial_state(state(THREE_MOVES));
        let (result, _) = GBFS::default().search(&task, &mut NumDisplaced::new());
        let solution = result.into_solution().expect("should be solved");
        assert_eq!(solution.path_length(), 4);
        assert!(solution.path().iter().all(|node| node.get_g() == 0));
    }

    #[test]
    fn one_move_away() {
        let task = Task::from_initial_state(state(ONE_MOVE));
        let heuristics: [Box<dyn Heuristic>; 2] = [
            Box::new(ManhattanDistance::new()),
            Box::new(NumDisplaced::new()),
        ];
        for mut heuristic in heuristics {
            let (result, _) = GBFS::default().search(&task, heuristic.as_mut());
            let solution = result.into_solution().expect("should be solved");
            assert_eq!(solution.path_length(), 2);
            assert!(solution.visited_states() <= 4);
        }
    }

    #[test]
    fn unsolvable_instance_exhausts_frontier() {
        let task = Task::from_initial_state(state(UNSOLVABLE));
        let (result, statistics) = GBFS::default().search(&task, &mut ManhattanDistance::new());
        assert!(matches!(result, SearchResult::ProvablyUnsolvable));
        assert_eq!(statistics.visited_states(), REACHABLE_STATES);
    }
}
