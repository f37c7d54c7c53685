//! Breadth first search

use crate::search::{
    search_engines::{
        SearchEngine, SearchLimits, SearchResult, SearchStatistics, Solution,
        TerminationCondition,
    },
    Heuristic, SearchNodeStatus, SearchSpace, Task,
};
use std::collections::VecDeque;

/// Breadth-first search with a FIFO frontier. A state is marked visited when
/// it is first generated and goal-tested when it is taken from the queue.
#[derive(Debug, Default)]
pub struct BFS {
    limits: SearchLimits,
}

impl BFS {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl SearchEngine for BFS {
    fn search(
        &mut self,
        task: &Task,
        heuristic: &mut dyn Heuristic,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut termination = TerminationCondition::new(self.limits);
        let mut queue = VecDeque::new();
        let mut search_space = SearchSpace::new(task.initial_state);

        let root_node = search_space.get_root_node_mut();
        root_node.open(0, heuristic.evaluate(&task.initial_state, &task.goal));
        statistics.increment_evaluated_nodes(1);
        queue.push_back(root_node.get_node_id());

        while let Some(node_id) = queue.pop_front() {
            termination.log_if_needed();
            if let Some(result) = termination.should_terminate(statistics.expanded_nodes()) {
                statistics.finalise_search(search_space.len());
                termination.finalise();
                return (result, statistics);
            }

            let node = search_space.get_node_mut(node_id);
            node.close();
            let state = *node.get_state();
            let g_value = node.get_g();
            statistics.increment_expanded_nodes();

            if task.is_goal(&state) {
                statistics.finalise_search(search_space.len());
                termination.finalise();
                return (
                    SearchResult::Success(Solution::new(search_space, node_id)),
                    statistics,
                );
            }

            for (transition, successor) in state.successors() {
                let child_node = search_space.insert_or_get_node(successor, transition, node_id);
                if child_node.get_status() != SearchNodeStatus::New {
                    continue;
                }
                child_node.open(g_value + 1, heuristic.evaluate(&successor, &task.goal));
                statistics.increment_generated_nodes(1);
                statistics.increment_evaluated_nodes(1);
                queue.push_back(child_node.get_node_id());
            }
        }

        statistics.finalise_search(search_space.len());
        termination.finalise();
        (SearchResult::ProvablyUnsolvable, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Move, State, ZeroHeuristic};
    use crate::test_utils::*;

    fn bfs(initial: &str) -> (SearchResult, SearchStatistics) {
        let task = Task::from_initial_state(state(initial));
        BFS::new(SearchLimits::unlimited()).search(&task, &mut ZeroHeuristic::new())
    }

    #[test]
    fn goal_is_returned_immediately() {
        let (result, statistics) = bfs(GOAL);
        let solution = result.into_solution().expect("goal should be solved");
        assert_eq!(solution.path_length(), 1);
        assert_eq!(solution.visited_states(), 1);
        assert_eq!(*solution.goal_node().get_state(), State::goal());
        assert_eq!(statistics.expanded_nodes(), 1);
        assert_eq!(statistics.visited_states(), 1);
    }

    #[test]
    fn one_move_away() {
        let (result, _) = bfs(ONE_MOVE);
        let solution = result.into_solution().expect("should be solved");
        assert_eq!(solution.path_length(), 2);
        assert_eq!(solution.moves(), vec![Move::Right]);
        // The Up child is dequeued and expanded before the goal child.
        assert_eq!(solution.visited_states(), 7);
    }

    #[test]
    fn two_moves_away() {
        let (result, _) = bfs(TWO_MOVES);
        let solution = result.into_solution().expect("should be solved");
        assert_eq!(solution.path_length(), 3);
        assert_eq!(solution.moves(), vec![Move::Right, Move::Right]);
        assert!(solution.visited_states() > 7);
    }

    #[test]
    fn three_moves_away() {
        let (result, _) = bfs(THREE_MOVES);
        let solution = result.into_solution().expect("should be solved");
        assert_eq!(solution.path_length(), 4);
        assert_eq!(solution.moves(), vec![Move::Down, Move::Right, Move::Down]);
        assert_eq!(solution.goal_node().get_g(), 3);
    }

    #[test]
    fn hardest_instance_needs_31_moves() {
        let (result, _) = bfs(HARDEST);
        let solution = result.into_solution().expect("should be solved");
        assert_eq!(solution.num_moves(), 31);
    }

    #[test]
    fn unsolvable_instance_exhausts_frontier() {
        let (result, statistics) = bfs(UNSOLVABLE);
        assert!(matches!(result, SearchResult::ProvablyUnsolvable));
        assert_eq!(statistics.visited_states(), REACHABLE_STATES);
        assert_eq!(statistics.expanded_nodes(), REACHABLE_STATES);
    }

    #[test]
    fn expansion_limit_stops_search() {
        let task = Task::from_initial_state(state(HARDEST));
        let (result, statistics) = BFS::new(SearchLimits::unlimited().with_expansion_limit(Some(10)))
            .search(&task, &mut ZeroHeuristic::new());
        assert!(matches!(result, SearchResult::ExpansionLimitExceeded));
        assert_eq!(statistics.expanded_nodes(), 10);
    }

    #[test]
    fn memory_limit_stops_search() {
        let task = Task::from_initial_state(state(HARDEST));
        let (result, statistics) = BFS::new(SearchLimits::unlimited().with_memory_limit_mb(Some(0)))
            .search(&task, &mut ZeroHeuristic::new());
        assert!(matches!(result, SearchResult::MemoryLimitExceeded));
        assert_eq!(statistics.expanded_nodes(), 0);
    }
}
