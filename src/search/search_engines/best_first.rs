//! The priority-frontier search shared by greedy best-first search and A*.
//! Both expand the node with the smallest [`FrontierKey`]; they only differ
//! in how the path cost of a child is computed.

use crate::search::{
    search_engines::{SearchLimits, SearchResult, SearchStatistics, Solution, TerminationCondition},
    FrontierKey, Heuristic, HeuristicValue, NodeId, SearchNodeStatus, SearchSpace, State, Task,
};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathCost {
    /// Every node has `g = 0`, so the frontier is ordered by `h` alone
    Ignored,
    /// `g` is the number of moves from the initial state
    Accumulated,
}

impl PathCost {
    fn child_g(&self, parent_g: HeuristicValue) -> HeuristicValue {
        match self {
            PathCost::Ignored => 0,
            PathCost::Accumulated => parent_g + 1,
        }
    }
}

pub(crate) fn best_first_search(
    task: &Task,
    heuristic: &mut dyn Heuristic,
    limits: SearchLimits,
    path_cost: PathCost,
) -> (SearchResult, SearchStatistics) {
    let mut statistics = SearchStatistics::new();
    let mut termination = TerminationCondition::new(limits);
    let mut priority_queue = PriorityQueue::new();
    let mut search_space = SearchSpace::new(task.initial_state);
    let mut sequence = 0u64;

    let root_node = search_space.get_root_node_mut();
    root_node.open(0, heuristic.evaluate(&task.initial_state, &task.goal));
    statistics.increment_evaluated_nodes(1);
    priority_queue.push(
        root_node.get_node_id(),
        Reverse(FrontierKey::new(root_node, sequence)),
    );

    while let Some((node_id, _)) = priority_queue.pop() {
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

        let child_g = path_cost.child_g(g_value);

        // Partition the children into states seen for the first time, which
        // need a heuristic value, and states seen before, which are only
        // revisited if this path to them is cheaper.
        let mut new_states: Vec<State> = Vec::new();
        let mut new_ids: Vec<NodeId> = Vec::new();
        let mut improved_ids: Vec<NodeId> = Vec::new();
        for (transition, successor) in state.successors() {
            let child_node = search_space.insert_or_get_node(successor, transition, node_id);
            if child_node.get_status() == SearchNodeStatus::New {
                new_states.push(successor);
                new_ids.push(child_node.get_node_id());
            } else if child_g < child_node.get_g() {
                child_node.reopen(node_id, transition, child_g);
                improved_ids.push(child_node.get_node_id());
            }
        }
        statistics.increment_generated_nodes(new_ids.len());

        let h_values = heuristic.evaluate_batch(&new_states, &task.goal);
        statistics.increment_evaluated_nodes(h_values.len());
        for (child_id, h_value) in new_ids.into_iter().zip(h_values) {
            let child_node = search_space.get_node_mut(child_id);
            child_node.open(child_g, h_value);
            sequence += 1;
            priority_queue.push(child_id, Reverse(FrontierKey::new(child_node, sequence)));
        }

        for child_id in improved_ids {
            statistics.increment_improved_nodes();
            let child_node = search_space.get_node(child_id);
            sequence += 1;
            // Replaces the priority if the node is still in the frontier.
            priority_queue.push(child_id, Reverse(FrontierKey::new(child_node, sequence)));
        }
    }

    statistics.finalise_search(search_space.len());
    termination.finalise();
    (SearchResult::ProvablyUnsolvable, statistics)
}
