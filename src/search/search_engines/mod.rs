mod astar;
mod best_first;
mod bfs;
mod gbfs;
mod search_engine;
mod search_statistics;
mod solution;
mod termination_condition;

pub use astar::AStar;
pub use bfs::BFS;
pub use gbfs::GBFS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_statistics::SearchStatistics;
pub use solution::{PathStyle, Solution};
pub use termination_condition::{SearchLimits, TerminationCondition};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{validate, HeuristicName, Randomizer, Task};
    use crate::test_utils::*;

    fn solve(engine: SearchEngineName, heuristic: HeuristicName, task: &Task) -> Solution {
        let mut heuristic = heuristic.create();
        let (result, statistics) = engine
            .create(SearchLimits::unlimited())
            .search(task, heuristic.as_mut());
        let solution = result.into_solution().expect("scrambled instance should be solved");
        assert_eq!(statistics.visited_states(), solution.visited_states());
        solution
    }

    #[test]
    fn engines_agree_on_scrambled_instances() {
        for initial_state in scrambled_states(12, 20, 17) {
            let task = Task::from_initial_state(initial_state);
            let breadth = solve(SearchEngineName::BFS, HeuristicName::ZeroHeuristic, &task);
            assert!(validate(&breadth.moves(), &task).is_ok());

            let mut astar_visited = Vec::new();
            for heuristic in [HeuristicName::NumDisplaced, HeuristicName::ManhattanDistance] {
                let astar = solve(SearchEngineName::AStar, heuristic, &task);
                let greedy = solve(SearchEngineName::GBFS, heuristic, &task);
                assert_eq!(astar.path_length(), breadth.path_length(), "{}", task);
                assert!(greedy.path_length() >= breadth.path_length(), "{}", task);
                assert!(astar.visited_states() <= breadth.visited_states(), "{}", task);
                assert!(validate(&astar.moves(), &task).is_ok());
                assert!(validate(&greedy.moves(), &task).is_ok());
                assert_eq!(astar.states()[0], initial_state);
                astar_visited.push(astar.visited_states());
            }
            // Manhattan distance dominates the number of displaced tiles.
            assert!(astar_visited[1] <= astar_visited[0], "{}", task);
        }
    }

    #[test]
    fn every_engine_returns_goal_immediately() {
        let task = Task::from_initial_state(state(GOAL));
        for engine in [SearchEngineName::BFS, SearchEngineName::GBFS, SearchEngineName::AStar] {
            let solution = solve(engine, HeuristicName::ManhattanDistance, &task);
            assert_eq!(solution.path_length(), 1);
            assert_eq!(solution.visited_states(), 1);
            assert!(solution.goal_node().is_root());
        }
    }

    #[test]
    fn custom_goal_is_respected() {
        let goal = state("-12345678");
        let initial_state = Randomizer::seeded(23).scramble(&goal, 15);
        let task = Task::new(initial_state, goal);
        let breadth = solve(SearchEngineName::BFS, HeuristicName::ZeroHeuristic, &task);
        let astar = solve(SearchEngineName::AStar, HeuristicName::ManhattanDistance, &task);
        assert_eq!(breadth.path_length(), astar.path_length());
        assert_eq!(*astar.goal_node().get_state(), goal);
    }

    #[test]
    fn rendered_paths() {
        let task = Task::from_initial_state(state(ONE_MOVE));
        let solution = solve(SearchEngineName::AStar, HeuristicName::ManhattanDistance, &task);
        assert_eq!(
            solution.render(PathStyle::Summary),
            "Instance: 1234567-8, G: 0, H: 1\nInstance: 12345678-, G: 1, H: 0"
        );
        assert_eq!(
            solution.render(PathStyle::Grid),
            "Start\n1 2 3\n4 5 6\n7 - 8\n\nRight\n1 2 3\n4 5 6\n7 8 -\n"
        );
    }
}
