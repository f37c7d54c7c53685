use crate::search::{
    search_engines::{AStar, SearchLimits, SearchStatistics, Solution, BFS, GBFS},
    Heuristic, Task,
};
use std::fmt::Debug;

#[derive(Debug)]
pub enum SearchResult {
    /// The search reached the goal
    Success(Solution),
    /// The frontier ran empty, the goal is not reachable from the initial
    /// state
    ProvablyUnsolvable,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine expanded as many nodes as it was allowed to
    ExpansionLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
}

impl SearchResult {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchResult::Success(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchResult::Success(solution) => Some(solution),
            _ => None,
        }
    }
}

pub trait SearchEngine: Debug {
    /// Search from `task.initial_state` to `task.goal`. Engines that do not
    /// order their frontier by heuristic value still evaluate it so the
    /// nodes carry an estimate.
    fn search(
        &mut self,
        task: &Task,
        heuristic: &mut dyn Heuristic,
    ) -> (SearchResult, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Breadth-first search.")]
    BFS,
    #[clap(help = "Greedy best-first search, ordered by the heuristic alone.")]
    GBFS,
    #[clap(name = "astar", help = "A* search, ordered by path cost plus heuristic.")]
    AStar,
}

impl SearchEngineName {
    pub fn create(&self, limits: SearchLimits) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::BFS => Box::new(BFS::new(limits)),
            SearchEngineName::GBFS => Box::new(GBFS::new(limits)),
            SearchEngineName::AStar => Box::new(AStar::new(limits)),
        }
    }

    /// Human readable name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            SearchEngineName::BFS => "Breadth First Search",
            SearchEngineName::GBFS => "Greedy Best First Search",
            SearchEngineName::AStar => "A-Star Search",
        }
    }

    /// Whether the frontier order depends on the heuristic.
    pub fn is_informed(&self) -> bool {
        !matches!(self, SearchEngineName::BFS)
    }
}
