//! The state-space search core: puzzle states, heuristics, search nodes and
//! the search engines that use them.

mod error;
pub mod heuristics;
mod randomizer;
pub mod search_engines;
mod search_node;
mod search_space;
pub mod states;
mod task;
mod validate;
mod verbosity;

pub use error::{InvalidPlanError, InvalidStateError};
pub use heuristics::{
    manhattan_distance, num_displaced, Heuristic, HeuristicName, HeuristicValue,
    ManhattanDistance, NumDisplaced, ZeroHeuristic,
};
pub use randomizer::{randomize, Randomizer};
pub use search_engines::{
    PathStyle, SearchEngine, SearchEngineName, SearchLimits, SearchResult, SearchStatistics,
    Solution,
};
pub use search_node::{frontier_order, FrontierKey, NodeId, SearchNode, SearchNodeStatus};
pub use search_space::SearchSpace;
pub use states::{Move, State, Tile, BLANK, CELLS, SIDE};
pub use task::Task;
pub use validate::validate;
pub use verbosity::Verbosity;
