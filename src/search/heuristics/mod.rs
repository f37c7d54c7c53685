mod heuristic;
mod manhattan_distance;
mod num_displaced;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan_distance::{manhattan_distance, ManhattanDistance};
pub use num_displaced::{num_displaced, NumDisplaced};
pub use zero_heuristic::ZeroHeuristic;
