use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    State, Tile, BLANK, CELLS, SIDE,
};

/// Sums, over every tile, the number of rows plus the number of columns
/// between its cell and its goal cell. Dominates [`NumDisplaced`] since every
/// displaced tile is at least one step away.
///
/// [`NumDisplaced`]: crate::search::heuristics::NumDisplaced
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

impl ManhattanDistance {
    pub fn new() -> Self {
        ManhattanDistance {}
    }
}

impl Heuristic for ManhattanDistance {
    fn evaluate(&mut self, state: &State, goal: &State) -> HeuristicValue {
        manhattan_distance(state, goal)
    }
}

pub fn manhattan_distance(state: &State, goal: &State) -> HeuristicValue {
    let positions = state.positions();
    let goal_positions = goal.positions();
    (0..CELLS as Tile)
        .filter(|&tile| tile != BLANK)
        .map(|tile| {
            let from = positions[tile as usize];
            let to = goal_positions[tile as usize];
            ((from / SIDE).abs_diff(to / SIDE) + (from % SIDE).abs_diff(to % SIDE))
                as HeuristicValue
        })
        .sum()
}
