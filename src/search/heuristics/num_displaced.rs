use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    State, BLANK, CELLS,
};

/// Counts the tiles that are not in their goal cell. The blank is not
/// counted, so the value lies in `0..=8`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumDisplaced;

impl NumDisplaced {
    pub fn new() -> Self {
        NumDisplaced {}
    }
}

impl Heuristic for NumDisplaced {
    fn evaluate(&mut self, state: &State, goal: &State) -> HeuristicValue {
        num_displaced(state, goal)
    }
}

pub fn num_displaced(state: &State, goal: &State) -> HeuristicValue {
    (0..CELLS)
        .filter(|&position| {
            let tile = state.tile_at(position);
            tile != BLANK && tile != goal.tile_at(position)
        })
        .count() as HeuristicValue
}
