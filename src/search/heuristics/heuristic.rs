use crate::search::heuristics::{ManhattanDistance, NumDisplaced, ZeroHeuristic};
use crate::search::State;
use std::fmt::Debug;

/// A heuristic estimate of the number of moves left to reach the goal.
pub type HeuristicValue = u32;

pub trait Heuristic: Debug {
    /// Estimate the distance from `state` to `goal`.
    fn evaluate(&mut self, state: &State, goal: &State) -> HeuristicValue;

    /// Evaluate a batch of states against the same goal. The default
    /// implementation simply calls `evaluate` for each state sequentially.
    fn evaluate_batch(&mut self, states: &[State], goal: &State) -> Vec<HeuristicValue> {
        states
            .iter()
            .map(|state| self.evaluate(state, goal))
            .collect()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "The number of tiles out of place.")]
    NumDisplaced,
    #[clap(
        name = "manhattan",
        help = "The sum of the row and column distances of each tile from its goal cell."
    )]
    ManhattanDistance,
    #[clap(name = "zero", help = "The zero heuristic.")]
    ZeroHeuristic,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::NumDisplaced => Box::new(NumDisplaced::new()),
            HeuristicName::ManhattanDistance => Box::new(ManhattanDistance::new()),
            HeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }

    /// Human readable name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            HeuristicName::NumDisplaced => "Number of Tiles Displaced",
            HeuristicName::ManhattanDistance => "Manhattan Distance",
            HeuristicName::ZeroHeuristic => "Zero",
        }
    }
}
