//! Errors raised at the boundaries of the search crate. Invariant violations
//! are rejected when a [`State`](crate::search::State) is built, and a
//! solution that does not replay is reported by
//! [`validate`](crate::search::validate).

use crate::search::{Move, State};
use thiserror::Error;

/// A puzzle configuration that does not hold exactly the symbols `1`..`8`
/// and a single blank `-`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidStateError {
    #[error("expected {expected} symbols, got {got} in '{input}'")]
    WrongLength {
        expected: usize,
        got: usize,
        input: String,
    },

    #[error("unknown symbol '{symbol}' at position {position} in '{input}'")]
    UnknownSymbol {
        symbol: char,
        position: usize,
        input: String,
    },

    #[error("symbol '{symbol}' appears more than once in '{input}'")]
    DuplicateSymbol { symbol: char, input: String },
}

/// A move sequence that does not lead from the initial state to the goal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPlanError {
    #[error("move {transition} at step {step} is not applicable in state {state}")]
    InapplicableMove {
        step: usize,
        transition: Move,
        state: State,
    },

    #[error("plan does not reach the goal, final state is {final_state}")]
    GoalNotReached { final_state: State },
}
