use crate::search::State;
use std::fmt::{self, Display, Formatter};

/// A puzzle instance: where the search starts and the configuration it has
/// to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub initial_state: State,
    pub goal: State,
}

impl Task {
    pub fn new(initial_state: State, goal: State) -> Self {
        Self {
            initial_state,
            goal,
        }
    }

    /// A task towards the standard goal `12345678-`.
    pub fn from_initial_state(initial_state: State) -> Self {
        Self::new(initial_state, State::goal())
    }

    #[inline(always)]
    pub fn is_goal(&self, state: &State) -> bool {
        *state == self.goal
    }

    pub fn is_solvable(&self) -> bool {
        self.initial_state.is_solvable_from(&self.goal)
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.initial_state, self.goal)
    }
}
