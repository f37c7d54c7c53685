use crate::search::{InvalidPlanError, Move, Task};

/// Replay `plan` from the initial state of `task` and check that every move
/// is legal and that the goal is reached.
pub fn validate(plan: &[Move], task: &Task) -> Result<(), InvalidPlanError> {
    let mut cur_state = task.initial_state;
    for (step, &transition) in plan.iter().enumerate() {
        cur_state = cur_state
            .apply(transition)
            .ok_or(InvalidPlanError::InapplicableMove {
                step,
                transition,
                state: cur_state,
            })?;
    }

    if !task.is_goal(&cur_state) {
        return Err(InvalidPlanError::GoalNotReached {
            final_state: cur_state,
        });
    }

    Ok(())
}
