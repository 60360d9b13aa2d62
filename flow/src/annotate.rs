//! Step Annotator
//!
//! Places a display status on its happy path: everything before it is
//! completed, it is current, everything after it is in the future.

use crate::dating::Dating;
use crate::table::Flow;
use stepline_core::{DisplayStatus, Step, StepState};

/// Result of trying to place a display status on a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// The status is a position on the flow.
    Placed(Vec<Step>),
    /// The status is not on the flow; a branch (or the unknown fallback) must run.
    NotInFlow,
}

/// State of the step at `position` when the purchase sits at `index`.
pub fn state_at(position: usize, index: usize) -> StepState {
    match position.cmp(&index) {
        std::cmp::Ordering::Less => StepState::Completed,
        std::cmp::Ordering::Equal => StepState::Current,
        std::cmp::Ordering::Greater => StepState::Future,
    }
}

pub fn annotate(flow: &Flow, display: &DisplayStatus, dating: &Dating<'_>) -> Annotation {
    let Some(index) = display.known().and_then(|status| flow.position(status)) else {
        return Annotation::NotInFlow;
    };

    let steps = flow
        .steps()
        .iter()
        .enumerate()
        .map(|(position, row)| {
            let state = state_at(position, index);
            Step::new(row.id(), row.label, row.description, state)
                .with_occurred_at(dating.for_step(position, row.id(), state))
        })
        .collect();

    Annotation::Placed(steps)
}
