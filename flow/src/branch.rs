//! Branch Handler
//!
//! Cancelled, returned, rescheduled and no-show are not positions on a happy
//! path. Each one reconstructs how far the purchase got, partitions the flow
//! around that point and appends a synthetic terminal step marked current.
//!
//! The store only keeps the current status, so "how far did we get" comes from
//! the caller-supplied pre-branch status when there is one. Without it the
//! earliest step is used as the cutoff.

use crate::dating::Dating;
use crate::table::{Flow, FlowStep, branch_step};
use chrono::TimeDelta;
use stepline_core::{DisplayStatus, RawStatus, Role, Status, Step, StepState, TransactionKind};

/// The four ways a purchase can leave its happy path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Cancelled,
    Returned,
    Rescheduled,
    NoShow,
}

impl Branch {
    pub fn from_display(display: &DisplayStatus) -> Option<Self> {
        match display.known()? {
            Status::Cancelled => Some(Branch::Cancelled),
            Status::Returned => Some(Branch::Returned),
            Status::Rescheduled => Some(Branch::Rescheduled),
            Status::NoShow => Some(Branch::NoShow),
            _ => None,
        }
    }

    pub fn status(self) -> Status {
        match self {
            Branch::Cancelled => Status::Cancelled,
            Branch::Returned => Status::Returned,
            Branch::Rescheduled => Status::Rescheduled,
            Branch::NoShow => Status::NoShow,
        }
    }
}

/// What the branch rules need to know beyond the flow itself.
#[derive(Debug, Clone, Copy)]
pub struct BranchInput<'a> {
    /// The status as stored right now
    pub raw: &'a RawStatus,
    /// Last happy-path status before the branch, if the caller kept it
    pub previous: Option<&'a RawStatus>,
    pub role: Role,
}

impl BranchInput<'_> {
    fn reached(&self) -> &RawStatus {
        self.previous.unwrap_or(self.raw)
    }
}

pub fn apply_branch(
    flow: &Flow,
    branch: Branch,
    input: &BranchInput<'_>,
    dating: &Dating<'_>,
) -> Vec<Step> {
    let mut steps = match branch {
        Branch::Cancelled => cancelled(flow, input, dating),
        Branch::Returned => forced(flow, dating, |status| {
            matches!(
                status,
                Status::Pending | Status::Processing | Status::Shipped | Status::Delivered
            )
        }),
        Branch::Rescheduled => rescheduled(flow, dating),
        Branch::NoShow => no_show(flow, input.role, dating),
    };

    // Every branch status has table copy, so this always appends.
    if let Some(row) = branch_step(branch.status(), input.role) {
        steps.push(
            Step::new(row.id(), row.label, row.description, StepState::Current)
                .with_occurred_at(dating.recorded(row.id())),
        );
    }
    steps
}

fn step(position: usize, row: &FlowStep, state: StepState, dating: &Dating<'_>) -> Step {
    Step::new(row.id(), row.label, row.description, state)
        .with_occurred_at(dating.for_step(position, row.id(), state))
}

/// Index of the last step reached before cancellation.
pub fn cancellation_cutoff(flow: &Flow, input: &BranchInput<'_>) -> usize {
    let reached = input.reached();
    match flow.kind {
        TransactionKind::Service => {
            let cutoff = if reached.is(Status::Confirmed)
                || (input.role == Role::Buyer && reached.is(Status::Scheduled))
            {
                Status::Confirmed
            } else if reached.is(Status::InProgress) {
                Status::InProgress
            } else {
                flow.first().status
            };
            flow.position(cutoff).unwrap_or(0)
        }
        TransactionKind::Product => reached
            .known()
            .and_then(|status| flow.position(status))
            .unwrap_or(0),
    }
}

fn cancelled(flow: &Flow, input: &BranchInput<'_>, dating: &Dating<'_>) -> Vec<Step> {
    let cutoff = cancellation_cutoff(flow, input);

    flow.steps()
        .iter()
        .enumerate()
        .map(|(position, row)| {
            let state = match position.cmp(&cutoff) {
                std::cmp::Ordering::Less => StepState::Completed,
                std::cmp::Ordering::Equal if input.raw.is(row.status) => StepState::Current,
                std::cmp::Ordering::Equal => StepState::Completed,
                std::cmp::Ordering::Greater => StepState::Skipped,
            };
            step(position, row, state, dating)
        })
        .collect()
}

/// Steps matching `done` are completed, the rest stay in the future.
fn forced(flow: &Flow, dating: &Dating<'_>, done: impl Fn(Status) -> bool) -> Vec<Step> {
    flow.steps()
        .iter()
        .enumerate()
        .map(|(position, row)| {
            let state = if done(row.status) {
                StepState::Completed
            } else {
                StepState::Future
            };
            step(position, row, state, dating)
        })
        .collect()
}

fn rescheduled(flow: &Flow, dating: &Dating<'_>) -> Vec<Step> {
    let mut steps = forced(flow, dating, |status| {
        matches!(status, Status::Requested | Status::Confirmed)
    });
    // Confirmation is dated one day after creation, whatever the interval.
    if let Some(confirmed) = steps.iter_mut().find(|s| s.id == Status::Confirmed.as_str()) {
        confirmed.occurred_at = dating
            .recorded(&confirmed.id)
            .or_else(|| dating.after_creation(TimeDelta::days(1)));
    }
    steps
}

fn no_show(flow: &Flow, role: Role, dating: &Dating<'_>) -> Vec<Step> {
    let cutoff_status = match role {
        Role::Seller if flow.contains(Status::Scheduled) => Status::Scheduled,
        _ => Status::Confirmed,
    };
    let cutoff = flow.position(cutoff_status);

    flow.steps()
        .iter()
        .enumerate()
        .map(|(position, row)| {
            let state = match cutoff {
                Some(cutoff) if position <= cutoff => StepState::Completed,
                _ => StepState::Skipped,
            };
            step(position, row, state, dating)
        })
        .collect()
}
