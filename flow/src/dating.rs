//! Step dates.
//!
//! Only the creation time and any explicitly recorded step times are real.
//! Completed steps without a recorded time get a synthetic placeholder of
//! `created_at + position * interval`, which is approximate and exists for
//! display ordering only.

use chrono::{DateTime, TimeDelta, Utc};
use std::collections::BTreeMap;
use stepline_core::StepState;

#[derive(Debug, Clone, Copy)]
pub struct Dating<'a> {
    created_at: Option<DateTime<Utc>>,
    interval: TimeDelta,
    recorded: &'a BTreeMap<String, DateTime<Utc>>,
}

impl<'a> Dating<'a> {
    pub fn new(
        created_at: Option<DateTime<Utc>>,
        interval: TimeDelta,
        recorded: &'a BTreeMap<String, DateTime<Utc>>,
    ) -> Self {
        Self {
            created_at,
            interval,
            recorded,
        }
    }

    pub fn recorded(&self, id: &str) -> Option<DateTime<Utc>> {
        self.recorded.get(id).copied()
    }

    /// `None` when there is no creation time or the arithmetic overflows.
    pub fn synthetic(&self, position: usize) -> Option<DateTime<Utc>> {
        let steps = i32::try_from(position).ok()?;
        let offset = self.interval.checked_mul(steps)?;
        self.created_at?.checked_add_signed(offset)
    }

    /// Creation time shifted by a fixed `offset`, independent of the interval.
    pub fn after_creation(&self, offset: TimeDelta) -> Option<DateTime<Utc>> {
        self.created_at?.checked_add_signed(offset)
    }

    /// Date for a happy-path step at `position` drawn as `state`.
    pub fn for_step(&self, position: usize, id: &str, state: StepState) -> Option<DateTime<Utc>> {
        if position == 0 {
            return self.created_at.or_else(|| self.recorded(id));
        }
        match state {
            StepState::Completed => self.recorded(id).or_else(|| self.synthetic(position)),
            StepState::Current => self.recorded(id),
            StepState::Future | StepState::Skipped => None,
        }
    }
}
