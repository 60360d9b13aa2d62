//! Projection Engine
//!
//! `StatusMapper -> FlowTable -> StepAnnotator -> (BranchHandler) -> Deduplicator`.
//!
//! Every call is a pure function of its input and options. Nothing is cached
//! and nothing is shared except the static flow table.

use crate::annotate::{Annotation, annotate};
use crate::branch::{Branch, BranchInput, apply_branch};
use crate::dating::Dating;
use crate::dedupe::dedupe;
use crate::table::{Flow, UNKNOWN_STEP_DESCRIPTION, UNKNOWN_STEP_ID, UNKNOWN_STEP_LABEL};
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::BTreeMap;
use stepline_core::{
    Badge, ProgressView, RawStatus, Role, Step, StepState, Timeline, TransactionKind, resolve,
};

/// Tunables for a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Spacing between synthetic dates on completed steps
    pub synthetic_interval: TimeDelta,
}

impl ProjectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_synthetic_interval(mut self, interval: TimeDelta) -> Self {
        self.synthetic_interval = interval;
        self
    }
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            synthetic_interval: TimeDelta::days(1),
        }
    }
}

/// Everything a projection depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionInput {
    pub raw_status: RawStatus,
    pub kind: TransactionKind,
    pub role: Role,
    /// Creation time of the order or booking; dates are omitted without it
    pub created_at: Option<DateTime<Utc>>,
    /// Last happy-path status before a branch status was stored
    pub previous_status: Option<RawStatus>,
    /// Recorded times keyed by step id
    pub step_timestamps: BTreeMap<String, DateTime<Utc>>,
    pub transaction_id: Option<String>,
}

impl ProjectionInput {
    pub fn new(raw_status: impl Into<RawStatus>, kind: TransactionKind, role: Role) -> Self {
        Self {
            raw_status: raw_status.into(),
            kind,
            role,
            created_at: None,
            previous_status: None,
            step_timestamps: BTreeMap::new(),
            transaction_id: None,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_previous_status(mut self, previous: impl Into<RawStatus>) -> Self {
        self.previous_status = Some(previous.into());
        self
    }

    pub fn with_step_timestamp(mut self, id: impl Into<String>, at: DateTime<Utc>) -> Self {
        self.step_timestamps.insert(id.into(), at);
        self
    }

    pub fn with_transaction_id(mut self, id: impl Into<String>) -> Self {
        self.transaction_id = Some(id.into());
        self
    }
}

fn unknown_step() -> Step {
    Step::new(
        UNKNOWN_STEP_ID,
        UNKNOWN_STEP_LABEL,
        UNKNOWN_STEP_DESCRIPTION,
        StepState::Current,
    )
}

/// Project one purchase status onto its badge and timeline. Never fails.
pub fn project(input: &ProjectionInput, options: &ProjectionOptions) -> ProgressView {
    let display_status = resolve(&input.raw_status, input.role);
    let flow = Flow::for_transaction(input.kind, input.role);
    let dating = Dating::new(
        input.created_at,
        options.synthetic_interval,
        &input.step_timestamps,
    );

    let steps = match annotate(&flow, &display_status, &dating) {
        Annotation::Placed(steps) => {
            tracing::debug!(
                raw = %input.raw_status,
                display = %display_status,
                kind = %input.kind,
                role = %input.role,
                "Placed status on happy path"
            );
            steps
        }
        Annotation::NotInFlow => match Branch::from_display(&display_status) {
            Some(branch) => {
                tracing::debug!(
                    raw = %input.raw_status,
                    previous = ?input.previous_status,
                    kind = %input.kind,
                    role = %input.role,
                    ?branch,
                    "Status left the happy path"
                );
                let branch_input = BranchInput {
                    raw: &input.raw_status,
                    previous: input.previous_status.as_ref(),
                    role: input.role,
                };
                apply_branch(&flow, branch, &branch_input, &dating)
            }
            None => {
                tracing::warn!(
                    raw = %input.raw_status,
                    kind = %input.kind,
                    role = %input.role,
                    transaction_id = ?input.transaction_id,
                    "Unrecognized status for this flow, rendering unknown step"
                );
                vec![unknown_step()]
            }
        },
    };

    let timeline = Timeline::from_steps(dedupe(steps))
        .unwrap_or_else(|| Timeline::single(unknown_step()));

    ProgressView {
        transaction_id: input.transaction_id.clone(),
        badge: Badge::for_status(&display_status),
        timeline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stepline_core::Status;
    use stepline_core::StepState::{Completed, Current, Future, Skipped};

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap()
    }

    fn view(input: ProjectionInput) -> ProgressView {
        project(&input.with_created_at(created()), &ProjectionOptions::default())
    }

    #[test]
    fn test_requested_booking_for_buyer() {
        let view = view(ProjectionInput::new(
            Status::Requested,
            TransactionKind::Service,
            Role::Buyer,
        ));
        assert_eq!(
            view.timeline.states(),
            vec![
                ("requested", Current),
                ("confirmed", Future),
                ("in_progress", Future),
                ("completed", Future),
            ]
        );
        assert_eq!(view.badge.label, "Status: Booking Requested");
    }

    #[test]
    fn test_scheduled_booking_for_seller() {
        let view = view(ProjectionInput::new(
            Status::Scheduled,
            TransactionKind::Service,
            Role::Seller,
        ));
        assert_eq!(
            view.timeline.states(),
            vec![
                ("requested", Completed),
                ("confirmed", Completed),
                ("scheduled", Current),
                ("in_progress", Future),
                ("completed", Future),
            ]
        );
        assert_eq!(view.badge.label, "Status: Scheduled");
    }

    #[test]
    fn test_confirmed_booking_reads_scheduled_for_seller() {
        let view = view(ProjectionInput::new(
            Status::Confirmed,
            TransactionKind::Service,
            Role::Seller,
        ));
        assert_eq!(view.badge.display_status.as_str(), "scheduled");
        assert_eq!(view.timeline.current().map(|s| s.id.as_str()), Some("scheduled"));
    }

    #[test]
    fn test_cancelled_after_confirmation_for_buyer() {
        let view = view(
            ProjectionInput::new(Status::Cancelled, TransactionKind::Service, Role::Buyer)
                .with_previous_status(Status::Confirmed),
        );
        assert_eq!(
            view.timeline.states(),
            vec![
                ("requested", Completed),
                ("confirmed", Completed),
                ("in_progress", Skipped),
                ("completed", Skipped),
                ("cancelled", Current),
            ]
        );
        assert_eq!(view.badge.label, "Status: Cancelled");
    }

    #[test]
    fn test_delivered_product() {
        let view = view(ProjectionInput::new(
            Status::Delivered,
            TransactionKind::Product,
            Role::Buyer,
        ));
        assert_eq!(
            view.timeline.states(),
            vec![
                ("pending", Completed),
                ("processing", Completed),
                ("shipped", Completed),
                ("delivered", Current),
            ]
        );
        assert_eq!(view.timeline.steps()[0].occurred_at, Some(created()));
        assert_eq!(
            view.timeline.steps()[2].occurred_at,
            Some(created() + TimeDelta::days(2))
        );
    }

    #[test]
    fn test_returned_product() {
        let view = view(ProjectionInput::new(
            Status::Returned,
            TransactionKind::Product,
            Role::Buyer,
        ));
        let states = view.timeline.states();
        assert_eq!(states.len(), 5);
        assert!(states[..4].iter().all(|(_, s)| *s == Completed));
        assert_eq!(states[4], ("returned", Current));
    }

    #[test]
    fn test_no_show_for_seller() {
        let view = view(ProjectionInput::new(
            Status::NoShow,
            TransactionKind::Service,
            Role::Seller,
        ));
        assert_eq!(
            view.timeline.states(),
            vec![
                ("requested", Completed),
                ("confirmed", Completed),
                ("scheduled", Completed),
                ("in_progress", Skipped),
                ("completed", Skipped),
                ("no_show", Current),
            ]
        );
        assert_eq!(
            view.timeline.get("no_show").map(|s| s.description.as_str()),
            Some("Customer did not attend")
        );
    }

    #[test]
    fn test_unrecognized_status_renders_single_unknown_step() {
        let view = view(ProjectionInput::new(
            "awaiting_customs",
            TransactionKind::Product,
            Role::Buyer,
        ));
        assert_eq!(view.timeline.len(), 1);
        let step = &view.timeline.steps()[0];
        assert_eq!(step.id, "unknown");
        assert_eq!(step.label, "Unknown Status");
        assert_eq!(step.state, Current);
        assert_eq!(view.badge.label, "Status: Unknown");
        assert_eq!(view.badge.display_status.as_str(), "awaiting_customs");
    }

    #[test]
    fn test_status_from_the_other_kind_is_unknown() {
        let view = view(ProjectionInput::new(
            Status::Shipped,
            TransactionKind::Service,
            Role::Seller,
        ));
        assert_eq!(view.timeline.states(), vec![("unknown", Current)]);
    }

    #[test]
    fn test_missing_creation_time_still_projects() {
        let input = ProjectionInput::new(Status::Shipped, TransactionKind::Product, Role::Seller);
        let view = project(&input, &ProjectionOptions::default());

        assert_eq!(view.timeline.len(), 4);
        assert!(view.timeline.iter().all(|s| s.occurred_at.is_none()));
    }

    #[test]
    fn test_projection_is_idempotent() {
        for status in Status::ALL {
            for kind in TransactionKind::ALL {
                for role in Role::ALL {
                    let input = ProjectionInput::new(status, kind, role)
                        .with_created_at(created())
                        .with_previous_status(Status::InProgress)
                        .with_transaction_id("ord-1");
                    let options = ProjectionOptions::default();

                    let first = serde_json::to_string(&project(&input, &options)).unwrap();
                    let second = serde_json::to_string(&project(&input, &options)).unwrap();
                    assert_eq!(first, second);
                }
            }
        }
    }

    #[test]
    fn test_every_projection_is_non_empty_and_unique() {
        for status in Status::ALL {
            for kind in TransactionKind::ALL {
                for role in Role::ALL {
                    let view = view(ProjectionInput::new(status, kind, role));
                    assert!(!view.timeline.is_empty());

                    let mut ids: Vec<_> = view.timeline.iter().map(|s| s.id.as_str()).collect();
                    let total = ids.len();
                    ids.sort_unstable();
                    ids.dedup();
                    assert_eq!(ids.len(), total, "{status}/{kind}/{role}");

                    let current = view
                        .timeline
                        .iter()
                        .filter(|s| s.state == Current)
                        .count();
                    assert_eq!(current, 1, "{status}/{kind}/{role}");
                }
            }
        }
    }

    #[test]
    fn test_custom_synthetic_interval() {
        let input = ProjectionInput::new(Status::Delivered, TransactionKind::Product, Role::Buyer)
            .with_created_at(created());
        let options = ProjectionOptions::new().with_synthetic_interval(TimeDelta::hours(6));
        let view = project(&input, &options);

        assert_eq!(
            view.timeline.steps()[1].occurred_at,
            Some(created() + TimeDelta::hours(6))
        );
    }

    #[test]
    fn test_transaction_id_is_echoed() {
        let view = view(
            ProjectionInput::new(Status::Pending, TransactionKind::Product, Role::Buyer)
                .with_transaction_id("ord-42"),
        );
        assert_eq!(view.transaction_id.as_deref(), Some("ord-42"));
    }
}
