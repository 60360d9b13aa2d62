use crate::mapper::DisplayStatus;
use crate::vocabulary::Status;
use schemars::JsonSchema;
use serde::Serialize;

/// The single status pill shown next to a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub label: String,
    #[schemars(with = "String")]
    pub display_status: DisplayStatus,
}

impl Badge {
    pub fn for_status(display: &DisplayStatus) -> Self {
        Self {
            label: badge_label(display).to_string(),
            display_status: display.clone(),
        }
    }
}

/// Fixed badge text keyed by display status.
pub fn badge_label(display: &DisplayStatus) -> &'static str {
    match display.known() {
        Some(Status::Pending) => "Status: Pending",
        Some(Status::Processing) => "Status: Processing",
        Some(Status::Shipped) => "Status: Shipped",
        Some(Status::Delivered) => "Status: Delivered",
        Some(Status::Returned) => "Status: Returned",
        Some(Status::Requested) => "Status: Booking Requested",
        Some(Status::Confirmed) => "Status: Confirmed",
        Some(Status::Scheduled) => "Status: Scheduled",
        Some(Status::InProgress) => "Status: In Progress",
        Some(Status::Completed) => "Status: Completed",
        Some(Status::NoShow) => "Status: No Show",
        Some(Status::Rescheduled) => "Status: Rescheduled",
        Some(Status::Cancelled) => "Status: Cancelled",
        None => "Status: Unknown",
    }
}
