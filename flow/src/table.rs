//! Flow Table - The Happy Paths
//!
//! One static, ordered step list per (transaction kind, role) pair, plus the
//! copy for the synthetic steps appended on branches. Nothing here computes;
//! it is lookup only.

use stepline_core::{Role, Status, TransactionKind};

/// A row of the flow table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowStep {
    pub status: Status,
    pub label: &'static str,
    pub description: &'static str,
}

impl FlowStep {
    const fn new(status: Status, label: &'static str, description: &'static str) -> Self {
        FlowStep {
            status,
            label,
            description,
        }
    }

    /// Step id, which is the status wire name.
    pub fn id(&self) -> &'static str {
        self.status.as_str()
    }
}

static PRODUCT_FLOW: [FlowStep; 4] = [
    FlowStep::new(Status::Pending, "Order Placed", "Your order has been placed"),
    FlowStep::new(Status::Processing, "Processing", "The seller is preparing the order"),
    FlowStep::new(Status::Shipped, "Shipped", "The order is on its way"),
    FlowStep::new(Status::Delivered, "Delivered", "The order has been delivered"),
];

static SERVICE_BUYER_FLOW: [FlowStep; 4] = [
    FlowStep::new(
        Status::Requested,
        "Booking Requested",
        "Waiting for the provider to respond",
    ),
    FlowStep::new(Status::Confirmed, "Confirmed", "The provider confirmed your booking"),
    FlowStep::new(Status::InProgress, "In Progress", "The service is underway"),
    FlowStep::new(Status::Completed, "Completed", "The service has been completed"),
];

static SERVICE_SELLER_FLOW: [FlowStep; 5] = [
    FlowStep::new(
        Status::Requested,
        "Booking Requested",
        "A customer requested a booking",
    ),
    FlowStep::new(Status::Confirmed, "Confirmed", "You accepted the booking"),
    FlowStep::new(Status::Scheduled, "Scheduled", "The appointment is on your calendar"),
    FlowStep::new(Status::InProgress, "In Progress", "The service is underway"),
    FlowStep::new(Status::Completed, "Completed", "The service has been completed"),
];

/// The happy path for one (kind, role) pair.
#[derive(Debug, Clone, Copy)]
pub struct Flow {
    pub kind: TransactionKind,
    pub role: Role,
    steps: &'static [FlowStep],
}

impl Flow {
    /// Total over both enums; there is no pair without an entry.
    pub fn for_transaction(kind: TransactionKind, role: Role) -> Self {
        let steps: &'static [FlowStep] = match (kind, role) {
            (TransactionKind::Product, _) => &PRODUCT_FLOW,
            (TransactionKind::Service, Role::Buyer) => &SERVICE_BUYER_FLOW,
            (TransactionKind::Service, Role::Seller) => &SERVICE_SELLER_FLOW,
        };
        Flow { kind, role, steps }
    }

    pub fn steps(&self) -> &'static [FlowStep] {
        self.steps
    }

    pub fn position(&self, status: Status) -> Option<usize> {
        self.steps.iter().position(|step| step.status == status)
    }

    pub fn contains(&self, status: Status) -> bool {
        self.position(status).is_some()
    }

    pub fn first(&self) -> &'static FlowStep {
        &self.steps[0]
    }
}

/// Shorthand for `Flow::for_transaction(kind, role).steps()`.
pub fn flow_for(kind: TransactionKind, role: Role) -> &'static [FlowStep] {
    Flow::for_transaction(kind, role).steps()
}

/// Copy for the synthetic step appended when a purchase leaves the happy path.
///
/// Returns `None` for statuses that are positions on a happy path.
pub fn branch_step(status: Status, role: Role) -> Option<FlowStep> {
    let step = match status {
        Status::Cancelled => FlowStep::new(
            Status::Cancelled,
            "Cancelled",
            "This transaction was cancelled",
        ),
        Status::Returned => FlowStep::new(Status::Returned, "Returned", "The order was returned"),
        Status::Rescheduled => FlowStep::new(
            Status::Rescheduled,
            "Rescheduled",
            "The appointment has been moved to a new time",
        ),
        Status::NoShow => FlowStep::new(
            Status::NoShow,
            "No Show",
            match role {
                Role::Buyer => "Appointment missed",
                Role::Seller => "Customer did not attend",
            },
        ),
        _ => return None,
    };
    Some(step)
}

pub const UNKNOWN_STEP_ID: &str = "unknown";
pub const UNKNOWN_STEP_LABEL: &str = "Unknown Status";
pub const UNKNOWN_STEP_DESCRIPTION: &str = "This status could not be recognised";
