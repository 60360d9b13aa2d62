//! Status Vocabulary
//!
//! The closed set of statuses a purchase can be stored with, the two
//! transaction kinds and the two viewer roles.

use crate::error::VocabularyError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A known stored status.
///
/// Product orders use `Pending..=Returned`, service bookings use
/// `Requested..=Rescheduled`, and `Cancelled` is shared by both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Returned,
    Requested,
    Confirmed,
    Scheduled,
    InProgress,
    Completed,
    NoShow,
    Rescheduled,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 13] = [
        Status::Pending,
        Status::Processing,
        Status::Shipped,
        Status::Delivered,
        Status::Returned,
        Status::Requested,
        Status::Confirmed,
        Status::Scheduled,
        Status::InProgress,
        Status::Completed,
        Status::NoShow,
        Status::Rescheduled,
        Status::Cancelled,
    ];

    /// Wire name, also used as the step id.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Processing => "processing",
            Status::Shipped => "shipped",
            Status::Delivered => "delivered",
            Status::Returned => "returned",
            Status::Requested => "requested",
            Status::Confirmed => "confirmed",
            Status::Scheduled => "scheduled",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::NoShow => "no_show",
            Status::Rescheduled => "rescheduled",
            Status::Cancelled => "cancelled",
        }
    }

    /// Statuses that diverge from the happy path instead of sitting on it.
    pub fn is_branch(self) -> bool {
        matches!(
            self,
            Status::Cancelled | Status::Returned | Status::Rescheduled | Status::NoShow
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| VocabularyError::UnknownStatus(s.to_string()))
    }
}

/// The status exactly as stored, before role resolution.
///
/// Anything outside the vocabulary is carried verbatim as `Unrecognized`
/// rather than rejected; the projection renders it as an unknown step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RawStatus {
    Known(Status),
    Unrecognized(String),
}

impl RawStatus {
    /// Infallible parse. Unknown names become `Unrecognized`.
    pub fn parse(s: &str) -> Self {
        match s.parse::<Status>() {
            Ok(status) => RawStatus::Known(status),
            Err(_) => RawStatus::Unrecognized(s.to_string()),
        }
    }

    pub fn known(&self) -> Option<Status> {
        match self {
            RawStatus::Known(status) => Some(*status),
            RawStatus::Unrecognized(_) => None,
        }
    }

    pub fn is(&self, status: Status) -> bool {
        self.known() == Some(status)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RawStatus::Known(status) => status.as_str(),
            RawStatus::Unrecognized(raw) => raw,
        }
    }
}

impl From<Status> for RawStatus {
    fn from(status: Status) -> Self {
        RawStatus::Known(status)
    }
}

impl From<String> for RawStatus {
    fn from(s: String) -> Self {
        match s.parse::<Status>() {
            Ok(status) => RawStatus::Known(status),
            Err(_) => RawStatus::Unrecognized(s),
        }
    }
}

impl From<&str> for RawStatus {
    fn from(s: &str) -> Self {
        RawStatus::parse(s)
    }
}

impl From<RawStatus> for String {
    fn from(raw: RawStatus) -> Self {
        match raw {
            RawStatus::Known(status) => status.as_str().to_string(),
            RawStatus::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for RawStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is looking at the purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Buyer, Role::Seller];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buyer" => Ok(Role::Buyer),
            "seller" => Ok(Role::Seller),
            _ => Err(VocabularyError::UnknownRole(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Product,
    Service,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Product, TransactionKind::Service];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Product => "product",
            TransactionKind::Service => "service",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "product" => Ok(TransactionKind::Product),
            "service" => Ok(TransactionKind::Service),
            _ => Err(VocabularyError::UnknownKind(s.to_string())),
        }
    }
}
