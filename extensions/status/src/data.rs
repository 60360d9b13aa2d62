//! Wire contract
//!
//! The JSON a caller (e.g. an order-details view) sends in. Timestamps stay
//! strings on the wire so a malformed one degrades to "no date" instead of
//! failing the whole request.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stepline_core::{RawStatus, Role, TransactionKind};
use stepline_flow::ProjectionInput;

/// Input contract for one projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    /// Status as stored; unrecognized values render as an unknown step
    #[schemars(with = "String")]
    pub raw_status: RawStatus,
    pub transaction_kind: TransactionKind,
    pub role: Role,
    /// RFC 3339 creation time of the order or booking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Last happy-path status before a cancellation or no-show was stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub previous_status: Option<RawStatus>,
    /// Recorded RFC 3339 times keyed by step id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub step_timestamps: BTreeMap<String, String>,
}

impl ProjectionRequest {
    pub fn new(raw_status: impl Into<RawStatus>, kind: TransactionKind, role: Role) -> Self {
        Self {
            raw_status: raw_status.into(),
            transaction_kind: kind,
            role,
            creation_timestamp: None,
            transaction_id: None,
            previous_status: None,
            step_timestamps: BTreeMap::new(),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Convert to engine input, dropping timestamps that do not parse.
    pub fn into_input(self) -> ProjectionInput {
        let mut input = ProjectionInput::new(self.raw_status, self.transaction_kind, self.role);
        input.created_at = self
            .creation_timestamp
            .as_deref()
            .and_then(|ts| parse_timestamp("creationTimestamp", ts));
        input.previous_status = self.previous_status;
        input.transaction_id = self.transaction_id;
        input.step_timestamps = self
            .step_timestamps
            .iter()
            .filter_map(|(id, ts)| parse_timestamp(id, ts).map(|at| (id.clone(), at)))
            .collect();
        input
    }
}

fn parse_timestamp(field: &str, value: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value.trim()) {
        Ok(at) => Some(at.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!(field, value, error = %e, "Ignoring malformed timestamp");
            None
        }
    }
}
