use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a step is drawn relative to the purchase's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Current,
    Future,
    Skipped,
}

impl StepState {
    pub fn as_str(self) -> &'static str {
        match self {
            StepState::Completed => "completed",
            StepState::Current => "current",
            StepState::Future => "future",
            StepState::Skipped => "skipped",
        }
    }
}

/// One annotated entry in a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Stable id, unique within one timeline
    pub id: String,
    pub label: String,
    pub state: StepState,
    pub description: String,
    /// When the step happened. Dates on completed steps may be synthetic
    /// placeholders (creation time plus a fixed interval per position) and are
    /// only meant for display ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<DateTime<Utc>>,
}

impl Step {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        state: StepState,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            state,
            description: description.into(),
            occurred_at: None,
        }
    }

    pub fn with_occurred_at(mut self, occurred_at: Option<DateTime<Utc>>) -> Self {
        self.occurred_at = occurred_at;
        self
    }
}
