use crate::badge::Badge;
use crate::timeline::Timeline;
use schemars::JsonSchema;
use serde::Serialize;

/// What a rendering layer receives for one purchase: a badge plus the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub badge: Badge,
    pub timeline: Timeline,
}
