//! Shared types for the publishing API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome envelope for publish operations.
///
/// A plain transfer shape: no invariant ties `success` to `message` or
/// `data`, and no runtime validation is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResponse {
    /// Whether the operation succeeded.
    pub success: bool,

    /// Human-readable outcome description.
    pub message: String,

    /// Optional payload carried alongside the outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl PublishResponse {
    /// Successful envelope without payload.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Failed envelope without payload.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Attach a payload to the envelope.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
