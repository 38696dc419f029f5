use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for every failed request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    /// Always `false`.
    pub success: bool,
    /// Stable machine-readable failure kind, e.g. `already_claimed`.
    pub error_kind: String,
    /// Human readable message safe to show to the caller.
    pub message: String,
}

impl ErrorDto {
    pub fn new(error_kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_kind: error_kind.into(),
            message: message.into(),
        }
    }
}

/// Body returned by endpoints that only confirm an action.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
