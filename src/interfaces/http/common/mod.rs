//! Common HTTP building blocks

pub mod validated_json;

pub use validated_json::ValidatedJson;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard API response envelope.
///
/// Every REST endpoint returns data wrapped in this shape.
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload; `null` on failure
    pub data: Option<T>,
    /// Error description; absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
