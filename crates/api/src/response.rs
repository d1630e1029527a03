//! Shared response envelope for API handlers.
//!
//! All successful API responses use the `{success, message, data}` envelope.
//! Use [`ApiResponse`] instead of ad-hoc `serde_json::json!` to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{success: true, message, data}` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::new("Course created", course)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}
