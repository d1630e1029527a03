use thiserror::Error;

/// Failures while talking to the external checkout provider.
///
/// None of these carry provider secrets; messages are safe to log but are
/// still collapsed to a generic 502 at the HTTP boundary.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gateway rejected the request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("gateway response missing field: {0}")]
    MalformedResponse(&'static str),

    #[error("checkout session not found: {0}")]
    SessionNotFound(String),
}
