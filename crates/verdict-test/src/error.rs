//! Test error types.

use thiserror::Error;

/// Errors that can occur while inspecting a response.
#[derive(Error, Debug)]
pub enum TestError {
    /// Response body is not valid UTF-8
    #[error("Body read error: {0}")]
    BodyRead(String),
    /// JSON deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
