//! Structured error entries attached to an outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single error entry: a human-readable message and a machine-readable code.
///
/// # Example
///
/// ```
/// use verdict_core::ResultError;
///
/// let error = ResultError::new("Email already in use", "email_already_in_use");
/// assert_eq!(error.message(), "Email already in use");
/// assert_eq!(error.code(), "email_already_in_use");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultError {
    message: String,
    code: String,
}

impl ResultError {
    /// Creates a new error entry.
    #[must_use]
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl<M: Into<String>, C: Into<String>> From<(M, C)> for ResultError {
    fn from((message, code): (M, C)) -> Self {
        Self::new(message, code)
    }
}

impl fmt::Display for ResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}
