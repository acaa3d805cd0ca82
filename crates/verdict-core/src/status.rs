//! Outcome status.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an operation succeeded or failed.
///
/// The status is fixed when an [`Outcome`](crate::Outcome) is constructed and
/// drives the default HTTP status code of the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    /// The operation succeeded.
    Success,
    /// The operation failed.
    Failure,
}

impl ResultStatus {
    /// Returns the HTTP status code used when none is set explicitly.
    ///
    /// # Example
    ///
    /// ```
    /// use verdict_core::ResultStatus;
    /// use http::StatusCode;
    ///
    /// assert_eq!(ResultStatus::Success.default_status_code(), StatusCode::OK);
    /// assert_eq!(ResultStatus::Failure.default_status_code(), StatusCode::BAD_REQUEST);
    /// ```
    #[must_use]
    pub const fn default_status_code(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Failure => StatusCode::BAD_REQUEST,
        }
    }

    /// Returns `true` for [`ResultStatus::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_codes() {
        assert_eq!(ResultStatus::Success.default_status_code(), StatusCode::OK);
        assert_eq!(
            ResultStatus::Failure.default_status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_is_success() {
        assert!(ResultStatus::Success.is_success());
        assert!(!ResultStatus::Failure.is_success());
    }

    #[test]
    fn test_display() {
        assert_eq!(ResultStatus::Success.to_string(), "success");
        assert_eq!(ResultStatus::Failure.to_string(), "failure");
    }
}
