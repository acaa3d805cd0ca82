//! Error types for Verdict.
//!
//! [`VerdictError`] covers every failure the outcome model can report. All of
//! them are local to the call that caused them:
//!
//! | Variant | Raised by |
//! |---|---|
//! | `DuplicateMetadataKey` | [`Outcome::with_metadata`](crate::Outcome::with_metadata) |
//! | `Serialization` | [`Outcome::to_json`](crate::Outcome::to_json), [`Outcome::into_response`](crate::Outcome::into_response) |
//! | `AlreadyRegistered` | [`register`](crate::register) |
//! | `ResponseBuild` | [`Outcome::into_response`](crate::Outcome::into_response) |
//!
//! Reading options before any were registered is not an error: the shared
//! defaults are used instead.

use thiserror::Error;

/// Result type alias using [`VerdictError`].
pub type VerdictResult<T> = Result<T, VerdictError>;

/// Standard error type for Verdict.
#[derive(Error, Debug)]
pub enum VerdictError {
    /// A metadata key was inserted twice.
    #[error("metadata key already exists: {key}")]
    DuplicateMetadataKey {
        /// The key that was already present.
        key: String,
    },

    /// The payload could not be encoded as JSON.
    #[error("failed to serialize outcome: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Options were already registered for this process.
    #[error("result options are already registered")]
    AlreadyRegistered,

    /// The HTTP response could not be assembled.
    #[error("failed to build response: {0}")]
    ResponseBuild(#[from] http::Error),
}

impl VerdictError {
    /// Creates a duplicate metadata key error.
    #[must_use]
    pub fn duplicate_metadata_key(key: impl Into<String>) -> Self {
        Self::DuplicateMetadataKey { key: key.into() }
    }

    /// Returns `true` if this is a duplicate metadata key error.
    #[must_use]
    pub fn is_duplicate_metadata_key(&self) -> bool {
        matches!(self, Self::DuplicateMetadataKey { .. })
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }
}
