//! # Verdict Core
//!
//! A uniform envelope for the outcome of an operation.
//!
//! This crate provides:
//!
//! - [`Outcome`] - Success/failure with message, code, errors, metadata, an
//!   HTTP status code and an optional typed payload
//! - [`ResultError`] - A structured error entry (message + code)
//! - [`Metadata`] - Insertion-ordered key/value annotations
//! - [`ResultOptions`] - Serialization options, metadata factory and the
//!   not-found rule, registered once per process or passed explicitly
//! - [`VerdictError`] - Standard error type
//!
//! ## Example
//!
//! ```
//! use verdict_core::Outcome;
//! use http::StatusCode;
//!
//! let outcome = Outcome::failure().with_error("bad id", "invalid_id");
//!
//! assert!(!outcome.succeeded());
//! assert_eq!(outcome.http_status_code(), StatusCode::BAD_REQUEST);
//!
//! let response = outcome.into_response().unwrap();
//! assert_eq!(response.status(), StatusCode::BAD_REQUEST);
//! ```

#![doc(html_root_url = "https://docs.rs/verdict-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod body;
mod error;
mod metadata;
mod options;
mod outcome;
mod response;
mod result_error;
mod status;

pub use error::{VerdictError, VerdictResult};
pub use metadata::Metadata;
pub use options::{
    is_registered, register, register_with, JsonOptions, MetadataFactory, NamingPolicy,
    ResultOptions, ResultOptionsBuilder,
};
pub use outcome::Outcome;
pub use result_error::ResultError;
pub use status::ResultStatus;
