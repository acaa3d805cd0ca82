//! # Verdict Test
//!
//! Test utilities for inspecting HTTP responses produced from outcomes.
//!
//! ## Example
//!
//! ```ignore
//! use verdict_core::Outcome;
//! use verdict_test::TestResponse;
//! use serde_json::json;
//!
//! let response = TestResponse::from_response(
//!     Outcome::failure().with_error("bad id", "invalid_id").into_response()?,
//! );
//!
//! response
//!     .assert_status_code(400)
//!     .assert_succeeded(false)
//!     .assert_json_field("Errors.0.Code", &json!("invalid_id"));
//! ```

#![doc(html_root_url = "https://docs.rs/verdict-test/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod response;

pub use error::TestError;
pub use response::TestResponse;
