//! # Verdict
//!
//! **A uniform outcome envelope for HTTP services**
//!
//! Verdict wraps the result of an operation (success or failure, message,
//! code, structured errors, metadata, an optional typed payload) together
//! with the HTTP status code to answer with, and converts it into an
//! `http::Response<Bytes>` carrying a JSON body.
//!
//! ## Quick Start
//!
//! ```rust
//! use verdict::prelude::*;
//!
//! fn find_user(id: i64) -> Outcome<String> {
//!     if id < 0 {
//!         return Outcome::failure_from(ResultError::new("bad id", "invalid_id"));
//!     }
//!     Outcome::success_with(format!("user-{id}")).with_code("found")
//! }
//!
//! let response = find_user(7).into_response().unwrap();
//! assert_eq!(response.status(), StatusCode::OK);
//!
//! let response = find_user(-1).into_response().unwrap();
//! assert_eq!(response.status(), StatusCode::NOT_FOUND);
//! ```
//!
//! ## Startup
//!
//! ```rust,no_run
//! use verdict::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! verdict::logging::init_logging(&verdict::logging::LogConfig::production())?;
//!
//! let options = verdict::config::ConfigLoader::new()
//!     .with_optional_file("verdict.toml")?
//!     .with_env_prefix("VERDICT")
//!     .load()?
//!     .into_builder()
//!     .metadata_factory(|| [("service", "orders")].into_iter().collect())
//!     .build();
//! verdict::register(options)?;
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/verdict/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod logging;

// Re-export core types
pub use verdict_core as core;
pub use verdict_core::{
    is_registered, register, register_with, JsonOptions, Metadata, MetadataFactory,
    NamingPolicy, Outcome, ResultError, ResultOptions, ResultOptionsBuilder, ResultStatus,
    VerdictError, VerdictResult,
};

// Re-export configuration loading
pub use verdict_config as config;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use verdict::prelude::*;
///
/// let outcome = Outcome::success().with_http_status_code(StatusCode::ACCEPTED);
/// assert_eq!(outcome.http_status_code(), StatusCode::ACCEPTED);
/// ```
pub mod prelude {
    pub use http::StatusCode;
    pub use verdict_core::{
        Metadata, NamingPolicy, Outcome, ResultError, ResultOptions, ResultStatus, VerdictError,
        VerdictResult,
    };
}
