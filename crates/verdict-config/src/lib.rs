//! Typed configuration for Verdict result options.
//!
//! This crate loads the data part of
//! [`ResultOptions`](verdict_core::ResultOptions) from:
//! - TOML and JSON configuration files
//! - Environment variable overrides
//! - Strict validation (fails on unknown fields)
//!
//! # Example
//!
//! ```no_run
//! use verdict_config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ConfigLoader::new()
//!     .with_optional_file("verdict.toml")?
//!     .with_env_prefix("VERDICT")
//!     .load()?
//!     .into_builder()
//!     .metadata_factory(|| [("service", "orders")].into_iter().collect())
//!     .build();
//!
//! verdict_core::register(options)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [json]
//! naming = "camel_case"
//! omit_empty = true
//! pretty = false
//!
//! [response]
//! return_not_found_when_data_is_null = true
//! ```
//!
//! # Environment Variable Overrides
//!
//! - `VERDICT__JSON__NAMING=camel_case`
//! - `VERDICT__JSON__OMIT_EMPTY=false`
//! - `VERDICT__JSON__PRETTY=true`
//! - `VERDICT__RESPONSE__RETURN_NOT_FOUND_WHEN_DATA_IS_NULL=false`

#![warn(missing_docs)]

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
