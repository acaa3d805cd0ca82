//! Structured logging setup.
//!
//! Verdict emits `tracing` events at `debug` level: option registration, the
//! defaults fallback, rejected metadata keys, and 404 answers for absent
//! data. This module installs a `tracing-subscriber` formatter for
//! applications that do not bring their own.
//!
//! The filter is built from an application level plus a separate level for
//! the Verdict crates ([`TARGETS`]), so library events can be turned up
//! without turning up everything else.
//!
//! # Example
//!
//! ```rust,ignore
//! use verdict::logging::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development())?;
//! ```

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Tracing targets that emit Verdict events.
pub const TARGETS: &[&str] = &["verdict_core", "verdict_config"];

/// Builds a filter directive: `base` for everything, `library` for [`TARGETS`].
///
/// ```
/// use verdict::logging::library_directive;
///
/// assert_eq!(
///     library_directive("info", "debug"),
///     "info,verdict_core=debug,verdict_config=debug"
/// );
/// ```
#[must_use]
pub fn library_directive(base: &str, library: &str) -> String {
    let mut directive = base.to_string();
    for target in TARGETS {
        directive.push_str(&format!(",{target}={library}"));
    }
    directive
}

/// Errors that can occur while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed.
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Whether logging is enabled.
    pub enabled: bool,

    /// Filter directive (e.g., "info", "info,verdict_core=debug").
    pub level: String,

    /// Whether to output JSON format.
    pub json_format: bool,

    /// Whether to include file/line info.
    pub file_line_info: bool,

    /// Whether to include target (module path).
    pub include_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: library_directive("info", "info"),
            json_format: true,
            file_line_info: false,
            include_target: true,
        }
    }
}

impl LogConfig {
    /// Creates a development configuration with human-readable output and
    /// Verdict's own events (registration, defaults fallback, 404 answers)
    /// at `debug`.
    #[must_use]
    pub fn development() -> Self {
        Self {
            enabled: true,
            level: library_directive("info", "debug"),
            json_format: false,
            file_line_info: true,
            include_target: true,
        }
    }

    /// Creates a production configuration with JSON output.
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }

    /// Sets the level for the Verdict crates, keeping `base` for the rest.
    #[must_use]
    pub fn with_library_level(mut self, base: &str, library: &str) -> Self {
        self.level = library_directive(base, library);
        self
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns `LoggingError::InvalidFilter` for a bad filter directive and
/// `LoggingError::Init` if a subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = create_env_filter(&config.level)?;

    if config.json_format {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_file(config.file_line_info)
            .with_line_number(config.file_line_info)
            .with_target(config.include_target)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggingError::Init(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_file(config.file_line_info)
            .with_line_number(config.file_line_info)
            .with_target(config.include_target)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggingError::Init(e.to_string()))?;
    }

    Ok(())
}

/// Creates an env filter from a directive string.
///
/// # Errors
///
/// Returns `LoggingError::InvalidFilter` if the directive is invalid.
pub fn create_env_filter(filter: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(filter).map_err(|e| LoggingError::InvalidFilter(e.to_string()))
}
