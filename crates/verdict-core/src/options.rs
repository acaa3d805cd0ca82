//! Outcome options and process-wide registration.
//!
//! [`ResultOptions`] controls how outcomes are serialized, what metadata they
//! start with, and how data-carrying outcomes without data are answered.
//!
//! Options reach an outcome in one of two ways:
//!
//! - **Explicitly**: build an `Arc<ResultOptions>` and use its factory methods
//!   (`options.success()`, `options.failure_with(data)`, ...).
//! - **Registered**: call [`register`] once at startup. The plain factories
//!   (`Outcome::success()`, ...) then read the registered options. Before any
//!   registration they fall back to [`ResultOptions::default`].
//!
//! An outcome captures its options when it is constructed, so options never
//! change underneath an existing outcome.
//!
//! # Example
//!
//! ```
//! use verdict_core::{NamingPolicy, ResultOptions};
//! use std::sync::Arc;
//!
//! let options = Arc::new(
//!     ResultOptions::builder()
//!         .naming(NamingPolicy::CamelCase)
//!         .metadata_factory(|| [("source", "orders")].into_iter().collect())
//!         .build(),
//! );
//!
//! let outcome = options.success().with_message("created");
//! assert_eq!(outcome.metadata()["source"], "orders");
//! ```

use crate::error::{VerdictError, VerdictResult};
use crate::metadata::Metadata;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Options registered for the whole process.
static REGISTERED: OnceLock<Arc<ResultOptions>> = OnceLock::new();

/// Options used when nothing was registered.
static DEFAULTS: OnceLock<Arc<ResultOptions>> = OnceLock::new();

/// Produces the initial metadata of every new outcome.
pub type MetadataFactory = Arc<dyn Fn() -> Metadata + Send + Sync>;

/// How serialized field names are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// Member names as declared: `Succeeded`, `Message`, `MetaData`, ...
    #[default]
    Exact,
    /// camelCase names: `succeeded`, `message`, `metaData`, ...
    CamelCase,
}

/// JSON serialization options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    /// Field naming policy.
    pub naming: NamingPolicy,
    /// Leave out `message`, `code`, `errors` and `metaData` when they are
    /// absent or empty.
    pub omit_empty: bool,
    /// Indent the output.
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            naming: NamingPolicy::Exact,
            omit_empty: true,
            pretty: false,
        }
    }
}

/// Options shared by every outcome built from them.
#[derive(Clone)]
pub struct ResultOptions {
    json: JsonOptions,
    metadata_factory: Option<MetadataFactory>,
    return_not_found_when_data_is_null: bool,
}

impl Default for ResultOptions {
    fn default() -> Self {
        Self {
            json: JsonOptions::default(),
            metadata_factory: None,
            return_not_found_when_data_is_null: true,
        }
    }
}

impl fmt::Debug for ResultOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultOptions")
            .field("json", &self.json)
            .field("metadata_factory", &self.metadata_factory.is_some())
            .field(
                "return_not_found_when_data_is_null",
                &self.return_not_found_when_data_is_null,
            )
            .finish()
    }
}

impl ResultOptions {
    /// Creates a new options builder.
    #[must_use]
    pub fn builder() -> ResultOptionsBuilder {
        ResultOptionsBuilder::new()
    }

    /// Returns the registered options, or the defaults if none were registered.
    #[must_use]
    pub fn current() -> Arc<Self> {
        if let Some(options) = REGISTERED.get() {
            return Arc::clone(options);
        }
        Arc::clone(DEFAULTS.get_or_init(|| {
            tracing::debug!("no result options registered, using defaults");
            Arc::new(Self::default())
        }))
    }

    /// Returns the JSON options.
    #[must_use]
    pub fn json(&self) -> &JsonOptions {
        &self.json
    }

    /// Returns whether data-carrying outcomes without data answer 404.
    #[must_use]
    pub fn return_not_found_when_data_is_null(&self) -> bool {
        self.return_not_found_when_data_is_null
    }

    /// Returns `true` if a metadata factory is configured.
    #[must_use]
    pub fn has_metadata_factory(&self) -> bool {
        self.metadata_factory.is_some()
    }

    /// Runs the metadata factory, or returns empty metadata if there is none.
    #[must_use]
    pub fn initial_metadata(&self) -> Metadata {
        self.metadata_factory
            .as_ref()
            .map_or_else(Metadata::new, |factory| factory())
    }
}

/// Builder for [`ResultOptions`].
#[derive(Debug, Default)]
pub struct ResultOptionsBuilder {
    options: ResultOptions,
}

impl ResultOptionsBuilder {
    /// Creates a builder holding the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets all JSON options at once.
    #[must_use]
    pub fn json(mut self, json: JsonOptions) -> Self {
        self.options.json = json;
        self
    }

    /// Sets the field naming policy.
    #[must_use]
    pub fn naming(mut self, naming: NamingPolicy) -> Self {
        self.options.json.naming = naming;
        self
    }

    /// Sets whether empty fields are left out of the JSON body.
    #[must_use]
    pub fn omit_empty(mut self, omit_empty: bool) -> Self {
        self.options.json.omit_empty = omit_empty;
        self
    }

    /// Sets whether the JSON body is indented.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.options.json.pretty = pretty;
        self
    }

    /// Sets the factory producing initial metadata for every new outcome.
    #[must_use]
    pub fn metadata_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Metadata + Send + Sync + 'static,
    {
        self.options.metadata_factory = Some(Arc::new(factory));
        self
    }

    /// Sets whether data-carrying outcomes without data answer 404.
    #[must_use]
    pub fn return_not_found_when_data_is_null(mut self, enabled: bool) -> Self {
        self.options.return_not_found_when_data_is_null = enabled;
        self
    }

    /// Builds the options.
    #[must_use]
    pub fn build(self) -> ResultOptions {
        self.options
    }
}

/// Registers `options` for the whole process.
///
/// Call this once at startup, before outcomes are created. Outcomes built
/// earlier keep the options they captured.
///
/// # Errors
///
/// Returns `VerdictError::AlreadyRegistered` if options were registered before.
pub fn register(options: ResultOptions) -> VerdictResult<()> {
    REGISTERED
        .set(Arc::new(options))
        .map_err(|_| VerdictError::AlreadyRegistered)?;
    tracing::debug!("registered result options");
    Ok(())
}

/// Registers options configured through a callback.
///
/// # Errors
///
/// Returns `VerdictError::AlreadyRegistered` if options were registered before.
///
/// # Example
///
/// ```no_run
/// use verdict_core::{register_with, NamingPolicy};
///
/// register_with(|options| options.naming(NamingPolicy::CamelCase)).unwrap();
/// ```
pub fn register_with<F>(configure: F) -> VerdictResult<()>
where
    F: FnOnce(ResultOptionsBuilder) -> ResultOptionsBuilder,
{
    register(configure(ResultOptions::builder()).build())
}

/// Returns `true` if options were registered for this process.
#[must_use]
pub fn is_registered() -> bool {
    REGISTERED.get().is_some()
}
