//! Configuration loader with layered approach.
//!
//! This module provides the [`ConfigLoader`] for loading options from
//! multiple sources: defaults, files, and environment variables.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use verdict_core::NamingPolicy;

use crate::{ConfigError, OptionsConfig};

/// Configuration loader with layered approach.
///
/// Later layers override earlier ones:
/// 1. Default values (built into the code)
/// 2. Configuration file (TOML or JSON)
/// 3. Environment variables
///
/// # Example
///
/// ```no_run
/// use verdict_config::ConfigLoader;
///
/// # fn main() -> Result<(), verdict_config::ConfigError> {
/// let config = ConfigLoader::new()
///     .with_file("verdict.toml")?
///     .with_env_prefix("VERDICT")
///     .load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config: OptionsConfig,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader holding the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file.
    ///
    /// The format is chosen by extension: `.toml` or `.json`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, unreadable, malformed,
    /// has an unsupported extension, or contains unknown fields.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        self.config = Self::parse(&content, &extension)?;

        Ok(self)
    }

    /// Load configuration from a file if it exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be loaded.
    pub fn with_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            self.with_file(path)
        } else {
            Ok(self)
        }
    }

    /// Load configuration from a string in the given format (`toml` or `json`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if parsing fails.
    ///
    /// # Example
    ///
    /// ```
    /// use verdict_config::ConfigLoader;
    /// use verdict_core::NamingPolicy;
    ///
    /// let toml = r#"
    ///     [json]
    ///     naming = "camel_case"
    /// "#;
    ///
    /// let config = ConfigLoader::new()
    ///     .with_string(toml, "toml")
    ///     .unwrap()
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(config.json.naming, NamingPolicy::CamelCase);
    /// ```
    pub fn with_string(mut self, content: &str, format: &str) -> Result<Self, ConfigError> {
        self.config = Self::parse(content, &format.to_lowercase())?;
        Ok(self)
    }

    /// Set environment variable prefix for overrides.
    ///
    /// Variables use the format `PREFIX__SECTION__KEY`, e.g.
    /// `VERDICT__JSON__NAMING=camel_case`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_uppercase());
        self
    }

    /// Finalize and return the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an environment override cannot be parsed.
    pub fn load(mut self) -> Result<OptionsConfig, ConfigError> {
        if let Some(prefix) = self.env_prefix.take() {
            let scoped = format!("{prefix}__");
            let vars: HashMap<String, String> = env::vars()
                .filter(|(k, _)| k.starts_with(&scoped))
                .collect();
            for (key, value) in vars {
                self.apply_env_var(&key, &value, &prefix)?;
            }
        }

        tracing::debug!(config = ?self.config, "loaded result options configuration");
        Ok(self.config)
    }

    fn parse(content: &str, format: &str) -> Result<OptionsConfig, ConfigError> {
        match format {
            "toml" => Ok(toml::from_str(content)?),
            "json" => Ok(serde_json::from_str(content)?),
            other => Err(ConfigError::unsupported_format(other)),
        }
    }

    fn apply_env_var(&mut self, key: &str, value: &str, prefix: &str) -> Result<(), ConfigError> {
        let key_without_prefix = key
            .strip_prefix(prefix)
            .and_then(|k| k.strip_prefix("__"))
            .ok_or_else(|| ConfigError::env_parse_error(key, "invalid key format"))?;

        let parts: Vec<&str> = key_without_prefix.split("__").collect();

        match parts.as_slice() {
            ["JSON", "NAMING"] => {
                self.config.json.naming = match value.to_lowercase().as_str() {
                    "exact" => NamingPolicy::Exact,
                    "camel_case" | "camelcase" => NamingPolicy::CamelCase,
                    _ => {
                        return Err(ConfigError::env_parse_error(
                            key,
                            "expected 'exact' or 'camel_case'",
                        ))
                    }
                };
            }
            ["JSON", "OMIT_EMPTY"] => {
                self.config.json.omit_empty = parse_bool(value)
                    .ok_or_else(|| ConfigError::env_parse_error(key, "expected boolean"))?;
            }
            ["JSON", "PRETTY"] => {
                self.config.json.pretty = parse_bool(value)
                    .ok_or_else(|| ConfigError::env_parse_error(key, "expected boolean"))?;
            }
            ["RESPONSE", "RETURN_NOT_FOUND_WHEN_DATA_IS_NULL"] => {
                self.config.response.return_not_found_when_data_is_null = parse_bool(value)
                    .ok_or_else(|| ConfigError::env_parse_error(key, "expected boolean"))?;
            }
            _ => {
                tracing::debug!(key, "ignoring unknown configuration variable");
            }
        }

        Ok(())
    }
}

/// Parse a boolean from a string.
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
