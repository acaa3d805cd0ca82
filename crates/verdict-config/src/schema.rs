//! Configuration schema types.
//!
//! These types describe the file/env representation of
//! [`ResultOptions`](verdict_core::ResultOptions). The metadata factory is
//! code, not data, so it is attached to the builder returned by
//! [`OptionsConfig::into_builder`].

use serde::{Deserialize, Serialize};
use verdict_core::{JsonOptions, NamingPolicy, ResultOptions, ResultOptionsBuilder};

/// Complete options configuration.
///
/// # Example
///
/// ```
/// use verdict_config::OptionsConfig;
///
/// let config = OptionsConfig::default();
/// assert!(config.json.omit_empty);
/// assert!(config.response.return_not_found_when_data_is_null);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct OptionsConfig {
    /// JSON serialization section.
    #[serde(default)]
    pub json: JsonConfig,

    /// Response conversion section.
    #[serde(default)]
    pub response: ResponseConfig,
}

impl OptionsConfig {
    /// Converts into an options builder.
    #[must_use]
    pub fn into_builder(self) -> ResultOptionsBuilder {
        ResultOptions::builder()
            .json(JsonOptions {
                naming: self.json.naming,
                omit_empty: self.json.omit_empty,
                pretty: self.json.pretty,
            })
            .return_not_found_when_data_is_null(self.response.return_not_found_when_data_is_null)
    }

    /// Converts into options without a metadata factory.
    #[must_use]
    pub fn into_options(self) -> ResultOptions {
        self.into_builder().build()
    }
}

/// JSON serialization section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct JsonConfig {
    /// Field naming policy (`exact` or `camel_case`).
    #[serde(default)]
    pub naming: NamingPolicy,

    /// Leave out empty `message`/`code`/`errors`/`metaData` fields.
    #[serde(default = "default_true")]
    pub omit_empty: bool,

    /// Indent the output.
    #[serde(default)]
    pub pretty: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            naming: NamingPolicy::default(),
            omit_empty: true,
            pretty: false,
        }
    }
}

/// Response conversion section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResponseConfig {
    /// Answer 404 for data-carrying outcomes without data.
    #[serde(default = "default_true")]
    pub return_not_found_when_data_is_null: bool,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            return_not_found_when_data_is_null: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_result_options() {
        let options = OptionsConfig::default().into_options();
        let defaults = ResultOptions::default();
        assert_eq!(options.json(), defaults.json());
        assert_eq!(
            options.return_not_found_when_data_is_null(),
            defaults.return_not_found_when_data_is_null()
        );
    }

    #[test]
    fn test_into_builder_keeps_values() {
        let config = OptionsConfig {
            json: JsonConfig {
                naming: NamingPolicy::CamelCase,
                omit_empty: false,
                pretty: true,
            },
            response: ResponseConfig {
                return_not_found_when_data_is_null: false,
            },
        };

        let options = config.into_builder().metadata_factory(verdict_core::Metadata::new).build();
        assert_eq!(options.json().naming, NamingPolicy::CamelCase);
        assert!(!options.json().omit_empty);
        assert!(options.json().pretty);
        assert!(!options.return_not_found_when_data_is_null());
        assert!(options.has_metadata_factory());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<OptionsConfig, _> = toml::from_str("[json]\nindent = 2\n");
        assert!(result.is_err());
    }
}
