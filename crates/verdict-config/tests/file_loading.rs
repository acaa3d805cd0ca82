//! Loading options from configuration files.

use std::io::Write;
use std::sync::Arc;
use tempfile::Builder;
use verdict_config::{ConfigError, ConfigLoader};
use verdict_core::NamingPolicy;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_toml_file_drives_serialization() {
    let file = write_temp(
        ".toml",
        r#"
            [json]
            naming = "camel_case"
        "#,
    );

    let options = ConfigLoader::new()
        .with_file(file.path())
        .unwrap()
        .load()
        .unwrap()
        .into_builder()
        .metadata_factory(|| [("service", "orders")].into_iter().collect())
        .build();
    let options = Arc::new(options);

    assert_eq!(options.json().naming, NamingPolicy::CamelCase);
    let json = options.success().with_code("ok").to_json().unwrap();
    assert_eq!(
        json,
        r#"{"succeeded":true,"code":"ok","metaData":{"service":"orders"}}"#
    );
}

#[test]
fn test_json_file() {
    let file = write_temp(
        ".json",
        r#"{"response": {"return_not_found_when_data_is_null": false}}"#,
    );

    let options = Arc::new(
        ConfigLoader::new()
            .with_optional_file(file.path())
            .unwrap()
            .load()
            .unwrap()
            .into_options(),
    );

    let response = options
        .success_without_data::<String>()
        .into_response()
        .unwrap();
    assert_eq!(response.status(), http::StatusCode::OK);
}

#[test]
fn test_unknown_extension_rejected() {
    let file = write_temp(".yaml", "json:\n  pretty: true\n");
    let result = ConfigLoader::new().with_file(file.path());
    assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
}

#[test]
fn test_malformed_toml_rejected() {
    let file = write_temp(".toml", "[json\nnaming = ");
    let result = ConfigLoader::new().with_file(file.path());
    assert!(matches!(result, Err(ConfigError::TomlError(_))));
}
