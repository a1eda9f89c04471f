//! Unit tests for configuration loading and graceful degradation
//!
//! Tests cover:
//! - Compiled defaults
//! - TOML file parsing, including partial files
//! - Resolution priority (CLI-provided values beat the file tier)
//! - Missing/broken config files never abort startup

use payflow_common::config::{
    resolve_config, ServiceConfig, TomlConfig, DEFAULT_FRONTEND_PORT, DEFAULT_HOST,
    DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT,
};
use std::io::Write;

#[test]
fn test_compiled_defaults() {
    let defaults = ServiceConfig::default();
    assert_eq!(defaults.host, DEFAULT_HOST);
    assert_eq!(defaults.port, DEFAULT_PORT);
    assert_eq!(defaults.frontend_port, DEFAULT_FRONTEND_PORT);
    assert_eq!(defaults.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
}

#[test]
fn test_toml_full_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "host = \"127.0.0.1\"\nport = 9100\nfrontend_port = 3100\nmax_upload_bytes = 1048576"
    )
    .unwrap();

    let config = TomlConfig::load_from(&path).unwrap();
    assert_eq!(config.host.as_deref(), Some("127.0.0.1"));
    assert_eq!(config.port, Some(9100));
    assert_eq!(config.frontend_port, Some(3100));
    assert_eq!(config.max_upload_bytes, Some(1_048_576));
}

#[test]
fn test_toml_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 9100\n").unwrap();

    let config = TomlConfig::load_from(&path).unwrap();
    assert_eq!(config.port, Some(9100));
    assert!(config.host.is_none());
    assert!(config.frontend_port.is_none());
    assert!(config.max_upload_bytes.is_none());
}

#[test]
fn test_toml_missing_file_is_error_from_load_from() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    assert!(TomlConfig::load_from(&path).is_err());
}

#[test]
fn test_toml_broken_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = \"not a number").unwrap();

    let err = TomlConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, payflow_common::Error::Config(_)));
}

#[test]
fn test_cli_values_take_precedence() {
    let config = resolve_config(
        Some("10.0.0.5".to_string()),
        Some(9200),
        Some(3200),
        Some(2048),
    );

    assert_eq!(config.host, "10.0.0.5");
    assert_eq!(config.port, 9200);
    assert_eq!(config.frontend_port, 3200);
    assert_eq!(config.max_upload_bytes, 2048);
}
