//! Tests for TOML config loading.

use super::*;
use crate::schema::{AppConfig, DEFAULT_PANE_URL};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_multichart_config.toml"));
    assert!(matches!(
        result,
        Err(multichart_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multichart.toml");
    std::fs::write(
        &path,
        r#"
[window]
title = "Desk"

[[panes]]
default_url = "https://example.com/one"

[[panes]]
default_url = "https://example.com/two"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Desk");
    assert_eq!(config.pane_count(), 2);
    assert_eq!(config.default_url(0), Some("https://example.com/one"));
    // Defaults preserved
    assert_eq!(config.window.min_width, 800);
    assert_eq!(config.logging.filter, "multichart=info");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multichart.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(multichart_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_config_failing_validation_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multichart.toml");
    std::fs::write(&path, "panes = []\n").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(multichart_common::ConfigError::ValidationError(_))
    ));
}

#[test]
fn or_default_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let config = or_default(&path, load_from_path(&path));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn or_default_on_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multichart.toml");
    std::fs::write(&path, "[[panes]]\ndefault_url = \"\"\n").unwrap();

    let config = or_default(&path, load_from_path(&path));
    assert_eq!(config.pane_count(), 3);
    assert_eq!(config.default_url(2), Some(DEFAULT_PANE_URL));
}
