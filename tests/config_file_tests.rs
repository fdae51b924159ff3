// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for loading explorer configuration from disk

use std::io::Write;

use terra_display::{denom_with, ConfigError, DisplayError, ExplorerConfig};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_config_file() -> anyhow::Result<()> {
    let file = write_config(
        r#"{
            "currencies": ["krw", "USD"],
            "chain": "columbus-5",
            "chart_durations": [1, 7]
        }"#,
    );

    let config = ExplorerConfig::from_json_file(file.path())?;

    assert_eq!(config.chain, "columbus-5");
    assert_eq!(config.chart_durations, vec![1, 7]);
    assert_eq!(config.finder().link(terra_display::LinkKind::Tx, "AB"), "/columbus-5/tx/AB");

    let currencies = config.currency_set();
    assert_eq!(denom_with("ukrw", &currencies), "KRT");
    assert_eq!(denom_with("uusd", &currencies), "UST");
    assert_eq!(denom_with("ujpy", &currencies), "JPY");
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.json");

    let err = ExplorerConfig::from_json_file(&path).unwrap_err();

    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = write_config("{ not json");

    let err = ExplorerConfig::from_json_file(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_invalid_currency_is_rejected() {
    let file = write_config(r#"{ "currencies": ["US$"] }"#);

    let err = ExplorerConfig::from_json_file(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().contains("US$"));
}

#[test]
fn test_config_errors_convert_to_display_error() {
    fn load(path: &std::path::Path) -> Result<ExplorerConfig, DisplayError> {
        Ok(ExplorerConfig::from_json_file(path)?)
    }

    let file = write_config(r#"{ "chain": "  " }"#);
    let err = load(file.path()).unwrap_err();

    assert!(matches!(err, DisplayError::Config(ConfigError::Invalid { .. })));
}
