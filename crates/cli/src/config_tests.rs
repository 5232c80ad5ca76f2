// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

fn clear_env() {
    for name in [
        env::YAMLCHECK_CONFIG,
        env::YAMLCHECK_TESTDATA_DIR,
        env::YAMLCHECK_CANONICAL_TIMESTAMP,
        env::YAMLCHECK_CONTEXT_LINES,
    ] {
        std::env::remove_var(name);
    }
}

#[test]
fn default_values() {
    let config = CompareConfig::default();
    assert_eq!(config.testdata_dir, PathBuf::from("testdata"));
    assert_eq!(config.canonical_timestamp, "0001-01-01T00:00:00Z");
    assert_eq!(config.temp_prefix, "actualYaml");
    assert_eq!(config.context_lines, 3);
    assert!(config.validate().is_ok());
}

#[test]
fn deserialize_empty_uses_defaults() {
    let config = CompareConfig::from_toml_str("").unwrap();
    assert_eq!(config, CompareConfig::default());
}

#[test]
fn deserialize_full_config() {
    let toml = r#"
        testdata_dir = "fixtures/golden"
        canonical_timestamp = "1970-01-01T00:00:00Z"
        timestamp_pattern = '\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?Z'
        temp_prefix = "actual"
        context_lines = 5
    "#;
    let config = CompareConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.testdata_dir, PathBuf::from("fixtures/golden"));
    assert_eq!(config.canonical_timestamp, "1970-01-01T00:00:00Z");
    assert_eq!(config.temp_prefix, "actual");
    assert_eq!(config.context_lines, 5);
}

#[test]
fn unknown_field_is_rejected() {
    let err = CompareConfig::from_toml_str(r#"testdata = "x""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

#[test]
fn invalid_pattern_is_rejected() {
    let err = CompareConfig::from_toml_str(r#"timestamp_pattern = "[0-9""#).unwrap_err();
    match err {
        ConfigError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[0-9"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn quoted_canonical_timestamp_is_rejected() {
    let config = CompareConfig::default().with_canonical_timestamp("\"now\"");
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidTimestamp(_))
    ));
}

#[test]
fn empty_canonical_timestamp_is_rejected() {
    let config = CompareConfig::default().with_canonical_timestamp("");
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidTimestamp(_))
    ));
}

#[test]
fn empty_prefix_is_rejected() {
    let config = CompareConfig::default().with_temp_prefix("");
    assert!(matches!(config.validate(), Err(ConfigError::EmptyTempPrefix)));
}

#[test]
fn load_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "context_lines = 1").unwrap();
    let config = CompareConfig::load(file.path()).unwrap();
    assert_eq!(config.context_lines, 1);
}

#[test]
fn load_missing_file_reports_path() {
    let err = CompareConfig::load(Path::new("/nonexistent/yamlcheck.toml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/yamlcheck.toml"));
}

#[test]
fn builder_methods() {
    let config = CompareConfig::default()
        .with_testdata_dir("golden")
        .with_timestamp_pattern(r"\d+")
        .with_context_lines(0);
    assert_eq!(config.testdata_dir, PathBuf::from("golden"));
    assert_eq!(config.timestamp_pattern, r"\d+");
    assert_eq!(config.context_lines, 0);
}

#[test]
#[serial]
fn from_env_defaults_when_unset() {
    clear_env();
    let config = CompareConfig::from_env().unwrap();
    assert_eq!(config, CompareConfig::default());
}

#[test]
#[serial]
fn from_env_applies_overrides() {
    clear_env();
    std::env::set_var(env::YAMLCHECK_TESTDATA_DIR, "/tmp/golden");
    std::env::set_var(env::YAMLCHECK_CONTEXT_LINES, "7");
    let result = CompareConfig::from_env();
    clear_env();

    let config = result.unwrap();
    assert_eq!(config.testdata_dir, PathBuf::from("/tmp/golden"));
    assert_eq!(config.context_lines, 7);
}

#[test]
#[serial]
fn from_env_rejects_bad_context_lines() {
    clear_env();
    std::env::set_var(env::YAMLCHECK_CONTEXT_LINES, "lots");
    let result = CompareConfig::from_env();
    clear_env();

    match result {
        Err(ConfigError::InvalidEnv { name, value }) => {
            assert_eq!(name, "YAMLCHECK_CONTEXT_LINES");
            assert_eq!(value, "lots");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
#[serial]
fn from_env_overrides_win_over_config_file() {
    clear_env();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "testdata_dir = \"from-file\"\ncontext_lines = 9").unwrap();
    std::env::set_var(env::YAMLCHECK_CONFIG, file.path());
    std::env::set_var(env::YAMLCHECK_TESTDATA_DIR, "from-env");
    let result = CompareConfig::from_env();
    clear_env();

    let config = result.unwrap();
    assert_eq!(config.testdata_dir, PathBuf::from("from-env"));
    assert_eq!(config.context_lines, 9);
}
