//! Integration tests for the configuration system.
//!
//! This test suite validates loading a YAML file, layering environment
//! variable overrides on top of it, and building the logger and classifier
//! from the result.
//!
//! Tests that modify environment variables are marked with `#[serial]` to ensure
//! they run sequentially and don't interfere with each other.

mod common;

use std::env;
use std::fs;

use common::Fixture;
use localpath::config::{Config, EnvironmentConfig, DETECT_JUNCTIONS_ENV};
use localpath::logging::LOG_MODE_ENV;
use localpath::{Error, LogLevel};
use serial_test::serial;

// ============================================================================
// Test Utilities
// ============================================================================

/// Run `f` with the given LOCALPATH_* variables set, restoring them after.
fn with_env<T>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(key, value)| {
            let old = env::var(key).ok();
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
            ((*key).to_string(), old)
        })
        .collect();

    let result = f();

    for (key, old) in saved {
        match old {
            Some(v) => env::set_var(&key, v),
            None => env::remove_var(&key),
        }
    }
    result
}

fn write_config(fixture: &Fixture, contents: &str) -> localpath::AbsolutePath {
    let path = fixture.root().join("localpath.yaml");
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// File loading
// ============================================================================

#[test]
fn test_load_complete_file() {
    let fixture = Fixture::new();
    let path = write_config(&fixture, "log_level: verbose\ndetect_junctions: false\n");

    let config = Config::load(path.as_local()).unwrap();
    assert_eq!(config.log_level, Some(LogLevel::Verbose));
    assert_eq!(config.detect_junctions, Some(false));
    assert_eq!(config.logger().level(), LogLevel::Verbose);
    assert!(!config.classifier().detects_junctions());
}

#[test]
fn test_load_empty_file_gives_defaults() {
    let fixture = Fixture::new();
    let path = write_config(&fixture, "");
    assert_eq!(Config::load(path.as_local()).unwrap(), Config::default());
}

#[test]
fn test_load_rejects_unknown_fields() {
    let fixture = Fixture::new();
    let path = write_config(&fixture, "log_level: normal\nfollow_symlinks: true\n");
    let err = Config::load(path.as_local()).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn test_load_missing_file_names_path() {
    let fixture = Fixture::new();
    let path = fixture.root().join("absent.yaml");
    match Config::load(path.as_local()) {
        Err(Error::InvalidPath { path: reported, .. }) => assert_eq!(reported, path.as_str()),
        other => panic!("expected InvalidPath, got {other:?}"),
    }
}

// ============================================================================
// Environment overrides
// ============================================================================

#[test]
#[serial]
fn test_environment_overrides_file() {
    let fixture = Fixture::new();
    let path = write_config(&fixture, "log_level: quiet\ndetect_junctions: true\n");

    let config = with_env(
        &[(LOG_MODE_ENV, Some("VERBOSE")), (DETECT_JUNCTIONS_ENV, Some("0"))],
        || {
            let mut config = Config::load(path.as_local()).unwrap();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            config
        },
    );

    assert_eq!(config.log_level, Some(LogLevel::Verbose));
    assert_eq!(config.detect_junctions, Some(false));
}

#[test]
#[serial]
fn test_file_values_kept_without_environment() {
    let fixture = Fixture::new();
    let path = write_config(&fixture, "log_level: quiet\n");

    let config = with_env(&[(LOG_MODE_ENV, None), (DETECT_JUNCTIONS_ENV, None)], || {
        let mut config = Config::load(path.as_local()).unwrap();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        config
    });

    assert_eq!(config.log_level, Some(LogLevel::Quiet));
    assert_eq!(config.detect_junctions, None);
}

#[test]
#[serial]
fn test_invalid_environment_value_is_validation_error() {
    let result = with_env(
        &[(LOG_MODE_ENV, None), (DETECT_JUNCTIONS_ENV, Some("perhaps"))],
        || EnvironmentConfig::apply_overrides(&mut Config::default()),
    );

    match result {
        Err(Error::Validation { field, message }) => {
            assert_eq!(field, DETECT_JUNCTIONS_ENV);
            assert!(message.contains("perhaps"));
        }
        other => panic!("expected Validation error, got {other:?}"),
    }
}
