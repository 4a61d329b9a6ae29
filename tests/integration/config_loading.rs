//! Integration tests for layered configuration loading

use cfbridge::compat::VersionConfig;
use cfbridge::config::{global_config_path, ConfigLoader};
use cfbridge::error::CliError;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::integration::test_utils::with_config_env;

fn write_global_config(test_dir: &TempDir, contents: &str) {
    let dir = test_dir.path().join("cfbridge");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn test_defaults_without_any_file() {
    let test_dir = TempDir::new().unwrap();
    let config = with_config_env(&test_dir, &[], || ConfigLoader::load().unwrap());

    assert_eq!(config.api_version(), "");
    assert_eq!(config.min_cli_version(), "");
    assert!(config.target.snapshot.is_none());
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_global_config_file_is_read() {
    let test_dir = TempDir::new().unwrap();
    write_global_config(
        &test_dir,
        r#"
[target]
api_version = "2.100.0"
min_cli_version = "6.30.0"
snapshot = "/tmp/platform.json"
"#,
    );

    let (path, config) = with_config_env(&test_dir, &[], || {
        (global_config_path(), ConfigLoader::load().unwrap())
    });

    assert_eq!(path, Some(test_dir.path().join("cfbridge").join("config.toml")));
    assert_eq!(config.api_version(), "2.100.0");
    assert_eq!(config.min_cli_version(), "6.30.0");
    assert_eq!(config.target.snapshot, Some(PathBuf::from("/tmp/platform.json")));
}

#[test]
fn test_explicit_file_overrides_global() {
    let test_dir = TempDir::new().unwrap();
    write_global_config(
        &test_dir,
        r#"
[target]
api_version = "2.100.0"
min_cli_version = "6.30.0"
"#,
    );
    let explicit = test_dir.path().join("override.toml");
    std::fs::write(
        &explicit,
        r#"
[target]
api_version = "2.120.0"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = with_config_env(&test_dir, &[], || {
        ConfigLoader::load_from_file(&explicit).unwrap()
    });

    assert_eq!(config.api_version(), "2.120.0");
    assert_eq!(config.min_cli_version(), "6.30.0");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_environment_overrides_files() {
    let test_dir = TempDir::new().unwrap();
    write_global_config(
        &test_dir,
        r#"
[target]
api_version = "2.100.0"
"#,
    );

    let config = with_config_env(
        &test_dir,
        &[
            ("CFBRIDGE_TARGET__API_VERSION", "2.68.0"),
            ("CFBRIDGE_TARGET__MIN_CLI_VERSION", "7.0.0"),
        ],
        || ConfigLoader::load().unwrap(),
    );

    assert_eq!(config.api_version(), "2.68.0");
    assert_eq!(config.min_cli_version(), "7.0.0");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let test_dir = TempDir::new().unwrap();
    let missing = test_dir.path().join("missing.toml");

    let result = with_config_env(&test_dir, &[], || ConfigLoader::load_from_file(&missing));

    assert!(matches!(result, Err(CliError::ConfigError(_))));
}
