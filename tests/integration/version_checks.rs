//! Integration tests for the CLI and API version checks run by every command

use cfbridge::actor::SnapshotActor;
use cfbridge::cli::{Commands, RunContext};
use cfbridge::compat::{CompatibilityContext, CLI_UPGRADE_URL, UNSUPPORTED_API_MESSAGE};
use cfbridge::config::BridgeConfig;
use cfbridge::error::{CliError, VersionError};
use cfbridge::output::BufferSink;
use cfbridge::version::DEFAULT_VERSION;

use crate::integration::test_utils::{platform_snapshot, snapshot_actor};

fn versions(binary: &str, min: &str, api: &str) -> CompatibilityContext {
    CompatibilityContext {
        binary_version: binary.to_string(),
        min_cli_version: min.to_string(),
        api_version: api.to_string(),
    }
}

fn run(versions: &CompatibilityContext, command: &Commands) -> (Result<(), CliError>, BufferSink) {
    let context = RunContext::with_actor(BridgeConfig::default(), snapshot_actor());
    let mut sink = BufferSink::new();
    let result = context.execute_with_versions(command, versions, &mut sink);
    (result, sink)
}

#[test]
fn test_outdated_cli_is_told_to_upgrade() {
    let (result, sink) = run(&versions("0.0.0", "1.0.0", "100.200.3"), &Commands::VersionCheck);

    assert!(result.is_ok());
    assert_eq!(sink.err.len(), 1);
    let message = &sink.err[0];
    assert!(message.contains("100.200.3"));
    assert!(message.contains("requires CLI version 1.0.0"));
    assert!(message.contains("You are currently on version 0.0.0"));
    assert!(message.contains(CLI_UPGRADE_URL));
}

#[test]
fn test_current_cli_is_silent() {
    let (result, sink) = run(&versions("1.0.0", "1.0.0", "100.200.3"), &Commands::VersionCheck);
    assert!(result.is_ok());
    assert!(sink.err.is_empty());
}

#[test]
fn test_malformed_cli_version_fails_version_check() {
    let (result, sink) = run(&versions("&#%", "1.0.0", "100.200.3"), &Commands::VersionCheck);

    match result {
        Err(CliError::Version(e)) => {
            assert_eq!(e, VersionError::MissingCore);
            assert_eq!(e.to_string(), "No Major.Minor.Patch elements found");
        }
        other => panic!("expected version error, got {:?}", other),
    }
    assert!(sink.err.is_empty());
}

#[test]
fn test_malformed_cli_version_does_not_block_app() {
    let command = Commands::App {
        name: "some-app".to_string(),
        space: "space-1".to_string(),
        show_command: false,
    };
    let (result, sink) = run(&versions("&#%", "1.0.0", "2.100.0"), &command);

    assert!(result.is_ok(), "app failed: {:?}", result);
    assert_eq!(sink.err, vec!["v2-warning", "v3-warning"]);
    assert!(sink.out.iter().any(|l| l.starts_with("name:") && l.ends_with("some-app")));
}

#[test]
fn test_malformed_cli_version_does_not_block_manifest() {
    let command = Commands::CreateAppManifest {
        name: "some-app".to_string(),
        space: "space-1".to_string(),
    };
    let (result, sink) = run(&versions("&#%", "1.0.0", "2.100.0"), &command);

    assert!(result.is_ok(), "manifest failed: {:?}", result);
    assert_eq!(sink.out.last().map(String::as_str), Some("OK"));
}

#[test]
fn test_snapshot_api_version_fills_unset_target() {
    let mut snapshot = platform_snapshot();
    snapshot.legacy_api_version = "2.68.0".to_string();

    let context = RunContext::with_actor(BridgeConfig::default(), SnapshotActor::new(snapshot.clone()));
    let mut sink = BufferSink::new();
    context.execute(&Commands::VersionCheck, &mut sink).unwrap();
    assert_eq!(sink.err, vec![UNSUPPORTED_API_MESSAGE]);

    let mut config = BridgeConfig::default();
    config.target.api_version = "2.100.0".to_string();
    let context = RunContext::with_actor(config, SnapshotActor::new(snapshot));
    let mut sink = BufferSink::new();
    context.execute(&Commands::VersionCheck, &mut sink).unwrap();
    assert!(sink.err.is_empty());
}

#[test]
fn test_empty_minimum_and_default_version_never_warn() {
    let (result, sink) = run(&versions("0.0.1", "", "2.100.0"), &Commands::VersionCheck);
    assert!(result.is_ok());
    assert!(sink.err.is_empty());

    let (result, sink) = run(&versions(DEFAULT_VERSION, "1.2.3", "2.100.0"), &Commands::VersionCheck);
    assert!(result.is_ok());
    assert!(sink.err.is_empty());
}

#[test]
fn test_old_api_is_flagged() {
    let (result, sink) = run(&versions("1.0.0", "", "2.68.0"), &Commands::VersionCheck);
    assert!(result.is_ok());
    assert_eq!(sink.err, vec![UNSUPPORTED_API_MESSAGE]);

    let (_, sink) = run(&versions("1.0.0", "", "2.80.0"), &Commands::VersionCheck);
    assert!(sink.err.is_empty());
}

#[test]
fn test_upgrade_notice_precedes_backend_warnings() {
    let command = Commands::App {
        name: "some-app".to_string(),
        space: "space-1".to_string(),
        show_command: false,
    };
    let (result, sink) = run(&versions("0.9.0", "1.0.0", "2.68.0"), &command);

    assert!(result.is_ok());
    assert_eq!(sink.err.len(), 4);
    assert!(sink.err[0].contains(CLI_UPGRADE_URL));
    assert_eq!(sink.err[1], UNSUPPORTED_API_MESSAGE);
    assert_eq!(&sink.err[2..], &["v2-warning", "v3-warning"]);
}
