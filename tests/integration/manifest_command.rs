//! Integration tests for the `create-app-manifest` command

use cfbridge::actor::SnapshotActor;
use cfbridge::cli::{Commands, RunContext};
use cfbridge::compat::CompatibilityContext;
use cfbridge::config::BridgeConfig;
use cfbridge::error::{ActionError, CliError};
use cfbridge::output::BufferSink;

use crate::integration::test_utils::platform_snapshot;

fn versions() -> CompatibilityContext {
    CompatibilityContext {
        binary_version: "1.0.0".to_string(),
        min_cli_version: String::new(),
        api_version: "2.100.0".to_string(),
    }
}

fn manifest(name: &str) -> Commands {
    Commands::CreateAppManifest {
        name: name.to_string(),
        space: "space-1".to_string(),
    }
}

fn context_with_v3_version(version: &str) -> RunContext {
    let mut snapshot = platform_snapshot();
    snapshot.current_api_version = version.to_string();
    RunContext::with_actor(BridgeConfig::default(), SnapshotActor::new(snapshot))
}

#[test]
fn test_manifest_with_v3_gate_met_collects_both_warnings() {
    let context = context_with_v3_version("3.25.0");
    let mut sink = BufferSink::new();

    context
        .execute_with_versions(&manifest("some-app"), &versions(), &mut sink)
        .unwrap();

    assert_eq!(sink.err, vec!["v2-warning", "v3-warning"]);
    assert_eq!(sink.out.last().map(String::as_str), Some("OK"));
}

#[test]
fn test_manifest_below_v3_gate_skips_v3() {
    let context = context_with_v3_version("3.24");
    let mut sink = BufferSink::new();

    context
        .execute_with_versions(&manifest("v2-only"), &versions(), &mut sink)
        .unwrap();

    assert_eq!(sink.err, vec!["v2-warning"]);
}

#[test]
fn test_manifest_v3_failure_is_reported() {
    let context = context_with_v3_version("3.30");
    let mut sink = BufferSink::new();

    let err = context
        .execute_with_versions(&manifest("v2-only"), &versions(), &mut sink)
        .unwrap_err();

    assert!(matches!(
        err,
        CliError::Action(ActionError::ApplicationNotFound { .. })
    ));
    assert_eq!(sink.err, vec!["v2-warning", "v3-warning"]);
    assert_ne!(sink.out.last().map(String::as_str), Some("OK"));
}

#[test]
fn test_manifest_for_unknown_app_fails_in_v2() {
    let context = context_with_v3_version("3.25.0");
    let mut sink = BufferSink::new();

    let err = context
        .execute_with_versions(&manifest("nope"), &versions(), &mut sink)
        .unwrap_err();

    assert!(matches!(
        err,
        CliError::Action(ActionError::ApplicationNotFound { .. })
    ));
    assert_eq!(sink.err, vec!["v2-warning"]);
}
