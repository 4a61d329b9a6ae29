//! Shared test utilities for integration tests
//!
//! Provides environment isolation for config loading and a canned platform
//! snapshot for driving commands end to end.

use cfbridge::actor::{PlatformSnapshot, SnapshotActor};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Variables a test may touch; all are captured and restored.
const MANAGED_VARS: &[&str] = &[
    "HOME",
    "XDG_CONFIG_HOME",
    "CFBRIDGE_TARGET__API_VERSION",
    "CFBRIDGE_TARGET__MIN_CLI_VERSION",
    "CFBRIDGE_TARGET__SNAPSHOT",
];

/// Environment variable state to restore after test
struct EnvState {
    vars: Vec<(&'static str, Option<String>)>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            vars: MANAGED_VARS
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        for (name, value) in self.vars {
            match value {
                Some(orig) => std::env::set_var(name, orig),
                None => std::env::remove_var(name),
            }
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME inside `test_dir`, every managed
/// `CFBRIDGE_*` variable cleared, then `vars` applied.
///
/// The global config file therefore lives at `<test_dir>/cfbridge/config.toml`.
pub fn with_config_env<F, R>(test_dir: &TempDir, vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_home).unwrap();

    for name in MANAGED_VARS {
        std::env::remove_var(name);
    }
    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_dir.path().to_str().unwrap());
    for (name, value) in vars {
        std::env::set_var(name, value);
    }

    let result = f();

    env_state.restore();

    result
}

pub const SNAPSHOT_JSON: &str = r#"{
    "legacy_api_version": "2.100.0",
    "current_api_version": "3.25.0",
    "spaces": ["space-1"],
    "legacy_warnings": ["v2-warning"],
    "current_warnings": ["v3-warning"],
    "applications": [
        {
            "summary": {
                "application": {
                    "name": "some-app",
                    "guid": "some-app-guid",
                    "space_guid": "space-1",
                    "memory_mb": 128,
                    "state": "STARTED",
                    "detected_buildpack": "some-buildpack",
                    "instances": 3,
                    "package_updated_at": "1970-01-01T00:00:00Z"
                },
                "stack": { "name": "potatos" },
                "routes": [
                    { "host": "banana", "domain": { "name": "fruit.com" }, "path": "/hi" },
                    { "domain": { "name": "foobar.com" }, "port": 13 }
                ],
                "running_instances": [
                    {
                        "id": 0,
                        "state": "RUNNING",
                        "since": 1403140717.984577,
                        "cpu": 0.73,
                        "memory": 104857600,
                        "memory_quota": 134217728,
                        "disk": 52428800,
                        "disk_quota": 2147483648,
                        "details": "info from the backend"
                    },
                    {
                        "id": 1,
                        "state": "CRASHED",
                        "since": 1403100000.9,
                        "cpu": 0.37,
                        "memory": 104857600,
                        "memory_quota": 134217728,
                        "disk": 52428800,
                        "disk_quota": 2147483648,
                        "details": "potato"
                    }
                ]
            },
            "current": {
                "name": "some-app",
                "lifecycle_buildpacks": ["ruby-bp", "java-bp"]
            }
        },
        {
            "summary": {
                "application": {
                    "name": "v2-only",
                    "guid": "v2-only-guid",
                    "space_guid": "space-1"
                }
            }
        }
    ]
}"#;

pub fn platform_snapshot() -> PlatformSnapshot {
    serde_json::from_str(SNAPSHOT_JSON).unwrap()
}

pub fn snapshot_actor() -> SnapshotActor {
    SnapshotActor::new(platform_snapshot())
}
