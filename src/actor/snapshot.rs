//! Snapshot backend: serves both actor contracts from a JSON platform snapshot.
//!
//! Stands in for the per-generation HTTP clients so the binary and the
//! integration tests can drive the bridge against fixed platform state.

use crate::actor::current::{self, CurrentActor};
use crate::actor::legacy::{ApplicationSummary, LegacyActor, ManifestApplication};
use crate::error::{ActionError, CliError};
use crate::warnings::{Warned, Warnings};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Platform state as seen through both API generations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformSnapshot {
    /// v2 API version, e.g. `2.80.0`.
    #[serde(default)]
    pub legacy_api_version: String,
    /// v3 API version, e.g. `3.25.0`.
    #[serde(default)]
    pub current_api_version: String,
    /// Known space GUIDs. Empty means any space is accepted.
    #[serde(default)]
    pub spaces: Vec<String>,
    #[serde(default)]
    pub applications: Vec<SnapshotApplication>,
    /// Warnings attached to every v2 response.
    #[serde(default)]
    pub legacy_warnings: Vec<String>,
    /// Warnings attached to every v3 response.
    #[serde(default)]
    pub current_warnings: Vec<String>,
}

/// One application: its v2 summary and, if the v3 API knows it, its v3 record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotApplication {
    pub summary: ApplicationSummary,
    #[serde(default)]
    pub current: Option<current::Application>,
}

/// Cheap to clone; clones share the snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotActor {
    snapshot: Arc<PlatformSnapshot>,
}

impl SnapshotActor {
    pub fn new(snapshot: PlatformSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CliError::SnapshotError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let snapshot: PlatformSnapshot = serde_json::from_str(&raw).map_err(|e| {
            CliError::SnapshotError(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        debug!(
            path = %path.display(),
            applications = snapshot.applications.len(),
            "Loaded platform snapshot"
        );
        Ok(Self::new(snapshot))
    }

    pub fn snapshot(&self) -> &PlatformSnapshot {
        &self.snapshot
    }

    fn find(&self, name: &str, space_guid: &str) -> Result<&SnapshotApplication, ActionError> {
        if !self.snapshot.spaces.is_empty() && !self.snapshot.spaces.iter().any(|s| s == space_guid)
        {
            return Err(ActionError::SpaceNotFound {
                guid: space_guid.to_string(),
            });
        }

        self.snapshot
            .applications
            .iter()
            .find(|app| {
                app.summary.application.name == name
                    && app.summary.application.space_guid == space_guid
            })
            .ok_or_else(|| ActionError::ApplicationNotFound {
                name: name.to_string(),
            })
    }

    fn legacy_warnings(&self) -> Warnings {
        Warnings::from(self.snapshot.legacy_warnings.clone())
    }

    fn current_warnings(&self) -> Warnings {
        Warnings::from(self.snapshot.current_warnings.clone())
    }
}

impl LegacyActor for SnapshotActor {
    fn get_application_summary_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> Warned<ApplicationSummary> {
        let result = self.find(name, space_guid).map(|app| app.summary.clone());
        (result, self.legacy_warnings())
    }

    fn create_application_manifest_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> Warned<ManifestApplication> {
        let result = self
            .find(name, space_guid)
            .map(|app| manifest_from_summary(&app.summary));
        (result, self.legacy_warnings())
    }
}

impl CurrentActor for SnapshotActor {
    fn get_application_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> Warned<current::Application> {
        let result = self.find(name, space_guid).and_then(|app| {
            app.current
                .clone()
                .ok_or_else(|| ActionError::ApplicationNotFound {
                    name: name.to_string(),
                })
        });
        (result, self.current_warnings())
    }

    fn cloud_controller_api_version(&self) -> String {
        self.snapshot.current_api_version.clone()
    }
}

fn manifest_from_summary(summary: &ApplicationSummary) -> ManifestApplication {
    let app = &summary.application;
    let stack_name = Some(summary.stack.name.clone()).filter(|s| !s.is_empty());
    ManifestApplication {
        name: app.name.clone(),
        buildpack: app.buildpack.clone(),
        instances: app.instances,
        memory_mb: app.memory_mb,
        disk_quota_mb: app.disk_quota_mb,
        stack_name,
        routes: summary.routes.iter().map(|r| r.to_string()).collect(),
    }
}
