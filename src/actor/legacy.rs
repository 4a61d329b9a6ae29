//! Legacy (v2) generation: data model and actor contract.

use crate::warnings::Warned;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contract for the v2 API actor.
pub trait LegacyActor {
    fn get_application_summary_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> Warned<ApplicationSummary>;

    fn create_application_manifest_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> Warned<ManifestApplication>;
}

/// v2 application record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    pub guid: String,
    #[serde(default)]
    pub space_guid: String,
    /// Per-instance memory in megabytes.
    #[serde(default)]
    pub memory_mb: Option<u64>,
    #[serde(default)]
    pub disk_quota_mb: Option<u64>,
    /// Requested state, e.g. `STARTED`.
    #[serde(default)]
    pub state: String,
    /// Buildpack set by the user.
    #[serde(default)]
    pub buildpack: Option<String>,
    #[serde(default)]
    pub detected_buildpack: Option<String>,
    #[serde(default)]
    pub detected_start_command: Option<String>,
    /// Declared instance count.
    #[serde(default)]
    pub instances: Option<u32>,
    #[serde(default)]
    pub package_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub host: Option<String>,
    pub domain: Domain,
    /// Path including its leading `/`.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.host.as_deref().filter(|h| !h.is_empty()) {
            Some(host) => write!(f, "{}.{}", host, self.domain.name)?,
            None => f.write_str(&self.domain.name)?,
        }
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        if let Some(path) = self.path.as_deref() {
            f.write_str(path)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstanceState {
    Running,
    Crashed,
    Starting,
    Down,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InstanceState::Running => "running",
            InstanceState::Crashed => "crashed",
            InstanceState::Starting => "starting",
            InstanceState::Down => "down",
            InstanceState::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// One instance snapshot as reported by the v2 stats endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInstanceWithStats {
    pub id: u32,
    pub state: InstanceState,
    /// Start time, fractional Unix epoch seconds.
    #[serde(default)]
    pub since: f64,
    /// CPU usage as a fraction of one core.
    #[serde(default)]
    pub cpu: f64,
    #[serde(default)]
    pub memory: u64,
    #[serde(default)]
    pub memory_quota: u64,
    #[serde(default)]
    pub disk: u64,
    #[serde(default)]
    pub disk_quota: u64,
    #[serde(default)]
    pub details: String,
}

/// v2 application summary: app record plus stack, routes and instance stats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSummary {
    pub application: Application,
    #[serde(default)]
    pub stack: Stack,
    #[serde(default)]
    pub isolation_segment: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
    /// Ordered by instance index as returned by the backend.
    #[serde(default)]
    pub running_instances: Vec<ApplicationInstanceWithStats>,
}

impl ApplicationSummary {
    /// Buildpack known to v2: user-set, else detected, else empty.
    pub fn calculated_buildpack(&self) -> String {
        self.application
            .buildpack
            .clone()
            .or_else(|| self.application.detected_buildpack.clone())
            .unwrap_or_default()
    }
}

/// Application entry of a generated manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestApplication {
    pub name: String,
    #[serde(default)]
    pub buildpack: Option<String>,
    #[serde(default)]
    pub instances: Option<u32>,
    #[serde(default)]
    pub memory_mb: Option<u64>,
    #[serde(default)]
    pub disk_quota_mb: Option<u64>,
    #[serde(default)]
    pub stack_name: Option<String>,
    #[serde(default)]
    pub routes: Vec<String>,
}
