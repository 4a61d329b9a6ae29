//! Summary derivation.
//!
//! Display-ready values computed from an application summary: effective
//! buildpacks, instance counts and usage, route strings, and the byte, CPU and
//! time formats the summary view prints. All functions are pure.

use crate::actor::bridge::MergedApplicationSummary;
use crate::actor::legacy::{
    ApplicationInstanceWithStats, ApplicationSummary, InstanceState, Route,
};
use chrono::{DateTime, Utc};

pub const KILOBYTE: u64 = 1024;
pub const MEGABYTE: u64 = 1024 * KILOBYTE;
pub const GIGABYTE: u64 = 1024 * MEGABYTE;
pub const TERABYTE: u64 = 1024 * GIGABYTE;

/// Layout for "last uploaded" and instance start times, e.g. `Thu 19 Jun 01:18:37 UTC 2014`.
pub const TIMESTAMP_LAYOUT: &str = "%a %d %b %H:%M:%S UTC %Y";

/// Binary byte-size abbreviation: `128M`, `2G`, `1.5K`, `0`.
pub fn byte_size(bytes: u64) -> String {
    let (unit, divisor) = match bytes {
        0 => return "0".to_string(),
        b if b >= TERABYTE => ("T", TERABYTE),
        b if b >= GIGABYTE => ("G", GIGABYTE),
        b if b >= MEGABYTE => ("M", MEGABYTE),
        b if b >= KILOBYTE => ("K", KILOBYTE),
        _ => ("B", 1),
    };
    let value = format!("{:.1}", bytes as f64 / divisor as f64);
    let value = value.strip_suffix(".0").unwrap_or(&value);
    format!("{}{}", value, unit)
}

/// `used of quota`, each side abbreviated on its own.
pub fn usage_of_quota(used: u64, quota: u64) -> String {
    format!("{} of {}", byte_size(used), byte_size(quota))
}

/// CPU fraction as a percentage with one decimal: `0.73` -> `73.0%`.
pub fn cpu_percentage(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Fractional Unix epoch seconds to UTC.
pub fn epoch_to_utc(epoch_seconds: f64) -> Option<DateTime<Utc>> {
    let secs = epoch_seconds.floor();
    let nanos = ((epoch_seconds - secs) * 1_000_000_000.0) as u32;
    DateTime::from_timestamp(secs as i64, nanos.min(999_999_999))
}

pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format(TIMESTAMP_LAYOUT).to_string()
}

/// Instance start time in [`TIMESTAMP_LAYOUT`]; empty when out of range.
pub fn format_epoch(epoch_seconds: f64) -> String {
    epoch_to_utc(epoch_seconds)
        .map(|t| format_timestamp(&t))
        .unwrap_or_default()
}

/// Routes as `host.domain[:port][path]`, joined with `, `.
pub fn format_routes(routes: &[Route]) -> String {
    routes
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Running vs declared instance counts and flat-rate memory usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceAggregate {
    pub running: usize,
    pub total: u32,
    /// Per-instance memory quota in bytes.
    pub memory_per_instance: u64,
}

impl InstanceAggregate {
    pub fn from_summary(summary: &ApplicationSummary) -> Self {
        let running = summary
            .running_instances
            .iter()
            .filter(|i| i.state == InstanceState::Running)
            .count();
        let total = summary
            .application
            .instances
            .unwrap_or(summary.running_instances.len() as u32);
        let memory_per_instance = summary
            .application
            .memory_mb
            .unwrap_or(0)
            .saturating_mul(MEGABYTE);
        Self {
            running,
            total,
            memory_per_instance,
        }
    }

    /// `running/total`, e.g. `1/3`.
    pub fn ratio(&self) -> String {
        format!("{}/{}", self.running, self.total)
    }

    /// `<memory> x <total> instances`, e.g. `128M x 3 instances`.
    pub fn usage(&self) -> String {
        format!("{} x {} instances", byte_size(self.memory_per_instance), self.total)
    }

    /// Memory billed across all declared instances, in bytes.
    pub fn total_memory(&self) -> u64 {
        self.memory_per_instance.saturating_mul(u64::from(self.total))
    }
}

/// One instance row, all columns pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRow {
    pub index: String,
    pub state: String,
    pub since: String,
    pub cpu: String,
    pub memory: String,
    pub disk: String,
    pub details: String,
}

impl From<&ApplicationInstanceWithStats> for InstanceRow {
    fn from(instance: &ApplicationInstanceWithStats) -> Self {
        Self {
            index: format!("#{}", instance.id),
            state: instance.state.to_string(),
            since: format_epoch(instance.since),
            cpu: cpu_percentage(instance.cpu),
            memory: usage_of_quota(instance.memory, instance.memory_quota),
            disk: usage_of_quota(instance.disk, instance.disk_quota),
            details: instance.details.clone(),
        }
    }
}

/// Everything the summary display prints, derived once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub name: String,
    pub requested_state: String,
    pub isolation_segment: Option<String>,
    pub instances: InstanceAggregate,
    pub routes: String,
    pub last_uploaded: Option<String>,
    pub stack: String,
    pub buildpacks: Vec<String>,
    pub start_command: Option<String>,
    pub instance_rows: Vec<InstanceRow>,
}

impl SummaryView {
    /// View of a merged summary; buildpacks follow v3-first precedence.
    pub fn from_merged(summary: &MergedApplicationSummary) -> Self {
        Self::build(&summary.legacy, summary.calculated_buildpacks())
    }

    /// View of a v2-only summary.
    pub fn from_legacy(summary: &ApplicationSummary) -> Self {
        Self::build(summary, vec![summary.calculated_buildpack()])
    }

    fn build(summary: &ApplicationSummary, buildpacks: Vec<String>) -> Self {
        let app = &summary.application;
        Self {
            name: app.name.clone(),
            requested_state: app.state.to_lowercase(),
            isolation_segment: summary.isolation_segment.clone().filter(|s| !s.is_empty()),
            instances: InstanceAggregate::from_summary(summary),
            routes: format_routes(&summary.routes),
            last_uploaded: app.package_updated_at.as_ref().map(format_timestamp),
            stack: summary.stack.name.clone(),
            buildpacks,
            start_command: app.detected_start_command.clone().filter(|s| !s.is_empty()),
            instance_rows: summary.running_instances.iter().map(InstanceRow::from).collect(),
        }
    }
}
