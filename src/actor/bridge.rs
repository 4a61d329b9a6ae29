//! Dual-generation bridging actor.
//!
//! Calls the legacy and current actors one after another, merges what they
//! return, and stops at the first failing sub-call. Warnings from every
//! sub-call that ran are returned either way.

use crate::actor::current::CurrentActor;
use crate::actor::legacy::{ApplicationSummary, LegacyActor};
use crate::version::{self, Version};
use crate::warnings::{Warned, Warnings};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Lowest v3 API version whose application endpoint the manifest flow uses.
pub const MANIFEST_FEATURE_MIN_VERSION: &str = "3.25.0";

fn manifest_feature_gate() -> &'static Version {
    static GATE: OnceLock<Version> = OnceLock::new();
    GATE.get_or_init(|| {
        Version::parse(MANIFEST_FEATURE_MIN_VERSION).unwrap_or(Version::Unknown)
    })
}

/// v2 summary merged with the v3 lifecycle buildpacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedApplicationSummary {
    pub legacy: ApplicationSummary,
    pub buildpacks: Vec<String>,
}

impl MergedApplicationSummary {
    /// v3 buildpacks when present, otherwise the single v2 buildpack (possibly `""`).
    pub fn calculated_buildpacks(&self) -> Vec<String> {
        if self.buildpacks.is_empty() {
            vec![self.legacy.calculated_buildpack()]
        } else {
            self.buildpacks.clone()
        }
    }
}

/// Holds one actor per API generation.
pub struct BridgeActor<L, C> {
    legacy: L,
    current: C,
}

impl<L: LegacyActor, C: CurrentActor> BridgeActor<L, C> {
    pub fn new(legacy: L, current: C) -> Self {
        Self { legacy, current }
    }

    pub fn legacy(&self) -> &L {
        &self.legacy
    }

    pub fn current(&self) -> &C {
        &self.current
    }

    pub fn get_application_summary_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> Warned<MergedApplicationSummary> {
        let mut all_warnings = Warnings::new();

        debug!(app = name, space = space_guid, "Fetching v2 application summary");
        let (legacy_result, legacy_warnings) = self
            .legacy
            .get_application_summary_by_name_and_space(name, space_guid);
        all_warnings.append(legacy_warnings);
        let legacy = match legacy_result {
            Ok(summary) => summary,
            Err(e) => {
                warn!(app = name, error = %e, "v2 application summary failed");
                return (Err(e), all_warnings);
            }
        };

        debug!(app = name, space = space_guid, "Fetching v3 application");
        let (current_result, current_warnings) = self
            .current
            .get_application_by_name_and_space(name, space_guid);
        all_warnings.append(current_warnings);
        let current = match current_result {
            Ok(app) => app,
            Err(e) => {
                warn!(app = name, error = %e, "v3 application lookup failed");
                return (Err(e), all_warnings);
            }
        };

        let merged = MergedApplicationSummary {
            legacy,
            buildpacks: current.lifecycle_buildpacks,
        };
        (Ok(merged), all_warnings)
    }

    /// Runs the v2 manifest generation and, when the v3 API is new enough,
    /// the v3 application lookup. Only warnings and the first error come back.
    pub fn create_application_manifest_by_name_and_space(
        &self,
        name: &str,
        space_guid: &str,
    ) -> Warned<()> {
        let mut all_warnings = Warnings::new();

        debug!(app = name, space = space_guid, "Creating v2 manifest application");
        let (manifest_result, manifest_warnings) = self
            .legacy
            .create_application_manifest_by_name_and_space(name, space_guid);
        all_warnings.append(manifest_warnings);
        if let Err(e) = manifest_result {
            warn!(app = name, error = %e, "v2 manifest creation failed");
            return (Err(e), all_warnings);
        }

        let api_version = self.current.cloud_controller_api_version();
        if !version::meets_minimum(&api_version, manifest_feature_gate()) {
            debug!(
                api_version = %api_version,
                minimum = MANIFEST_FEATURE_MIN_VERSION,
                "v3 API below manifest feature gate, skipping v3 lookup"
            );
            return (Ok(()), all_warnings);
        }

        let (current_result, current_warnings) = self
            .current
            .get_application_by_name_and_space(name, space_guid);
        all_warnings.append(current_warnings);
        if let Err(e) = current_result {
            warn!(app = name, error = %e, "v3 application lookup failed");
            return (Err(e), all_warnings);
        }

        (Ok(()), all_warnings)
    }
}
