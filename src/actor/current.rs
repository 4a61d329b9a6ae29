//! Current (v3) generation: data model and actor contract.

use crate::warnings::Warned;
use serde::{Deserialize, Serialize};

/// Contract for the v3 API actor.
pub trait CurrentActor {
    fn get_application_by_name_and_space(&self, name: &str, space_guid: &str)
        -> Warned<Application>;

    /// Raw API version string the v3 endpoint reported, e.g. `3.25.0`.
    fn cloud_controller_api_version(&self) -> String;
}

/// v3 application record; only the fields the bridge consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    #[serde(default)]
    pub guid: String,
    #[serde(default)]
    pub state: String,
    /// Buildpacks in lifecycle order; empty when the app relies on detection.
    #[serde(default)]
    pub lifecycle_buildpacks: Vec<String>,
}
