//! Configuration System
//!
//! Layered configuration for the CLI: built-in defaults, the user's global
//! config file, an explicit `--config` file, then `CFBRIDGE_*` environment
//! variables. Holds the target's version information and logging settings.

use crate::compat::VersionConfig;
use crate::logging::LoggingConfig;
use crate::version::DEFAULT_VERSION;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Version of this binary, stamped at build time through `CFBRIDGE_BUILD_VERSION`.
pub fn build_version() -> &'static str {
    option_env!("CFBRIDGE_BUILD_VERSION").unwrap_or(DEFAULT_VERSION)
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Targeted platform
    #[serde(default)]
    pub target: TargetConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What is known about the targeted platform, recorded at login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Server API version
    #[serde(default)]
    pub api_version: String,

    /// Minimum CLI version the server recommends (empty when not advertised)
    #[serde(default)]
    pub min_cli_version: String,

    /// Platform snapshot backing the actors
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

impl VersionConfig for BridgeConfig {
    fn api_version(&self) -> String {
        self.target.api_version.clone()
    }

    fn min_cli_version(&self) -> String {
        self.target.min_cli_version.clone()
    }

    fn binary_version(&self) -> String {
        build_version().to_string()
    }
}
