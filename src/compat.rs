//! Compatibility Warning Emitter
//!
//! Tells the operator when their CLI is older than the minimum the server
//! advises, or when the server's API is older than this CLI supports. Both
//! checks only read configuration and write to the diagnostic stream.

use crate::error::VersionError;
use crate::output::OutputSink;
use crate::version::{self, Version};
use std::cmp::Ordering;
use tracing::debug;

/// Where operators download a newer CLI.
pub const CLI_UPGRADE_URL: &str = "https://github.com/cloudfoundry/cli#downloads";

/// Oldest v2 API version this CLI supports.
pub const MIN_SUPPORTED_API_VERSION: &str = "2.75.0";

pub const UNSUPPORTED_API_MESSAGE: &str =
    "Your API version is no longer supported. Upgrade to a newer version of the API.";

/// Configuration values the checks read; all raw strings.
pub trait VersionConfig {
    /// API version of the targeted server.
    fn api_version(&self) -> String;

    /// Minimum CLI version the server recommends; empty when unset.
    fn min_cli_version(&self) -> String;

    /// Version of this CLI binary.
    fn binary_version(&self) -> String;
}

/// The three version strings a CLI check looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityContext {
    pub binary_version: String,
    pub min_cli_version: String,
    pub api_version: String,
}

impl CompatibilityContext {
    pub fn from_config(config: &dyn VersionConfig) -> Self {
        Self {
            binary_version: config.binary_version(),
            min_cli_version: config.min_cli_version(),
            api_version: config.api_version(),
        }
    }
}

impl VersionConfig for CompatibilityContext {
    fn api_version(&self) -> String {
        self.api_version.clone()
    }

    fn min_cli_version(&self) -> String {
        self.min_cli_version.clone()
    }

    fn binary_version(&self) -> String {
        self.binary_version.clone()
    }
}

pub fn cli_upgrade_message(api_version: &str, min_cli_version: &str, binary_version: &str) -> String {
    format!(
        "Cloud Foundry API version {} requires CLI version {}. You are currently on version {}. To upgrade your CLI, please visit: {}",
        api_version, min_cli_version, binary_version, CLI_UPGRADE_URL
    )
}

/// Recommend a CLI upgrade when the binary is older than the server's minimum.
///
/// Errors only when the binary's own version string cannot be parsed; a
/// warning being printed is not an error.
pub fn warn_cli_version_check(
    config: &dyn VersionConfig,
    output: &mut dyn OutputSink,
) -> Result<(), VersionError> {
    let min_cli_version = config.min_cli_version();
    if min_cli_version.is_empty() {
        debug!("No minimum CLI version advertised, skipping CLI version check");
        return Ok(());
    }

    let binary_version = config.binary_version();
    let current = Version::parse(&binary_version)?;
    if current.is_unknown() {
        debug!("Unversioned CLI build, skipping CLI version check");
        return Ok(());
    }

    let minimum = match Version::parse(&min_cli_version) {
        Ok(v) => v,
        Err(e) => {
            debug!(
                min_cli_version = %min_cli_version,
                error = %e,
                "Unparsable minimum CLI version, skipping CLI version check"
            );
            return Ok(());
        }
    };

    if version::compare(&current, &minimum) == Ordering::Less {
        output.write_err(&cli_upgrade_message(
            &config.api_version(),
            &min_cli_version,
            &binary_version,
        ));
    }

    Ok(())
}

/// Warn when the server's API is older than [`MIN_SUPPORTED_API_VERSION`].
///
/// Unparsable API versions pass silently.
pub fn warn_api_version_check(
    api_version: &str,
    output: &mut dyn OutputSink,
) -> Result<(), VersionError> {
    let server = match Version::parse_tolerant(api_version) {
        Ok(v) => v,
        Err(e) => {
            debug!(api_version, error = %e, "Unparsable API version, skipping API version check");
            return Ok(());
        }
    };
    let minimum = Version::parse(MIN_SUPPORTED_API_VERSION)?;

    if version::compare(&server, &minimum) == Ordering::Less {
        output.write_err(UNSUPPORTED_API_MESSAGE);
    }

    Ok(())
}
