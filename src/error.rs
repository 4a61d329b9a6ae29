//! Error types for the version-bridging layer.

use thiserror::Error;

/// Version string parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("No Major.Minor.Patch elements found")]
    MissingCore,

    #[error("Invalid version '{raw}': {reason}")]
    Invalid { raw: String, reason: String },
}

/// Errors returned by either API generation's actor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("App {name} not found")]
    ApplicationNotFound { name: String },

    #[error("Space with GUID {guid} not found")]
    SpaceNotFound { guid: String },

    #[error("{0}")]
    Backend(String),
}

/// Top-level errors surfaced by the command layer
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Snapshot error: {0}")]
    SnapshotError(String),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError(err.to_string())
    }
}
