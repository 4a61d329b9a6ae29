//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::CliError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &CliError) -> String {
    match e {
        CliError::Version(inner) => format!("Unable to check CLI version: {}", inner),
        other => other.to_string(),
    }
}
