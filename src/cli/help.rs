//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log fields (e.g. "app", "create-app-manifest").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::App { .. } => "app",
        Commands::CreateAppManifest { .. } => "create-app-manifest",
        Commands::VersionCheck => "version-check",
    }
}

/// Whether the command talks to the platform and therefore needs a snapshot.
pub fn needs_backend(command: &Commands) -> bool {
    !matches!(command, Commands::VersionCheck)
}
