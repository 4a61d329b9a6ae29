//! CLI route: single route table and run context. Dispatches to the bridge,
//! the compatibility checks and presentation.

use crate::actor::{BridgeActor, SnapshotActor};
use crate::cli::parse::Commands;
use crate::cli::presentation::display_merged_application_summary;
use crate::cli::{command_name, needs_backend};
use crate::compat::{
    warn_api_version_check, warn_cli_version_check, CompatibilityContext, VersionConfig,
};
use crate::config::BridgeConfig;
use crate::error::CliError;
use crate::output::OutputSink;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Runtime context for CLI execution: loaded configuration and, when a
/// snapshot is configured, the bridging actor over it.
pub struct RunContext {
    config: BridgeConfig,
    bridge: Option<BridgeActor<SnapshotActor, SnapshotActor>>,
}

impl RunContext {
    /// Build from an already-loaded config. `snapshot` overrides `target.snapshot`.
    pub fn new(config: BridgeConfig, snapshot: Option<PathBuf>) -> Result<Self, CliError> {
        let snapshot_path = snapshot.or_else(|| config.target.snapshot.clone());
        let bridge = match snapshot_path {
            Some(path) => {
                let actor = SnapshotActor::load(&path)?;
                Some(BridgeActor::new(actor.clone(), actor))
            }
            None => None,
        };
        Ok(Self { config, bridge })
    }

    /// Context over an in-memory snapshot actor.
    pub fn with_actor(config: BridgeConfig, actor: SnapshotActor) -> Self {
        Self {
            config,
            bridge: Some(BridgeActor::new(actor.clone(), actor)),
        }
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands, output: &mut dyn OutputSink) -> Result<(), CliError> {
        info!(command = command_name(command), "Executing command");
        let versions = self.versions();
        self.execute_with_versions(command, &versions, output)
    }

    /// Configured versions; the snapshot's v2 API version fills in an unset `target.api_version`.
    fn versions(&self) -> CompatibilityContext {
        let mut versions = CompatibilityContext::from_config(&self.config);
        if versions.api_version.is_empty() {
            if let Some(bridge) = &self.bridge {
                versions.api_version = bridge.legacy().snapshot().legacy_api_version.clone();
            }
        }
        versions
    }

    /// Execute with an explicit version source; lets callers pin the binary version.
    pub fn execute_with_versions(
        &self,
        command: &Commands,
        versions: &dyn VersionConfig,
        output: &mut dyn OutputSink,
    ) -> Result<(), CliError> {
        if needs_backend(command) && self.bridge.is_none() {
            return Err(CliError::ConfigError(
                "No platform snapshot configured. Pass --snapshot or set target.snapshot."
                    .to_string(),
            ));
        }

        if let Err(e) = warn_cli_version_check(versions, output) {
            if *command == Commands::VersionCheck {
                return Err(e.into());
            }
            warn!(error = %e, "Skipping CLI version check");
        }
        warn_api_version_check(&versions.api_version(), output)?;

        match command {
            Commands::App {
                name,
                space,
                show_command,
            } => self.handle_app(name, space, *show_command, output),
            Commands::CreateAppManifest { name, space } => {
                self.handle_create_app_manifest(name, space, output)
            }
            Commands::VersionCheck => {
                debug!("Version checks complete");
                Ok(())
            }
        }
    }

    fn bridge(&self) -> Result<&BridgeActor<SnapshotActor, SnapshotActor>, CliError> {
        self.bridge.as_ref().ok_or_else(|| {
            CliError::ConfigError("No platform snapshot configured".to_string())
        })
    }

    fn handle_app(
        &self,
        name: &str,
        space: &str,
        show_command: bool,
        output: &mut dyn OutputSink,
    ) -> Result<(), CliError> {
        output.write_out(&format!("Showing health and status for app {}...", name));
        output.write_out("");

        let (result, warnings) = self
            .bridge()?
            .get_application_summary_by_name_and_space(name, space);
        output.display_warnings(&warnings);
        let summary = result?;

        display_merged_application_summary(output, &summary, show_command);
        Ok(())
    }

    fn handle_create_app_manifest(
        &self,
        name: &str,
        space: &str,
        output: &mut dyn OutputSink,
    ) -> Result<(), CliError> {
        output.write_out(&format!(
            "Creating an app manifest from current settings of app {}...",
            name
        ));

        let (result, warnings) = self
            .bridge()?
            .create_application_manifest_by_name_and_space(name, space);
        output.display_warnings(&warnings);
        result?;

        output.write_out("OK");
        Ok(())
    }
}
