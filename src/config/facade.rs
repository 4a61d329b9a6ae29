//! Config loader: assembles every source in precedence order.

use crate::config::merge::builder_with_defaults;
use crate::config::sources::{env, explicit_file, global_file};
use crate::config::BridgeConfig;
use crate::error::CliError;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global file, then environment overrides.
    pub fn load() -> Result<BridgeConfig, CliError> {
        Self::load_with(None)
    }

    /// As [`ConfigLoader::load`], with `path` layered between the global file and the environment.
    pub fn load_from_file(path: &Path) -> Result<BridgeConfig, CliError> {
        Self::load_with(Some(path))
    }

    fn load_with(explicit: Option<&Path>) -> Result<BridgeConfig, CliError> {
        let mut builder = builder_with_defaults()?;
        builder = global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = explicit_file::add_to_builder(builder, path)?;
        }
        builder = env::add_to_builder(builder);

        let config: BridgeConfig = builder.build()?.try_deserialize()?;
        debug!(
            api_version = %config.target.api_version,
            min_cli_version = %config.target.min_cli_version,
            "Configuration loaded"
        );
        Ok(config)
    }
}
