//! CLI parse: clap types for cfbridge. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cfbridge - application views across both platform API generations
#[derive(Parser)]
#[command(name = "cfbridge")]
#[command(about = "Application views bridged across the v2 and v3 platform APIs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Platform snapshot file (overrides target.snapshot)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show an application merged from both API generations
    App {
        /// Application name
        name: String,
        /// Space GUID
        #[arg(long)]
        space: String,
        /// Also show the detected start command
        #[arg(long)]
        show_command: bool,
    },
    /// Prepare a manifest for an application
    CreateAppManifest {
        /// Application name
        name: String,
        /// Space GUID
        #[arg(long)]
        space: String,
    },
    /// Check CLI and API versions against the targeted platform
    VersionCheck,
}
