//! cfbridge CLI Binary
//!
//! Command-line entry point: loads configuration, sets up logging, and runs
//! one command against the configured platform snapshot.

use cfbridge::cli::{map_error, Cli, RunContext};
use cfbridge::config::{BridgeConfig, ConfigLoader};
use cfbridge::logging::{init_logging, LoggingConfig};
use cfbridge::output::TerminalSink;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("cfbridge starting");

    let context = match RunContext::new(config, cli.snapshot.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing run context: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let mut output = TerminalSink::new(logging_config.color);
    match context.execute(&cli.command, &mut output) {
        Ok(()) => info!("Command completed successfully"),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> Result<BridgeConfig, cfbridge::error::CliError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Overlay CLI logging flags on the configured logging settings.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &BridgeConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = file.clone();
    }

    logging
}
