//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, needs_backend};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    display_application_summary, display_merged_application_summary, display_summary_view,
    NO_RUNNING_INSTANCES,
};
pub use route::RunContext;
