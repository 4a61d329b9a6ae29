//! Integration tests for the cfbridge version-bridging layer

mod config_loading;
mod manifest_command;
mod test_utils;
mod version_checks;
