mod args;
mod clean;
mod config;

pub use args::{CleanCliArgs, Cli, CliCommand, ConfigCliArgs, ConfigCommand, OutputFormat};
pub use clean::handle_clean_command;
pub use config::handle_config_command;
