use anyhow::Result;
use clap::Parser;
use clearsay::cli::{handle_clean_command, handle_config_command, CleanCliArgs, Cli, CliCommand};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so cleaned text can be piped
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(CliCommand::Version) => {
            println!("clearsay {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(CliCommand::Config(args)) => handle_config_command(args),
        Some(CliCommand::Clean(args)) => handle_clean_command(args),
        None => handle_clean_command(CleanCliArgs::default()),
    }
}
