use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clearsay")]
#[command(about = "Speech transcript cleanup for voice practice", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Clean a transcript given as an argument, from a file, or from stdin
    Clean(CleanCliArgs),
    /// Inspect the cleanup configuration
    Config(ConfigCliArgs),
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug, Default)]
pub struct CleanCliArgs {
    /// Raw transcript text (stdin is read when neither text nor --file is given)
    pub text: Option<String>,

    /// Read the raw transcript from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Force the comma insertion stage on
    #[arg(long)]
    pub commas: bool,

    /// Force the comma insertion stage off
    #[arg(long, conflicts_with = "commas")]
    pub no_commas: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write cleaned output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(ClapArgs, Debug)]
pub struct ConfigCliArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
