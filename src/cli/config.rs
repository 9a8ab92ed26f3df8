use anyhow::{Context, Result};

use crate::cli::args::{ConfigCliArgs, ConfigCommand};
use crate::config::Config;
use crate::global;

pub fn handle_config_command(args: ConfigCliArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            let content =
                toml::to_string_pretty(&config).context("Failed to serialize config")?;
            print!("{content}");
        }
        ConfigCommand::Path => {
            println!("{}", global::config_file()?.display());
        }
    }
    Ok(())
}
