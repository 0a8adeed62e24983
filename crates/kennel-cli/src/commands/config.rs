//! `kennel config`: inspect the effective configuration.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `explicit` is the `--config` path, if one was given.
pub fn execute(
    cmd: ConfigCommands,
    explicit: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.value(&config.get(&key)?)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.value(&config.to_toml()?)?;
        }

        ConfigCommands::Path => {
            let path = explicit.unwrap_or_else(AppConfig::config_path);
            output.value(&path.display().to_string())?;
        }
    }

    Ok(())
}
