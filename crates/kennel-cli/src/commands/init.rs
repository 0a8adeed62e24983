//! `kennel init`: create a default configuration file.

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Write the default configuration to `--path` or the platform config dir.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path: PathBuf = args.path.unwrap_or_else(AppConfig::config_path);

    if config_path.exists() {
        if !args.force {
            return Err(CliError::ConfigExists { path: config_path });
        }
        output.warning(&format!(
            "Overwriting existing configuration at {}",
            config_path.display()
        ))?;
    }

    let toml = AppConfig::default().to_toml()?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(&config_path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", config_path.display()),
        source: e,
    })?;

    info!(path = %config_path.display(), "Configuration written");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}
