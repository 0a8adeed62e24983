//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `KENNEL__SHELL__PROMPT`, `KENNEL__OUTPUT__FORMAT`, ...
//! 3. Config file: `--config FILE`, else `config.toml` in the platform config dir
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "KENNEL";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Session behaviour.
    pub shell: ShellConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt shown on an interactive terminal.
    pub prompt: String,
    /// Start every session from the demo shelter.
    pub seed_demo_data: bool,
    /// Abort the session on the first failing command.
    pub stop_on_error: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "kennel".into(),
            seed_demo_data: false,
            stop_on_error: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicitly passed `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Config::builder()
            .add_source(Config::try_from(&Self::default()).map_err(config_error)?)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kennel.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "kennel", "kennel")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kennel.toml"))
    }

    /// The configuration rendered as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Look up one value by its dotted key.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let value = match key {
            "shell.prompt" => self.shell.prompt.clone(),
            "shell.seed_demo_data" => self.shell.seed_demo_data.to_string(),
            "shell.stop_on_error" => self.shell.stop_on_error.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => serde_json::to_value(self.output.format)
                .ok()
                .and_then(|v| v.as_str().map(str::to_owned))
                .unwrap_or_default(),
            _ => {
                return Err(CliError::ConfigError {
                    message: format!("Unknown config key: '{key}'"),
                    source: None,
                });
            }
        };
        Ok(value)
    }
}

fn config_error(err: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_prompt() {
        assert_eq!(AppConfig::default().shell.prompt, "kennel");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn file_overrides_defaults() {
        let file = write_config(
            "[shell]\nprompt = \"shelter\"\nstop_on_error = true\n\n[output]\nformat = \"json\"\n",
        );
        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.shell.prompt, "shelter");
        assert!(cfg.shell.stop_on_error);
        assert!(!cfg.shell.seed_demo_data);
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("[output]\nformat = \"sparkly\"\n");
        assert!(matches!(
            AppConfig::load(Some(file.path())),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn toml_round_trips_through_loader() {
        let mut cfg = AppConfig::default();
        cfg.shell.seed_demo_data = true;
        let file = write_config(&cfg.to_toml().unwrap());
        assert_eq!(AppConfig::load(Some(file.path())).unwrap(), cfg);
    }

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("shell.prompt").unwrap(), "kennel");
        assert_eq!(cfg.get("output.no_color").unwrap(), "false");
        assert_eq!(cfg.get("output.format").unwrap(), "auto");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            cfg.get("does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
