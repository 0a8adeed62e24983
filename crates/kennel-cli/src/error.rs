//! Comprehensive error handling for Kennel CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::path::PathBuf;
use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use kennel_core::error::KennelError;

// Re-export so callers only need `use crate::error::*`.
pub use kennel_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A shell line could not be parsed.
    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },

    /// Invalid user input (validation failed before reaching the registry).
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `kennel init` found a file it was not allowed to overwrite.
    #[error("Configuration already exists at {path}")]
    ConfigExists { path: PathBuf },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `kennel-core`.
    #[error(transparent)]
    Core(#[from] KennelError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input ended or was interrupted at a prompt.
    #[error("Session interrupted")]
    Interrupted,

    /// Feature not available (e.g., interactive mode without feature flag).
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidCommand { .. } => vec![
                "Type 'help' to list commands".into(),
                "Type '<command> --help' for a command's arguments".into(),
                "Quote values with spaces: dog add \"La Tuerta\" ...".into(),
            ],

            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { .. } => vec![
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Use 'kennel init --force' to recreate a default config".into(),
                "Environment overrides use KENNEL__SECTION__KEY".into(),
            ],

            Self::ConfigExists { .. } => vec![
                "Use --force to overwrite it".into(),
                "Use 'kennel config list' to see the active values".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],

            Self::Interrupted => vec!["No further commands were run".into()],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{}' feature is not available in this build", feature),
                format!(
                    "Install with the feature enabled: cargo install kennel-cli --features {}",
                    feature
                ),
                "Or pipe commands on stdin / use --script FILE".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCommand { .. } => ErrorCategory::UserError,
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::ConfigExists { .. } => ErrorCategory::Conflict,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Conflict => ErrorCategory::Conflict,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Interrupted => ErrorCategory::UserError,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Conflict      |  5   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Conflict => 5,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        let _ = write!(
            output,
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        );
        let _ = writeln!(output, "  {}", self.to_string().red());

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = writeln!(
                    output,
                    "\n  {} {}",
                    "→".dimmed(),
                    err.to_string().dimmed()
                );
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(output, "\n{}", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(output, "  {suggestion}");
            }
        }

        if !verbose {
            output.push('\n');
            let _ = writeln!(
                output,
                "{} {}",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            );
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\nError: {self}");

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                let _ = writeln!(out, "  Caused by: {err}");
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Conflict => tracing::warn!("Conflict: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Duplicate registration or refused lifecycle transition.
    Conflict,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
///
/// Two concrete impls are provided:
/// - `Result<T, std::io::Error>` → `CliError::IoError`
/// - `Result<T, KennelError>`    → `CliError::Core`
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, KennelError> {
    /// Core errors already carry their context; the message is only logged.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| {
            let context: String = f().into();
            tracing::debug!(%context, "Registry call failed");
            CliError::Core(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use kennel_core::prelude::*;

    fn transition_error() -> CliError {
        let mut registry = AdoptionRegistry::new();
        registry
            .register_breed(NewBreed::new("Pug".parse().unwrap()))
            .unwrap();
        registry
            .register_dog(NewDog {
                id: None,
                name: "Rex".into(),
                age: 1,
                weight: "3".parse().unwrap(),
                sex: Sex::Male,
                breed: "Pug".parse().unwrap(),
                vaccinated: false,
                has_disability: false,
            })
            .unwrap();
        registry
            .register_adopter(NewAdopter {
                name: "Ana".into(),
                dni: "33333333".parse().unwrap(),
                email: "ana@na.com".parse().unwrap(),
            })
            .unwrap();
        let err = registry
            .adopt(DogId::new(1).unwrap(), &"33333333".parse().unwrap())
            .unwrap_err();
        CliError::Core(err)
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn invalid_command_points_to_help() {
        let err = CliError::InvalidCommand {
            message: "unrecognized subcommand 'adoptt'".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("help")));
    }

    #[test]
    fn transition_suggests_reserving_first() {
        let err = transition_error();
        assert!(err.suggestions().iter().any(|s| s.contains("Reserve")));
    }

    #[test]
    fn config_exists_suggests_force() {
        let err = CliError::ConfigExists {
            path: PathBuf::from("/tmp/kennel.toml"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_not_found() {
        let registry = AdoptionRegistry::new();
        let err = registry.get_dog(DogId::new(7).unwrap()).unwrap_err();
        assert_eq!(CliError::Core(err).exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_conflict() {
        assert_eq!(transition_error().exit_code(), 5);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = transition_error().format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("no prior reservation"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = CliError::Interrupted.format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading script");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }

    #[test]
    fn into_cli_core_error() {
        let registry = AdoptionRegistry::new();
        let cli = registry
            .get_adopter(&"11111111".parse().unwrap())
            .map(|_| ())
            .with_cli_context(|| "showing adopter");
        assert!(matches!(cli, Err(CliError::Core(_))));
    }
}
