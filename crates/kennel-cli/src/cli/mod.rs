//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub mod shell;

pub use global::{GlobalArgs, OutputFormat};
pub use shell::{AdopterCommand, BreedCommand, DogCommand, ShellCommand, ShellLine};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kennel",
    bin_name = "kennel",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Dog shelter adoption registry",
    long_about = "Kennel keeps a shelter's breeds, dogs and adopters, and moves \
                  each dog through reservation and adoption.",
    after_help = "EXAMPLES:\n\
        \x20 kennel shell --seed\n\
        \x20 kennel shell --script adoptions.kennel --stop-on-error\n\
        \x20 kennel demo --output-format json\n\
        \x20 kennel completions bash > /usr/share/bash-completion/completions/kennel",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run an interactive or scripted registry session.
    #[command(
        visible_alias = "sh",
        about = "Start a registry session",
        after_help = "EXAMPLES:\n\
            \x20 kennel shell\n\
            \x20 kennel shell --seed\n\
            \x20 echo 'dog list' | kennel shell --seed\n\
            \x20 kennel shell --script intake.kennel --stop-on-error"
    )]
    Shell(ShellArgs),

    /// Print the built-in demo shelter.
    #[command(
        about = "Show the demo shelter",
        after_help = "EXAMPLES:\n\
            \x20 kennel demo\n\
            \x20 kennel demo --output-format json"
    )]
    Demo(DemoArgs),

    /// Initialise a Kennel configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 kennel init           # default location\n\
            \x20 kennel init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kennel completions bash > ~/.local/share/bash-completion/completions/kennel\n\
            \x20 kennel completions zsh  > ~/.zfunc/_kennel\n\
            \x20 kennel completions fish > ~/.config/fish/completions/kennel.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Kennel configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kennel config get shell.prompt\n\
            \x20 kennel config list\n\
            \x20 kennel config path"
    )]
    Config(ConfigCommands),
}

// ── shell ─────────────────────────────────────────────────────────────────────

/// Arguments for `kennel shell`.
#[derive(Debug, Args)]
pub struct ShellArgs {
    /// Start from the demo shelter instead of an empty registry.
    #[arg(long = "seed", help = "Load the demo shelter before the first command")]
    pub seed: bool,

    /// Abort the session on the first failing command.
    #[arg(
        long = "stop-on-error",
        help = "Exit with the error's code on the first failing command"
    )]
    pub stop_on_error: bool,

    /// Read commands from a file instead of the terminal.
    #[arg(
        long = "script",
        value_name = "FILE",
        help = "Read commands from FILE, one per line"
    )]
    pub script: Option<PathBuf>,
}

// ── demo ──────────────────────────────────────────────────────────────────────

/// Arguments for `kennel demo`.
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Only print one kind of record.
    #[arg(value_enum, help = "Which records to print (default: all)")]
    pub section: Option<DemoSection>,
}

/// Record kinds printed by `kennel demo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoSection {
    Breeds,
    Dogs,
    Adopters,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `kennel init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write here instead of the platform config directory.
    #[arg(
        long = "path",
        value_name = "FILE",
        help = "Where to write the configuration file"
    )]
    pub path: Option<PathBuf>,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kennel completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kennel config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `shell.prompt`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
