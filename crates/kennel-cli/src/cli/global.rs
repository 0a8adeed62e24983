//! Flags shared by `kennel shell`, `kennel demo` and the config commands.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `kennel shell -vv`
//! and `kennel -vv shell` mean the same thing.

use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level for the kennel crates: warn, then info, debug, trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more on stderr (-v, -vv, -vvv)",
        long_help = "Log more on stderr:
    (none)  - warnings and errors only
    -v      - registrations, reservations, adoptions, returns, removals
    -vv     - every parsed shell command and config loading
    -vvv    - everything"
    )]
    pub verbose: u8,

    /// Drop status lines (`✓ Pichichus (#1) reserved by Ana`); records,
    /// listings and errors still print.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print records and errors"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Print without ANSI colours"
    )]
    pub no_color: bool,

    /// Must exist when given; the platform default is optional.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    /// `auto` takes `output.format` from the config, then picks `human` on a
    /// terminal and `plain` when piped.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How records and listings are printed"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of records and listings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Coloured, aligned columns.
    Human,
    /// Aligned columns, no colour.
    Plain,
    /// One pretty-printed JSON value per record or listing.
    Json,
}
