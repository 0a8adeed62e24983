//! Output management and formatting.
//!
//! Status lines (`success`, `info`, ...) go through the quiet filter; records
//! and listings are data and are always written, as JSON when requested.

use std::fmt::Display;
use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliError;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    verbose: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Flag, then config, then Human (TTY) or Plain (piped/redirected).
        let requested = match args.output_format {
            OutputFormat::Auto => config.output.format,
            explicit => explicit,
        };
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            verbose: args.verbose > 0,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Status lines ───────────────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet || self.is_json() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet || self.is_json() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet || self.is_json() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet || self.is_json() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet || self.is_json() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Data ───────────────────────────────────────────────────────────────

    /// One record: its `Display` form under a header, or a JSON object.
    pub fn record<T>(&self, title: &str, item: &T) -> io::Result<()>
    where
        T: Serialize + Display + ?Sized,
    {
        if !self.is_json() {
            self.title(title)?;
        }
        self.value(item)
    }

    /// A bare value with no header, for output meant to be piped.
    pub fn value<T>(&self, item: &T) -> io::Result<()>
    where
        T: Serialize + Display + ?Sized,
    {
        if self.is_json() {
            return self.json(item);
        }
        self.term.write_line(&item.to_string())
    }

    /// A listing: one line per item under a header, or a JSON array.
    pub fn records<T, F>(&self, title: &str, items: &[T], empty: &str, line: F) -> io::Result<()>
    where
        T: Serialize,
        F: Fn(&T) -> String,
    {
        if self.is_json() {
            return self.json(items);
        }
        if items.is_empty() {
            return self.term.write_line(empty);
        }
        self.title(title)?;
        for item in items {
            self.term.write_line(&format!("  {}", line(item)))?;
        }
        Ok(())
    }

    fn title(&self, title: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("── {title} ──")
        } else {
            format!("── {} ──", title.cyan().bold())
        };
        self.term.write_line(&line)
    }

    fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&rendered)
    }

    // ── Errors ─────────────────────────────────────────────────────────────

    /// Print an error with its suggestions to stderr.  Never suppressed.
    pub fn report(&self, err: &CliError) {
        let msg = if self.supports_color() && io::stderr().is_terminal() {
            err.format_colored(self.verbose)
        } else {
            err.format_plain(self.verbose)
        };
        eprint!("{msg}");
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
