//! stderr logging for the `kennel` binary.
//!
//! The registry and the shared wrapper log through `tracing`; this module
//! installs the one subscriber that prints those events. Records and
//! listings go to stdout through [`crate::output::OutputManager`], so a piped
//! `kennel shell` never mixes the two.
//!
//! | Flag      | `kennel*` targets | What shows up                          |
//! |-----------|-------------------|----------------------------------------|
//! | (none)    | warn              | lock poisoning, stop-on-error aborts   |
//! | `-v`      | info              | registrations, transitions, cascades   |
//! | `-vv`     | debug             | parsed shell commands, config loading  |
//! | `-vvv`    | trace             | everything                             |
//! | `--quiet` | error             | failures only                          |
//!
//! A `RUST_LOG` value replaces the whole table.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

const TARGETS: [&str; 3] = ["kennel", "kennel_core", "kennel_adapters"];

/// Install the stderr subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(derive_level(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// `kennel=<level>,kennel_core=<level>,...`; other crates stay silent.
fn directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_maps_to_levels() {
        let table = [(0, "warn"), (1, "info"), (2, "debug"), (3, "trace"), (9, "trace")];
        for (verbose, level) in table {
            assert_eq!(derive_level(&args_with(verbose, false)), level, "-v x{verbose}");
        }
    }

    #[test]
    fn quiet_wins() {
        assert_eq!(derive_level(&args_with(0, true)), "error");
        assert_eq!(derive_level(&args_with(3, true)), "error");
    }

    #[test]
    fn directives_cover_every_kennel_crate() {
        assert_eq!(
            directives("info"),
            "kennel=info,kennel_core=info,kennel_adapters=info"
        );
        assert!(EnvFilter::try_new(directives("debug")).is_ok());
    }
}
