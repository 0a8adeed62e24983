//! `kennel shell`: a line-oriented session over one in-memory registry.
//!
//! Every line is split into words, parsed with the [`crate::cli::ShellLine`]
//! grammar and run against a [`SharedRegistry`].  A failing line is
//! reported and the session goes on, unless `--stop-on-error` is set.

use tracing::{info, instrument, warn};

use kennel_adapters::{SharedRegistry, demo_shelter};
use kennel_core::application::AdoptionRegistry;

use crate::{
    cli::ShellArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

mod input;
mod session;
mod words;

pub use input::LineSource;
pub use session::{Flow, Session};
pub(crate) use session::{adopter_line, breed_line, dog_line};
pub use words::split_words;

/// Run a session until `exit` or end of input.
#[instrument(skip_all, fields(script = ?args.script))]
pub fn execute(args: ShellArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let seed = args.seed || config.shell.seed_demo_data;
    let stop_on_error = args.stop_on_error || config.shell.stop_on_error;

    let registry = if seed {
        demo_shelter()?
    } else {
        AdoptionRegistry::new()
    };
    let session = Session::new(SharedRegistry::new(registry), &output);
    let mut input = LineSource::open(args.script.as_deref(), &config.shell.prompt)?;

    if matches!(input, LineSource::Reader(_)) {
        info!(seed, stop_on_error, "Running scripted session");
    } else {
        output.info("Type 'help' for commands, 'exit' to leave.")?;
    }

    let mut line_no = 0usize;
    let mut failures = 0usize;
    loop {
        let line = match input.next_line() {
            Ok(Some(line)) => line,
            Ok(None) | Err(CliError::Interrupted) => break,
            Err(e) => return Err(e),
        };
        line_no += 1;

        let outcome = split_words(&line).and_then(|words| {
            if words.is_empty() {
                Ok(Flow::Continue)
            } else {
                session.run(&words)
            }
        });

        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) if stop_on_error => {
                warn!(line = line_no, "Stopping at first failing command");
                return Err(err);
            }
            Err(err) => {
                failures += 1;
                err.log();
                output.report(&err);
            }
        }
    }

    info!(lines = line_no, failures, "Session ended");
    Ok(())
}
