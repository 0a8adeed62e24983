//! Where session lines come from: a script file, piped stdin, or a prompt.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::Path;

use tracing::debug;

use crate::error::{CliError, CliResult, IntoCli};

pub enum LineSource {
    Reader(Box<dyn BufRead>),
    #[cfg(feature = "interactive")]
    Prompt {
        prompt: String,
        history: dialoguer::BasicHistory,
    },
}

impl LineSource {
    /// A script file if given, else stdin: read line by line when piped,
    /// through an interactive prompt on a terminal.
    pub fn open(script: Option<&Path>, prompt: &str) -> CliResult<Self> {
        if let Some(path) = script {
            debug!(path = %path.display(), "Reading commands from script");
            let file = File::open(path)
                .with_cli_context(|| format!("Failed to open script '{}'", path.display()))?;
            return Ok(Self::Reader(Box::new(BufReader::new(file))));
        }

        if !io::stdin().is_terminal() {
            debug!("Reading commands from stdin");
            return Ok(Self::Reader(Box::new(io::stdin().lock())));
        }

        Self::prompt(prompt)
    }

    #[cfg(feature = "interactive")]
    fn prompt(prompt: &str) -> CliResult<Self> {
        Ok(Self::Prompt {
            prompt: prompt.to_owned(),
            history: dialoguer::BasicHistory::new().max_entries(100).no_duplicates(true),
        })
    }

    #[cfg(not(feature = "interactive"))]
    fn prompt(_prompt: &str) -> CliResult<Self> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }

    /// The next line without its line terminator, or `None` at end of input.
    pub fn next_line(&mut self) -> CliResult<Option<String>> {
        match self {
            Self::Reader(reader) => {
                let mut line = String::new();
                let read = reader
                    .read_line(&mut line)
                    .with_cli_context(|| "Failed to read command")?;
                if read == 0 {
                    return Ok(None);
                }
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Ok(Some(line))
            }
            #[cfg(feature = "interactive")]
            Self::Prompt { prompt, history } => {
                let answer = dialoguer::Input::<String>::new()
                    .with_prompt(prompt.as_str())
                    .allow_empty(true)
                    .history_with(history)
                    .interact_text();
                match answer {
                    Ok(line) => Ok(Some(line)),
                    Err(err) => {
                        let err: io::Error = err.into();
                        match err.kind() {
                            io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => {
                                Err(CliError::Interrupted)
                            }
                            _ => Err(CliError::from(err)),
                        }
                    }
                }
            }
        }
    }
}
