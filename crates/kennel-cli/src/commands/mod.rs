//! Command handlers, one module per top-level subcommand.

pub mod completions;
pub mod config;
pub mod demo;
pub mod init;
pub mod shell;
