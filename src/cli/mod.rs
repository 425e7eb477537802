//! CLI module for dochub - command-line interface and subcommands.
//!
//! With no subcommand the TUI is launched; `list`, `show` and `run` work
//! headless against the same catalog and session controller.

pub mod commands;

pub use commands::Cli;
