//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: filtered catalog listing
//! - show: one tool's descriptor
//! - run: headless open / supply / process / print

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dochub - a directory of document and image tools
#[derive(Parser, Debug)]
#[command(name = "dochub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tools, optionally filtered
    List {
        /// Category (pdf, image, text, utility)
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Quick-filter tag (image, pdf, doc, ppt, text)
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show a single tool
    Show {
        /// Tool id, e.g. pdf-to-word
        id: String,
    },

    /// Run a tool headless and print its result
    Run {
        /// Tool id, e.g. pdf-to-word
        id: String,

        /// File to upload (file tools)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Text input (text tools)
        #[arg(short, long)]
        text: Option<String>,

        /// Skip the simulated latency
        #[arg(long)]
        instant: bool,

        /// Print the result record as JSON
        #[arg(long)]
        json: bool,
    },
}
