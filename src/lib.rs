//! dochub - a directory of document and image tools
//!
//! A fixed catalog of tools, a category/tag filter over it, and a per-tool
//! interaction state machine (input, processing, result) whose processing
//! step is simulated with a configurable latency.

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod session;
pub mod tui;

pub use error::{DocHubError, Result};
