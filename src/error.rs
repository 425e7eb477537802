//! Error types for dochub
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in dochub
#[derive(Debug, Error)]
pub enum DocHubError {
    /// No tool with this id in the catalog
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Two catalog entries share an id
    #[error("Duplicate tool id: {0}")]
    DuplicateTool(String),

    /// Category name could not be parsed
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Quick-filter tag could not be parsed
    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    /// The process action is disabled for the current input
    #[error("Action unavailable: {0}")]
    InvalidAction(String),

    /// Transition not legal from the current phase
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// No tool is currently open
    #[error("No open session")]
    NoSession,

    /// Unexpected fault while a session was processing
    #[error("Processing fault: {0}")]
    ProcessingFault(String),

    /// Clipboard write failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Configuration or static data is inconsistent
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for dochub operations
pub type Result<T> = std::result::Result<T, DocHubError>;
