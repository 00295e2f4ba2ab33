//! Error types for the CLI application.

use helpdesk_router::config::ConfigError;
use helpdesk_router::supervisor::SupervisorError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The supervisor rejected the query
    #[error("Invalid query: {0}")]
    Query(#[from] SupervisorError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Nothing matched the lookup
    #[error("Not found: {0}")]
    NotFound(String),
}
