//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] warden_server::config::ConfigError),

    /// Application wiring error
    #[error("Setup error: {0}")]
    Setup(#[from] warden_server::ServerError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Line editor error
    #[error("Editor error: {0}")]
    Editor(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
