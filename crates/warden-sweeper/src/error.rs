//! Error types for Sweeper operations

use thiserror::Error;

/// Errors that can occur when setting up the Sweeper
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SweeperError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
