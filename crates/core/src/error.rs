//! Error types for cargofit.

use thiserror::Error;

/// Result type alias for cargofit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during packing calculations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid item provided.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Invalid container provided.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
