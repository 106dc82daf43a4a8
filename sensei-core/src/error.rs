//! Error types for CodeSensei

use thiserror::Error;

/// Result type alias for CodeSensei operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for CodeSensei operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid review input (empty code or description)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Text generation error
    #[error(transparent)]
    Generate(#[from] crate::generator::GenerateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
