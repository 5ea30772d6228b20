//! Error types for Codealign

use thiserror::Error;

/// Result type alias for Codealign operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Codealign operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model invocation or response-shape error
    #[error("Model error: {0}")]
    Model(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
