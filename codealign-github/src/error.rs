//! Error types for GitHub operations

use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// GitHub API error
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// Authentication error
    #[error("GitHub authentication failed: {0}")]
    Auth(String),

    /// Repository not found
    #[error("GitHub repository {0} not found")]
    RepoNotFound(String),

    /// Traversal finished without collecting any analyzable file
    #[error("No supported files found in the repository")]
    NoSources,

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}
