//! Transport-facing error type
//!
//! Maps the library error taxonomies onto HTTP statuses. Failure bodies are
//! `{"detail": "<cause>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Upstream hosting-service credential rejected
    #[error("{0}")]
    Auth(String),

    /// Repository missing, or nothing in it to analyze
    #[error("{0}")]
    NotFound(String),

    /// Invalid request input, rejected before any upstream call
    #[error("{0}")]
    Validation(String),

    /// Any other failure, with the original message attached
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failure response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable cause
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for request handlers
pub type AppResult<T> = Result<T, AppError>;

impl From<codealign_github::Error> for AppError {
    fn from(error: codealign_github::Error) -> Self {
        use codealign_github::Error as GitHub;

        match &error {
            GitHub::Auth(_) => Self::Auth(error.to_string()),
            GitHub::RepoNotFound(_) | GitHub::NoSources => Self::NotFound(error.to_string()),
            GitHub::Parse(_) => Self::Validation(error.to_string()),
            GitHub::Api(_) | GitHub::Other(_) => Self::Internal(error.to_string()),
        }
    }
}

impl From<codealign_core::Error> for AppError {
    fn from(error: codealign_core::Error) -> Self {
        Self::Internal(error.to_string())
    }
}
