//! HTTP API surface
//!
//! A single analysis route plus a liveness probe. Each request is handled
//! on its own task; the fetch and the two model calls within a request are
//! strictly sequential.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use codealign_core::{sanitize, ReviewQuestion};
use codealign_github::GitHubClient;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Build the API routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyse-github", post(analyse_github))
        .route("/health", get(health))
}

/// Inbound analysis request
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    /// The GitHub URL of the repository to analyze
    pub github_url: String,

    /// The project requirements
    pub curriculum: String,

    /// Number of questions to generate (1-20)
    pub question_count: u8,
}

/// Analysis response
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    /// Alignment score in 0-100
    pub alignment_score: i64,

    /// Narrative summary of the alignment
    pub alignment_summary: String,

    /// Generated review questions, each `{question, lookingFor}`
    pub questions_list: Vec<ReviewQuestion>,
}

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Analyze a GitHub repository against a project requirement
///
/// Fetches the repository's source, scores its alignment with the
/// requirement, and generates review questions. `question_count` is passed
/// to the model as guidance; the returned list length is best-effort, not
/// guaranteed to match.
async fn analyse_github(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalysisRequest>,
) -> AppResult<Json<AnalysisResponse>> {
    if !(1..=20).contains(&request.question_count) {
        return Err(AppError::Validation(format!(
            "question_count must be between 1 and 20, got {}",
            request.question_count
        )));
    }

    let github_url = sanitize::clean_input(&request.github_url);
    let curriculum = sanitize::clean_input(&request.curriculum);

    if github_url.is_empty() {
        return Err(AppError::Validation("github_url must not be empty".to_string()));
    }
    if curriculum.is_empty() {
        return Err(AppError::Validation("curriculum must not be empty".to_string()));
    }

    info!(%github_url, question_count = request.question_count, "Analyzing repository");

    let client = GitHubClient::from_url(&github_url, &state.github)?;
    let source = client.fetch_source().await?;

    let analysis = state.analyzer.analyze(&source, &curriculum).await?;
    let questions = state
        .questions
        .generate(&analysis.alignment_summary, &curriculum, request.question_count)
        .await?;

    Ok(Json(AnalysisResponse {
        alignment_score: analysis.alignment_score,
        alignment_summary: analysis.alignment_summary,
        questions_list: questions,
    }))
}
