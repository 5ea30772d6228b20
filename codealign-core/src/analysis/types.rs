//! Analysis result types
//!
//! Field renames pin the exact wire keys the model is instructed to emit
//! (`alignmentScore`, `alignmentSummary`, `lookingFor`); external consumers
//! depend on `lookingFor` surviving re-serialization unchanged.

use serde::{Deserialize, Serialize};

/// Outcome of the alignment scoring call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentResult {
    /// Alignment score in 0-100 (model output, not re-clamped)
    #[serde(rename = "alignmentScore")]
    pub alignment_score: i64,

    /// Narrative summary of the alignment
    #[serde(rename = "alignmentSummary")]
    pub alignment_summary: String,
}

/// One generated review question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewQuestion {
    /// The question text
    pub question: String,

    /// What the reviewer should check in the answer
    #[serde(rename = "lookingFor")]
    pub looking_for: String,
}
