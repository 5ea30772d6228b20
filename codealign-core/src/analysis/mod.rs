//! Alignment analysis and review-question generation
//!
//! Both operations share the same shape: render a prompt template, make one
//! chat-completion call, parse the reply as strict JSON. Malformed model
//! output is a hard error; there is no repair or retry loop.

mod analyzer;
mod questions;
mod types;

pub use analyzer::AlignmentAnalyzer;
pub use questions::QuestionGenerator;
pub use types::{AlignmentResult, ReviewQuestion};

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Parse a model reply into the expected JSON shape
///
/// Tolerates a surrounding Markdown code fence (```json ... ```); anything
/// else that fails to parse is reported as a model error with context.
fn parse_reply<T: DeserializeOwned>(raw: &str, expected: &str) -> Result<T> {
    let payload = strip_code_fence(raw);

    serde_json::from_str(payload).map_err(|e| {
        Error::Model(format!(
            "Expected {} in model reply, got unparseable output: {}",
            expected, e
        ))
    })
}

/// Strip a surrounding Markdown code fence, if present
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_json() {
        let result: AlignmentResult =
            parse_reply(r#"{"alignmentScore": 75, "alignmentSummary": "ok"}"#, "object").unwrap();
        assert_eq!(result.alignment_score, 75);
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"alignmentScore\": 75, \"alignmentSummary\": \"ok\"}\n```";
        let result: AlignmentResult = parse_reply(raw, "object").unwrap();
        assert_eq!(result.alignment_score, 75);
    }

    #[test]
    fn test_parse_fence_without_language_tag() {
        let raw = "```\n[{\"question\": \"q\", \"lookingFor\": \"l\"}]\n```";
        let questions: Vec<ReviewQuestion> = parse_reply(raw, "array").unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_parse_non_json_is_model_error() {
        let result: Result<AlignmentResult> = parse_reply("The score is 80 out of 100.", "object");
        let err = result.unwrap_err();
        assert!(matches!(err, Error::Model(_)));
        assert!(err.to_string().contains("unparseable"));
    }

    #[test]
    fn test_parse_wrong_shape_is_model_error() {
        // Valid JSON, wrong shape
        let result: Result<AlignmentResult> = parse_reply(r#"{"score": 80}"#, "object");
        assert!(matches!(result.unwrap_err(), Error::Model(_)));
    }
}
