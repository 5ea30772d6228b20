//! Code/requirement alignment scoring

use tracing::{debug, info};

use crate::analysis::{parse_reply, AlignmentResult};
use crate::llm::{prompts, ChatClient};
use crate::Result;

/// Scores how well fetched source code satisfies a requirement
#[derive(Debug, Clone)]
pub struct AlignmentAnalyzer {
    client: ChatClient,
}

impl AlignmentAnalyzer {
    /// Create a new analyzer over the given chat client
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    /// Score the alignment between source code and a requirement
    ///
    /// Both inputs are embedded verbatim in a single prompt; the model reply
    /// must be a JSON object with `alignmentScore` and `alignmentSummary`.
    /// Identical inputs re-invoke the model every call; nothing is cached.
    pub async fn analyze(&self, code: &str, requirement: &str) -> Result<AlignmentResult> {
        debug!(
            code_bytes = code.len(),
            model = %self.client.model(),
            "Scoring alignment"
        );

        let prompt = prompts::render(
            prompts::ALIGNMENT_PROMPT,
            &[("CODE", code), ("REQUIREMENT", requirement)],
        );

        let reply = self.client.complete(prompt).await?;
        let result: AlignmentResult = parse_reply(&reply, "an alignment object")?;

        info!(score = result.alignment_score, "Alignment scored");

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LlmConfig;
    use std::time::Duration;

    fn analyzer(base_url: &str) -> AlignmentAnalyzer {
        let config = LlmConfig {
            base_url: base_url.to_string(),
            connect_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(5),
            ..LlmConfig::default()
        };
        AlignmentAnalyzer::new(ChatClient::new(&config, "sk-test").unwrap())
    }

    fn completion_body(content: &str) -> String {
        serde_json::json!({
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_analyze_parses_score_and_summary() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/chat/completions"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_raw(
                completion_body(r#"{"alignmentScore": 80, "alignmentSummary": "solid"}"#),
                "application/json",
            ))
            .mount(&server)
            .await;

        let result = analyzer(&server.uri())
            .analyze("// File: a.py\nprint(1)\n", "print a number")
            .await
            .expect("analysis");
        assert_eq!(result.alignment_score, 80);
        assert_eq!(result.alignment_summary, "solid");
    }

    #[tokio::test]
    async fn test_analyze_rejects_prose_reply() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/chat/completions"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_raw(
                completion_body("I would rate this code 80 out of 100."),
                "application/json",
            ))
            .mount(&server)
            .await;

        let err = analyzer(&server.uri())
            .analyze("code", "requirement")
            .await
            .unwrap_err();
        assert!(matches!(err, crate::Error::Model(_)));
    }
}
