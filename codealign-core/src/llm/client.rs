//! Chat-completion client
//!
//! A thin, non-streaming client for an OpenAI-compatible chat-completion
//! endpoint. Every completion is a single attempt; there is no retry or
//! response caching.

use std::time::Duration;

use tracing::debug;

use crate::llm::{ChatMessage, ChatRequest, ChatResponse};
use crate::{Error, LlmConfig, Result};

/// Client for the chat-completion API
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl ChatClient {
    /// Create a new chat client
    ///
    /// The API key is injected by the caller; the client holds no global
    /// state. Connect and request timeouts come from the configuration.
    pub fn new(config: &LlmConfig, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    /// The model identifier sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request a single completion for one user prompt
    ///
    /// Returns the assistant message text. Temperature is pinned to 0 so
    /// identical prompts produce stable scoring.
    pub async fn complete(&self, prompt: impl Into<String>) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: Some(self.max_tokens),
            temperature: Some(0.0),
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %request.model, "Requesting completion");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Model(format!(
                "Completion request failed: {} - {}",
                status, body
            )));
        }

        let completion: ChatResponse = response.json().await.map_err(Error::Http)?;

        completion
            .content()
            .map(str::to_string)
            .ok_or_else(|| Error::Model("Completion response contained no choices".to_string()))
    }
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> ChatClient {
        let config = LlmConfig {
            base_url: base_url.to_string(),
            connect_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(5),
            ..LlmConfig::default()
        };
        ChatClient::new(&config, "sk-test").unwrap()
    }

    #[tokio::test]
    async fn test_complete_happy_path() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/chat/completions"))
            .and(wiremock::matchers::header("authorization", "Bearer sk-test"))
            .respond_with(
                wiremock::ResponseTemplate::new(200).set_body_raw(
                    serde_json::json!({
                        "choices": [{
                            "index": 0,
                            "message": {"role": "assistant", "content": "forty-two"},
                            "finish_reason": "stop"
                        }]
                    })
                    .to_string(),
                    "application/json",
                ),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let content = client.complete("question").await.expect("completion");
        assert_eq!(content, "forty-two");
    }

    #[tokio::test]
    async fn test_complete_upstream_error() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/chat/completions"))
            .respond_with(wiremock::ResponseTemplate::new(401).set_body_string("bad key"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.complete("question").await.unwrap_err();
        assert!(err.to_string().contains("Completion request failed"));
    }

    #[tokio::test]
    async fn test_complete_empty_choices() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/chat/completions"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_raw(r#"{"choices": []}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.complete("question").await.unwrap_err();
        assert!(err.to_string().contains("no choices"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = test_client("http://localhost:1234/v1/");
        assert!(format!("{:?}", client).contains("http://localhost:1234/v1"));
    }
}
