//! Shared application state
//!
//! Built once at startup and shared read-only across request tasks; each
//! request otherwise owns its own working data.

use anyhow::Context;
use codealign_core::llm::ChatClient;
use codealign_core::{AlignmentAnalyzer, Config, QuestionGenerator, Secrets};
use codealign_github::GitHubOptions;

/// Read-only state shared by all request handlers
#[derive(Debug)]
pub struct AppState {
    /// GitHub connection options (token, API base, fetch ceiling)
    pub github: GitHubOptions,

    /// Alignment scoring component
    pub analyzer: AlignmentAnalyzer,

    /// Review-question generation component
    pub questions: QuestionGenerator,
}

impl AppState {
    /// Build the application state from configuration and secrets
    ///
    /// Fails fast when either upstream credential is missing, so a
    /// misconfigured server never starts accepting requests.
    pub fn new(config: &Config, secrets: &Secrets) -> anyhow::Result<Self> {
        let token = secrets.github_token().context(
            "GitHub token not configured. Set GITHUB_TOKEN or add it to secrets.toml",
        )?;

        let api_key = secrets.llm_api_key().context(
            "LLM API key not configured. Set OPENAI_API_KEY or add it to secrets.toml",
        )?;

        let github = GitHubOptions {
            token,
            api_base: config.github.api_base.clone(),
            max_source_bytes: config.github.max_source_bytes,
        };

        let chat = ChatClient::new(&config.llm, api_key)?;

        Ok(Self {
            github,
            analyzer: AlignmentAnalyzer::new(chat.clone()),
            questions: QuestionGenerator::new(chat),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codealign_core::secrets::{GitHubSecrets, LlmSecrets};

    fn secrets(token: Option<&str>, api_key: Option<&str>) -> Secrets {
        Secrets {
            github: GitHubSecrets {
                token: token.map(String::from),
            },
            llm: LlmSecrets {
                api_key: api_key.map(String::from),
            },
        }
    }

    #[test]
    fn test_state_requires_github_token() {
        // Credential lookup consults the environment first; skip when the
        // host environment provides one
        if std::env::var("GITHUB_TOKEN").is_ok() {
            return;
        }

        let result = AppState::new(&Config::default(), &secrets(None, Some("sk-test")));
        assert!(result.unwrap_err().to_string().contains("GitHub token"));
    }

    #[test]
    fn test_state_requires_llm_api_key() {
        if std::env::var("OPENAI_API_KEY").is_ok() {
            return;
        }

        let result = AppState::new(&Config::default(), &secrets(Some("ghp_test"), None));
        assert!(result.unwrap_err().to_string().contains("LLM API key"));
    }

    #[test]
    fn test_state_builds_with_both_credentials() {
        let state = AppState::new(
            &Config::default(),
            &secrets(Some("ghp_test"), Some("sk-test")),
        )
        .unwrap();
        assert!(state.github.api_base.is_none());
    }
}
