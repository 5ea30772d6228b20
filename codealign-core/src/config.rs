//! Configuration management for Codealign
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (CODEALIGN_*)
//! 3. Config file (~/.config/codealign/config.toml)
//! 4. Default values
//!
//! Credentials are not part of the config; see [`crate::Secrets`].

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

/// GitHub fetch configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Override for the GitHub API base URI (used to point tests at a mock)
    pub api_base: Option<String>,

    /// Ceiling on accumulated source bytes per fetch; unbounded when unset
    pub max_source_bytes: Option<usize>,
}

/// LLM completion configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the chat-completion API
    pub base_url: String,

    /// Model identifier sent with every completion request
    pub model: String,

    /// Token budget per completion
    pub max_tokens: u32,

    /// TCP connect timeout
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// End-to-end request timeout
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 4096,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(300),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// GitHub fetch configuration
    pub github: GitHubConfig,

    /// LLM completion configuration
    pub llm: LlmConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/codealign/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("codealign").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - CODEALIGN_LISTEN_ADDR: HTTP bind address
    /// - CODEALIGN_LLM_BASE_URL: chat-completion API base URL
    /// - CODEALIGN_LLM_MODEL: model identifier
    /// - CODEALIGN_GITHUB_API_BASE: GitHub API base URI
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(addr) = std::env::var("CODEALIGN_LISTEN_ADDR") {
            self.server.listen_addr = addr;
        }

        if let Ok(base_url) = std::env::var("CODEALIGN_LLM_BASE_URL") {
            self.llm.base_url = base_url;
        }

        if let Ok(model) = std::env::var("CODEALIGN_LLM_MODEL") {
            self.llm.model = model;
        }

        if let Ok(api_base) = std::env::var("CODEALIGN_GITHUB_API_BASE") {
            self.github.api_base = Some(api_base);
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, listen_addr: Option<String>) -> Self {
        if let Some(addr) = listen_addr {
            self.server.listen_addr = addr;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        config_path: Option<&PathBuf>,
        listen_addr: Option<String>,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load()?,
        };

        Ok(config.with_env_overrides().with_cli_overrides(listen_addr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
        assert!(config.github.api_base.is_none());
        assert!(config.github.max_source_bytes.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(Some("0.0.0.0:9090".to_string()));

        assert_eq!(config.server.listen_addr, "0.0.0.0:9090");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[server]
listen_addr = "0.0.0.0:3000"

[llm]
model = "gpt-4o"
request_timeout = "2m"

[github]
max_source_bytes = 500000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.request_timeout, Duration::from_secs(120));
        assert_eq!(config.github.max_source_bytes, Some(500000));
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[llm]
model = "gpt-4o"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // Unset sections and fields should use defaults
        assert_eq!(config.server.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.max_tokens, 4096);
    }
}
