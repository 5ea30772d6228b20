//! GitHub API client using octocrab

use crate::{Error, Result};
use octocrab::Octocrab;
use tracing::info;

/// Connection options for [`GitHubClient`]
///
/// Built once at startup from configuration and secrets, then shared by
/// every request; the client itself holds no global state.
#[derive(Debug, Clone)]
pub struct GitHubOptions {
    /// Personal access token presented to the API
    pub token: String,

    /// Override for the API base URI (tests point this at a mock server)
    pub api_base: Option<String>,

    /// Ceiling on accumulated source bytes per fetch; unbounded when unset
    pub max_source_bytes: Option<usize>,
}

impl GitHubOptions {
    /// Options with the default API base and no source ceiling
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_base: None,
            max_source_bytes: None,
        }
    }
}

/// GitHub API client for repository source retrieval
pub struct GitHubClient {
    client: Octocrab,
    owner: String,
    repo: String,
    max_source_bytes: Option<usize>,
}

impl GitHubClient {
    /// Create a new GitHub client for the specified repository
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        options: &GitHubOptions,
    ) -> Result<Self> {
        let owner = owner.into();
        let repo = repo.into();

        let mut builder = Octocrab::builder().personal_token(options.token.clone());

        if let Some(ref api_base) = options.api_base {
            builder = builder
                .base_uri(api_base.as_str())
                .map_err(|e| Error::Other(format!("Invalid GitHub API base URI: {}", e)))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::Auth(format!("Failed to create GitHub client: {}", e)))?;

        info!(owner = %owner, repo = %repo, "Created GitHub client");

        Ok(Self {
            client,
            owner,
            repo,
            max_source_bytes: options.max_source_bytes,
        })
    }

    /// Create a GitHub client from a repository URL
    ///
    /// Supports formats:
    /// - owner/repo
    /// - https://github.com/owner/repo
    /// - git@github.com:owner/repo.git
    pub fn from_url(url: &str, options: &GitHubOptions) -> Result<Self> {
        let (owner, repo) = parse_github_url(url)?;
        Self::new(owner, repo, options)
    }

    /// Get the repository owner
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the repository name
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Get the underlying octocrab client
    pub fn client(&self) -> &Octocrab {
        &self.client
    }

    pub(crate) fn max_source_bytes(&self) -> Option<usize> {
        self.max_source_bytes
    }

    /// Translate an octocrab fault into this crate's error taxonomy
    pub(crate) fn map_api_error(&self, error: octocrab::Error) -> Error {
        match error {
            octocrab::Error::GitHub { source, backtrace } => {
                if source.message.contains("Bad credentials") {
                    Error::Auth("Invalid GitHub token".to_string())
                } else if source.message.contains("Not Found") {
                    Error::RepoNotFound(format!("{}/{}", self.owner, self.repo))
                } else {
                    Error::Api(octocrab::Error::GitHub { source, backtrace })
                }
            }
            other => Error::Api(other),
        }
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

/// Parse a GitHub URL into owner and repo
fn parse_github_url(url: &str) -> Result<(String, String)> {
    // Handle shorthand: owner/repo
    if !url.contains(':') && !url.contains('/') {
        return Err(Error::Parse(format!(
            "Invalid repository format: {}. Expected owner/repo",
            url
        )));
    }

    if !url.contains("://") && !url.contains('@') {
        // Simple owner/repo format
        let parts: Vec<&str> = url.split('/').collect();
        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            return Ok((
                parts[0].to_string(),
                parts[1].trim_end_matches(".git").to_string(),
            ));
        }
        return Err(Error::Parse(format!(
            "Invalid repository format: {}. Expected owner/repo",
            url
        )));
    }

    // Handle HTTPS URL: https://github.com/owner/repo
    if url.starts_with("https://") || url.starts_with("http://") {
        let url = url::Url::parse(url).map_err(|e| Error::Parse(e.to_string()))?;
        let path = url.path().trim_start_matches('/').trim_end_matches(".git");
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() >= 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            return Ok((parts[0].to_string(), parts[1].to_string()));
        }
        return Err(Error::Parse(format!("Invalid GitHub URL path: {}", path)));
    }

    // Handle SSH URL: git@github.com:owner/repo.git
    if url.starts_with("git@") {
        if let Some(path) = url.split(':').nth(1) {
            let path = path.trim_end_matches(".git");
            let parts: Vec<&str> = path.split('/').collect();
            if parts.len() >= 2 {
                return Ok((parts[0].to_string(), parts[1].to_string()));
            }
        }
        return Err(Error::Parse(format!("Invalid SSH URL: {}", url)));
    }

    Err(Error::Parse(format!("Unrecognized URL format: {}", url)))
}
