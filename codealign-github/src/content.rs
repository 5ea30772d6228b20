//! Repository source retrieval
//!
//! Walks the repository tree through the contents API with an explicit work
//! queue, prunes deny-listed directories before descending, and concatenates
//! every qualifying file into one annotated text blob. Files are fetched one
//! at a time in traversal order.

use std::collections::VecDeque;
use std::fmt::Write as _;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use octocrab::models::repos::{Content, ContentItems};
use tracing::{debug, info, warn};

use crate::{filter, Error, GitHubClient, Result};

impl GitHubClient {
    /// Fetch and concatenate all analyzable source files in the repository
    ///
    /// Each collected file contributes a `// File: <path>` marker followed by
    /// its decoded text. Files that fail base64 or UTF-8 decoding are logged
    /// and skipped; the traversal itself continues. A traversal that finishes
    /// without collecting anything is an [`Error::NoSources`].
    pub async fn fetch_source(&self) -> Result<String> {
        let mut queue: VecDeque<String> = VecDeque::from([String::new()]);
        let mut source = String::new();
        let mut files_collected = 0usize;

        'traversal: while let Some(dir) = queue.pop_front() {
            let listing = self.list_path(&dir).await?;

            for entry in listing.items {
                match entry.r#type.as_str() {
                    "dir" => {
                        if filter::has_skipped_folder(&entry.path) {
                            debug!(path = %entry.path, "Pruned directory");
                        } else {
                            queue.push_back(entry.path);
                        }
                    }
                    "file" => {
                        if !filter::should_analyze(&entry.path) {
                            continue;
                        }

                        if let Some(limit) = self.max_source_bytes() {
                            if source.len() >= limit {
                                warn!(
                                    limit,
                                    collected = files_collected,
                                    "Source ceiling reached, skipping remaining files"
                                );
                                break 'traversal;
                            }
                        }

                        let file = self.fetch_file(&entry.path).await?;
                        match decode_content(&file) {
                            Ok(text) => {
                                // Marker format is part of the prompt contract
                                let _ = write!(source, "// File: {}\n{}\n\n", entry.path, text);
                                files_collected += 1;
                            }
                            Err(reason) => {
                                warn!(path = %entry.path, %reason, "Skipping undecodable file");
                            }
                        }
                    }
                    // Symlinks and submodules are not source files
                    _ => {}
                }
            }
        }

        if source.is_empty() {
            return Err(Error::NoSources);
        }

        info!(
            files = files_collected,
            bytes = source.len(),
            "Fetched repository source"
        );

        Ok(source)
    }

    /// List one repository path through the contents API
    async fn list_path(&self, path: &str) -> Result<ContentItems> {
        debug!(path = %path, "Listing repository path");

        self.client()
            .repos(self.owner(), self.repo())
            .get_content()
            .path(path)
            .send()
            .await
            .map_err(|e| self.map_api_error(e))
    }

    /// Fetch a single file's content record
    async fn fetch_file(&self, path: &str) -> Result<Content> {
        let mut contents = self.list_path(path).await?;

        contents
            .items
            .pop()
            .ok_or_else(|| Error::Other(format!("Empty contents response for file {}", path)))
    }
}

/// Decode a file record's base64 payload into UTF-8 text
///
/// The API wraps base64 in newlines; whitespace is stripped before decoding.
fn decode_content(file: &Content) -> std::result::Result<String, String> {
    let encoded = file
        .content
        .as_deref()
        .ok_or("content missing from response")?;

    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| format!("invalid base64: {}", e))?;

    String::from_utf8(bytes).map_err(|e| format!("not valid UTF-8: {}", e))
}
