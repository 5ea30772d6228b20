//! Codealign Core - Core library for the Codealign alignment service
//!
//! This crate provides configuration and secrets handling, input
//! sanitization, and the LLM-backed alignment analysis used by the
//! Codealign HTTP server.

pub mod analysis;
pub mod config;
pub mod error;
pub mod llm;
pub mod sanitize;
pub mod secrets;

pub use analysis::{AlignmentAnalyzer, AlignmentResult, QuestionGenerator, ReviewQuestion};
pub use config::{Config, GitHubConfig, LlmConfig, ServerConfig};
pub use error::{Error, Result};
pub use secrets::Secrets;
