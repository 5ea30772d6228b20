//! LLM access: chat-completion client and prompt templates

mod client;
pub mod prompts;
mod types;

pub use client::ChatClient;
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse};
