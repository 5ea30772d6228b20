//! Review-question generation

use tracing::{debug, info, warn};

use crate::analysis::{parse_reply, ReviewQuestion};
use crate::llm::{prompts, ChatClient};
use crate::Result;

/// Generates review questions from an alignment summary
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    client: ChatClient,
}

impl QuestionGenerator {
    /// Create a new generator over the given chat client
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    /// Generate review questions for a scored repository
    ///
    /// `count` is guidance passed to the model in prompt text, not a hard
    /// bound: the returned list is neither truncated nor padded to match it.
    pub async fn generate(
        &self,
        code_summary: &str,
        requirement: &str,
        count: u8,
    ) -> Result<Vec<ReviewQuestion>> {
        debug!(count, model = %self.client.model(), "Generating review questions");

        let count_text = count.to_string();
        let prompt = prompts::render(
            prompts::QUESTIONS_PROMPT,
            &[
                ("QUESTION_COUNT", count_text.as_str()),
                ("CODE_SUMMARY", code_summary),
                ("REQUIREMENT", requirement),
            ],
        );

        let reply = self.client.complete(prompt).await?;
        let questions: Vec<ReviewQuestion> = parse_reply(&reply, "a question array")?;

        if questions.len() != count as usize {
            warn!(
                requested = count,
                returned = questions.len(),
                "Model returned a different question count than requested"
            );
        }

        info!(count = questions.len(), "Generated review questions");

        Ok(questions)
    }
}
