//! Prompt templates for the analysis calls
//!
//! Templates are embedded markdown files using `{{VARIABLE}}` placeholders
//! that are rendered with per-request values.

/// Prompt asking the model to score code/requirement alignment
pub const ALIGNMENT_PROMPT: &str = include_str!("prompts/alignment.md");

/// Prompt asking the model to generate review questions
pub const QUESTIONS_PROMPT: &str = include_str!("prompts/questions.md");

/// Render a template by substituting `{{KEY}}` placeholders
///
/// Unknown placeholders are left untouched; values are inserted verbatim.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in vars {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}
