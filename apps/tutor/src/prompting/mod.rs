// Prompt assembly for the zero-shot, one-shot, multi-shot and chain-of-thought techniques.
// Only multi-shot consults the example library; the others use fixed templates.

pub mod chain_of_thought;
pub mod multi_shot;
pub mod one_shot;
pub mod prompts;
pub mod validation;
pub mod zero_shot;

use chrono::Utc;

use crate::errors::AppError;
use crate::models::prompt::{estimate_token_count, GeneratedPrompt, PromptMetadata, Technique};
use crate::state::AppState;

/// Builds a prompt with the requested technique. A missing or blank level falls
/// back to the configured default.
pub fn generate_prompt(
    state: &AppState,
    technique: Technique,
    subject: &str,
    query: &str,
    level: Option<&str>,
) -> Result<GeneratedPrompt, AppError> {
    let level = state.config.resolve_level(level);
    match technique {
        Technique::ZeroShot => zero_shot::generate_zero_shot(subject, query, &level),
        Technique::OneShot => one_shot::generate_one_shot(subject, query, &level),
        Technique::MultiShot => multi_shot::generate_multi_shot(
            &state.library,
            subject,
            query,
            &level,
            &state.config.selection,
        ),
        Technique::ChainOfThought => chain_of_thought::generate_chain_of_thought(
            subject,
            query,
            &level,
            state.config.selection.weights.default_grade,
        ),
    }
}

/// Returns the trimmed query, or `InvalidQuery` when there is nothing to score.
pub(crate) fn require_query(query: &str) -> Result<&str, AppError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidQuery("query must not be empty".to_string()));
    }
    Ok(trimmed)
}

pub(crate) fn build_prompt(
    prompt: String,
    subject: String,
    query: &str,
    level: &str,
    technique: Technique,
    selected_example_ids: Vec<String>,
) -> GeneratedPrompt {
    let token_estimate = estimate_token_count(&prompt);
    GeneratedPrompt {
        prompt,
        metadata: PromptMetadata {
            subject,
            query: query.to_string(),
            level: level.to_string(),
            technique,
            examples_used: selected_example_ids.len(),
            selected_example_ids,
            token_estimate,
            generated_at: Utc::now(),
            reasoning: None,
        },
    }
}
