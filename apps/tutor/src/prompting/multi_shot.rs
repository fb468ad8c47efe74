//! Multi-shot prompts: the top-ranked library examples for the query, assembled into
//! the subject's template.

use tracing::info;

use crate::errors::AppError;
use crate::library::{normalize_subject, ExampleLibrary};
use crate::models::example::Example;
use crate::models::prompt::{GeneratedPrompt, Technique};
use crate::prompting::{build_prompt, require_query};
use crate::selection::selector::{select_examples, SelectionConfig};

/// Renders examples as numbered blocks separated by a blank line.
pub fn format_examples(examples: &[Example]) -> String {
    examples
        .iter()
        .enumerate()
        .map(|(index, example)| {
            format!(
                "EXAMPLE {} - {}:\nStudent Query: \"{}\"\nStudent Level: {}\n\nResponse:\n{}",
                index + 1,
                example.concept,
                example.query,
                example.level,
                example.response
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Substitutes the rendered examples, query and level into `template`.
/// Each placeholder is replaced once, `{EXAMPLES}` first.
pub fn format_prompt_with_examples(
    template: &str,
    examples: &[Example],
    query: &str,
    level: &str,
) -> String {
    template
        .replacen("{EXAMPLES}", &format_examples(examples), 1)
        .replacen("{query}", query, 1)
        .replacen("{level}", level, 1)
}

pub fn generate_multi_shot(
    library: &ExampleLibrary,
    subject: &str,
    query: &str,
    level: &str,
    config: &SelectionConfig,
) -> Result<GeneratedPrompt, AppError> {
    let query = require_query(query)?;
    let subject_data = library.subject(subject)?;

    let selected: Vec<Example> = select_examples(&subject_data.examples, query, level, config)
        .into_iter()
        .map(|scored| scored.example)
        .collect();

    let prompt = format_prompt_with_examples(&subject_data.template, &selected, query, level);
    let selected_ids: Vec<String> = selected.iter().map(|e| e.id.clone()).collect();

    info!(
        subject = %normalize_subject(subject),
        examples = selected.len(),
        ids = ?selected_ids,
        "Multi-shot prompt generated"
    );

    Ok(build_prompt(
        prompt,
        normalize_subject(subject),
        query,
        level,
        Technique::MultiShot,
        selected_ids,
    ))
}
