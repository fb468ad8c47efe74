//! One-shot prompts: one fixed worked example per subject, then the student's request.

use tracing::info;

use crate::errors::AppError;
use crate::library::normalize_subject;
use crate::models::prompt::{GeneratedPrompt, Technique};
use crate::prompting::prompts::{
    LITERATURE_ONE_SHOT_TEMPLATE, MATHEMATICS_ONE_SHOT_TEMPLATE, SCIENCE_ONE_SHOT_TEMPLATE,
};
use crate::prompting::{build_prompt, require_query};

fn template_for(subject: &str) -> Option<&'static str> {
    match subject {
        "mathematics" => Some(MATHEMATICS_ONE_SHOT_TEMPLATE),
        "science" => Some(SCIENCE_ONE_SHOT_TEMPLATE),
        "literature" => Some(LITERATURE_ONE_SHOT_TEMPLATE),
        _ => None,
    }
}

pub fn generate_one_shot(
    subject: &str,
    query: &str,
    level: &str,
) -> Result<GeneratedPrompt, AppError> {
    let query = require_query(query)?;
    let normalized = normalize_subject(subject);
    let template = template_for(&normalized)
        .ok_or_else(|| AppError::SubjectNotFound(subject.to_string()))?;

    let prompt = template
        .replacen("{query}", query, 1)
        .replacen("{level}", level, 1);

    info!(subject = %normalized, "One-shot prompt generated");

    let example_id = format!("{normalized}_one_shot");
    Ok(build_prompt(
        prompt,
        normalized,
        query,
        level,
        Technique::OneShot,
        vec![example_id],
    ))
}
