//! Zero-shot prompts: subject instructions plus the student's request, no examples.

use tracing::info;

use crate::errors::AppError;
use crate::library::normalize_subject;
use crate::models::prompt::{GeneratedPrompt, Technique};
use crate::prompting::prompts::{ZERO_SHOT_PROMPT_TEMPLATE, ZERO_SHOT_SUBJECTS};
use crate::prompting::{build_prompt, require_query};

/// Instructions and token target for a normalized subject key.
fn zero_shot_subject(subject: &str) -> Option<(&'static str, u32)> {
    ZERO_SHOT_SUBJECTS
        .iter()
        .find(|(name, _, _)| *name == subject)
        .map(|(_, instructions, target)| (*instructions, *target))
}

pub fn generate_zero_shot(
    subject: &str,
    query: &str,
    level: &str,
) -> Result<GeneratedPrompt, AppError> {
    let query = require_query(query)?;
    let normalized = normalize_subject(subject);
    let (instructions, token_target) = zero_shot_subject(&normalized)
        .ok_or_else(|| AppError::SubjectNotFound(subject.to_string()))?;

    let prompt = ZERO_SHOT_PROMPT_TEMPLATE
        .replacen("{instructions}", instructions, 1)
        .replacen("{query}", query, 1)
        .replacen("{level}", level, 1)
        .replacen("{token_target}", &token_target.to_string(), 1);

    info!(subject = %normalized, "Zero-shot prompt generated");

    Ok(build_prompt(
        prompt,
        normalized,
        query,
        level,
        Technique::ZeroShot,
        Vec::new(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_query_level_and_target() {
        let generated = generate_zero_shot("Mathematics", "Solve x² - 6x + 8 = 0", "High School Algebra II")
            .unwrap();
        assert!(generated.prompt.starts_with("You are an expert mathematics tutor."));
        assert!(generated.prompt.contains("Student Query: \"Solve x² - 6x + 8 = 0\""));
        assert!(generated.prompt.contains("Student Level: High School Algebra II"));
        assert!(generated.prompt.contains("Token Target: 300"));
        assert_eq!(generated.metadata.subject, "mathematics");
        assert_eq!(generated.metadata.examples_used, 0);
    }

    #[test]
    fn test_unknown_subject_does_not_fall_back() {
        let err = generate_zero_shot("astronomy", "What is a nebula?", "8th Grade").unwrap_err();
        assert!(matches!(err, AppError::SubjectNotFound(_)));
    }

    #[test]
    fn test_blank_query_rejected() {
        let err = generate_zero_shot("science", "  ", "8th Grade").unwrap_err();
        assert_eq!(err.code(), "INVALID_QUERY");
    }

    #[test]
    fn test_token_target_per_subject() {
        let science = generate_zero_shot("science", "What is inertia?", "9th Grade").unwrap();
        assert!(science.prompt.ends_with("Token Target: 250"));
        let literature = generate_zero_shot("Literature", "What is irony?", "9th Grade").unwrap();
        assert!(literature.prompt.ends_with("Token Target: 275"));
    }

    #[test]
    fn test_subject_without_instructions_rejected() {
        assert!(matches!(
            generate_zero_shot("history", "Who was Napoleon?", "9th Grade"),
            Err(AppError::SubjectNotFound(_))
        ));
    }
}
