//! Example library: an immutable, subject-keyed collection of demonstration examples.
//!
//! Built once at startup (built-in catalog or a JSON file) and shared read-only.
//! Construction goes through `ExampleLibraryBuilder`, which enforces that every
//! subject has at least one example, unique example ids, and a template carrying
//! all placeholders.

pub mod builtin;
pub mod loader;

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::errors::AppError;
use crate::models::example::{Example, SubjectLibrary, SubjectSummary};

/// Placeholders every multi-shot template must carry.
pub const TEMPLATE_PLACEHOLDERS: [&str; 3] = ["{EXAMPLES}", "{query}", "{level}"];

#[derive(Debug, Clone)]
pub struct ExampleLibrary {
    subjects: BTreeMap<String, SubjectLibrary>,
}

impl ExampleLibrary {
    pub fn builder() -> ExampleLibraryBuilder {
        ExampleLibraryBuilder::default()
    }

    /// Case-insensitive subject lookup.
    pub fn subject(&self, subject: &str) -> Result<&SubjectLibrary, AppError> {
        self.subjects
            .get(&normalize_subject(subject))
            .ok_or_else(|| AppError::SubjectNotFound(subject.to_string()))
    }

    /// All examples for a subject. Never empty on success.
    pub fn examples_for_subject(&self, subject: &str) -> Result<&[Example], AppError> {
        self.subject(subject).map(|s| s.examples.as_slice())
    }

    /// Subjects in key order with counts and the distinct difficulties and levels
    /// they cover (first-seen order).
    pub fn subjects(&self) -> Vec<SubjectSummary> {
        self.subjects
            .iter()
            .map(|(name, data)| {
                let mut difficulty_levels = Vec::new();
                let mut grade_levels: Vec<String> = Vec::new();
                for example in &data.examples {
                    if !difficulty_levels.contains(&example.difficulty) {
                        difficulty_levels.push(example.difficulty);
                    }
                    if !grade_levels.contains(&example.level) {
                        grade_levels.push(example.level.clone());
                    }
                }
                SubjectSummary {
                    subject: name.clone(),
                    example_count: data.examples.len(),
                    difficulty_levels,
                    grade_levels,
                }
            })
            .collect()
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn total_examples(&self) -> usize {
        self.subjects.values().map(|s| s.examples.len()).sum()
    }
}

/// Accumulates subjects and examples, then validates them into an `ExampleLibrary`.
#[derive(Debug, Default)]
pub struct ExampleLibraryBuilder {
    subjects: BTreeMap<String, SubjectLibrary>,
    registered: BTreeSet<String>,
    duplicate_subjects: Vec<String>,
}

impl ExampleLibraryBuilder {
    /// Registers a subject with its template. Names are compared after
    /// normalization, so registering "History" and "history" fails at `build()`.
    pub fn subject(mut self, name: &str, template: impl Into<String>) -> Self {
        let key = normalize_subject(name);
        if !self.registered.insert(key.clone()) {
            self.duplicate_subjects.push(name.to_string());
            return self;
        }
        let template = template.into();
        self.subjects
            .entry(key)
            .and_modify(|s| s.template = template.clone())
            .or_insert_with(|| SubjectLibrary {
                examples: Vec::new(),
                template,
            });
        self
    }

    /// Appends an example to a subject, registering the subject with an empty
    /// template if needed. An empty id becomes `<subject>_<position>`.
    pub fn example(mut self, subject: &str, mut example: Example) -> Self {
        let key = normalize_subject(subject);
        let entry = self.subjects.entry(key.clone()).or_insert_with(|| SubjectLibrary {
            examples: Vec::new(),
            template: String::new(),
        });
        if example.id.trim().is_empty() {
            example.id = format!("{}_{}", key, entry.examples.len() + 1);
        }
        entry.examples.push(example);
        self
    }

    pub fn build(self) -> Result<ExampleLibrary, AppError> {
        if let Some(name) = self.duplicate_subjects.first() {
            return Err(AppError::InvalidLibrary(format!("duplicate subject '{name}'")));
        }
        if self.subjects.is_empty() {
            return Err(AppError::InvalidLibrary("library has no subjects".to_string()));
        }

        for (name, data) in &self.subjects {
            if name.is_empty() {
                return Err(AppError::InvalidLibrary("subject name is empty".to_string()));
            }
            if data.examples.is_empty() {
                return Err(AppError::InvalidLibrary(format!(
                    "subject '{name}' has no examples"
                )));
            }
            if let Some(missing) = TEMPLATE_PLACEHOLDERS
                .iter()
                .find(|p| !data.template.contains(*p))
            {
                return Err(AppError::InvalidLibrary(format!(
                    "template for '{name}' is missing {missing}"
                )));
            }
            let mut seen: Vec<&str> = Vec::with_capacity(data.examples.len());
            for example in &data.examples {
                if seen.contains(&example.id.as_str()) {
                    return Err(AppError::InvalidLibrary(format!(
                        "duplicate example id '{}' in subject '{name}'",
                        example.id
                    )));
                }
                seen.push(&example.id);
            }
        }

        let library = ExampleLibrary {
            subjects: self.subjects,
        };
        debug!(
            subjects = library.subject_count(),
            examples = library.total_examples(),
            "Example library built"
        );
        Ok(library)
    }
}

pub fn normalize_subject(subject: &str) -> String {
    subject.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::example::Difficulty;

    const TEMPLATE: &str = "Examples:\n{EXAMPLES}\nQuery: {query}\nLevel: {level}";

    fn make_example(id: &str, difficulty: Difficulty, level: &str) -> Example {
        Example {
            id: id.to_string(),
            difficulty,
            level: level.to_string(),
            query: "What is a noun?".to_string(),
            concept: "Parts of speech".to_string(),
            approach: "definition".to_string(),
            response: "A noun names a thing.".to_string(),
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let library = ExampleLibrary::builder()
            .subject("Grammar", TEMPLATE)
            .example("grammar", make_example("g1", Difficulty::Basic, "5th Grade"))
            .build()
            .unwrap();
        assert_eq!(library.examples_for_subject("GRAMMAR").unwrap().len(), 1);
        assert_eq!(library.examples_for_subject("  grammar ").unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_subject_is_subject_not_found() {
        let library = ExampleLibrary::builder()
            .subject("grammar", TEMPLATE)
            .example("grammar", make_example("g1", Difficulty::Basic, "5th Grade"))
            .build()
            .unwrap();
        let err = library.examples_for_subject("history").unwrap_err();
        assert!(matches!(err, AppError::SubjectNotFound(ref s) if s == "history"));
    }

    #[test]
    fn test_subject_without_examples_rejected() {
        let err = ExampleLibrary::builder()
            .subject("grammar", TEMPLATE)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("has no examples"));
    }

    #[test]
    fn test_empty_library_rejected() {
        assert!(ExampleLibrary::builder().build().is_err());
    }

    #[test]
    fn test_template_missing_placeholder_rejected() {
        let err = ExampleLibrary::builder()
            .subject("grammar", "no placeholders here {query}")
            .example("grammar", make_example("g1", Difficulty::Basic, "5th Grade"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("{EXAMPLES}"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = ExampleLibrary::builder()
            .subject("grammar", TEMPLATE)
            .example("grammar", make_example("dup", Difficulty::Basic, "5th Grade"))
            .example("grammar", make_example("dup", Difficulty::Advanced, "9th Grade"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("duplicate example id 'dup'"));
    }

    #[test]
    fn test_subject_registered_twice_rejected() {
        let err = ExampleLibrary::builder()
            .subject("grammar", TEMPLATE)
            .example("grammar", make_example("g1", Difficulty::Basic, "5th Grade"))
            .subject("Grammar ", TEMPLATE)
            .build()
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_LIBRARY");
        assert!(err.to_string().contains("duplicate subject 'Grammar '"));
    }

    #[test]
    fn test_template_may_follow_examples() {
        let library = ExampleLibrary::builder()
            .example("grammar", make_example("g1", Difficulty::Basic, "5th Grade"))
            .subject("grammar", TEMPLATE)
            .build()
            .unwrap();
        assert_eq!(library.subject("grammar").unwrap().template, TEMPLATE);
    }

    #[test]
    fn test_blank_id_is_assigned_from_position() {
        let library = ExampleLibrary::builder()
            .subject("grammar", TEMPLATE)
            .example("grammar", make_example("g1", Difficulty::Basic, "5th Grade"))
            .example("grammar", make_example("", Difficulty::Basic, "6th Grade"))
            .build()
            .unwrap();
        let examples = library.examples_for_subject("grammar").unwrap();
        assert_eq!(examples[1].id, "grammar_2");
    }

    #[test]
    fn test_subject_summaries_dedupe_levels() {
        let library = ExampleLibrary::builder()
            .subject("grammar", TEMPLATE)
            .example("grammar", make_example("g1", Difficulty::Basic, "5th Grade"))
            .example("grammar", make_example("g2", Difficulty::Basic, "5th Grade"))
            .example("grammar", make_example("g3", Difficulty::Advanced, "9th Grade"))
            .build()
            .unwrap();
        let summaries = library.subjects();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].example_count, 3);
        assert_eq!(
            summaries[0].difficulty_levels,
            vec![Difficulty::Basic, Difficulty::Advanced]
        );
        assert_eq!(summaries[0].grade_levels, vec!["5th Grade", "9th Grade"]);
    }
}
