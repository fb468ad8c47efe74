use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::prompt::Technique;

/// One evaluation case: which technique to run for which request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSample {
    pub id: String,
    pub technique: Technique,
    pub subject: String,
    pub query: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub max_response_time_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationDataset {
    pub samples: Vec<EvaluationSample>,
}

impl EvaluationDataset {
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path)?;
        let dataset: Self = serde_json::from_str(&contents)?;
        info!(path = %path.display(), samples = dataset.samples.len(), "Loaded evaluation dataset");
        Ok(dataset)
    }

    /// Fixed cases covering every technique and subject.
    pub fn builtin() -> Self {
        let cases: [(&str, Technique, &str, &str, &str); 12] = [
            ("zs_math", Technique::ZeroShot, "mathematics", "Solve x² - 6x + 8 = 0", "High School Algebra II"),
            ("zs_science", Technique::ZeroShot, "science", "How does photosynthesis work and why is it important?", "8th Grade"),
            ("zs_literature", Technique::ZeroShot, "literature", "What is the significance of the balcony scene in Romeo and Juliet?", "10th Grade"),
            ("os_math", Technique::OneShot, "mathematics", "Solve 3x² - 12x + 9 = 0", "10th Grade Algebra"),
            ("os_science", Technique::OneShot, "science", "Explain how photosynthesis converts sunlight into energy", "7th Grade Biology"),
            ("os_literature", Technique::OneShot, "literature", "Analyze the theme of revenge in Hamlet", "12th Grade AP English"),
            ("ms_math", Technique::MultiShot, "mathematics", "Find the zeros of f(x) = x² - 4x + 3", "11th Grade Algebra"),
            ("ms_science", Technique::MultiShot, "science", "Explain cellular respiration and energy production", "11th Grade Biology"),
            ("ms_literature", Technique::MultiShot, "literature", "How does Fitzgerald use symbolism in The Great Gatsby?", "11th Grade"),
            ("cot_math", Technique::ChainOfThought, "mathematics", "Solve the quadratic equation x² - 5x + 6 = 0 and explain your reasoning", "10th Grade Algebra"),
            ("cot_science", Technique::ChainOfThought, "science", "Explain why the sky appears blue using scientific principles", "9th Grade Physics"),
            ("cot_literature", Technique::ChainOfThought, "literature", "Analyze how Shakespeare uses light and dark imagery in Romeo and Juliet", "10th Grade"),
        ];

        Self {
            samples: cases
                .into_iter()
                .map(|(id, technique, subject, query, level)| EvaluationSample {
                    id: id.to_string(),
                    technique,
                    subject: subject.to_string(),
                    query: query.to_string(),
                    level: Some(level.to_string()),
                    max_response_time_ms: None,
                })
                .collect(),
        }
    }
}
