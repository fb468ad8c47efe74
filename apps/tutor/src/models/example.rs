use serde::{Deserialize, Serialize};

/// Difficulty tier of a stored example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Basic => "basic",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// A stored demonstration query/response pair used to steer prompt generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub id: String,
    pub difficulty: Difficulty,
    /// Free-text grade descriptor, e.g. "10th Grade".
    pub level: String,
    pub query: String,
    pub concept: String,
    pub approach: String,
    pub response: String,
}

/// Per-signal contributions to a relevance score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RelevanceBreakdown {
    pub level_match: f64,
    pub concept_relevance: f64,
    pub query_overlap: f64,
    pub grade_proximity: f64,
}

impl RelevanceBreakdown {
    pub fn total(&self) -> f64 {
        self.level_match + self.concept_relevance + self.query_overlap + self.grade_proximity
    }
}

/// An example ranked against one incoming query. Transient: built per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredExample {
    pub example: Example,
    pub relevance_score: f64,
    pub breakdown: RelevanceBreakdown,
}

/// All examples for one subject plus the multi-shot template they are assembled into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectLibrary {
    pub examples: Vec<Example>,
    /// Carries `{EXAMPLES}`, `{query}` and `{level}` placeholders.
    pub template: String,
}

/// Listing entry for a subject, as shown by `tutor subjects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub subject: String,
    pub example_count: usize,
    pub difficulty_levels: Vec<Difficulty>,
    pub grade_levels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_difficulty_serde_lowercase() {
        let d: Difficulty = serde_json::from_str(r#""intermediate""#).unwrap();
        assert_eq!(d, Difficulty::Intermediate);
        assert_eq!(serde_json::to_string(&Difficulty::Advanced).unwrap(), r#""advanced""#);
    }

    #[test]
    fn test_example_id_defaults_to_empty() {
        let value = json!({
            "difficulty": "basic",
            "level": "8th Grade",
            "query": "Solve 2x + 5 = 13",
            "concept": "Linear Equation",
            "approach": "isolation",
            "response": "x = 4"
        });
        let example: Example = serde_json::from_value(value).unwrap();
        assert!(example.id.is_empty());
        assert_eq!(example.difficulty, Difficulty::Basic);
    }

    #[test]
    fn test_breakdown_total_sums_components() {
        let b = RelevanceBreakdown {
            level_match: 40.0,
            concept_relevance: 15.0,
            query_overlap: 20.0,
            grade_proximity: 6.0,
        };
        assert!((b.total() - 81.0).abs() < f64::EPSILON);
    }
}
