//! Example selector. Ranks a subject's examples against a query and keeps the top K.
//!
//! Reuses `selection::scoring::score_example` for the per-example relevance score.
//! Pure and synchronous; the source slice is never modified.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::example::{Example, ScoredExample};
use crate::selection::scoring::{score_example, QueryTerms, ScoringWeights};

/// Number of examples assembled into a multi-shot prompt.
pub const DEFAULT_TOP_K: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub weights: ScoringWeights,
    pub top_k: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Scores every example and returns the `top_k` most relevant, best first.
///
/// Algorithm:
/// 1. Tokenize the query once
/// 2. Score each example via `score_example`
/// 3. Stable sort descending by total score, so ties keep library order
/// 4. Truncate to `min(top_k, examples.len())`
///
/// An empty `examples` slice yields an empty result. Unknown subjects are
/// rejected earlier, by the library lookup.
pub fn select_examples(
    examples: &[Example],
    query: &str,
    level: &str,
    config: &SelectionConfig,
) -> Vec<ScoredExample> {
    let mut ranked = rank_examples(examples, query, level, &config.weights);
    ranked.truncate(config.top_k);

    debug!(
        candidates = examples.len(),
        selected = ranked.len(),
        top_score = ranked.first().map(|s| s.relevance_score),
        "Selected examples"
    );

    ranked
}

/// Scores and sorts every example without truncating.
pub fn rank_examples(
    examples: &[Example],
    query: &str,
    level: &str,
    weights: &ScoringWeights,
) -> Vec<ScoredExample> {
    let terms = QueryTerms::new(query);

    let mut ranked: Vec<ScoredExample> = examples
        .iter()
        .map(|example| {
            let breakdown = score_example(example, &terms, level, weights);
            ScoredExample {
                example: example.clone(),
                relevance_score: breakdown.total(),
                breakdown,
            }
        })
        .collect();

    // Vec::sort_by is stable
    ranked.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(Ordering::Equal)
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::example::Difficulty;

    fn make_example(id: &str, level: &str, query: &str, concept: &str) -> Example {
        Example {
            id: id.to_string(),
            difficulty: Difficulty::Intermediate,
            level: level.to_string(),
            query: query.to_string(),
            concept: concept.to_string(),
            approach: "worked example".to_string(),
            response: format!("Response for {id}"),
        }
    }

    fn math_examples() -> Vec<Example> {
        vec![
            make_example(
                "math_basic_algebra",
                "8th Grade",
                "Solve 2x + 5 = 13",
                "Linear Equation (one variable)",
            ),
            make_example(
                "math_quadratic",
                "10th Grade",
                "Solve x² - 5x + 6 = 0",
                "Quadratic Equation (factoring method)",
            ),
            make_example(
                "math_calculus",
                "12th Grade",
                "Find the derivative of f(x) = 3x² + 2x - 1",
                "Derivatives using Power Rule",
            ),
        ]
    }

    fn ids(selected: &[ScoredExample]) -> Vec<&str> {
        selected.iter().map(|s| s.example.id.as_str()).collect()
    }

    #[test]
    fn test_best_match_selected_first() {
        let selected = select_examples(
            &math_examples(),
            "Solve 2x + 5 = 13",
            "8th Grade",
            &SelectionConfig::default(),
        );
        assert_eq!(
            ids(&selected),
            vec!["math_basic_algebra", "math_quadratic", "math_calculus"]
        );
        assert!((selected[0].relevance_score - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_small_set_returns_all_in_descending_order() {
        let selected = select_examples(
            &math_examples(),
            "Find the derivative of a polynomial",
            "12th Grade Calculus",
            &SelectionConfig::default(),
        );
        assert_eq!(selected.len(), 3);
        assert_eq!(selected[0].example.id, "math_calculus");
        for pair in selected.windows(2) {
            assert!(pair[0].relevance_score >= pair[1].relevance_score);
        }
    }

    #[test]
    fn test_top_k_truncates() {
        let config = SelectionConfig {
            top_k: 1,
            ..SelectionConfig::default()
        };
        let selected = select_examples(&math_examples(), "Solve x² - 5x + 6 = 0", "10th Grade", &config);
        assert_eq!(ids(&selected), vec!["math_quadratic"]);
    }

    #[test]
    fn test_ties_keep_library_order() {
        let examples: Vec<_> = ["a", "b", "c", "d"]
            .iter()
            .map(|id| make_example(id, "9th Grade", "same query", "same concept"))
            .collect();
        let selected = select_examples(&examples, "same query", "9th Grade", &SelectionConfig::default());
        assert_eq!(ids(&selected), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let examples = math_examples();
        let config = SelectionConfig::default();
        let first = select_examples(&examples, "solve for x", "11th Grade Algebra", &config);
        for _ in 0..5 {
            let again = select_examples(&examples, "solve for x", "11th Grade Algebra", &config);
            assert_eq!(ids(&first), ids(&again));
        }
    }

    #[test]
    fn test_empty_example_set_returns_empty() {
        let selected = select_examples(&[], "Solve 2x + 5 = 13", "8th Grade", &SelectionConfig::default());
        assert!(selected.is_empty());
    }

    #[test]
    fn test_source_examples_unchanged() {
        let examples = math_examples();
        let before = examples.clone();
        let _ = select_examples(&examples, "derivative", "12th Grade", &SelectionConfig::default());
        assert_eq!(examples, before);
    }

    #[test]
    fn test_rank_examples_keeps_every_candidate() {
        let ranked = rank_examples(&math_examples(), "anything", "9th Grade", &ScoringWeights::default());
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|s| s.relevance_score >= 0.0));
    }
}
