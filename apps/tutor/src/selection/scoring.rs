use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::example::{Example, RelevanceBreakdown};

static FIRST_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Grade assumed for level strings without a number ("High School").
pub const DEFAULT_GRADE: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub level_match: f64,
    pub concept_relevance: f64,
    pub query_overlap: f64,
    pub grade_proximity: f64,
    /// Points lost from `grade_proximity` per grade of distance.
    pub grade_step_penalty: f64,
    /// Grade assumed when a level string carries no number.
    pub default_grade: u64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            level_match: 40.0,
            concept_relevance: 30.0,
            query_overlap: 20.0,
            grade_proximity: 10.0,
            grade_step_penalty: 2.0,
            default_grade: DEFAULT_GRADE,
        }
    }
}

/// Query text split into lowercase whitespace-separated words, computed once per request.
#[derive(Debug, Clone)]
pub struct QueryTerms {
    words: Vec<String>,
}

impl QueryTerms {
    pub fn new(query: &str) -> Self {
        Self {
            words: tokenize(query),
        }
    }
}

/// Scores one example against a (query, level) pair.
///
/// Four weighted signals:
/// 1. level match: leading token of `level` appears in the example's level
/// 2. concept relevance: share of query words overlapping a concept word
/// 3. query overlap: share of query words found in the example's own query
/// 4. grade proximity: `max(0, weight - step * |grade - example_grade|)`
///
/// Ratios over an empty word list contribute zero. The total is not clamped.
pub fn score_example(
    example: &Example,
    terms: &QueryTerms,
    level: &str,
    weights: &ScoringWeights,
) -> RelevanceBreakdown {
    let level_match = if level_token_matches(level, &example.level) {
        weights.level_match
    } else {
        0.0
    };

    let concept_words = tokenize(&example.concept);
    let concept_hits = terms
        .words
        .iter()
        .filter(|word| {
            concept_words
                .iter()
                .any(|concept| concept.contains(word.as_str()) || word.contains(concept.as_str()))
        })
        .count();

    let example_query = example.query.to_lowercase();
    let query_hits = terms
        .words
        .iter()
        .filter(|word| example_query.contains(word.as_str()))
        .count();

    let requested_grade = extract_grade_level(level, weights.default_grade);
    let example_grade = extract_grade_level(&example.level, weights.default_grade);
    let grade_distance = requested_grade.abs_diff(example_grade) as f64;

    RelevanceBreakdown {
        level_match,
        concept_relevance: ratio(concept_hits, terms.words.len()) * weights.concept_relevance,
        query_overlap: ratio(query_hits, terms.words.len()) * weights.query_overlap,
        grade_proximity: (weights.grade_proximity - weights.grade_step_penalty * grade_distance)
            .max(0.0),
    }
}

/// First integer in a level descriptor ("11th Grade Biology" → 11), or `default`.
/// Digit runs too long for `u64` saturate, so they sit far from every real grade.
pub fn extract_grade_level(level: &str, default: u64) -> u64 {
    match FIRST_INTEGER.find(level) {
        Some(m) => m.as_str().parse::<u64>().unwrap_or(u64::MAX),
        None => default,
    }
}

fn level_token_matches(level: &str, example_level: &str) -> bool {
    match level.split_whitespace().next() {
        Some(token) => example_level
            .to_lowercase()
            .contains(&token.to_lowercase()),
        None => false,
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn ratio(hits: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    hits as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::example::Difficulty;

    fn make_example(level: &str, query: &str, concept: &str) -> Example {
        Example {
            id: "fixture".to_string(),
            difficulty: Difficulty::Basic,
            level: level.to_string(),
            query: query.to_string(),
            concept: concept.to_string(),
            approach: "step-by-step".to_string(),
            response: "response".to_string(),
        }
    }

    fn score(example: &Example, query: &str, level: &str) -> RelevanceBreakdown {
        score_example(example, &QueryTerms::new(query), level, &ScoringWeights::default())
    }

    #[test]
    fn test_level_match_awards_full_weight_on_leading_token() {
        let example = make_example("10th Grade", "anything", "Anything");
        let b = score(&example, "unrelated words", "10th Grade Algebra");
        assert_eq!(b.level_match, 40.0);
    }

    #[test]
    fn test_level_match_zero_when_token_absent() {
        let example = make_example("8th Grade", "anything", "Anything");
        let b = score(&example, "unrelated words", "10th Grade");
        assert_eq!(b.level_match, 0.0);
    }

    #[test]
    fn test_level_match_is_case_insensitive() {
        let example = make_example("AP Calculus", "anything", "Anything");
        let b = score(&example, "unrelated", "ap calculus");
        assert_eq!(b.level_match, 40.0);
    }

    #[test]
    fn test_blank_level_never_matches() {
        let example = make_example("10th Grade", "anything", "Anything");
        let b = score(&example, "unrelated", "   ");
        assert_eq!(b.level_match, 0.0);
        // no number on either side of a blank level → default grade 10 vs 10
        assert_eq!(b.grade_proximity, 10.0);
    }

    #[test]
    fn test_grade_distance_twelfth_vs_eighth() {
        let example = make_example("8th Grade", "anything", "Anything");
        let b = score(&example, "unrelated", "12th Grade");
        assert_eq!(b.grade_proximity, 2.0);
    }

    #[test]
    fn test_grade_distance_floors_at_zero() {
        let example = make_example("1st Grade", "anything", "Anything");
        let b = score(&example, "unrelated", "12th Grade");
        assert_eq!(b.grade_proximity, 0.0);
    }

    #[test]
    fn test_missing_grade_defaults_to_ten() {
        assert_eq!(extract_grade_level("High School", 10), 10);
        assert_eq!(extract_grade_level("11th Grade Biology", 10), 11);
        assert_eq!(extract_grade_level("Grade 7", 10), 7);
    }

    #[test]
    fn test_oversized_grade_saturates() {
        assert_eq!(extract_grade_level("99999999999th Grade", 10), 99_999_999_999);
        assert_eq!(extract_grade_level(&format!("{}th", "9".repeat(30)), 10), u64::MAX);

        let example = make_example("10th Grade", "anything", "Anything");
        let b = score(&example, "unrelated", "99999999999th Grade");
        assert_eq!(b.grade_proximity, 0.0);
    }

    #[test]
    fn test_concept_matches_substrings_both_ways() {
        // "photosynthesis" contains "photo"; "energy" is contained in "energy"
        let example = make_example("10th Grade", "zzz", "Photosynthesis Energy");
        let b = score(&example, "photo energy chlorophyll", "10th Grade");
        assert!((b.concept_relevance - 20.0).abs() < 1e-9, "got {}", b.concept_relevance);
    }

    #[test]
    fn test_query_overlap_fraction_of_words() {
        let example = make_example("10th Grade", "How does photosynthesis work", "zzz");
        let b = score(&example, "photosynthesis explained", "10th Grade");
        assert!((b.query_overlap - 10.0).abs() < 1e-9, "got {}", b.query_overlap);
    }

    #[test]
    fn test_empty_word_list_contributes_zero() {
        let example = make_example("10th Grade", "Solve", "Equation");
        let b = score(&example, "   ", "10th Grade");
        assert_eq!(b.concept_relevance, 0.0);
        assert_eq!(b.query_overlap, 0.0);
        assert!(b.total().is_finite());
    }

    #[test]
    fn test_linear_equation_reference_score() {
        let example = make_example(
            "8th Grade",
            "Solve 2x + 5 = 13",
            "Linear Equation (one variable)",
        );
        let b = score(&example, "Solve 2x + 5 = 13", "8th Grade");
        assert_eq!(b.level_match, 40.0);
        assert_eq!(b.concept_relevance, 0.0);
        assert!((b.query_overlap - 20.0).abs() < 1e-9);
        assert_eq!(b.grade_proximity, 10.0);
        assert!((b.total() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_non_negative() {
        let example = make_example("Kindergarten", "", "");
        for (query, level) in [("x", "99th Grade"), ("", ""), ("a b c", "College")] {
            assert!(score(&example, query, level).total() >= 0.0);
        }
    }

    #[test]
    fn test_default_weights_never_exceed_one_hundred() {
        let example = make_example("10th Grade", "derivative rule", "derivative rule");
        let b = score(&example, "derivative rule", "10th Grade");
        assert!((b.total() - 100.0).abs() < 1e-9, "got {}", b.total());
    }

    #[test]
    fn test_scores_are_not_clamped_under_custom_weights() {
        let weights = ScoringWeights {
            concept_relevance: 60.0,
            query_overlap: 60.0,
            ..ScoringWeights::default()
        };
        let example = make_example("10th Grade", "derivative rule", "derivative rule");
        let b = score_example(
            &example,
            &QueryTerms::new("derivative rule"),
            "10th Grade",
            &weights,
        );
        assert!(b.total() > 100.0, "unclamped total expected, got {}", b.total());
    }
}
