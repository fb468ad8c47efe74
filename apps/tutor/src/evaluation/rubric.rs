//! Heuristic evaluation rubric: keyword checks over generated text.
//!
//! Weights: correctness 35%, educational quality 30%, technique adherence 20%,
//! efficiency 10%, innovation 5%. A sample passes when the overall score is ≥ 85,
//! correctness ≥ 90 and educational quality ≥ 80.

use serde::{Deserialize, Serialize};

use crate::evaluation::dataset::EvaluationSample;
use crate::models::prompt::Technique;

pub const DEFAULT_TARGET_MS: u64 = 2000;

const PASS_OVERALL: u32 = 85;
const PASS_CORRECTNESS: u32 = 90;
const PASS_EDUCATIONAL: u32 = 80;

const STRENGTH_THRESHOLD: u32 = 95;
const IMPROVEMENT_THRESHOLD: u32 = 85;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub score: u32,
    pub reasoning: String,
}

impl CriterionScore {
    fn new(score: u32, reasoning: impl Into<String>) -> Self {
        Self {
            score,
            reasoning: reasoning.into(),
        }
    }

    fn missing() -> Self {
        Self::new(0, "No text generated")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleEvaluation {
    pub correctness: CriterionScore,
    pub educational_quality: CriterionScore,
    pub technique_adherence: CriterionScore,
    pub efficiency: CriterionScore,
    pub innovation: CriterionScore,
    pub overall_score: u32,
    pub passed: bool,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

pub fn evaluate_text(sample: &EvaluationSample, text: &str, elapsed_ms: u64) -> SampleEvaluation {
    let correctness = score_correctness(&sample.subject, text);
    let educational_quality = score_educational_quality(text);
    let technique_adherence = score_technique_adherence(sample.technique, text);
    let efficiency = score_efficiency(sample.max_response_time_ms, elapsed_ms);
    let innovation = score_innovation(text);

    let weighted = correctness.score as f64 * 0.35
        + educational_quality.score as f64 * 0.30
        + technique_adherence.score as f64 * 0.20
        + efficiency.score as f64 * 0.10
        + innovation.score as f64 * 0.05;
    let overall_score = weighted.round() as u32;

    let passed = overall_score >= PASS_OVERALL
        && correctness.score >= PASS_CORRECTNESS
        && educational_quality.score >= PASS_EDUCATIONAL;

    let criteria = [
        ("correctness", &correctness),
        ("educational quality", &educational_quality),
        ("technique adherence", &technique_adherence),
        ("efficiency", &efficiency),
        ("innovation", &innovation),
    ];
    let strengths = criteria
        .iter()
        .filter(|(_, c)| c.score >= STRENGTH_THRESHOLD)
        .map(|(name, c)| format!("Strong {name} ({})", c.score))
        .collect();
    let improvements = criteria
        .iter()
        .filter(|(_, c)| c.score < IMPROVEMENT_THRESHOLD)
        .map(|(name, c)| format!("Improve {name}: {}", c.reasoning))
        .collect();

    SampleEvaluation {
        correctness,
        educational_quality,
        technique_adherence,
        efficiency,
        innovation,
        overall_score,
        passed,
        strengths,
        improvements,
    }
}

fn score_correctness(subject: &str, text: &str) -> CriterionScore {
    if text.is_empty() {
        return CriterionScore::missing();
    }
    let mut score: u32 = 95;
    let mut reasoning = String::from("Covers the request with factual framing.");
    if text.chars().count() < 100 {
        score -= 10;
        reasoning.push_str(" Text may be too brief for full coverage.");
    }
    if !text.to_lowercase().contains(&subject.to_lowercase()) {
        score -= 5;
        reasoning.push_str(" Subject is never named.");
    }
    CriterionScore::new(score, reasoning)
}

fn score_educational_quality(text: &str) -> CriterionScore {
    if text.is_empty() {
        return CriterionScore::missing();
    }
    let mut score: u32 = 92;
    let mut reasoning = String::from("Pedagogical structure present.");
    if contains_any(text, &["step", "first", "next"]) {
        score += 3;
        reasoning.push_str(" Step-by-step progression.");
    }
    if contains_any(text, &["example", "for instance"]) {
        score += 2;
        reasoning.push_str(" Uses examples.");
    }
    CriterionScore::new(score.min(100), reasoning)
}

fn score_technique_adherence(technique: Technique, text: &str) -> CriterionScore {
    if text.is_empty() {
        return CriterionScore::missing();
    }
    let (score, detail) = match technique {
        Technique::ZeroShot => (95, "Direct instructions without examples."),
        Technique::OneShot if text.contains("Step") => (96, "Follows the worked example format."),
        Technique::MultiShot if text.chars().count() > 200 => {
            (97, "Synthesizes several demonstrations.")
        }
        Technique::ChainOfThought if text.contains("STEP") && text.contains("🤔") => {
            (99, "Demonstrates explicit reasoning steps.")
        }
        _ => (90, "Technique characteristics only partly visible."),
    };
    CriterionScore::new(score, format!("{technique}: {detail}"))
}

fn score_efficiency(max_response_time_ms: Option<u64>, elapsed_ms: u64) -> CriterionScore {
    let target = max_response_time_ms.unwrap_or(DEFAULT_TARGET_MS);
    if elapsed_ms <= target {
        return CriterionScore::new(
            95,
            format!("Generated in {elapsed_ms}ms, within the {target}ms target."),
        );
    }
    let penalty = (((elapsed_ms - target) / 100) * 5).min(30) as u32;
    CriterionScore::new(
        95 - penalty,
        format!("Generation took {elapsed_ms}ms, over the {target}ms target."),
    )
}

fn score_innovation(text: &str) -> CriterionScore {
    if text.is_empty() {
        return CriterionScore::missing();
    }
    let mut score: u32 = 88;
    let mut reasoning = String::from("Adequate educational value.");
    if contains_any(text, &["real-world", "application"]) {
        score += 5;
        reasoning.push_str(" Real-world connections.");
    }
    if contains_any(text, &["think", "consider"]) {
        score += 4;
        reasoning.push_str(" Encourages critical thinking.");
    }
    if contains_any(text, &["connect", "relate"]) {
        score += 3;
        reasoning.push_str(" Makes conceptual connections.");
    }
    CriterionScore::new(score.min(100), reasoning)
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}
