//! Evaluation harness. Generates each sample's prompt, times it, and scores the
//! text with the heuristic rubric. Failed generations are recorded, not fatal.

pub mod dataset;
pub mod rubric;

use std::collections::BTreeMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::evaluation::dataset::EvaluationDataset;
use crate::evaluation::rubric::{evaluate_text, SampleEvaluation};
use crate::models::prompt::Technique;
use crate::prompting::generate_prompt;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleResult {
    pub sample_id: String,
    pub technique: Technique,
    pub subject: String,
    pub elapsed_ms: u64,
    pub overall_score: u32,
    pub passed: bool,
    pub evaluation: Option<SampleEvaluation>,
    /// Error code and message when the prompt could not be generated.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueSummary {
    pub technique: Technique,
    pub total: usize,
    pub passed: usize,
    pub average_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub results: Vec<SampleResult>,
    pub summaries: Vec<TechniqueSummary>,
    pub total: usize,
    pub passed: usize,
    pub average_score: f64,
}

pub fn run_evaluation(state: &AppState, dataset: &EvaluationDataset) -> EvaluationReport {
    let results: Vec<SampleResult> = dataset
        .samples
        .iter()
        .map(|sample| {
            let started = Instant::now();
            let generated = generate_prompt(
                state,
                sample.technique,
                &sample.subject,
                &sample.query,
                sample.level.as_deref(),
            );
            let elapsed_ms = started.elapsed().as_millis() as u64;

            match generated {
                Ok(generated) => {
                    let evaluation = evaluate_text(sample, &generated.prompt, elapsed_ms);
                    SampleResult {
                        sample_id: sample.id.clone(),
                        technique: sample.technique,
                        subject: sample.subject.clone(),
                        elapsed_ms,
                        overall_score: evaluation.overall_score,
                        passed: evaluation.passed,
                        evaluation: Some(evaluation),
                        error: None,
                    }
                }
                Err(e) => {
                    warn!(sample = %sample.id, code = e.code(), "Prompt generation failed: {e}");
                    SampleResult {
                        sample_id: sample.id.clone(),
                        technique: sample.technique,
                        subject: sample.subject.clone(),
                        elapsed_ms,
                        overall_score: 0,
                        passed: false,
                        evaluation: None,
                        error: Some(format!("{}: {e}", e.code())),
                    }
                }
            }
        })
        .collect();

    let summaries = summarize(&results);
    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let average_score = average(results.iter().map(|r| r.overall_score));

    info!(total, passed, average_score, "Evaluation complete");

    EvaluationReport {
        results,
        summaries,
        total,
        passed,
        average_score,
    }
}

fn summarize(results: &[SampleResult]) -> Vec<TechniqueSummary> {
    let mut by_technique: BTreeMap<Technique, Vec<&SampleResult>> = BTreeMap::new();
    for result in results {
        by_technique.entry(result.technique).or_default().push(result);
    }

    by_technique
        .into_iter()
        .map(|(technique, rows)| TechniqueSummary {
            technique,
            total: rows.len(),
            passed: rows.iter().filter(|r| r.passed).count(),
            average_score: average(rows.iter().map(|r| r.overall_score)),
        })
        .collect()
}

fn average(scores: impl Iterator<Item = u32>) -> f64 {
    let (sum, count) = scores.fold((0u64, 0usize), |(s, c), score| (s + score as u64, c + 1));
    if count == 0 {
        return 0.0;
    }
    sum as f64 / count as f64
}
