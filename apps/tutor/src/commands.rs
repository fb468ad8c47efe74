//! CLI command handlers. Each takes the shared `AppState`, writes its result to
//! stdout, and leaves logging to stderr.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::evaluation::dataset::EvaluationDataset;
use crate::evaluation::{run_evaluation, EvaluationReport};
use crate::models::prompt::Technique;
use crate::prompting::{generate_prompt, require_query};
use crate::prompting::validation::validate_prompt;
use crate::selection::selector::select_examples;
use crate::state::AppState;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List subjects in the example library
    Subjects {
        #[arg(long)]
        json: bool,
    },

    /// Rank a subject's examples against a query
    Select(SelectArgs),

    /// Generate a prompt with the given technique
    Prompt(PromptArgs),

    /// Generate a prompt and report its heuristic quality
    Validate(PromptArgs),

    /// Run the heuristic evaluation harness
    Evaluate {
        /// JSON dataset of samples; defaults to the built-in set
        #[arg(long)]
        dataset: Option<std::path::PathBuf>,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct SelectArgs {
    pub subject: String,
    pub query: String,

    /// Student level, e.g. "10th Grade"
    #[arg(long)]
    pub level: Option<String>,

    /// Override the configured number of examples to keep
    #[arg(long)]
    pub top_k: Option<usize>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PromptArgs {
    /// zero-shot, one-shot, multi-shot or chain-of-thought
    pub technique: Technique,
    pub subject: String,
    pub query: String,

    #[arg(long)]
    pub level: Option<String>,

    #[arg(long)]
    pub json: bool,
}

pub fn run(command: Command, state: &AppState, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Subjects { json } => handle_subjects(state, json, out),
        Command::Select(args) => handle_select(state, args, out),
        Command::Prompt(args) => handle_prompt(state, args, out),
        Command::Validate(args) => handle_validate(state, args, out),
        Command::Evaluate { dataset, json } => handle_evaluate(state, dataset.as_deref(), json, out),
    }
}

fn handle_subjects(state: &AppState, json: bool, out: &mut impl Write) -> Result<()> {
    let subjects = state.library.subjects();
    if json {
        return write_json(out, &subjects);
    }
    for summary in subjects {
        let difficulties: Vec<&str> = summary.difficulty_levels.iter().map(|d| d.as_str()).collect();
        writeln!(
            out,
            "{:<12} {} examples  difficulties: {}  levels: {}",
            summary.subject,
            summary.example_count,
            difficulties.join(", "),
            summary.grade_levels.join(", ")
        )?;
    }
    Ok(())
}

fn handle_select(state: &AppState, args: SelectArgs, out: &mut impl Write) -> Result<()> {
    let query = require_query(&args.query)?;
    let examples = state.library.examples_for_subject(&args.subject)?;
    let level = state.config.resolve_level(args.level.as_deref());

    let mut config = state.config.selection;
    if let Some(top_k) = args.top_k {
        anyhow::ensure!(top_k > 0, "--top-k must be at least 1");
        config.top_k = top_k;
    }

    let selected = select_examples(examples, query, &level, &config);
    if args.json {
        return write_json(out, &selected);
    }
    for (rank, scored) in selected.iter().enumerate() {
        let b = &scored.breakdown;
        writeln!(
            out,
            "{}. {} ({:.2})  level {:.1}  concept {:.1}  query {:.1}  grade {:.1}",
            rank + 1,
            scored.example.id,
            scored.relevance_score,
            b.level_match,
            b.concept_relevance,
            b.query_overlap,
            b.grade_proximity
        )?;
    }
    Ok(())
}

fn handle_prompt(state: &AppState, args: PromptArgs, out: &mut impl Write) -> Result<()> {
    let generated = generate_prompt(
        state,
        args.technique,
        &args.subject,
        &args.query,
        args.level.as_deref(),
    )?;
    if args.json {
        return write_json(out, &generated);
    }
    writeln!(out, "{}", generated.prompt)?;
    Ok(())
}

fn handle_validate(state: &AppState, args: PromptArgs, out: &mut impl Write) -> Result<()> {
    let generated = generate_prompt(
        state,
        args.technique,
        &args.subject,
        &args.query,
        args.level.as_deref(),
    )?;
    let validation = validate_prompt(&generated.prompt, args.technique);
    if args.json {
        return write_json(out, &validation);
    }
    writeln!(
        out,
        "{} prompt: valid={} quality={}/100 examples={} tokens≈{}",
        validation.technique,
        validation.is_valid,
        validation.quality,
        validation.example_count,
        validation.token_count
    )?;
    Ok(())
}

fn handle_evaluate(
    state: &AppState,
    dataset_path: Option<&Path>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let dataset = match dataset_path {
        Some(path) => EvaluationDataset::from_json_file(path)
            .with_context(|| format!("failed to load dataset from {}", path.display()))?,
        None => EvaluationDataset::builtin(),
    };

    let report = run_evaluation(state, &dataset);
    if json {
        return write_json(out, &report);
    }
    write_report(&report, out)
}

fn write_report(report: &EvaluationReport, out: &mut impl Write) -> Result<()> {
    for result in &report.results {
        let status = if result.passed { "PASS" } else { "FAIL" };
        write!(
            out,
            "{status} {:<16} {:<16} {:<12} {:>3}",
            result.sample_id, result.technique, result.subject, result.overall_score
        )?;
        match &result.error {
            Some(error) => writeln!(out, "  {error}")?,
            None => writeln!(out)?,
        }
    }
    writeln!(out)?;
    for summary in &report.summaries {
        writeln!(
            out,
            "{:<16} {}/{} passed, average {:.1}",
            summary.technique, summary.passed, summary.total, summary.average_score
        )?;
    }
    writeln!(
        out,
        "{:<16} {}/{} passed, average {:.1}",
        "overall",
        report.passed, report.total, report.average_score
    )?;
    Ok(())
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::errors::AppError;

    fn run_to_string(command: Command) -> Result<String> {
        let state = AppState::new(Config::default())?;
        let mut out = Vec::new();
        run(command, &state, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_subjects_lists_builtin_catalog() {
        let output = run_to_string(Command::Subjects { json: false }).unwrap();
        assert_eq!(output.lines().count(), 3);
        assert!(output.contains("mathematics"));
        assert!(output.contains("basic, intermediate, advanced"));
    }

    #[test]
    fn test_select_json_is_ranked() {
        let output = run_to_string(Command::Select(SelectArgs {
            subject: "mathematics".to_string(),
            query: "Solve 2x + 5 = 13".to_string(),
            level: Some("8th Grade".to_string()),
            top_k: Some(2),
            json: true,
        }))
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["example"]["id"], "math_basic_algebra");
    }

    #[test]
    fn test_select_unknown_subject_errors() {
        let err = run_to_string(Command::Select(SelectArgs {
            subject: "history".to_string(),
            query: "Who was Napoleon?".to_string(),
            level: None,
            top_k: None,
            json: false,
        }))
        .unwrap_err();
        assert!(err.to_string().contains("No examples available for subject: history"));
    }

    #[test]
    fn test_select_rejects_blank_query() {
        let err = run_to_string(Command::Select(SelectArgs {
            subject: "mathematics".to_string(),
            query: "   ".to_string(),
            level: None,
            top_k: None,
            json: false,
        }))
        .unwrap_err();
        let app_err = err.downcast_ref::<AppError>().unwrap();
        assert_eq!(app_err.code(), "INVALID_QUERY");
    }

    #[test]
    fn test_select_trims_query_before_scoring() {
        let padded = run_to_string(Command::Select(SelectArgs {
            subject: "mathematics".to_string(),
            query: "  Solve 2x + 5 = 13\n".to_string(),
            level: Some("8th Grade".to_string()),
            top_k: Some(1),
            json: false,
        }))
        .unwrap();
        assert!(padded.starts_with("1. math_basic_algebra (70.00)"));
    }

    #[test]
    fn test_select_rejects_zero_top_k() {
        let result = run_to_string(Command::Select(SelectArgs {
            subject: "science".to_string(),
            query: "What is gravity?".to_string(),
            level: None,
            top_k: Some(0),
            json: false,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_prompt_prints_text() {
        let output = run_to_string(Command::Prompt(PromptArgs {
            technique: Technique::OneShot,
            subject: "mathematics".to_string(),
            query: "Solve 4x = 20".to_string(),
            level: None,
            json: false,
        }))
        .unwrap();
        assert!(output.contains("Student Query: \"Solve 4x = 20\""));
    }

    #[test]
    fn test_validate_reports_quality() {
        let output = run_to_string(Command::Validate(PromptArgs {
            technique: Technique::ZeroShot,
            subject: "science".to_string(),
            query: "Why is the sky blue?".to_string(),
            level: None,
            json: false,
        }))
        .unwrap();
        assert!(output.starts_with("zero-shot prompt: valid=true quality=100/100"));
    }

    #[test]
    fn test_evaluate_summarizes_builtin_dataset() {
        let output = run_to_string(Command::Evaluate {
            dataset: None,
            json: false,
        })
        .unwrap();
        assert!(output.contains(&format!("{:<16} 12/12 passed", "overall")));
        assert!(output.contains("chain-of-thought 3/3 passed"));
    }
}
