//! Heuristic prompt validation. String checks only, no model in the loop.
//!
//! Quality points per technique:
//! - zero-shot:  instructions 50, numbered structure 40, under 400 tokens 10
//! - one-shot:   example 35, closing instruction 30, structure 25, 200–800 tokens 10
//! - multi-shot: ≥2 examples 40, closing instruction 25, structure 20,
//!   ≥3 examples 10, 500–1500 tokens 5
//! - chain-of-thought: ≥3 reasoning steps 25, thought markers 20, metacognition 15,
//!   reflection 15, systematic wording 15, ≥5 steps 10

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::prompt::{estimate_token_count, Technique};

static EXAMPLE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"EXAMPLE [0-9]+").expect("valid regex"));
static STEP_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"STEP [0-9]+").expect("valid regex"));

const CLOSING_INSTRUCTIONS: [&str; 3] = ["NOW SOLVE", "NOW EXPLAIN", "NOW ANALYZE"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptValidation {
    pub technique: Technique,
    pub example_count: usize,
    pub has_examples: bool,
    pub has_instructions: bool,
    pub has_structure: bool,
    /// `STEP <n>` markers; only counted for chain-of-thought.
    pub reasoning_steps: usize,
    pub token_count: usize,
    pub is_valid: bool,
    pub quality: u32,
}

pub fn validate_prompt(prompt: &str, technique: Technique) -> PromptValidation {
    let token_count = estimate_token_count(prompt);
    let has_closing = CLOSING_INSTRUCTIONS.iter().any(|i| prompt.contains(i));
    let has_markdown_steps = prompt.contains("**") && prompt.contains("1.");

    match technique {
        Technique::ZeroShot => {
            let has_instructions = prompt.contains("Student Query:");
            let has_structure = prompt.contains("1.");
            let quality = points(has_instructions, 50)
                + points(has_structure, 40)
                + points(token_count < 400, 10);
            PromptValidation {
                technique,
                example_count: 0,
                has_examples: false,
                has_instructions,
                has_structure,
                reasoning_steps: 0,
                token_count,
                is_valid: has_instructions && has_structure,
                quality,
            }
        }
        Technique::OneShot => {
            let has_examples = prompt.contains("EXAMPLE:");
            let quality = points(has_examples, 35)
                + points(has_closing, 30)
                + points(has_markdown_steps, 25)
                + points(token_count > 200 && token_count < 800, 10);
            PromptValidation {
                technique,
                example_count: usize::from(has_examples),
                has_examples,
                has_instructions: has_closing,
                has_structure: has_markdown_steps,
                reasoning_steps: 0,
                token_count,
                is_valid: has_examples && has_closing && has_markdown_steps,
                quality,
            }
        }
        Technique::MultiShot => {
            let example_count = EXAMPLE_MARKER.find_iter(prompt).count();
            let has_examples = example_count >= 2;
            let quality = points(has_examples, 40)
                + points(has_closing, 25)
                + points(has_markdown_steps, 20)
                + points(example_count >= 3, 10)
                + points(token_count > 500 && token_count < 1500, 5);
            PromptValidation {
                technique,
                example_count,
                has_examples,
                has_instructions: has_closing,
                has_structure: has_markdown_steps,
                reasoning_steps: 0,
                token_count,
                is_valid: has_examples && has_closing && has_markdown_steps,
                quality,
            }
        }
        Technique::ChainOfThought => {
            let reasoning_steps = STEP_MARKER.find_iter(prompt).count();
            let has_steps = reasoning_steps >= 3;
            let has_thought_process = prompt.contains("🤔 Thought:");
            let has_metacognition = prompt.contains("🧠");
            let has_reflection = prompt.contains("REFLECTING") || prompt.contains("REFLECTION");
            let is_systematic = prompt.contains("step by step") || prompt.contains("systematic");
            let quality = points(has_steps, 25)
                + points(has_thought_process, 20)
                + points(has_metacognition, 15)
                + points(has_reflection, 15)
                + points(is_systematic, 15)
                + points(reasoning_steps >= 5, 10);
            PromptValidation {
                technique,
                example_count: 0,
                has_examples: false,
                has_instructions: has_thought_process,
                has_structure: has_steps,
                reasoning_steps,
                token_count,
                is_valid: has_steps && has_thought_process && is_systematic,
                quality,
            }
        }
    }
}

fn points(condition: bool, value: u32) -> u32 {
    if condition {
        value
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::ExampleLibrary;
    use crate::prompting::chain_of_thought::generate_chain_of_thought;
    use crate::prompting::multi_shot::generate_multi_shot;
    use crate::prompting::one_shot::generate_one_shot;
    use crate::prompting::zero_shot::generate_zero_shot;
    use crate::selection::scoring::DEFAULT_GRADE;
    use crate::selection::selector::SelectionConfig;

    #[test]
    fn test_generated_multi_shot_prompt_is_valid() {
        let library = ExampleLibrary::builtin().unwrap();
        let generated = generate_multi_shot(
            &library,
            "literature",
            "What does the conch symbolize in Lord of the Flies?",
            "10th Grade",
            &SelectionConfig::default(),
        )
        .unwrap();
        let v = validate_prompt(&generated.prompt, Technique::MultiShot);
        assert!(v.is_valid);
        assert_eq!(v.example_count, 3);
        assert!(v.quality >= 95, "quality was {}", v.quality);
    }

    #[test]
    fn test_single_example_multi_shot_is_invalid() {
        let prompt = "EXAMPLE 1 - Atoms:\n**Answer**\n1. one\nNOW EXPLAIN THIS";
        let v = validate_prompt(prompt, Technique::MultiShot);
        assert!(!v.is_valid);
        assert_eq!(v.example_count, 1);
        assert_eq!(v.quality, 45);
    }

    #[test]
    fn test_generated_one_shot_prompt_is_valid() {
        let generated =
            generate_one_shot("science", "How do magnets attract metal?", "7th Grade Physics").unwrap();
        let v = validate_prompt(&generated.prompt, Technique::OneShot);
        assert!(v.is_valid);
        assert_eq!(v.example_count, 1);
        assert!(v.quality >= 90, "quality was {}", v.quality);
    }

    #[test]
    fn test_generated_zero_shot_prompt_scores_full_marks() {
        let generated = generate_zero_shot("science", "Why is the sky blue?", "6th Grade").unwrap();
        let v = validate_prompt(&generated.prompt, Technique::ZeroShot);
        assert!(v.is_valid);
        assert!(!v.has_examples);
        assert_eq!(v.quality, 100);
    }

    #[test]
    fn test_generated_chain_of_thought_prompt_scores_full_marks() {
        let generated = generate_chain_of_thought(
            "mathematics",
            "Solve 3x + 4 = 19",
            "9th Grade Algebra",
            DEFAULT_GRADE,
        )
        .unwrap();
        let v = validate_prompt(&generated.prompt, Technique::ChainOfThought);
        assert!(v.is_valid);
        assert_eq!(v.reasoning_steps, 5);
        assert_eq!(v.quality, 100);
    }

    #[test]
    fn test_chain_without_systematic_wording_is_invalid() {
        // senior literature prompts carry no guidance block and no "step by step"
        let generated = generate_chain_of_thought(
            "literature",
            "Discuss the narrator in Moby-Dick",
            "12th Grade",
            DEFAULT_GRADE,
        )
        .unwrap();
        let v = validate_prompt(&generated.prompt, Technique::ChainOfThought);
        assert_eq!(v.reasoning_steps, 5);
        assert!(v.has_instructions);
        assert!(!v.is_valid);
        assert_eq!(v.quality, 55);
    }

    #[test]
    fn test_empty_prompt_scores_zero_for_example_techniques() {
        assert_eq!(validate_prompt("", Technique::OneShot).quality, 0);
        assert_eq!(validate_prompt("", Technique::MultiShot).quality, 0);
        assert_eq!(validate_prompt("", Technique::ChainOfThought).quality, 0);
        // zero-shot still earns the short-prompt points
        assert_eq!(validate_prompt("", Technique::ZeroShot).quality, 10);
    }
}
