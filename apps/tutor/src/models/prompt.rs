use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::reasoning::ReasoningAnalysis;

/// Prompting technique used to build a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Technique {
    ZeroShot,
    OneShot,
    MultiShot,
    ChainOfThought,
}

impl Technique {
    pub const ALL: [Technique; 4] = [
        Technique::ZeroShot,
        Technique::OneShot,
        Technique::MultiShot,
        Technique::ChainOfThought,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Technique::ZeroShot => "zero-shot",
            Technique::OneShot => "one-shot",
            Technique::MultiShot => "multi-shot",
            Technique::ChainOfThought => "chain-of-thought",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Technique {
    type Err = AppError;

    /// Accepts `multi-shot`, `multi_shot` and `multishot`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        Technique::ALL
            .into_iter()
            .find(|t| t.as_str().replace('-', "") == normalized)
            .ok_or_else(|| AppError::UnknownTechnique(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptMetadata {
    pub subject: String,
    pub query: String,
    pub level: String,
    pub technique: Technique,
    pub examples_used: usize,
    pub selected_example_ids: Vec<String>,
    pub token_estimate: usize,
    pub generated_at: DateTime<Utc>,
    /// Set for chain-of-thought prompts only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<ReasoningAnalysis>,
}

/// A fully assembled prompt, ready to send to a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    pub prompt: String,
    pub metadata: PromptMetadata,
}

/// Rough token count: one token per four characters, rounded up.
pub fn estimate_token_count(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}
