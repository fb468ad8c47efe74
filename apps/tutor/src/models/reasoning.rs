use std::fmt;

use serde::{Deserialize, Serialize};

/// How demanding a query is, judged from its wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CognitiveLevel {
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl CognitiveLevel {
    /// Reasoning steps expected before grade adjustment.
    pub fn base_chain_depth(&self) -> u32 {
        match self {
            CognitiveLevel::Basic => 3,
            CognitiveLevel::Intermediate => 5,
            CognitiveLevel::Advanced => 7,
            CognitiveLevel::Expert => 9,
        }
    }

    pub fn needs_scaffolding(&self) -> bool {
        matches!(self, CognitiveLevel::Advanced | CognitiveLevel::Expert)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThinkingSkill {
    Analysis,
    Synthesis,
    Evaluation,
    Application,
    Interpretation,
    Inference,
}

impl ThinkingSkill {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThinkingSkill::Analysis => "analysis",
            ThinkingSkill::Synthesis => "synthesis",
            ThinkingSkill::Evaluation => "evaluation",
            ThinkingSkill::Application => "application",
            ThinkingSkill::Interpretation => "interpretation",
            ThinkingSkill::Inference => "inference",
        }
    }
}

impl fmt::Display for ThinkingSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetacognitiveSupport {
    /// Grade 10 and below: the prompt carries explicit self-questioning guidance.
    High,
    Moderate,
}

/// How much reasoning a query calls for, judged from its wording and the student's grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityAnalysis {
    pub cognitive_level: CognitiveLevel,
    pub thinking_skills: Vec<ThinkingSkill>,
    pub chain_depth: u32,
    pub metacognitive_support: MetacognitiveSupport,
    pub scaffolding_needed: bool,
}

/// Reported in the metadata of chain-of-thought prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningAnalysis {
    #[serde(flatten)]
    pub complexity: ComplexityAnalysis,
    /// Stage names of the subject's reasoning framework, in prompt order.
    pub reasoning_stages: Vec<String>,
}
