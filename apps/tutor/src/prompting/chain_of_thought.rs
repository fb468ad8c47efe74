//! Chain-of-thought prompts: a five-stage reasoning walkthrough per subject, with
//! metacognitive guidance sized to the query's cognitive demand and the student's grade.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::info;

use crate::errors::AppError;
use crate::library::normalize_subject;
use crate::models::prompt::{GeneratedPrompt, Technique};
use crate::models::reasoning::{
    CognitiveLevel, ComplexityAnalysis, MetacognitiveSupport, ReasoningAnalysis, ThinkingSkill,
};
use crate::prompting::prompts::{
    LITERATURE_CHAIN_OF_THOUGHT_TEMPLATE, LITERATURE_REASONING_COMPONENTS,
    LITERATURE_REASONING_STAGES, MATHEMATICS_CHAIN_OF_THOUGHT_TEMPLATE,
    MATHEMATICS_REASONING_COMPONENTS, MATHEMATICS_REASONING_STAGES, METACOGNITIVE_GUIDANCE,
    REASONING_PLACEHOLDER_FALLBACK, SCIENCE_CHAIN_OF_THOUGHT_TEMPLATE,
    SCIENCE_REASONING_COMPONENTS, SCIENCE_REASONING_STAGES, SHARED_REASONING_COMPONENTS,
    THINKING_TOOLS,
};
use crate::prompting::{build_prompt, require_query};
use crate::selection::scoring::extract_grade_level;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^}]+)\}").expect("valid regex"));

/// Checked in order; the first level with a matching phrase wins.
const COMPLEXITY_INDICATORS: &[(CognitiveLevel, &[&str])] = &[
    (CognitiveLevel::Basic, &["what is", "define", "identify", "list", "recall"]),
    (
        CognitiveLevel::Intermediate,
        &["explain", "describe", "compare", "analyze", "how does"],
    ),
    (
        CognitiveLevel::Advanced,
        &["evaluate", "synthesize", "critique", "justify", "design", "create"],
    ),
    (
        CognitiveLevel::Expert,
        &["theorize", "hypothesize", "construct", "derive", "prove"],
    ),
];

const SKILL_INDICATORS: &[(ThinkingSkill, &[&str])] = &[
    (ThinkingSkill::Analysis, &["analyze", "break down", "examine", "dissect"]),
    (ThinkingSkill::Synthesis, &["combine", "create", "design", "construct"]),
    (ThinkingSkill::Evaluation, &["evaluate", "assess", "judge", "critique"]),
    (ThinkingSkill::Application, &["apply", "use", "implement", "solve"]),
    (
        ThinkingSkill::Interpretation,
        &["interpret", "explain", "meaning", "significance"],
    ),
    (ThinkingSkill::Inference, &["infer", "conclude", "deduce", "imply"]),
];

const DEFAULT_SKILLS: [ThinkingSkill; 2] = [ThinkingSkill::Analysis, ThinkingSkill::Interpretation];

/// Grades at or below this get explicit metacognitive guidance.
const HIGH_SUPPORT_MAX_GRADE: u64 = 10;

struct ReasoningFramework {
    stages: &'static [&'static str],
    template: &'static str,
    components: &'static [(&'static str, &'static str)],
}

fn framework_for(subject: &str) -> Option<ReasoningFramework> {
    let (stages, template, components) = match subject {
        "mathematics" => (
            MATHEMATICS_REASONING_STAGES,
            MATHEMATICS_CHAIN_OF_THOUGHT_TEMPLATE,
            MATHEMATICS_REASONING_COMPONENTS,
        ),
        "science" => (
            SCIENCE_REASONING_STAGES,
            SCIENCE_CHAIN_OF_THOUGHT_TEMPLATE,
            SCIENCE_REASONING_COMPONENTS,
        ),
        "literature" => (
            LITERATURE_REASONING_STAGES,
            LITERATURE_CHAIN_OF_THOUGHT_TEMPLATE,
            LITERATURE_REASONING_COMPONENTS,
        ),
        _ => return None,
    };
    Some(ReasoningFramework {
        stages,
        template,
        components,
    })
}

/// Classifies a query by the phrases it contains and sizes the reasoning chain to
/// the student's grade.
pub fn analyze_reasoning_complexity(query: &str, level: &str, default_grade: u64) -> ComplexityAnalysis {
    let query_lower = query.to_lowercase();
    let grade = extract_grade_level(level, default_grade);

    let cognitive_level = COMPLEXITY_INDICATORS
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|p| query_lower.contains(p)))
        .map(|(level, _)| *level)
        .unwrap_or(CognitiveLevel::Intermediate);

    ComplexityAnalysis {
        cognitive_level,
        thinking_skills: identify_thinking_skills(&query_lower),
        chain_depth: reasoning_chain_depth(cognitive_level, grade),
        metacognitive_support: if grade <= HIGH_SUPPORT_MAX_GRADE {
            MetacognitiveSupport::High
        } else {
            MetacognitiveSupport::Moderate
        },
        scaffolding_needed: cognitive_level.needs_scaffolding(),
    }
}

/// Skills named by the (lowercased) query, or analysis and interpretation if none are.
pub fn identify_thinking_skills(query_lower: &str) -> Vec<ThinkingSkill> {
    let skills: Vec<ThinkingSkill> = SKILL_INDICATORS
        .iter()
        .filter(|(_, phrases)| phrases.iter().any(|p| query_lower.contains(p)))
        .map(|(skill, _)| *skill)
        .collect();
    if skills.is_empty() {
        DEFAULT_SKILLS.to_vec()
    } else {
        skills
    }
}

/// Base depth for the level, scaled by 0.8 up to grade 8 and 1.2 from grade 12.
pub fn reasoning_chain_depth(level: CognitiveLevel, grade: u64) -> u32 {
    let factor = if grade <= 8 {
        0.8
    } else if grade >= 12 {
        1.2
    } else {
        1.0
    };
    (level.base_chain_depth() as f64 * factor).round() as u32
}

/// Fills every placeholder in one pass so text from the query is never rescanned.
fn fill_framework(framework: &ReasoningFramework, query: &str, level: &str) -> String {
    PLACEHOLDER
        .replace_all(framework.template, |caps: &Captures| match &caps[1] {
            "query" => query.to_string(),
            "level" => level.to_string(),
            name => framework
                .components
                .iter()
                .chain(SHARED_REASONING_COMPONENTS)
                .find(|(key, _)| *key == name)
                .map(|(_, text)| text.to_string())
                .unwrap_or_else(|| REASONING_PLACEHOLDER_FALLBACK.to_string()),
        })
        .into_owned()
}

fn add_metacognitive_scaffolding(mut prompt: String, analysis: &ComplexityAnalysis) -> String {
    if analysis.metacognitive_support == MetacognitiveSupport::High {
        let skills: Vec<&str> = analysis.thinking_skills.iter().map(|s| s.as_str()).collect();
        prompt.push_str(&METACOGNITIVE_GUIDANCE.replacen("{skills}", &skills.join(", "), 1));
    }
    if analysis.scaffolding_needed {
        prompt.push_str(THINKING_TOOLS);
    }
    prompt
}

pub fn generate_chain_of_thought(
    subject: &str,
    query: &str,
    level: &str,
    default_grade: u64,
) -> Result<GeneratedPrompt, AppError> {
    let query = require_query(query)?;
    let normalized = normalize_subject(subject);
    let framework = framework_for(&normalized)
        .ok_or_else(|| AppError::SubjectNotFound(subject.to_string()))?;

    let complexity = analyze_reasoning_complexity(query, level, default_grade);
    let prompt = add_metacognitive_scaffolding(fill_framework(&framework, query, level), &complexity);

    info!(
        subject = %normalized,
        cognitive_level = ?complexity.cognitive_level,
        chain_depth = complexity.chain_depth,
        "Chain-of-thought prompt generated"
    );

    let mut generated = build_prompt(
        prompt,
        normalized,
        query,
        level,
        Technique::ChainOfThought,
        Vec::new(),
    );
    generated.metadata.reasoning = Some(ReasoningAnalysis {
        complexity,
        reasoning_stages: framework.stages.iter().map(|s| s.to_string()).collect(),
    });
    Ok(generated)
}
