use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::selection::scoring::ScoringWeights;
use crate::selection::selector::SelectionConfig;

/// Level used when the caller supplies none.
pub const DEFAULT_STUDENT_LEVEL: &str = "High School";

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub library_path: Option<PathBuf>,
    pub default_level: String,
    pub selection: SelectionConfig,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_path: None,
            default_level: DEFAULT_STUDENT_LEVEL.to_string(),
            selection: SelectionConfig::default(),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ScoringWeights::default();

        let weights = ScoringWeights {
            level_match: parse_weight(&lookup, "TUTOR_WEIGHT_LEVEL", defaults.level_match)?,
            concept_relevance: parse_weight(
                &lookup,
                "TUTOR_WEIGHT_CONCEPT",
                defaults.concept_relevance,
            )?,
            query_overlap: parse_weight(&lookup, "TUTOR_WEIGHT_QUERY", defaults.query_overlap)?,
            grade_proximity: parse_weight(&lookup, "TUTOR_WEIGHT_GRADE", defaults.grade_proximity)?,
            grade_step_penalty: parse_weight(
                &lookup,
                "TUTOR_GRADE_STEP_PENALTY",
                defaults.grade_step_penalty,
            )?,
            default_grade: defaults.default_grade,
        };

        let top_k = match lookup("TUTOR_TOP_K") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .context("TUTOR_TOP_K must be a positive integer")?,
            None => SelectionConfig::default().top_k,
        };
        if top_k == 0 {
            bail!("TUTOR_TOP_K must be at least 1");
        }

        let default_level = lookup("TUTOR_DEFAULT_LEVEL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_STUDENT_LEVEL.to_string());

        Ok(Config {
            library_path: lookup("TUTOR_LIBRARY_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            default_level,
            selection: SelectionConfig { weights, top_k },
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// `tracing_subscriber` filter directives. `verbose` replaces any directive for
    /// this crate with `debug`, keeping the rest of `RUST_LOG`.
    pub fn log_directives(&self, verbose: bool) -> String {
        if !verbose {
            return self.rust_log.clone();
        }
        let krate = env!("CARGO_PKG_NAME");
        let crate_prefix = format!("{krate}=");
        let verbose_directive = format!("{krate}=debug");
        let mut directives: Vec<&str> = self
            .rust_log
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty() && *d != krate && !d.starts_with(&crate_prefix))
            .collect();
        directives.push(&verbose_directive);
        directives.join(",")
    }

    /// Returns `level` unless it is missing or blank, in which case the configured default.
    pub fn resolve_level(&self, level: Option<&str>) -> String {
        match level.map(str::trim) {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => self.default_level.clone(),
        }
    }
}

fn parse_weight<F>(lookup: &F, key: &str, default: f64) -> Result<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("{key} must be a number, got '{raw}'"))?;
    if !value.is_finite() || value < 0.0 {
        bail!("{key} must be a non-negative finite number, got {value}");
    }
    Ok(value)
}
