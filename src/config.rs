use std::env;

use anyhow::{Context, Result};

use crate::analysis::extract::DEFAULT_CONTEXT_CHARS;
use crate::analysis::feature::DEFAULT_MAX_QUOTES_PER_FEATURE;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// take precedence over these values.
pub struct Config {
    /// Characters of context captured on each side of a match
    /// (KANOSCOPE_CONTEXT_CHARS)
    pub context_chars: usize,
    /// Mentions kept per feature per source (KANOSCOPE_MAX_QUOTES)
    pub max_quotes_per_feature: usize,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// analyzer defaults. A set-but-unparseable variable is an error rather
    /// than a silent fallback.
    pub fn load() -> Result<Self> {
        Ok(Self {
            context_chars: usize_env("KANOSCOPE_CONTEXT_CHARS", DEFAULT_CONTEXT_CHARS)?,
            max_quotes_per_feature: usize_env("KANOSCOPE_MAX_QUOTES", DEFAULT_MAX_QUOTES_PER_FEATURE)?,
        })
    }
}

fn usize_env(name: &str, default: usize) -> Result<usize> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{name} must be a non-negative integer, got '{value}'")),
        Err(_) => Ok(default),
    }
}
