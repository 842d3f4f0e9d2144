use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::synthesis::KeywordInjection;

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON lexicon file. The built-in lexicon is used when unset.
    pub lexicon_path: Option<PathBuf>,
    /// Seed for random keyword injection. Deterministic injection when unset.
    pub keyword_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let keyword_seed = match var("KEYWORD_SEED").filter(|s| !s.trim().is_empty()) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .context("KEYWORD_SEED must be an unsigned 64-bit integer")?,
            ),
            None => None,
        };

        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            lexicon_path: var("LEXICON_PATH")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            keyword_seed,
        })
    }

    pub fn keyword_injection(&self) -> KeywordInjection {
        match self.keyword_seed {
            Some(seed) => KeywordInjection::Seeded(seed),
            None => KeywordInjection::FirstMissing,
        }
    }
}
