use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only analysis pipeline; owns the lexicon.
    pub analyzer: Arc<Analyzer>,
    pub config: Config,
}
