//! File-backed lexicon loading for the service binary.
//!
//! The analysis core only ever sees a constructed [`LexiconStore`]; reading and
//! parsing the document happens here, once, before the first request.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::errors::AppError;
use crate::lexicon::{LexiconData, LexiconStore};

/// Reads a JSON lexicon document from `path` and validates it.
pub fn load_lexicon(path: &Path) -> Result<LexiconStore, AppError> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read lexicon file {}", path.display()))
        .map_err(|e| AppError::MissingLexicon(format!("{e:#}")))?;

    let data: LexiconData = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse lexicon file {}", path.display()))
        .map_err(|e| AppError::MissingLexicon(format!("{e:#}")))?;

    let store = LexiconStore::new(data)?;
    info!(
        "Loaded lexicon from {} ({} roles, {} hard skills)",
        path.display(),
        store.roles().len(),
        store.hard_skills().len()
    );
    Ok(store)
}

/// Loads the lexicon from `path` when given, otherwise the built-in taxonomy.
pub fn load_or_builtin(path: Option<&Path>) -> Result<LexiconStore, AppError> {
    match path {
        Some(p) => load_lexicon(p),
        None => {
            let store = LexiconStore::builtin()?;
            info!("Using built-in lexicon ({} roles)", store.roles().len());
            Ok(store)
        }
    }
}
