//! Internship and project entries: title line plus bulleted descriptions.
//!
//! Descriptions that do not open with a strong action verb get a default verb,
//! and at most one unused job-description keyword is spliced into each entry.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::lexicon::LexiconStore;
use crate::text::{contains_term, decapitalize, is_bullet, strip_bullet};

/// Non-bullet lines longer than this are descriptions, not titles.
const MAX_TITLE_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Internship,
    Project,
}

impl EntryKind {
    fn default_verb(&self) -> &'static str {
        match self {
            EntryKind::Internship => "Contributed to",
            EntryKind::Project => "Developed",
        }
    }
}

/// How the injected keyword is picked among the unused candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeywordInjection {
    /// First unused keyword in taxonomy order.
    #[default]
    FirstMissing,
    /// Random choice from a generator seeded per synthesis call.
    Seeded(u64),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entry {
    pub title: String,
    pub details: Vec<String>,
}

/// Groups raw section lines into entries.
///
/// A non-bullet line opens a new entry unless it reads like prose (long or
/// ending with a period); everything else is a description of the open entry.
pub fn group_entries(lines: &[String]) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::new();
    for line in lines {
        let text = strip_bullet(line);
        if text.is_empty() {
            continue;
        }
        let is_title = !is_bullet(line)
            && text.chars().count() <= MAX_TITLE_CHARS
            && !text.ends_with('.');
        if is_title {
            entries.push(Entry {
                title: text.to_string(),
                details: Vec::new(),
            });
        } else if let Some(entry) = entries.last_mut() {
            entry.details.push(text.to_string());
        } else {
            entries.push(Entry {
                title: String::new(),
                details: vec![text.to_string()],
            });
        }
    }
    entries
}

/// Keyword picker shared across all entries of one document.
pub struct Injector {
    candidates: Vec<String>,
    rng: Option<StdRng>,
}

impl Injector {
    /// `missing` keywords already present in `lines` are never injected.
    pub fn new(mode: KeywordInjection, missing: &[String], lines: &[&String]) -> Self {
        let candidates = missing
            .iter()
            .filter(|k| !lines.iter().any(|l| contains_term(l, k)))
            .cloned()
            .collect();
        let rng = match mode {
            KeywordInjection::FirstMissing => None,
            KeywordInjection::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
        };
        Self { candidates, rng }
    }

    fn pick(&mut self) -> Option<String> {
        let picked = match self.rng.as_mut() {
            None => self.candidates.first().cloned(),
            Some(rng) => self.candidates.choose(rng).cloned(),
        }?;
        self.candidates.retain(|k| k != &picked);
        Some(picked)
    }

    pub fn is_exhausted(&self) -> bool {
        self.candidates.is_empty()
    }
}

fn starts_with_strong_verb(lexicon: &LexiconStore, text: &str) -> bool {
    text.split_whitespace()
        .next()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .is_some_and(|w| lexicon.is_strong_verb(w))
}

fn with_action_verb(lexicon: &LexiconStore, kind: EntryKind, text: &str) -> String {
    if starts_with_strong_verb(lexicon, text) {
        text.to_string()
    } else {
        format!("{} {}", kind.default_verb(), decapitalize(text))
    }
}

/// Appends " using {keyword}" ahead of any trailing period.
fn append_keyword(line: &str, keyword: &str) -> String {
    match line.strip_suffix('.') {
        Some(stem) => format!("{stem} using {keyword}."),
        None => format!("{line} using {keyword}"),
    }
}

/// Rewrites an entry's descriptions and injects at most one keyword.
///
/// The keyword goes on the first description that mentions none of
/// `relevant`; entries without such a line are left alone.
pub fn rewrite_entry(
    lexicon: &LexiconStore,
    kind: EntryKind,
    entry: &Entry,
    relevant: &[String],
    injector: &mut Injector,
) -> Entry {
    let mut details: Vec<String> = entry
        .details
        .iter()
        .map(|d| with_action_verb(lexicon, kind, d))
        .collect();

    if !injector.is_exhausted() {
        let target = details
            .iter()
            .position(|d| !relevant.iter().any(|k| contains_term(d, k)));
        if let Some(index) = target {
            if let Some(keyword) = injector.pick() {
                details[index] = append_keyword(&details[index], &keyword);
            }
        }
    }

    Entry {
        title: entry.title.clone(),
        details,
    }
}

/// Renders entries as title lines followed by `• ` bullets.
pub fn render_entries(entries: &[Entry]) -> Vec<String> {
    let mut out = Vec::new();
    for entry in entries {
        if !entry.title.is_empty() {
            out.push(entry.title.clone());
        }
        out.extend(entry.details.iter().map(|d| format!("• {d}")));
    }
    out
}
