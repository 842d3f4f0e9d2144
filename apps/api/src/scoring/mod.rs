//! Multi-Factor Scorer: four weighted sub-scores and their overall average.
//!
//! Every sub-score is a weighted sum over the named components of its details
//! struct (see [`Components`]). Weights live in the tables below and issue
//! messages in per-category [`IssueRule`] tables, so each row can be tested on
//! its own.

pub mod ats;
pub mod completeness;
pub mod content;
pub mod tailoring;

use tracing::debug;

use crate::lexicon::LexiconStore;
use crate::models::resume::SectionMap;
use crate::models::score::{Components, ScoreBreakdown, SubScore};

pub use tailoring::{keyword_gaps, KeywordGaps};

pub const CONTENT_WEIGHTS: &[(&str, f64)] = &[
    ("parseRate", 0.40),
    ("quantification", 0.30),
    ("repetition", 0.15),
    ("grammar", 0.15),
];

pub const SECTIONS_WEIGHTS: &[(&str, f64)] = &[
    ("essentialSections", 0.70),
    ("contactInfo", 0.30),
];

pub const ATS_WEIGHTS: &[(&str, f64)] = &[
    ("fileFormat", 0.25),
    ("design", 0.25),
    ("email", 0.25),
    ("hyperlinks", 0.25),
];

pub const TAILORING_WEIGHTS: &[(&str, f64)] = &[
    ("hardSkills", 0.40),
    ("softSkills", 0.20),
    ("actionVerbs", 0.20),
    ("titleAlignment", 0.20),
];

pub const OVERALL_WEIGHTS: &[(&str, f64)] = &[
    ("content", 0.25),
    ("sections", 0.25),
    ("ats_essentials", 0.25),
    ("tailoring", 0.25),
];

/// A diagnostic raised when `component` scores below `below`.
///
/// Only the first matching rule per component fires, so stricter rules go first.
#[derive(Debug, Clone, Copy)]
pub struct IssueRule {
    pub component: &'static str,
    pub below: u32,
    pub message: &'static str,
}

/// Σ weight × value over the named components, rounded and clamped to 0..=100.
///
/// Components missing from `weights` contribute nothing.
pub fn weighted_score(components: &[(&str, u32)], weights: &[(&str, f64)]) -> u32 {
    let sum: f64 = weights
        .iter()
        .map(|(name, weight)| {
            components
                .iter()
                .find(|(c, _)| c == name)
                .map_or(0.0, |(_, value)| f64::from(*value) * weight)
        })
        .sum();
    sum.round().clamp(0.0, 100.0) as u32
}

/// Messages of every rule triggered by `components`, in rule order.
pub fn triggered_issues(components: &[(&str, u32)], rules: &[IssueRule]) -> Vec<String> {
    let mut fired: Vec<&str> = Vec::new();
    let mut issues = Vec::new();
    for rule in rules {
        if fired.contains(&rule.component) {
            continue;
        }
        let hit = components
            .iter()
            .any(|(name, value)| *name == rule.component && *value < rule.below);
        if hit {
            fired.push(rule.component);
            issues.push(rule.message.to_string());
        }
    }
    issues
}

/// Assembles a [`SubScore`] from its details, weight table and issue rules.
///
/// `extra` issues carry data-dependent messages and follow the table ones.
pub(crate) fn sub_score<D: Components>(
    details: D,
    weights: &[(&str, f64)],
    rules: &[IssueRule],
    extra: Vec<String>,
) -> SubScore<D> {
    let components = details.components();
    let mut issues = triggered_issues(&components, rules);
    issues.extend(extra);
    SubScore {
        score: weighted_score(&components, weights),
        issues,
        details,
    }
}

pub struct Scorer<'a> {
    lexicon: &'a LexiconStore,
}

impl<'a> Scorer<'a> {
    pub fn new(lexicon: &'a LexiconStore) -> Self {
        Self { lexicon }
    }

    /// Scores `resume_text` against `job_description`. Pure and deterministic.
    pub fn score(
        &self,
        resume_text: &str,
        job_description: &str,
        sections: &SectionMap,
    ) -> ScoreBreakdown {
        let content = content::score(self.lexicon, resume_text);
        let sections = completeness::score(resume_text, sections);
        let ats_essentials = ats::score(self.lexicon, resume_text);
        let tailoring = tailoring::score(self.lexicon, resume_text, job_description);

        let mut breakdown = ScoreBreakdown {
            content,
            sections,
            ats_essentials,
            tailoring,
            overall: 0,
        };
        breakdown.overall = weighted_score(&breakdown.sub_scores(), OVERALL_WEIGHTS);

        debug!(
            content = breakdown.content.score,
            sections = breakdown.sections.score,
            ats_essentials = breakdown.ats_essentials.score,
            tailoring = breakdown.tailoring.score,
            overall = breakdown.overall,
            "scoring complete"
        );
        breakdown
    }
}
