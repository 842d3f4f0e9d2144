//! Tailoring: how closely the résumé speaks the job description's vocabulary.
//!
//! Skill matching runs over the lexicon's fixed taxonomies: a skill counts as
//! requested when the job description names it, and as matched when the
//! résumé names it too. When the job description requests no soft skills,
//! the soft-skill score falls back to the résumé's own soft-skill density; a
//! job description without hard skills leaves nothing to match.

use serde::Serialize;

use crate::lexicon::LexiconStore;
use crate::models::score::{SubScore, TailoringDetails};
use crate::scoring::{sub_score, IssueRule, TAILORING_WEIGHTS};
use crate::text::{contains_term_lower, count_term_lower, non_empty_lines};

const SOFT_DENSITY_CREDIT: usize = 20;

const VERB_FLOOR: u32 = 30;
const WEAK_VERB_PENALTY: u32 = 5;

const TITLE_BASE: f64 = 50.0;
const ROLE_TITLE_BONUS: f64 = 25.0;
const TITLE_KEYWORD_BONUS: f64 = 25.0;
/// Lines treated as the résumé's headline block.
const TOP_LINES: usize = 5;

/// Missing skills named in the hard-skill issue.
const MISSING_LISTED: usize = 3;

pub const RULES: &[IssueRule] = &[
    IssueRule {
        component: "softSkills",
        below: 50,
        message: "Highlight more of the soft skills the job description asks for",
    },
    IssueRule {
        component: "actionVerbs",
        below: 60,
        message: "Start bullet points with strong action verbs (Developed, Led, Optimized)",
    },
    IssueRule {
        component: "titleAlignment",
        below: 75,
        message: "Align the headline at the top of the résumé with the target job title",
    },
];

/// Job-description taxonomy skills split by whether the résumé mentions them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordGaps {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordGaps {
    pub fn requested(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Matched share in percent, `None` when the job description requested nothing.
    pub fn match_percentage(&self) -> Option<u32> {
        let total = self.requested();
        (total > 0)
            .then(|| (self.matched.len() as f64 / total as f64 * 100.0).round() as u32)
    }
}

fn gaps_over(taxonomy: &[String], resume_lower: &str, jd_lower: &str) -> KeywordGaps {
    let mut gaps = KeywordGaps::default();
    for skill in taxonomy {
        let key = skill.to_lowercase();
        if !contains_term_lower(jd_lower, &key) {
            continue;
        }
        if contains_term_lower(resume_lower, &key) {
            gaps.matched.push(skill.clone());
        } else {
            gaps.missing.push(skill.clone());
        }
    }
    gaps
}

/// Hard skills the job description names, matched or missing in the résumé,
/// in taxonomy order.
pub fn keyword_gaps(lexicon: &LexiconStore, resume_text: &str, job_description: &str) -> KeywordGaps {
    gaps_over(
        lexicon.hard_skills(),
        &resume_text.to_lowercase(),
        &job_description.to_lowercase(),
    )
}

fn density(taxonomy: &[String], resume_lower: &str, credit: usize) -> u32 {
    let present = taxonomy
        .iter()
        .filter(|s| contains_term_lower(resume_lower, &s.to_lowercase()))
        .count();
    (present * credit).min(100) as u32
}

fn action_verb_score(lexicon: &LexiconStore, resume_lower: &str) -> (u32, usize, usize) {
    let strong_hits: usize = lexicon
        .strong_verbs()
        .iter()
        .map(|v| count_term_lower(resume_lower, &v.to_lowercase()))
        .sum();
    let weak_hits: usize = lexicon
        .weak_verbs()
        .iter()
        .map(|v| count_term_lower(resume_lower, &v.to_lowercase()))
        .sum();

    let taxonomy = lexicon.strong_verbs().len().max(1);
    let base = (strong_hits as f64 / taxonomy as f64 * 100.0).round() as u32;
    let score = base
        .min(100)
        .saturating_sub(weak_hits as u32 * WEAK_VERB_PENALTY)
        .max(VERB_FLOOR);
    (score, strong_hits, weak_hits)
}

fn title_alignment(lexicon: &LexiconStore, resume_text: &str, jd_lower: &str) -> u32 {
    let top = non_empty_lines(resume_text)
        .into_iter()
        .take(TOP_LINES)
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase();

    let mut score = TITLE_BASE;

    let role_in_top = lexicon
        .roles()
        .iter()
        .map(|r| r.key())
        .any(|key| jd_lower.contains(&key) && top.contains(&key));
    if role_in_top {
        score += ROLE_TITLE_BONUS;
    }

    let requested: Vec<String> = lexicon
        .title_keywords()
        .iter()
        .map(|k| k.to_lowercase())
        .filter(|k| contains_term_lower(jd_lower, k))
        .collect();
    if !requested.is_empty() {
        let found = requested
            .iter()
            .filter(|k| contains_term_lower(&top, k))
            .count();
        score += TITLE_KEYWORD_BONUS * found as f64 / requested.len() as f64;
    }

    score.round().min(100.0) as u32
}

pub fn score(
    lexicon: &LexiconStore,
    resume_text: &str,
    job_description: &str,
) -> SubScore<TailoringDetails> {
    let resume_lower = resume_text.to_lowercase();
    let jd_lower = job_description.to_lowercase();

    let hard = gaps_over(lexicon.hard_skills(), &resume_lower, &jd_lower);
    let soft = gaps_over(lexicon.soft_skills(), &resume_lower, &jd_lower);
    let (action_verbs, strong_verb_hits, weak_verb_hits) =
        action_verb_score(lexicon, &resume_lower);

    let details = TailoringDetails {
        hard_skills: hard.match_percentage().unwrap_or(0),
        soft_skills: soft.match_percentage().unwrap_or_else(|| {
            density(lexicon.soft_skills(), &resume_lower, SOFT_DENSITY_CREDIT)
        }),
        action_verbs,
        title_alignment: title_alignment(lexicon, resume_text, &jd_lower),
        matched_keywords: hard.matched,
        missing_keywords: hard.missing,
        strong_verb_hits,
        weak_verb_hits,
    };

    let mut extra = Vec::new();
    if !details.missing_keywords.is_empty() {
        let listed: Vec<&str> = details
            .missing_keywords
            .iter()
            .take(MISSING_LISTED)
            .map(String::as_str)
            .collect();
        extra.push(format!(
            "Missing key skills from the job description: {}",
            listed.join(", ")
        ));
    }
    if weak_verb_hits > 0 {
        extra.push(
            "Replace weak phrases such as \"responsible for\" or \"helped\" with action verbs"
                .to_string(),
        );
    }

    sub_score(details, TAILORING_WEIGHTS, RULES, extra)
}
