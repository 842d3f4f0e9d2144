//! Content quality: parse rate, quantification, repetition and grammar.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::LexiconStore;
use crate::models::score::{ContentDetails, SubScore};
use crate::scoring::{sub_score, IssueRule, CONTENT_WEIGHTS};
use crate::text::{count_term_lower, non_empty_lines, words};

const PARSE_RATE_FLOOR: u32 = 30;
const GRAMMAR_BASE: u32 = 95;
const GRAMMAR_FLOOR: u32 = 60;
const MISSPELLING_PENALTY: u32 = 5;

/// Words seen more than this many times count as repeated.
const REPEAT_LIMIT: usize = 3;
/// Only words at least this long take part in the repetition ratio.
const MIN_REPEAT_WORD_LEN: usize = 4;

const QUANTIFICATION_BUCKETS: &[(usize, u32)] = &[(8, 95), (6, 85), (4, 75), (2, 60), (1, 40)];
const QUANTIFICATION_NONE: u32 = 20;

/// Upper bound of the repeated-word ratio for each score.
const REPETITION_BUCKETS: &[(f64, u32)] = &[(0.05, 95), (0.10, 85), (0.15, 70), (0.25, 55)];
const REPETITION_WORST: u32 = 40;
const REPETITION_NO_WORDS: u32 = 50;

const REPETITION_STOPWORDS: &[&str] = &[
    "with", "from", "that", "this", "have", "been", "were", "will", "into", "using", "their",
    "which", "also", "such", "through", "over", "more", "than", "them", "they", "your",
];

pub const RULES: &[IssueRule] = &[
    IssueRule {
        component: "parseRate",
        below: 80,
        message: "Low ATS parse rate: simplify formatting and remove tables, graphics or unusual characters",
    },
    IssueRule {
        component: "quantification",
        below: 60,
        message: "Few quantified achievements: add numbers, percentages or measurable outcomes",
    },
    IssueRule {
        component: "repetition",
        below: 70,
        message: "Repetitive wording: vary the words used across bullet points",
    },
    IssueRule {
        component: "grammar",
        below: 85,
        message: "Spelling or punctuation issues detected: proofread the résumé",
    },
];

static NON_ASCII_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x00-\x7F]{3,}").expect("valid non-ascii regex"));

static QUANTIFIER_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // percentages
        r"\d+(?:\.\d+)?\s*%",
        // currency
        r"(?i)(?:[$€£₹]\s?\d[\d,]*(?:\.\d+)?|\b\d[\d,]*(?:\.\d+)?\s?(?:usd|inr|rs\.?|dollars|lakhs?|crores?)\b)",
        // durations
        r"(?i)\b\d+\+?\s*(?:years?|months?|weeks?|days?|hours?|hrs)\b",
        // scale nouns
        r"(?i)\b\d[\d,]*\+?\s*(?:k|m|users|customers|clients|members|students|people|teams?|downloads|requests|transactions|records|projects)\b",
        // achievement verb followed by a number
        r"(?i)\b(?:increased|decreased|reduced|improved|grew|boosted|saved|cut|generated|raised|achieved|delivered|managed|led)\b[^.\n\d]{0,40}\d",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid quantifier regex"))
    .collect()
});

static DOUBLE_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S {2,}\S").expect("valid double space regex"));

static DOUBLE_PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[,;:!?]{2,}|[,;:]\.|\.[,;:]").expect("valid double punctuation regex")
});

static SPACE_BEFORE_PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)\w +[,.;:!?](?:\s|$)").expect("valid space before punctuation regex")
});

pub fn score(lexicon: &LexiconStore, text: &str) -> SubScore<ContentDetails> {
    let quantified_hits = quantified_hits(text);
    let repeated_word_ratio = repeated_word_ratio(text);
    let misspellings = misspellings(lexicon, text);

    let details = ContentDetails {
        parse_rate: parse_rate(text),
        quantification: quantification_score(quantified_hits),
        repetition: repeated_word_ratio.map_or(REPETITION_NO_WORDS, repetition_score),
        grammar: grammar_score(text, lexicon),
        quantified_hits,
        repeated_word_ratio: repeated_word_ratio.unwrap_or(0.0),
        misspellings,
    };

    let extra = if details.misspellings.is_empty() {
        Vec::new()
    } else {
        vec![format!(
            "Possible misspellings: {}",
            details.misspellings.join(", ")
        )]
    };

    sub_score(details, CONTENT_WEIGHTS, RULES, extra)
}

fn is_box_drawing(c: char) -> bool {
    ('\u{2500}'..='\u{259F}').contains(&c)
}

/// Estimated share of the text an ATS would parse cleanly.
pub fn parse_rate(text: &str) -> u32 {
    let mut penalty = 0u32;

    let box_glyphs = text.chars().filter(|c| is_box_drawing(*c)).count() as u32;
    penalty += (box_glyphs * 5).min(20);

    let non_ascii_runs = NON_ASCII_RUN_RE.find_iter(text).count() as u32;
    penalty += (non_ascii_runs * 5).min(20);

    let length = text.trim().chars().count();
    penalty += match length {
        l if l < 200 => 30,
        l if l < 500 => 15,
        l if l > 15_000 => 15,
        _ => 0,
    };

    if non_empty_lines(text).len() < 5 {
        penalty += 15;
    }

    100u32.saturating_sub(penalty).max(PARSE_RATE_FLOOR)
}

pub fn quantified_hits(text: &str) -> usize {
    QUANTIFIER_RES.iter().map(|re| re.find_iter(text).count()).sum()
}

fn quantification_score(hits: usize) -> u32 {
    QUANTIFICATION_BUCKETS
        .iter()
        .find(|(min, _)| hits >= *min)
        .map_or(QUANTIFICATION_NONE, |(_, score)| *score)
}

/// Distinct words used more than [`REPEAT_LIMIT`] times over all distinct words.
///
/// `None` when the text has no qualifying words.
pub fn repeated_word_ratio(text: &str) -> Option<f64> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in words(text) {
        if word.chars().count() >= MIN_REPEAT_WORD_LEN
            && !REPETITION_STOPWORDS.contains(&word.as_str())
        {
            *counts.entry(word).or_insert(0) += 1;
        }
    }
    if counts.is_empty() {
        return None;
    }
    let repeated = counts.values().filter(|&&n| n > REPEAT_LIMIT).count();
    Some(repeated as f64 / counts.len() as f64)
}

fn repetition_score(ratio: f64) -> u32 {
    REPETITION_BUCKETS
        .iter()
        .find(|(max, _)| ratio <= *max)
        .map_or(REPETITION_WORST, |(_, score)| *score)
}

/// Known misspellings present in the text, in lexicon order.
fn misspellings(lexicon: &LexiconStore, text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    lexicon
        .misspellings()
        .iter()
        .filter(|m| count_term_lower(&lower, &m.to_lowercase()) > 0)
        .cloned()
        .collect()
}

fn grammar_score(text: &str, lexicon: &LexiconStore) -> u32 {
    let lower = text.to_lowercase();
    let misspelling_hits: usize = lexicon
        .misspellings()
        .iter()
        .map(|m| count_term_lower(&lower, &m.to_lowercase()))
        .sum();

    let capped = |re: &Regex| (re.find_iter(text).count() as u32 * 2).min(10);
    let penalty = misspelling_hits as u32 * MISSPELLING_PENALTY
        + capped(&DOUBLE_SPACE_RE)
        + capped(&DOUBLE_PUNCT_RE)
        + capped(&SPACE_BEFORE_PUNCT_RE);

    GRAMMAR_BASE.saturating_sub(penalty).max(GRAMMAR_FLOOR)
}
