//! ATS essentials: file-format proxy, design cleanliness, email quality, links.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::patterns::{find_email, portfolio_domains, GITHUB_RE, LINKEDIN_RE, URL_RE};
use crate::lexicon::LexiconStore;
use crate::models::score::{AtsDetails, SubScore};
use crate::scoring::{sub_score, IssueRule, ATS_WEIGHTS};
use crate::text::non_empty_lines;

const LINKEDIN_CREDIT: u32 = 40;
const GITHUB_CREDIT: u32 = 30;
const PORTFOLIO_CREDIT: u32 = 20;
const OTHER_LINK_CREDIT: u32 = 10;

const LONG_LINE_CHARS: f64 = 120.0;
const SHORT_LINE_CHARS: f64 = 15.0;

/// Decorative glyphs ATS parsers tend to mangle. The plain `•` bullet is fine.
const SPECIAL_GLYPHS: &[char] = &[
    '▪', '■', '□', '●', '◦', '○', '►', '▶', '➢', '➤', '➔', '→', '✓', '✔', '✗', '★', '☆',
    '♦', '◆', '◇', '❖', '✦', '✧', '☎', '✉', '⚫', '🔗', '📧', '📱',
];

pub const RULES: &[IssueRule] = &[
    IssueRule {
        component: "fileFormat",
        below: 80,
        message: "Text contains unreadable characters: export the résumé as a text-based PDF or DOCX",
    },
    IssueRule {
        component: "design",
        below: 80,
        message: "Decorative symbols or tables may confuse ATS parsers: use plain bullets and single columns",
    },
    IssueRule {
        component: "email",
        below: 1,
        message: "No email address found",
    },
    IssueRule {
        component: "email",
        below: 80,
        message: "Use a professional email address (firstname.lastname)",
    },
    IssueRule {
        component: "hyperlinks",
        below: 40,
        message: "Add a LinkedIn profile and links to your work (GitHub, portfolio)",
    },
];

static DIGIT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4,}").expect("valid digit run regex"));

pub fn score(lexicon: &LexiconStore, text: &str) -> SubScore<AtsDetails> {
    let special_characters = text
        .chars()
        .filter(|c| SPECIAL_GLYPHS.contains(c) || ('\u{2500}'..='\u{259F}').contains(c))
        .count();
    let average_line_length = average_line_length(text);

    let details = AtsDetails {
        file_format: file_format_score(text),
        design: design_score(special_characters, average_line_length),
        email: email_score(lexicon, text),
        hyperlinks: hyperlink_score(text),
        special_characters,
        average_line_length,
    };
    sub_score(details, ATS_WEIGHTS, RULES, Vec::new())
}

fn file_format_score(text: &str) -> u32 {
    if text.trim().is_empty() {
        return 0;
    }
    let replacement = text.chars().filter(|&c| c == '\u{FFFD}').count() as u32;
    let mut penalty = (replacement * 10).min(40);
    if text
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
    {
        penalty += 20;
    }
    100u32.saturating_sub(penalty)
}

fn average_line_length(text: &str) -> f64 {
    let lines = non_empty_lines(text);
    if lines.is_empty() {
        return 0.0;
    }
    let total: usize = lines.iter().map(|l| l.chars().count()).sum();
    total as f64 / lines.len() as f64
}

fn design_score(special_characters: usize, average_line_length: f64) -> u32 {
    let mut penalty = (special_characters as u32 * 3).min(30);
    if average_line_length > LONG_LINE_CHARS {
        penalty += 20;
    } else if average_line_length > 0.0 && average_line_length < SHORT_LINE_CHARS {
        penalty += 10;
    }
    100u32.saturating_sub(penalty)
}

fn email_score(lexicon: &LexiconStore, text: &str) -> u32 {
    let Some(email) = find_email(text) else {
        return 0;
    };
    let local = email
        .split('@')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    let mut penalty = 0u32;
    if lexicon
        .unprofessional_email_terms()
        .iter()
        .any(|term| local.contains(&term.to_lowercase()))
    {
        penalty += 40;
    }
    if DIGIT_RUN_RE.is_match(&local) {
        penalty += 20;
    }
    100u32.saturating_sub(penalty)
}

fn hyperlink_score(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let is_profile = |url: &str| {
        let url = url.to_lowercase();
        url.contains("linkedin.com") || url.contains("github.com")
    };

    let mut credit = 0;
    if LINKEDIN_RE.is_match(text) {
        credit += LINKEDIN_CREDIT;
    }
    if GITHUB_RE.is_match(text) {
        credit += GITHUB_CREDIT;
    }
    let portfolio_domain = portfolio_domains(text).any(|url| !is_profile(url));
    if lower.contains("portfolio") || portfolio_domain {
        credit += PORTFOLIO_CREDIT;
    }
    if URL_RE
        .find_iter(text)
        .any(|m| m.as_str().to_lowercase().starts_with("https") && !is_profile(m.as_str()))
    {
        credit += OTHER_LINK_CREDIT;
    }
    credit.min(100)
}
