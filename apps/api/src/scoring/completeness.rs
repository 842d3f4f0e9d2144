//! Section completeness: essential résumé sections and contact fields.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::patterns::{find_phone, EMAIL_RE, LINKEDIN_RE};
use crate::models::resume::{Section, SectionMap};
use crate::models::score::{Coverage, SectionsDetails, SubScore};
use crate::scoring::{sub_score, IssueRule, SECTIONS_WEIGHTS};
use crate::text::contains_term_lower;

type Probe = fn(&str, &SectionMap) -> bool;

/// Canonical sections every résumé should carry.
const ESSENTIAL_SECTIONS: &[(&str, Probe)] = &[
    ("Contact", has_contact),
    ("Summary", has_summary),
    ("Experience", has_experience),
    ("Education", has_education),
    ("Skills", has_skills),
    ("Projects", has_projects),
];

type FieldProbe = fn(&str) -> bool;

const CONTACT_FIELDS: &[(&str, FieldProbe)] = &[
    ("Email", has_email),
    ("Phone", has_phone),
    ("LinkedIn", has_linkedin),
    ("Location", has_location),
];

pub const RULES: &[IssueRule] = &[
    IssueRule {
        component: "essentialSections",
        below: 50,
        message: "Résumé structure is incomplete: use standard section headers",
    },
    IssueRule {
        component: "contactInfo",
        below: 50,
        message: "Contact details are sparse: add email, phone, LinkedIn and location",
    },
];

/// A labelled location line, or "City, ST" / "City, Country".
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)(?i:\b(?:location|address|city|based in)\s*[:\-])|\b[A-Z][a-z]+(?:\s[A-Z][a-z]+)?,\s*(?:[A-Z]{2}\b|India|USA|United States|UK|United Kingdom|Canada|Germany|Australia|Singapore|UAE)",
    )
    .expect("valid location regex")
});

fn has_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

fn has_phone(text: &str) -> bool {
    find_phone(text).is_some()
}

fn has_linkedin(text: &str) -> bool {
    LINKEDIN_RE.is_match(text) || text.to_lowercase().contains("linkedin")
}

fn has_location(text: &str) -> bool {
    LOCATION_RE.is_match(text)
}

fn mentions(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| contains_term_lower(&lower, k))
}

fn has_contact(text: &str, _: &SectionMap) -> bool {
    has_email(text) || has_phone(text) || mentions(text, &["contact"])
}

fn has_summary(text: &str, sections: &SectionMap) -> bool {
    sections.has(Section::Objective)
        || mentions(text, &["summary", "objective", "profile", "about me"])
}

fn has_experience(text: &str, sections: &SectionMap) -> bool {
    sections.has(Section::Experience)
        || sections.has(Section::Internships)
        || mentions(text, &["experience", "internship", "internships", "employment"])
}

fn has_education(text: &str, sections: &SectionMap) -> bool {
    sections.has(Section::Education) || mentions(text, &["education"])
}

fn has_skills(text: &str, sections: &SectionMap) -> bool {
    sections.has(Section::Skills) || mentions(text, &["skills", "technical skills"])
}

fn has_projects(text: &str, sections: &SectionMap) -> bool {
    sections.has(Section::Projects) || mentions(text, &["project", "projects"])
}

fn coverage<'a>(checks: impl Iterator<Item = (&'a str, bool)>) -> Coverage {
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for (name, present) in checks {
        if present {
            found.push(name.to_string());
        } else {
            missing.push(name.to_string());
        }
    }
    let total = found.len() + missing.len();
    let score = if total == 0 {
        0
    } else {
        (found.len() as f64 / total as f64 * 100.0).round() as u32
    };
    Coverage {
        score,
        found,
        missing,
    }
}

pub fn score(text: &str, sections: &SectionMap) -> SubScore<SectionsDetails> {
    let essential_sections = coverage(
        ESSENTIAL_SECTIONS
            .iter()
            .map(|(name, probe)| (*name, probe(text, sections))),
    );
    let contact_info = coverage(
        CONTACT_FIELDS
            .iter()
            .map(|(name, probe)| (*name, probe(text))),
    );

    let extra = essential_sections
        .missing
        .iter()
        .map(|s| format!("Missing essential section: {s}"))
        .chain(
            contact_info
                .missing
                .iter()
                .map(|f| format!("Missing contact information: {f}")),
        )
        .collect();

    let details = SectionsDetails {
        essential_sections,
        contact_info,
    };
    sub_score(details, SECTIONS_WEIGHTS, RULES, extra)
}
