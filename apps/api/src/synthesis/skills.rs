//! Skill collection and bucketing for the SKILLS section.

use std::collections::HashSet;

use crate::lexicon::LexiconStore;
use crate::models::resume::{Section, SectionMap};
use crate::text::{contains_term_lower, strip_bullet};

/// Skills displayed per bucket.
pub const BUCKET_CAP: usize = 6;

const DEFAULT_BUCKET: &str = "Programming Languages";

/// Longest label accepted before a colon, as in "Frameworks & Tools: React".
const MAX_LABEL_WORDS: usize = 4;

/// Skills listed in the SKILLS section, or taxonomy skills found anywhere in
/// the document when that section is empty. Deduplicated, first spelling wins.
pub fn collect_skills(lexicon: &LexiconStore, sections: &SectionMap) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut skills: Vec<String> = sections
        .lines(Section::Skills)
        .iter()
        .flat_map(|line| split_skill_line(line))
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect();

    if skills.is_empty() {
        let all = Section::ALL
            .iter()
            .flat_map(|s| sections.lines(*s))
            .map(|l| l.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");
        skills = lexicon
            .hard_skills()
            .iter()
            .chain(lexicon.soft_skills())
            .filter(|s| contains_term_lower(&all, &s.to_lowercase()))
            .cloned()
            .collect();
    }
    skills
}

fn split_skill_line(line: &str) -> Vec<String> {
    let line = strip_bullet(line);
    let values = match line.split_once(':') {
        Some((label, rest)) if label.split_whitespace().count() <= MAX_LABEL_WORDS => rest,
        _ => line,
    };
    values
        .split(|c: char| matches!(c, ',' | ';' | '|' | '•'))
        .map(|s| s.trim().trim_end_matches('.').trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `skill` (lowercase) belongs to a bucket keyword.
///
/// Keywords of one or two letters ("c", "r", "go") must match exactly;
/// longer ones match as substrings, so "postgresql" lands on "sql".
fn matches_keyword(skill: &str, keyword: &str) -> bool {
    if keyword.chars().count() <= 2 {
        skill == keyword
    } else {
        skill.contains(keyword)
    }
}

/// Groups skills into the lexicon's buckets in bucket order, dropping empty
/// buckets and capping each at [`BUCKET_CAP`].
pub fn categorize(lexicon: &LexiconStore, skills: &[String]) -> Vec<(String, Vec<String>)> {
    let categories = lexicon.skill_categories();
    if categories.is_empty() {
        let capped: Vec<String> = skills.iter().take(BUCKET_CAP).cloned().collect();
        return if capped.is_empty() {
            Vec::new()
        } else {
            vec![("Skills".to_string(), capped)]
        };
    }

    let default_index = categories
        .iter()
        .position(|c| c.name == DEFAULT_BUCKET)
        .unwrap_or(0);
    let mut buckets: Vec<Vec<String>> = vec![Vec::new(); categories.len()];

    for skill in skills {
        let lower = skill.to_lowercase();
        let index = categories
            .iter()
            .position(|c| {
                c.keywords
                    .iter()
                    .any(|k| matches_keyword(&lower, &k.to_lowercase()))
            })
            .unwrap_or(default_index);
        if buckets[index].len() < BUCKET_CAP {
            buckets[index].push(skill.clone());
        }
    }

    categories
        .iter()
        .zip(buckets)
        .filter(|(_, skills)| !skills.is_empty())
        .map(|(c, skills)| (c.name.clone(), skills))
        .collect()
}
