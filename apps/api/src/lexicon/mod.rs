//! Lexicon Store: immutable taxonomies consulted by every analysis stage.
//!
//! Built once at startup from a [`LexiconData`] document (the built-in one or a
//! JSON file via [`loader`]) and shared read-only behind an `Arc`.

pub mod builtin;
pub mod loader;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerLevel {
    Junior,
    Mid,
    Senior,
    Leadership,
}

/// A named job-role template used for classification and tailoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub domain: String,
    pub role_name: String,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub ats_keywords: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    pub career_level: CareerLevel,
    #[serde(default)]
    pub sample_project: String,
}

impl RoleProfile {
    /// Lookup key: the lowercase role name.
    pub fn key(&self) -> String {
        self.role_name.trim().to_lowercase()
    }

    /// Number of keywords the role matcher weighs.
    pub fn keyword_count(&self) -> usize {
        self.technical_skills.len() + self.ats_keywords.len() + self.soft_skills.len()
    }
}

/// One skill bucket used when rendering the SKILLS section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Header synonyms that open a canonical section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionHeaders {
    pub section: Section,
    /// Word-start stems, e.g. "skill" matches "Skills" and "Skillset".
    pub keywords: Vec<String>,
}

/// Serializable lexicon document. Lists are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconData {
    pub roles: Vec<RoleProfile>,
    pub hard_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub strong_verbs: Vec<String>,
    #[serde(default)]
    pub weak_verbs: Vec<String>,
    #[serde(default)]
    pub misspellings: Vec<String>,
    #[serde(default)]
    pub unprofessional_email_terms: Vec<String>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub section_headers: Vec<SectionHeaders>,
    #[serde(default)]
    pub title_keywords: Vec<String>,
}

/// Validated, immutable lexicon.
#[derive(Debug, Clone)]
pub struct LexiconStore {
    roles: Vec<RoleProfile>,
    role_index: HashMap<String, usize>,
    hard_skills: Vec<String>,
    soft_skills: Vec<String>,
    strong_verbs: Vec<String>,
    weak_verbs: Vec<String>,
    misspellings: Vec<String>,
    unprofessional_email_terms: Vec<String>,
    skill_categories: Vec<SkillCategory>,
    section_headers: Vec<SectionHeaders>,
    title_keywords: Vec<String>,
}

impl LexiconStore {
    /// Validates a lexicon document and freezes it.
    ///
    /// Fails with `MissingLexicon` when there are no roles, a role has no
    /// domain, two roles share a name, or the hard-skill taxonomy is empty.
    pub fn new(data: LexiconData) -> Result<Self, AppError> {
        if data.roles.is_empty() {
            return Err(AppError::MissingLexicon(
                "lexicon defines no roles".to_string(),
            ));
        }

        let mut roles = Vec::with_capacity(data.roles.len());
        let mut role_index = HashMap::new();
        for mut role in data.roles {
            let key = role.key();
            if key.is_empty() {
                return Err(AppError::MissingLexicon(
                    "lexicon contains a role without a name".to_string(),
                ));
            }
            if role.domain.trim().is_empty() {
                return Err(AppError::MissingLexicon(format!(
                    "role '{}' has no domain",
                    role.role_name
                )));
            }
            if role_index.contains_key(&key) {
                return Err(AppError::MissingLexicon(format!(
                    "role '{}' is defined more than once",
                    role.role_name
                )));
            }
            role.technical_skills = dedup(role.technical_skills);
            role.soft_skills = dedup(role.soft_skills);
            role.ats_keywords = dedup(role.ats_keywords);
            role.tools = dedup(role.tools);
            role_index.insert(key, roles.len());
            roles.push(role);
        }

        let hard_skills = dedup(data.hard_skills);
        if hard_skills.is_empty() {
            return Err(AppError::MissingLexicon(
                "lexicon defines no hard skills".to_string(),
            ));
        }

        Ok(Self {
            roles,
            role_index,
            hard_skills,
            soft_skills: dedup(data.soft_skills),
            strong_verbs: dedup(data.strong_verbs),
            weak_verbs: dedup(data.weak_verbs),
            misspellings: dedup(data.misspellings),
            unprofessional_email_terms: dedup(data.unprofessional_email_terms),
            skill_categories: data.skill_categories,
            section_headers: data.section_headers,
            title_keywords: dedup(data.title_keywords),
        })
    }

    /// The built-in lexicon shipped with the crate.
    pub fn builtin() -> Result<Self, AppError> {
        Self::new(LexiconData::builtin())
    }

    /// Roles in insertion order (the role matcher's tie-break order).
    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    /// Case-insensitive lookup by role name.
    pub fn role(&self, name: &str) -> Option<&RoleProfile> {
        self.role_index
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.roles[i])
    }

    pub fn hard_skills(&self) -> &[String] {
        &self.hard_skills
    }

    pub fn soft_skills(&self) -> &[String] {
        &self.soft_skills
    }

    pub fn strong_verbs(&self) -> &[String] {
        &self.strong_verbs
    }

    pub fn weak_verbs(&self) -> &[String] {
        &self.weak_verbs
    }

    pub fn misspellings(&self) -> &[String] {
        &self.misspellings
    }

    pub fn unprofessional_email_terms(&self) -> &[String] {
        &self.unprofessional_email_terms
    }

    pub fn skill_categories(&self) -> &[SkillCategory] {
        &self.skill_categories
    }

    pub fn section_headers(&self) -> &[SectionHeaders] {
        &self.section_headers
    }

    pub fn title_keywords(&self) -> &[String] {
        &self.title_keywords
    }

    /// True if `word` (any case) is exactly one of the strong action verbs.
    pub fn is_strong_verb(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.strong_verbs
            .iter()
            .any(|v| word == v.to_lowercase())
    }
}

/// Trims entries and drops empty or case-insensitive duplicates, keeping first occurrence.
fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .collect()
}
