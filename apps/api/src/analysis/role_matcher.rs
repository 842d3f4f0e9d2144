//! Role Matcher: classifies a job description against the lexicon's role templates.
//!
//! Algorithm:
//! 1. A role whose name appears literally in the job description scores 100 and
//!    wins immediately (first such role in lexicon order).
//! 2. Otherwise each role accumulates weighted hits: technical skill +3,
//!    ATS keyword +2, soft skill +1, normalized against `keyword_count × 3`.
//! 3. Roles under [`RELEVANCE_THRESHOLD`] are dropped; the best percentage wins,
//!    ties resolved by lexicon order.

use serde::Serialize;

use crate::lexicon::{LexiconStore, RoleProfile};
use crate::text::contains_term_lower;

/// Minimum match percentage for a role to be considered.
pub const RELEVANCE_THRESHOLD: f64 = 20.0;

const TECHNICAL_WEIGHT: u32 = 3;
const ATS_WEIGHT: u32 = 2;
const SOFT_WEIGHT: u32 = 1;

/// A role that cleared the threshold, with its normalized percentage.
#[derive(Debug, Clone, Serialize)]
pub struct RoleCandidate<'a> {
    pub role: &'a RoleProfile,
    pub percentage: f64,
    pub exact_title_match: bool,
}

pub struct RoleMatcher<'a> {
    lexicon: &'a LexiconStore,
}

impl<'a> RoleMatcher<'a> {
    pub fn new(lexicon: &'a LexiconStore) -> Self {
        Self { lexicon }
    }

    /// Best-matching role, or `None` for the general (role-agnostic) case.
    pub fn match_role(&self, job_description: &str) -> Option<&'a RoleProfile> {
        self.rank(job_description).first().map(|c| c.role)
    }

    /// Every role clearing the threshold, best first.
    ///
    /// A literal title match short-circuits to a single-element list.
    pub fn rank(&self, job_description: &str) -> Vec<RoleCandidate<'a>> {
        let jd = job_description.to_lowercase();
        if jd.trim().is_empty() {
            return Vec::new();
        }

        if let Some(role) = self
            .lexicon
            .roles()
            .iter()
            .find(|r| jd.contains(&r.key()))
        {
            return vec![RoleCandidate {
                role,
                percentage: 100.0,
                exact_title_match: true,
            }];
        }

        let mut candidates: Vec<RoleCandidate<'a>> = self
            .lexicon
            .roles()
            .iter()
            .filter_map(|role| {
                let percentage = keyword_percentage(role, &jd);
                (percentage >= RELEVANCE_THRESHOLD).then_some(RoleCandidate {
                    role,
                    percentage,
                    exact_title_match: false,
                })
            })
            .collect();

        // Stable sort keeps lexicon order among equal percentages.
        candidates.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates
    }
}

/// Weighted keyword hit percentage of `role` against a lowercase job description.
fn keyword_percentage(role: &RoleProfile, jd_lower: &str) -> f64 {
    let total = role.keyword_count();
    if total == 0 {
        return 0.0;
    }

    let hits = |keywords: &[String], weight: u32| -> u32 {
        keywords
            .iter()
            .filter(|k| contains_term_lower(jd_lower, &k.to_lowercase()))
            .count() as u32
            * weight
    };

    let score = hits(&role.technical_skills, TECHNICAL_WEIGHT)
        + hits(&role.ats_keywords, ATS_WEIGHT)
        + hits(&role.soft_skills, SOFT_WEIGHT);

    f64::from(score) / (total as f64 * f64::from(TECHNICAL_WEIGHT)) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{CareerLevel, LexiconData};

    fn store() -> LexiconStore {
        LexiconStore::builtin().unwrap()
    }

    fn role(name: &str, tech: &[&str]) -> RoleProfile {
        RoleProfile {
            domain: "test".to_string(),
            role_name: name.to_string(),
            technical_skills: tech.iter().map(|s| s.to_string()).collect(),
            soft_skills: vec![],
            ats_keywords: vec![],
            tools: vec![],
            career_level: CareerLevel::Mid,
            sample_project: String::new(),
        }
    }

    fn custom_store(roles: Vec<RoleProfile>) -> LexiconStore {
        let mut data = LexiconData::builtin();
        data.roles = roles;
        LexiconStore::new(data).unwrap()
    }

    #[test]
    fn test_literal_role_name_wins() {
        let lexicon = store();
        let matcher = RoleMatcher::new(&lexicon);
        let role = matcher
            .match_role("Senior Software Engineer needing Python and React")
            .unwrap();
        assert_eq!(role.role_name, "Software Engineer");

        let ranked = matcher.rank("We are hiring a DATA ANALYST");
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].exact_title_match);
        assert_eq!(ranked[0].percentage, 100.0);
    }

    #[test]
    fn test_first_literal_match_in_insertion_order() {
        let lexicon = custom_store(vec![role("Analyst", &["SQL"]), role("Data Analyst", &["SQL"])]);
        let matcher = RoleMatcher::new(&lexicon);
        // Both names appear; "Analyst" was inserted first.
        let role = matcher.match_role("Looking for a data analyst").unwrap();
        assert_eq!(role.role_name, "Analyst");
    }

    #[test]
    fn test_keyword_overlap_without_title() {
        let lexicon = store();
        let matcher = RoleMatcher::new(&lexicon);
        let jd = "You will build dashboards and reporting in Tableau and Power BI, \
                  write SQL, clean data in Excel and Python, apply statistics, \
                  and present insights with strong communication and attention to detail.";
        let role = matcher.match_role(jd).unwrap();
        assert_eq!(role.role_name, "Data Analyst");
    }

    #[test]
    fn test_no_taxonomy_keywords_returns_none() {
        let lexicon = store();
        let matcher = RoleMatcher::new(&lexicon);
        assert!(matcher
            .match_role("We need a friendly baker to prepare bread and pastries every morning.")
            .is_none());
        assert!(matcher.match_role("").is_none());
    }

    #[test]
    fn test_below_threshold_discarded() {
        let lexicon = custom_store(vec![role(
            "Widget Maker",
            &["Rust", "Go", "Java", "Kotlin", "Swift", "Scala"],
        )]);
        let matcher = RoleMatcher::new(&lexicon);
        // 1 of 6 technical skills: 3 / 18 = 16.7% < 20%
        assert!(matcher.match_role("Experience with Rust").is_none());
        // 2 of 6: 6 / 18 = 33%
        assert!(matcher.match_role("Experience with Rust and Go").is_some());
    }

    #[test]
    fn test_ties_broken_by_insertion_order() {
        let lexicon = custom_store(vec![
            role("Alpha Role", &["Rust", "Go"]),
            role("Beta Role", &["Rust", "Go"]),
        ]);
        let matcher = RoleMatcher::new(&lexicon);
        let ranked = matcher.rank("Rust and Go");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].role.role_name, "Alpha Role");
        assert_eq!(ranked[0].percentage, ranked[1].percentage);
    }

    #[test]
    fn test_weights_favor_technical_over_soft() {
        let mut tech_heavy = role("Tech Role", &["Rust"]);
        tech_heavy.soft_skills = vec!["Empathy".to_string()];
        let mut soft_heavy = role("Soft Role", &["Haskell"]);
        soft_heavy.soft_skills = vec!["Empathy".to_string()];
        let lexicon = custom_store(vec![soft_heavy, tech_heavy]);
        let matcher = RoleMatcher::new(&lexicon);
        let ranked = matcher.rank("Rust with empathy");
        assert_eq!(ranked[0].role.role_name, "Tech Role");
        // (3 + 1) / (2 * 3) = 66.7%
        assert!((ranked[0].percentage - 66.666).abs() < 0.01);
    }
}
