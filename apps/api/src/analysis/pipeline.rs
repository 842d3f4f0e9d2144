//! Analysis pipeline: role match, extraction, scoring and synthesis in sequence.
//!
//! The pipeline is synchronous and holds no mutable state; one `Analyzer` is
//! shared by every request behind an `Arc`.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::analysis::role_matcher::RoleMatcher;
use crate::extraction::extract;
use crate::lexicon::LexiconStore;
use crate::models::analysis::{AnalysisResult, Identity};
use crate::scoring::{keyword_gaps, Scorer};
use crate::synthesis::{KeywordInjection, Synthesizer};

#[derive(Debug, Clone)]
pub struct Analyzer {
    lexicon: Arc<LexiconStore>,
    injection: KeywordInjection,
}

impl Analyzer {
    pub fn new(lexicon: Arc<LexiconStore>, injection: KeywordInjection) -> Self {
        Self { lexicon, injection }
    }

    pub fn lexicon(&self) -> &LexiconStore {
        &self.lexicon
    }

    /// Runs the full analysis. Never fails: missing fields degrade to defaults
    /// and an unmatched role selects the generic branches.
    pub fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
        identity: &Identity,
    ) -> AnalysisResult {
        let lexicon = self.lexicon.as_ref();

        let role = RoleMatcher::new(lexicon).match_role(job_description);
        match role {
            Some(role) => debug!(role = %role.role_name, "role matched"),
            None => warn!("no role cleared the relevance threshold, using generic templates"),
        }

        let (mut personal_info, sections) = extract(lexicon, resume_text);
        if personal_info.name.is_empty() {
            personal_info.name = identity.name.trim().to_string();
        }
        if personal_info.email.is_empty() {
            personal_info.email = identity.email.trim().to_string();
        }

        let score = Scorer::new(lexicon).score(resume_text, job_description, &sections);

        let gaps = keyword_gaps(lexicon, resume_text, job_description);
        debug!(
            matched = gaps.matched.len(),
            missing = gaps.missing.len(),
            "keyword gaps"
        );

        let synthesis = Synthesizer::new(lexicon, self.injection).synthesize(
            &personal_info,
            &sections,
            role,
            &gaps.missing,
        );

        info!(
            role = role.map_or("general", |r| r.role_name.as_str()),
            overall = score.overall,
            sections = sections.sections().len(),
            issues = score.all_issues().len(),
            "analysis complete"
        );

        AnalysisResult {
            role: role.cloned(),
            personal_info,
            sections,
            score,
            generated_resume: synthesis.resume,
            cover_letter: synthesis.cover_letter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Section;

    const SCENARIO_RESUME: &str =
        "John Smith\njohn@x.com\nSKILLS\nPython, React\nEDUCATION\nB.Tech in CS 2020, 8.5 CGPA";
    const SCENARIO_JD: &str = "Senior Software Engineer needing Python and React";

    const RICH_RESUME: &str = "\
Aisha Khan
aisha.khan@outlook.com | (555) 123-4567 | Austin, TX
linkedin.com/in/aisha-khan | github.com/aishak
SUMMARY
Data-focused engineer who enjoys turning messy data into decisions.
EDUCATION
M.Tech in Data Science, IIT Madras, 9.1 CGPA
B.Tech in Information Technology, Anna University, 82%
SKILLS
Python, SQL, Pandas, Tableau, Excel, Communication
INTERNSHIPS
Data Analyst Intern - Freshworks (May 2023 - Jul 2023)
• Analyzed churn for 20,000 customers and reduced churn by 12%
• Dashboards for the sales leadership team
PROJECTS
Retail Sales Forecast
• Forecasting model for weekly demand across 40 stores
CERTIFICATIONS
• Google Data Analytics Certificate
";

    const ANALYST_JD: &str = "We are hiring a Data Analyst to build dashboards in Tableau \
                              and Power BI, write SQL, model data in Python and R, and \
                              communicate insights. Statistics and Excel required.";

    fn analyzer() -> Analyzer {
        Analyzer::new(
            Arc::new(LexiconStore::builtin().unwrap()),
            KeywordInjection::FirstMissing,
        )
    }

    #[test]
    fn test_scenario_role_identity_and_tailoring() {
        let result = analyzer().analyze(SCENARIO_RESUME, SCENARIO_JD, &Identity::default());
        assert_eq!(result.role.unwrap().role_name, "Software Engineer");
        assert_eq!(result.personal_info.name, "John Smith");
        assert_eq!(result.personal_info.email, "john@x.com");
        assert!(result.score.tailoring.details.hard_skills > 0);
    }

    #[test]
    fn test_scenario_no_email_or_phone() {
        let resume = "Alex Morgan\nSKILLS\nPython, Docker\nPROJECTS\nInventory tracker";
        let result = analyzer().analyze(resume, SCENARIO_JD, &Identity::default());
        assert_eq!(result.score.sections.details.contact_info.score, 0);
        assert_eq!(result.score.ats_essentials.details.email, 0);
    }

    #[test]
    fn test_scenario_generic_role() {
        let jd = "We need a friendly baker to prepare bread and pastries every morning.";
        let lexicon = LexiconStore::builtin().unwrap();
        let result = analyzer().analyze(RICH_RESUME, jd, &Identity::default());
        assert!(result.role.is_none());
        for role in lexicon.roles() {
            assert!(!result.cover_letter.contains(&role.role_name));
        }
        let objective = result
            .generated_resume
            .split("OBJECTIVE\n")
            .nth(1)
            .and_then(|rest| rest.lines().next())
            .unwrap();
        assert!(objective.contains("seeking an opportunity"));
    }

    #[test]
    fn test_scenario_short_text_parse_rate() {
        let resume = "Sam Lee\nsam@mail.com\nSKILLS\nJava, Spring Boot, MySQL\nPROJECTS\nLibrary app for campus";
        assert!(resume.len() < 110);
        let result = analyzer().analyze(resume, SCENARIO_JD, &Identity::default());
        assert!(result.score.content.details.parse_rate <= 80);
        assert!(result
            .score
            .content
            .issues
            .iter()
            .any(|i| i.starts_with("Low ATS parse rate")));
    }

    #[test]
    fn test_determinism() {
        let analyzer = analyzer();
        let a = analyzer.analyze(RICH_RESUME, ANALYST_JD, &Identity::default());
        let b = analyzer.analyze(RICH_RESUME, ANALYST_JD, &Identity::default());
        assert_eq!(a.score, b.score);
        assert_eq!(a.generated_resume, b.generated_resume);
        assert_eq!(a.cover_letter, b.cover_letter);
    }

    #[test]
    fn test_seeded_injection_is_reproducible() {
        let lexicon = Arc::new(LexiconStore::builtin().unwrap());
        let seeded = Analyzer::new(lexicon, KeywordInjection::Seeded(2024));
        let a = seeded.analyze(RICH_RESUME, ANALYST_JD, &Identity::default());
        let b = seeded.analyze(RICH_RESUME, ANALYST_JD, &Identity::default());
        assert_eq!(a.generated_resume, b.generated_resume);
    }

    #[test]
    fn test_score_bounds_and_overall_formula() {
        let analyzer = analyzer();
        for (resume, jd) in [
            (RICH_RESUME, ANALYST_JD),
            (SCENARIO_RESUME, SCENARIO_JD),
            ("", ""),
            ("♦♦♦ ★★★ \u{FFFD}", "Rust"),
        ] {
            let score = analyzer.analyze(resume, jd, &Identity::default()).score;
            let sum: u32 = score.sub_scores().iter().map(|(_, s)| *s).sum();
            assert!(score.sub_scores().iter().all(|(_, s)| *s <= 100));
            assert!(score.overall <= 100);
            assert_eq!(score.overall, (f64::from(sum) * 0.25).round() as u32);
        }
    }

    #[test]
    fn test_projects_omitted_when_absent() {
        let resume = "Nina Park\nnina@mail.com\nSKILLS\nFigma, Wireframing\nEDUCATION\nB.Des, NID, 8.0 CGPA";
        let result = analyzer().analyze(resume, "UI/UX Designer", &Identity::default());
        assert!(!result.sections.has(Section::Projects));
        assert!(!result.generated_resume.contains("PROJECTS"));
    }

    #[test]
    fn test_round_trip_section_set() {
        let analyzer = analyzer();
        let first = analyzer.analyze(RICH_RESUME, ANALYST_JD, &Identity::default());
        let again = analyzer.analyze(&first.generated_resume, ANALYST_JD, &Identity::default());
        assert_eq!(again.sections.sections(), first.sections.sections());
    }

    #[test]
    fn test_identity_fills_missing_fields() {
        let identity = Identity {
            name: "Taylor Reed".to_string(),
            email: "taylor@reed.dev".to_string(),
        };
        let result = analyzer().analyze("skills\npython", "", &identity);
        assert_eq!(result.personal_info.name, "Taylor Reed");
        assert_eq!(result.personal_info.email, "taylor@reed.dev");
        assert!(result.cover_letter.contains("Taylor Reed"));

        let own = analyzer().analyze(SCENARIO_RESUME, "", &identity);
        assert_eq!(own.personal_info.name, "John Smith");
    }

    #[test]
    fn test_leading_header_is_not_a_name() {
        let identity = Identity {
            name: "Taylor Reed".to_string(),
            email: String::new(),
        };
        let result = analyzer().analyze("Technical Skills\nPython, Rust", "", &identity);
        assert_eq!(result.personal_info.name, "Taylor Reed");
        assert!(result.generated_resume.starts_with("Taylor Reed"));
    }

    #[test]
    fn test_skill_names_stay_out_of_contact_line() {
        let text = "Jane Doe\njane@mail.com\nSKILLS\nReact, Node.js, Socket.io";
        let result = analyzer().analyze(text, "", &Identity::default());
        assert_eq!(result.personal_info.links.portfolio, None);
        assert_eq!(result.score.ats_essentials.details.hyperlinks, 0);
        let contact_line = result.generated_resume.lines().nth(1).unwrap_or_default();
        assert_eq!(contact_line, "jane@mail.com");
    }
}
