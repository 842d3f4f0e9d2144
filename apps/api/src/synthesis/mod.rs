//! Document Synthesizer: renders an ATS-friendly résumé and a cover letter.
//!
//! Output order is fixed: name, contact line, OBJECTIVE, EDUCATION, SKILLS,
//! INTERNSHIPS (or EXPERIENCE), PROJECTS, ACHIEVEMENTS. A section is written
//! only when it has content.

pub mod cover_letter;
pub mod entries;
pub mod objective;
pub mod skills;

use tracing::debug;

use crate::lexicon::{LexiconStore, RoleProfile};
use crate::models::resume::{EducationRecord, PersonalInfo, Section, SectionMap};
use crate::text::strip_bullet;

pub use entries::KeywordInjection;

use cover_letter::LetterContext;
use entries::{group_entries, render_entries, rewrite_entry, Entry, EntryKind, Injector};
use objective::Background;

/// Generated résumé and cover letter.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    pub resume: String,
    pub cover_letter: String,
}

pub struct Synthesizer<'a> {
    lexicon: &'a LexiconStore,
    injection: KeywordInjection,
}

impl<'a> Synthesizer<'a> {
    pub fn new(lexicon: &'a LexiconStore, injection: KeywordInjection) -> Self {
        Self { lexicon, injection }
    }

    /// Renders both documents.
    ///
    /// `missing_keywords` are job-description skills absent from the résumé,
    /// in taxonomy order; they feed keyword injection.
    pub fn synthesize(
        &self,
        info: &PersonalInfo,
        sections: &SectionMap,
        role: Option<&RoleProfile>,
        missing_keywords: &[String],
    ) -> Synthesis {
        let skills = skills::collect_skills(self.lexicon, sections);

        let experience_lines: Vec<String> = sections
            .lines(Section::Internships)
            .iter()
            .chain(sections.lines(Section::Experience))
            .cloned()
            .collect();
        let background = Background::detect(
            !experience_lines.is_empty(),
            sections.has(Section::Projects),
        );

        let all_lines: Vec<&String> = Section::ALL
            .iter()
            .flat_map(|s| sections.lines(*s))
            .collect();
        let mut injector = Injector::new(self.injection, missing_keywords, &all_lines);
        let relevant = self.relevant_keywords(role, missing_keywords);

        let experience = self.rewrite_all(
            EntryKind::Internship,
            &experience_lines,
            &relevant,
            &mut injector,
        );
        let projects = self.rewrite_all(
            EntryKind::Project,
            sections.lines(Section::Projects),
            &relevant,
            &mut injector,
        );

        let mut blocks: Vec<String> = Vec::new();
        let header = header_block(info);
        if !header.is_empty() {
            blocks.push(header);
        }

        blocks.push(block(
            Section::Objective.heading(),
            &[objective::objective(role, &skills, background)],
        ));

        let education = education_lines(&info.education, sections);
        if !education.is_empty() {
            blocks.push(block(Section::Education.heading(), &education));
        }

        let skill_lines: Vec<String> = skills::categorize(self.lexicon, &skills)
            .into_iter()
            .map(|(name, items)| format!("• {}: {}", name, items.join(", ")))
            .collect();
        if !skill_lines.is_empty() {
            blocks.push(block(Section::Skills.heading(), &skill_lines));
        }

        if !experience.is_empty() {
            let heading = if info.has_work_experience {
                Section::Experience.heading()
            } else {
                Section::Internships.heading()
            };
            blocks.push(block(heading, &render_entries(&experience)));
        }

        if !projects.is_empty() {
            blocks.push(block(Section::Projects.heading(), &render_entries(&projects)));
        }

        let achievements: Vec<String> = sections
            .lines(Section::Achievements)
            .iter()
            .map(|l| format!("• {}", strip_bullet(l)))
            .collect();
        if !achievements.is_empty() {
            blocks.push(block(Section::Achievements.heading(), &achievements));
        }

        let first_project = projects
            .iter()
            .map(|p| p.title.as_str())
            .find(|t| !t.is_empty());
        let cover_letter = cover_letter::cover_letter(
            self.lexicon,
            &LetterContext {
                role,
                name: &info.name,
                email: &info.email,
                skills: &skills,
                project: first_project,
            },
        );

        debug!(
            blocks = blocks.len(),
            skills = skills.len(),
            keywords_left = !injector.is_exhausted(),
            "synthesis complete"
        );

        Synthesis {
            resume: blocks.join("\n\n"),
            cover_letter,
        }
    }

    /// Keywords that make a description line count as already tailored.
    fn relevant_keywords(&self, role: Option<&RoleProfile>, missing: &[String]) -> Vec<String> {
        let mut relevant: Vec<String> = missing.to_vec();
        match role {
            Some(role) => {
                relevant.extend(role.technical_skills.iter().cloned());
                relevant.extend(role.ats_keywords.iter().cloned());
            }
            None => relevant.extend(self.lexicon.hard_skills().iter().cloned()),
        }
        relevant
    }

    fn rewrite_all(
        &self,
        kind: EntryKind,
        lines: &[String],
        relevant: &[String],
        injector: &mut Injector,
    ) -> Vec<Entry> {
        group_entries(lines)
            .iter()
            .map(|entry| rewrite_entry(self.lexicon, kind, entry, relevant, injector))
            .collect()
    }
}

fn header_block(info: &PersonalInfo) -> String {
    let mut lines = Vec::new();
    if !info.name.is_empty() {
        lines.push(info.name.clone());
    }
    let contact: Vec<&str> = [
        Some(info.email.as_str()),
        Some(info.phone.as_str()),
        info.links.linkedin.as_deref(),
        info.links.github.as_deref(),
        info.links.portfolio.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .collect();
    if !contact.is_empty() {
        lines.push(contact.join(" | "));
    }
    lines.join("\n")
}

fn block(heading: &str, lines: &[String]) -> String {
    let mut out = String::from(heading);
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}

/// Structured records when any were found, otherwise the raw EDUCATION lines.
fn education_lines(records: &[EducationRecord], sections: &SectionMap) -> Vec<String> {
    if records.is_empty() {
        return sections
            .lines(Section::Education)
            .iter()
            .map(|l| format!("• {}", strip_bullet(l)))
            .collect();
    }
    records
        .iter()
        .map(|r| {
            let mut line = format!("• {}", r.raw_text);
            if let Some(institution) = r.institution.as_deref() {
                if !r.raw_text.contains(institution) {
                    line.push_str(&format!(", {institution}"));
                }
            }
            if let Some(score) = r.score.as_deref() {
                if !r.raw_text.contains(score) {
                    line.push_str(&format!(" | {score}"));
                }
            }
            line
        })
        .collect()
}
