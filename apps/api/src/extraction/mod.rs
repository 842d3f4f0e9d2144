//! Entity Extractor: turns raw résumé text into [`PersonalInfo`] and a [`SectionMap`].
//!
//! Extraction never fails: every field falls back to an empty or false value
//! when nothing matches.

pub mod education;
pub mod patterns;
pub mod personal;
pub mod sections;

use tracing::debug;

use crate::lexicon::LexiconStore;
use crate::models::resume::{PersonalInfo, Section, SectionMap};

pub use sections::SectionSegmenter;

pub fn extract(lexicon: &LexiconStore, resume_text: &str) -> (PersonalInfo, SectionMap) {
    let segmenter = SectionSegmenter::new(lexicon);
    let sections = segmenter.segment(resume_text);
    let contact = personal::extract_contact(resume_text);

    // Prefer the EDUCATION section; unstructured documents are scanned whole.
    let education = if sections.has(Section::Education) {
        education::extract_education(sections.lines(Section::Education))
    } else {
        let lines: Vec<&str> = resume_text.lines().collect();
        education::extract_education(&lines)
    };

    let info = PersonalInfo {
        name: personal::extract_name(&segmenter, resume_text),
        email: contact.email,
        phone: contact.phone,
        links: contact.links,
        education,
        has_work_experience: personal::has_real_work_experience(resume_text),
        has_certifications: personal::has_real_certification(resume_text),
    };

    debug!(
        name_found = !info.name.is_empty(),
        email_found = !info.email.is_empty(),
        education_records = info.education.len(),
        sections = ?sections.sections(),
        "extraction complete"
    );

    (info, sections)
}
