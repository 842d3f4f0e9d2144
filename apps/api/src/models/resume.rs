use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical résumé sections, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    Objective,
    Education,
    Skills,
    Internships,
    Projects,
    Achievements,
    Experience,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Objective,
        Section::Education,
        Section::Skills,
        Section::Internships,
        Section::Projects,
        Section::Achievements,
        Section::Experience,
    ];

    /// Header text used when rendering the section.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Objective => "OBJECTIVE",
            Section::Education => "EDUCATION",
            Section::Skills => "SKILLS",
            Section::Internships => "INTERNSHIPS",
            Section::Projects => "PROJECTS",
            Section::Achievements => "ACHIEVEMENTS",
            Section::Experience => "EXPERIENCE",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// Résumé text decomposed into named blocks of raw content lines.
///
/// Built once by the segmenter and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionMap(BTreeMap<Section, Vec<String>>);

impl SectionMap {
    /// Headers that never received content are dropped.
    pub(crate) fn from_map(mut map: BTreeMap<Section, Vec<String>>) -> Self {
        map.retain(|_, lines| !lines.is_empty());
        Self(map)
    }

    /// Lines of a section; empty when the section was not found.
    pub fn lines(&self, section: Section) -> &[String] {
        self.0.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when the section exists and carries at least one line.
    pub fn has(&self, section: Section) -> bool {
        !self.lines(section).is_empty()
    }

    /// Sections with content, in canonical order.
    pub fn sections(&self) -> Vec<Section> {
        self.0
            .iter()
            .filter(|(_, lines)| !lines.is_empty())
            .map(|(s, _)| *s)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sections().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    Secondary,
    HigherSecondary,
    Diploma,
    Bachelor,
    Master,
}

impl EducationLevel {
    /// Display priority, earliest education first.
    pub fn priority(&self) -> u8 {
        match self {
            EducationLevel::Secondary => 1,
            EducationLevel::HigherSecondary => 2,
            EducationLevel::Diploma => 3,
            EducationLevel::Bachelor => 4,
            EducationLevel::Master => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::Secondary => "Secondary (SSLC / 10th)",
            EducationLevel::HigherSecondary => "Higher Secondary (HSC / 12th)",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Bachelor => "Bachelor's Degree",
            EducationLevel::Master => "Master's Degree",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub level: EducationLevel,
    pub institution: Option<String>,
    /// Trailing score token as written, e.g. "85%" or "8.5 CGPA".
    pub score: Option<String>,
    pub raw_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub links: Links,
    pub education: Vec<EducationRecord>,
    pub has_work_experience: bool,
    pub has_certifications: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_map_missing_section_is_empty() {
        let map = SectionMap::default();
        assert!(map.lines(Section::Projects).is_empty());
        assert!(!map.has(Section::Projects));
        assert!(map.is_empty());
    }

    #[test]
    fn test_section_map_serializes_with_canonical_keys() {
        let mut inner = BTreeMap::new();
        inner.insert(Section::Skills, vec!["Python".to_string()]);
        let map = SectionMap::from_map(inner);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["SKILLS"][0], "Python");
    }

    #[test]
    fn test_sections_are_in_canonical_order() {
        let mut inner = BTreeMap::new();
        inner.insert(Section::Projects, vec!["p".to_string()]);
        inner.insert(Section::Education, vec!["e".to_string()]);
        inner.insert(Section::Achievements, vec![]);
        let map = SectionMap::from_map(inner);
        assert_eq!(map.sections(), vec![Section::Education, Section::Projects]);
    }

    #[test]
    fn test_education_level_priority_is_ascending() {
        assert!(EducationLevel::Secondary.priority() < EducationLevel::HigherSecondary.priority());
        assert!(EducationLevel::Bachelor.priority() < EducationLevel::Master.priority());
        let json = serde_json::to_string(&EducationLevel::HigherSecondary).unwrap();
        assert_eq!(json, "\"higher-secondary\"");
    }
}
