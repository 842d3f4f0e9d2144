//! Section segmentation as an explicit two-state scan.
//!
//! States: `NoSection` (preamble: name, contact lines) and `InSection(s)`.
//! A header line moves the scanner into its section and is itself dropped;
//! every other line is appended to the current section, if any.

use std::collections::{BTreeMap, HashSet};

use crate::lexicon::LexiconStore;
use crate::models::resume::{Section, SectionMap};
use crate::text::{is_bullet, strip_bullet};

/// Header lines are short.
const MAX_HEADER_CHARS: usize = 50;
/// Longer lines are prose that happens to mention a keyword.
const MAX_HEADER_WORDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    NoSection,
    InSection(Section),
}

/// What a single line means to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Header(Section),
    Content(String),
    Blank,
}

pub struct SectionSegmenter<'a> {
    lexicon: &'a LexiconStore,
}

impl<'a> SectionSegmenter<'a> {
    pub fn new(lexicon: &'a LexiconStore) -> Self {
        Self { lexicon }
    }

    /// Section opened by `line`, if it is a header.
    pub fn header_section(&self, line: &str) -> Option<Section> {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.chars().count() >= MAX_HEADER_CHARS
            || is_bullet(trimmed)
            || trimmed.split_whitespace().count() > MAX_HEADER_WORDS
            || is_labelled_value(trimmed)
        {
            return None;
        }

        let lower = trimmed.to_lowercase();
        self.lexicon
            .section_headers()
            .iter()
            .find(|h| h.keywords.iter().any(|k| starts_word(&lower, &k.to_lowercase())))
            .map(|h| h.section)
    }

    pub fn classify(&self, line: &str) -> LineEvent {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineEvent::Blank;
        }
        match self.header_section(trimmed) {
            Some(section) => LineEvent::Header(section),
            None => LineEvent::Content(trimmed.to_string()),
        }
    }

    /// Splits `text` into a [`SectionMap`].
    ///
    /// Within a section, a line whose bullet-stripped, lowercased form was
    /// already seen is dropped.
    pub fn segment(&self, text: &str) -> SectionMap {
        let mut state = ScanState::NoSection;
        let mut map: BTreeMap<Section, Vec<String>> = BTreeMap::new();
        let mut seen: BTreeMap<Section, HashSet<String>> = BTreeMap::new();

        for line in text.lines() {
            let event = match (state, self.classify(line)) {
                // A title such as "Chat App Project" inside PROJECTS is content.
                (ScanState::InSection(current), LineEvent::Header(section))
                    if section == current && map.get(&current).is_some_and(|l| !l.is_empty()) =>
                {
                    LineEvent::Content(line.trim().to_string())
                }
                (_, event) => event,
            };

            state = match (state, event) {
                (_, LineEvent::Header(section)) => ScanState::InSection(section),
                (ScanState::InSection(section), LineEvent::Content(content)) => {
                    let key = strip_bullet(&content).to_lowercase();
                    if !key.is_empty() && seen.entry(section).or_default().insert(key) {
                        map.entry(section).or_default().push(content);
                    }
                    state
                }
                (current, LineEvent::Content(_) | LineEvent::Blank) => current,
            };
        }

        SectionMap::from_map(map)
    }
}

/// "Technical Skills: Python, Java" is content, while "Skills:" is a header.
fn is_labelled_value(line: &str) -> bool {
    line.split_once(':')
        .is_some_and(|(_, value)| !value.trim().is_empty())
}

/// True if `stem` occurs in `hay` at the start of a word.
fn starts_word(hay: &str, stem: &str) -> bool {
    if stem.is_empty() {
        return false;
    }
    hay.match_indices(stem).any(|(i, _)| {
        hay[..i]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter_for<'a>(lexicon: &'a LexiconStore) -> SectionSegmenter<'a> {
        SectionSegmenter::new(lexicon)
    }

    #[test]
    fn test_header_detection() {
        let lexicon = LexiconStore::builtin().unwrap();
        let seg = segmenter_for(&lexicon);
        assert_eq!(seg.header_section("SKILLS"), Some(Section::Skills));
        assert_eq!(seg.header_section("Technical Skills:"), Some(Section::Skills));
        assert_eq!(seg.header_section("Work Experience"), Some(Section::Experience));
        assert_eq!(
            seg.header_section("Internship Experience"),
            Some(Section::Internships)
        );
        assert_eq!(seg.header_section("Certifications"), Some(Section::Achievements));
        assert_eq!(seg.header_section("Career Objective"), Some(Section::Objective));
        assert_eq!(seg.header_section("Teamwork"), None);
        assert_eq!(seg.header_section("Technical Skills: Python, Java"), None);
        assert_eq!(seg.header_section("• Built a project tracker"), None);
        assert_eq!(
            seg.header_section("Worked on a large distributed project for the team"),
            None
        );
    }

    #[test]
    fn test_state_transitions_line_by_line() {
        let lexicon = LexiconStore::builtin().unwrap();
        let seg = segmenter_for(&lexicon);
        assert_eq!(seg.classify("   "), LineEvent::Blank);
        assert_eq!(seg.classify("EDUCATION"), LineEvent::Header(Section::Education));
        assert_eq!(
            seg.classify(" Python, React "),
            LineEvent::Content("Python, React".to_string())
        );
    }

    #[test]
    fn test_segment_scenario_document() {
        let lexicon = LexiconStore::builtin().unwrap();
        let text = "John Smith\njohn@x.com\nSKILLS\nPython, React\nEDUCATION\nB.Tech in CS 2020, 8.5 CGPA";
        let map = segmenter_for(&lexicon).segment(text);
        assert_eq!(map.sections(), vec![Section::Education, Section::Skills]);
        assert_eq!(map.lines(Section::Skills), &["Python, React".to_string()]);
        assert_eq!(
            map.lines(Section::Education),
            &["B.Tech in CS 2020, 8.5 CGPA".to_string()]
        );
    }

    #[test]
    fn test_preamble_lines_are_ignored() {
        let lexicon = LexiconStore::builtin().unwrap();
        let map = segmenter_for(&lexicon).segment("Jane Doe\n555-123-4567\n");
        assert!(map.is_empty());
    }

    #[test]
    fn test_duplicate_lines_suppressed_after_bullet_trim() {
        let lexicon = LexiconStore::builtin().unwrap();
        let text = "PROJECTS\n• Chat App\n- chat app\nChat App\nWeather App";
        let map = segmenter_for(&lexicon).segment(text);
        assert_eq!(
            map.lines(Section::Projects),
            &["• Chat App".to_string(), "Weather App".to_string()]
        );
    }

    #[test]
    fn test_title_naming_current_section_is_content() {
        let lexicon = LexiconStore::builtin().unwrap();
        let text = "PROJECTS\nWeather App\nChat App Project\n• Built with React";
        let map = segmenter_for(&lexicon).segment(text);
        assert_eq!(
            map.lines(Section::Projects),
            &[
                "Weather App".to_string(),
                "Chat App Project".to_string(),
                "• Built with React".to_string()
            ]
        );
    }

    #[test]
    fn test_reopened_section_appends() {
        let lexicon = LexiconStore::builtin().unwrap();
        let text = "SKILLS\nPython\nPROJECTS\nTodo App\nSkills\nRust";
        let map = segmenter_for(&lexicon).segment(text);
        assert_eq!(
            map.lines(Section::Skills),
            &["Python".to_string(), "Rust".to_string()]
        );
    }

    #[test]
    fn test_starts_word() {
        assert!(starts_word("technical skills", "skill"));
        assert!(!starts_word("teamwork", "work"));
        assert!(starts_word("work experience", "work"));
    }
}
