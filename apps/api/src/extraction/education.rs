//! Education records: level detection, trailing score capture, institution lookup.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::{EducationLevel, EducationRecord};
use crate::text::strip_bullet;

/// Level patterns checked most specific first, so "Higher Secondary" is never
/// read as "Secondary" and "M.Tech" is never read as a bachelor's degree.
static LEVEL_PATTERNS: LazyLock<Vec<(EducationLevel, Regex)>> = LazyLock::new(|| {
    [
        (
            EducationLevel::Master,
            r"(?i)\b(?:m\.?\s?tech\b|master'?s?\b|m\.sc\b|msc\b|mca\b|mba\b|m\.s\.|m\.e\.|post\s?graduat)",
        ),
        (
            EducationLevel::Bachelor,
            r"(?i)\b(?:b\.?\s?tech\b|bachelor'?s?\b|b\.sc\b|bsc\b|bca\b|b\.?com\b|b\.e\.?(?:\s|$|,)|undergraduate)",
        ),
        (EducationLevel::Diploma, r"(?i)\b(?:diploma|polytechnic)"),
        (
            EducationLevel::HigherSecondary,
            r"(?i)\b(?:hsc|12th|xii(?:th)?|higher\s+secondary|senior\s+secondary|puc|class\s+12)\b",
        ),
        (
            EducationLevel::Secondary,
            r"(?i)\b(?:sslc|10th|ssc|matriculation|secondary\s+school|class\s+10|x(?:th)?\s+(?:standard|grade|std))\b",
        ),
    ]
    .into_iter()
    .map(|(level, p)| (level, Regex::new(p).expect("valid education regex")))
    .collect()
});

/// `85%`, `85.5 %`, `8.5 CGPA`, `8.5/10 GPA`, `CGPA: 8.5`.
static SCORE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(\d{1,3}(?:\.\d+)?)\s*%",
        r"(?i)\b(\d{1,2}(?:\.\d+)?)\s*(?:/\s*\d{1,2}(?:\.\d+)?\s*)?(c?gpa)\b",
        r"(?i)\b(c?gpa)\s*[:\-]?\s*(\d{1,2}(?:\.\d+)?)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid score regex"))
    .collect()
});

static INSTITUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:university|college|institute|school|academy|vidyalaya|iit|nit)\b")
        .expect("valid institution regex")
});

static SEGMENT_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*(?:,|\||;|\s-\s|\s–\s|\s—\s|\bat\b|@|\bfrom\b)\s*")
        .expect("valid segment regex")
});

/// Education level of a single line, if any.
pub fn detect_level(line: &str) -> Option<EducationLevel> {
    LEVEL_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(line))
        .map(|(level, _)| *level)
}

/// Trailing score token, normalized to `NN%` or `NN CGPA` / `NN GPA`.
pub fn extract_score(line: &str) -> Option<String> {
    if let Some(caps) = SCORE_RES[0].captures(line) {
        return Some(format!("{}%", &caps[1]));
    }
    if let Some(caps) = SCORE_RES[1].captures(line) {
        return Some(format!("{} {}", &caps[1], caps[2].to_uppercase()));
    }
    SCORE_RES[2]
        .captures(line)
        .map(|caps| format!("{} {}", &caps[2], caps[1].to_uppercase()))
}

/// Institution segment of `line`: a separator-delimited part naming a school
/// that is not itself the degree text.
fn institution_in(line: &str) -> Option<String> {
    SEGMENT_SPLIT_RE
        .split(line)
        .map(|s| s.trim().trim_matches(|c: char| c == '(' || c == ')'))
        .filter(|s| !s.is_empty())
        .find(|segment| INSTITUTION_RE.is_match(segment) && detect_level(segment).is_none())
        .or_else(|| {
            // Single-segment lines like "Higher Secondary School" carry both.
            SEGMENT_SPLIT_RE
                .split(line)
                .map(str::trim)
                .find(|segment| {
                    INSTITUTION_RE.is_match(segment) && segment.split_whitespace().count() > 2
                })
        })
        .map(|s| strip_score(s).to_string())
        .filter(|s| !s.is_empty())
}

fn strip_score(segment: &str) -> &str {
    let cut = SCORE_RES
        .iter()
        .filter_map(|re| re.find(segment).map(|m| m.start()))
        .min()
        .unwrap_or(segment.len());
    segment[..cut].trim()
}

/// Scans `lines` for education records and orders them earliest level first.
///
/// When a degree line names no institution, the following line is used if it
/// names one and is not itself an education line.
pub fn extract_education<S: AsRef<str>>(lines: &[S]) -> Vec<EducationRecord> {
    let mut records = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref().trim();
        let Some(level) = detect_level(line) else {
            continue;
        };

        let next: Option<&str> = lines.get(i + 1).map(|s| s.as_ref().trim());
        let next = next.filter(|n| detect_level(n).is_none());

        let institution = institution_in(line).or_else(|| {
            next.filter(|n| INSTITUTION_RE.is_match(n)).and_then(|n| {
                institution_in(n).or_else(|| Some(strip_bullet(n).to_string()))
            })
        });

        let score = extract_score(line).or_else(|| next.and_then(extract_score));

        records.push(EducationRecord {
            level,
            institution,
            score,
            raw_text: strip_bullet(line).to_string(),
        });
    }

    // Stable: records sharing a level keep encounter order.
    records.sort_by_key(|r| r.level.priority());
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_levels() {
        assert_eq!(detect_level("B.Tech in CS 2020"), Some(EducationLevel::Bachelor));
        assert_eq!(detect_level("M.Tech, IIT Delhi"), Some(EducationLevel::Master));
        assert_eq!(detect_level("SSLC - 92%"), Some(EducationLevel::Secondary));
        assert_eq!(
            detect_level("Higher Secondary School Certificate"),
            Some(EducationLevel::HigherSecondary)
        );
        assert_eq!(detect_level("Diploma in Mechanical"), Some(EducationLevel::Diploma));
        assert_eq!(detect_level("Built a REST API"), None);
    }

    #[test]
    fn test_extract_score_variants() {
        assert_eq!(extract_score("SSLC 92%").as_deref(), Some("92%"));
        assert_eq!(extract_score("B.Tech in CS 2020, 8.5 CGPA").as_deref(), Some("8.5 CGPA"));
        assert_eq!(extract_score("MSc, 3.8/4 GPA").as_deref(), Some("3.8 GPA"));
        assert_eq!(extract_score("CGPA: 9.1").as_deref(), Some("9.1 CGPA"));
        assert_eq!(extract_score("B.Tech 2020"), None);
    }

    #[test]
    fn test_scenario_bachelor_line() {
        let records = extract_education(&["B.Tech in CS 2020, 8.5 CGPA"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, EducationLevel::Bachelor);
        assert_eq!(records[0].score.as_deref(), Some("8.5 CGPA"));
        assert_eq!(records[0].institution, None);
    }

    #[test]
    fn test_records_sorted_earliest_first() {
        let lines = [
            "M.Tech in AI, IIT Madras, 2022",
            "B.Tech in CSE, Anna University, 8.2 CGPA",
            "HSC, Kendriya Vidyalaya, 88%",
            "SSLC, St. Mary's School, 92%",
        ];
        let levels: Vec<_> = extract_education(&lines).iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![
                EducationLevel::Secondary,
                EducationLevel::HigherSecondary,
                EducationLevel::Bachelor,
                EducationLevel::Master
            ]
        );
    }

    #[test]
    fn test_institution_from_same_or_next_line() {
        let records = extract_education(&["B.Tech in CSE, Anna University, 8.2 CGPA"]);
        assert_eq!(records[0].institution.as_deref(), Some("Anna University"));

        let records = extract_education(&["Bachelor of Engineering", "PSG College of Technology", "CGPA 8.9"]);
        assert_eq!(
            records[0].institution.as_deref(),
            Some("PSG College of Technology")
        );
        assert_eq!(records[0].score.as_deref(), None);
    }

    #[test]
    fn test_shared_level_keeps_encounter_order() {
        let lines = ["B.Sc Physics, First College", "B.Tech CSE, Second College"];
        let records = extract_education(&lines);
        assert!(records[0].raw_text.starts_with("B.Sc"));
        assert!(records[1].raw_text.starts_with("B.Tech"));
    }
}
