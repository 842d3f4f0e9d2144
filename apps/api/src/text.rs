//! Small text helpers shared by the extractor, scorer and synthesizer.

/// Leading markers treated as list bullets.
pub const BULLET_MARKERS: &[char] = &[
    '•', '-', '*', '–', '—', '·', '▪', '■', '●', '◦', '○', '►', '➢', '➤', '✓', '✔',
];

/// Returns true if `haystack` contains `needle` as a standalone term.
///
/// Both inputs are compared case-insensitively. A match must not be glued to
/// an alphanumeric character on either side, so `go` does not match `google`
/// while `c++` and `node.js` still match inside punctuation.
pub fn contains_term(haystack: &str, needle: &str) -> bool {
    let hay = haystack.to_lowercase();
    let needle = needle.trim().to_lowercase();
    contains_term_lower(&hay, &needle)
}

/// Same as [`contains_term`] for inputs that are already lowercase.
pub fn contains_term_lower(hay: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(pos) = hay[start..].find(needle) {
        let begin = start + pos;
        let end = begin + needle.len();
        let before_ok = hay[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = hay[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        start = begin + hay[begin..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

/// Counts standalone occurrences of a lowercase `needle` in a lowercase `hay`.
pub fn count_term_lower(hay: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut start = 0;
    while let Some(pos) = hay[start..].find(needle) {
        let begin = start + pos;
        let end = begin + needle.len();
        let before_ok = hay[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = hay[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            count += 1;
        }
        start = end;
    }
    count
}

pub fn is_bullet(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .is_some_and(|c| BULLET_MARKERS.contains(&c))
}

/// Strips leading bullet/dash markers and surrounding whitespace.
pub fn strip_bullet(line: &str) -> &str {
    line.trim()
        .trim_start_matches(|c: char| BULLET_MARKERS.contains(&c) || c.is_whitespace())
        .trim()
}

/// Non-empty, trimmed lines in document order.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Lowercase alphabetic words.
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic() && c != '\'')
        .map(|w| w.trim_matches('\'').to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Uppercases the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercases the first character unless the first word looks like an acronym.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if second.is_uppercase() => {
            let mut out = String::new();
            out.push(first);
            out.push(second);
            out.push_str(chars.as_str());
            out
        }
        (Some(first), second) => {
            let mut out: String = first.to_lowercase().collect();
            if let Some(second) = second {
                out.push(second);
            }
            out.push_str(chars.as_str());
            out
        }
        (None, _) => String::new(),
    }
}

/// Title-cases every whitespace-separated word ("software engineer" → "Software Engineer").
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_term_respects_word_boundaries() {
        assert!(contains_term("Experience with Go and Rust", "go"));
        assert!(!contains_term("Worked at Google", "go"));
        assert!(contains_term("C++, Python", "c++"));
        assert!(contains_term("Built APIs in Node.js.", "node.js"));
        assert!(!contains_term("reactive streams", "react"));
    }

    #[test]
    fn test_contains_term_multibyte_text() {
        assert!(contains_term("Résumé — Python développeur", "python"));
        assert!(!contains_term("", "python"));
        assert!(!contains_term("python", ""));
    }

    #[test]
    fn test_count_term_lower() {
        assert_eq!(count_term_lower("led team, led project, misled", "led"), 2);
    }

    #[test]
    fn test_strip_bullet() {
        assert_eq!(strip_bullet("  • Built a thing"), "Built a thing");
        assert_eq!(strip_bullet("- - nested"), "nested");
        assert!(is_bullet("• Built"));
        assert!(!is_bullet("Built"));
    }

    #[test]
    fn test_decapitalize_keeps_acronyms() {
        assert_eq!(decapitalize("The backend"), "the backend");
        assert_eq!(decapitalize("REST APIs"), "REST APIs");
        assert_eq!(decapitalize("a"), "a");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("software engineer"), "Software Engineer");
    }
}
