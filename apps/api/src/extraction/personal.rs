//! Identity, contact and link extraction plus the work/certification heuristics.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::patterns::{
    find_email, find_phone, portfolio_domains, DATE_RANGE_RE, EMAIL_RE, GITHUB_RE, LINKEDIN_RE,
    PHONE_LIKE_RE, URL_RE,
};
use crate::extraction::sections::SectionSegmenter;
use crate::models::resume::Links;
use crate::text::non_empty_lines;

/// How many leading non-empty lines are scanned for the candidate's name.
const NAME_SCAN_LINES: usize = 10;

/// Distance (in lines) within which a company indicator must follow an experience keyword.
const EXPERIENCE_WINDOW: usize = 5;

const NAME_STOPWORDS: &[&str] = &[
    "the", "and", "of", "in", "at", "to", "for", "with", "resume", "cv", "curriculum", "vitae",
];

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "employment",
    "work history",
    "worked at",
    "working at",
];

const CERTIFICATION_KEYWORDS: &[&str] = &[
    "certified",
    "certification",
    "certificate",
    "coursera",
    "udemy",
    "nptel",
    "edx",
];

const DEGREE_KEYWORDS: &[&str] = &[
    "b.tech", "btech", "b.e.", "bachelor", "master", "m.tech", "mtech", "degree", "diploma",
    "b.sc", "m.sc", "mba", "bca", "mca", "university", "college", "sslc", "hsc", "10th", "12th",
];

static COMPANY_INDICATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:pvt|ltd|llc|inc|corp|company|technologies|systems|solutions|software)\b")
        .expect("valid company indicator regex")
});

static INTERN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bintern").expect("valid intern regex"));

/// Contact details found anywhere in the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub links: Links,
}

/// First line among the leading lines that looks like a person's name.
/// Contact lines and section headers are skipped.
pub fn extract_name(segmenter: &SectionSegmenter<'_>, text: &str) -> String {
    non_empty_lines(text)
        .into_iter()
        .take(NAME_SCAN_LINES)
        .filter(|line| !looks_like_contact_line(line))
        .filter(|line| segmenter.header_section(line).is_none())
        .find(|line| is_name_line(line))
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

fn looks_like_contact_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    EMAIL_RE.is_match(line)
        || URL_RE.is_match(line)
        || lower.contains("www.")
        || lower.contains("linkedin")
        || lower.contains("github")
        || PHONE_LIKE_RE.is_match(line)
        || DATE_RANGE_RE.is_match(line)
}

fn is_name_line(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&tokens.len()) {
        return false;
    }
    tokens.iter().all(|token| {
        let starts_upper = token.chars().next().is_some_and(char::is_uppercase);
        let letters_only = token
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, '.' | '-' | '\''));
        let stopword = NAME_STOPWORDS.contains(&token.to_lowercase().trim_end_matches('.'));
        starts_upper && letters_only && !stopword
    })
}

/// Email, phone (priority-ordered patterns) and profile links.
pub fn extract_contact(text: &str) -> Contact {
    Contact {
        email: find_email(text).unwrap_or_default(),
        phone: find_phone(text).unwrap_or_default(),
        links: extract_links(text),
    }
}

fn extract_links(text: &str) -> Links {
    let linkedin = LINKEDIN_RE.find(text).map(|m| m.as_str().to_string());
    let github = GITHUB_RE.find(text).map(|m| m.as_str().to_string());

    let is_profile = |url: &str| {
        let lower = url.to_lowercase();
        lower.contains("linkedin.com") || lower.contains("github.com")
    };

    let portfolio = URL_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|url| !is_profile(url))
        .or_else(|| portfolio_domains(text).find(|url| !is_profile(url)))
        .map(|url| url.trim_end_matches(|c| c == '.' || c == '/').to_string());

    Links {
        linkedin,
        github,
        portfolio,
    }
}

/// True when an experience keyword is followed, within a few lines, by a company
/// indicator on a line that does not mention an internship.
pub fn has_real_work_experience(text: &str) -> bool {
    let lines = non_empty_lines(text);
    lines.iter().enumerate().any(|(i, line)| {
        let lower = line.to_lowercase();
        if !EXPERIENCE_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return false;
        }
        lines
            .iter()
            .skip(i)
            .take(EXPERIENCE_WINDOW + 1)
            .any(|candidate| {
                COMPANY_INDICATOR_RE.is_match(candidate) && !INTERN_RE.is_match(candidate)
            })
    })
}

/// True when a certification keyword appears on a line that is not about a degree.
pub fn has_real_certification(text: &str) -> bool {
    non_empty_lines(text).iter().any(|line| {
        let lower = line.to_lowercase();
        CERTIFICATION_KEYWORDS.iter().any(|k| lower.contains(k))
            && !DEGREE_KEYWORDS.iter().any(|k| lower.contains(k))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconStore;

    fn name_of(text: &str) -> String {
        let lexicon = LexiconStore::builtin().unwrap();
        extract_name(&SectionSegmenter::new(&lexicon), text)
    }

    #[test]
    fn test_name_is_first_qualifying_line() {
        let text = "\n  John Smith\njohn@x.com\nSKILLS\nPython, React";
        assert_eq!(name_of(text), "John Smith");
    }

    #[test]
    fn test_name_skips_contact_and_header_lines() {
        let text = "RESUME\njane.doe@mail.com | +1 555-123-4567\nlinkedin.com/in/jane\nJane Marie Doe\nSoftware Engineer";
        assert_eq!(name_of(text), "Jane Marie Doe");
    }

    #[test]
    fn test_name_skips_section_headers() {
        assert_eq!(name_of("TECHNICAL SKILLS\nPython, Rust\nDocker"), "");
        assert_eq!(
            name_of("Career Objective\nTo build things\nJohn Smith"),
            "John Smith"
        );
    }

    #[test]
    fn test_name_rejects_stopwords_and_lowercase() {
        assert_eq!(name_of("Resume Of Candidate\nsome lowercase words"), "");
        assert_eq!(name_of("The Best Engineer"), "");
    }

    #[test]
    fn test_name_absent_is_empty() {
        assert_eq!(name_of(""), "");
        assert_eq!(name_of("python developer with 3 years"), "");
    }

    #[test]
    fn test_name_only_scans_first_ten_lines() {
        let mut text = "x\n".repeat(10);
        text.push_str("Late Name");
        assert_eq!(name_of(&text), "");
    }

    #[test]
    fn test_contact_extraction() {
        let text = "Jane Doe\njane@mail.com | 9876543210\nhttps://linkedin.com/in/jane-doe\nhttps://github.com/janedoe\nhttps://janedoe.dev";
        let contact = extract_contact(text);
        assert_eq!(contact.email, "jane@mail.com");
        assert_eq!(contact.phone, "9876543210");
        assert_eq!(
            contact.links.linkedin.as_deref(),
            Some("https://linkedin.com/in/jane-doe")
        );
        assert_eq!(
            contact.links.github.as_deref(),
            Some("https://github.com/janedoe")
        );
        assert_eq!(contact.links.portfolio.as_deref(), Some("https://janedoe.dev"));
    }

    #[test]
    fn test_portfolio_ignores_skill_names() {
        let contact = extract_contact("Jane Doe\njane@mail.com\nSKILLS\nReact, Node.js, Socket.io");
        assert_eq!(contact.links.portfolio, None);

        let contact = extract_contact("Jane Doe\njanedoe.github.io\nSKILLS\nSocket.io");
        assert_eq!(contact.links.portfolio.as_deref(), Some("janedoe.github.io"));
    }

    #[test]
    fn test_portfolio_ignores_email_domain() {
        let contact = extract_contact("jane@janedoe.dev");
        assert_eq!(contact.links.portfolio, None);
    }

    #[test]
    fn test_real_experience_requires_company_indicator() {
        let text = "WORK EXPERIENCE\nBackend Developer\nAcme Technologies Pvt Ltd | 2021 - 2023";
        assert!(has_real_work_experience(text));
    }

    #[test]
    fn test_internship_is_not_real_experience() {
        let text = "EXPERIENCE\nSoftware Intern at Acme Technologies Pvt Ltd";
        assert!(!has_real_work_experience(text));
    }

    #[test]
    fn test_company_outside_window_ignored() {
        let text = "EXPERIENCE\na\nb\nc\nd\ne\nf\nAcme Solutions Inc";
        assert!(!has_real_work_experience(text));
    }

    #[test]
    fn test_certification_not_confused_with_degree() {
        assert!(has_real_certification("AWS Certified Cloud Practitioner"));
        assert!(!has_real_certification("Degree certificate from Anna University"));
    }
}
