//! Regular expressions shared by the extractor and the scorer.

use std::sync::LazyLock;

use regex::Regex;

pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

/// Phone patterns in priority order; the first pattern that matches anywhere wins.
pub static PHONE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // +91 9876543210, +1-5551234567, +91 98765 43210
        r"\+\d{1,3}[\s-]?(?:\d{10}|\d{5}[\s-]\d{5})\b",
        // (555) 123-4567, 555.123.4567, 555-123-4567
        r"\(?\b\d{3}\)?[\s.-]?\d{3}[\s.-]\d{4}\b",
        // 9876543210
        r"\b\d{10}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid phone regex"))
    .collect()
});

pub static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?linkedin\.com/in/[A-Za-z0-9_%-]+/?")
        .expect("valid linkedin regex")
});

pub static GITHUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9_-]+/?")
        .expect("valid github regex")
});

pub static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bhttps?://[^\s|,;)"'<>]+"#).expect("valid url regex")
});

/// Scheme-less portfolio addresses: a `www.` host, a known hosting subdomain,
/// or a short personal domain followed by a path. Bare tokens such as
/// "Socket.io" never match.
pub static PORTFOLIO_DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:www\.[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z]{2,}(?:/[^\s|,]*)?|[a-z0-9-]+\.(?:github\.io|netlify\.app|vercel\.app|pages\.dev)(?:/[^\s|,]*)?|(?:behance\.net|dribbble\.com)/[^\s|,]+|[a-z0-9-]+\.(?:dev|me|io)/[^\s|,]+)",
    )
    .expect("valid portfolio regex")
});

/// Year ranges such as "2019 - 2023", "Jan 2020 – Present".
pub static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\.?\s+)?(?:19|20)\d{2}\s*(?:-|–|—|to)\s*(?:(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\.?\s+)?(?:(?:19|20)\d{2}|present|current|now)\b",
    )
    .expect("valid date range regex")
});

/// Lines with seven or more digits in a row (allowing separators) look like phone numbers.
pub static PHONE_LIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d\s().+-]{6,}\d").expect("valid phone-like regex"));

/// First phone number in `text`, honoring pattern priority.
pub fn find_phone(text: &str) -> Option<String> {
    PHONE_RES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().trim().to_string())
}

/// Portfolio-looking addresses without a scheme, skipping email domains.
pub fn portfolio_domains(text: &str) -> impl Iterator<Item = &str> {
    PORTFOLIO_DOMAIN_RE
        .find_iter(text)
        .filter(move |m| !text[..m.start()].ends_with('@'))
        .map(|m| m.as_str())
}

pub fn find_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}
