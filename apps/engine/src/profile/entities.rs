//! Entity recognition: contact and identity facts via pattern matching.
//!
//! Every extractor is total. A pattern that does not match yields
//! `None` for that field; malformed or empty input never fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::profile::title_case;

/// Contact facts pulled from one resume. Absent facts are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub location: Option<String>,
}

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,7}\b").unwrap());
// Country code, optional area code, then local digits. The leading `+`
// is intentionally outside the match so cleaned numbers are digit-only.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\d{1,3}[-.\s]?)?(?:\(?\d{2,4}\)?[-.\s]?)?\d{3,4}[-.\s]?\d{4}").unwrap()
});
static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[\w-]+/?").unwrap());
static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[\w-]+/?").unwrap());
static LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+(?:\s[A-Z][a-z]+)*),\s*([A-Z]{2}|[A-Z][a-z]+)\b").unwrap());
static NON_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9+]").unwrap());

const HEADER_WORDS: &[&str] = &["resume", "cv", "curriculum"];

/// Extracts all entities from resume text.
pub fn extract(text: &str) -> ContactDetails {
    ContactDetails {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        linkedin: extract_profile_url(text, &LINKEDIN),
        github: extract_profile_url(text, &GITHUB),
        location: extract_location(text),
    }
}

/// The candidate name heuristic: among the first 5 non-blank lines, the
/// first with 2 to 4 tokens, at most 50 characters, no digits, and no
/// resume-header word wins.
fn extract_name(text: &str) -> Option<String> {
    for line in text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(5)
    {
        let words = line.split_whitespace().count();
        if !(2..=4).contains(&words) || line.chars().count() > 50 {
            continue;
        }
        if line.chars().any(|c| c.is_numeric()) {
            continue;
        }
        let lower = line.to_lowercase();
        if HEADER_WORDS.iter().any(|kw| lower.contains(kw)) {
            continue;
        }
        return Some(title_case(line));
    }
    None
}

fn extract_email(text: &str) -> Option<String> {
    for m in EMAIL.find_iter(text) {
        let email = m.as_str();
        if let Some((_, domain)) = email.split_once('@') {
            if domain.contains('.') {
                return Some(email.to_lowercase());
            }
        }
    }
    None
}

fn extract_phone(text: &str) -> Option<String> {
    let m = PHONE.find(text)?;
    let digits = NON_PHONE.replace_all(m.as_str(), "").into_owned();
    if digits.chars().count() >= 10 {
        Some(digits)
    } else {
        None
    }
}

fn extract_profile_url(text: &str, pattern: &Regex) -> Option<String> {
    let m = pattern.find(text)?;
    let url = m.as_str();
    let url = if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    };
    Some(url.trim_end_matches('/').to_string())
}

fn extract_location(text: &str) -> Option<String> {
    let caps = LOCATION.captures(text)?;
    Some(format!("{}, {}", &caps[1], &caps[2]))
}
