//! Contact-field extractors: name, email, phone, LinkedIn/GitHub handles.
//!
//! Contact fields are global — matched over the full text rather than a
//! located section. Every extractor is pure and degrades to the empty
//! string; nothing here ever fails.

use crate::extract::patterns::{EMAIL, GITHUB, LINKEDIN, NAME_EXCLUDE, PHONE_PATTERNS};

/// How many leading non-empty lines are considered when hunting for a name.
const NAME_WINDOW: usize = 10;

/// Finds the candidate's name in the first few lines of the document.
///
/// A line qualifies when, after stripping non-alphabetic characters, it
/// splits into 2–4 words, stays under 60 cleaned characters, and contains
/// no section-header vocabulary. The accepted candidate is title-cased
/// word by word; the first acceptable line wins.
pub fn extract_name(lines: &[String]) -> String {
    for line in lines.iter().take(NAME_WINDOW) {
        let cleaned: String = line
            .chars()
            .map(|c| if c.is_ascii_alphabetic() || c == ' ' { c } else { ' ' })
            .collect();
        let cleaned = cleaned.trim();
        let words: Vec<&str> = cleaned
            .split_whitespace()
            .filter(|w| w.len() > 1)
            .collect();

        if words.len() < 2 || words.len() > 4 || cleaned.len() < 4 || cleaned.len() >= 60 {
            continue;
        }
        let lower = cleaned.to_lowercase();
        if NAME_EXCLUDE.iter().any(|k| lower.contains(k)) {
            continue;
        }

        return words
            .iter()
            .map(|w| title_case(w))
            .collect::<Vec<_>>()
            .join(" ");
    }
    String::new()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}

/// First email-shaped match anywhere in the text, lower-cased.
pub fn extract_email(text: &str) -> String {
    EMAIL
        .find(text)
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default()
}

/// Tries the regional phone patterns in order; the first match wins, with
/// runs of whitespace collapsed.
pub fn extract_phone(text: &str) -> String {
    for pattern in PHONE_PATTERNS.iter() {
        if let Some(m) = pattern.find(text) {
            return m
                .as_str()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string();
        }
    }
    String::new()
}

/// Canonical `linkedin.com/in/<handle>` reconstructed from any profile URL form.
pub fn extract_linkedin(text: &str) -> String {
    LINKEDIN
        .captures(text)
        .map(|c| format!("linkedin.com/in/{}", &c[1]))
        .unwrap_or_default()
}

/// Canonical `github.com/<handle>`.
pub fn extract_github(text: &str) -> String {
    GITHUB
        .captures(text)
        .map(|c| format!("github.com/{}", &c[1]))
        .unwrap_or_default()
}
