//! Authoritative pattern table for every field extractor.
//!
//! Every regex the extraction engine relies on lives here, compiled once. The
//! extractors must not re-declare local copies — drifting duplicates of these
//! patterns across code paths produce silently inconsistent behavior.

use once_cell::sync::Lazy;
use regex::Regex;

/// RFC-light email shape. First match anywhere in the document wins.
pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

/// Strict email shape for validation (anchored).
pub static EMAIL_STRICT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Ordered phone patterns, regional first. The first matching pattern wins.
pub static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Indian mobile, optional +91 prefix
        r"(?:\+91[-\s]?)?[6-9]\d{9}",
        // NANP
        r"\+?1?[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
        // Generic international
        r"\+?\d{1,3}[-.\s]?\(?\d{2,4}\)?[-.\s]?\d{3,4}[-.\s]?\d{4}",
        // Parenthesized area code
        r"\(\d{3}\)\s*\d{3}[-.\s]?\d{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

pub static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/(?:in|pub)/([a-zA-Z0-9_-]+)").unwrap());

pub static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)github\.com/([a-zA-Z0-9_-]+)").unwrap());

/// `<date> <dash/"to"> <date-or-present-synonym>` — the experience-entry
/// boundary signal. Capture 1 = start, capture 2 = end.
pub static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(\d{1,2}/\d{4}|(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+\d{4}|\d{4})\s*(?:[-–—]|to)\s*(\d{1,2}/\d{4}|(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+\d{4}|\d{4}|present|current|now)",
    )
    .unwrap()
});

/// A line starting with one of these reads as a new role even without dates.
pub static ROLE_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(software|senior|junior|lead|manager|developer|engineer|analyst|designer|intern|associate|director|consultant|specialist|coordinator|assistant|executive|officer|machine learning|data)\b",
    )
    .unwrap()
});

/// Degree keywords that turn an education-section line into an entry.
pub static DEGREE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)bachelor|master|b\.?tech|m\.?tech|b\.?sc|m\.?sc|mba|bba|phd|doctorate|diploma")
        .unwrap()
});

/// Degree text capture: keyword up to the next comma.
pub static DEGREE_CAPTURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(bachelor[^,]*|master[^,]*|b\.?tech[^,]*|m\.?tech[^,]*|b\.?sc[^,]*|m\.?sc[^,]*|mba|bba|phd|doctorate[^,]*|diploma[^,]*)",
    )
    .unwrap()
});

pub static INSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:[A-Z][A-Za-z.&'-]*\s+)*(?:University|College|Institute|School|Academy)(?:\s+(?:of\s+)?[A-Z][A-Za-z.'-]*)*",
    )
    .unwrap()
});

pub static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

/// Roles/companies matching this contribute at half weight to tenure and are
/// exempt (or softened) in the overlap check.
pub static PART_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)part[-\s]?time|intern|internship|contract|freelance|temporary|seasonal|student|trainee|apprentice",
    )
    .unwrap()
});

/// Leading bullet glyphs stripped from experience/project lines.
pub static BULLET_GLYPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-•*●◦▪‣]\s*").unwrap());

// ── Categorized skill alternations (category order: languages, frameworks,
// tools — fixed by the skills extractor) ────────────────────────────────────

pub static LANGUAGES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(python|java|javascript|typescript|c\+\+|c#|go|rust|ruby|php|swift|kotlin|scala|sql|html|css|perl|matlab|bash)\b",
    )
    .unwrap()
});

pub static FRAMEWORKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(react|angular|vue|node\.?js|express|django|flask|spring|laravel|rails|next\.?js|nuxt|svelte|fastapi)\b",
    )
    .unwrap()
});

pub static TOOLS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(docker|kubernetes|aws|azure|gcp|git|github|gitlab|jenkins|mongodb|postgresql|mysql|redis|terraform|ansible|linux|jira|figma|photoshop)\b",
    )
    .unwrap()
});

/// Technology mentions collected into a project's tech list.
pub static PROJECT_TECH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(react|node|python|java|mongodb|postgresql|mysql|aws|docker|typescript|javascript|angular|vue|django|flask|spring|kubernetes|redis|graphql)\b",
    )
    .unwrap()
});

/// Soft skills recognized by the targeting matcher.
pub static SOFT_SKILLS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(communication|leadership|teamwork|problem[\s-]?solving|analytical|creative|collaboration|adaptability|critical[\s-]?thinking)\b",
    )
    .unwrap()
});

/// Words that disqualify an early line from being the candidate's name.
pub const NAME_EXCLUDE: &[&str] = &[
    "summary",
    "profile",
    "experience",
    "education",
    "skills",
    "objective",
    "resume",
    "curriculum",
    "vitae",
    "contact",
    "phone",
    "email",
];
