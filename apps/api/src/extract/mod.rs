//! Resume extraction.
//!
//! # Engines
//!
//! Two engines implement [`Extractor`]: a local regex/heuristic engine and a
//! remote LLM engine that falls back to the local one when the provider is
//! unreachable. The engine is chosen once at startup and carried in
//! [`crate::state::AppState`].

pub mod contact;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod patterns;
pub mod projects;
pub mod section;
pub mod skills;

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::CanonicalResume;
use self::section::locate_section;

const PROFILE_START: &[&str] = &["summary", "profile", "objective", "about"];
const PROFILE_END: &[&str] = &["experience", "education", "skills", "projects", "work history"];
const PROFILE_MAX_CHARS: usize = 600;

/// Result of running an extraction engine over raw resume text.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionOutcome {
    pub resume: CanonicalResume,
    /// Rough share of canonical fields the engine managed to fill, 0.0..=1.0.
    pub confidence: f32,
    #[serde(rename = "extractedFields")]
    pub extracted_fields: Vec<String>,
    #[serde(rename = "missingFields")]
    pub missing_fields: Vec<String>,
    pub engine: String,
}

#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<ExtractionOutcome, AppError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Deterministic builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builds a resume from raw text using the pattern tables alone. Pure and
/// deterministic: same text in, same record out, and `meta` stays at its
/// defaults until the caller recomputes it against a clock.
pub fn build_resume(text: &str) -> CanonicalResume {
    let lines: Vec<String> = text
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    let mut resume = CanonicalResume::empty();
    resume.header.name = contact::extract_name(&lines);
    resume.header.email = contact::extract_email(text);
    resume.header.phone = contact::extract_phone(text);
    resume.header.linkedin = contact::extract_linkedin(text);
    resume.header.github = contact::extract_github(text);
    resume.profile = extract_profile(&lines);
    resume.skills = skills::extract_skills(&lines, text);
    resume.experience = experience::extract_experience(&lines);
    resume.education = education::extract_education(&lines);
    resume.projects = projects::extract_projects(&lines);
    resume
}

fn extract_profile(lines: &[String]) -> String {
    let section = locate_section(lines, PROFILE_START, PROFILE_END, 10);
    let joined = section.join(" ");
    truncate_chars(joined.trim(), PROFILE_MAX_CHARS)
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Engines
// ─────────────────────────────────────────────────────────────────────────────

/// Local engine backed by the pattern tables.
pub struct RegexExtractor;

#[async_trait]
impl Extractor for RegexExtractor {
    async fn extract(&self, text: &str) -> Result<ExtractionOutcome, AppError> {
        let resume = build_resume(text);
        let (extracted, missing) = field_report(&resume);
        let confidence = extracted.len() as f32 / (extracted.len() + missing.len()) as f32;
        Ok(ExtractionOutcome {
            resume,
            confidence,
            extracted_fields: extracted,
            missing_fields: missing,
            engine: "regex".to_string(),
        })
    }
}

/// Remote engine. Any provider failure degrades to the local engine so a
/// parse request never fails on provider availability alone.
pub struct LlmExtractor {
    client: LlmClient,
    fallback: RegexExtractor,
}

impl LlmExtractor {
    pub fn new(client: LlmClient) -> Self {
        Self { client, fallback: RegexExtractor }
    }
}

#[async_trait]
impl Extractor for LlmExtractor {
    async fn extract(&self, text: &str) -> Result<ExtractionOutcome, AppError> {
        match self.client.extract_resume(text).await {
            Ok(remote) => {
                let (extracted, missing) = field_report(&remote.resume);
                Ok(ExtractionOutcome {
                    resume: remote.resume,
                    confidence: remote.confidence,
                    extracted_fields: extracted,
                    missing_fields: missing,
                    engine: "llm".to_string(),
                })
            }
            Err(err) => {
                warn!(error = %err, "llm extraction failed, falling back to regex engine");
                self.fallback.extract(text).await
            }
        }
    }
}

/// Selects the engine from config: the remote engine needs both the feature
/// flag and an API key, everything else gets the local engine.
pub fn select_extractor(config: &crate::config::Config) -> Arc<dyn Extractor> {
    match (&config.llm_api_key, config.enable_llm_extraction) {
        (Some(key), true) => Arc::new(LlmExtractor::new(LlmClient::new(key.clone()))),
        _ => Arc::new(RegexExtractor),
    }
}

fn field_report(resume: &CanonicalResume) -> (Vec<String>, Vec<String>) {
    let mut extracted = Vec::new();
    let mut missing = Vec::new();
    let mut note = |name: &str, present: bool| {
        if present {
            extracted.push(name.to_string());
        } else {
            missing.push(name.to_string());
        }
    };

    note("name", !resume.header.name.is_empty());
    note("email", !resume.header.email.is_empty());
    note("phone", !resume.header.phone.is_empty());
    note("linkedin", !resume.header.linkedin.is_empty());
    note("github", !resume.header.github.is_empty());
    note("profile", !resume.profile.is_empty());
    note("skills", !resume.skills.is_empty());
    note("experience", !resume.experience.is_empty());
    note("education", !resume.education.is_empty());
    note("projects", !resume.projects.is_empty());

    (extracted, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Priya Sharma
priya.sharma@example.com
+91 9876543210
linkedin.com/in/priyasharma

Summary
Backend engineer focused on reliable payment systems.

Skills
Python, Go, Docker, PostgreSQL

Experience
Software Engineer at Finly 01/2020 - Present
• Designed the ledger reconciliation service in Go

Education
B.Tech in Computer Science, Indian Institute of Technology, 2019
";

    #[test]
    fn test_build_resume_fills_all_sections() {
        let resume = build_resume(SAMPLE);
        assert_eq!(resume.header.name, "Priya Sharma");
        assert_eq!(resume.header.email, "priya.sharma@example.com");
        assert!(resume.profile.contains("payment systems"));
        assert!(!resume.skills.is_empty());
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.experience[0].company, "Finly");
        assert_eq!(resume.education.len(), 1);
    }

    #[test]
    fn test_build_resume_is_deterministic() {
        // Whole-record equality, entry ids included.
        assert_eq!(build_resume(SAMPLE), build_resume(SAMPLE));
    }

    #[test]
    fn test_builder_ids_are_index_derived() {
        let resume = build_resume(SAMPLE);
        assert_eq!(resume.experience[0].id, "exp_0");
        assert_eq!(resume.education[0].id, "edu_0");
    }

    #[test]
    fn test_meta_untouched_by_builder() {
        let resume = build_resume(SAMPLE);
        assert_eq!(resume.meta.experience_years, 0.0);
    }

    #[test]
    fn test_profile_truncated() {
        let long = format!("Summary\n{}\nExperience\nEngineer at X 2020 - 2021", "a".repeat(900));
        let resume = build_resume(&long);
        assert_eq!(resume.profile.chars().count(), PROFILE_MAX_CHARS);
    }

    #[tokio::test]
    async fn test_regex_engine_reports_fields() {
        let outcome = RegexExtractor.extract(SAMPLE).await.unwrap();
        assert_eq!(outcome.engine, "regex");
        assert!(outcome.extracted_fields.contains(&"email".to_string()));
        assert!(outcome.missing_fields.contains(&"github".to_string()));
        assert!(outcome.confidence > 0.0 && outcome.confidence <= 1.0);
    }
}
