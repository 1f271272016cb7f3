//! Canonical resume model — the single structured record the whole pipeline
//! operates on, independent of how the source PDF was formatted.
//!
//! Field names on the wire stay camelCase (`startDate`, `endDate`) so the
//! record round-trips unchanged against the frontend. Absence is always the
//! empty string / empty vec, never null — extractors degrade softly and the
//! validator is the only place ambiguity becomes an actionable issue.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Contact block. Empty string means "not found".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

/// One work-experience entry. `end_date` is either a date string or the
/// sentinel `"Present"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
}

/// One skill category. Items are de-duplicated case-insensitively at build time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

/// Seniority tier derived from tenure and title keywords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileLevel {
    #[default]
    Fresher,
    Intern,
    Professional,
    Senior,
}

/// Derived facts, recomputed on every mutation. Never hand-edited: always a
/// pure function of `experience` (plus title text for the level).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeMeta {
    pub experience_years: f64,
    pub profile_level: ProfileLevel,
    pub profile_reason: String,
}

/// The canonical record. Section vecs preserve document order as encountered
/// in the source text; that order is also the default render order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalResume {
    #[serde(default)]
    pub header: Header,
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    /// Opaque image reference; ownership is external to the core.
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub meta: ResumeMeta,
}

impl CanonicalResume {
    /// Fresh empty record for session start. All keys present, arrays empty.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Random entry id for entries inserted after build (manual additions in the
/// editor). The extractors assign index-derived ids instead, so building the
/// same text twice yields identical records.
#[allow(dead_code)]
pub fn new_entry_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_is_structurally_complete() {
        let r = CanonicalResume::empty();
        assert_eq!(r.header.name, "");
        assert!(r.experience.is_empty());
        assert!(r.skills.is_empty());
        assert_eq!(r.meta.profile_level, ProfileLevel::Fresher);
        assert_eq!(r.meta.experience_years, 0.0);
    }

    #[test]
    fn test_profile_level_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProfileLevel::Senior).unwrap(),
            "\"senior\""
        );
        let level: ProfileLevel = serde_json::from_str("\"professional\"").unwrap();
        assert_eq!(level, ProfileLevel::Professional);
    }

    #[test]
    fn test_experience_entry_uses_camel_case_dates() {
        let entry = ExperienceEntry {
            id: "exp_1".to_string(),
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "01/2020".to_string(),
            end_date: "Present".to_string(),
            bullets: vec![],
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"startDate\":\"01/2020\""));
        assert!(json.contains("\"endDate\":\"Present\""));
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let mut r = CanonicalResume::empty();
        r.header.name = "Jane Doe".to_string();
        r.skills.push(SkillGroup {
            category: "Languages".to_string(),
            items: vec!["rust".to_string()],
        });
        let json = serde_json::to_string(&r).unwrap();
        let back: CanonicalResume = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn test_missing_fields_default_on_deserialize() {
        let r: CanonicalResume = serde_json::from_str("{}").unwrap();
        assert_eq!(r, CanonicalResume::empty());
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let a = new_entry_id("exp");
        let b = new_entry_id("exp");
        assert_ne!(a, b);
        assert!(a.starts_with("exp_"));
    }
}
