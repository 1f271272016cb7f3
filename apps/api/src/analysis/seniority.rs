//! Seniority classification from tenure and role titles.

use crate::models::{ExperienceEntry, ProfileLevel};

const SENIOR_YEARS: f64 = 7.0;
const PROFESSIONAL_YEARS: f64 = 3.0;

const SENIOR_TITLES: &[&str] = &["director", "vp", "head", "principal"];
const PROFESSIONAL_TITLES: &[&str] = &["senior", "lead", "manager"];
const INTERN_TITLES: &[&str] = &["intern", "trainee"];

fn any_role_contains(entries: &[ExperienceEntry], keywords: &[&str]) -> bool {
    entries.iter().any(|e| {
        let role = e.role.to_lowercase();
        keywords.iter().any(|k| role.contains(k))
    })
}

/// Walks the ladder top down. Role keywords can promote past what tenure
/// alone would grant, so a short-tenure "Senior Backend Intern" still reads
/// as professional rather than intern.
pub fn classify(entries: &[ExperienceEntry], years: f64) -> (ProfileLevel, String) {
    if years >= SENIOR_YEARS {
        return (
            ProfileLevel::Senior,
            format!("{years:.1} years of experience"),
        );
    }
    if any_role_contains(entries, SENIOR_TITLES) {
        return (
            ProfileLevel::Senior,
            "senior leadership title held".to_string(),
        );
    }
    if years >= PROFESSIONAL_YEARS {
        return (
            ProfileLevel::Professional,
            format!("{years:.1} years of experience"),
        );
    }
    if any_role_contains(entries, PROFESSIONAL_TITLES) {
        return (
            ProfileLevel::Professional,
            "senior-track title held".to_string(),
        );
    }
    if any_role_contains(entries, INTERN_TITLES) {
        return (ProfileLevel::Intern, "internship roles only".to_string());
    }
    (
        ProfileLevel::Fresher,
        "no substantial experience found".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::new_entry_id;

    fn make_entry(role: &str) -> ExperienceEntry {
        ExperienceEntry {
            id: new_entry_id("exp"),
            role: role.to_string(),
            company: "Acme".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            bullets: vec![],
        }
    }

    #[test]
    fn test_tenure_grants_senior() {
        let (level, reason) = classify(&[make_entry("Engineer")], 8.0);
        assert_eq!(level, ProfileLevel::Senior);
        assert!(reason.contains("8.0"));
    }

    #[test]
    fn test_title_grants_senior_without_tenure() {
        let (level, _) = classify(&[make_entry("VP of Engineering")], 2.0);
        assert_eq!(level, ProfileLevel::Senior);
    }

    #[test]
    fn test_three_years_is_professional() {
        let (level, _) = classify(&[make_entry("Engineer")], 3.5);
        assert_eq!(level, ProfileLevel::Professional);
    }

    #[test]
    fn test_senior_intern_title_reads_professional() {
        let (level, _) = classify(&[make_entry("Senior Backend Intern")], 1.0);
        assert_eq!(level, ProfileLevel::Professional);
    }

    #[test]
    fn test_plain_intern() {
        let (level, _) = classify(&[make_entry("Software Intern")], 0.5);
        assert_eq!(level, ProfileLevel::Intern);
    }

    #[test]
    fn test_no_experience_is_fresher() {
        let (level, _) = classify(&[], 0.0);
        assert_eq!(level, ProfileLevel::Fresher);
    }
}
