//! Derived analysis over a canonical resume: tenure, seniority, targeting.

pub mod dates;
pub mod handlers;
pub mod seniority;
pub mod targeting;
pub mod tenure;

use chrono::NaiveDate;

use crate::models::CanonicalResume;

/// Recomputes the derived `meta` block in place. `today` is injected so
/// open-ended entries resolve against the caller's clock, not an ambient one.
pub fn recompute_meta(resume: &mut CanonicalResume, today: NaiveDate) {
    let years = tenure::compute_experience_years(&resume.experience, today);
    let (level, reason) = seniority::classify(&resume.experience, years);
    resume.meta.experience_years = years;
    resume.meta.profile_level = level;
    resume.meta.profile_reason = reason;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{new_entry_id, ExperienceEntry, ProfileLevel};

    #[test]
    fn test_recompute_meta_sets_all_fields() {
        let mut resume = CanonicalResume::empty();
        resume.experience.push(ExperienceEntry {
            id: new_entry_id("exp"),
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "01/2016".to_string(),
            end_date: "01/2024".to_string(),
            bullets: vec![],
        });
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        recompute_meta(&mut resume, today);
        assert_eq!(resume.meta.experience_years, 8.0);
        assert_eq!(resume.meta.profile_level, ProfileLevel::Senior);
        assert!(!resume.meta.profile_reason.is_empty());
    }
}
