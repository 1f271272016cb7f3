//! Resume validation.
//!
//! Produces an ordered list of issues, each carrying a dot-path `field` the
//! editor can focus and, where a one-click repair makes sense, a set of fix
//! options. ERROR means the resume is structurally broken; WARNING means it
//! will render but reads poorly.

pub mod handlers;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::analysis::dates::parse_date;
use crate::analysis::recompute_meta;
use crate::analysis::tenure::is_part_time;
use crate::extract::patterns::EMAIL_STRICT;
use crate::models::CanonicalResume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub id: String,
    pub severity: Severity,
    pub section: String,
    /// Human-readable anchor, e.g. the role/company of the offending entry.
    pub context: String,
    /// Dot path into the canonical record, e.g. `experience.0.endDate`.
    pub field: String,
    pub message: String,
    #[serde(default)]
    pub fix_options: Vec<FixOption>,
}

const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;
const INTERN_MISMATCH_YEARS: f64 = 10.0;

fn issue(
    id: impl Into<String>,
    severity: Severity,
    section: &str,
    context: impl Into<String>,
    field: impl Into<String>,
    message: impl Into<String>,
) -> ValidationIssue {
    ValidationIssue {
        id: id.into(),
        severity,
        section: section.to_string(),
        context: context.into(),
        field: field.into(),
        message: message.into(),
        fix_options: vec![],
    }
}

fn set_date_option(today: NaiveDate) -> FixOption {
    FixOption {
        label: "Set date".to_string(),
        value: format!("{:02}/{}", today.month(), today.year()),
    }
}

fn mark_present_option() -> FixOption {
    FixOption {
        label: "Mark as Present".to_string(),
        value: "Present".to_string(),
    }
}

fn is_open_ended(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "present" | "current" | "now")
}

pub fn validate(resume: &CanonicalResume, today: NaiveDate) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_header(resume, &mut issues);
    check_experience_dates(resume, today, &mut issues);
    check_overlaps(resume, today, &mut issues);
    check_skills(resume, &mut issues);
    check_intern_mismatch(resume, today, &mut issues);

    issues
}

fn check_header(resume: &CanonicalResume, issues: &mut Vec<ValidationIssue>) {
    let header = &resume.header;

    if header.name.trim().is_empty() {
        issues.push(issue(
            "name",
            Severity::Error,
            "header",
            "Header",
            "header.name",
            "Name is required",
        ));
    }

    if header.email.trim().is_empty() {
        issues.push(issue(
            "email",
            Severity::Error,
            "header",
            "Header",
            "header.email",
            "Email is required",
        ));
    } else if !EMAIL_STRICT.is_match(header.email.trim()) {
        issues.push(issue(
            "email_format",
            Severity::Error,
            "header",
            "Header",
            "header.email",
            "Email address is not valid",
        ));
    }

    if header.phone.trim().is_empty() {
        issues.push(issue(
            "phone",
            Severity::Warning,
            "header",
            "Header",
            "header.phone",
            "No phone number found",
        ));
    } else {
        let digits = header
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit())
            .count();
        if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
            issues.push(issue(
                "phone_format",
                Severity::Error,
                "header",
                "Header",
                "header.phone",
                "Phone number should contain 10 to 15 digits",
            ));
        }
    }
}

fn check_experience_dates(
    resume: &CanonicalResume,
    today: NaiveDate,
    issues: &mut Vec<ValidationIssue>,
) {
    for (i, entry) in resume.experience.iter().enumerate() {
        let context = format!("{} at {}", entry.role, entry.company);

        if entry.start_date.trim().is_empty() {
            let mut iss = issue(
                format!("exp_{i}_start"),
                Severity::Error,
                "experience",
                context.clone(),
                format!("experience.{i}.startDate"),
                "Start date is missing",
            );
            iss.fix_options.push(set_date_option(today));
            issues.push(iss);
        }

        if entry.end_date.trim().is_empty() {
            let mut iss = issue(
                format!("exp_{i}_end"),
                Severity::Error,
                "experience",
                context.clone(),
                format!("experience.{i}.endDate"),
                "End date is missing",
            );
            iss.fix_options.push(mark_present_option());
            iss.fix_options.push(set_date_option(today));
            issues.push(iss);
        }

        if !is_open_ended(&entry.end_date) {
            if let (Some(start), Some(end)) =
                (parse_date(&entry.start_date), parse_date(&entry.end_date))
            {
                if end < start {
                    issues.push(issue(
                        format!("exp_{i}_inverted"),
                        Severity::Error,
                        "experience",
                        context,
                        format!("experience.{i}"),
                        "End date is before start date",
                    ));
                }
            }
        }
    }
}

/// Overlap policy: two concurrent full-time jobs draw a WARNING, a full-time
/// job overlapping part-time work draws a softer WARNING, and two part-time
/// engagements may overlap freely. Never an ERROR — moonlighting is unusual,
/// not impossible.
fn check_overlaps(resume: &CanonicalResume, today: NaiveDate, issues: &mut Vec<ValidationIssue>) {
    let mut dated: Vec<(usize, NaiveDate, NaiveDate)> = resume
        .experience
        .iter()
        .enumerate()
        .filter_map(|(i, e)| {
            let start = parse_date(&e.start_date)?;
            let end = if is_open_ended(&e.end_date) {
                today
            } else {
                parse_date(&e.end_date)?
            };
            Some((i, start, end))
        })
        .collect();
    dated.sort_by_key(|(_, start, _)| *start);

    for pair in dated.windows(2) {
        let (prev_idx, _, prev_end) = pair[0];
        let (next_idx, next_start, _) = pair[1];
        if prev_end <= next_start {
            continue;
        }

        let prev = &resume.experience[prev_idx];
        let next = &resume.experience[next_idx];
        let prev_pt = is_part_time(&prev.role, &prev.company);
        let next_pt = is_part_time(&next.role, &next.company);
        if prev_pt && next_pt {
            continue;
        }

        let message = if prev_pt || next_pt {
            format!(
                "'{}' overlaps with part-time work '{}'",
                next.role, prev.role
            )
        } else {
            format!(
                "'{}' overlaps with '{}' — check the dates",
                next.role, prev.role
            )
        };

        issues.push(issue(
            format!("overlap_{next_idx}"),
            Severity::Warning,
            "experience",
            format!("{} at {}", next.role, next.company),
            format!("experience.{next_idx}"),
            message,
        ));
    }
}

fn check_skills(resume: &CanonicalResume, issues: &mut Vec<ValidationIssue>) {
    let has_items = resume
        .skills
        .iter()
        .any(|g| g.items.iter().any(|i| !i.trim().is_empty()));
    if !has_items {
        issues.push(issue(
            "skills",
            Severity::Warning,
            "skills",
            "Skills",
            "skills",
            "No skills listed",
        ));
    }
}

/// A resume carrying intern/trainee titles alongside more than a decade of
/// tenure is suspicious. If the discount for part-time work already pulls
/// the total back under the line, the dates merely look odd; if it does not,
/// something is wrong.
fn check_intern_mismatch(
    resume: &CanonicalResume,
    today: NaiveDate,
    issues: &mut Vec<ValidationIssue>,
) {
    let has_intern = resume.experience.iter().any(|e| {
        let role = e.role.to_lowercase();
        role.contains("intern") || role.contains("trainee")
    });
    if !has_intern {
        return;
    }

    let raw_years = raw_experience_years(resume, today);
    if raw_years <= INTERN_MISMATCH_YEARS {
        return;
    }

    let discounted = crate::analysis::tenure::compute_experience_years(&resume.experience, today);
    let severity = if discounted > INTERN_MISMATCH_YEARS {
        Severity::Error
    } else {
        Severity::Warning
    };
    issues.push(issue(
        "intern_mismatch",
        severity,
        "experience",
        "Experience",
        "experience",
        format!("Intern role alongside {raw_years:.1} years of history — check the dates"),
    ));
}

/// Tenure with no part-time discount, for the mismatch check above.
fn raw_experience_years(resume: &CanonicalResume, today: NaiveDate) -> f64 {
    let mut total = 0.0;
    for entry in &resume.experience {
        let Some(start) = parse_date(&entry.start_date) else {
            continue;
        };
        let end = if is_open_ended(&entry.end_date) {
            today
        } else {
            match parse_date(&entry.end_date) {
                Some(d) => d,
                None => continue,
            }
        };
        total += (end - start).num_days() as f64 / 365.0;
    }
    (total * 10.0).round() / 10.0
}

// ─────────────────────────────────────────────────────────────────────────────
// Fix application
// ─────────────────────────────────────────────────────────────────────────────

/// Applies a single fix value at a dot path and recomputes the derived meta.
/// Unknown paths are a validation error rather than a panic, since the path
/// comes in off the wire.
pub fn apply_fix(
    mut resume: CanonicalResume,
    field: &str,
    value: &str,
    today: NaiveDate,
) -> Result<CanonicalResume, crate::errors::AppError> {
    set_field(&mut resume, field, value)?;
    recompute_meta(&mut resume, today);
    Ok(resume)
}

fn set_field(
    resume: &mut CanonicalResume,
    field: &str,
    value: &str,
) -> Result<(), crate::errors::AppError> {
    let bad_path =
        || crate::errors::AppError::Validation(format!("Unknown field path '{field}'"));

    let mut parts = field.split('.');
    match parts.next() {
        Some("header") => {
            let slot = match parts.next() {
                Some("name") => &mut resume.header.name,
                Some("email") => &mut resume.header.email,
                Some("phone") => &mut resume.header.phone,
                Some("linkedin") => &mut resume.header.linkedin,
                Some("github") => &mut resume.header.github,
                _ => return Err(bad_path()),
            };
            *slot = value.to_string();
        }
        Some("profile") => resume.profile = value.to_string(),
        Some("experience") => {
            let idx: usize = parts
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(bad_path)?;
            let entry = resume.experience.get_mut(idx).ok_or_else(bad_path)?;
            let slot = match parts.next() {
                Some("startDate") => &mut entry.start_date,
                Some("endDate") => &mut entry.end_date,
                Some("role") => &mut entry.role,
                Some("company") => &mut entry.company,
                _ => return Err(bad_path()),
            };
            *slot = value.to_string();
        }
        _ => return Err(bad_path()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{new_entry_id, ExperienceEntry, SkillGroup};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn make_entry(role: &str, start: &str, end: &str) -> ExperienceEntry {
        ExperienceEntry {
            id: new_entry_id("exp"),
            role: role.to_string(),
            company: "Acme".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            bullets: vec![],
        }
    }

    fn make_valid_resume() -> CanonicalResume {
        let mut resume = CanonicalResume::empty();
        resume.header.name = "Jane Doe".to_string();
        resume.header.email = "jane@example.com".to_string();
        resume.header.phone = "+1 415-555-0123".to_string();
        resume.skills.push(SkillGroup {
            category: "Languages".to_string(),
            items: vec!["Rust".to_string()],
        });
        resume
    }

    #[test]
    fn test_clean_resume_has_no_issues() {
        let mut resume = make_valid_resume();
        resume.experience.push(make_entry("Engineer", "01/2020", "Present"));
        assert!(validate(&resume, today()).is_empty());
    }

    #[test]
    fn test_missing_name_and_bad_email_are_errors() {
        let mut resume = make_valid_resume();
        resume.header.name = String::new();
        resume.header.email = "abc".to_string();
        let issues = validate(&resume, today());
        let errors: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .collect();
        assert!(errors.len() >= 2);
        assert!(issues.iter().all(|i| i.severity != Severity::Warning));
    }

    #[test]
    fn test_missing_phone_is_warning() {
        let mut resume = make_valid_resume();
        resume.header.phone = String::new();
        let issues = validate(&resume, today());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "phone");
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_short_phone_is_error() {
        let mut resume = make_valid_resume();
        resume.header.phone = "12345".to_string();
        let issues = validate(&resume, today());
        assert_eq!(issues[0].id, "phone_format");
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_missing_end_date_offers_both_fixes() {
        let mut resume = make_valid_resume();
        resume.experience.push(make_entry("Engineer", "01/2020", ""));
        let issues = validate(&resume, today());
        let iss = issues.iter().find(|i| i.id == "exp_0_end").unwrap();
        assert_eq!(iss.field, "experience.0.endDate");
        let labels: Vec<_> = iss.fix_options.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Mark as Present", "Set date"]);
        assert_eq!(iss.fix_options[1].value, "06/2024");
    }

    #[test]
    fn test_inverted_range_is_error() {
        let mut resume = make_valid_resume();
        resume.experience.push(make_entry("Engineer", "01/2022", "01/2021"));
        let issues = validate(&resume, today());
        assert_eq!(issues[0].id, "exp_0_inverted");
        assert_eq!(issues[0].field, "experience.0");
    }

    #[test]
    fn test_full_time_overlap_is_single_warning() {
        let mut resume = make_valid_resume();
        resume.experience.push(make_entry("Engineer", "01/2020", "01/2022"));
        resume.experience.push(make_entry("Developer", "06/2021", "06/2023"));
        let issues = validate(&resume, today());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "overlap_1");
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].field, "experience.1");
    }

    #[test]
    fn test_two_part_time_overlaps_allowed() {
        let mut resume = make_valid_resume();
        resume.experience.push(make_entry("Intern", "01/2020", "01/2022"));
        resume.experience.push(make_entry("Freelance Designer", "06/2021", "06/2023"));
        assert!(validate(&resume, today()).is_empty());
    }

    #[test]
    fn test_adjacent_ranges_do_not_overlap() {
        let mut resume = make_valid_resume();
        resume.experience.push(make_entry("Engineer", "01/2020", "01/2021"));
        resume.experience.push(make_entry("Developer", "01/2021", "01/2022"));
        assert!(validate(&resume, today()).is_empty());
    }

    #[test]
    fn test_empty_skills_is_warning() {
        let mut resume = make_valid_resume();
        resume.skills.clear();
        let issues = validate(&resume, today());
        assert_eq!(issues[0].id, "skills");
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_intern_decade_is_warning_when_discount_saves_it() {
        let mut resume = make_valid_resume();
        resume.experience.push(make_entry("Intern", "01/2010", "01/2022"));
        let issues = validate(&resume, today());
        let iss = issues.iter().find(|i| i.id == "intern_mismatch").unwrap();
        // 12 raw years discounted to 6 — odd, but not impossible.
        assert_eq!(iss.severity, Severity::Warning);
    }

    #[test]
    fn test_intern_multi_decade_is_error() {
        let mut resume = make_valid_resume();
        resume.experience.push(make_entry("Intern", "01/1998", "01/2022"));
        let issues = validate(&resume, today());
        let iss = issues.iter().find(|i| i.id == "intern_mismatch").unwrap();
        assert_eq!(iss.severity, Severity::Error);
    }

    #[test]
    fn test_single_intern_role_in_long_history_still_flagged() {
        let mut resume = make_valid_resume();
        resume.experience.push(make_entry("Engineer", "01/2008", "01/2022"));
        resume.experience.push(make_entry("Intern", "01/2007", "01/2008"));
        let issues = validate(&resume, today());
        // 15 raw years with an intern title in the mix; the discount does not
        // explain it away.
        let iss = issues.iter().find(|i| i.id == "intern_mismatch").unwrap();
        assert_eq!(iss.severity, Severity::Error);
    }

    #[test]
    fn test_apply_fix_marks_present_and_recomputes() {
        let mut resume = make_valid_resume();
        resume.experience.push(make_entry("Engineer", "01/2020", ""));
        let fixed = apply_fix(resume, "experience.0.endDate", "Present", today()).unwrap();
        assert_eq!(fixed.experience[0].end_date, "Present");
        assert!(fixed.meta.experience_years > 4.0);
    }

    #[test]
    fn test_apply_fix_header_path() {
        let resume = make_valid_resume();
        let fixed = apply_fix(resume, "header.name", "Janet Doe", today()).unwrap();
        assert_eq!(fixed.header.name, "Janet Doe");
    }

    #[test]
    fn test_apply_fix_rejects_unknown_path() {
        let resume = make_valid_resume();
        assert!(apply_fix(resume, "header.shoe_size", "12", today()).is_err());
    }
}
