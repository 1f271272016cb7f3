//! Experience-entry segmentation.
//!
//! Within the located Experience section, a line opens a new entry when it
//! carries a date range or starts with a role-like keyword. Everything else
//! long enough to be prose accumulates as bullets on the current entry.

use crate::extract::patterns::{BULLET_GLYPH, DATE_RANGE, ROLE_PREFIX};
use crate::extract::section::locate_section;
use crate::models::ExperienceEntry;

const EXPERIENCE_START: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "employment",
    "work history",
    "career",
];
const EXPERIENCE_END: &[&str] = &["education", "academic", "skills", "projects", "certifications"];

/// Separators splitting a boundary line into role / company.
const ROLE_COMPANY_SEPARATORS: &[&str] = &[" at ", " @ ", " - ", " | ", " , "];

/// Bullets shorter than this are discarded as noise.
const MIN_BULLET_LEN: usize = 15;

pub fn extract_experience(lines: &[String]) -> Vec<ExperienceEntry> {
    let section = locate_section(lines, EXPERIENCE_START, EXPERIENCE_END, 50);
    parse_entries(section)
}

/// Segments raw experience-section lines into entries. Exposed for the
/// builder so tests can drive it with a hand-picked section.
pub fn parse_entries(section: &[String]) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut current: Option<ExperienceEntry> = None;

    for line in section {
        let date_match = DATE_RANGE.captures(line);
        let is_boundary = date_match.is_some() || ROLE_PREFIX.is_match(line);

        if is_boundary {
            flush(&mut entries, current.take());

            let (start_date, end_date) = match &date_match {
                Some(c) => (c[1].to_string(), c[2].to_string()),
                None => (String::new(), String::new()),
            };
            let remainder = DATE_RANGE.replace(line, "").trim().to_string();
            let (role, company) = split_role_company(&remainder);

            current = Some(ExperienceEntry {
                id: String::new(),
                role,
                company,
                start_date,
                end_date,
                bullets: Vec::new(),
            });
        } else if let Some(entry) = current.as_mut() {
            if line.len() > MIN_BULLET_LEN && !DATE_RANGE.is_match(line) {
                let bullet = BULLET_GLYPH.replace(line, "").trim().to_string();
                if !bullet.is_empty() {
                    entry.bullets.push(bullet);
                }
            }
        }
    }

    flush(&mut entries, current);
    entries
}

/// Drops in-progress entries that never acquired a role — stray date ranges
/// inside prose produce boundary lines with nothing usable on them. Kept
/// entries get index-derived ids so the same text always yields the same
/// record; random ids are reserved for entries inserted after build.
fn flush(entries: &mut Vec<ExperienceEntry>, current: Option<ExperienceEntry>) {
    if let Some(mut entry) = current {
        if !entry.role.is_empty() {
            entry.id = format!("exp_{}", entries.len());
            entries.push(entry);
        }
    }
}

fn split_role_company(remainder: &str) -> (String, String) {
    for sep in ROLE_COMPANY_SEPARATORS {
        if let Some(idx) = remainder.find(sep) {
            let role = remainder[..idx].trim().to_string();
            let company = remainder[idx + sep.len()..].trim().to_string();
            return (role, company);
        }
    }
    (remainder.trim().to_string(), String::new())
}
