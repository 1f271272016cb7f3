//! Education extraction. One degree-bearing line becomes one entry; the
//! institution and year are picked out of the same line when present.

use crate::extract::patterns::{DEGREE, DEGREE_CAPTURE, INSTITUTION, YEAR};
use crate::extract::section::locate_section;
use crate::models::EducationEntry;

const EDUCATION_START: &[&str] = &["education", "academic", "qualification"];
const EDUCATION_END: &[&str] = &["skills", "projects", "experience", "certifications", "achievements"];

pub fn extract_education(lines: &[String]) -> Vec<EducationEntry> {
    let section = locate_section(lines, EDUCATION_START, EDUCATION_END, 30);
    parse_entries(section)
}

pub fn parse_entries(section: &[String]) -> Vec<EducationEntry> {
    let mut entries = Vec::new();

    for line in section {
        if !DEGREE.is_match(line) {
            continue;
        }

        let degree = DEGREE_CAPTURE
            .find(line)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| line.trim().to_string());
        let institution = INSTITUTION
            .find(line)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        let year = YEAR
            .find(line)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        entries.push(EducationEntry {
            // Index-derived so repeated builds produce identical records.
            id: format!("edu_{}", entries.len()),
            degree,
            institution,
            year,
        });
    }

    entries
}
