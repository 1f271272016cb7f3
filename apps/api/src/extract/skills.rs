//! Categorized skill extraction.
//!
//! The Skills section text (when located) is concatenated with the entire
//! document as a fallback — skills routinely appear inline in experience
//! bullets on resumes with no dedicated section. Three fixed categories are
//! scanned in order: languages, frameworks, tools.

use regex::Regex;

use crate::extract::patterns::{FRAMEWORKS, LANGUAGES, TOOLS};
use crate::extract::section::locate_section;
use crate::models::SkillGroup;

const SKILLS_START: &[&str] = &[
    "skills",
    "technical skills",
    "technologies",
    "competencies",
    "expertise",
];
const SKILLS_END: &[&str] = &["experience", "employment", "education", "projects"];

/// Extracts categorized skills from the skills section plus the full text.
/// Categories with no hits are omitted; items are de-duplicated
/// case-insensitively and kept lower-case.
pub fn extract_skills(lines: &[String], full_text: &str) -> Vec<SkillGroup> {
    let section = locate_section(lines, SKILLS_START, SKILLS_END, 20);
    let mut haystack = section.join(" ");
    haystack.push(' ');
    haystack.push_str(full_text);

    let mut groups = Vec::new();
    for (category, pattern) in [
        ("Languages", &*LANGUAGES),
        ("Frameworks", &*FRAMEWORKS),
        ("Tools", &*TOOLS),
    ] {
        let items = matched_set(pattern, &haystack);
        if !items.is_empty() {
            groups.push(SkillGroup {
                category: category.to_string(),
                items,
            });
        }
    }
    groups
}

/// All distinct matches of `pattern` in `text`, lower-cased, first-seen order.
pub fn matched_set(pattern: &Regex, text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for m in pattern.find_iter(text) {
        let item = m.as_str().to_lowercase();
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}
