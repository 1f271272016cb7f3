//! Project extraction. Short standalone lines name a project; following prose
//! becomes the description, with known technologies pulled into a tech list.

use crate::extract::patterns::{BULLET_GLYPH, PROJECT_TECH};
use crate::extract::section::locate_section;
use crate::extract::skills::matched_set;
use crate::models::ProjectEntry;

const PROJECTS_START: &[&str] = &["projects", "personal projects", "academic projects", "portfolio"];
const PROJECTS_END: &[&str] = &["education", "skills", "experience", "certifications", "achievements"];

/// Lines at or beyond this length read as prose, not project titles.
const MAX_TITLE_LEN: usize = 60;

pub fn extract_projects(lines: &[String]) -> Vec<ProjectEntry> {
    let section = locate_section(lines, PROJECTS_START, PROJECTS_END, 40);
    parse_entries(section)
}

pub fn parse_entries(section: &[String]) -> Vec<ProjectEntry> {
    let mut projects: Vec<ProjectEntry> = Vec::new();

    for line in section {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if is_title_line(trimmed) {
            projects.push(ProjectEntry {
                id: format!("proj_{}", projects.len()),
                name: trimmed.to_string(),
                description: String::new(),
                tech: Vec::new(),
            });
        } else if let Some(project) = projects.last_mut() {
            let text = BULLET_GLYPH.replace(trimmed, "").trim().to_string();
            if !project.description.is_empty() {
                project.description.push(' ');
            }
            project.description.push_str(&text);
            for tech in matched_set(&PROJECT_TECH, &text) {
                if !project.tech.contains(&tech) {
                    project.tech.push(tech);
                }
            }
        }
    }

    projects
}

fn is_title_line(line: &str) -> bool {
    line.len() < MAX_TITLE_LEN
        && !line.contains('.')
        && !line.starts_with(|c: char| c.is_ascii_digit())
        && !BULLET_GLYPH.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_title_then_description() {
        let section = lines(&[
            "Inventory Tracker",
            "Built a warehouse dashboard with React and PostgreSQL backing.",
        ]);
        let projects = parse_entries(&section);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Inventory Tracker");
        assert!(projects[0].description.contains("warehouse"));
        assert_eq!(projects[0].tech, vec!["react", "postgresql"]);
    }

    #[test]
    fn test_multiline_description_joined() {
        let section = lines(&[
            "Chat Service",
            "• Real-time messaging over websockets.",
            "• Deployed with Docker on AWS.",
        ]);
        let projects = parse_entries(&section);
        assert_eq!(projects.len(), 1);
        assert_eq!(
            projects[0].description,
            "Real-time messaging over websockets. Deployed with Docker on AWS."
        );
        assert_eq!(projects[0].tech, vec!["docker", "aws"]);
    }

    #[test]
    fn test_description_before_any_title_ignored() {
        let section = lines(&["Assorted work done over the years."]);
        assert!(parse_entries(&section).is_empty());
    }

    #[test]
    fn test_multiple_projects() {
        let section = lines(&[
            "URL Shortener",
            "Node service with Redis counters.",
            "Portfolio Site",
            "Static site built with Vue.",
        ]);
        let projects = parse_entries(&section);
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "URL Shortener");
        assert_eq!(projects[1].name, "Portfolio Site");
        assert_eq!(projects[1].tech, vec!["vue"]);
    }

    #[test]
    fn test_title_may_contain_a_year() {
        let section = lines(&[
            "Inventory Tracker 2023",
            "Warehouse dashboard built with React.",
        ]);
        let projects = parse_entries(&section);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Inventory Tracker 2023");
    }

    #[test]
    fn test_leading_digit_line_is_not_a_title() {
        let section = lines(&["Chat Service", "40k daily messages routed reliably"]);
        let projects = parse_entries(&section);
        assert_eq!(projects.len(), 1);
        assert!(projects[0].description.contains("40k"));
    }

    #[test]
    fn test_tech_deduplicated() {
        let section = lines(&[
            "Data Pipeline",
            "Python workers feed a Python scheduler.",
        ]);
        let projects = parse_entries(&section);
        assert_eq!(projects[0].tech, vec!["python"]);
    }
}
