//! Job-description targeting: how well a resume covers the skills a posting
//! asks for.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extract::patterns::{FRAMEWORKS, LANGUAGES, SOFT_SKILLS, TOOLS};
use crate::extract::skills::matched_set;
use crate::models::CanonicalResume;

#[derive(Debug, Clone, Deserialize)]
pub struct TargetingRequest {
    pub resume: CanonicalResume,
    #[serde(rename = "jobDescription")]
    pub job_description: String,
    #[serde(rename = "targetRole", default)]
    pub target_role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetingReport {
    /// Coverage of the posting's recognized keywords, 0..=100.
    pub score: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

fn keyword_tables() -> [&'static Regex; 4] {
    [&*LANGUAGES, &*FRAMEWORKS, &*TOOLS, &*SOFT_SKILLS]
}

fn keywords_in(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for table in keyword_tables() {
        for kw in matched_set(table, text) {
            if !out.contains(&kw) {
                out.push(kw);
            }
        }
    }
    out
}

/// Flattens the resume into one lowercase haystack of skill-bearing text.
fn resume_text(resume: &CanonicalResume) -> String {
    let mut text = String::new();
    text.push_str(&resume.profile);
    for group in &resume.skills {
        for item in &group.items {
            text.push(' ');
            text.push_str(item);
        }
    }
    for exp in &resume.experience {
        text.push(' ');
        text.push_str(&exp.role);
        text.push(' ');
        text.push_str(&exp.company);
        for bullet in &exp.bullets {
            text.push(' ');
            text.push_str(bullet);
        }
    }
    for project in &resume.projects {
        text.push(' ');
        text.push_str(&project.name);
        text.push(' ');
        text.push_str(&project.description);
        for tech in &project.tech {
            text.push(' ');
            text.push_str(tech);
        }
    }
    text.to_lowercase()
}

/// Scores the resume against the posting. Only keywords the pattern tables
/// recognize participate; a posting with none of them scores zero.
pub fn match_against(resume: &CanonicalResume, job_description: &str, target_role: &str) -> TargetingReport {
    let wanted = keywords_in(&format!("{job_description} {target_role}"));
    if wanted.is_empty() {
        return TargetingReport { score: 0, matched: vec![], missing: vec![] };
    }

    let haystack = resume_text(resume);
    let (matched, missing): (Vec<String>, Vec<String>) =
        wanted.into_iter().partition(|kw| haystack.contains(kw.as_str()));

    let total = matched.len() + missing.len();
    let score = (matched.len() as f64 / total as f64 * 100.0).round() as u32;
    TargetingReport { score, matched, missing }
}
