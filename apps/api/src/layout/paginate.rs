//! A4 pagination.
//!
//! The resume is flattened into a stream of typed blocks, each with a fixed
//! pixel height, then packed greedily: a block that does not fit opens a new
//! page, and a block taller than a whole page still gets a page to itself
//! rather than being dropped.

use serde::{Deserialize, Serialize};

use crate::models::{
    CanonicalResume, EducationEntry, ExperienceEntry, Header, ProjectEntry, SkillGroup,
};

const HEADER_HEIGHT: u32 = 100;
const PROFILE_HEIGHT: u32 = 70;
const SECTION_TITLE_HEIGHT: u32 = 30;
const SKILL_ROW_HEIGHT: u32 = 22;
const EXPERIENCE_HEIGHT: u32 = 120;
const EDUCATION_HEIGHT: u32 = 50;
const PROJECT_HEIGHT: u32 = 60;

/// Page dimensions in CSS pixels at 96dpi.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Full A4 page height.
    pub page_height: u32,
    /// Vertical padding applied by the editor, top and bottom combined.
    pub padding: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_height: 1123,
            padding: 112,
        }
    }
}

impl PageConfig {
    pub fn usable_height(&self) -> u32 {
        self.page_height.saturating_sub(self.padding)
    }
}

/// One renderable block with its reserved height.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum PageSection {
    Header(Header),
    Profile(String),
    SectionTitle(String),
    SkillRow(SkillGroup),
    Experience(ExperienceEntry),
    Education(EducationEntry),
    Project(ProjectEntry),
}

impl PageSection {
    pub fn height(&self) -> u32 {
        match self {
            PageSection::Header(_) => HEADER_HEIGHT,
            PageSection::Profile(_) => PROFILE_HEIGHT,
            PageSection::SectionTitle(_) => SECTION_TITLE_HEIGHT,
            PageSection::SkillRow(_) => SKILL_ROW_HEIGHT,
            PageSection::Experience(_) => EXPERIENCE_HEIGHT,
            PageSection::Education(_) => EDUCATION_HEIGHT,
            PageSection::Project(_) => PROJECT_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub sections: Vec<PageSection>,
    /// Total reserved height of the sections on this page.
    pub used_height: u32,
}

fn flatten(resume: &CanonicalResume) -> Vec<PageSection> {
    let mut blocks = Vec::new();
    blocks.push(PageSection::Header(resume.header.clone()));

    if !resume.profile.trim().is_empty() {
        blocks.push(PageSection::SectionTitle("Profile".to_string()));
        blocks.push(PageSection::Profile(resume.profile.clone()));
    }
    if !resume.skills.is_empty() {
        blocks.push(PageSection::SectionTitle("Skills".to_string()));
        for group in &resume.skills {
            blocks.push(PageSection::SkillRow(group.clone()));
        }
    }
    if !resume.experience.is_empty() {
        blocks.push(PageSection::SectionTitle("Experience".to_string()));
        for entry in &resume.experience {
            blocks.push(PageSection::Experience(entry.clone()));
        }
    }
    if !resume.education.is_empty() {
        blocks.push(PageSection::SectionTitle("Education".to_string()));
        for entry in &resume.education {
            blocks.push(PageSection::Education(entry.clone()));
        }
    }
    if !resume.projects.is_empty() {
        blocks.push(PageSection::SectionTitle("Projects".to_string()));
        for project in &resume.projects {
            blocks.push(PageSection::Project(project.clone()));
        }
    }
    blocks
}

pub fn paginate(resume: &CanonicalResume, config: &PageConfig) -> Vec<Page> {
    let usable = config.usable_height();
    let mut pages: Vec<Page> = Vec::new();
    let mut current = Page {
        sections: Vec::new(),
        used_height: 0,
    };

    for block in flatten(resume) {
        let height = block.height();
        // An oversized block still lands on an empty page instead of
        // being dropped.
        if current.used_height + height > usable && !current.sections.is_empty() {
            pages.push(current);
            current = Page {
                sections: Vec::new(),
                used_height: 0,
            };
        }
        current.used_height += height;
        current.sections.push(block);
    }

    pages.push(current);
    pages
}
