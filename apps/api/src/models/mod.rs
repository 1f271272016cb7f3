pub mod resume;

pub use resume::{
    new_entry_id, CanonicalResume, EducationEntry, ExperienceEntry, Header, ProfileLevel,
    ProjectEntry, ResumeMeta, SkillGroup,
};
