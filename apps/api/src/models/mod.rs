pub mod resume;
pub mod sample;
pub mod saved;

pub use resume::{
    Header, Resume, Section, SectionKind, SkillCategory, SkillsSection, StandardEntry,
    StandardSection,
};
pub use saved::{NewSavedResume, SavedResume};
