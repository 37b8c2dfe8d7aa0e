//! Resume data model — the structured record the editor mutates and every
//! template renders.
//!
//! The JSON shape (camelCase keys, `"type"`-tagged sections) is the public
//! import/export format, so field renames here are breaking changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_true() -> bool {
    true
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Controls whether templates emit icon markup next to contact fields.
    #[serde(default = "default_true")]
    pub use_icons: bool,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: Some(String::new()),
            linked_in: Some(String::new()),
            github: Some(String::new()),
            use_icons: true,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entries and categories
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardEntry {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Free text ("Jan 2022 -- Present"), never parsed as a date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    #[serde(default)]
    pub bullet_points: Vec<String>,
}

impl StandardEntry {
    /// A blank entry with one empty bullet slot, as the editor creates it.
    pub fn new() -> Self {
        Self {
            id: new_id(),
            title: String::new(),
            organization: Some(String::new()),
            date_range: Some(String::new()),
            bullet_points: vec![String::new()],
        }
    }
}

impl Default for StandardEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: String,
    pub category_name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl SkillCategory {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            category_name: String::new(),
            skills: Vec::new(),
        }
    }
}

impl Default for SkillCategory {
    fn default() -> Self {
        Self::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardSection {
    pub id: String,
    pub section_name: String,
    pub order: u32,
    #[serde(default)]
    pub entries: Vec<StandardEntry>,
}

impl StandardSection {
    pub fn new(order: u32) -> Self {
        Self {
            id: new_id(),
            section_name: "New Section".to_string(),
            order,
            entries: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsSection {
    pub id: String,
    pub section_name: String,
    pub order: u32,
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
}

impl SkillsSection {
    pub fn new(order: u32) -> Self {
        Self {
            id: new_id(),
            section_name: "Skills".to_string(),
            order,
            categories: Vec::new(),
        }
    }
}

/// A resume section. Renderers match on this exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    Standard(StandardSection),
    Skills(SkillsSection),
}

/// Which kind of section the editor should add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Standard,
    Skills,
}

impl Section {
    pub fn new(kind: SectionKind, order: u32) -> Self {
        match kind {
            SectionKind::Standard => Section::Standard(StandardSection::new(order)),
            SectionKind::Skills => Section::Skills(SkillsSection::new(order)),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Section::Standard(s) => &s.id,
            Section::Skills(s) => &s.id,
        }
    }

    pub fn section_name(&self) -> &str {
        match self {
            Section::Standard(s) => &s.section_name,
            Section::Skills(s) => &s.section_name,
        }
    }

    pub fn order(&self) -> u32 {
        match self {
            Section::Standard(s) => s.order,
            Section::Skills(s) => s.order,
        }
    }

    pub fn set_order(&mut self, order: u32) {
        match self {
            Section::Standard(s) => s.order = order,
            Section::Skills(s) => s.order = order,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default = "new_id")]
    pub id: String,
    pub header: Header,
    pub sections: Vec<Section>,
    #[serde(default = "Utc::now")]
    pub last_modified: DateTime<Utc>,
}

impl Resume {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            header: Header::default(),
            sections: Vec::new(),
            last_modified: Utc::now(),
        }
    }

    /// Sections in display order (ascending `order`). Stable for ties.
    pub fn sorted_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.order());
        sections
    }

    /// True once there is anything worth sending to the compiler.
    pub fn has_content(&self) -> bool {
        !self.header.name.is_empty() || !self.header.email.is_empty() || !self.sections.is_empty()
    }

    pub fn touch(&mut self) {
        self.last_modified = Utc::now();
    }

    pub fn update_header(&mut self, header: Header) {
        self.header = header;
        self.touch();
    }

    /// Appends a default section after the last one in display order and returns its id.
    /// Imported documents may carry sparse orders, so this is `max + 1`, not `len`.
    pub fn add_section(&mut self, kind: SectionKind) -> String {
        let next = self.sections.iter().map(Section::order).max().map_or(0, |m| m + 1);
        let section = Section::new(kind, next);
        let id = section.id().to_string();
        self.sections.push(section);
        self.touch();
        id
    }

    /// Replaces the section with the same id. Returns false if no such section exists.
    pub fn update_section(&mut self, section: Section) -> bool {
        let Some(slot) = self.sections.iter_mut().find(|s| s.id() == section.id()) else {
            return false;
        };
        *slot = section;
        self.touch();
        true
    }

    /// Removes a section and re-densifies `order` to 0..n-1.
    pub fn remove_section(&mut self, section_id: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id() != section_id);
        if self.sections.len() == before {
            return false;
        }
        self.sections.sort_by_key(|s| s.order());
        self.densify();
        self.touch();
        true
    }

    /// Applies a new display sequence given as section ids.
    ///
    /// Unknown ids are ignored; sections missing from `ordered_ids` keep their
    /// relative order after the listed ones.
    pub fn reorder_sections(&mut self, ordered_ids: &[&str]) {
        let mut remaining: Vec<Section> = std::mem::take(&mut self.sections);
        remaining.sort_by_key(|s| s.order());

        let mut reordered = Vec::with_capacity(remaining.len());
        for id in ordered_ids {
            if let Some(pos) = remaining.iter().position(|s| s.id() == *id) {
                reordered.push(remaining.remove(pos));
            }
        }
        reordered.extend(remaining);

        self.sections = reordered;
        self.densify();
        self.touch();
    }

    fn densify(&mut self) {
        for (idx, section) in self.sections.iter_mut().enumerate() {
            section.set_order(idx as u32);
        }
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
