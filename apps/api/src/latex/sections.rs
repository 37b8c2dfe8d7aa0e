//! Rules every template's section renderer shares: what counts as visible
//! content, how sections collapse, and the name-based layout heuristics.

use crate::latex::escape::escape_latex;
use crate::models::{Section, SkillCategory, SkillsSection, StandardEntry};

/// Categories worth printing: a name and at least one skill.
pub fn visible_categories(section: &SkillsSection) -> Vec<&SkillCategory> {
    section
        .categories
        .iter()
        .filter(|c| !c.category_name.is_empty() && !c.skills.is_empty())
        .collect()
}

/// Bullet points with any non-whitespace text.
pub fn visible_bullets(entry: &StandardEntry) -> Vec<&str> {
    entry
        .bullet_points
        .iter()
        .map(String::as_str)
        .filter(|b| !b.trim().is_empty())
        .collect()
}

/// Escaped, comma-joined skill list.
pub fn joined_skills(category: &SkillCategory) -> String {
    category
        .skills
        .iter()
        .map(|s| escape_latex(s))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Wraps an entry's visible bullets in a list environment.
/// Returns `None` when there is nothing to list, so no empty environment is emitted.
pub fn bullet_list<F>(entry: &StandardEntry, begin: &str, end: &str, item: F) -> Option<String>
where
    F: Fn(&str) -> String,
{
    let bullets = visible_bullets(entry);
    if bullets.is_empty() {
        return None;
    }
    let items = bullets
        .into_iter()
        .map(|b| item(&escape_latex(b)))
        .collect::<Vec<_>>()
        .join("\n");
    Some(format!("{begin}\n{items}\n{end}"))
}

/// Section names containing "project" get the project entry layout.
// NOTE: a first-class project section kind would make this unnecessary.
pub fn is_project_section(section_name: &str) -> bool {
    section_name.to_lowercase().contains("project")
}

pub fn is_education_section(section_name: &str) -> bool {
    section_name.to_lowercase().contains("education")
}

/// Sidebar placement for two-column layouts: skills plus education.
pub fn is_sidebar_section(section: &Section) -> bool {
    match section {
        Section::Skills(_) => true,
        Section::Standard(s) => is_education_section(&s.section_name),
    }
}

/// Renders each section and joins the non-empty results.
/// Sections that render to nothing leave no trace, not even a separator.
pub fn render_all<'a, I, F>(sections: I, render: F, separator: &str) -> String
where
    I: IntoIterator<Item = &'a Section>,
    F: Fn(&Section) -> String,
{
    sections
        .into_iter()
        .map(render)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StandardSection;

    fn category(name: &str, skills: &[&str]) -> SkillCategory {
        SkillCategory {
            category_name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..SkillCategory::new()
        }
    }

    #[test]
    fn test_visible_categories_needs_name_and_skills() {
        let mut section = SkillsSection::new(0);
        section.categories = vec![
            category("", &["x"]),
            category("Languages", &[]),
            category("Tools", &["Git"]),
        ];
        let visible = visible_categories(&section);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].category_name, "Tools");
    }

    #[test]
    fn test_visible_bullets_drops_blanks() {
        let mut entry = StandardEntry::new();
        entry.bullet_points = vec!["".into(), "Did X".into(), "   ".into()];
        assert_eq!(visible_bullets(&entry), vec!["Did X"]);
    }

    #[test]
    fn test_bullet_list_none_without_bullets() {
        let entry = StandardEntry::new();
        assert!(bullet_list(&entry, "BEGIN", "END", |b| b.to_string()).is_none());
    }

    #[test]
    fn test_bullet_list_escapes_items() {
        let mut entry = StandardEntry::new();
        entry.bullet_points = vec!["Cut cost 50%".into()];
        let list = bullet_list(&entry, "BEGIN", "END", |b| format!("* {b}")).unwrap();
        assert_eq!(list, "BEGIN\n* Cut cost 50\\%\nEND");
    }

    #[test]
    fn test_joined_skills() {
        assert_eq!(joined_skills(&category("L", &["C#", "Rust"])), r"C\#, Rust");
    }

    #[test]
    fn test_project_heuristic_is_case_insensitive() {
        assert!(is_project_section("Side PROJECTS"));
        assert!(is_project_section("projects"));
        assert!(!is_project_section("Experience"));
    }

    #[test]
    fn test_sidebar_sections() {
        let mut education = StandardSection::new(0);
        education.section_name = "Higher Education".to_string();
        assert!(is_sidebar_section(&Section::Standard(education)));
        assert!(is_sidebar_section(&Section::Skills(SkillsSection::new(1))));
        assert!(!is_sidebar_section(&Section::Standard(StandardSection::new(2))));
    }

    #[test]
    fn test_render_all_skips_empty_output() {
        let sections = vec![
            Section::Standard(StandardSection::new(0)),
            Section::Skills(SkillsSection::new(1)),
        ];
        let out = render_all(&sections, |s| match s {
            Section::Standard(_) => "STD".to_string(),
            Section::Skills(_) => String::new(),
        }, "\n\n");
        assert_eq!(out, "STD");
    }
}
