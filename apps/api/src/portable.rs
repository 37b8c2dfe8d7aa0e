//! JSON import/export of resumes.
//!
//! Export is lossless. Import checks the top-level shape before decoding so a
//! wrong file fails loudly instead of producing a half-filled resume.

use chrono::{NaiveDate, Utc};
use serde_json::Value;
use thiserror::Error;

use crate::models::Resume;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to parse resume file: {0}")]
    Unparseable(#[source] serde_json::Error),

    #[error("Invalid resume format: expected a JSON object")]
    NotAnObject,

    #[error("Invalid resume format: missing '{0}'")]
    MissingField(&'static str),

    #[error("Invalid resume format: {0}")]
    Malformed(#[source] serde_json::Error),
}

const REQUIRED_FIELDS: [&str; 2] = ["header", "sections"];

/// Serializes a resume as pretty-printed JSON.
pub fn export_json(resume: &Resume) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(resume)
}

/// Parses and validates an exported resume. `lastModified` is reset to now.
///
/// Takes raw bytes so invalid UTF-8 is reported like any other unparseable file.
pub fn import_json(data: impl AsRef<[u8]>) -> Result<Resume, ImportError> {
    let value: Value = serde_json::from_slice(data.as_ref()).map_err(ImportError::Unparseable)?;
    let mut resume = import_value(value)?;
    resume.touch();
    Ok(resume)
}

/// Validates an already-parsed document, keeping its `lastModified`.
pub fn import_value(value: Value) -> Result<Resume, ImportError> {
    let object = value.as_object().ok_or(ImportError::NotAnObject)?;
    for field in REQUIRED_FIELDS {
        match object.get(field) {
            None | Some(Value::Null) => return Err(ImportError::MissingField(field)),
            Some(_) => {}
        }
    }
    serde_json::from_value(value).map_err(ImportError::Malformed)
}

/// Download name for an exported document, e.g. `resume-2024-05-01.json`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("resume-{}.json", date.format("%Y-%m-%d"))
}

/// Download name for generated LaTeX, e.g. `resume-classic-2024-05-01.tex`.
pub fn latex_filename(template_id: &str, date: NaiveDate) -> String {
    format!("resume-{template_id}-{}.tex", date.format("%Y-%m-%d"))
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_resume;
    use crate::models::{Section, SectionKind, SkillCategory, StandardEntry};

    #[test]
    fn test_round_trip_default_resume() {
        let resume = Resume::new();
        let json = export_json(&resume).unwrap();
        let mut imported = import_json(&json).unwrap();
        imported.last_modified = resume.last_modified;
        assert_eq!(imported, resume);
    }

    #[test]
    fn test_round_trip_after_edits() {
        let mut resume = sample_resume();
        let added = resume.add_section(SectionKind::Skills);
        if let Some(Section::Skills(skills)) = resume.sections.iter_mut().find(|s| s.id() == added) {
            skills.categories.push(SkillCategory {
                category_name: "Spoken".to_string(),
                skills: vec!["English".to_string(), "Español".to_string()],
                ..SkillCategory::new()
            });
        }
        if let Section::Standard(education) = &mut resume.sections[0] {
            let mut entry = StandardEntry::new();
            entry.organization = None;
            entry.bullet_points.push("Dean's list & \\honors".to_string());
            education.entries.push(entry);
        }
        resume.header.use_icons = false;
        resume.header.github = None;
        resume.remove_section("section-projects-001");

        let json = export_json(&resume).unwrap();
        let imported = import_value(serde_json::from_str(&json).unwrap()).unwrap();
        assert_eq!(imported, resume);
    }

    #[test]
    fn test_import_resets_last_modified() {
        let resume = sample_resume();
        let imported = import_json(&export_json(&resume).unwrap()).unwrap();
        assert!(imported.last_modified > resume.last_modified);
    }

    #[test]
    fn test_import_rejects_missing_sections() {
        let err = import_json(r#"{"header": {"name": "A", "email": ""}}"#).unwrap_err();
        assert!(matches!(err, ImportError::MissingField("sections")));
    }

    #[test]
    fn test_import_rejects_missing_header() {
        let err = import_json(r#"{"sections": []}"#).unwrap_err();
        assert!(matches!(err, ImportError::MissingField("header")));
    }

    #[test]
    fn test_import_rejects_non_object_and_garbage() {
        assert!(matches!(import_json("[1, 2]").unwrap_err(), ImportError::NotAnObject));
        assert!(matches!(import_json("not json").unwrap_err(), ImportError::Unparseable(_)));
    }

    #[test]
    fn test_import_rejects_invalid_utf8() {
        let err = import_json(b"{\"header\": \"\xff\xfe\"}".as_slice()).unwrap_err();
        assert!(matches!(err, ImportError::Unparseable(_)));
    }

    #[test]
    fn test_import_rejects_wrong_shape() {
        let err = import_json(r#"{"header": {"name": "A", "email": ""}, "sections": [{"type": "timeline"}]}"#)
            .unwrap_err();
        assert!(matches!(err, ImportError::Malformed(_)));
    }

    #[test]
    fn test_import_accepts_browser_export() {
        // Millisecond timestamps and absent optional fields, as browsers write them.
        let json = r#"{
            "id": "abc",
            "header": {"name": "Jane", "email": "jane@x.com"},
            "sections": [{
                "id": "s1", "type": "standard", "sectionName": "Experience", "order": 0,
                "entries": [{"id": "e1", "title": "Eng", "bulletPoints": ["Did X"]}]
            }],
            "lastModified": "2024-01-01T00:00:00.000Z"
        }"#;
        let resume = import_value(serde_json::from_str(json).unwrap()).unwrap();
        assert_eq!(resume.id, "abc");
        assert!(resume.header.use_icons);
        assert_eq!(resume.sections[0].section_name(), "Experience");
    }

    #[test]
    fn test_filenames() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(export_filename(date), "resume-2024-05-01.json");
        assert_eq!(latex_filename("two-column", date), "resume-two-column-2024-05-01.tex");
    }
}
