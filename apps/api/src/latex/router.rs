//! Template router — the single entry point callers use to turn a resume into
//! LaTeX source.
//!
//! Templates live in a registry keyed by their stable identifier. Unknown or
//! empty identifiers fall back to `classic`.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::latex::credits::Credits;
use crate::latex::templates::{academic, classic, compact, developer, two_column};
use crate::models::Resume;

pub const DEFAULT_TEMPLATE: &str = "classic";

/// A template assembler: one complete document from one resume.
pub type Assembler = fn(&Resume, &Credits) -> String;

/// Catalogue entry shown to template pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    credits: Credits,
    catalogue: Vec<TemplateInfo>,
    assemblers: HashMap<&'static str, Assembler>,
}

impl TemplateRegistry {
    /// An empty registry. Use [`TemplateRegistry::with_builtin`] for the standard set.
    pub fn new(credits: Credits) -> Self {
        Self {
            credits,
            catalogue: Vec::new(),
            assemblers: HashMap::new(),
        }
    }

    /// Registry holding the five built-in templates.
    pub fn with_builtin(credits: Credits) -> Self {
        let mut registry = Self::new(credits);
        registry.register(
            TemplateInfo {
                id: "classic",
                name: classic::NAME,
                description: "Clean and simple traditional layout",
            },
            classic::generate,
        );
        registry.register(
            TemplateInfo {
                id: "compact",
                name: compact::NAME,
                description: "Space-efficient layout with Lato font",
            },
            compact::generate,
        );
        registry.register(
            TemplateInfo {
                id: "two-column",
                name: two_column::NAME,
                description: "Sidebar for skills, main area for experience",
            },
            two_column::generate,
        );
        registry.register(
            TemplateInfo {
                id: "academic",
                name: academic::NAME,
                description: "Traditional serif font for academia",
            },
            academic::generate,
        );
        registry.register(
            TemplateInfo {
                id: "developer",
                name: developer::NAME,
                description: "Monospace accents, skill badges, tech-focused",
            },
            developer::generate,
        );
        registry
    }

    /// Adds or replaces a template. Re-registering an id keeps its catalogue position.
    pub fn register(&mut self, info: TemplateInfo, assembler: Assembler) {
        if let Some(existing) = self.catalogue.iter_mut().find(|t| t.id == info.id) {
            *existing = info.clone();
        } else {
            self.catalogue.push(info.clone());
        }
        self.assemblers.insert(info.id, assembler);
    }

    pub fn templates(&self) -> &[TemplateInfo] {
        &self.catalogue
    }

    /// The identifier that will actually be used for `template_id`.
    pub fn resolve<'a>(&self, template_id: &'a str) -> &'a str {
        if self.assemblers.contains_key(template_id) {
            template_id
        } else {
            DEFAULT_TEMPLATE
        }
    }

    /// Generates the complete LaTeX source for `resume` in the given template.
    pub fn generate(&self, resume: &Resume, template_id: &str) -> String {
        let resolved = self.resolve(template_id);
        if resolved != template_id {
            debug!("Unknown template '{template_id}', falling back to '{resolved}'");
        }
        let assemble = self
            .assemblers
            .get(resolved)
            .copied()
            .unwrap_or(classic::generate as Assembler);
        debug!("Generating LaTeX with template '{resolved}'");
        assemble(resume, &self.credits)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_builtin(Credits::default())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
