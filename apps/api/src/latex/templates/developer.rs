//! Developer — monospace accents, boxed skill tags, colored heading rule.

use crate::latex::contact::{contact_parts, ContactField, ContactFormat, IconStyle, LinkStyle};
use crate::latex::credits::Credits;
use crate::latex::escape::{escape_latex, escape_opt};
use crate::latex::sections::{bullet_list, is_project_section, render_all, visible_categories};
use crate::models::{Resume, Section, SkillCategory, StandardEntry};

pub const NAME: &str = "Developer";

const CONTACT: ContactFormat = ContactFormat {
    order: [
        ContactField::Email,
        ContactField::GitHub,
        ContactField::LinkedIn,
        ContactField::Phone,
    ],
    link_style: LinkStyle::Plain,
    icon_style: IconStyle::Glyph,
};

const PACKAGES: &str = r"\documentclass[10pt,letterpaper]{article}
\usepackage[margin=0.5in]{geometry}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{xcolor}
\usepackage{titlesec}
\usepackage{fancybox}
\usepackage[scaled=0.85]{beramono}
\usepackage[T1]{fontenc}";

const LAYOUT: &str = r"\definecolor{headercolor}{RGB}{36,41,46}
\definecolor{accentcolor}{RGB}{0,122,204}
\pagestyle{empty}
\setlength{\parindent}{0pt}
\setlength{\fboxsep}{3pt}

\titleformat{\section}{\large\bfseries\color{headercolor}}{}{0em}{}[\color{accentcolor}\titlerule]
\titlespacing*{\section}{0pt}{12pt}{6pt}";

/// Each skill as its own boxed tag.
fn skill_tags(category: &SkillCategory) -> String {
    category
        .skills
        .iter()
        .map(|s| format!("\\fbox{{\\small {}}}", escape_latex(s)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_entry(entry: &StandardEntry, as_project: bool) -> String {
    let title = escape_latex(&entry.title);
    let date = escape_opt(entry.date_range.as_deref());
    let mut out = if as_project {
        let tech = match entry.organization.as_deref() {
            Some(org) if !org.is_empty() => {
                format!("\\\\\\texttt{{\\small {}}}", escape_latex(org))
            }
            _ => String::new(),
        };
        format!("\\textbf{{{title}}}{tech} \\hfill {date}")
    } else {
        format!(
            "\\textbf{{{title}}} \\hfill {date} \\\\\n\\textit{{{}}}",
            escape_opt(entry.organization.as_deref())
        )
    };
    let list = bullet_list(
        entry,
        "\\begin{itemize}[leftmargin=1em, topsep=2pt, itemsep=0pt]",
        "\\end{itemize}",
        |b| format!("\\item \\small {b}"),
    );
    if let Some(list) = list {
        out.push('\n');
        out.push_str(&list);
    }
    out
}

pub fn render_section(section: &Section) -> String {
    match section {
        Section::Skills(skills) => {
            let categories = visible_categories(skills);
            if categories.is_empty() {
                return String::new();
            }
            let lines = categories
                .iter()
                .map(|c| format!("\\texttt{{{}}} \\\\\n{}", escape_latex(&c.category_name), skill_tags(c)))
                .collect::<Vec<_>>()
                .join(" \\\\[8pt]\n");
            format!("\\section*{{{}}}\n{lines}", escape_latex(&skills.section_name))
        }
        Section::Standard(standard) => {
            if standard.entries.is_empty() {
                return String::new();
            }
            let as_project = is_project_section(&standard.section_name);
            let entries = standard
                .entries
                .iter()
                .map(|e| render_entry(e, as_project))
                .collect::<Vec<_>>()
                .join("\n\\vspace{6pt}\n");
            format!("\\section*{{{}}}\n{entries}", escape_latex(&standard.section_name))
        }
    }
}

pub fn generate(resume: &Resume, credits: &Credits) -> String {
    let header = &resume.header;
    let use_icons = header.use_icons;
    let contact = contact_parts(header, use_icons, &CONTACT).join(" \\quad ");
    let sections = render_all(resume.sorted_sections(), render_section, "\n\n");
    let icon_package = if use_icons { "\\usepackage{fontawesome5}" } else { "" };

    format!(
        "{banner}\n\n{PACKAGES}\n{icon_package}\n\n{LAYOUT}\n\n\\begin{{document}}\n\n\
         \\begin{{center}}\n\
         {{\\LARGE\\bfseries\\texttt{{{name}}}}} \\\\[8pt]\n\
         \\textcolor{{gray}}{{{contact}}}\n\
         \\end{{center}}\n\n\
         \\vspace{{8pt}}\n\n\
         {sections}\n\n\
         \\end{{document}}",
        banner = credits.banner(NAME),
        name = escape_latex(&header.name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SkillsSection, StandardSection};

    #[test]
    fn test_skills_render_as_boxed_tags() {
        let mut skills = SkillsSection::new(0);
        skills.categories.push(SkillCategory {
            category_name: "Languages".to_string(),
            skills: vec!["Rust".to_string(), "C#".to_string()],
            ..SkillCategory::new()
        });
        let out = render_section(&Section::Skills(skills));
        assert!(out.contains("\\texttt{Languages} \\\\\n\\fbox{\\small Rust} \\fbox{\\small C\\#}"));
        assert!(!out.contains("Rust, "));
    }

    #[test]
    fn test_project_entry_shows_stack_in_monospace() {
        let mut entry = StandardEntry::new();
        entry.title = "resumake".to_string();
        entry.organization = Some("Rust, axum".to_string());
        entry.bullet_points = vec!["Wrote it".to_string()];
        let mut section = StandardSection::new(0);
        section.section_name = "Open Source Projects".to_string();
        section.entries.push(entry);

        let out = render_section(&Section::Standard(section));
        assert!(out.contains("\\textbf{resumake}\\\\\\texttt{\\small Rust, axum} \\hfill "));
        assert!(!out.contains("\\textit{"));
    }

    #[test]
    fn test_contact_order_github_before_linkedin() {
        let mut resume = Resume::new();
        resume.header.email = "jane@x.com".to_string();
        resume.header.phone = Some("555".to_string());
        resume.header.linked_in = Some("https://linkedin.com/in/jane".to_string());
        resume.header.github = Some("https://github.com/jane".to_string());
        let tex = generate(&resume, &Credits::default());

        let email = tex.find("\\faEnvelope").unwrap();
        let github = tex.find("\\faGithub").unwrap();
        let linkedin = tex.find("\\faLinkedin").unwrap();
        let phone = tex.find("\\faPhone").unwrap();
        assert!(email < github && github < linkedin && linkedin < phone);
    }

    #[test]
    fn test_colored_heading_rule() {
        let tex = generate(&Resume::new(), &Credits::default());
        assert!(tex.contains("[\\color{accentcolor}\\titlerule]"));
        assert!(tex.contains("{\\LARGE\\bfseries\\texttt{}}"));
    }
}
