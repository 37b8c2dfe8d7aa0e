//! Academic CV — Times, small-caps headings over a title rule, centered
//! header. Never uses icons.

use crate::latex::contact::{contact_parts, ContactFormat, IconStyle, LinkStyle, EMAIL_FIRST};
use crate::latex::credits::Credits;
use crate::latex::escape::{escape_latex, escape_opt};
use crate::latex::sections::{bullet_list, joined_skills, render_all, visible_categories};
use crate::models::{Resume, Section, StandardEntry};

pub const NAME: &str = "Academic CV";

const CONTACT: ContactFormat = ContactFormat {
    order: EMAIL_FIRST,
    link_style: LinkStyle::Plain,
    icon_style: IconStyle::Glyph,
};

const PREAMBLE: &str = r"\documentclass[11pt,letterpaper]{article}
\usepackage[margin=0.6in]{geometry}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{titlesec}
\usepackage{times}

\pagestyle{plain}
\setlength{\parindent}{0pt}

\titleformat{\section}{\normalsize\bfseries\scshape}{}{0em}{}[\titlerule]
\titlespacing*{\section}{0pt}{8pt}{4pt}";

fn render_entry(entry: &StandardEntry) -> String {
    let mut out = format!(
        "\\textbf{{{}}} \\hfill {} \\\\\n\\textit{{{}}}",
        escape_latex(&entry.title),
        escape_opt(entry.date_range.as_deref()),
        escape_opt(entry.organization.as_deref())
    );
    let list = bullet_list(
        entry,
        "\\begin{itemize}[leftmargin=1.5em, topsep=2pt, itemsep=0pt, parsep=0pt]",
        "\\end{itemize}",
        |b| format!("\\item {b}"),
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
                .map(|c| format!("\\textbf{{{}:}} {}", escape_latex(&c.category_name), joined_skills(c)))
                .collect::<Vec<_>>()
                .join(" \\\\\n");
            format!("\\section{{{}}}\n{lines}", escape_latex(&skills.section_name))
        }
        Section::Standard(standard) => {
            if standard.entries.is_empty() {
                return String::new();
            }
            let entries = standard
                .entries
                .iter()
                .map(render_entry)
                .collect::<Vec<_>>()
                .join("\n\\vspace{4pt}\n");
            format!("\\section{{{}}}\n{entries}", escape_latex(&standard.section_name))
        }
    }
}

pub fn generate(resume: &Resume, credits: &Credits) -> String {
    let header = &resume.header;
    // Icons are not part of this style, whatever the header says.
    let contact = contact_parts(header, false, &CONTACT).join(" $\\bullet$ ");
    let sections = render_all(resume.sorted_sections(), render_section, "\n\n");

    format!(
        "{banner}\n\n{PREAMBLE}\n\n\\begin{{document}}\n\n\
         \\begin{{center}}\n\
         {{\\LARGE\\bfseries\\scshape {name}}} \\\\[6pt]\n\
         {{\\small {contact}}}\n\
         \\end{{center}}\n\n\
         \\vspace{{4pt}}\n\n\
         {sections}\n\n\
         \\end{{document}}",
        banner = credits.banner(NAME),
        name = escape_latex(&header.name),
    )
}
