//! Classic — single column, serif, a plain rule under each heading.

use crate::latex::contact::{contact_parts, seticon_preamble, ContactFormat, IconStyle, LinkStyle, PHONE_FIRST};
use crate::latex::credits::Credits;
use crate::latex::escape::{escape_latex, escape_opt};
use crate::latex::sections::{bullet_list, joined_skills, render_all, visible_categories};
use crate::models::{Resume, Section, StandardEntry};

pub const NAME: &str = "Classic";

const CONTACT: ContactFormat = ContactFormat {
    order: PHONE_FIRST,
    link_style: LinkStyle::Plain,
    icon_style: IconStyle::Macro,
};

const PREAMBLE: &str = r"\documentclass[11pt,letterpaper]{article}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage[margin=0.5in]{geometry}
\usepackage[usenames,dvipsnames]{color}";

const LAYOUT: &str = r"\pagestyle{empty}
\raggedbottom
\raggedright";

fn heading(section_name: &str) -> String {
    format!(
        "\\section*{{{}}}\n\\vspace{{-0.5em}}\\hrule\\vspace{{6pt}}",
        escape_latex(section_name)
    )
}

fn render_entry(entry: &StandardEntry) -> String {
    let mut out = format!(
        "\\textbf{{{}}} \\hfill {} \\\\\n\\textit{{{}}} \\\\[-0.6em]",
        escape_latex(&entry.title),
        escape_opt(entry.date_range.as_deref()),
        escape_opt(entry.organization.as_deref()),
    );
    let list = bullet_list(
        entry,
        "\\begin{itemize}[leftmargin=1.5em, topsep=0pt, itemsep=-2pt]",
        "\\end{itemize}",
        |b| format!("    \\item {b}"),
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
            format!("{}\n{lines}", heading(&skills.section_name))
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
                .join("\n\\vspace{6pt}\n");
            format!("{}\n{entries}", heading(&standard.section_name))
        }
    }
}

pub fn generate(resume: &Resume, credits: &Credits) -> String {
    let header = &resume.header;
    let use_icons = header.use_icons;
    let contact = contact_parts(header, use_icons, &CONTACT).join(" $\\cdot$ ");
    let sections = render_all(resume.sorted_sections(), render_section, "\n\n");

    format!(
        "{banner}\n\n{PREAMBLE}\n{icons}\n\n{LAYOUT}\n\n\\begin{{document}}\n\n\
         \\begin{{center}}\n\
         {{\\Huge\\scshape {name}}} \\\\ \\vspace{{1pt}}\n\
         {contact}\n\
         \\end{{center}}\n\n\
         {sections}\n\n\
         \\end{{document}}",
        banner = credits.banner(NAME),
        icons = seticon_preamble(use_icons),
        name = escape_latex(&header.name),
    )
}
