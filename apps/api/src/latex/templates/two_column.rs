//! Two-Column — tinted sidebar (name, contact, skills, education) beside a
//! main column for everything else.

use crate::latex::contact::{contact_parts, ContactFormat, IconStyle, LinkStyle, EMAIL_FIRST};
use crate::latex::credits::Credits;
use crate::latex::escape::{escape_latex, escape_opt};
use crate::latex::sections::{
    bullet_list, is_sidebar_section, joined_skills, visible_categories,
};
use crate::models::{Resume, Section, StandardEntry, StandardSection};

pub const NAME: &str = "Two-Column";

const CONTACT: ContactFormat = ContactFormat {
    order: EMAIL_FIRST,
    link_style: LinkStyle::Plain,
    icon_style: IconStyle::Glyph,
};

const PACKAGES: &str = r"\documentclass[11pt,letterpaper]{article}
\usepackage[left=0.3in,right=0.3in,top=0.3in,bottom=0.3in]{geometry}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{xcolor}";

const LAYOUT: &str = r"\definecolor{sidebarcolor}{RGB}{245,245,250}
\pagestyle{empty}
\setlength{\parindent}{0pt}";

/// Row break between consecutive items of a sidebar block.
const SIDEBAR_GAP: &str = "\\\\[4pt]";

fn sidebar_heading(section_name: &str) -> String {
    format!(
        "{{\\large\\textbf{{{}}}}}\\\\[-2pt]\\rule{{\\linewidth}}{{0.4pt}}\\\\[3pt]",
        escape_latex(section_name)
    )
}

fn sidebar_entry(entry: &StandardEntry, last: bool) -> String {
    let mut out = format!(
        "{{\\small\\textbf{{{}}}}} \\\\\n{{\\small\\textit{{{}}}}}",
        escape_latex(&entry.title),
        escape_opt(entry.organization.as_deref())
    );
    let list = bullet_list(
        entry,
        "{\\small\\begin{itemize}[leftmargin=1em, topsep=1pt, itemsep=0pt, parsep=0pt]",
        "\\end{itemize}}",
        |b| format!("\\item {b}"),
    );
    if let Some(list) = list {
        out.push('\n');
        out.push_str(&list);
    }
    if let Some(date) = entry.date_range.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("\n{{\\small {}}}", escape_latex(date)));
    }
    if !last {
        out.push_str(SIDEBAR_GAP);
    }
    out
}

/// Sidebar block for one section, or empty when it has nothing to show.
pub fn render_sidebar_section(section: &Section) -> String {
    match section {
        Section::Skills(skills) => {
            let categories = visible_categories(skills);
            if categories.is_empty() {
                return String::new();
            }
            let count = categories.len();
            let lines = categories
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let gap = if i + 1 < count { SIDEBAR_GAP } else { "" };
                    format!(
                        "{{\\small\\textbf{{{}}}}} \\\\\n{{\\small {}}}{gap}",
                        escape_latex(&c.category_name),
                        joined_skills(c)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}\n{lines}", sidebar_heading(&skills.section_name))
        }
        Section::Standard(standard) => {
            if standard.entries.is_empty() {
                return String::new();
            }
            let count = standard.entries.len();
            let entries = standard
                .entries
                .iter()
                .enumerate()
                .map(|(i, e)| sidebar_entry(e, i + 1 == count))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}\n{entries}", sidebar_heading(&standard.section_name))
        }
    }
}

fn main_entry(entry: &StandardEntry) -> String {
    let mut out = format!(
        "\\textbf{{{}}} \\hfill {} \\\\\n\\textit{{{}}} \\\\[-0.5em]",
        escape_latex(&entry.title),
        escape_opt(entry.date_range.as_deref()),
        escape_opt(entry.organization.as_deref())
    );
    let list = bullet_list(
        entry,
        "\\begin{itemize}[leftmargin=1.5em, topsep=2pt, itemsep=0pt]",
        "\\end{itemize}",
        |b| format!("\\item {b}"),
    );
    if let Some(list) = list {
        out.push('\n');
        out.push_str(&list);
    }
    out
}

/// Main-column block for one standard section.
pub fn render_main_section(section: &StandardSection) -> String {
    if section.entries.is_empty() {
        return String::new();
    }
    let entries = section
        .entries
        .iter()
        .map(main_entry)
        .collect::<Vec<_>>()
        .join("\n\\vspace{6pt}\n");
    format!(
        "{{\\Large\\textbf{{{}}}}} \\\\[2pt]\n\\rule{{\\linewidth}}{{0.4pt}} \\\\[4pt]\n{entries}",
        escape_latex(&section.section_name)
    )
}

fn join_non_empty(blocks: impl Iterator<Item = String>, separator: &str) -> String {
    blocks
        .filter(|b| !b.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn generate(resume: &Resume, credits: &Credits) -> String {
    let header = &resume.header;
    let use_icons = header.use_icons;
    let sorted = resume.sorted_sections();

    let sidebar = join_non_empty(
        sorted
            .iter()
            .filter(|s| is_sidebar_section(s))
            .map(|s| render_sidebar_section(s)),
        "\n\\vspace{10pt}\n\n",
    );
    let main = join_non_empty(
        sorted
            .iter()
            .filter_map(|s| match s {
                Section::Standard(standard) if !is_sidebar_section(s) => Some(standard),
                _ => None,
            })
            .map(render_main_section),
        "\n\\vspace{10pt}\n",
    );

    let contact = contact_parts(header, use_icons, &CONTACT).join(" \\\\[3pt]\n");
    let icon_package = if use_icons { "\\usepackage{fontawesome5}" } else { "" };

    format!(
        "{banner}\n\n{PACKAGES}\n{icon_package}\n\n{LAYOUT}\n\n\\begin{{document}}\n\n\
         \\noindent\n\
         \\begin{{minipage}}[t]{{0.28\\textwidth}}\n\
         \\vspace{{0pt}}\n\
         \\colorbox{{sidebarcolor}}{{\\parbox{{\\dimexpr\\linewidth-2\\fboxsep}}{{\n\
         \\vspace{{4pt}}\n\
         \\centering\n\
         {{\\Large\\textbf{{{name}}}}} \\\\[8pt]\n\
         \\raggedright\n\
         \\small\n\
         {contact}\n\
         \\vspace{{4pt}}\n\
         }}}}\n\n\
         \\vspace{{8pt}}\n\
         \\footnotesize\n\
         {sidebar}\n\
         \\end{{minipage}}%\n\
         \\hfill\n\
         \\begin{{minipage}}[t]{{0.68\\textwidth}}\n\
         \\vspace{{0pt}}\n\
         {main}\n\
         \\end{{minipage}}\n\n\
         \\end{{document}}",
        banner = credits.banner(NAME),
        name = escape_latex(&header.name),
    )
}
