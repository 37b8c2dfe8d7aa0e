//! Compact — dense single column in Lato, built on a handful of layout
//! macros defined once in the preamble.

use crate::latex::contact::{contact_parts, ContactFormat, IconStyle, LinkStyle, PHONE_FIRST};
use crate::latex::credits::Credits;
use crate::latex::escape::{escape_latex, escape_opt};
use crate::latex::sections::{
    bullet_list, is_project_section, joined_skills, render_all, visible_categories,
};
use crate::models::{Resume, Section, StandardEntry};

pub const NAME: &str = "Compact";

const CONTACT: ContactFormat = ContactFormat {
    order: PHONE_FIRST,
    link_style: LinkStyle::Underline,
    icon_style: IconStyle::Macro,
};

const PACKAGES: &str = r"\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{fancyhdr}
\usepackage{tabularx}
\usepackage[default]{lato}
\input{glyphtounicode}";

const LAYOUT: &str = r"\pagestyle{fancy}
\fancyhf{}
\renewcommand{\headrulewidth}{0pt}
\addtolength{\oddsidemargin}{-0.5in}
\addtolength{\evensidemargin}{-0.5in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-.5in}
\addtolength{\textheight}{1.0in}
\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}

\titleformat{\section}{\vspace{-4pt}\scshape\raggedright\large}{}{0em}{}[\color{black}\titlerule\vspace{-5pt}]
\pdfgentounicode=1";

const MACROS: &str = r"\newcommand{\resumeItem}[1]{\item\small{{#1 \vspace{-2pt}}}}
\newcommand{\resumeSubheading}[4]{\vspace{-2pt}\item\begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}\textbf{#1} & #2 \\\textit{\small#3} & \textit{\small #4} \\\end{tabular*}\vspace{-7pt}}
\newcommand{\resumeProjectHeading}[2]{\item\begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}\small#1 & #2 \\\end{tabular*}\vspace{-7pt}}
\renewcommand\labelitemii{$\vcenter{\hbox{\tiny$\bullet$}}$}
\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=0.15in, label={}]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}}
\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{-5pt}}";

const ICON_MACROS: &str = r"\definecolor{IconColor}{RGB}{0, 0, 0}
\newcommand{\seticon}[1]{\textcolor{IconColor}{\csname #1\endcsname}}";

fn items(entry: &StandardEntry) -> Option<String> {
    bullet_list(entry, "    \\resumeItemListStart", "    \\resumeItemListEnd", |b| {
        format!("        \\resumeItem{{{b}}}")
    })
}

fn render_entry(entry: &StandardEntry, as_project: bool) -> String {
    let title = escape_latex(&entry.title);
    let date = escape_opt(entry.date_range.as_deref());
    let mut out = if as_project {
        // The organization slot carries the technology stack for projects.
        let tech = match entry.organization.as_deref() {
            Some(org) if !org.is_empty() => format!(" $|$ \\emph{{{}}}", escape_latex(org)),
            _ => String::new(),
        };
        format!("    \\resumeProjectHeading\n    {{\\textbf{{{title}}}{tech}}}{{{date}}}")
    } else {
        format!(
            "    \\resumeSubheading\n    {{{title}}}{{{date}}}\n    {{{}}}{{}}",
            escape_opt(entry.organization.as_deref())
        )
    };
    if let Some(list) = items(entry) {
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
                .map(|c| {
                    format!(
                        "        \\textbf{{{}}}{{: {}}} \\\\",
                        escape_latex(&c.category_name),
                        joined_skills(c)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "\\section{{{}}}\n    \\begin{{itemize}}[leftmargin=0.15in, label={{}}]\n    \\small{{\\item{{\n{lines}\n    }}}}\n    \\end{{itemize}}",
                escape_latex(&skills.section_name)
            )
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
                .join("\n\n");
            format!(
                "\\section{{{}}}\n\\resumeSubHeadingListStart\n{entries}\n\\resumeSubHeadingListEnd",
                escape_latex(&standard.section_name)
            )
        }
    }
}

pub fn generate(resume: &Resume, credits: &Credits) -> String {
    let header = &resume.header;
    let use_icons = header.use_icons;
    let contact = contact_parts(header, use_icons, &CONTACT).join(" \\quad\n");
    let sections = render_all(resume.sorted_sections(), render_section, "\n\n");
    let (icon_package, icon_macros) = if use_icons {
        ("\\usepackage{fontawesome5}", ICON_MACROS)
    } else {
        ("", "")
    };

    format!(
        "{banner}\n\n\\documentclass[letterpaper,11pt]{{article}}\n{icon_package}\n{PACKAGES}\n\n\
         {LAYOUT}\n\n{MACROS}\n{icon_macros}\n\n\\begin{{document}}\n\n\
         \\begin{{center}}\n\
         \\textbf{{\\Huge \\scshape {name}}} \\\\ \\vspace{{1pt}}\n\
         {contact}\n\
         \\end{{center}}\n\n\
         {sections}\n\n\
         \\end{{document}}",
        banner = credits.banner(NAME),
        name = escape_latex(&header.name),
    )
}
