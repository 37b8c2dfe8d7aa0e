//! Contact line formatting shared by every template.
//!
//! Templates pick a field order, a link style and an icon style; the
//! formatter returns one ready-to-embed fragment per non-empty field.

use std::sync::LazyLock;

use regex::Regex;

use crate::latex::escape::escape_latex;
use crate::models::Header;

static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/([^/?]+)").unwrap());

static GITHUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)github\.com/([^/?]+)").unwrap());

static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://(www\.)?").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Phone,
    Email,
    LinkedIn,
    GitHub,
}

impl ContactField {
    fn icon(self) -> &'static str {
        match self {
            ContactField::Phone => "faPhone",
            ContactField::Email => "faEnvelope",
            ContactField::LinkedIn => "faLinkedin",
            ContactField::GitHub => "faGithub",
        }
    }

    fn value(self, header: &Header) -> Option<&str> {
        let value = match self {
            ContactField::Phone => header.phone.as_deref(),
            ContactField::Email => Some(header.email.as_str()),
            ContactField::LinkedIn => header.linked_in.as_deref(),
            ContactField::GitHub => header.github.as_deref(),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

/// How the visible label of a contact entry is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    Plain,
    Underline,
    /// Link fields show only their icon; falls back to the label when icons are off.
    IconOnly,
}

/// How icons are referenced when a header enables them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    /// `\seticon{faX}` inside the link text; needs [`seticon_preamble`].
    Macro,
    /// Bare fontawesome glyph `\faX\ ` placed before the link.
    Glyph,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactFormat {
    pub order: [ContactField; 4],
    pub link_style: LinkStyle,
    pub icon_style: IconStyle,
}

pub const PHONE_FIRST: [ContactField; 4] = [
    ContactField::Phone,
    ContactField::Email,
    ContactField::LinkedIn,
    ContactField::GitHub,
];

pub const EMAIL_FIRST: [ContactField; 4] = [
    ContactField::Email,
    ContactField::Phone,
    ContactField::LinkedIn,
    ContactField::GitHub,
];

/// Short display label for a profile URL.
///
/// `https://www.linkedin.com/in/jane/?trk=x` becomes `linkedin.com/jane`;
/// anything that doesn't match the platform pattern loses only its scheme
/// and `www.` prefix.
pub fn extract_username(url: &str, field: ContactField) -> String {
    if url.is_empty() {
        return String::new();
    }
    let (pattern, platform) = match field {
        ContactField::LinkedIn => (&*LINKEDIN_RE, "linkedin"),
        ContactField::GitHub => (&*GITHUB_RE, "github"),
        ContactField::Phone | ContactField::Email => return url.to_string(),
    };
    if let Some(user) = pattern.captures(url).and_then(|c| c.get(1)) {
        return format!("{platform}.com/{}", user.as_str());
    }
    SCHEME_RE.replace(url, "").into_owned()
}

/// Formats the header's contact fields in the order and style given.
/// Empty fields are skipped entirely.
pub fn contact_parts(header: &Header, use_icons: bool, format: &ContactFormat) -> Vec<String> {
    format
        .order
        .iter()
        .filter_map(|&field| {
            let value = field.value(header)?;
            Some(format_field(field, value, use_icons, format))
        })
        .collect()
}

fn format_field(field: ContactField, value: &str, use_icons: bool, format: &ContactFormat) -> String {
    let label = match field {
        ContactField::Phone | ContactField::Email => escape_latex(value),
        ContactField::LinkedIn | ContactField::GitHub => {
            escape_latex(&extract_username(value, field))
        }
    };

    let icon_only = format.link_style == LinkStyle::IconOnly && use_icons && field != ContactField::Phone;
    let visible = match format.link_style {
        _ if icon_only => String::new(),
        LinkStyle::Underline if field != ContactField::Phone => format!("\\underline{{{label}}}"),
        _ => label,
    };

    let target = match field {
        ContactField::Phone => None,
        ContactField::Email => Some(format!("mailto:{value}")),
        ContactField::LinkedIn | ContactField::GitHub => Some(value.to_string()),
    };

    let icon = if use_icons { Some(field.icon()) } else { None };

    match (format.icon_style, icon, target) {
        (_, None, None) => visible,
        (_, None, Some(target)) => format!("\\href{{{target}}}{{{visible}}}"),
        (IconStyle::Macro, Some(icon), None) => format!("\\seticon{{{icon}}} {visible}"),
        (IconStyle::Macro, Some(icon), Some(target)) if icon_only => {
            format!("\\href{{{target}}}{{\\seticon{{{icon}}}}}")
        }
        (IconStyle::Macro, Some(icon), Some(target)) => {
            format!("\\href{{{target}}}{{\\seticon{{{icon}}} {visible}}}")
        }
        (IconStyle::Glyph, Some(icon), None) => format!("\\{icon}\\ {visible}"),
        (IconStyle::Glyph, Some(icon), Some(target)) if icon_only => {
            format!("\\href{{{target}}}{{\\{icon}}}")
        }
        (IconStyle::Glyph, Some(icon), Some(target)) => {
            format!("\\{icon}\\ \\href{{{target}}}{{{visible}}}")
        }
    }
}

/// Preamble lines defining `\seticon`, or nothing when icons are off.
pub fn seticon_preamble(use_icons: bool) -> &'static str {
    if !use_icons {
        return "";
    }
    "\\usepackage{fontawesome5}\n\
     \\definecolor{IconColor}{RGB}{0, 0, 0}\n\
     \\newcommand{\\seticon}[1]{\\textcolor{IconColor}{\\csname #1\\endcsname}}"
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_MACRO: ContactFormat = ContactFormat {
        order: PHONE_FIRST,
        link_style: LinkStyle::Plain,
        icon_style: IconStyle::Macro,
    };

    fn header(email: &str) -> Header {
        Header {
            name: "Jane Doe".to_string(),
            email: email.to_string(),
            phone: None,
            linked_in: None,
            github: None,
            use_icons: false,
        }
    }

    #[test]
    fn test_extract_username_linkedin() {
        assert_eq!(
            extract_username("https://www.linkedin.com/in/jane-doe/?trk=x", ContactField::LinkedIn),
            "linkedin.com/jane-doe"
        );
    }

    #[test]
    fn test_extract_username_github_case_insensitive() {
        assert_eq!(
            extract_username("https://GitHub.com/janedoe/repo", ContactField::GitHub),
            "github.com/janedoe"
        );
    }

    #[test]
    fn test_extract_username_fallback_strips_scheme_and_www() {
        assert_eq!(
            extract_username("https://www.janedoe.dev/about", ContactField::GitHub),
            "janedoe.dev/about"
        );
        assert_eq!(extract_username("not a url", ContactField::LinkedIn), "not a url");
        assert_eq!(extract_username("", ContactField::LinkedIn), "");
    }

    #[test]
    fn test_only_email_gives_single_part() {
        let parts = contact_parts(&header("jane@x.com"), false, &SIMPLE_MACRO);
        assert_eq!(parts, vec![r"\href{mailto:jane@x.com}{jane@x.com}".to_string()]);
    }

    #[test]
    fn test_no_fields_gives_no_parts() {
        assert!(contact_parts(&header(""), true, &SIMPLE_MACRO).is_empty());
    }

    #[test]
    fn test_phone_inserted_at_fixed_position() {
        let mut h = header("jane@x.com");
        h.github = Some("https://github.com/jane".to_string());
        let before = contact_parts(&h, false, &SIMPLE_MACRO);

        h.phone = Some("555-0100".to_string());
        let after = contact_parts(&h, false, &SIMPLE_MACRO);

        assert_eq!(after.len(), 3);
        assert_eq!(after[0], "555-0100");
        assert_eq!(&after[1..], &before[..]);
    }

    #[test]
    fn test_email_first_order() {
        let mut h = header("jane@x.com");
        h.phone = Some("555".to_string());
        let format = ContactFormat {
            order: EMAIL_FIRST,
            ..SIMPLE_MACRO
        };
        let parts = contact_parts(&h, false, &format);
        assert!(parts[0].contains("mailto:"));
        assert_eq!(parts[1], "555");
    }

    #[test]
    fn test_blank_fields_are_omitted() {
        let mut h = header("jane@x.com");
        h.phone = Some("   ".to_string());
        h.linked_in = Some(String::new());
        assert_eq!(contact_parts(&h, true, &SIMPLE_MACRO).len(), 1);
    }

    #[test]
    fn test_macro_icons_sit_inside_link() {
        let mut h = header("jane@x.com");
        h.phone = Some("555".to_string());
        let parts = contact_parts(&h, true, &SIMPLE_MACRO);
        assert_eq!(parts[0], r"\seticon{faPhone} 555");
        assert_eq!(
            parts[1],
            r"\href{mailto:jane@x.com}{\seticon{faEnvelope} jane@x.com}"
        );
    }

    #[test]
    fn test_glyph_icons_precede_link() {
        let mut h = header("jane@x.com");
        h.linked_in = Some("https://linkedin.com/in/jane".to_string());
        let format = ContactFormat {
            order: EMAIL_FIRST,
            link_style: LinkStyle::Plain,
            icon_style: IconStyle::Glyph,
        };
        let parts = contact_parts(&h, true, &format);
        assert_eq!(
            parts[1],
            r"\faLinkedin\ \href{https://linkedin.com/in/jane}{linkedin.com/jane}"
        );
    }

    #[test]
    fn test_underline_wraps_label_not_target() {
        let mut h = header("jane_doe@x.com");
        h.github = Some("https://github.com/jane".to_string());
        let format = ContactFormat {
            link_style: LinkStyle::Underline,
            ..SIMPLE_MACRO
        };
        let parts = contact_parts(&h, false, &format);
        assert_eq!(
            parts[0],
            r"\href{mailto:jane_doe@x.com}{\underline{jane\_doe@x.com}}"
        );
        assert_eq!(
            parts[1],
            r"\href{https://github.com/jane}{\underline{github.com/jane}}"
        );
    }

    #[test]
    fn test_icon_only_links_drop_label() {
        let mut h = header("jane@x.com");
        h.github = Some("https://github.com/jane".to_string());
        let format = ContactFormat {
            link_style: LinkStyle::IconOnly,
            ..SIMPLE_MACRO
        };
        let parts = contact_parts(&h, true, &format);
        assert_eq!(parts[1], r"\href{https://github.com/jane}{\seticon{faGithub}}");

        // Without icons the label is the only thing left to show.
        let parts = contact_parts(&h, false, &format);
        assert_eq!(parts[1], r"\href{https://github.com/jane}{github.com/jane}");
    }

    #[test]
    fn test_seticon_preamble_only_with_icons() {
        assert_eq!(seticon_preamble(false), "");
        assert!(seticon_preamble(true).contains(r"\newcommand{\seticon}"));
    }
}
