//! LaTeX text escaping for user-supplied strings.

/// Reserved characters and their literal-rendering replacements.
///
/// Backslash comes first: every later replacement inserts backslashes, and
/// those must never be escaped again.
const RESERVED: [(char, &str); 10] = [
    ('\\', r"\textbackslash{}"),
    ('&', r"\&"),
    ('%', r"\%"),
    ('$', r"\$"),
    ('#', r"\#"),
    ('_', r"\_"),
    ('{', r"\{"),
    ('}', r"\}"),
    ('~', r"\textasciitilde{}"),
    ('^', r"\textasciicircum{}"),
];

/// Escapes text for a LaTeX document body.
///
/// Each input character is looked up once, so braces inserted by
/// `\textbackslash{}` and friends are emitted verbatim.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for ch in text.chars() {
        match RESERVED.iter().find(|(reserved, _)| *reserved == ch) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

/// Escapes an optional field, treating `None` as empty.
pub fn escape_opt(text: Option<&str>) -> String {
    text.map(escape_latex).unwrap_or_default()
}
