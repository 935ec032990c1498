//! PHPDoc block parsing.
//!
//! Turns the body lines of a `/** ... */` comment into a structured
//! [`Docblock`]: a one-line summary, a free-form description, and the raw
//! tag lines (`@param`, `@return`, ...). Tags are not interpreted further;
//! consumers get them as written.
//!
//! Style problems (missing summary and the like) are advisory: they come
//! back as [`Diagnostic`]s next to the parsed block and never fail the
//! parse.

use crate::diagnostics::Diagnostic;
use crate::types::Docblock;

/// Whether a docblock content line is a tag line (`@param ...`).
pub fn is_tag_line(line: &str) -> bool {
    line.starts_with('@')
}

/// Parse the body lines of a docblock (the lines between `/**` and `*/`,
/// exclusive). `line` is the source line of the closing delimiter, used to
/// attribute style warnings.
///
/// Each body line is stripped of its leading `*` decoration and surrounding
/// whitespace; lines left empty by that vanish. Of what remains, the first
/// line is the summary (unless it is itself a tag line), subsequent lines up
/// to the first tag line concatenate into the description, and the rest are
/// kept as raw tag lines.
pub fn parse(body: &[String], line: usize) -> (Docblock, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();

    let content: Vec<&str> = body
        .iter()
        .map(|raw| strip_decoration(raw))
        .filter(|stripped| !stripped.is_empty())
        .collect();

    if content.is_empty() {
        diagnostics.push(Diagnostic::style_warning(
            line,
            "docblock has no summary, description, or tags",
        ));
        return (Docblock::default(), diagnostics);
    }

    let mut rest = &content[..];

    let summary = if is_tag_line(content[0]) {
        diagnostics.push(Diagnostic::style_warning(line, "docblock has no summary"));
        String::new()
    } else {
        rest = &rest[1..];
        content[0].to_string()
    };

    let mut description = String::new();
    while let Some(first) = rest.first() {
        if is_tag_line(first) {
            break;
        }
        description.push_str(first);
        rest = &rest[1..];
    }
    if description.is_empty() {
        diagnostics.push(Diagnostic::style_warning(
            line,
            "docblock has no description",
        ));
    }

    let tags = rest.iter().map(|tag| tag.to_string()).collect();

    (
        Docblock {
            summary,
            description,
            tags,
        },
        diagnostics,
    )
}

/// Strip the leading `*` decoration (everything through the first `*`) and
/// surrounding whitespace from a docblock body line.
fn strip_decoration(raw: &str) -> &str {
    match raw.find('*') {
        Some(pos) => raw[pos + 1..].trim(),
        None => raw.trim(),
    }
}
