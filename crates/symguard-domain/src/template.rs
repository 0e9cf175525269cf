//! Compact rule templates.
//!
//! A template is a comma-separated list of segments, each with at most one brace group:
//! `fmt,go/{ast,parser},io{,/ioutil}` denotes
//! `fmt`, `go/ast`, `go/parser`, `io`, `io/ioutil`.
//! Commas inside the brace group separate alternatives, not segments.

use crate::error::TemplateError;

/// Expand `pattern` into the ordered list of strings it denotes.
///
/// The result always has at least one element.
pub fn expand(pattern: &str) -> Result<Vec<String>, TemplateError> {
    if pattern.is_empty() {
        return Err(TemplateError::Empty);
    }

    let mut out = Vec::new();
    for segment in segments(pattern)? {
        expand_segment(&segment, &mut out)?;
    }
    Ok(out)
}

/// Expand a pattern and its replacement pattern with positional correspondence:
/// the i-th replacement belongs to the i-th source.
pub fn expand_pair(
    pattern: &str,
    replacement: &str,
) -> Result<Vec<(String, String)>, TemplateError> {
    let sources = expand(pattern)?;
    let replacements = expand(replacement)?;
    if sources.len() != replacements.len() {
        return Err(TemplateError::LengthMismatch {
            sources: sources.len(),
            replacements: replacements.len(),
        });
    }
    Ok(sources.into_iter().zip(replacements).collect())
}

/// Split on top-level commas. A piece that opens a brace group is glued to the
/// following pieces until one of them closes it.
fn segments(pattern: &str) -> Result<Vec<String>, TemplateError> {
    let mut out = Vec::new();
    let mut current = String::new();

    for piece in pattern.split(',') {
        if piece.is_empty() {
            return Err(TemplateError::EmptyElement {
                pattern: pattern.to_string(),
            });
        }

        let in_group = !current.is_empty() || piece.contains('{');
        if in_group && !piece.contains('}') {
            current.push_str(piece);
            current.push(',');
            continue;
        }

        current.push_str(piece);
        out.push(std::mem::take(&mut current));
    }

    if !current.is_empty() {
        return Err(TemplateError::Unclosed {
            pattern: pattern.to_string(),
        });
    }
    Ok(out)
}

/// `prefix '{' alt (',' alt)* '}' suffix`, or a plain literal.
fn expand_segment(segment: &str, out: &mut Vec<String>) -> Result<(), TemplateError> {
    let malformed = || TemplateError::Malformed {
        segment: segment.to_string(),
    };

    let Some(open) = segment.find('{') else {
        if segment.contains('}') {
            return Err(malformed());
        }
        out.push(segment.to_string());
        return Ok(());
    };

    let prefix = &segment[..open];
    let rest = &segment[open + 1..];
    let close = rest.find('}').ok_or_else(malformed)?;
    let body = &rest[..close];
    let suffix = &rest[close + 1..];

    if prefix.contains('}') || body.contains('{') || suffix.contains(['{', '}']) {
        return Err(malformed());
    }
    if body.is_empty() {
        return Err(TemplateError::EmptyGroup {
            segment: segment.to_string(),
        });
    }

    for alt in body.split(',') {
        let expanded = format!("{prefix}{alt}{suffix}");
        if expanded.is_empty() {
            return Err(TemplateError::EmptyExpansion {
                segment: segment.to_string(),
            });
        }
        out.push(expanded);
    }
    Ok(())
}
