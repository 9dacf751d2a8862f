//! Python matching rules
//!
//! Definitions are `def name(...):` lines; bodies are delimited by
//! indentation rather than braces.

use crate::params::{ParameterDescriptor, ANY_TYPE};
use regex::Regex;

/// Name-capturing variant of the definition pattern, for enumeration.
pub(crate) const NAME_PATTERN: &str = r"def\s+([A-Za-z_]\w*)\s*\(";

/// Definition pattern for a named function.
///
/// Matches a `def` line with a parenthesized parameter list followed by
/// `:`. Multi-line signatures do not match and report as not found.
pub fn definition_pattern(function_name: &str) -> String {
    format!(r"def\s+{}\s*\([^)]*\)\s*:", regex::escape(function_name))
}

/// Last line of the indentation-delimited body starting at `start`.
///
/// A line extends the body if it is blank or indented strictly deeper
/// than the definition line; the first line that is neither ends the
/// scan. Returns `start` itself when no following line qualifies.
pub fn body_end(lines: &[&str], start: usize) -> usize {
    let base_indent = indent_width(lines[start]);
    let mut end = start;

    for (index, line) in lines.iter().enumerate().skip(start + 1) {
        if line.trim().is_empty() || indent_width(line) > base_indent {
            end = index;
        } else {
            break;
        }
    }

    end
}

/// Count of leading whitespace characters.
fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Extract `name[: type][= default]` descriptors from a `def` signature.
///
/// A token without an annotation keeps its raw text as the name and gets
/// the `any` sentinel type; an annotated token is split at the first `:`
/// and any trailing default expression is stripped from the annotation.
pub fn extract_parameters(definition: &str) -> Vec<ParameterDescriptor> {
    let capture =
        Regex::new(r"def\s+\w+\s*\((.*?)\)").expect("signature capture pattern is valid");
    let Some(caps) = capture.captures(definition) else {
        return Vec::new();
    };
    let param_string = caps.get(1).map_or("", |m| m.as_str());

    let mut params = Vec::new();
    for token in param_string.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let mut pieces = token.split(':');
        let name = pieces.next().unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        let annotation = pieces.next().map(str::trim).filter(|a| !a.is_empty());

        let type_hint = match annotation {
            Some(annotation) => crate::params::strip_default(annotation),
            None => ANY_TYPE.to_string(),
        };

        params.push(ParameterDescriptor {
            name: name.to_string(),
            type_hint,
        });
    }

    params
}
