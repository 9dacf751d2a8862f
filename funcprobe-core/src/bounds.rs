//! Boundary Locator: find the line range of a named function definition
//!
//! Matching is regex-level and line by line. A definition-shaped line
//! inside a string literal or comment is indistinguishable from a real
//! definition, and the first matching line wins when several functions
//! share a name. Both are accepted limits of the analyzer, not defects.

use crate::language::{cpp, ecmascript, java, python, Language};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Lines assumed for a body whose braces never balance.
pub const DEFAULT_BRACE_FALLBACK_LINES: usize = 10;

/// Inclusive, 0-indexed line range of a function definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionBounds {
    pub start_line: usize,
    pub end_line: usize,
}

impl FunctionBounds {
    /// Number of lines covered, counting both endpoints
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// The definition text covered by this range.
    ///
    /// A degraded range may extend past the end of the source; the slice
    /// clamps to the lines that exist.
    pub fn slice(&self, source: &str) -> String {
        source
            .lines()
            .skip(self.start_line)
            .take(self.line_count())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Find the definition of `function_name` in `source`.
///
/// `language` selects the matching rules; `None` falls back to a generic
/// `function <name>(` / `def <name>(` pattern with brace-delimited body
/// scanning. Returns `None` when no line matches the definition pattern.
pub fn locate(
    source: &str,
    function_name: &str,
    language: Option<Language>,
) -> Option<FunctionBounds> {
    locate_with(source, function_name, language, DEFAULT_BRACE_FALLBACK_LINES)
}

/// `locate` with an explicit fallback distance for unbalanced braces.
pub fn locate_with(
    source: &str,
    function_name: &str,
    language: Option<Language>,
    brace_fallback_lines: usize,
) -> Option<FunctionBounds> {
    let pattern = definition_regex(language, function_name);
    let lines: Vec<&str> = source.lines().collect();

    let start_line = lines.iter().position(|line| pattern.is_match(line))?;

    let end_line = match language {
        Some(Language::Python) => python::body_end(&lines, start_line),
        _ => brace_body_end(&lines, start_line, brace_fallback_lines),
    };

    Some(FunctionBounds {
        start_line,
        end_line,
    })
}

/// Build the definition pattern for `function_name` in `language`.
fn definition_regex(language: Option<Language>, function_name: &str) -> Regex {
    let pattern = match language {
        Some(Language::Python) => python::definition_pattern(function_name),
        Some(Language::JavaScript) => ecmascript::definition_pattern(function_name),
        Some(Language::Java) => java::definition_pattern(function_name),
        Some(Language::Cpp) => cpp::definition_pattern(function_name),
        None => format!(
            r"function\s+{name}\s*\(|def\s+{name}\s*\(",
            name = regex::escape(function_name)
        ),
    };
    // The name is escaped and the surrounding pattern is fixed, so
    // compilation cannot fail.
    Regex::new(&pattern).expect("definition pattern is valid")
}

/// Last line of a brace-delimited body starting at `start`.
///
/// Runs a depth counter over every `{` and `}` from `start` onward and
/// stops on the line where the depth returns to zero after the first
/// opening brace. When the braces never balance, the body is assumed to
/// span `fallback_lines` lines past the signature; that range may extend
/// beyond the source and is clamped by [`FunctionBounds::slice`].
fn brace_body_end(lines: &[&str], start: usize, fallback_lines: usize) -> usize {
    let mut depth: i64 = 0;
    let mut seen_open = false;

    for (index, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    seen_open = true;
                }
                '}' => depth -= 1,
                _ => {}
            }
        }
        if seen_open && depth == 0 {
            return index;
        }
    }

    start + fallback_lines
}
