//! Function name enumeration
//!
//! Regex-level scan producing the candidate names a caller can offer
//! for selection. Shares the locator's fidelity: a definition-shaped
//! line inside a string literal or comment is reported too.

use crate::language::{cpp, ecmascript, java, python, Language};
use regex::{Captures, Regex};
use std::collections::HashSet;

/// Generic pattern for unrecognized language tags.
const GENERIC_NAME_PATTERN: &str =
    r"function\s+([A-Za-z_$][\w$]*)\s*\(|def\s+([A-Za-z_]\w*)\s*\(";

/// Keywords that mark a Java/C++ "type name(" match as a call or control
/// statement rather than a definition.
const RESERVED: &[&str] = &[
    "return", "if", "else", "while", "for", "switch", "case", "do", "new", "throw", "delete",
    "break", "continue", "goto", "sizeof",
];

/// List candidate function names in first-occurrence order.
///
/// Duplicates collapse to the first occurrence. Unrecognized languages
/// use the generic `function <name>(` / `def <name>(` pattern.
pub fn function_names(source: &str, language: Option<Language>) -> Vec<String> {
    let pattern = name_regex(language);

    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for line in source.lines() {
        for caps in pattern.captures_iter(line) {
            let Some(name) = candidate_name(&caps, language) else {
                continue;
            };
            if seen.insert(name.to_string()) {
                names.push(name.to_string());
            }
        }
    }

    names
}

/// Name-capturing pattern for `language`.
fn name_regex(language: Option<Language>) -> Regex {
    let pattern = match language {
        Some(Language::Python) => python::NAME_PATTERN,
        Some(Language::JavaScript) => ecmascript::NAME_PATTERN,
        Some(Language::Java) => java::NAME_PATTERN,
        Some(Language::Cpp) => cpp::NAME_PATTERN,
        None => GENERIC_NAME_PATTERN,
    };
    Regex::new(pattern).expect("name pattern is valid")
}

/// Pull the function name out of one match, filtering the Java/C++
/// call-statement false positives.
fn candidate_name<'t>(caps: &Captures<'t>, language: Option<Language>) -> Option<&'t str> {
    match language {
        Some(Language::Java) | Some(Language::Cpp) => {
            let type_token = caps.get(1)?.as_str();
            let name = caps.get(2)?.as_str();
            if RESERVED.contains(&type_token) || RESERVED.contains(&name) {
                None
            } else {
                Some(name)
            }
        }
        Some(Language::Python) => caps.get(1).map(|m| m.as_str()),
        Some(Language::JavaScript) | None => {
            caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_names_in_order() {
        let source = "def first():\n    pass\n\ndef second(x):\n    pass\n\ndef third():\n    pass\n";
        assert_eq!(
            function_names(source, Some(Language::Python)),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn test_python_duplicates_collapse() {
        let source = "def f(a):\n    pass\n\ndef f(a, b):\n    pass\n";
        assert_eq!(function_names(source, Some(Language::Python)), vec!["f"]);
    }

    #[test]
    fn test_javascript_all_declaration_forms() {
        let source = "function one() {}\nconst two = (x) => x;\nconst three = function (y) {\n  return y;\n};\n";
        assert_eq!(
            function_names(source, Some(Language::JavaScript)),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn test_java_reserved_words_filtered() {
        let source = "public int sum(int a, int b) {\n    return combine(a, b);\n}\n";
        assert_eq!(function_names(source, Some(Language::Java)), vec!["sum"]);
    }

    #[test]
    fn test_cpp_names() {
        let source = "int square(int x) {\n  return x * x;\n}\n\ndouble half(double x) {\n  return x / 2;\n}\n";
        assert_eq!(
            function_names(source, Some(Language::Cpp)),
            vec!["square", "half"]
        );
    }

    #[test]
    fn test_unknown_language_generic_pattern() {
        let source = "function alpha(a) {}\ndef beta(b):\n";
        assert_eq!(function_names(source, None), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_empty_source() {
        assert!(function_names("", Some(Language::Python)).is_empty());
    }
}
