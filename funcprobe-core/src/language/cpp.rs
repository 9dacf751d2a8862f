//! C++ matching rules
//!
//! A definition line is a type token followed by the function name and
//! its parameter list. Parameters are `type name` pairs split by the
//! shared typed-token rule; qualifiers and reference markers stay on the
//! type side.

use crate::params::ParameterDescriptor;

/// Name-capturing variant of the definition pattern, for enumeration.
/// Group 1 is the type token (used to filter call statements), group 2
/// the function name.
pub(crate) const NAME_PATTERN: &str = r"(\w+)\s+([A-Za-z_]\w*)\s*\([^)]*\)";

/// Definition pattern for a named function.
pub fn definition_pattern(function_name: &str) -> String {
    format!(r"\w+\s+{}\s*\([^)]*\)", regex::escape(function_name))
}

/// Extract `type name` descriptors from a function signature.
pub fn extract_parameters(definition: &str) -> Vec<ParameterDescriptor> {
    crate::params::extract_typed_parameters(definition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_definition_pattern() {
        let pattern = Regex::new(&definition_pattern("square")).unwrap();
        assert!(pattern.is_match("int square(int x) {"));
        assert!(pattern.is_match("double square(double x)"));
        assert!(!pattern.is_match("int squared(int x) {"));
    }

    #[test]
    fn test_extract_parameters() {
        let params = extract_parameters("int add(int a, int b) {");
        assert_eq!(
            params,
            vec![
                ParameterDescriptor::typed("a", "int"),
                ParameterDescriptor::typed("b", "int"),
            ]
        );
    }

    #[test]
    fn test_extract_qualified_reference_type() {
        let params = extract_parameters("void print(const std::string& text) {");
        assert_eq!(
            params,
            vec![ParameterDescriptor::typed("text", "const std::string&")]
        );
    }

    #[test]
    fn test_extract_pointer_marker_stays_with_name() {
        // Splitting is whitespace-based, so a detached `*` stays on the name
        let params = extract_parameters("size_t length(const char *s) {");
        assert_eq!(params, vec![ParameterDescriptor::typed("*s", "const char")]);
    }

    #[test]
    fn test_extract_empty_parens() {
        assert!(extract_parameters("void run() {").is_empty());
    }
}
