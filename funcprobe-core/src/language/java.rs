//! Java matching rules
//!
//! A definition line is an optional visibility modifier, a return-type
//! token, then the method name and its parameter list. Parameters are
//! `type name` pairs split by the shared typed-token rule.

use crate::params::ParameterDescriptor;

/// Name-capturing variant of the definition pattern, for enumeration.
/// Group 1 is the return-type token (used to filter call statements),
/// group 2 the method name.
pub(crate) const NAME_PATTERN: &str =
    r"(?:public|private|protected)?\s+(\w+)\s+([A-Za-z_$][\w$]*)\s*\([^)]*\)";

/// Definition pattern for a named method.
pub fn definition_pattern(function_name: &str) -> String {
    format!(
        r"(?:public|private|protected)?\s+\w+\s+{}\s*\([^)]*\)",
        regex::escape(function_name)
    )
}

/// Extract `type name` descriptors from a method signature.
pub fn extract_parameters(definition: &str) -> Vec<ParameterDescriptor> {
    crate::params::extract_typed_parameters(definition)
}
