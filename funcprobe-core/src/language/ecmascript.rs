//! JavaScript matching rules
//!
//! Covers the three declaration forms the analyzer recognizes: named
//! `function` declarations, const-assigned arrow functions, and
//! const-assigned function expressions. The language carries no static
//! type annotations on this surface, so every parameter reports the
//! `any` sentinel.

use crate::params::{ParameterDescriptor, ANY_TYPE};
use regex::Regex;

/// Name-capturing variant of the definition pattern, for enumeration.
/// The second alternative covers both arrow and function-expression
/// assignments, since both open with `const <name> = (`.
pub(crate) const NAME_PATTERN: &str =
    r"function\s+([A-Za-z_$][\w$]*)\s*\(|const\s+([A-Za-z_$][\w$]*)\s*=\s*(?:function\s*)?\(";

/// Definition pattern for a named function.
pub fn definition_pattern(function_name: &str) -> String {
    let name = regex::escape(function_name);
    format!(
        r"function\s+{name}\s*\([^)]*\)|const\s+{name}\s*=\s*\([^)]*\)\s*=>|const\s+{name}\s*=\s*function\s*\([^)]*\)"
    )
}

/// Extract parameter names from any of the three declaration forms.
///
/// Default values (`x = 5`) are stripped to the bare name; a token that
/// is only a default expression has no name and is dropped.
pub fn extract_parameters(definition: &str) -> Vec<ParameterDescriptor> {
    let capture = Regex::new(
        r"function\s+\w+\s*\((.*?)\)|const\s+\w+\s*=\s*(?:function\s*)?\((.*?)\)|const\s+\w+\s*=\s*\((.*?)\)\s*=>",
    )
    .expect("signature capture pattern is valid");
    let Some(caps) = capture.captures(definition) else {
        return Vec::new();
    };
    let param_string = caps
        .get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map_or("", |m| m.as_str());

    let mut params = Vec::new();
    for token in param_string.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let name = crate::params::strip_default(token);
        if name.is_empty() {
            continue;
        }

        params.push(ParameterDescriptor {
            name,
            type_hint: ANY_TYPE.to_string(),
        });
    }

    params
}
