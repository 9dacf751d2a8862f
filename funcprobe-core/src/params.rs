//! Parameter Extractor: decompose a definition's parameter list
//!
//! Comma splitting is not bracket-aware: a parameter whose default
//! expression or nested generic type contains a comma splits
//! incorrectly. That is an accepted limit of a regex-level analyzer.

use crate::language::{cpp, ecmascript, java, python, Language};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Type hint used when a parameter carries no annotation.
pub const ANY_TYPE: &str = "any";

/// One positional parameter: name plus best-effort type hint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_hint: String,
}

impl ParameterDescriptor {
    /// Descriptor with the `any` sentinel type
    pub fn untyped(name: impl Into<String>) -> Self {
        ParameterDescriptor {
            name: name.into(),
            type_hint: ANY_TYPE.to_string(),
        }
    }

    /// Descriptor with an explicit type hint
    pub fn typed(name: impl Into<String>, type_hint: impl Into<String>) -> Self {
        ParameterDescriptor {
            name: name.into(),
            type_hint: type_hint.into(),
        }
    }
}

/// Extract the ordered parameter list from `definition`.
///
/// `definition` is the text slice the Boundary Locator identified; on
/// practical inputs the signature line carries the whole parameter list
/// (multi-line signatures may yield a truncated one). Unrecognized
/// languages have no extraction rule and yield an empty list. Never
/// fails: malformed input degrades to a partial or empty result.
pub fn extract_parameters(
    definition: &str,
    language: Option<Language>,
) -> Vec<ParameterDescriptor> {
    match language {
        Some(Language::Python) => python::extract_parameters(definition),
        Some(Language::JavaScript) => ecmascript::extract_parameters(definition),
        Some(Language::Java) => java::extract_parameters(definition),
        Some(Language::Cpp) => cpp::extract_parameters(definition),
        None => Vec::new(),
    }
}

/// Strip a trailing `= <default expression>` from a token.
pub(crate) fn strip_default(token: &str) -> String {
    let stripped = Regex::new(r"\s*=\s*.+$")
        .expect("default-value pattern is valid")
        .replace(token, "");
    stripped.trim().to_string()
}

/// Split `type name` tokens for Java and C++ parameter lists.
///
/// The final whitespace-delimited piece of each token is the name;
/// everything before it joins into the type with single spaces. Tokens
/// with fewer than two pieces cannot be decomposed and are dropped.
pub(crate) fn extract_typed_parameters(definition: &str) -> Vec<ParameterDescriptor> {
    let capture =
        Regex::new(r"\w+\s+\w+\s*\((.*?)\)").expect("signature capture pattern is valid");
    let Some(caps) = capture.captures(definition) else {
        return Vec::new();
    };
    let param_string = caps.get(1).map_or("", |m| m.as_str());

    let mut params = Vec::new();
    for token in param_string.split(',') {
        let pieces: Vec<&str> = token.split_whitespace().collect();
        let Some((name, type_pieces)) = pieces.split_last() else {
            continue;
        };
        if type_pieces.is_empty() {
            continue;
        }
        params.push(ParameterDescriptor::typed(*name, type_pieces.join(" ")));
    }

    params
}
