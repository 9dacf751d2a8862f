//! Language detection and per-language matching rules
//!
//! Each supported language gets its own submodule carrying the regex
//! patterns and splitting strategy used by the locator, the extractor,
//! and the function enumerator.

pub mod cpp;
pub mod ecmascript;
pub mod java;
pub mod python;

use std::path::Path;

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Python (.py, .pyw)
    Python,
    /// JavaScript (.js, .mjs, .cjs)
    JavaScript,
    /// Java (.java)
    Java,
    /// C++ (.cpp, .cc, .cxx, .hpp, .hh, .hxx)
    Cpp,
}

impl Language {
    /// Resolve a caller-supplied language tag
    ///
    /// Tags are the lowercase identifiers the request layer sends
    /// (`python`, `javascript`, `java`, `cpp`). Returns `None` for
    /// anything else; callers then fall back to the generic matching
    /// rules rather than failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use funcprobe_core::language::Language;
    ///
    /// assert_eq!(Language::from_tag("python"), Some(Language::Python));
    /// assert_eq!(Language::from_tag("cpp"), Some(Language::Cpp));
    /// assert_eq!(Language::from_tag("ruby"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "python" => Some(Language::Python),
            "javascript" => Some(Language::JavaScript),
            "java" => Some(Language::Java),
            "cpp" => Some(Language::Cpp),
            _ => None,
        }
    }

    /// Detect language from file extension
    ///
    /// Returns `None` if the extension is not recognized.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "py" | "pyw" => Some(Language::Python),
            "js" | "mjs" | "cjs" => Some(Language::JavaScript),
            "java" => Some(Language::Java),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => Some(Language::Cpp),
            _ => None,
        }
    }

    /// Detect language from file path
    ///
    /// Returns `None` if the file has no extension or the extension is
    /// not recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Get the canonical display name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Java => "Java",
            Language::Cpp => "C++",
        }
    }

    /// Get the request-layer tag for the language
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
            Language::Cpp => "cpp",
        }
    }

    /// Check whether function bodies are delimited by braces
    ///
    /// Python is the only supported language that delimits bodies by
    /// indentation instead.
    pub fn is_brace_delimited(&self) -> bool {
        !matches!(self, Language::Python)
    }

    /// Get file extensions for this language
    pub fn extensions(&self) -> &[&'static str] {
        match self {
            Language::Python => &["py", "pyw"],
            Language::JavaScript => &["js", "mjs", "cjs"],
            Language::Java => &["java"],
            Language::Cpp => &["cpp", "cc", "cxx", "hpp", "hh", "hxx"],
        }
    }
}
