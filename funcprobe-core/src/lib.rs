//! Funcprobe core library - function location and parameter extraction
//! for Python, JavaScript, Java, and C++ source text

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Analysis is a pure function of (source, language, function name)
// - No global mutable state
// - No randomness, clocks, threads, or async
// - Identical input yields identical output
// - Malformed input degrades to not-found or partial results, never a panic

pub mod bounds;
pub mod config;
pub mod discover;
pub mod form;
pub mod language;
pub mod params;
pub mod report;

pub use bounds::{locate, locate_with, FunctionBounds, DEFAULT_BRACE_FALLBACK_LINES};
pub use config::{FuncprobeConfig, ResolvedConfig};
pub use discover::function_names;
pub use form::{plan_form, widget_for_type, FormField, InputWidget};
pub use language::Language;
pub use params::{extract_parameters, ParameterDescriptor, ANY_TYPE};
pub use report::{
    render_form_json, render_json, render_names_json, render_names_text, render_text,
    FunctionReport,
};

use anyhow::Result;

/// Request-scoped analysis context
///
/// Carries the full input of one analyze call; nothing is read from
/// ambient state.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub source: String,
    pub language_tag: String,
    pub function_name: String,
}

impl AnalysisRequest {
    pub fn new(
        source: impl Into<String>,
        language_tag: impl Into<String>,
        function_name: impl Into<String>,
    ) -> Self {
        AnalysisRequest {
            source: source.into(),
            language_tag: language_tag.into(),
            function_name: function_name.into(),
        }
    }

    /// The resolved language, if the tag is recognized
    pub fn language(&self) -> Option<Language> {
        Language::from_tag(&self.language_tag)
    }
}

/// Analyze a request with default configuration
pub fn analyze_request(request: &AnalysisRequest) -> Result<FunctionReport> {
    analyze_request_with_config(request, &ResolvedConfig::defaults())
}

/// Analyze a request with resolved configuration
///
/// Locates the function, slices its definition, and extracts the
/// parameter list. The only error is "not found"; every other
/// degradation (unbalanced braces, undecomposable parameter tokens,
/// unrecognized language tag) yields a best-effort report instead.
pub fn analyze_request_with_config(
    request: &AnalysisRequest,
    config: &ResolvedConfig,
) -> Result<FunctionReport> {
    let language = request.language().or(config.default_language);

    let bounds = bounds::locate_with(
        &request.source,
        &request.function_name,
        language,
        config.brace_fallback_lines,
    )
    .ok_or_else(|| {
        anyhow::anyhow!(
            "function `{}` not found in the supplied source",
            request.function_name
        )
    })?;

    let definition = bounds.slice(&request.source);
    let parameters = params::extract_parameters(&definition, language);

    Ok(FunctionReport {
        function: request.function_name.clone(),
        language: language
            .map(|lang| lang.tag().to_string())
            .unwrap_or_else(|| request.language_tag.clone()),
        start_line: bounds.start_line,
        end_line: bounds.end_line,
        definition,
        parameters,
    })
}
