//! Reporting and output generation

use crate::bounds::FunctionBounds;
use crate::form::FormField;
use crate::params::ParameterDescriptor;
use serde::{Deserialize, Serialize};

/// Analyze result for one function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionReport {
    pub function: String,
    pub language: String,
    pub start_line: usize,
    pub end_line: usize,
    pub definition: String,
    pub parameters: Vec<ParameterDescriptor>,
}

impl FunctionReport {
    /// The line range as bounds
    pub fn bounds(&self) -> FunctionBounds {
        FunctionBounds {
            start_line: self.start_line,
            end_line: self.end_line,
        }
    }
}

/// Render a report as text output
pub fn render_text(report: &FunctionReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<30} {:<12} {:<6} {}\n",
        "FUNCTION", "LANGUAGE", "START", "END"
    ));
    output.push_str(&format!(
        "{:<30} {:<12} {:<6} {}\n",
        report.function, report.language, report.start_line, report.end_line
    ));

    if report.parameters.is_empty() {
        output.push_str("\nno parameters\n");
    } else {
        output.push_str(&format!("\n{:<30} {}\n", "PARAMETER", "TYPE"));
        for param in &report.parameters {
            output.push_str(&format!("{:<30} {}\n", param.name, param.type_hint));
        }
    }

    output
}

/// Render a report as JSON output
pub fn render_json(report: &FunctionReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

/// Render a function name listing as text output
pub fn render_names_text(names: &[String]) -> String {
    let mut output = String::new();
    for name in names {
        output.push_str(name);
        output.push('\n');
    }
    output
}

/// Render a function name listing as JSON output
pub fn render_names_json(names: &[String]) -> String {
    serde_json::to_string_pretty(names).unwrap_or_else(|_| "[]".to_string())
}

/// Render a form plan as JSON output
pub fn render_form_json(plan: &[FormField]) -> String {
    serde_json::to_string_pretty(plan).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> FunctionReport {
        FunctionReport {
            function: "calc".to_string(),
            language: "python".to_string(),
            start_line: 0,
            end_line: 1,
            definition: "def calc(a: int, b: int = 5):\n    return a + b".to_string(),
            parameters: vec![
                ParameterDescriptor::typed("a", "int"),
                ParameterDescriptor::typed("b", "int"),
            ],
        }
    }

    #[test]
    fn test_bounds_accessor() {
        let report = sample_report();
        assert_eq!(
            report.bounds(),
            FunctionBounds {
                start_line: 0,
                end_line: 1
            }
        );
    }

    #[test]
    fn test_render_text_lists_parameters() {
        let text = render_text(&sample_report());
        assert!(text.contains("calc"));
        assert!(text.contains("python"));
        assert!(text.contains("PARAMETER"));
        assert!(text.contains("a"));
        assert!(text.contains("int"));
    }

    #[test]
    fn test_render_text_without_parameters() {
        let mut report = sample_report();
        report.parameters.clear();
        let text = render_text(&report);
        assert!(text.contains("no parameters"));
    }

    #[test]
    fn test_render_json_round_trips() {
        let report = sample_report();
        let json = render_json(&report);
        let parsed: FunctionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_render_json_uses_type_key() {
        let json = render_json(&sample_report());
        assert!(json.contains("\"type\": \"int\""));
    }

    #[test]
    fn test_render_names() {
        let names = vec!["first".to_string(), "second".to_string()];
        assert_eq!(render_names_text(&names), "first\nsecond\n");
        let json = render_names_json(&names);
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, names);
    }
}
