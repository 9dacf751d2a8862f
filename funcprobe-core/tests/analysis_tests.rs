//! Integration tests for the analyze pipeline

use funcprobe_core::{
    analyze_request, analyze_request_with_config, extract_parameters, function_names, locate,
    plan_form, AnalysisRequest, FuncprobeConfig, FunctionBounds, InputWidget, Language,
    ParameterDescriptor,
};

const PYTHON_SOURCE: &str = "\
import math

def area(radius: float):
    return math.pi * radius ** 2

def greet(name):
    message = f'hi {name}'
    return message

def describe(label: str, value: int = 0, flag: bool = False):
    if flag:
        return f'{label}={value}'
    return label
";

const JAVASCRIPT_SOURCE: &str = "\
function add(x, y) {
  return x + y;
}

const scale = (value, factor = 2) => {
  return value * factor;
};

const shout = function (text) {
  return text.toUpperCase();
};
";

const JAVA_SOURCE: &str = "\
public class Calculator {
    public int sum(int a, int b) {
        return a + b;
    }

    private double divide(double top, double bottom) {
        if (bottom == 0) {
            throw new ArithmeticException();
        }
        return top / bottom;
    }
}
";

const CPP_SOURCE: &str = "\
#include <string>

int square(int x) {
  return x * x;
}

void print_label(const std::string& label, int count) {
  for (int i = 0; i < count; i++) {
  }
}
";

#[test]
fn test_python_locate_and_extract() {
    let bounds = locate(PYTHON_SOURCE, "greet", Some(Language::Python)).unwrap();
    assert_eq!(bounds.start_line, 5);
    assert_eq!(bounds.end_line, 8);

    let definition = bounds.slice(PYTHON_SOURCE);
    let params = extract_parameters(&definition, Some(Language::Python));
    assert_eq!(params, vec![ParameterDescriptor::untyped("name")]);
}

#[test]
fn test_python_annotations_and_defaults() {
    let bounds = locate(PYTHON_SOURCE, "describe", Some(Language::Python)).unwrap();
    let definition = bounds.slice(PYTHON_SOURCE);
    let params = extract_parameters(&definition, Some(Language::Python));
    assert_eq!(
        params,
        vec![
            ParameterDescriptor::typed("label", "str"),
            ParameterDescriptor::typed("value", "int"),
            ParameterDescriptor::typed("flag", "bool"),
        ]
    );
}

#[test]
fn test_python_minimal_example() {
    let source = "def greet(name):\n    return f'hi {name}'\n";
    let bounds = locate(source, "greet", Some(Language::Python)).unwrap();
    assert_eq!(
        bounds,
        FunctionBounds {
            start_line: 0,
            end_line: 1
        }
    );

    let params = extract_parameters(&bounds.slice(source), Some(Language::Python));
    assert_eq!(params, vec![ParameterDescriptor::untyped("name")]);
}

#[test]
fn test_javascript_declaration_forms() {
    for (name, expected) in [
        ("add", vec!["x", "y"]),
        ("scale", vec!["value", "factor"]),
        ("shout", vec!["text"]),
    ] {
        let bounds = locate(JAVASCRIPT_SOURCE, name, Some(Language::JavaScript)).unwrap();
        let definition = bounds.slice(JAVASCRIPT_SOURCE);
        let params = extract_parameters(&definition, Some(Language::JavaScript));
        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, expected, "parameters of {}", name);
        assert!(params.iter().all(|p| p.type_hint == "any"));
    }
}

#[test]
fn test_javascript_arrow_bounds_brace_balanced() {
    let source = "const add = (x, y) => {\n  return x + y;\n};";
    let bounds = locate(source, "add", Some(Language::JavaScript)).unwrap();
    assert_eq!(bounds.start_line, 0);
    assert_eq!(bounds.end_line, 2);
}

#[test]
fn test_java_method() {
    let bounds = locate(JAVA_SOURCE, "sum", Some(Language::Java)).unwrap();
    assert_eq!(bounds.start_line, 1);
    assert_eq!(bounds.end_line, 3);

    let params = extract_parameters(&bounds.slice(JAVA_SOURCE), Some(Language::Java));
    assert_eq!(
        params,
        vec![
            ParameterDescriptor::typed("a", "int"),
            ParameterDescriptor::typed("b", "int"),
        ]
    );
}

#[test]
fn test_java_nested_braces() {
    let bounds = locate(JAVA_SOURCE, "divide", Some(Language::Java)).unwrap();
    assert_eq!(bounds.start_line, 5);
    assert_eq!(bounds.end_line, 10);
}

#[test]
fn test_cpp_reference_parameter() {
    let bounds = locate(CPP_SOURCE, "print_label", Some(Language::Cpp)).unwrap();
    let params = extract_parameters(&bounds.slice(CPP_SOURCE), Some(Language::Cpp));
    assert_eq!(
        params,
        vec![
            ParameterDescriptor::typed("label", "const std::string&"),
            ParameterDescriptor::typed("count", "int"),
        ]
    );
}

#[test]
fn test_not_found_short_circuits() {
    assert!(locate(PYTHON_SOURCE, "absent", Some(Language::Python)).is_none());

    let request = AnalysisRequest::new(PYTHON_SOURCE, "python", "absent");
    assert!(analyze_request(&request).is_err());
}

#[test]
fn test_degraded_brace_fallback() {
    let source = "int f() {";
    let bounds = locate(source, "f", Some(Language::Cpp)).unwrap();
    assert_eq!(
        bounds,
        FunctionBounds {
            start_line: 0,
            end_line: 10
        }
    );
}

#[test]
fn test_configured_fallback_distance() {
    let config = FuncprobeConfig {
        brace_fallback_lines: Some(4),
        default_language: None,
    };
    let resolved = config.resolve().unwrap();

    let request = AnalysisRequest::new("int f() {", "cpp", "f");
    let report = analyze_request_with_config(&request, &resolved).unwrap();
    assert_eq!(report.end_line, 4);
}

#[test]
fn test_idempotence() {
    let request = AnalysisRequest::new(PYTHON_SOURCE, "python", "describe");
    let first = analyze_request(&request).unwrap();
    let second = analyze_request(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_first_occurrence_wins() {
    let source = "def f(a):\n    return a\n\ndef f(a, b):\n    return a + b\n";
    let request = AnalysisRequest::new(source, "python", "f");
    let report = analyze_request(&request).unwrap();
    assert_eq!(report.start_line, 0);
    assert_eq!(report.parameters.len(), 1);
}

#[test]
fn test_unknown_tag_generic_locate_empty_extract() {
    let request = AnalysisRequest::new("function f(a, b) {\n  return a;\n}", "ruby", "f");
    let report = analyze_request(&request).unwrap();
    assert_eq!(report.start_line, 0);
    assert_eq!(report.end_line, 2);
    assert!(report.parameters.is_empty());
}

#[test]
fn test_enumerate_then_analyze() {
    let names = function_names(PYTHON_SOURCE, Some(Language::Python));
    assert_eq!(names, vec!["area", "greet", "describe"]);

    for name in names {
        let request = AnalysisRequest::new(PYTHON_SOURCE, "python", name);
        assert!(analyze_request(&request).is_ok());
    }
}

#[test]
fn test_form_plan_from_report() {
    let request = AnalysisRequest::new(PYTHON_SOURCE, "python", "describe");
    let report = analyze_request(&request).unwrap();
    let plan = plan_form(&report.parameters);

    assert_eq!(plan.len(), 3);
    assert_eq!(plan[0].widget, InputWidget::Text);
    assert_eq!(plan[1].widget, InputWidget::Number { integer_step: true });
    assert_eq!(plan[2].widget, InputWidget::BinaryChoice);
}

#[test]
fn test_no_parameter_function_yields_empty_plan() {
    let source = "def ping():\n    return 'pong'\n";
    let request = AnalysisRequest::new(source, "python", "ping");
    let report = analyze_request(&request).unwrap();
    assert!(report.parameters.is_empty());
    assert!(plan_form(&report.parameters).is_empty());
}
