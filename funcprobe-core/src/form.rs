//! Form planning: map extracted parameters to input-widget kinds
//!
//! The planner only emits data; rendering the actual widgets stays with
//! the external form renderer.

use crate::params::ParameterDescriptor;
use serde::{Deserialize, Serialize};

/// Input widget kind for one parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputWidget {
    /// File picker restricted to images
    ImageFile,
    /// True/false choice
    BinaryChoice,
    /// Numeric field; `integer_step` pins the step to whole numbers
    Number { integer_step: bool },
    /// Free-form text
    Text,
}

/// One renderable form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(rename = "type")]
    pub type_hint: String,
    pub widget: InputWidget,
}

/// Widget for a single type token.
///
/// Unknown tokens, including the `any` sentinel, fall back to free text.
pub fn widget_for_type(type_hint: &str) -> InputWidget {
    match type_hint {
        "image" => InputWidget::ImageFile,
        "bool" | "boolean" => InputWidget::BinaryChoice,
        "int" => InputWidget::Number { integer_step: true },
        "float" | "number" => InputWidget::Number {
            integer_step: false,
        },
        "string" | "str" => InputWidget::Text,
        _ => InputWidget::Text,
    }
}

/// Build the form plan for an extracted parameter list.
///
/// Field order matches declaration order.
pub fn plan_form(parameters: &[ParameterDescriptor]) -> Vec<FormField> {
    parameters
        .iter()
        .map(|param| FormField {
            name: param.name.clone(),
            type_hint: param.type_hint.clone(),
            widget: widget_for_type(&param.type_hint),
        })
        .collect()
}
