//! Text and JSON rendering of calculation outcomes.

use bmi_calculator::{BmiResult, ValidationError};
use serde_json::json;

use crate::config::OutputFormat;
use crate::form::FormState;

pub fn render_result(result: &BmiResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(result_text(result)),
        OutputFormat::Json => serde_json::to_string_pretty(result),
    }
}

pub fn render_error(error: &ValidationError, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("Error: {error}")),
        OutputFormat::Json => serde_json::to_string_pretty(&json!({ "error": error })),
    }
}

pub fn render_outcome(
    outcome: &Result<BmiResult, ValidationError>,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match outcome {
        Ok(result) => render_result(result, format),
        Err(error) => render_error(error, format),
    }
}

/// Renders the form's error line (if any) followed by its result (if any).
pub fn render_form(form: &FormState, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = Vec::new();
            if let Some(error) = form.error() {
                lines.push(format!("Error: {error}"));
            }
            if let Some(result) = form.result() {
                lines.push(result_text(result));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string(&json!({
            "height": form.height(),
            "weight": form.weight(),
            "result": form.result(),
            "error": form.error(),
        })),
    }
}

fn result_text(result: &BmiResult) -> String {
    let marker = if result.category.is_healthy() { " (healthy range)" } else { "" };
    format!("BMI: {}\nCategory: {}{}", result.display_value, result.category, marker)
}
