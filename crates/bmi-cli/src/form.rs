//! Form state owned by the interactive view.

use bmi_calculator::{BmiEngine, BmiResult, ValidationError};

/// The two input fields plus whatever the last submission produced.
///
/// A failed submission sets the error and leaves the previous result in
/// place; a successful one replaces the result and clears the error.
#[derive(Debug, Default, Clone)]
pub struct FormState {
    height: String,
    weight: String,
    result: Option<BmiResult>,
    error: Option<ValidationError>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_height(&mut self, value: impl Into<String>) {
        self.height = value.into();
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.weight = value.into();
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn submit(&mut self, engine: &BmiEngine) {
        match engine.compute(self.height.as_str(), self.weight.as_str()) {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(error) => self.error = Some(error),
        }
    }
}
