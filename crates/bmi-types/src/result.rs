use serde::{Deserialize, Serialize};

use crate::BmiCategory;

/// Outcome of a successful BMI calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    /// Unrounded BMI value
    pub value: f64,
    /// Value rounded to one decimal place, e.g. `"23.1"`
    pub display_value: String,
    /// Category the value falls into
    pub category: BmiCategory,
}
