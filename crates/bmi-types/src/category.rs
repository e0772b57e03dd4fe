use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight category derived from a BMI value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to (not including) 25
    #[serde(rename = "Normal weight")]
    NormalWeight,
    /// BMI from 25 up to (not including) 30
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Human-readable label, e.g. `"Normal weight"`.
    pub const fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Only the normal range counts as healthy.
    pub const fn is_healthy(&self) -> bool {
        matches!(self, BmiCategory::NormalWeight)
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
