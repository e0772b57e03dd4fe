//! Category thresholds and display rounding.

use bmi_types::BmiCategory;

/// Lower bound (inclusive) of the normal weight range.
pub const NORMAL_WEIGHT_MIN: f64 = 18.5;
/// Lower bound (inclusive) of the overweight range.
pub const OVERWEIGHT_MIN: f64 = 25.0;
/// Lower bound (inclusive) of the obese range.
pub const OBESE_MIN: f64 = 30.0;

/// Maps a BMI value onto its category using half-open ranges.
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < NORMAL_WEIGHT_MIN {
        BmiCategory::Underweight
    } else if bmi < OVERWEIGHT_MIN {
        BmiCategory::NormalWeight
    } else if bmi < OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Rounds to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Display form of a BMI value: one decimal, always printed (`"25.0"`).
pub fn format_display(value: f64) -> String {
    format!("{:.1}", round_to_tenth(value))
}
