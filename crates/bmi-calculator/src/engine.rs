//! The BMI engine: input normalization, validation, and computation.

use bmi_types::{BmiResult, Measurement, RawInput, ValidationError};
use tracing::debug;

use crate::classify::{classify, format_display};

/// Stateless BMI calculator.
///
/// Validation short-circuits in a fixed order: missing input, then height,
/// then weight. Height is checked after conversion to meters.
#[derive(Debug, Default, Clone, Copy)]
pub struct BmiEngine;

impl BmiEngine {
    pub fn new() -> Self {
        Self
    }

    /// Computes the BMI for a height in centimeters and a weight in kilograms.
    ///
    /// Both arguments may be numbers or numeric strings; they are normalized to
    /// `f64` before any arithmetic. Values that are present but unparseable or
    /// non-finite are rejected as non-positive.
    pub fn compute(
        &self,
        height_cm: impl Into<RawInput>,
        weight_kg: impl Into<RawInput>,
    ) -> Result<BmiResult, ValidationError> {
        let height_cm = height_cm.into();
        let weight_kg = weight_kg.into();

        let outcome =
            self.normalize(&height_cm, &weight_kg).and_then(|m| self.compute_measurement(&m));
        match &outcome {
            Ok(result) => debug!(
                %height_cm,
                %weight_kg,
                bmi = result.value,
                category = %result.category,
                "Computed BMI"
            ),
            Err(error) => debug!(%height_cm, %weight_kg, code = error.code(), "Rejected BMI input"),
        }
        outcome
    }

    /// Computes the BMI for an already-typed measurement.
    pub fn compute_measurement(
        &self,
        measurement: &Measurement,
    ) -> Result<BmiResult, ValidationError> {
        let height_m = measurement.height_m();
        if !is_strictly_positive(height_m) {
            return Err(ValidationError::NonPositiveHeight);
        }
        if !is_strictly_positive(measurement.weight_kg) {
            return Err(ValidationError::NonPositiveWeight);
        }

        let value = measurement.weight_kg / (height_m * height_m);
        Ok(BmiResult { value, display_value: format_display(value), category: classify(value) })
    }

    fn normalize(
        &self,
        height_cm: &RawInput,
        weight_kg: &RawInput,
    ) -> Result<Measurement, ValidationError> {
        if height_cm.is_missing() || weight_kg.is_missing() {
            return Err(ValidationError::MissingInput);
        }
        // Unparseable text becomes NaN so it fails the positivity checks below.
        Ok(Measurement::new(
            height_cm.as_number().unwrap_or(f64::NAN),
            weight_kg.as_number().unwrap_or(f64::NAN),
        ))
    }
}

/// Computes a BMI with a default [`BmiEngine`].
pub fn compute(
    height_cm: impl Into<RawInput>,
    weight_kg: impl Into<RawInput>,
) -> Result<BmiResult, ValidationError> {
    BmiEngine::new().compute(height_cm, weight_kg)
}

fn is_strictly_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_types::BmiCategory;

    #[test]
    fn test_reference_examples() {
        let normal = compute(180, 75).unwrap();
        assert_eq!(normal.display_value, "23.1");
        assert_eq!(normal.category, BmiCategory::NormalWeight);

        let obese = compute(160, 90).unwrap();
        assert_eq!(obese.display_value, "35.2");
        assert_eq!(obese.category, BmiCategory::Obese);
    }

    #[test]
    fn test_missing_wins_over_invalid() {
        assert_eq!(compute("", -5), Err(ValidationError::MissingInput));
        assert_eq!(compute(-5, ""), Err(ValidationError::MissingInput));
        assert_eq!(compute(None::<f64>, 70.0), Err(ValidationError::MissingInput));
    }

    #[test]
    fn test_height_checked_before_weight() {
        assert_eq!(compute(0, 0), Err(ValidationError::NonPositiveHeight));
        assert_eq!(compute(-170, -60), Err(ValidationError::NonPositiveHeight));
    }

    #[test]
    fn test_unparseable_values_are_rejected() {
        assert_eq!(compute("tall", 70), Err(ValidationError::NonPositiveHeight));
        assert_eq!(compute(170, "heavy"), Err(ValidationError::NonPositiveWeight));
        assert_eq!(compute(f64::INFINITY, 70), Err(ValidationError::NonPositiveHeight));
        assert_eq!(compute(170, f64::NAN), Err(ValidationError::NonPositiveWeight));
    }

    #[test]
    fn test_measurement_path_skips_presence_check() {
        let engine = BmiEngine::new();
        assert_eq!(
            engine.compute_measurement(&Measurement::new(170.0, 0.0)),
            Err(ValidationError::NonPositiveWeight)
        );
        assert!(engine.compute_measurement(&Measurement::new(170.0, 65.0)).is_ok());
    }
}
