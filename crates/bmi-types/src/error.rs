use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Reasons a pair of inputs cannot produce a BMI.
///
/// Every variant is a user-input correction case; none indicates a fault.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Height or weight was not entered
    #[error("Please enter height and weight")]
    MissingInput,

    /// Height was zero, negative, or not a finite number
    #[error("Height must be a positive number")]
    NonPositiveHeight,

    /// Weight was zero, negative, or not a finite number
    #[error("Weight must be a positive number")]
    NonPositiveWeight,
}

impl ValidationError {
    /// Stable error code for machine-readable output
    pub const fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingInput => "MISSING_INPUT",
            ValidationError::NonPositiveHeight => "NON_POSITIVE_HEIGHT",
            ValidationError::NonPositiveWeight => "NON_POSITIVE_WEIGHT",
        }
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
