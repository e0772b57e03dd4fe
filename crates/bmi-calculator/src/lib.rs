#![deny(warnings)]
//! Body Mass Index computation for the BMI calculator.
//!
//! The heart of this crate is [`BmiEngine::compute`], a pure function that
//! normalizes two raw inputs, validates them, and returns either a
//! [`BmiResult`] or a [`ValidationError`].
//!
//! ```
//! use bmi_calculator::{BmiCategory, compute};
//!
//! let result = compute("180", 75).unwrap();
//! assert_eq!(result.display_value, "23.1");
//! assert_eq!(result.category, BmiCategory::NormalWeight);
//! ```

pub mod classify;
pub mod engine;

pub use bmi_types::{BmiCategory, BmiResult, Measurement, RawInput, ValidationError};
pub use classify::{classify, format_display, round_to_tenth};
pub use engine::{BmiEngine, compute};
