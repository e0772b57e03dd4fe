//! BMI Types
//!
//! This crate defines the core types shared by the BMI calculator crates:
//! the loosely-typed `RawInput` accepted at the boundary, the typed
//! `Measurement`, and the `BmiResult` / `ValidationError` pair returned by a
//! calculation. Keeping them here lets the calculator and any presentation
//! layer depend on the same definitions without depending on each other.

#![deny(warnings)]
#![deny(missing_docs)]

mod category;
mod error;
mod result;
mod types;

pub use category::BmiCategory;
pub use error::ValidationError;
pub use result::BmiResult;
pub use types::{Measurement, RawInput};
