//! # Unit conversion
//!
//! Pure functions that turn one raw user argument (e.g. the `10` in `/feet 10`) into a reply
//! sentence in metric units, or a [`ConversionError`] whose `Display` is the message shown to the user.
//!
//! ## Validation
//!
//! - The argument is trimmed and parsed as `f64`; failure → [`ConversionError::InvalidNumber`].
//! - Negative quantities are rejected with [`ConversionError::Negative`], except for
//!   [`fahrenheit_to_celsius`] which accepts any number.
//!
//! ## Number rendering
//!
//! Quantities echoed back and unrounded results go through [`number::render`]; rounded results
//! use fixed precision (`{:.2}`, `{:.3}`). See the module docs for the exact rules.
//!
//! No I/O, no shared state: calling a converter twice with the same input yields the same text.

mod convert;
mod error;
pub mod number;

pub use convert::{
    cup_to_ml, fahrenheit_to_celsius, feet_to_cm, fluid_ounce_to_ml, gallon_to_l, inches_to_cm,
    miles_to_km, ounce_to_g, pounds_to_kg,
};
pub use error::ConversionError;

/// Outcome of a single conversion: reply text, or the validation error to show instead.
pub type ConversionResult = std::result::Result<String, ConversionError>;
