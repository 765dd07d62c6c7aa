//! Validation errors for conversions. The `Display` text is sent to the user as-is.

use thiserror::Error;

/// Why an argument could not be converted. `unit` is the human-readable unit name
/// (e.g. `"fluid ounce"`), used inside the message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// The argument is not a decimal number.
    #[error("Invalid input. Please enter a valid number of {unit}.")]
    InvalidNumber { unit: &'static str },

    /// The number is negative (or NaN) for a unit that only accepts quantities `>= 0`.
    #[error("Please enter a non-negative number of {unit}.")]
    Negative { unit: &'static str },
}
