//! Errors surfaced to the user through the status line.

use sortscope_core::SortError;
use thiserror::Error;

/// Rejected user input. The request is ignored and prior state is kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The text is not an integer.
    #[error("{field}: '{input}' is not a valid integer")]
    NotANumber {
        /// Field being edited
        field: &'static str,
        /// Rejected text
        input: String,
    },

    /// The integer lies outside the accepted bounds.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Field being edited
        field: &'static str,
        /// Parsed value
        value: i64,
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },

    /// The range bounds are inverted.
    #[error("min ({min}) must not be greater than max ({max})")]
    MinGreaterThanMax {
        /// Requested lower bound
        min: i32,
        /// Requested upper bound
        max: i32,
    },
}

/// Failure of a controller operation.
#[derive(Error, Debug)]
pub enum ControlError {
    /// The request was invalid.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The runner refused or failed.
    #[error(transparent)]
    Sort(#[from] SortError),
}
