//! Error types for the Sortscope core.

use thiserror::Error;

use crate::runner::RunId;

/// Errors raised when an array cannot be (re)generated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// The lower bound is above the upper bound.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound
        min: i32,
        /// Requested upper bound
        max: i32,
    },

    /// The requested length is zero or above the supported maximum.
    #[error("invalid length {length}: expected a value between 1 and {max}")]
    InvalidLength {
        /// Requested length
        length: usize,
        /// Largest supported length
        max: usize,
    },
}

/// Errors raised by the sort runner.
#[derive(Error, Debug)]
pub enum SortError {
    /// A run is active and the runner is configured to reject new starts.
    #[error("sort run {0} is still in progress")]
    AlreadyRunning(RunId),

    /// The array cannot change while a sort is mutating it.
    #[error("the array cannot change while a sort is running")]
    Busy,

    /// Array generation failed.
    #[error(transparent)]
    Array(#[from] ArrayError),

    /// The worker task panicked or was aborted.
    #[error("sort worker failed: {0}")]
    Worker(String),
}

/// Errors raised when settings fail validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The array parameters are unusable.
    #[error(transparent)]
    Array(#[from] ArrayError),

    /// The step delay exceeds the supported maximum.
    #[error("delay of {delay_ms} ms exceeds the maximum of {max} ms")]
    DelayTooLong {
        /// Requested delay
        delay_ms: u64,
        /// Largest supported delay
        max: u64,
    },
}

/// Result type alias using [`SortError`].
pub type Result<T> = std::result::Result<T, SortError>;

/// Error returned when parsing an algorithm, order or scale name fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseNameError {
    /// What was being parsed ("algorithm", "order", ...)
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
    /// Accepted spellings
    pub expected: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_error_messages() {
        let err = ArrayError::InvalidRange { min: 10, max: 2 };
        assert_eq!(err.to_string(), "invalid range: min 10 is greater than max 2");

        let err = ArrayError::InvalidLength {
            length: 0,
            max: 1000,
        };
        assert!(err.to_string().contains("between 1 and 1000"));
    }

    #[test]
    fn test_sort_error_from_array_error() {
        let err: SortError = ArrayError::InvalidRange { min: 1, max: 0 }.into();
        assert!(matches!(err, SortError::Array(_)));
        assert!(err.to_string().starts_with("invalid range"));
    }

    #[test]
    fn test_parse_name_error_display() {
        let err = ParseNameError {
            kind: "algorithm",
            value: "quick".to_string(),
            expected: "bubble, selection, merge",
        };
        assert_eq!(
            err.to_string(),
            "unknown algorithm 'quick' (expected one of: bubble, selection, merge)"
        );
    }
}
