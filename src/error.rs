//! User-facing search errors
//!
//! Everything here is detected before a trace is generated. The `Display`
//! text is exactly what the notice box shows.

use thiserror::Error;

/// Which input a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Array,
    Target,
}

/// Rejections surfaced to the user as a single notice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Array input cannot be empty.")]
    EmptyInput,

    #[error("{}", numeric_message(.field))]
    NonNumericInput { field: InputField, value: String },

    #[error("{}", range_message(.field))]
    OutOfRangeInput { field: InputField, value: i64 },

    #[error("An animation is already running. Please wait or refresh.")]
    ConcurrentInvocation,
}

impl SearchError {
    /// Short machine-friendly name, used in logs and JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::EmptyInput => "empty_input",
            SearchError::NonNumericInput { .. } => "non_numeric_input",
            SearchError::OutOfRangeInput { .. } => "out_of_range_input",
            SearchError::ConcurrentInvocation => "concurrent_invocation",
        }
    }
}

const TARGET_MESSAGE: &str = "Please enter a valid target number between 1 and 100.";

fn numeric_message(field: &InputField) -> &'static str {
    match field {
        InputField::Array => "Invalid array input. Please enter comma-separated numbers only.",
        InputField::Target => TARGET_MESSAGE,
    }
}

fn range_message(field: &InputField) -> &'static str {
    match field {
        InputField::Array => "Array elements must be between 1 and 100.",
        InputField::Target => TARGET_MESSAGE,
    }
}
