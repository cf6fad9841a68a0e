//! # Error Types
//!
//! Structured error types for calc_core. Every rejected input names the
//! field it came from and the offending value, so a form can point at the
//! exact text box and a CLI can print something actionable.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_tenure(years: f64) -> CalcResult<()> {
//!     if years <= 0.0 {
//!         return Err(CalcError::non_positive("tenure_years", years));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_tenure(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Text could not be read as a number, or the number is NaN/infinite
    #[error("Invalid number for '{field}': '{value}'")]
    InvalidNumber { field: String, value: String },

    /// A value that must be strictly positive was zero or negative
    #[error("Value for '{field}' must be greater than zero (got {value})")]
    NonPositiveValue { field: String, value: String },

    /// A value that may be zero was negative
    #[error("Value for '{field}' cannot be negative (got {value})")]
    NegativeValue { field: String, value: String },

    /// A value is outside the range a calculation supports
    #[error("Value for '{field}' is out of range: {value} (maximum {max})")]
    OutOfRange {
        field: String,
        value: String,
        max: String,
    },

    /// Inputs were finite but the result is too large to represent
    #[error("Result is too large to represent for the given '{field}'")]
    ResultOverflow { field: String },

    /// A choice field (unit system, category, ...) holds an unknown value
    #[error("Unknown value for '{field}': '{value}' (expected one of: {expected})")]
    UnknownOption {
        field: String,
        value: String,
        expected: String,
    },

    /// A ratio was requested against a zero base
    #[error("Cannot divide by zero: '{field}' is 0")]
    DivisionByZero { field: String },

    /// An uploaded file is not of the expected type
    #[error("Invalid file type: '{file_name}' - {reason}")]
    InvalidFileType { file_name: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Settings file could not be read or holds unusable values
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidNumber error
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a NonPositiveValue error
    pub fn non_positive(field: impl Into<String>, value: f64) -> Self {
        CalcError::NonPositiveValue {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Create a NegativeValue error
    pub fn negative(field: impl Into<String>, value: f64) -> Self {
        CalcError::NegativeValue {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(field: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            field: field.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(field: impl Into<String>, value: f64, max: f64) -> Self {
        CalcError::OutOfRange {
            field: field.into(),
            value: value.to_string(),
            max: max.to_string(),
        }
    }

    /// Create a ResultOverflow error
    pub fn result_overflow(field: impl Into<String>) -> Self {
        CalcError::ResultOverflow { field: field.into() }
    }

    /// Create an UnknownOption error
    pub fn unknown_option(field: impl Into<String>, value: impl Into<String>, expected: &[&str]) -> Self {
        CalcError::UnknownOption {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create an InvalidFileType error
    pub fn invalid_file_type(file_name: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidFileType {
            file_name: file_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config(reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            reason: reason.into(),
        }
    }

    /// Name of the input field this error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidNumber { field, .. }
            | CalcError::NonPositiveValue { field, .. }
            | CalcError::NegativeValue { field, .. }
            | CalcError::OutOfRange { field, .. }
            | CalcError::ResultOverflow { field }
            | CalcError::UnknownOption { field, .. }
            | CalcError::DivisionByZero { field } => Some(field),
            _ => None,
        }
    }

    /// True for errors caused by what the user typed (as opposed to I/O).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidNumber { .. }
                | CalcError::NonPositiveValue { .. }
                | CalcError::NegativeValue { .. }
                | CalcError::OutOfRange { .. }
                | CalcError::ResultOverflow { .. }
                | CalcError::UnknownOption { .. }
                | CalcError::DivisionByZero { .. }
                | CalcError::InvalidFileType { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidNumber { .. } => "INVALID_NUMBER",
            CalcError::NonPositiveValue { .. } => "NON_POSITIVE_VALUE",
            CalcError::NegativeValue { .. } => "NEGATIVE_VALUE",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::ResultOverflow { .. } => "RESULT_OVERFLOW",
            CalcError::UnknownOption { .. } => "UNKNOWN_OPTION",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::InvalidFileType { .. } => "INVALID_FILE_TYPE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
