//! Error types for the calculator library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all calculator operations.
///
/// Only configuration and parsing failures ever reach a caller.
/// [`CalculatorError::InvalidResult`] is produced inside the engine and
/// converted into the error token on the display, so
/// [`crate::Calculator::dispatch`] itself never fails.
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// A computation produced an infinite or not-a-number value
    #[error("Invalid result for {operation}")]
    InvalidResult { operation: String },
    /// Input symbol that is not part of the keypad
    #[error("Unknown token '{token}'")]
    UnknownToken { token: String },
    /// Display text that does not hold a number
    #[error("Display text '{text}' is not a number")]
    InvalidNumber { text: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CalculatorError {
        CalculatorError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CalculatorError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invalid result error for the named operation.
    pub fn invalid_result(operation: impl Into<String>) -> Self {
        Self::InvalidResult {
            operation: operation.into(),
        }
    }

    /// Returns true when this error is the calculator's single user-visible
    /// error kind.
    pub fn is_invalid_result(&self) -> bool {
        matches!(self, Self::InvalidResult { .. })
    }
}

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = CalculatorError::invalid_input("error_token").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'error_token': must not be empty"
        );
    }

    #[test]
    fn test_invalid_result_kind() {
        let err = CalculatorError::invalid_result("÷");
        assert!(err.is_invalid_result());
        assert_eq!(err.to_string(), "Invalid result for ÷");

        let other = CalculatorError::UnknownToken {
            token: "?".to_string(),
        };
        assert!(!other.is_invalid_result());
    }
}
