//! # Error Types
//!
//! Structured error types for rock_core. The classification engine itself is
//! total and never fails; these errors only come from the edges of the crate,
//! where free-form text (field names, table labels, JSON) is turned into the
//! numeric inputs the engine consumes.
//!
//! ## Example
//!
//! ```rust
//! use rock_core::errors::{CalcError, CalcResult};
//!
//! fn parse_rqd(text: &str) -> CalcResult<f64> {
//!     text.trim().parse::<f64>().map_err(|e| CalcError::InvalidInput {
//!         field: "rqd".to_string(),
//!         value: text.to_string(),
//!         reason: e.to_string(),
//!     })
//! }
//!
//! assert!(parse_rqd("abc").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rock_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for parsing and lookup operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value could not be interpreted
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No entry in a classification table matches the requested label
    #[error("Unknown option '{option}' for table '{table}'")]
    UnknownOption { table: String, option: String },

    /// Input field name not recognised
    #[error("Unknown input field: {field}")]
    UnknownField { field: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownOption error
    pub fn unknown_option(table: impl Into<String>, option: impl Into<String>) -> Self {
        CalcError::UnknownOption {
            table: table.into(),
            option: option.into(),
        }
    }

    /// Create an UnknownField error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        CalcError::UnknownField {
            field: field.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownOption { .. } => "UNKNOWN_OPTION",
            CalcError::UnknownField { .. } => "UNKNOWN_FIELD",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
