//! Error types for strict value conversions

use thiserror::Error;

use crate::value::JsonType;

/// Errors raised by the strict conversions (`TryFrom`).
///
/// The safe accessors on [`Json`](crate::Json) never fail; they substitute
/// defaults instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    /// The handle holds a different kind of value than requested
    #[error("Type error: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected kind
        expected: JsonType,
        /// Actual kind held by the handle
        got: JsonType,
    },

    /// A double that has no JSON representation (NaN or infinite)
    #[error("Number error: {0} cannot be represented in JSON")]
    NonFiniteNumber(f64),
}

impl JsonError {
    pub(crate) fn mismatch(expected: JsonType, got: JsonType) -> Self {
        JsonError::TypeMismatch { expected, got }
    }
}

/// Result type alias for SimpleJSON conversions
pub type Result<T> = std::result::Result<T, JsonError>;
