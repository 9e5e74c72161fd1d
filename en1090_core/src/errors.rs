//! # Error Types
//!
//! Structured error types for en1090_core. The calculation surface of this
//! crate is small and total: once a `Perforation` exists, every query on it
//! succeeds, so the only failure point is constructing one with a
//! non-positive diameter.
//!
//! ## Example
//!
//! ```rust
//! use en1090_core::errors::{CalcError, CalcResult};
//!
//! fn validate_diameter(d_nom_mm: f64) -> CalcResult<()> {
//!     if d_nom_mm <= 0.0 {
//!         return Err(CalcError::invalid_diameter(
//!             d_nom_mm,
//!             "nominal diameter must be greater than zero",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for en1090_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for clearance calculations.
///
/// Serializes with a `type` tag so callers can dispatch on the error kind
/// without parsing the message text.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The bolt/pin nominal diameter is not strictly positive
    #[error("Invalid diameter: {value} mm - {reason}")]
    InvalidDiameter { value: f64, reason: String },
}

impl CalcError {
    /// Create an InvalidDiameter error
    pub fn invalid_diameter(value: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidDiameter {
            value,
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidDiameter { .. } => "INVALID_DIAMETER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_diameter(-5.0, "nominal diameter must be greater than zero");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_code() {
        assert_eq!(
            CalcError::invalid_diameter(0.0, "zero").error_code(),
            "INVALID_DIAMETER"
        );
    }

    #[test]
    fn test_error_message() {
        let error = CalcError::invalid_diameter(0.0, "nominal diameter must be greater than zero");
        let message = error.to_string();
        assert!(message.contains("0 mm"));
        assert!(message.contains("greater than zero"));
    }
}
