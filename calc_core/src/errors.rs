//! # Error Types
//!
//! Structured error types for calc_core. Each variant carries enough context
//! for a caller (HTTP layer, CLI, or an LLM tool) to explain the failure or
//! map it onto its own error representation without parsing strings.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_length",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Calculations never return partial results: a call either succeeds fully
/// or fails with exactly one of these variants.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Conductor family is not one of CA, CAA, ACSR
    #[error("Unknown conductor family: '{family}' (expected CA, CAA or ACSR)")]
    UnknownConductorFamily { family: String },

    /// Cross-section lies outside the tabulated envelope for the family
    #[error(
        "Cross-section {cross_section_mm2} mm² out of range for {family} ({min_mm2}-{max_mm2} mm²)"
    )]
    CrossSectionOutOfRange {
        family: String,
        cross_section_mm2: f64,
        min_mm2: f64,
        max_mm2: f64,
    },

    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an UnknownConductorFamily error
    pub fn unknown_conductor_family(family: impl Into<String>) -> Self {
        CalcError::UnknownConductorFamily {
            family: family.into(),
        }
    }

    /// Create a CrossSectionOutOfRange error
    pub fn cross_section_out_of_range(
        family: impl Into<String>,
        cross_section_mm2: f64,
        min_mm2: f64,
        max_mm2: f64,
    ) -> Self {
        CalcError::CrossSectionOutOfRange {
            family: family.into(),
            cross_section_mm2,
            min_mm2,
            max_mm2,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownConductorFamily { .. } => "UNKNOWN_CONDUCTOR_FAMILY",
            CalcError::CrossSectionOutOfRange { .. } => "CROSS_SECTION_OUT_OF_RANGE",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Reject NaN/infinite values and values not strictly greater than zero.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a finite value greater than zero",
        ));
    }
    Ok(())
}
