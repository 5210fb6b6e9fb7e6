//! Error handling for FloorKit
//!
//! Only a few conditions in the editing engine are surfaced as errors:
//! - Malformed plan documents on import (state is left untouched)
//! - Degenerate geometry when a wall is built below the minimum length
//! - Invalid control values (non-positive scale or grid size)
//! - I/O failures when plans are read from or written to disk
//!
//! Empty query results (no wall near a point, nothing to pick) are modelled
//! as `Option::None`, not as errors.

use thiserror::Error;

/// Plan editing error type
#[derive(Error, Debug)]
pub enum PlanError {
    /// The plan document could not be parsed or failed validation.
    #[error("Malformed plan document: {reason}")]
    MalformedDocument {
        /// Why the document was rejected.
        reason: String,
    },

    /// A wall would be shorter than the minimum wall length.
    #[error("Degenerate wall: length {length:.4} m is not above the minimum of {min:.2} m")]
    DegenerateGeometry {
        /// The measured length of the rejected segment.
        length: f64,
        /// The minimum accepted length.
        min: f64,
    },

    /// A control value is out of its valid range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// The name of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// I/O error while reading or writing plan files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error on export.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlanError {
    /// Creates a `MalformedDocument` error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Creates an `InvalidValue` error.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for errors caused by a rejected import document.
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, Self::MalformedDocument { .. })
    }
}

/// Result type alias for plan operations.
pub type Result<T> = std::result::Result<T, PlanError>;
