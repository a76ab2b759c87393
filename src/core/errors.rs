//! Error types for the form and its configuration

use super::{ErrorTarget, Field};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Empty or whitespace-only text
    Required,
    /// Not a finite number, or not positive
    Invalid,
    /// Below the field's physical minimum
    BelowMinimum,
    /// Above the field's physical maximum
    AboveMaximum,
    /// The evaluation itself failed; attached to the general target
    Computation,
}

/// A user-facing validation message attached to a field or to the form.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub target: ErrorTarget,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn field(field: Field, kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            target: ErrorTarget::Field(field),
            kind,
            message: message.into(),
        }
    }

    pub fn general(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            target: ErrorTarget::General,
            kind,
            message: message.into(),
        }
    }

    /// Whether this is a bound error (value outside the allowed range).
    pub fn is_bound_error(&self) -> bool {
        matches!(
            self.kind,
            ValidationErrorKind::BelowMinimum | ValidationErrorKind::AboveMaximum
        )
    }
}

/// Evaluation failure. Only reachable when validation bounds were bypassed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ComputationError {
    #[error("Unable to calculate a score from height {height_cm} cm and weight {weight_kg} kg")]
    NonFinite { height_cm: f64, weight_kg: f64 },
}

impl From<ComputationError> for ValidationError {
    fn from(err: ComputationError) -> Self {
        ValidationError::general(ValidationErrorKind::Computation, err.to_string())
    }
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {field} bounds: {reason}")]
    InvalidBounds { field: Field, reason: String },

    #[error("Configuration file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computation_error_becomes_general() {
        let err: ValidationError = ComputationError::NonFinite {
            height_cm: 0.0,
            weight_kg: 70.0,
        }
        .into();
        assert_eq!(err.target, ErrorTarget::General);
        assert_eq!(err.kind, ValidationErrorKind::Computation);
        assert!(err.message.contains("Unable to calculate"));
    }

    #[test]
    fn test_bound_error_classification() {
        let low = ValidationError::field(Field::Height, ValidationErrorKind::BelowMinimum, "x");
        let req = ValidationError::field(Field::Height, ValidationErrorKind::Required, "x");
        assert!(low.is_bound_error());
        assert!(!req.is_bound_error());
    }

    #[test]
    fn test_display_is_message() {
        let err = ValidationError::field(
            Field::Weight,
            ValidationErrorKind::Required,
            "Weight is required",
        );
        assert_eq!(err.to_string(), "Weight is required");
    }
}
