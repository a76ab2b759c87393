//! Field validation: raw text to a bounded, positive number.
//!
//! Rules are checked in order and the first failure wins:
//!
//! 1. empty or whitespace-only text is *required*
//! 2. text that is not a finite number, or is `<= 0`, is *invalid*
//! 3. a number outside the field's inclusive bounds is a *bound error*
//!
//! Everything here is pure.

use crate::config::{BoundsConfig, FieldBounds};
use crate::core::{Field, ValidationError, ValidationErrorKind};

/// Validates field text against a set of bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldValidator {
    bounds: BoundsConfig,
}

impl FieldValidator {
    pub fn new(bounds: BoundsConfig) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self, field: Field) -> FieldBounds {
        self.bounds.for_field(field)
    }

    /// Validate `text` for `field`, returning the first failing rule.
    pub fn validate(&self, field: Field, text: &str) -> Option<ValidationError> {
        self.parse(field, text).err()
    }

    /// Validate and return the parsed value.
    pub fn parse(&self, field: Field, text: &str) -> Result<f64, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(required(field));
        }

        let value = parse_positive_finite(trimmed).ok_or_else(|| invalid(field))?;
        check_bounds(field, value, self.bounds(field))?;
        Ok(value)
    }
}

/// Validate with the default bounds.
pub fn validate(field: Field, text: &str) -> Option<ValidationError> {
    FieldValidator::default().validate(field, text)
}

fn parse_positive_finite(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

fn check_bounds(field: Field, value: f64, bounds: FieldBounds) -> Result<(), ValidationError> {
    if value < bounds.min {
        Err(ValidationError::field(
            field,
            ValidationErrorKind::BelowMinimum,
            format!(
                "{} must be at least {} {}",
                field.label(),
                bounds.min,
                field.unit()
            ),
        ))
    } else if value > bounds.max {
        Err(ValidationError::field(
            field,
            ValidationErrorKind::AboveMaximum,
            format!(
                "{} must be at most {} {}",
                field.label(),
                bounds.max,
                field.unit()
            ),
        ))
    } else {
        Ok(())
    }
}

fn required(field: Field) -> ValidationError {
    ValidationError::field(
        field,
        ValidationErrorKind::Required,
        format!("{} is required", field.label()),
    )
}

fn invalid(field: Field) -> ValidationError {
    ValidationError::field(
        field,
        ValidationErrorKind::Invalid,
        format!("Please enter a valid {}", field.name()),
    )
}
