use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Field};

/// Inclusive physical range accepted for one field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Height in centimeters.
    pub const fn height_defaults() -> Self {
        Self::new(50.0, 250.0)
    }

    /// Weight in kilograms.
    pub const fn weight_defaults() -> Self {
        Self::new(20.0, 500.0)
    }

    /// Check `0 < min < max` with both ends finite.
    pub fn validate(&self, field: Field) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBounds { field, reason };

        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(invalid("bounds must be finite numbers".into()));
        }
        if self.min <= 0.0 {
            return Err(invalid(format!("min must be positive, got {}", self.min)));
        }
        if self.min >= self.max {
            return Err(invalid(format!(
                "min ({}) must be less than max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Bounds for both fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsConfig {
    #[serde(default = "default_height")]
    pub height: FieldBounds,

    #[serde(default = "default_weight")]
    pub weight: FieldBounds,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            weight: default_weight(),
        }
    }
}

impl BoundsConfig {
    pub fn for_field(&self, field: Field) -> FieldBounds {
        match field {
            Field::Height => self.height,
            Field::Weight => self.weight,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.height.validate(Field::Height)?;
        self.weight.validate(Field::Weight)
    }
}

fn default_height() -> FieldBounds {
    FieldBounds::height_defaults()
}
fn default_weight() -> FieldBounds {
    FieldBounds::weight_defaults()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(BoundsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = FieldBounds::new(300.0, 100.0)
            .validate(Field::Height)
            .unwrap_err();
        assert!(err.to_string().contains("must be less than max"));
    }

    #[test]
    fn test_rejects_non_positive_min() {
        assert!(FieldBounds::new(0.0, 100.0).validate(Field::Weight).is_err());
        assert!(FieldBounds::new(-5.0, 100.0).validate(Field::Weight).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(FieldBounds::new(10.0, f64::INFINITY)
            .validate(Field::Weight)
            .is_err());
    }
}
