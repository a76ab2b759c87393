//! Core domain types for the body-mass form.
//!
//! Everything here is plain data: the two measured fields, the four
//! classification bands, and the result produced by a successful evaluation.

pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use errors::{ComputationError, ConfigError, ValidationError, ValidationErrorKind};

/// A user-editable input field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Height,
    Weight,
}

impl Field {
    /// Both fields in form order.
    pub const ALL: [Field; 2] = [Field::Height, Field::Weight];

    /// Capitalized label used at the start of a message ("Height").
    pub fn label(&self) -> &'static str {
        match self {
            Field::Height => "Height",
            Field::Weight => "Weight",
        }
    }

    /// Lowercase name used inside a sentence ("height").
    pub fn name(&self) -> &'static str {
        match self {
            Field::Height => "height",
            Field::Weight => "weight",
        }
    }

    /// Unit the field is entered in.
    pub fn unit(&self) -> &'static str {
        match self {
            Field::Height => "cm",
            Field::Weight => "kg",
        }
    }

    /// The other field, used for focus cycling.
    pub fn other(&self) -> Field {
        match self {
            Field::Height => Field::Weight,
            Field::Weight => Field::Height,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a validation message is attached: a field, or the form as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorTarget {
    Field(Field),
    General,
}

/// Classification band for a score.
///
/// Bands are ordered low to high and cover `(0, +inf)` without overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Lower bound of the Normal band.
pub const NORMAL_MIN: f64 = 18.5;
/// Lower bound of the Overweight band.
pub const OVERWEIGHT_MIN: f64 = 25.0;
/// Lower bound of the Obese band.
pub const OBESE_MIN: f64 = 30.0;

impl Category {
    /// All bands, lowest first.
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    /// Classify a score. Upper bounds are strict except for the last band.
    pub fn from_score(score: f64) -> Self {
        if score < NORMAL_MIN {
            Category::Underweight
        } else if score < OVERWEIGHT_MIN {
            Category::Normal
        } else if score < OBESE_MIN {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }

    /// Numeric range of the band as shown in the legend.
    pub fn range_label(&self) -> &'static str {
        match self {
            Category::Underweight => "< 18.5",
            Category::Normal => "18.5 - 24.9",
            Category::Overweight => "25 - 29.9",
            Category::Obese => ">= 30",
        }
    }

    /// Half-open score interval `[lower, upper)` of the band.
    ///
    /// `None` means unbounded on that side.
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            Category::Underweight => (None, Some(NORMAL_MIN)),
            Category::Normal => (Some(NORMAL_MIN), Some(OVERWEIGHT_MIN)),
            Category::Overweight => (Some(OVERWEIGHT_MIN), Some(OBESE_MIN)),
            Category::Obese => (Some(OBESE_MIN), None),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw, untrusted text as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub height_text: String,
    pub weight_text: String,
}

impl RawInput {
    pub fn new(height_text: impl Into<String>, weight_text: impl Into<String>) -> Self {
        Self {
            height_text: height_text.into(),
            weight_text: weight_text.into(),
        }
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Height => &self.height_text,
            Field::Weight => &self.weight_text,
        }
    }

    pub fn text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Height => &mut self.height_text,
            Field::Weight => &mut self.weight_text,
        }
    }
}

/// Outcome of a successful evaluation.
///
/// Two results are equal when they show the same score and band; the raw
/// score and inputs are carried along for display only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Score rounded to one decimal place, for display.
    pub score: f64,
    /// Band chosen from the unrounded score.
    pub category: Category,
    /// Score before rounding.
    pub raw_score: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl PartialEq for EvaluationResult {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.category == other.category
    }
}
