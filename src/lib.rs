// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod evaluator;
pub mod form;
pub mod formatting;
pub mod observability;
pub mod output;
pub mod scale;
pub mod tui;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    Category, ComputationError, ConfigError, ErrorTarget, EvaluationResult, Field, RawInput,
    ValidationError, ValidationErrorKind,
};

pub use crate::config::{BodyscaleConfig, BoundsConfig, DisplayConfig, FieldBounds};
pub use crate::evaluator::evaluate;
pub use crate::form::{FormController, FormErrors, SubmissionMode, SubmitOutcome};
pub use crate::scale::scale_position;
pub use crate::validation::{validate, FieldValidator};
