//! Form state: raw input, surfaced errors and the last result.
//!
//! The controller moves from `Pristine` to `Submitted` on the first submit,
//! whatever its outcome, and never goes back. While pristine, edits only
//! change the text. Once submitted, every edit re-validates the edited field.
//!
//! A failed submit never clears an earlier result: the last good result stays
//! on screen next to the errors. The general error only ever describes the
//! latest submit.

use tracing::debug;

use crate::config::BoundsConfig;
use crate::core::{
    ComputationError, ErrorTarget, EvaluationResult, Field, RawInput, ValidationError,
};
use crate::evaluator::evaluate;
use crate::validation::FieldValidator;

/// Whether the form has been submitted at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionMode {
    #[default]
    Pristine,
    Submitted,
}

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Both fields valid; the result was replaced.
    Evaluated(EvaluationResult),
    /// At least one field invalid; nothing was computed.
    Rejected,
    /// Fields valid but the computation failed.
    Failed(ComputationError),
}

/// Errors currently held by the form, one slot per target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub height: Option<ValidationError>,
    pub weight: Option<ValidationError>,
    pub general: Option<ValidationError>,
}

impl FormErrors {
    pub fn get(&self, target: ErrorTarget) -> Option<&ValidationError> {
        match target {
            ErrorTarget::Field(Field::Height) => self.height.as_ref(),
            ErrorTarget::Field(Field::Weight) => self.weight.as_ref(),
            ErrorTarget::General => self.general.as_ref(),
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<ValidationError> {
        match field {
            Field::Height => &mut self.height,
            Field::Weight => &mut self.weight,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.height.is_none() && self.weight.is_none() && self.general.is_none()
    }

    /// Errors in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        [&self.height, &self.weight, &self.general]
            .into_iter()
            .filter_map(Option::as_ref)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Holds the form's input, errors and last result.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    validator: FieldValidator,
    input: RawInput,
    mode: SubmissionMode,
    errors: FormErrors,
    result: Option<EvaluationResult>,
}

impl FormController {
    pub fn new(bounds: BoundsConfig) -> Self {
        Self {
            validator: FieldValidator::new(bounds),
            ..Self::default()
        }
    }

    pub fn mode(&self) -> SubmissionMode {
        self.mode
    }

    pub fn text(&self, field: Field) -> &str {
        self.input.text(field)
    }

    pub fn result(&self) -> Option<&EvaluationResult> {
        self.result.as_ref()
    }

    /// Errors to show. Always empty before the first submit.
    pub fn visible_errors(&self) -> Option<&FormErrors> {
        match self.mode {
            SubmissionMode::Pristine => None,
            SubmissionMode::Submitted => Some(&self.errors),
        }
    }

    /// Error to show for one target, if any.
    pub fn visible_error(&self, target: ErrorTarget) -> Option<&ValidationError> {
        self.visible_errors().and_then(|errors| errors.get(target))
    }

    /// Replace the text of a field.
    pub fn set_text(&mut self, field: Field, text: impl Into<String>) {
        *self.input.text_mut(field) = text.into();
        self.after_edit(field);
    }

    /// Append a character to a field.
    pub fn push_char(&mut self, field: Field, c: char) {
        self.input.text_mut(field).push(c);
        self.after_edit(field);
    }

    /// Remove the last character of a field.
    pub fn pop_char(&mut self, field: Field) {
        if self.input.text_mut(field).pop().is_some() {
            self.after_edit(field);
        }
    }

    fn after_edit(&mut self, field: Field) {
        if self.mode == SubmissionMode::Submitted {
            *self.errors.slot(field) = self.validator.validate(field, self.input.text(field));
        }
    }

    /// Validate both fields and, if they pass, evaluate.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.mode == SubmissionMode::Pristine {
            debug!("first submission; errors are now surfaced live");
            self.mode = SubmissionMode::Submitted;
        }

        let height = self.validator.parse(Field::Height, &self.input.height_text);
        let weight = self.validator.parse(Field::Weight, &self.input.weight_text);

        let (height_cm, weight_kg) = match (height, weight) {
            (Ok(h), Ok(w)) => (h, w),
            (h, w) => {
                self.errors.height = h.err();
                self.errors.weight = w.err();
                // a computation error describes inputs that are gone now
                self.errors.general = None;
                debug!(
                    height_error = self.errors.height.is_some(),
                    weight_error = self.errors.weight.is_some(),
                    "submission rejected"
                );
                return SubmitOutcome::Rejected;
            }
        };

        match evaluate(height_cm, weight_kg) {
            Ok(result) => {
                debug!(score = result.score, category = %result.category, "evaluated");
                self.errors.clear();
                self.result = Some(result);
                SubmitOutcome::Evaluated(result)
            }
            Err(err) => {
                debug!(error = %err, "computation failed");
                self.errors.height = None;
                self.errors.weight = None;
                self.errors.general = Some(err.into());
                SubmitOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldBounds;
    use crate::core::{Category, ValidationErrorKind};

    fn filled(height: &str, weight: &str) -> FormController {
        let mut form = FormController::default();
        form.set_text(Field::Height, height);
        form.set_text(Field::Weight, weight);
        form
    }

    #[test]
    fn test_pristine_edits_surface_nothing() {
        let mut form = FormController::default();
        form.set_text(Field::Height, "abc");
        assert_eq!(form.mode(), SubmissionMode::Pristine);
        assert!(form.visible_errors().is_none());
        assert!(form
            .visible_error(ErrorTarget::Field(Field::Height))
            .is_none());
    }

    #[test]
    fn test_first_submit_moves_to_submitted_even_on_failure() {
        let mut form = FormController::default();
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert_eq!(form.mode(), SubmissionMode::Submitted);

        let errors = form.visible_errors().unwrap();
        assert_eq!(errors.height.as_ref().unwrap().message, "Height is required");
        assert_eq!(errors.weight.as_ref().unwrap().message, "Weight is required");
        assert!(form.result().is_none());
    }

    #[test]
    fn test_live_revalidation_after_submit() {
        let mut form = filled("", "70");
        form.submit();
        assert!(form.visible_error(ErrorTarget::Field(Field::Height)).is_some());

        form.push_char(Field::Height, '1');
        let err = form
            .visible_error(ErrorTarget::Field(Field::Height))
            .unwrap();
        assert_eq!(err.kind, ValidationErrorKind::BelowMinimum);

        form.push_char(Field::Height, '7');
        form.push_char(Field::Height, '0');
        assert!(form
            .visible_error(ErrorTarget::Field(Field::Height))
            .is_none());
        // live edits never compute
        assert!(form.result().is_none());
    }

    #[test]
    fn test_live_edit_only_touches_edited_field() {
        let mut form = filled("", "");
        form.submit();
        form.set_text(Field::Height, "170");
        assert!(form.visible_error(ErrorTarget::Field(Field::Height)).is_none());
        assert!(form.visible_error(ErrorTarget::Field(Field::Weight)).is_some());
    }

    #[test]
    fn test_successful_submit_clears_errors() {
        let mut form = filled("170", "");
        form.submit();
        form.set_text(Field::Weight, "70");
        let outcome = form.submit();

        let result = match outcome {
            SubmitOutcome::Evaluated(result) => result,
            other => panic!("expected evaluation, got {other:?}"),
        };
        assert_eq!(result.score, 24.2);
        assert_eq!(result.category, Category::Normal);
        assert!(form.visible_errors().unwrap().is_empty());
    }

    #[test]
    fn test_failed_submit_retains_previous_result() {
        let mut form = filled("170", "70");
        form.submit();
        let before = *form.result().unwrap();

        form.set_text(Field::Weight, "-5");
        assert_eq!(form.submit(), SubmitOutcome::Rejected);

        assert_eq!(form.result(), Some(&before));
        assert_eq!(form.result().unwrap().score, 24.2);
        assert_eq!(form.result().unwrap().category, Category::Normal);
        assert_eq!(
            form.visible_error(ErrorTarget::Field(Field::Weight))
                .unwrap()
                .message,
            "Please enter a valid weight"
        );
    }

    #[test]
    fn test_new_result_replaces_old() {
        let mut form = filled("170", "70");
        form.submit();
        form.set_text(Field::Weight, "100");
        form.submit();
        assert_eq!(form.result().unwrap().category, Category::Obese);
    }

    #[test]
    fn test_computation_failure_sets_general_error() {
        // Bounds permitting values the formula cannot handle reach the
        // defensive path.
        let bounds = BoundsConfig {
            height: FieldBounds::new(f64::MIN_POSITIVE, 250.0),
            weight: FieldBounds::new(1.0, f64::MAX),
        };
        let mut form = FormController::new(bounds);
        form.set_text(Field::Height, "170");
        form.set_text(Field::Weight, "70");
        form.submit();
        let before = *form.result().unwrap();

        form.set_text(Field::Height, "1e-300");
        form.set_text(Field::Weight, "1e300");
        assert!(matches!(form.submit(), SubmitOutcome::Failed(_)));

        assert_eq!(form.result(), Some(&before));
        let general = form.visible_error(ErrorTarget::General).unwrap();
        assert_eq!(general.kind, ValidationErrorKind::Computation);

        form.set_text(Field::Height, "170");
        form.set_text(Field::Weight, "70");
        form.submit();
        assert!(form.visible_error(ErrorTarget::General).is_none());
    }

    #[test]
    fn test_rejected_submit_drops_stale_general_error() {
        let bounds = BoundsConfig {
            height: FieldBounds::new(f64::MIN_POSITIVE, 250.0),
            weight: FieldBounds::new(1.0, f64::MAX),
        };
        let mut form = FormController::new(bounds);
        form.set_text(Field::Height, "1e-300");
        form.set_text(Field::Weight, "1e300");
        assert!(matches!(form.submit(), SubmitOutcome::Failed(_)));
        assert!(form.visible_error(ErrorTarget::General).is_some());

        form.set_text(Field::Weight, "");
        assert_eq!(form.submit(), SubmitOutcome::Rejected);

        assert!(form.visible_error(ErrorTarget::General).is_none());
        assert_eq!(
            form.visible_error(ErrorTarget::Field(Field::Weight))
                .unwrap()
                .kind,
            ValidationErrorKind::Required
        );
        assert!(form.result().is_none());
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut form = FormController::default();
        form.submit();
        form.pop_char(Field::Height);
        assert_eq!(form.text(Field::Height), "");
        assert_eq!(
            form.visible_error(ErrorTarget::Field(Field::Height))
                .unwrap()
                .kind,
            ValidationErrorKind::Required
        );
    }

    #[test]
    fn test_errors_iter_order() {
        let mut form = FormController::default();
        form.submit();
        let messages: Vec<_> = form
            .visible_errors()
            .unwrap()
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(messages, vec!["Height is required", "Weight is required"]);
    }
}
