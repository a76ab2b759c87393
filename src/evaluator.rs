//! Score computation and classification.
//!
//! The order is fixed: compute the raw score, classify it, then round for
//! display. A raw score of 24.96 is therefore shown as 25.0 but stays Normal.

use crate::core::{Category, ComputationError, EvaluationResult};

/// Compute the score for a height in centimeters and a weight in kilograms.
pub fn evaluate(height_cm: f64, weight_kg: f64) -> Result<EvaluationResult, ComputationError> {
    let raw_score = raw_score(height_cm, weight_kg);
    if !raw_score.is_finite() {
        return Err(ComputationError::NonFinite {
            height_cm,
            weight_kg,
        });
    }

    let category = Category::from_score(raw_score);

    Ok(EvaluationResult {
        score: round_to_tenth(raw_score),
        category,
        raw_score,
        height_cm,
        weight_kg,
    })
}

/// Weight divided by height in meters squared.
pub fn raw_score(height_cm: f64, weight_kg: f64) -> f64 {
    let meters = height_cm / 100.0;
    weight_kg / (meters * meters)
}

/// Round half away from zero at the tenths digit.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_typical_evaluation() {
        let result = evaluate(170.0, 70.0).unwrap();
        assert_eq!(result.score, 24.2);
        assert_eq!(result.category, Category::Normal);
    }

    #[test]
    fn test_just_above_normal_lower_bound() {
        let result = evaluate(170.0, 53.5).unwrap();
        assert!((result.raw_score - 18.512).abs() < 0.001);
        assert_eq!(result.score, 18.5);
        assert_eq!(result.category, Category::Normal);
    }

    #[test]
    fn test_underweight_displayed_at_boundary() {
        // raw ~18.46: displayed as 18.5 but classified on the raw value
        let result = evaluate(170.0, 53.3494).unwrap();
        assert!(result.raw_score < 18.5);
        assert_eq!(result.score, 18.5);
        assert_eq!(result.category, Category::Underweight);
    }

    #[test]
    fn test_normal_upper_region() {
        let result = evaluate(170.0, 71.825).unwrap();
        assert!((result.raw_score - 24.853).abs() < 0.001);
        assert_eq!(result.score, 24.9);
        assert_eq!(result.category, Category::Normal);
    }

    #[test]
    fn test_classifies_before_rounding() {
        // raw ~24.96 rounds to 25.0 for display
        let result = evaluate(170.0, 72.1344).unwrap();
        assert!(result.raw_score < 25.0);
        assert_eq!(result.score, 25.0);
        assert_eq!(result.category, Category::Normal);
    }

    #[test]
    fn test_overweight_and_obese() {
        assert_eq!(evaluate(180.0, 90.0).unwrap().category, Category::Overweight);
        assert_eq!(evaluate(160.0, 100.0).unwrap().category, Category::Obese);
    }

    #[test]
    fn test_zero_height_is_computation_error() {
        assert_eq!(
            evaluate(0.0, 70.0),
            Err(ComputationError::NonFinite {
                height_cm: 0.0,
                weight_kg: 70.0
            })
        );
        assert!(evaluate(170.0, f64::NAN).is_err());
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to_tenth(17.25), 17.3);
        assert_eq!(round_to_tenth(17.24), 17.2);
        assert_eq!(round_to_tenth(-1.25), -1.3);
    }

    proptest! {
        #[test]
        fn prop_score_is_rounded_formula(h in 50.0f64..=250.0, w in 20.0f64..=500.0) {
            let result = evaluate(h, w).unwrap();
            let expected = (w / ((h / 100.0) * (h / 100.0)) * 10.0).round() / 10.0;
            prop_assert_eq!(result.score, expected);
        }

        #[test]
        fn prop_evaluate_is_pure(h in 50.0f64..=250.0, w in 20.0f64..=500.0) {
            let first = evaluate(h, w).unwrap();
            let second = evaluate(h, w).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_category_follows_raw_score(h in 50.0f64..=250.0, w in 20.0f64..=500.0) {
            let result = evaluate(h, w).unwrap();
            prop_assert_eq!(result.category, Category::from_score(result.raw_score));
            prop_assert!((result.score - result.raw_score).abs() <= 0.05 + 1e-9);
        }
    }
}
