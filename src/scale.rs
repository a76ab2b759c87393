//! Mapping of a score onto the visual gauge.

/// Score shown at the left end of the gauge.
pub const SCALE_MIN: f64 = 10.0;
/// Score shown at the right end of the gauge.
pub const SCALE_MAX: f64 = 40.0;

/// Position of `score` on the gauge as a percentage in `[0, 100]`.
///
/// Scores are clamped to `[SCALE_MIN, SCALE_MAX]` first. NaN maps to 0.
pub fn scale_position(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    let clamped = score.clamp(SCALE_MIN, SCALE_MAX);
    (clamped - SCALE_MIN) / (SCALE_MAX - SCALE_MIN) * 100.0
}

/// Cell index of the marker on a gauge `width` cells wide.
pub fn marker_index(score: f64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let last = (width - 1) as f64;
    (scale_position(score) / 100.0 * last).round() as usize
}
