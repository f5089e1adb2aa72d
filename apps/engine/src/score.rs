//! Shared scoring primitives: clamping, coverage ratios, and weight-table
//! validation. Every score the engine emits passes through [`clamp_score`]
//! so the documented `[0, 100]` contract holds even if an upstream
//! calculation misbehaves.

use crate::errors::EngineError;

/// Rounds and clamps a raw score into the documented `[0, 100]` range.
pub fn clamp_score(raw: f64) -> u32 {
    raw.round().clamp(0.0, 100.0) as u32
}

/// Clamps an additive integer score that may have gone negative or above cap.
pub fn clamp_points(raw: i32) -> u32 {
    raw.clamp(0, 100) as u32
}

/// Coverage ratio in `[0.0, 1.0]`; an empty group counts as zero coverage.
pub fn ratio(found: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        found as f64 / total as f64
    }
}

/// Validates that a named weight table is a convex combination: every weight
/// in `[0, 1]` and the sum within tolerance of 1.0. Weight tables are
/// compiled-in, so a violation is a programming error — construction aborts.
pub fn validate_weights(name: &str, weights: &[(&str, f64)]) -> Result<(), EngineError> {
    for (part, w) in weights {
        if !(0.0..=1.0).contains(w) {
            return Err(EngineError::Config(format!(
                "{name}: weight for '{part}' is {w}, outside [0, 1]"
            )));
        }
    }
    let sum: f64 = weights.iter().map(|(_, w)| w).sum();
    if (sum - 1.0).abs() > 1e-6 {
        return Err(EngineError::Config(format!(
            "{name}: weights sum to {sum}, expected 1.0"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score_passes_through_valid_range() {
        assert_eq!(clamp_score(0.0), 0);
        assert_eq!(clamp_score(55.4), 55);
        assert_eq!(clamp_score(55.5), 56);
        assert_eq!(clamp_score(100.0), 100);
    }

    #[test]
    fn test_clamp_score_clamps_out_of_range() {
        assert_eq!(clamp_score(-12.0), 0);
        assert_eq!(clamp_score(140.0), 100);
    }

    #[test]
    fn test_clamp_points_floor_and_cap() {
        assert_eq!(clamp_points(-5), 0);
        assert_eq!(clamp_points(105), 100);
        assert_eq!(clamp_points(42), 42);
    }

    #[test]
    fn test_ratio_empty_group_is_zero() {
        assert_eq!(ratio(0, 0), 0.0);
    }

    #[test]
    fn test_ratio_full_coverage_is_one() {
        assert!((ratio(7, 7) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_weights_accepts_convex_combination() {
        let weights = [("a", 0.30), ("b", 0.25), ("c", 0.25), ("d", 0.20)];
        assert!(validate_weights("test", &weights).is_ok());
    }

    #[test]
    fn test_validate_weights_rejects_bad_sum() {
        let weights = [("a", 0.5), ("b", 0.6)];
        let err = validate_weights("test", &weights).unwrap_err();
        assert!(err.to_string().contains("sum"));
    }

    #[test]
    fn test_validate_weights_rejects_negative_weight() {
        let weights = [("a", -0.1), ("b", 1.1)];
        assert!(validate_weights("test", &weights).is_err());
    }
}
