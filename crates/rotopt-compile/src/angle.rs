//! Degree-valued angle helpers shared by the decomposer and the rewriter.

/// Tolerance for angle comparisons, in degrees.
pub const ANGLE_EPSILON: f64 = 1e-9;

/// Normalize an angle in degrees into `(-180, 180]`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    if a > 180.0 { a - 360.0 } else { a }
}

/// Check if `angle` is a whole number of turns.
///
/// `0.5` is not zero; only values within [`ANGLE_EPSILON`] of a multiple of
/// 360 are.
#[inline]
pub fn is_zero_angle(angle: f64) -> bool {
    let a = angle.rem_euclid(360.0);
    a < ANGLE_EPSILON || 360.0 - a < ANGLE_EPSILON
}

/// Check if `angle` equals `target` within [`ANGLE_EPSILON`], without
/// reducing modulo 360.
#[inline]
pub fn angle_is(angle: f64, target: f64) -> bool {
    (angle - target).abs() < ANGLE_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(270.0), -90.0);
        assert_eq!(normalize_degrees(-450.0), -90.0);
        assert_eq!(normalize_degrees(720.5), 0.5);
    }

    #[test]
    fn test_zero_angle() {
        assert!(is_zero_angle(0.0));
        assert!(is_zero_angle(360.0));
        assert!(is_zero_angle(-720.0));
        assert!(is_zero_angle(360.0 - 1e-12));
        assert!(!is_zero_angle(0.5));
        assert!(!is_zero_angle(-0.5));
        assert!(!is_zero_angle(359.5));
    }

    #[test]
    fn test_angle_is_exact_value() {
        assert!(angle_is(180.0, 180.0));
        assert!(!angle_is(-180.0, 180.0));
        assert!(!angle_is(180.5, 180.0));
    }
}
