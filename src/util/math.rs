//! Numeric helpers shared by shapes and the voting loop.

/// Returns true if `value` can be rounded into an `i32` without overflow.
///
/// NaN fails both comparisons and is rejected.
#[inline]
pub(crate) fn is_inside_int_limits(value: f64) -> bool {
    value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX)
}

/// Rotates `(x, y)` by `theta` radians about `(cx, cy)`.
#[inline]
pub(crate) fn rotate_about(x: f64, y: f64, cx: f64, cy: f64, theta: f64) -> (f64, f64) {
    let dx = x - cx;
    let dy = y - cy;
    let (sin_t, cos_t) = theta.sin_cos();
    (dx * cos_t - dy * sin_t + cx, dx * sin_t + dy * cos_t + cy)
}

#[cfg(test)]
mod tests {
    use super::{is_inside_int_limits, rotate_about};

    #[test]
    fn int_limits_reject_nan_and_overflow() {
        assert!(is_inside_int_limits(0.0));
        assert!(is_inside_int_limits(-2_147_483_648.0));
        assert!(is_inside_int_limits(2_147_483_647.0));
        assert!(!is_inside_int_limits(2_147_483_648.0));
        assert!(!is_inside_int_limits(f64::NAN));
        assert!(!is_inside_int_limits(f64::NEG_INFINITY));
    }

    #[test]
    fn rotate_about_quarter_turn() {
        let (x, y) = rotate_about(2.0, 1.0, 1.0, 1.0, std::f64::consts::FRAC_PI_2);
        assert!((x - 1.0).abs() < 1e-12);
        assert!((y - 2.0).abs() < 1e-12);
    }
}
