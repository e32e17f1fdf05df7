//! Builders for 1-D parameter sequences.
//!
//! Prefer [`scaled_incremental`] over [`incremental`] when the exact number of
//! samples matters: integer stepping is exact, repeated float addition is not.

use crate::image::SampleImage;
use crate::util::{HoughError, HoughResult};

/// `min, min + step, ...` while the running value is `<= max`.
///
/// The running value is built by repeated addition, so drift can drop the
/// endpoint: `incremental(0.0, 1.0, 0.3)` yields `[0, 0.3, 0.6, 0.9]` and
/// `incremental(0.0, 0.3, 0.1)` stops at `0.2`.
pub fn incremental(min: f64, max: f64, step: f64) -> HoughResult<Vec<f64>> {
    if !min.is_finite() || !max.is_finite() || !step.is_finite() {
        return Err(HoughError::InvalidRange {
            reason: "non-finite range parameters",
        });
    }
    if step <= 0.0 {
        return Err(HoughError::InvalidRange {
            reason: "step must be > 0",
        });
    }
    let mut values = Vec::new();
    let mut x = min;
    while x <= max {
        values.push(x);
        x += step;
    }
    Ok(values)
}

/// Exactly `count` integers `min, min + step, ...`.
///
/// Fails with [`HoughError::InvalidRange`] when a value does not fit in `i64`.
pub fn steps(min: i64, step: i64, count: usize) -> HoughResult<Vec<i64>> {
    (0..count)
        .map(|i| {
            i64::try_from(i)
                .ok()
                .and_then(|i| step.checked_mul(i))
                .and_then(|offset| min.checked_add(offset))
                .ok_or(HoughError::InvalidRange {
                    reason: "integer steps overflow i64",
                })
        })
        .collect()
}

/// Multiplies each integer by `scalar`.
pub fn scaled(values: &[i64], scalar: f64) -> Vec<f64> {
    values.iter().map(|&v| v as f64 * scalar).collect()
}

/// `scaled(steps(min, step, count), scalar)`.
pub fn scaled_incremental(
    min: i64,
    step: i64,
    count: usize,
    scalar: f64,
) -> HoughResult<Vec<f64>> {
    Ok(scaled(&steps(min, step, count)?, scalar))
}

/// Integer-degree grid converted to radians, for rotation axes.
pub fn angles_deg(min_deg: i64, step_deg: i64, count: usize) -> HoughResult<Vec<f64>> {
    scaled_incremental(min_deg, step_deg, count, std::f64::consts::PI / 180.0)
}

/// `0, 1, ..., width - 1`.
pub fn range_from_width(width: usize) -> Vec<f64> {
    (0..width).map(|x| x as f64).collect()
}

/// One sample per image column; the default curve domain.
pub fn range_from_image<I: SampleImage + ?Sized>(image: &I) -> Vec<f64> {
    range_from_width(image.width())
}
