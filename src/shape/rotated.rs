//! Rotation decorator: adds an angle parameter to any shape by composition.

use crate::shape::{Point2, Shape};
use crate::util::math::rotate_about;
use crate::util::{HoughError, HoughResult};

/// Rotates a borrowed shape about its fixed point.
///
/// The angle is read from `params[theta_index]` in radians; positive angles
/// turn `+x` toward `+y`. The wrapped shape sees the full parameter vector
/// and ignores the extra slot.
pub struct RotatedShape<'a, S: ?Sized> {
    inner: &'a S,
    theta_index: usize,
}

impl<S: ?Sized> Clone for RotatedShape<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for RotatedShape<'_, S> {}

impl<'a, S: Shape + ?Sized> RotatedShape<'a, S> {
    /// Wraps `inner`; `theta_index` must lie past the wrapped shape's parameters.
    pub fn new(inner: &'a S, theta_index: usize) -> HoughResult<Self> {
        let arity = inner.arity();
        if theta_index < arity {
            return Err(HoughError::InvalidThetaIndex { theta_index, arity });
        }
        Ok(Self { inner, theta_index })
    }

    /// Wraps `inner` with the angle appended right after its parameters.
    pub fn appended(inner: &'a S) -> Self {
        Self {
            theta_index: inner.arity(),
            inner,
        }
    }

    pub fn theta_index(&self) -> usize {
        self.theta_index
    }

    pub fn inner(&self) -> &'a S {
        self.inner
    }
}

impl<S: Shape + ?Sized> Shape for RotatedShape<'_, S> {
    /// Wrapped layout, padded with `""` up to the angle, then `"theta"`.
    fn param_names(&self) -> Vec<&'static str> {
        let mut names = self.inner.param_names();
        names.resize(self.theta_index, "");
        names.push("theta");
        names
    }

    fn calculate(&self, t: f64, params: &[f64]) -> (Point2, bool) {
        let (p, in_range) = self.inner.calculate(t, params);
        let theta = params[self.theta_index];
        if theta == 0.0 {
            return (p, in_range);
        }
        let center = self.inner.fixed_point(params);
        let (x, y) = rotate_about(p.x, p.y, center.x, center.y, theta);
        (Point2::new(x, y), in_range)
    }

    fn fixed_point(&self, params: &[f64]) -> Point2 {
        self.inner.fixed_point(params)
    }
}
