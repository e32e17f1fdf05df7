//! Parabolas opening along the image `y` axis, sampled with `x = t`.

use crate::shape::{Point2, Shape};

/// `y = a t^2 + b t + c`, parameters `[a, b, c]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardFormParabola;

impl StandardFormParabola {
    pub const INDEX_A: usize = 0;
    pub const INDEX_B: usize = 1;
    pub const INDEX_C: usize = 2;
    pub const PARAM_NAMES: [&'static str; 3] = ["a", "b", "c"];
}

impl Shape for StandardFormParabola {
    fn param_names(&self) -> Vec<&'static str> {
        Self::PARAM_NAMES.to_vec()
    }

    fn calculate(&self, t: f64, params: &[f64]) -> (Point2, bool) {
        let a = params[Self::INDEX_A];
        let b = params[Self::INDEX_B];
        let c = params[Self::INDEX_C];
        (Point2::new(t, a * t * t + b * t + c), true)
    }

    /// The vertex. Degenerates to non-finite coordinates when `a == 0`.
    fn fixed_point(&self, params: &[f64]) -> Point2 {
        let a = params[Self::INDEX_A];
        let b = params[Self::INDEX_B];
        self.calculate(-b / (2.0 * a), params).0
    }
}

/// `y = a (t - h)^2 + k`, parameters `[a, h, k]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct VertexFormParabola;

impl VertexFormParabola {
    pub const INDEX_A: usize = 0;
    pub const INDEX_H: usize = 1;
    pub const INDEX_K: usize = 2;
    pub const PARAM_NAMES: [&'static str; 3] = ["a", "h", "k"];
}

impl Shape for VertexFormParabola {
    fn param_names(&self) -> Vec<&'static str> {
        Self::PARAM_NAMES.to_vec()
    }

    fn calculate(&self, t: f64, params: &[f64]) -> (Point2, bool) {
        let a = params[Self::INDEX_A];
        let h = params[Self::INDEX_H];
        let k = params[Self::INDEX_K];
        let d = t - h;
        (Point2::new(t, a * d * d + k), true)
    }

    fn fixed_point(&self, params: &[f64]) -> Point2 {
        Point2::new(params[Self::INDEX_H], params[Self::INDEX_K])
    }
}
