//! Parametric curve families that drive the voting loop.
//!
//! A shape maps a curve coordinate `t` and a positional parameter vector to a
//! point in image coordinates. Position `i` of the parameter vector is fed by
//! the `i`-th registered axis; each shape publishes that layout through
//! [`Shape::param_names`] so the engine can reject misaligned registrations.

mod parabola;
mod rotated;

pub use parabola::{StandardFormParabola, VertexFormParabola};
pub use rotated::RotatedShape;

/// A point in image coordinates (`x` = column, `y` = row).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A family of curves indexed by a parameter vector.
pub trait Shape: Sync {
    /// Logical name of each parameter position, in order.
    fn param_names(&self) -> Vec<&'static str>;

    /// Minimum parameter vector length this shape reads.
    fn arity(&self) -> usize {
        self.param_names().len()
    }

    /// Evaluates the curve at `t`.
    ///
    /// Returns the point and whether `t` lies inside the curve's domain;
    /// out-of-domain points do not vote.
    fn calculate(&self, t: f64, params: &[f64]) -> (Point2, bool);

    /// Reference point independent of `t`, used as the rotation center.
    fn fixed_point(&self, _params: &[f64]) -> Point2 {
        Point2::ORIGIN
    }
}

impl<S: Shape + ?Sized> Shape for &S {
    fn param_names(&self) -> Vec<&'static str> {
        (**self).param_names()
    }

    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn calculate(&self, t: f64, params: &[f64]) -> (Point2, bool) {
        (**self).calculate(t, params)
    }

    fn fixed_point(&self, params: &[f64]) -> Point2 {
        (**self).fixed_point(params)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point2, Shape};

    struct Line;

    impl Shape for Line {
        fn param_names(&self) -> Vec<&'static str> {
            vec!["slope"]
        }

        fn calculate(&self, t: f64, params: &[f64]) -> (Point2, bool) {
            (Point2::new(t, params[0] * t), t >= 0.0)
        }
    }

    #[test]
    fn default_fixed_point_is_origin() {
        assert_eq!(Line.fixed_point(&[3.0]), Point2::ORIGIN);
        assert_eq!(Line.arity(), 1);
    }

    #[test]
    fn references_forward_to_the_shape() {
        let shape = &Line;
        assert_eq!(shape.calculate(2.0, &[3.0]), (Point2::new(2.0, 6.0), true));
        assert!(!shape.calculate(-1.0, &[3.0]).1);
        let dynamic: &dyn Shape = &Line;
        assert_eq!(dynamic.param_names(), vec!["slope"]);
    }
}
