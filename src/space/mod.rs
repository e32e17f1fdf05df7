//! Discretized parameter space: axes, their Cartesian product, and range builders.
//!
//! Axis registration order defines which position of a parameter vector an
//! axis feeds. Shapes declare the same ordering through
//! [`Shape::param_names`](crate::Shape::param_names); naming an axis lets the
//! engine verify the two agree before voting.

use crate::util::{HoughError, HoughResult};

pub mod odometer;
pub mod range;

/// One discretized parameter: an ordered, finite list of values.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamAxis {
    name: Option<String>,
    values: Vec<f64>,
}

impl ParamAxis {
    /// Creates an anonymous axis.
    pub fn new(values: Vec<f64>) -> Self {
        Self { name: None, values }
    }

    /// Creates an axis whose name must match the shape parameter it feeds.
    pub fn named(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: Some(name.into()),
            values,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `idx`, if any.
    pub fn value_at(&self, idx: usize) -> Option<f64> {
        self.values.get(idx).copied()
    }

    /// Returns the step to the neighbouring value, or `None` for single-value axes.
    ///
    /// Uses the first two values; meaningful for evenly spaced axes.
    pub fn step(&self) -> Option<f64> {
        match self.values.as_slice() {
            [first, second, ..] => Some((second - first).abs()),
            _ => None,
        }
    }
}

impl From<Vec<f64>> for ParamAxis {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Ordered list of registered axes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamSpace {
    axes: Vec<ParamAxis>,
}

impl ParamSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an axis; its position is the current number of axes.
    pub fn push(&mut self, axis: ParamAxis) -> usize {
        self.axes.push(axis);
        self.axes.len() - 1
    }

    pub fn axes(&self) -> &[ParamAxis] {
        &self.axes
    }

    pub fn axis(&self, index: usize) -> Option<&ParamAxis> {
        self.axes.get(index)
    }

    /// Number of axes (dimensionality N).
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Per-axis lengths in registration order.
    pub fn dims(&self) -> Vec<usize> {
        self.axes.iter().map(ParamAxis::len).collect()
    }

    pub fn clear(&mut self) {
        self.axes.clear();
    }

    /// Checks that the space can be enumerated and returns its cardinality.
    pub fn validate(&self) -> HoughResult<usize> {
        if self.axes.is_empty() {
            return Err(HoughError::NoAxes);
        }
        let mut cardinality = 1usize;
        for (axis, values) in self.axes.iter().enumerate() {
            if values.is_empty() {
                return Err(HoughError::EmptyAxis { axis });
            }
            cardinality = cardinality
                .checked_mul(values.len())
                .ok_or(HoughError::CardinalityOverflow)?;
        }
        Ok(cardinality)
    }

    /// Product of axis lengths; zero when no axes are registered.
    pub fn cardinality(&self) -> usize {
        if self.axes.is_empty() {
            return 0;
        }
        self.axes
            .iter()
            .try_fold(1usize, |acc, axis| acc.checked_mul(axis.len()))
            .unwrap_or(usize::MAX)
    }

    /// Writes the parameter values addressed by `indices` into `out`.
    ///
    /// `indices` and `out` must both have one entry per axis.
    pub fn fill_values(&self, indices: &[usize], out: &mut [f64]) -> HoughResult<()> {
        if indices.len() != self.axes.len() || out.len() != self.axes.len() {
            return Err(HoughError::IndexOutOfBounds {
                index: indices.len().max(out.len()),
                len: self.axes.len(),
                context: "parameter vector",
            });
        }
        for ((axis, &idx), slot) in self.axes.iter().zip(indices).zip(out.iter_mut()) {
            *slot = axis.value_at(idx).ok_or(HoughError::IndexOutOfBounds {
                index: idx,
                len: axis.len(),
                context: "axis values",
            })?;
        }
        Ok(())
    }

    /// Returns the parameter vector addressed by `indices`.
    pub fn values_at(&self, indices: &[usize]) -> HoughResult<Vec<f64>> {
        let mut out = vec![0.0; self.axes.len()];
        self.fill_values(indices, &mut out)?;
        Ok(out)
    }
}
