//! Extracted parameter combinations and their selection from an accumulator.

pub(crate) mod extract;

/// A detected curve: one value per registered axis, in axis order.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    /// Parameter values in axis registration order.
    pub params: Vec<f64>,
    /// Accumulator index of each parameter.
    pub indices: Vec<usize>,
    /// Summed vote score, or the mean vote when ranking by mean.
    pub score: f32,
}

impl Candidate {
    /// Returns the value of parameter `index`, if present.
    pub fn param(&self, index: usize) -> Option<f64> {
        self.params.get(index).copied()
    }
}
