//! Dense N-dimensional voting tables.
//!
//! The table is stored row-major with the last axis contiguous, so walking
//! the flat buffer front to back visits cells in odometer order.

use crate::util::{HoughError, HoughResult};

/// Runtime-sized dense N-dimensional array.
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulator<T> {
    dims: Vec<usize>,
    strides: Vec<usize>,
    data: Vec<T>,
}

impl<T: Copy + Default> Accumulator<T> {
    /// Allocates a zero-filled table with one extent per axis.
    pub fn zeros(dims: &[usize]) -> HoughResult<Self> {
        if dims.is_empty() {
            return Err(HoughError::NoAxes);
        }
        if let Some(axis) = dims.iter().position(|&d| d == 0) {
            return Err(HoughError::EmptyAxis { axis });
        }
        let len = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or(HoughError::CardinalityOverflow)?;

        let mut strides = vec![1usize; dims.len()];
        for axis in (0..dims.len() - 1).rev() {
            strides[axis] = strides[axis + 1] * dims[axis + 1];
        }

        Ok(Self {
            dims: dims.to_vec(),
            strides,
            data: vec![T::default(); len],
        })
    }

    /// Returns the value at an index vector.
    pub fn get(&self, indices: &[usize]) -> Option<T> {
        let flat = self.flat_index(indices)?;
        self.data.get(flat).copied()
    }

    /// Overwrites the value at an index vector.
    pub fn set(&mut self, indices: &[usize], value: T) -> HoughResult<()> {
        let flat = self
            .flat_index(indices)
            .ok_or(HoughError::IndexOutOfBounds {
                index: indices.len(),
                len: self.dims.len(),
                context: "accumulator index",
            })?;
        self.data[flat] = value;
        Ok(())
    }
}

impl<T> Accumulator<T> {
    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Extent of each dimension.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Row-major offset of an index vector, or `None` if it is out of range.
    pub fn flat_index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.dims.len() {
            return None;
        }
        let mut flat = 0usize;
        for ((&idx, &dim), &stride) in indices.iter().zip(&self.dims).zip(&self.strides) {
            if idx >= dim {
                return None;
            }
            flat += idx * stride;
        }
        Some(flat)
    }

    /// Index vector of a row-major offset.
    pub fn unravel(&self, flat: usize) -> Option<Vec<usize>> {
        if flat >= self.data.len() {
            return None;
        }
        let mut rem = flat;
        let indices = self
            .strides
            .iter()
            .map(|&stride| {
                let idx = rem / stride;
                rem %= stride;
                idx
            })
            .collect();
        Some(indices)
    }
}

impl Accumulator<f32> {
    /// Offset and value of the largest cell.
    ///
    /// Ties resolve to the first cell in odometer order. NaN cells never win
    /// against a comparable value.
    pub fn argmax(&self) -> Option<(usize, f32)> {
        self.argmax_where(|_| true)
    }

    /// [`Accumulator::argmax`] over the cells whose offset passes `keep`.
    pub fn argmax_where<F>(&self, keep: F) -> Option<(usize, f32)>
    where
        F: Fn(usize) -> bool,
    {
        let mut best: Option<(usize, f32)> = None;
        for (flat, &value) in self.data.iter().enumerate() {
            if !keep(flat) {
                continue;
            }
            let replace = match best {
                None => true,
                Some((_, best_value)) if best_value.is_nan() => !value.is_nan(),
                Some((_, best_value)) => value > best_value,
            };
            if replace {
                best = Some((flat, value));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::Accumulator;
    use crate::HoughError;

    #[test]
    fn zeros_matches_requested_shape() {
        let acc = Accumulator::<f32>::zeros(&[3, 1, 2]).unwrap();
        assert_eq!(acc.ndim(), 3);
        assert_eq!(acc.dims(), &[3, 1, 2]);
        assert_eq!(acc.len(), 6);
        assert!(acc.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zeros_rejects_degenerate_shapes() {
        assert_eq!(Accumulator::<f32>::zeros(&[]), Err(HoughError::NoAxes));
        assert_eq!(
            Accumulator::<u32>::zeros(&[4, 0]),
            Err(HoughError::EmptyAxis { axis: 1 })
        );
        assert_eq!(
            Accumulator::<u32>::zeros(&[usize::MAX, 2]),
            Err(HoughError::CardinalityOverflow)
        );
    }

    #[test]
    fn flat_index_round_trips_through_unravel() {
        let acc = Accumulator::<u32>::zeros(&[2, 3, 4]).unwrap();
        assert_eq!(acc.flat_index(&[1, 2, 3]), Some(23));
        assert_eq!(acc.flat_index(&[0, 1, 0]), Some(4));
        assert_eq!(acc.unravel(23), Some(vec![1, 2, 3]));
        assert_eq!(acc.flat_index(&[2, 0, 0]), None);
        assert_eq!(acc.flat_index(&[0, 0]), None);
        assert_eq!(acc.unravel(24), None);
    }

    #[test]
    fn argmax_prefers_first_of_ties() {
        let mut acc = Accumulator::<f32>::zeros(&[2, 2]).unwrap();
        assert_eq!(acc.argmax(), Some((0, 0.0)));
        acc.set(&[0, 1], 5.0).unwrap();
        acc.set(&[1, 1], 5.0).unwrap();
        assert_eq!(acc.argmax(), Some((1, 5.0)));
        acc.set(&[0, 0], f32::NAN).unwrap();
        assert_eq!(acc.argmax(), Some((1, 5.0)));
        assert_eq!(acc.get(&[1, 1]), Some(5.0));
    }

    #[test]
    fn argmax_keeps_first_nan_when_nothing_is_comparable() {
        let mut acc = Accumulator::<f32>::zeros(&[3]).unwrap();
        acc.as_mut_slice().fill(f32::NAN);
        let (flat, value) = acc.argmax().unwrap();
        assert_eq!(flat, 0);
        assert!(value.is_nan());

        acc.set(&[2], -1.0).unwrap();
        assert_eq!(acc.argmax(), Some((2, -1.0)));
    }

    #[test]
    fn argmax_where_skips_filtered_cells() {
        let mut acc = Accumulator::<f32>::zeros(&[2, 2]).unwrap();
        acc.as_mut_slice().copy_from_slice(&[3.0, 9.0, 9.0, 1.0]);
        assert_eq!(acc.argmax_where(|flat| flat != 1), Some((2, 9.0)));
        assert_eq!(acc.argmax_where(|flat| flat == 3), Some((3, 1.0)));
        assert_eq!(acc.argmax_where(|_| false), None);
    }
}
