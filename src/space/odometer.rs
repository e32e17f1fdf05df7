//! Mixed-radix index advancement over the Cartesian product of axes.
//!
//! The index vector behaves like an odometer whose wheel `i` has `dims[i]`
//! positions: the last wheel turns fastest and overflow carries into the
//! previous wheel. Starting from all zeros, repeated advancement visits every
//! combination exactly once in row-major order, which is also the flat layout
//! of [`Accumulator`](crate::Accumulator).

/// Advances `indices` in place to the next combination.
///
/// Returns `false` exactly when the first wheel overflows; `indices` is then
/// back at all zeros. A zero-length axis always overflows immediately.
pub fn advance_indices(dims: &[usize], indices: &mut [usize]) -> bool {
    debug_assert_eq!(dims.len(), indices.len());
    for axis in (0..indices.len()).rev() {
        indices[axis] += 1;
        if indices[axis] < dims[axis] {
            return true;
        }
        indices[axis] = 0;
    }
    false
}

/// Returns the combination after `current`, or `None` when the odometer rolls over.
pub fn next_indices(dims: &[usize], current: &[usize]) -> Option<Vec<usize>> {
    if dims.len() != current.len() {
        return None;
    }
    let mut next = current.to_vec();
    advance_indices(dims, &mut next).then_some(next)
}
