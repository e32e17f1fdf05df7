//! Iterative arg-max extraction with single-cell suppression.

use crate::accumulator::Accumulator;
use crate::candidate::Candidate;
use crate::space::ParamSpace;
use crate::util::{HoughError, HoughResult};

/// Picks up to `max_candidates` cells from `ranking`, best first.
///
/// Each pick is the largest remaining cell (ties go to the first cell in
/// odometer order); the picked cell is then suppressed, leaving `ranking`
/// untouched. Only the picked cell is suppressed, so
/// neighbours of a strong peak can follow it directly. Once every nonzero
/// cell is taken the remaining zero cells follow in odometer order, and the
/// output never exceeds the number of cells.
pub fn extract_candidates(
    space: &ParamSpace,
    ranking: &Accumulator<f32>,
    max_candidates: usize,
) -> HoughResult<Vec<Candidate>> {
    let dims = space.dims();
    if dims.is_empty() {
        return Err(HoughError::NoAxes);
    }
    if ranking.dims() != dims.as_slice() {
        return Err(HoughError::IndexOutOfBounds {
            index: ranking.len(),
            len: space.cardinality(),
            context: "accumulator shape",
        });
    }

    let count = max_candidates.min(ranking.len());
    let mut suppressed = vec![false; ranking.len()];
    let mut out = Vec::with_capacity(count);

    while out.len() < count {
        let Some((flat, score)) = ranking.argmax_where(|flat| !suppressed[flat]) else {
            break;
        };
        let indices = ranking.unravel(flat).ok_or(HoughError::IndexOutOfBounds {
            index: flat,
            len: ranking.len(),
            context: "accumulator cell",
        })?;
        let params = space.values_at(&indices)?;
        out.push(Candidate {
            params,
            indices,
            score,
        });
        suppressed[flat] = true;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::extract_candidates;
    use crate::accumulator::Accumulator;
    use crate::space::{ParamAxis, ParamSpace};
    use crate::HoughError;

    fn space_2x3() -> ParamSpace {
        let mut space = ParamSpace::new();
        space.push(ParamAxis::new(vec![0.5, 1.5]));
        space.push(ParamAxis::new(vec![10.0, 20.0, 30.0]));
        space
    }

    #[test]
    fn picks_descending_and_leaves_input_untouched() {
        let space = space_2x3();
        let mut acc = Accumulator::<f32>::zeros(&[2, 3]).unwrap();
        acc.set(&[1, 2], 9.0).unwrap();
        acc.set(&[0, 1], 4.0).unwrap();
        acc.set(&[1, 0], 6.0).unwrap();
        let before = acc.clone();

        let picks = extract_candidates(&space, &acc, 3).unwrap();
        assert_eq!(acc, before);
        assert_eq!(picks.len(), 3);
        assert_eq!(picks[0].params, vec![1.5, 30.0]);
        assert_eq!(picks[0].score, 9.0);
        assert_eq!(picks[1].indices, vec![1, 0]);
        assert_eq!(picks[2].params, vec![0.5, 20.0]);
    }

    #[test]
    fn exhausted_peaks_fall_back_to_zero_cells_in_order() {
        let space = space_2x3();
        let mut acc = Accumulator::<f32>::zeros(&[2, 3]).unwrap();
        acc.set(&[0, 2], 1.0).unwrap();

        let picks = extract_candidates(&space, &acc, 10).unwrap();
        assert_eq!(picks.len(), 6);
        let order: Vec<Vec<usize>> = picks.iter().map(|c| c.indices.clone()).collect();
        assert_eq!(
            order,
            vec![
                vec![0, 2],
                vec![0, 0],
                vec![0, 1],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
        assert!(picks[1..].iter().all(|c| c.score == 0.0));
    }

    #[test]
    fn rejects_mismatched_shapes() {
        let space = space_2x3();
        let acc = Accumulator::<f32>::zeros(&[3, 2]).unwrap();
        assert!(matches!(
            extract_candidates(&space, &acc, 1),
            Err(HoughError::IndexOutOfBounds { .. })
        ));
        assert_eq!(
            extract_candidates(&ParamSpace::new(), &acc, 1),
            Err(HoughError::NoAxes)
        );
    }

    #[test]
    fn nan_cells_follow_finite_ones_in_odometer_order() {
        let space = space_2x3();
        let mut acc = Accumulator::<f32>::zeros(&[2, 3]).unwrap();
        acc.as_mut_slice().fill(f32::NAN);
        acc.set(&[1, 1], 2.0).unwrap();

        let picks = extract_candidates(&space, &acc, 3).unwrap();
        assert_eq!(picks[0].indices, vec![1, 1]);
        assert_eq!(picks[0].score, 2.0);
        assert_eq!(picks[1].indices, vec![0, 0]);
        assert_eq!(picks[2].indices, vec![0, 1]);
        assert!(picks[1].score.is_nan());
    }

    #[test]
    fn zero_requested_returns_nothing() {
        let space = space_2x3();
        let acc = Accumulator::<f32>::zeros(&[2, 3]).unwrap();
        assert!(extract_candidates(&space, &acc, 0).unwrap().is_empty());
    }
}
