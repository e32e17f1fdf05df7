//! Voting loop over the discretized parameter space.

use crate::accumulator::Accumulator;
use crate::image::SampleImage;
use crate::mask::Mask;
use crate::shape::Shape;
use crate::space::odometer::advance_indices;
use crate::space::ParamSpace;
use crate::util::math::is_inside_int_limits;
use crate::util::HoughResult;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Votes collected by one parameter combination.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellVotes {
    /// Sum of bilinear samples along the curve.
    pub sum: f32,
    /// Number of samples that passed every check.
    pub count: u32,
}

/// Everything needed to score one parameter combination.
pub(crate) struct Voter<'a, I: ?Sized, S: ?Sized> {
    pub(crate) image: &'a I,
    pub(crate) shape: &'a S,
    pub(crate) mask: &'a dyn Mask,
    pub(crate) t_range: &'a [f64],
}

impl<I, S> Voter<'_, I, S>
where
    I: SampleImage + ?Sized,
    S: Shape + ?Sized,
{
    /// Walks the curve for `params` and sums the samples that may vote.
    ///
    /// Samples are added in `t_range` order, so the sum is reproducible.
    pub(crate) fn vote(&self, params: &[f64]) -> CellVotes {
        let mut cell = CellVotes::default();
        for &t in self.t_range {
            let (p, in_range) = self.shape.calculate(t, params);
            if !in_range {
                continue;
            }
            if !is_inside_int_limits(p.x) || !is_inside_int_limits(p.y) {
                continue;
            }
            let rx = p.x.round() as i32;
            let ry = p.y.round() as i32;
            if !self.mask.can_vote(rx, ry) {
                continue;
            }
            cell.sum += self.image.sample_bilinear(p.x, p.y);
            cell.count = cell.count.saturating_add(1);
        }
        cell
    }
}

/// Scores every combination in odometer order on the current thread.
pub(crate) fn accumulate_sequential<I, S>(
    space: &ParamSpace,
    voter: &Voter<'_, I, S>,
    scores: &mut Accumulator<f32>,
    mut votes: Option<&mut Accumulator<u32>>,
) -> HoughResult<()>
where
    I: SampleImage + ?Sized,
    S: Shape + ?Sized,
{
    let dims = space.dims();
    let mut indices = vec![0usize; dims.len()];
    let mut params = vec![0.0f64; dims.len()];
    let mut flat = 0usize;

    loop {
        space.fill_values(&indices, &mut params)?;
        let cell = voter.vote(&params);
        scores.as_mut_slice()[flat] = cell.sum;
        if let Some(votes) = votes.as_deref_mut() {
            votes.as_mut_slice()[flat] = cell.count;
        }
        flat += 1;
        if !advance_indices(&dims, &mut indices) {
            break;
        }
    }
    debug_assert_eq!(flat, scores.len());
    Ok(())
}

/// Scores combinations in parallel; each cell is summed exactly as in
/// [`accumulate_sequential`], so the tables are identical.
#[cfg(feature = "rayon")]
pub(crate) fn accumulate_parallel<I, S>(
    space: &ParamSpace,
    voter: &Voter<'_, I, S>,
    scores: &mut Accumulator<f32>,
    votes: Option<&mut Accumulator<u32>>,
) -> HoughResult<()>
where
    I: SampleImage + ?Sized,
    S: Shape + ?Sized,
{
    let ndim = space.ndim();
    let layout: &Accumulator<f32> = scores;
    let cells: Vec<CellVotes> = (0..layout.len())
        .into_par_iter()
        .map_init(
            || vec![0.0f64; ndim],
            |params, flat| -> HoughResult<CellVotes> {
                let indices = layout.unravel(flat).unwrap_or_default();
                space.fill_values(&indices, params)?;
                Ok(voter.vote(params))
            },
        )
        .collect::<HoughResult<Vec<_>>>()?;

    for (dst, cell) in scores.as_mut_slice().iter_mut().zip(&cells) {
        *dst = cell.sum;
    }
    if let Some(votes) = votes {
        for (dst, cell) in votes.as_mut_slice().iter_mut().zip(&cells) {
            *dst = cell.count;
        }
    }
    Ok(())
}

/// Mean vote per cell; cells without votes stay at zero.
pub(crate) fn mean_scores(
    scores: &Accumulator<f32>,
    votes: &Accumulator<u32>,
) -> HoughResult<Accumulator<f32>> {
    let mut means = Accumulator::<f32>::zeros(scores.dims())?;
    for ((mean, &sum), &count) in means
        .as_mut_slice()
        .iter_mut()
        .zip(scores.as_slice())
        .zip(votes.as_slice())
    {
        if count > 0 {
            *mean = sum / count as f32;
        }
    }
    Ok(means)
}
