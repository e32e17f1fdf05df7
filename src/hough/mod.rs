//! Generalized Hough transform engine.
//!
//! The engine exhaustively enumerates the registered parameter space, lets
//! every combination vote with the image intensity along its curve, and then
//! extracts the highest-scoring combinations. Cost is
//! `O(cardinality * t_range.len())`; keep spaces to a handful of axes and pick
//! the discretization accordingly.

pub(crate) mod accumulate;

use std::time::Instant;

use crate::accumulator::Accumulator;
use crate::candidate::extract::extract_candidates;
use crate::candidate::Candidate;
use crate::image::SampleImage;
use crate::mask::{ImageBoundsMask, Mask};
use crate::shape::Shape;
use crate::space::range::range_from_image;
use crate::space::{ParamAxis, ParamSpace};
use crate::trace::{trace_event, trace_span};
use crate::util::{HoughError, HoughResult};

use accumulate::{accumulate_sequential, mean_scores, Voter};

pub use accumulate::CellVotes;

/// Engine settings.
#[derive(Clone, Debug)]
pub struct HoughConfig {
    /// Number of candidates `gather_candidates` returns (at most the cardinality).
    pub max_candidates: usize,
    /// Also record per-cell vote counts and mean votes for inspection.
    /// Candidates are still ranked by summed votes.
    pub normalized: bool,
    /// Rank candidates by mean vote instead of summed votes. Implies the
    /// normalized tables.
    pub rank_by_mean: bool,
    /// Emit timing and per-candidate diagnostics (requires the `tracing` feature to be visible).
    pub debug: bool,
    /// Score cells on the rayon thread pool (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for HoughConfig {
    fn default() -> Self {
        Self {
            max_candidates: 1,
            normalized: false,
            rank_by_mean: false,
            debug: false,
            parallel: false,
        }
    }
}

/// Result tables of one accumulation pass.
///
/// Owned by the caller; the engine keeps no accumulator state between calls.
#[derive(Clone, Debug)]
pub struct Accumulation {
    scores: Accumulator<f32>,
    votes: Option<Accumulator<u32>>,
    means: Option<Accumulator<f32>>,
}

impl Accumulation {
    /// Summed votes per cell.
    pub fn scores(&self) -> &Accumulator<f32> {
        &self.scores
    }

    /// Vote counts per cell (normalized mode or mean ranking only).
    pub fn votes(&self) -> Option<&Accumulator<u32>> {
        self.votes.as_ref()
    }

    /// Mean vote per cell (normalized mode or mean ranking only).
    pub fn means(&self) -> Option<&Accumulator<f32>> {
        self.means.as_ref()
    }

    pub fn is_normalized(&self) -> bool {
        self.means.is_some()
    }
}

/// Brute-force voting engine over registered parameter axes.
///
/// Axes are registered in the order the shape reads its parameters. An
/// optional mask is borrowed for the engine's lifetime; without one, voting
/// is restricted to the image rectangle.
#[derive(Clone, Default)]
pub struct HoughEngine<'m> {
    space: ParamSpace,
    mask: Option<&'m dyn Mask>,
    config: HoughConfig,
}

impl<'m> HoughEngine<'m> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the engine settings.
    pub fn with_config(mut self, config: HoughConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &HoughConfig {
        &self.config
    }

    pub fn set_max_candidates(&mut self, max_candidates: usize) {
        self.config.max_candidates = max_candidates;
    }

    pub fn max_candidates(&self) -> usize {
        self.config.max_candidates
    }

    pub fn set_normalized(&mut self, normalized: bool) {
        self.config.normalized = normalized;
    }

    pub fn set_rank_by_mean(&mut self, rank_by_mean: bool) {
        self.config.rank_by_mean = rank_by_mean;
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
    }

    pub fn debug(&self) -> bool {
        self.config.debug
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    /// Registers the next parameter axis and returns its position.
    pub fn add_param_range(&mut self, values: Vec<f64>) -> usize {
        self.space.push(ParamAxis::new(values))
    }

    /// Registers a (possibly named) axis and returns its position.
    pub fn add_axis(&mut self, axis: ParamAxis) -> usize {
        self.space.push(axis)
    }

    /// Builder form of [`HoughEngine::add_axis`].
    pub fn with_axis(mut self, axis: ParamAxis) -> Self {
        self.space.push(axis);
        self
    }

    /// Removes all registered axes.
    pub fn clear_axes(&mut self) {
        self.space.clear();
    }

    pub fn space(&self) -> &ParamSpace {
        &self.space
    }

    pub fn num_params(&self) -> usize {
        self.space.ndim()
    }

    pub fn cardinality(&self) -> usize {
        self.space.cardinality()
    }

    /// Restricts voting to coordinates accepted by `mask`.
    pub fn set_mask(&mut self, mask: &'m dyn Mask) {
        self.mask = Some(mask);
    }

    /// Builder form of [`HoughEngine::set_mask`].
    pub fn with_mask(mut self, mask: &'m dyn Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Reverts to the image-bounds mask.
    pub fn clear_mask(&mut self) {
        self.mask = None;
    }

    /// Checks that the registered axes line up with the shape's parameters.
    pub fn check_layout<S: Shape + ?Sized>(&self, shape: &S) -> HoughResult<usize> {
        let cardinality = self.space.validate()?;
        let names = shape.param_names();
        let registered = self.space.ndim();
        if names.len() > registered {
            return Err(HoughError::ShapeArity {
                required: names.len(),
                registered,
            });
        }
        for (index, (axis, &expected)) in self.space.axes().iter().zip(&names).enumerate() {
            match axis.name() {
                Some(got) if !expected.is_empty() && got != expected => {
                    return Err(HoughError::ParamNameMismatch {
                        index,
                        expected,
                        got: got.to_owned(),
                    });
                }
                _ => {}
            }
        }
        Ok(cardinality)
    }

    /// Lets every parameter combination vote along its curve.
    ///
    /// For each combination and each `t`, the shape's point votes with the
    /// bilinear image sample at that point unless the shape reports `t` out of
    /// range, a coordinate does not fit in `i32`, or the mask rejects the
    /// rounded coordinate.
    pub fn accumulate<I, S>(&self, image: &I, shape: &S, t_range: &[f64]) -> HoughResult<Accumulation>
    where
        I: SampleImage + ?Sized,
        S: Shape + ?Sized,
    {
        let cardinality = self.check_layout(shape)?;
        let _span = trace_span!(
            "accumulate",
            cardinality = cardinality,
            t_samples = t_range.len(),
            normalized = self.config.normalized
        )
        .entered();
        let start = self.config.debug.then(Instant::now);

        let default_mask = ImageBoundsMask::new(image.height(), image.width());
        let mask: &dyn Mask = match self.mask {
            Some(mask) => mask,
            None => &default_mask,
        };
        let voter = Voter {
            image,
            shape,
            mask,
            t_range,
        };

        let dims = self.space.dims();
        let mut scores = Accumulator::<f32>::zeros(&dims)?;
        let mut votes = if self.config.normalized || self.config.rank_by_mean {
            Some(Accumulator::<u32>::zeros(&dims)?)
        } else {
            None
        };

        if self.config.parallel {
            self.accumulate_parallel(&voter, &mut scores, votes.as_mut())?;
        } else {
            accumulate_sequential(&self.space, &voter, &mut scores, votes.as_mut())?;
        }

        let means = match votes.as_ref() {
            Some(votes) => Some(mean_scores(&scores, votes)?),
            None => None,
        };

        if let Some(start) = start {
            trace_event!(
                "accumulate_done",
                cardinality = cardinality,
                elapsed_ms = start.elapsed().as_secs_f64() * 1000.0
            );
        }

        Ok(Accumulation {
            scores,
            votes,
            means,
        })
    }

    #[cfg(feature = "rayon")]
    fn accumulate_parallel<I, S>(
        &self,
        voter: &Voter<'_, I, S>,
        scores: &mut Accumulator<f32>,
        votes: Option<&mut Accumulator<u32>>,
    ) -> HoughResult<()>
    where
        I: SampleImage + ?Sized,
        S: Shape + ?Sized,
    {
        accumulate::accumulate_parallel(&self.space, voter, scores, votes)
    }

    #[cfg(not(feature = "rayon"))]
    fn accumulate_parallel<I, S>(
        &self,
        _voter: &Voter<'_, I, S>,
        _scores: &mut Accumulator<f32>,
        _votes: Option<&mut Accumulator<u32>>,
    ) -> HoughResult<()>
    where
        I: SampleImage + ?Sized,
        S: Shape + ?Sized,
    {
        Err(HoughError::ParallelUnavailable)
    }

    /// Extracts up to `max_candidates` parameter vectors, best first.
    ///
    /// Ranks by summed votes unless `rank_by_mean` is set. `accumulation` is
    /// left untouched and can be inspected afterwards. See
    /// [`crate::lowlevel::extract_candidates`] for tie-breaking and exhaustion
    /// behaviour.
    pub fn gather_candidates(&self, accumulation: &Accumulation) -> HoughResult<Vec<Candidate>> {
        let _span = trace_span!("gather_candidates", max = self.config.max_candidates).entered();
        let candidates = extract_candidates(
            &self.space,
            self.ranking(accumulation),
            self.config.max_candidates,
        )?;
        if self.config.debug {
            for (rank, candidate) in candidates.iter().enumerate() {
                trace_event!("candidate", rank = rank, score = candidate.score);
            }
        }
        Ok(candidates)
    }

    /// Summed votes, or mean votes when `rank_by_mean` is set and the means
    /// were recorded.
    fn ranking<'a>(&self, accumulation: &'a Accumulation) -> &'a Accumulator<f32> {
        match accumulation.means() {
            Some(means) if self.config.rank_by_mean => means,
            _ => accumulation.scores(),
        }
    }

    /// Accumulates and extracts in one call.
    pub fn compute<I, S>(&self, image: &I, shape: &S, t_range: &[f64]) -> HoughResult<Vec<Candidate>>
    where
        I: SampleImage + ?Sized,
        S: Shape + ?Sized,
    {
        let accumulation = self.accumulate(image, shape, t_range)?;
        self.gather_candidates(&accumulation)
    }

    /// [`HoughEngine::compute`] sampling the curve once per image column.
    pub fn compute_full_width<I, S>(&self, image: &I, shape: &S) -> HoughResult<Vec<Candidate>>
    where
        I: SampleImage + ?Sized,
        S: Shape + ?Sized,
    {
        let t_range = range_from_image(image);
        self.compute(image, shape, &t_range)
    }

    /// Returns only the best candidate.
    ///
    /// Fails with [`HoughError::NoCandidates`] when `max_candidates` is zero.
    pub fn compute_best<I, S>(&self, image: &I, shape: &S, t_range: &[f64]) -> HoughResult<Candidate>
    where
        I: SampleImage + ?Sized,
        S: Shape + ?Sized,
    {
        self.compute(image, shape, t_range)?
            .into_iter()
            .next()
            .ok_or(HoughError::NoCandidates)
    }
}
