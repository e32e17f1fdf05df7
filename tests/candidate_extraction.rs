//! Candidate ordering and distinctness through the public engine API.

use curvehough::lowlevel::{extract_candidates, Accumulator};
use curvehough::{
    HoughConfig, HoughEngine, ImageView, ParamAxis, ParamSpace, Point2, Shape,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Maps each `(a, b, c)` of the 3x1x2 example grid onto its own pixel of a 6x1 image.
struct GridProbe;

impl Shape for GridProbe {
    fn param_names(&self) -> Vec<&'static str> {
        vec!["a", "b", "c"]
    }

    fn calculate(&self, _t: f64, params: &[f64]) -> (Point2, bool) {
        let (a, b, c) = (params[0], params[1], params[2]);
        let x = (a + 1.0) + 3.0 * ((c - 5.0) / 5.0) + b;
        (Point2::new(x, 0.0), true)
    }
}

fn example_engine(max_candidates: usize) -> HoughEngine<'static> {
    let mut engine = HoughEngine::new().with_config(HoughConfig {
        max_candidates,
        ..HoughConfig::default()
    });
    engine.add_param_range(vec![-1.0, 0.0, 1.0]);
    engine.add_param_range(vec![0.0]);
    engine.add_param_range(vec![5.0, 10.0]);
    engine
}

#[test]
fn six_distinct_scores_come_back_in_descending_order() {
    let pixels = [30u8, 10, 60, 20, 50, 40];
    let image = ImageView::from_slice(&pixels, 6, 1).unwrap();
    let engine = example_engine(6);

    let acc = engine.accumulate(&image, &GridProbe, &[0.0]).unwrap();
    assert_eq!(acc.scores().dims(), &[3, 1, 2]);

    let candidates = engine.gather_candidates(&acc).unwrap();
    let params: Vec<Vec<f64>> = candidates.iter().map(|c| c.params.clone()).collect();
    assert_eq!(
        params,
        vec![
            vec![1.0, 0.0, 5.0],
            vec![0.0, 0.0, 10.0],
            vec![1.0, 0.0, 10.0],
            vec![-1.0, 0.0, 5.0],
            vec![-1.0, 0.0, 10.0],
            vec![0.0, 0.0, 5.0],
        ]
    );
    let scores: Vec<f32> = candidates.iter().map(|c| c.score).collect();
    assert_eq!(scores, vec![60.0, 50.0, 40.0, 30.0, 20.0, 10.0]);

    // Extraction leaves the table untouched.
    assert_eq!(acc.scores().get(&[2, 0, 0]), Some(60.0));
}

#[test]
fn requesting_fewer_candidates_returns_the_top_k() {
    let pixels = [30u8, 10, 60, 20, 50, 40];
    let image = ImageView::from_slice(&pixels, 6, 1).unwrap();
    let engine = example_engine(2);

    let candidates = engine.compute(&image, &GridProbe, &[0.0]).unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].params, vec![1.0, 0.0, 5.0]);
    assert_eq!(candidates[1].params, vec![0.0, 0.0, 10.0]);

    let best = engine.compute_best(&image, &GridProbe, &[0.0]).unwrap();
    assert_eq!(best, candidates[0]);
}

/// Column 0 is sampled twice per t-range, column 1 once, so sums and means
/// disagree on the winner.
struct TwoColumns;

impl Shape for TwoColumns {
    fn param_names(&self) -> Vec<&'static str> {
        vec!["col"]
    }

    fn calculate(&self, t: f64, params: &[f64]) -> (Point2, bool) {
        (Point2::new(params[0], 0.0), params[0] == 0.0 || t == 0.0)
    }
}

#[test]
fn normalized_mode_keeps_ranking_by_summed_votes() {
    let pixels = [40u8, 70];
    let image = ImageView::from_slice(&pixels, 2, 1).unwrap();
    let mut engine = HoughEngine::new();
    engine.add_param_range(vec![0.0, 1.0]);

    let raw = engine.compute_best(&image, &TwoColumns, &[0.0, 1.0]).unwrap();
    assert_eq!(raw.params, vec![0.0]);
    assert_eq!(raw.score, 80.0);

    engine.set_normalized(true);
    let acc = engine.accumulate(&image, &TwoColumns, &[0.0, 1.0]).unwrap();
    assert!(acc.is_normalized());
    assert_eq!(acc.votes().unwrap().as_slice(), &[2, 1]);
    assert_eq!(acc.means().unwrap().as_slice(), &[40.0, 70.0]);
    assert_eq!(acc.scores().as_slice(), &[80.0, 70.0]);
    let picks = engine.gather_candidates(&acc).unwrap();
    assert_eq!(picks[0].params, vec![0.0]);
    assert_eq!(picks[0].score, 80.0);
}

#[test]
fn mean_ranking_is_opt_in() {
    let pixels = [40u8, 70];
    let image = ImageView::from_slice(&pixels, 2, 1).unwrap();
    let mut engine = HoughEngine::new();
    engine.add_param_range(vec![0.0, 1.0]);
    engine.set_rank_by_mean(true);

    let acc = engine.accumulate(&image, &TwoColumns, &[0.0, 1.0]).unwrap();
    assert_eq!(acc.means().unwrap().as_slice(), &[40.0, 70.0]);
    let best = engine.gather_candidates(&acc).unwrap();
    assert_eq!(best[0].params, vec![1.0]);
    assert_eq!(best[0].score, 70.0);
}

#[test]
fn random_accumulators_extract_in_non_increasing_order() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..24 {
        let dims: Vec<usize> = (0..rng.random_range(1..=4))
            .map(|_| rng.random_range(1..=5))
            .collect();
        let mut space = ParamSpace::new();
        for &len in &dims {
            space.push(ParamAxis::new((0..len).map(|v| v as f64 * 0.5).collect()));
        }
        let mut acc = Accumulator::<f32>::zeros(&dims).unwrap();
        for cell in acc.as_mut_slice() {
            // Coarse values so ties are common.
            *cell = rng.random_range(0..6) as f32;
        }

        let k = rng.random_range(1..=acc.len());
        let picks = extract_candidates(&space, &acc, k).unwrap();
        assert_eq!(picks.len(), k);
        assert!(picks.windows(2).all(|w| w[0].score >= w[1].score));

        let unique: HashSet<Vec<usize>> = picks.iter().map(|c| c.indices.clone()).collect();
        assert_eq!(unique.len(), k);
        for pick in &picks {
            assert_eq!(acc.get(&pick.indices), Some(pick.score));
        }
    }
}

#[test]
fn all_zero_accumulator_yields_odometer_order() {
    let data = [0u8; 9];
    let image = ImageView::from_slice(&data, 3, 3).unwrap();
    let engine = example_engine(4);
    let candidates = engine.compute(&image, &GridProbe, &[0.0]).unwrap();
    let indices: Vec<Vec<usize>> = candidates.iter().map(|c| c.indices.clone()).collect();
    assert_eq!(
        indices,
        vec![vec![0, 0, 0], vec![0, 0, 1], vec![1, 0, 0], vec![1, 0, 1]]
    );
}
