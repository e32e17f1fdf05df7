#![cfg(feature = "rayon")]

use curvehough::range::{angles_deg, scaled_incremental};
use curvehough::{
    HoughConfig, HoughEngine, ImageView, ParamAxis, RotatedShape, StandardFormParabola,
};

fn make_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(value as u8);
        }
    }
    data
}

fn engine(parallel: bool, normalized: bool) -> HoughEngine<'static> {
    HoughEngine::new()
        .with_config(HoughConfig {
            max_candidates: 5,
            normalized,
            parallel,
            ..HoughConfig::default()
        })
        .with_axis(ParamAxis::named("a", scaled_incremental(-3, 1, 7, 0.004).unwrap()))
        .with_axis(ParamAxis::named("b", scaled_incremental(-2, 1, 5, 0.15).unwrap()))
        .with_axis(ParamAxis::named("c", scaled_incremental(5, 1, 6, 4.0).unwrap()))
        .with_axis(ParamAxis::named("theta", angles_deg(-6, 3, 5).unwrap()))
}

#[test]
fn parallel_matches_sequential_accumulation() {
    let (width, height) = (72, 56);
    let data = make_image(width, height);
    let image = ImageView::from_slice(&data, width, height).unwrap();
    let inner = StandardFormParabola;
    let shape = RotatedShape::appended(&inner);
    let t_range = scaled_incremental(0, 1, 144, 0.5).unwrap();

    for normalized in [false, true] {
        let seq_engine = engine(false, normalized);
        let par_engine = engine(true, normalized);

        let seq = seq_engine.accumulate(&image, &shape, &t_range).unwrap();
        let par = par_engine.accumulate(&image, &shape, &t_range).unwrap();
        assert_eq!(seq.scores(), par.scores());
        assert_eq!(seq.votes(), par.votes());
        assert_eq!(seq.means(), par.means());

        let seq_best = seq_engine.gather_candidates(&seq).unwrap();
        let par_best = par_engine.gather_candidates(&par).unwrap();
        assert_eq!(seq_best, par_best);
    }
}
