use clap::Parser;
use curvehough::io::load_gray_image;
use curvehough::range::{angles_deg, incremental, range_from_image, scaled_incremental};
use curvehough::{
    Candidate, HoughConfig, HoughEngine, Mask, ParamAxis, RegionMask, RotatedShape, Shape,
    StandardFormParabola, VertexFormParabola,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "curvehough CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output (accumulation timing and picked candidates).
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
enum ShapeKind {
    #[default]
    StandardParabola,
    VertexParabola,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ShapeConfig {
    kind: ShapeKind,
    /// Appends a rotation-angle axis after the shape's own parameters.
    rotated: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RangeConfig {
    Incremental { min: f64, max: f64, step: f64 },
    Scaled {
        min: i64,
        step: i64,
        count: usize,
        scalar: f64,
    },
    AnglesDeg {
        min_deg: i64,
        step_deg: i64,
        count: usize,
    },
    Values(Vec<f64>),
}

impl RangeConfig {
    fn build(&self) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
        Ok(match self {
            RangeConfig::Incremental { min, max, step } => incremental(*min, *max, *step)?,
            RangeConfig::Scaled {
                min,
                step,
                count,
                scalar,
            } => scaled_incremental(*min, *step, *count, *scalar)?,
            RangeConfig::AnglesDeg {
                min_deg,
                step_deg,
                count,
            } => angles_deg(*min_deg, *step_deg, *count)?,
            RangeConfig::Values(values) => values.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct AxisConfig {
    name: Option<String>,
    range: RangeConfig,
}

#[derive(Debug, Deserialize)]
struct RoiConfig {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct EngineConfigJson {
    max_candidates: usize,
    normalized: bool,
    rank_by_mean: bool,
    debug: bool,
    parallel: bool,
}

impl Default for EngineConfigJson {
    fn default() -> Self {
        let cfg = HoughConfig::default();
        Self {
            max_candidates: cfg.max_candidates,
            normalized: cfg.normalized,
            rank_by_mean: cfg.rank_by_mean,
            debug: cfg.debug,
            parallel: cfg.parallel,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Config {
    image_path: String,
    output_path: Option<String>,
    shape: ShapeConfig,
    axes: Vec<AxisConfig>,
    /// Curve samples; defaults to one per image column.
    t_range: Option<RangeConfig>,
    /// Restricts voting to a rectangle, clipped to the image.
    roi: Option<RoiConfig>,
    engine: EngineConfigJson,
}

#[derive(Debug, Serialize)]
struct CandidateRecord {
    params: Vec<f64>,
    score: f32,
}

impl From<Candidate> for CandidateRecord {
    fn from(value: Candidate) -> Self {
        Self {
            params: value.params,
            score: value.score,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    param_names: Vec<&'static str>,
    best: Option<CandidateRecord>,
    candidates: Vec<CandidateRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("curvehough=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.image_path.is_empty() {
        return Err("image_path must be set in the config".into());
    }
    if config.axes.is_empty() {
        return Err("at least one axis must be configured".into());
    }
    if config.engine.max_candidates == 0 {
        return Err("engine.max_candidates must be at least 1".into());
    }

    let image = load_gray_image(&config.image_path)?;

    let standard = StandardFormParabola;
    let vertex = VertexFormParabola;
    let inner: &dyn Shape = match config.shape.kind {
        ShapeKind::StandardParabola => &standard,
        ShapeKind::VertexParabola => &vertex,
    };
    let rotated;
    let shape: &dyn Shape = if config.shape.rotated {
        rotated = RotatedShape::appended(inner);
        &rotated
    } else {
        inner
    };

    let roi = config
        .roi
        .as_ref()
        .map(|r| RegionMask::new(r.x0, r.y0, r.x1, r.y1).clipped_to(image.height(), image.width()));

    let mut engine = HoughEngine::new().with_config(HoughConfig {
        max_candidates: config.engine.max_candidates,
        normalized: config.engine.normalized,
        rank_by_mean: config.engine.rank_by_mean,
        debug: config.engine.debug || cli.trace,
        parallel: config.engine.parallel,
    });
    for axis in &config.axes {
        let values = axis.range.build()?;
        engine.add_axis(match &axis.name {
            Some(name) => ParamAxis::named(name.clone(), values),
            None => ParamAxis::new(values),
        });
    }
    if let Some(roi) = roi.as_ref() {
        engine.set_mask(roi as &dyn Mask);
    }

    let t_range = match &config.t_range {
        Some(range) => range.build()?,
        None => range_from_image(&image),
    };

    tracing::info!(
        cardinality = engine.cardinality(),
        t_samples = t_range.len(),
        "running hough transform"
    );
    let candidates = engine.compute(&image, shape, &t_range)?;

    let best = candidates.first().cloned().map(CandidateRecord::from);
    let output = Output {
        param_names: shape.param_names(),
        best,
        candidates: candidates.into_iter().map(CandidateRecord::from).collect(),
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
