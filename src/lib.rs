//! curvehough detects parametric curves in grayscale images with a
//! generalized Hough transform.
//!
//! Register one discretized axis per curve parameter, pick a [`Shape`]
//! (parabolas in standard or vertex form, optionally wrapped in a
//! [`RotatedShape`]), and let [`HoughEngine`] vote with image intensity along
//! every candidate curve. The search is exhaustive and intended for small
//! (2-4 axis) parameter spaces such as eyelid boundaries.
//!
//! ```
//! use curvehough::range::scaled_incremental;
//! use curvehough::{HoughEngine, ImageView, ParamAxis, StandardFormParabola};
//!
//! let (width, height) = (32usize, 32usize);
//! let mut pixels = vec![0u8; width * height];
//! for x in 0..width {
//!     pixels[10 * width + x] = 255;
//! }
//! let image = ImageView::from_slice(&pixels, width, height).unwrap();
//!
//! let engine = HoughEngine::new()
//!     .with_axis(ParamAxis::named("a", vec![0.0, 0.01]))
//!     .with_axis(ParamAxis::named("b", scaled_incremental(-1, 1, 3, 0.1).unwrap()))
//!     .with_axis(ParamAxis::named("c", scaled_incremental(8, 1, 5, 1.0).unwrap()));
//! let best = engine.compute_best(&image, &StandardFormParabola, &[0.0, 8.0, 16.0, 24.0]).unwrap();
//! assert_eq!(best.params, vec![0.0, 0.0, 10.0]);
//! ```

pub mod accumulator;
mod candidate;
pub mod hough;
pub mod image;
pub mod lowlevel;
pub mod mask;
pub mod shape;
pub mod space;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use image::io;

pub use accumulator::Accumulator;
pub use candidate::Candidate;
pub use hough::{Accumulation, HoughConfig, HoughEngine};
pub use image::{ImageView, OwnedImage, SampleImage};
pub use mask::{ImageBoundsMask, Mask, RegionMask};
pub use shape::{Point2, RotatedShape, Shape, StandardFormParabola, VertexFormParabola};
pub use space::{range, ParamAxis, ParamSpace};
pub use util::{HoughError, HoughResult};
