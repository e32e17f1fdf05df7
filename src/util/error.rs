//! Error types for curvehough.

use thiserror::Error;

/// Result alias for curvehough operations.
pub type HoughResult<T> = std::result::Result<T, HoughError>;

/// Errors that can occur when building parameter spaces or running the transform.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HoughError {
    /// Image width or height is zero or overflows.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride is shorter than the row width.
    #[error("stride {stride} is smaller than width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Backing buffer is too short for the requested view.
    #[error("buffer too small: needed {needed} elements, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Accumulation or extraction was requested with no registered axes.
    #[error("no parameter axes registered")]
    NoAxes,
    /// A registered axis has no values.
    #[error("parameter axis {axis} is empty")]
    EmptyAxis { axis: usize },
    /// The product of axis lengths does not fit in `usize`.
    #[error("parameter space cardinality overflows usize")]
    CardinalityOverflow,
    /// The shape reads more parameters than there are registered axes.
    #[error("shape expects {required} parameters but {registered} axes are registered")]
    ShapeArity { required: usize, registered: usize },
    /// A named axis disagrees with the parameter the shape reads at that position.
    #[error("axis {index} is named `{got}` but the shape expects `{expected}`")]
    ParamNameMismatch {
        index: usize,
        expected: &'static str,
        got: String,
    },
    /// The rotation angle index overlaps a parameter of the wrapped shape.
    #[error("theta index {theta_index} collides with wrapped shape of arity {arity}")]
    InvalidThetaIndex { theta_index: usize, arity: usize },
    /// A range builder received parameters that cannot produce a sequence.
    #[error("invalid parameter range: {reason}")]
    InvalidRange { reason: &'static str },
    /// An index vector does not address the accumulator.
    #[error("index out of bounds for {context}: {index} >= {len}")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        context: &'static str,
    },
    /// A single best candidate was requested but none were extracted.
    #[error("no candidates extracted")]
    NoCandidates,
    /// Parallel accumulation was requested without the `rayon` feature.
    #[error("parallel accumulation requires the `rayon` feature")]
    ParallelUnavailable,
    /// Image decoding failed.
    #[error("image io failed: {reason}")]
    ImageIo { reason: String },
}
