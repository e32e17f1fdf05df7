//! Building blocks behind [`HoughEngine`](crate::HoughEngine).
//!
//! Exposed for callers that want to drive enumeration or extraction
//! themselves, e.g. to rank a hand-built accumulator or to step through the
//! parameter space without voting.

pub use crate::accumulator::Accumulator;
pub use crate::candidate::extract::extract_candidates;
pub use crate::hough::CellVotes;
pub use crate::space::odometer::{advance_indices, next_indices};
