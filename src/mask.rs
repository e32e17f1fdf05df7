//! Voting masks: predicates over rounded pixel coordinates.

/// Decides whether a rounded image coordinate may contribute a vote.
pub trait Mask: Sync {
    fn can_vote(&self, x: i32, y: i32) -> bool;
}

impl<F> Mask for F
where
    F: Fn(i32, i32) -> bool + Sync,
{
    fn can_vote(&self, x: i32, y: i32) -> bool {
        self(x, y)
    }
}

/// Half-open image rectangle `[0, cols) x [0, rows)`.
///
/// The engine falls back to this mask when none is supplied, so no vote ever
/// reads outside the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageBoundsMask {
    rows: usize,
    cols: usize,
}

impl ImageBoundsMask {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl Mask for ImageBoundsMask {
    fn can_vote(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }
}

/// Half-open rectangular region of interest `[x0, x1) x [y0, y1)`.
///
/// Typical use is restricting an eyelid search to the band above or below
/// the iris. Combine with the image size via [`RegionMask::clipped_to`] to
/// keep the out-of-bounds guarantee of the default mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionMask {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl RegionMask {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Intersects the region with `[0, cols) x [0, rows)`.
    pub fn clipped_to(self, rows: usize, cols: usize) -> Self {
        let rows = i32::try_from(rows).unwrap_or(i32::MAX);
        let cols = i32::try_from(cols).unwrap_or(i32::MAX);
        Self {
            x0: self.x0.max(0),
            y0: self.y0.max(0),
            x1: self.x1.min(cols),
            y1: self.y1.min(rows),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }
}

impl Mask for RegionMask {
    fn can_vote(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}
