//! Bilinear point sampling at fractional coordinates.

use crate::image::{ImageView, OwnedImage};

/// A 2D grid of sample values that can be read at fractional coordinates.
///
/// The voting loop only ever asks for `width`, `height`, and bilinear samples,
/// so any raster type can vote by implementing this trait.
pub trait SampleImage: Sync {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Bilinearly interpolated value at `(x, y)`.
    ///
    /// Coordinates are clamped to the pixel-center rectangle
    /// `[0, width-1] x [0, height-1]`, so samples near the border replicate
    /// the edge. Non-finite coordinates sample as `0.0`.
    fn sample_bilinear(&self, x: f64, y: f64) -> f32;
}

impl<T> SampleImage for ImageView<'_, T>
where
    T: Copy + Into<f32> + Sync,
{
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn sample_bilinear(&self, x: f64, y: f64) -> f32 {
        if !x.is_finite() || !y.is_finite() {
            return 0.0;
        }
        let max_x = (self.width - 1) as f64;
        let max_y = (self.height - 1) as f64;
        let x = x.clamp(0.0, max_x);
        let y = y.clamp(0.0, max_y);
        let x0 = x.floor() as usize;
        let y0 = y.floor() as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let fx = (x - x0 as f64) as f32;
        let fy = (y - y0 as f64) as f32;

        // In bounds: the constructor validated (height-1)*stride + width.
        let at = |xx: usize, yy: usize| -> f32 { self.data[yy * self.stride + xx].into() };
        let a = at(x0, y0);
        let b = at(x1, y0);
        let c = at(x0, y1);
        let d = at(x1, y1);

        let top = a * (1.0 - fx) + b * fx;
        let bottom = c * (1.0 - fx) + d * fx;
        top * (1.0 - fy) + bottom * fy
    }
}

impl SampleImage for OwnedImage {
    fn width(&self) -> usize {
        OwnedImage::width(self)
    }

    fn height(&self) -> usize {
        OwnedImage::height(self)
    }

    fn sample_bilinear(&self, x: f64, y: f64) -> f32 {
        self.view().sample_bilinear(x, y)
    }
}
