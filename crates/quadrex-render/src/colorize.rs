//! Gradient colorization of the distance field.

use rayon::prelude::*;

use quadrex_core::{Gradient, Rgb};
use quadrex_field::DistanceField;

/// The finished square image as a row-major pixel sequence.
///
/// Pixel `i` lands at `(row = i / side, col = i % side)`; the order
/// produced by the matrix and distance stages is preserved exactly, so
/// image assembly is purely positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    side: u32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Map each cell's normalized distance through `gradient`.
    ///
    /// `norm = distance / depth`, with the degenerate depth-0 canvas
    /// defined as norm 0 — its single pixel is always the gradient's
    /// start color. Runs as an order-preserving parallel map over the
    /// same explicit row chunks as the distance stage.
    pub fn colorize(field: &DistanceField, gradient: &Gradient) -> Self {
        let side = field.side() as usize;
        let ceiling = f64::from(field.depth().get());
        let mut pixels = vec![Rgb::BLACK; field.values().len()];

        pixels
            .par_chunks_mut(side)
            .zip(field.values().par_chunks(side))
            .for_each(|(px_row, value_row)| {
                for (px, &value) in px_row.iter_mut().zip(value_row) {
                    let norm = if ceiling == 0.0 {
                        0.0
                    } else {
                        f64::from(value) / ceiling
                    };
                    *px = gradient.at(norm);
                }
            });

        Self {
            side: field.side(),
            pixels,
        }
    }

    /// Canvas side length in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the canvas.
    pub fn get(&self, row: u32, col: u32) -> Rgb {
        assert!(row < self.side && col < self.side, "pixel out of bounds");
        self.pixels[(row * self.side + col) as usize]
    }
}
