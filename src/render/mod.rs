//! Rasterization of lines, circles and filled regions.
//!
//! All algorithms use integer arithmetic only and write straight into a
//! [`Canvas`]. Nothing is clipped: a primitive that leaves the canvas
//! returns [`crate::Error::OutOfBounds`].
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: four-regime incremental stepping
//! - **Midpoint Circle**: eight-way symmetric outline
//! - **Flood Fill**: exact-color 4-connected replacement with an explicit stack
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod circle;
mod fill;
mod line;

pub use circle::draw_circle;
pub use fill::{flood_fill, FloodFill};
pub use line::draw_line;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::{Circle, Segment};

/// Trait for shapes that can be rasterized onto a canvas.
pub trait Drawable {
    /// Draw this shape onto `canvas` in `color`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape touches a pixel outside the canvas.
    fn draw(&self, canvas: &mut Canvas, color: Rgb) -> Result<()>;
}

impl Drawable for Segment {
    fn draw(&self, canvas: &mut Canvas, color: Rgb) -> Result<()> {
        draw_line(canvas, self.start, self.end, color)
    }
}

impl Drawable for Circle {
    fn draw(&self, canvas: &mut Canvas, color: Rgb) -> Result<()> {
        draw_circle(canvas, self.center, self.radius, color)
    }
}
