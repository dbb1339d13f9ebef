//! Output encoders.

mod png_encoder;

pub use png_encoder::PngEncoder;

use crate::canvas::Canvas;
use crate::error::Result;
use std::path::Path;

/// Destination for a finished canvas.
///
/// Implementations serialize the row-major 8-bit RGB buffer to `path`.
/// Their failures are returned unchanged to the caller of the render routine.
pub trait ImageSink {
    /// Encode `canvas` and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is unwritable or encoding fails.
    fn encode(&self, canvas: &Canvas, path: &Path) -> Result<()>;
}
