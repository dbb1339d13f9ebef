//! Error types for initials-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while drawing, configuring or encoding.
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel access outside `[0, width) x [0, height)`.
    ///
    /// Raised by every canvas accessor; rasterizers never clip, so this
    /// surfaces coordinate bugs in the calling scene.
    #[error("pixel ({x}, {y}) is out of bounds for a {width}x{height} canvas")]
    OutOfBounds {
        /// Requested x coordinate.
        x: i32,
        /// Requested y coordinate.
        y: i32,
        /// Canvas width.
        width: u32,
        /// Canvas height.
        height: u32,
    },

    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Circle radius too large for signed pixel arithmetic.
    #[error("Invalid radius: {0}")]
    InvalidRadius(u32),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// PNG decoding error.
    #[error("PNG decoding error: {0}")]
    PngDecoding(#[from] png::DecodingError),

    /// Decoded image is not 8-bit RGB.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration or scene could not be serialized.
    #[error("configuration serialization error: {0}")]
    ConfigSerialize(String),
}
