//! RGB pixel canvas.
//!
//! A tightly packed, row-major buffer of 8-bit RGB triples. Every accessor
//! checks bounds and returns [`Error::OutOfBounds`] instead of clipping, so a
//! scene that draws outside the canvas fails loudly.

use crate::color::Rgb;
use crate::error::{Error, Result};

/// Bytes per pixel (R, G, B).
const CHANNELS: usize = 3;

/// Mutable RGB pixel grid that all rasterizers draw into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGB pixels in row-major order, no row padding.
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas with every pixel set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use initials_raster::canvas::Canvas;
    /// use initials_raster::color::Rgb;
    ///
    /// let canvas = Canvas::new(600, 600, Rgb::WHITE).unwrap();
    /// assert_eq!(canvas.get_pixel(599, 599).unwrap(), Rgb::WHITE);
    /// ```
    pub fn new(width: u32, height: u32, fill: Rgb) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let mut canvas = Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * CHANNELS],
        };
        canvas.clear(fill);
        Ok(canvas)
    }

    /// Wrap an existing row-major RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or the buffer length does not
    /// match `width * height * 3`.
    pub fn from_rgb_bytes(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0
            || height == 0
            || pixels.len() != (width as usize) * (height as usize) * CHANNELS
        {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Raw row-major RGB bytes, ready for an 8-bit RGB encoder.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let row_bytes = (self.width as usize) * CHANNELS;
        let start = (y as usize) * row_bytes;
        Some(&self.pixels[start..start + row_bytes])
    }

    /// Set every pixel to `color`.
    pub fn clear(&mut self, color: Rgb) {
        let rgb = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&rgb);
        }
    }

    /// Whether `(x, y)` addresses a pixel of this canvas.
    #[must_use]
    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Read the color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the canvas.
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Rgb> {
        let idx = self.pixel_index(x, y)?;
        Ok(Rgb::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
        ))
    }

    /// Write `color` at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the canvas.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) -> Result<()> {
        let idx = self.pixel_index(x, y)?;
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&color.to_array());
        Ok(())
    }

    /// Count the pixels that hold exactly `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgb) -> usize {
        let rgb = color.to_array();
        self.pixels
            .chunks_exact(CHANNELS)
            .filter(|chunk| *chunk == rgb)
            .count()
    }

    /// Fail with [`Error::OutOfBounds`] unless `(x, y)` is inside the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the canvas.
    #[inline]
    pub fn ensure_in_bounds(&self, x: i32, y: i32) -> Result<()> {
        if self.is_in_bounds(x, y) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: i32, y: i32) -> Result<usize> {
        self.ensure_in_bounds(x, y)?;
        Ok(((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS)
    }
}
