//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::output::ImageSink;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// PNG encoder for canvas output: 8-bit RGB, non-interlaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl PngEncoder {
    /// Write a canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        // The encoder flushes the BufWriter after the trailer, so a failed
        // final write surfaces here.
        Self::write(canvas, BufWriter::new(file))?;
        crate::info!(
            "png",
            "wrote {}x{} image to {}",
            canvas.width(),
            canvas.height(),
            path.display()
        );
        Ok(())
    }

    /// Encode a canvas to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(canvas: &Canvas) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::write(canvas, &mut buffer)?;
        Ok(buffer)
    }

    /// Decode an 8-bit RGB PNG file into a canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid PNG, or
    /// is not 8-bit RGB.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Canvas> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Decode 8-bit RGB PNG bytes into a canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid 8-bit RGB PNG.
    pub fn from_bytes(bytes: &[u8]) -> Result<Canvas> {
        Self::read(bytes)
    }

    fn write<W: Write>(canvas: &Canvas, w: W) -> Result<()> {
        let mut encoder = png::Encoder::new(w, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(canvas.as_bytes())?;
        writer.finish()?;
        Ok(())
    }

    fn read<R: Read>(r: R) -> Result<Canvas> {
        let mut reader = png::Decoder::new(r).read_info()?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;

        if info.color_type != png::ColorType::Rgb || info.bit_depth != png::BitDepth::Eight {
            return Err(Error::UnsupportedFormat(format!(
                "{:?} at {:?}, expected 8-bit RGB",
                info.color_type, info.bit_depth
            )));
        }

        buf.truncate(info.buffer_size());
        Canvas::from_rgb_bytes(info.width, info.height, buf)
    }
}

impl ImageSink for PngEncoder {
    fn encode(&self, canvas: &Canvas, path: &Path) -> Result<()> {
        Self::write_to_file(canvas, path)
    }
}
