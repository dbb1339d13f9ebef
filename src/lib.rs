//! # initials-raster
//!
//! Integer raster engine that draws a fixed initials illustration into an
//! in-memory RGB canvas and hands it to an image encoder.
//!
//! The engine is three rasterizers sharing one mutable [`canvas::Canvas`]:
//! Bresenham lines, midpoint circles and a stack-based 4-connected flood
//! fill. Scenes are declarative lists of draw commands replayed in order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use initials_raster::prelude::*;
//!
//! let scene = Scene::initials();
//! let canvas = scene.render()?;
//! PngEncoder::write_to_file(&canvas, "initials.png")?;
//! # Ok::<(), initials_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `initials` command-line binary

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in raster code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Opt-in stderr debug logging.
pub mod debug;

/// RGB color type.
pub mod color;

/// RGB pixel canvas.
pub mod canvas;

/// Integer points, segments and circles.
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line, circle and flood-fill rasterization.
pub mod render;

/// Declarative scenes and the renderer that replays them.
pub mod scene;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Configuration
// ============================================================================

/// YAML configuration with environment overrides.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for initials-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use initials_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgb;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Circle, Point, Segment};
    pub use crate::output::{ImageSink, PngEncoder};
    pub use crate::render::{draw_circle, draw_line, flood_fill, Drawable, FloodFill};
    pub use crate::scene::{render_to_file, DrawCommand, Renderer, Scene};
}
