//! Declarative scene composition.
//!
//! A [`Scene`] is a canvas size, a background color and an ordered list of
//! [`DrawCommand`]s. The [`Renderer`] replays the commands against one
//! canvas, so each command sees the pixels written by the ones before it.

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::Point;
use crate::output::ImageSink;
use crate::render::{draw_circle, draw_line, FloodFill};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A single drawing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Set every pixel to `color`.
    Clear {
        /// Fill color.
        color: Rgb,
    },
    /// Straight segment between two points.
    Line {
        /// First endpoint.
        from: Point,
        /// Second endpoint.
        to: Point,
        /// Stroke color.
        color: Rgb,
    },
    /// Circle outline.
    Circle {
        /// Center point.
        center: Point,
        /// Radius in pixels.
        radius: u32,
        /// Stroke color.
        color: Rgb,
    },
    /// Flood fill of the `old`-colored region around `seed`.
    Fill {
        /// Start point.
        seed: Point,
        /// Color to replace.
        old: Rgb,
        /// Replacement color.
        new: Rgb,
    },
}

/// One-line form used in render traces, e.g. `line (0, 0) -> (4, 4) #ff0000`.
impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear { color } => write!(f, "clear {color}"),
            Self::Line { from, to, color } => write!(f, "line {from} -> {to} {color}"),
            Self::Circle {
                center,
                radius,
                color,
            } => write!(f, "circle {center} r={radius} {color}"),
            Self::Fill { seed, old, new } => write!(f, "fill {seed} {old} -> {new}"),
        }
    }
}

/// Canvas size, background and draw commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Initial color of every pixel.
    #[serde(default)]
    pub background: Rgb,
    /// Commands in drawing order.
    #[serde(default)]
    pub commands: Vec<DrawCommand>,
}

/// Width and height of the initials picture.
pub const INITIALS_SIZE: u32 = 600;

/// Shift applied to every glyph segment of the initials picture.
pub const GLYPH_OFFSET: Point = Point::new(100, 130);

/// Outline of the "S" glyph, before [`GLYPH_OFFSET`].
const GLYPH_S: [((i32, i32), (i32, i32)); 8] = [
    ((10, 100), (200, 10)),
    // 191 and 189 overlap the opposite stroke so the outline closes
    ((10, 100), (180, 191)),
    ((10, 300), (180, 189)),
    ((10, 320), (10, 300)),
    ((10, 320), (210, 189)),
    ((40, 100), (210, 191)),
    ((40, 100), (200, 30)),
    ((200, 30), (200, 10)),
];

/// Outline of the "K" glyph, before [`GLYPH_OFFSET`].
const GLYPH_K: [((i32, i32), (i32, i32)); 11] = [
    ((250, 320), (250, 10)),
    ((250, 10), (270, 10)),
    ((250, 320), (270, 320)),
    ((270, 140), (270, 10)),
    ((270, 320), (270, 170)),
    ((270, 140), (350, 10)),
    ((270, 170), (350, 320)),
    ((350, 10), (370, 10)),
    ((350, 320), (370, 320)),
    ((280, 155), (370, 10)),
    ((280, 155), (370, 320)),
];

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            width,
            height,
            background,
            commands: Vec::new(),
        }
    }

    /// The fixed initials picture: a black-outlined violet disc carrying red
    /// "S" and "K" outlines filled green, on a spring-green background.
    #[must_use]
    pub fn initials() -> Self {
        let center = Point::new((INITIALS_SIZE / 2) as i32, (INITIALS_SIZE / 2) as i32);

        Self::new(INITIALS_SIZE, INITIALS_SIZE, Rgb::SPRING_GREEN)
            .circle(center, 250, Rgb::BLACK)
            .fill(center, Rgb::SPRING_GREEN, Rgb::VIOLET)
            .glyph(GLYPH_OFFSET, &GLYPH_S, Rgb::RED)
            .glyph(GLYPH_OFFSET, &GLYPH_K, Rgb::RED)
            .fill(Point::new(115, 230), Rgb::VIOLET, Rgb::GREEN)
            .fill(Point::new(355, center.y), Rgb::VIOLET, Rgb::GREEN)
    }

    /// Append a command.
    #[must_use]
    pub fn push(mut self, command: DrawCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Append a clear command.
    #[must_use]
    pub fn clear(self, color: Rgb) -> Self {
        self.push(DrawCommand::Clear { color })
    }

    /// Append a line command.
    #[must_use]
    pub fn line(self, from: Point, to: Point, color: Rgb) -> Self {
        self.push(DrawCommand::Line { from, to, color })
    }

    /// Append a circle command.
    #[must_use]
    pub fn circle(self, center: Point, radius: u32, color: Rgb) -> Self {
        self.push(DrawCommand::Circle {
            center,
            radius,
            color,
        })
    }

    /// Append a flood fill command.
    #[must_use]
    pub fn fill(self, seed: Point, old: Rgb, new: Rgb) -> Self {
        self.push(DrawCommand::Fill { seed, old, new })
    }

    /// Append one line command per segment, each shifted by `offset`.
    #[must_use]
    pub fn glyph(mut self, offset: Point, segments: &[((i32, i32), (i32, i32))], color: Rgb) -> Self {
        self.commands.extend(segments.iter().map(|&(from, to)| DrawCommand::Line {
            from: Point::from(from).offset(offset.x, offset.y),
            to: Point::from(to).offset(offset.x, offset.y),
            color,
        }));
        self
    }

    /// Render with a fresh [`Renderer`].
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas size is invalid or a command touches a
    /// pixel outside the canvas.
    pub fn render(&self) -> Result<Canvas> {
        Renderer::new().render(self)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::initials()
    }
}

/// Replays scenes onto canvases, reusing the flood-fill work-list.
#[derive(Debug, Default)]
pub struct Renderer {
    filler: FloodFill,
}

impl Renderer {
    /// Create a renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a canvas for `scene` and apply every command in order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by canvas creation or a command.
    pub fn render(&mut self, scene: &Scene) -> Result<Canvas> {
        crate::time_scope!("render", format!("{} commands", scene.commands.len()));

        let mut canvas = Canvas::new(scene.width, scene.height, scene.background)?;
        for (idx, command) in scene.commands.iter().enumerate() {
            crate::trace!("render", "#{idx} {command}");
            self.apply(&mut canvas, command)?;
        }
        Ok(canvas)
    }

    /// Apply one command to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command touches a pixel outside the canvas.
    pub fn apply(&mut self, canvas: &mut Canvas, command: &DrawCommand) -> Result<()> {
        match *command {
            DrawCommand::Clear { color } => {
                canvas.clear(color);
                Ok(())
            }
            DrawCommand::Line { from, to, color } => draw_line(canvas, from, to, color),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => draw_circle(canvas, center, radius, color),
            DrawCommand::Fill { seed, old, new } => {
                self.filler.fill(canvas, seed, old, new).map(|_| ())
            }
        }
    }
}

/// Render `scene` and hand the canvas to `sink` for writing to `path`.
///
/// # Errors
///
/// Returns drawing errors, or the sink's error unchanged.
pub fn render_to_file<S: ImageSink + ?Sized>(scene: &Scene, path: &Path, sink: &S) -> Result<Canvas> {
    let canvas = scene.render()?;
    sink.encode(&canvas, path)?;
    Ok(canvas)
}
