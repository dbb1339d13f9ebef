//! Midpoint circle rasterization.

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Draw a circle outline using the integer midpoint algorithm.
///
/// Starts at offset `(0, radius)` with decision variable `f = 5 - 4r`. Each
/// step increments the horizontal offset `i`; when `f > 0` the vertical
/// offset `j` shrinks and `f += 8i - 8j + 20`, otherwise `f += 8i + 12`.
/// Every offset is reflected into all eight octants. The loop ends once
/// `i` reaches `j`.
///
/// # Errors
///
/// Returns [`Error::InvalidRadius`] if `radius` exceeds `i32::MAX / 8`, and
/// [`Error::OutOfBounds`] if the circle does not fit inside the canvas.
/// Nothing is drawn in either case.
pub fn draw_circle(canvas: &mut Canvas, center: Point, radius: u32, color: Rgb) -> Result<()> {
    // 8 * j must not overflow in the decision update
    let r = i32::try_from(radius)
        .ok()
        .filter(|r| *r <= i32::MAX / 8)
        .ok_or(Error::InvalidRadius(radius))?;

    ensure_fits(canvas, center, r)?;

    let mut i = 0;
    let mut j = r;
    let mut f = 5 - 4 * r;

    plot_octants(canvas, center, i, j, color)?;
    while i < j {
        if f > 0 {
            f += 8 * i - 8 * j + 20;
            j -= 1;
        } else {
            f += 8 * i + 12;
        }
        i += 1;
        plot_octants(canvas, center, i, j, color)?;
    }
    Ok(())
}

/// Check the four extreme points `center ± r`; every reflected offset lies
/// between them, so no later coordinate can overflow or leave the canvas.
fn ensure_fits(canvas: &Canvas, center: Point, r: i32) -> Result<()> {
    for (dx, dy) in [(r, 0), (-r, 0), (0, r), (0, -r)] {
        match (center.x.checked_add(dx), center.y.checked_add(dy)) {
            (Some(x), Some(y)) => canvas.ensure_in_bounds(x, y)?,
            _ => {
                return Err(Error::OutOfBounds {
                    x: center.x.saturating_add(dx),
                    y: center.y.saturating_add(dy),
                    width: canvas.width(),
                    height: canvas.height(),
                })
            }
        }
    }
    Ok(())
}

/// Plot the eight reflections of offset `(x, y)` around `center`.
#[inline]
fn plot_octants(canvas: &mut Canvas, center: Point, x: i32, y: i32, color: Rgb) -> Result<()> {
    let Point { x: cx, y: cy } = center;
    for (px, py) in [
        (cx + x, cy + y),
        (cx + y, cy + x),
        (cx + x, cy - y),
        (cx + y, cy - x),
        (cx - x, cy + y),
        (cx - y, cy + x),
        (cx - x, cy - y),
        (cx - y, cy - x),
    ] {
        canvas.set_pixel(px, py, color)?;
    }
    Ok(())
}
