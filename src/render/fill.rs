//! Stack-based 4-connected flood fill.

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::Point;

/// Flood filler with a reusable work-list.
///
/// The work-list is reserved up to the canvas area on first use and keeps
/// its capacity across calls, so repeated fills on the same canvas do not
/// reallocate. Every pixel is pushed at most once per fill, so the area is
/// the worst-case depth.
#[derive(Debug, Default)]
pub struct FloodFill {
    stack: Vec<Point>,
}

impl FloodFill {
    /// Create a filler with an empty work-list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filler pre-sized for a `width x height` canvas.
    #[must_use]
    pub fn with_capacity(width: u32, height: u32) -> Self {
        Self {
            stack: Vec::with_capacity((width as usize) * (height as usize)),
        }
    }

    /// Current work-list capacity in points.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// Replace the 4-connected region of `old` around `start` with `new`.
    ///
    /// `start` is always written. Neighbors (west, north, east, south) are
    /// recolored and pushed only while they exactly match `old`; any other
    /// color acts as a boundary. When `old == new` only `start` is written.
    ///
    /// Returns the number of pixels written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if `start` is outside the canvas.
    pub fn fill(&mut self, canvas: &mut Canvas, start: Point, old: Rgb, new: Rgb) -> Result<usize> {
        canvas.set_pixel(start.x, start.y, new)?;
        if old == new {
            crate::debug!("fill", "old and new color are equal at {start}, nothing to spread");
            return Ok(1);
        }

        let area = canvas.pixel_count();
        if self.stack.capacity() < area {
            self.stack.reserve(area - self.stack.len());
        }
        self.stack.clear();
        self.stack.push(start);

        let mut written = 1;
        while let Some(p) = self.stack.pop() {
            for n in p.neighbors() {
                if canvas.is_in_bounds(n.x, n.y) && canvas.get_pixel(n.x, n.y)? == old {
                    canvas.set_pixel(n.x, n.y, new)?;
                    self.stack.push(n);
                    written += 1;
                }
            }
        }

        crate::debug!("fill", "filled {written} pixels from {start}");
        Ok(written)
    }
}

/// Flood fill with a one-off work-list. See [`FloodFill::fill`].
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `start` is outside the canvas.
pub fn flood_fill(canvas: &mut Canvas, start: Point, old: Rgb, new: Rgb) -> Result<usize> {
    FloodFill::with_capacity(canvas.width(), canvas.height()).fill(canvas, start, old, new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;

    /// Canvas of `a` with a closed `b` square outline from (2,2) to (7,7).
    fn boxed(a: Rgb, b: Rgb) -> Canvas {
        let mut canvas = Canvas::new(10, 10, a).unwrap();
        for k in 2..=7 {
            canvas.set_pixel(k, 2, b).unwrap();
            canvas.set_pixel(k, 7, b).unwrap();
            canvas.set_pixel(2, k, b).unwrap();
            canvas.set_pixel(7, k, b).unwrap();
        }
        canvas
    }

    #[test]
    fn test_fill_whole_canvas() {
        let mut canvas = Canvas::new(20, 15, Rgb::WHITE).unwrap();
        let written = flood_fill(&mut canvas, Point::new(7, 7), Rgb::WHITE, Rgb::RED).unwrap();
        assert_eq!(written, 300);
        assert_eq!(canvas.count_color(Rgb::RED), 300);
    }

    #[test]
    fn test_fill_stays_inside_boundary() {
        let mut canvas = boxed(Rgb::WHITE, Rgb::BLACK);
        let before = canvas.clone();
        let written = flood_fill(&mut canvas, Point::new(4, 4), Rgb::WHITE, Rgb::RED).unwrap();

        // 4x4 interior
        assert_eq!(written, 16);
        for y in 0..10 {
            for x in 0..10 {
                let was = before.get_pixel(x, y).unwrap();
                let now = canvas.get_pixel(x, y).unwrap();
                let inside = (3..=6).contains(&x) && (3..=6).contains(&y);
                if was == Rgb::BLACK {
                    assert_eq!(now, Rgb::BLACK);
                } else if inside {
                    assert_eq!(now, Rgb::RED);
                } else {
                    assert_eq!(now, Rgb::WHITE);
                }
            }
        }
    }

    #[test]
    fn test_fill_does_not_leak_through_diagonal_gap() {
        // Diagonal staircase separates the corners under 4-connectivity
        let mut canvas = Canvas::new(4, 4, Rgb::WHITE).unwrap();
        for k in 0..4 {
            canvas.set_pixel(k, 3 - k, Rgb::BLACK).unwrap();
        }
        flood_fill(&mut canvas, Point::new(0, 0), Rgb::WHITE, Rgb::RED).unwrap();

        assert_eq!(canvas.count_color(Rgb::RED), 6);
        assert_eq!(canvas.get_pixel(3, 3).unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_second_fill_is_noop() {
        let mut canvas = boxed(Rgb::WHITE, Rgb::BLACK);
        let mut filler = FloodFill::new();
        filler.fill(&mut canvas, Point::new(4, 4), Rgb::WHITE, Rgb::RED).unwrap();
        let after_first = canvas.clone();

        let written = filler.fill(&mut canvas, Point::new(4, 4), Rgb::WHITE, Rgb::RED).unwrap();
        assert_eq!(written, 1);
        assert_eq!(canvas, after_first);
    }

    #[test]
    fn test_same_color_writes_only_seed() {
        let mut canvas = Canvas::new(10, 10, Rgb::WHITE).unwrap();
        let written = flood_fill(&mut canvas, Point::new(1, 1), Rgb::WHITE, Rgb::WHITE).unwrap();
        assert_eq!(written, 1);
        assert_eq!(canvas.count_color(Rgb::WHITE), 100);
    }

    #[test]
    fn test_seed_of_other_color_spreads_to_matching_neighbors() {
        let mut canvas = boxed(Rgb::WHITE, Rgb::BLACK);
        // Seed on the boundary: it is recolored and spreads into white on both sides
        flood_fill(&mut canvas, Point::new(2, 4), Rgb::WHITE, Rgb::RED).unwrap();
        assert_eq!(canvas.get_pixel(2, 4).unwrap(), Rgb::RED);
        assert_eq!(canvas.get_pixel(0, 0).unwrap(), Rgb::RED);
        assert_eq!(canvas.get_pixel(4, 4).unwrap(), Rgb::RED);
        assert_eq!(canvas.get_pixel(2, 2).unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_seed_out_of_bounds() {
        let mut canvas = Canvas::new(10, 10, Rgb::WHITE).unwrap();
        let result = flood_fill(&mut canvas, Point::new(10, 0), Rgb::WHITE, Rgb::RED);
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
        assert_eq!(canvas.count_color(Rgb::WHITE), 100);
    }

    #[test]
    fn test_work_list_capacity_is_reused() {
        let mut canvas = Canvas::new(30, 30, Rgb::WHITE).unwrap();
        let mut filler = FloodFill::new();
        filler.fill(&mut canvas, Point::new(0, 0), Rgb::WHITE, Rgb::RED).unwrap();
        let capacity = filler.capacity();
        assert!(capacity >= 900);

        filler.fill(&mut canvas, Point::new(0, 0), Rgb::RED, Rgb::BLUE).unwrap();
        assert_eq!(filler.capacity(), capacity);
        assert_eq!(canvas.count_color(Rgb::BLUE), 900);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Boundary pixels never change and every interior pixel is filled
        #[test]
        fn prop_fill_contained_by_rectangle(
            x0 in 0i32..10, y0 in 0i32..10, w in 2i32..10, h in 2i32..10
        ) {
            let mut canvas = Canvas::new(24, 24, Rgb::WHITE).unwrap();
            let (x1, y1) = (x0 + w + 1, y0 + h + 1);
            for x in x0..=x1 {
                canvas.set_pixel(x, y0, Rgb::BLACK).unwrap();
                canvas.set_pixel(x, y1, Rgb::BLACK).unwrap();
            }
            for y in y0..=y1 {
                canvas.set_pixel(x0, y, Rgb::BLACK).unwrap();
                canvas.set_pixel(x1, y, Rgb::BLACK).unwrap();
            }
            let boundary = canvas.count_color(Rgb::BLACK);

            let written = flood_fill(&mut canvas, Point::new(x0 + 1, y0 + 1), Rgb::WHITE, Rgb::RED)
                .unwrap();

            prop_assert_eq!(written, (w * h) as usize);
            prop_assert_eq!(canvas.count_color(Rgb::RED), (w * h) as usize);
            prop_assert_eq!(canvas.count_color(Rgb::BLACK), boundary);
        }
    }
}
