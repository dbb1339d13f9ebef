//! Integer line rasterization.

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::Point;

/// Draw a segment from `p1` to `p2` using integer Bresenham stepping.
///
/// Endpoints are normalized so that x never decreases from start to end,
/// which leaves four stepping regimes:
///
/// 1. y increasing, `dy <= dx`: step x, accumulate error for y.
/// 2. y increasing, `dx < dy`: step y, accumulate error for x.
/// 3. y decreasing, `|dy| <= dx`: as (1) with y decrementing.
/// 4. y decreasing, `dx < |dy|`: as (2) with y decrementing.
///
/// Both endpoints are always written and every major-axis step writes
/// exactly one pixel. A zero-length segment writes its single point.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] for the first endpoint outside the
/// canvas. Nothing is drawn in that case; a segment whose endpoints are both
/// inside never leaves the canvas.
pub fn draw_line(canvas: &mut Canvas, p1: Point, p2: Point, color: Rgb) -> Result<()> {
    // Reversed segments are drawn from the other end.
    let (p1, p2) = if p2.x < p1.x { (p2, p1) } else { (p1, p2) };

    canvas.ensure_in_bounds(p1.x, p1.y)?;
    canvas.ensure_in_bounds(p2.x, p2.y)?;

    // Both endpoints are non-negative, so neither difference can overflow.
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    if dy >= 0 {
        if dy <= dx {
            step_x_major(canvas, p1, dx, dy, 1, color)
        } else {
            step_y_major(canvas, p1, dy, dx, 1, color)
        }
    } else if -dy <= dx {
        step_x_major(canvas, p1, dx, -dy, -1, color)
    } else {
        step_y_major(canvas, p1, -dy, dx, -1, color)
    }
}

/// Regimes 1 and 3: x advances every step, y moves by `y_step` when the
/// accumulator exceeds the threshold.
fn step_x_major(
    canvas: &mut Canvas,
    start: Point,
    dx: i32,
    dy_abs: i32,
    y_step: i32,
    color: Rgb,
) -> Result<()> {
    // Widened: 2 * delta overflows i32 for spans past i32::MAX / 2
    let m = 2 * i64::from(dy_abs);
    let threshold = i64::from(dx);
    let mut b = 0i64;
    let mut y = start.y;

    canvas.set_pixel(start.x, start.y, color)?;
    for x in (start.x + 1)..=(start.x + dx) {
        b += m;
        if b > threshold {
            y += y_step;
            b -= 2 * threshold;
        }
        canvas.set_pixel(x, y, color)?;
    }
    Ok(())
}

/// Regimes 2 and 4: y advances by `y_step` every step, x increments when
/// the accumulator exceeds the threshold.
fn step_y_major(
    canvas: &mut Canvas,
    start: Point,
    dy_abs: i32,
    dx: i32,
    y_step: i32,
    color: Rgb,
) -> Result<()> {
    let m = 2 * i64::from(dx);
    let threshold = i64::from(dy_abs);
    let mut b = 0i64;
    let mut x = start.x;

    canvas.set_pixel(start.x, start.y, color)?;
    for k in 1..=dy_abs {
        b += m;
        if b > threshold {
            x += 1;
            b -= 2 * threshold;
        }
        canvas.set_pixel(x, start.y + k * y_step, color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn blank(size: u32) -> Canvas {
        Canvas::new(size, size, Rgb::WHITE).expect("canvas creation should succeed")
    }

    fn painted(canvas: &Canvas, color: Rgb) -> HashSet<(i32, i32)> {
        let mut set = HashSet::new();
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.get_pixel(x, y).unwrap() == color {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    #[test]
    fn test_horizontal_line_exact_pixels() {
        let mut canvas = blank(10);
        draw_line(&mut canvas, Point::new(0, 0), Point::new(4, 0), Rgb::RED).unwrap();

        let expected: HashSet<_> = (0..=4).map(|x| (x, 0)).collect();
        assert_eq!(painted(&canvas, Rgb::RED), expected);
        assert_eq!(canvas.count_color(Rgb::WHITE), 95);
    }

    #[test]
    fn test_diagonal_line_exact_pixels() {
        let mut canvas = blank(10);
        draw_line(&mut canvas, Point::new(0, 0), Point::new(4, 4), Rgb::RED).unwrap();

        let expected: HashSet<_> = (0..=4).map(|i| (i, i)).collect();
        assert_eq!(painted(&canvas, Rgb::RED), expected);
    }

    #[test]
    fn test_shallow_line_pixels() {
        let mut canvas = blank(10);
        draw_line(&mut canvas, Point::new(0, 0), Point::new(4, 2), Rgb::RED).unwrap();

        // m = 4, P = 4: y steps only once the accumulator exceeds 4
        let expected: HashSet<_> = [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)].into_iter().collect();
        assert_eq!(painted(&canvas, Rgb::RED), expected);
    }

    #[test]
    fn test_steep_line_pixels() {
        let mut canvas = blank(10);
        draw_line(&mut canvas, Point::new(0, 0), Point::new(2, 4), Rgb::RED).unwrap();

        let expected: HashSet<_> = [(0, 0), (0, 1), (1, 2), (1, 3), (2, 4)].into_iter().collect();
        assert_eq!(painted(&canvas, Rgb::RED), expected);
    }

    #[test]
    fn test_rising_lines_mirror_falling_lines() {
        let mut down = blank(10);
        let mut up = blank(10);
        draw_line(&mut down, Point::new(0, 0), Point::new(7, 3), Rgb::RED).unwrap();
        draw_line(&mut up, Point::new(0, 9), Point::new(7, 6), Rgb::RED).unwrap();

        let mirrored: HashSet<_> = painted(&down, Rgb::RED)
            .into_iter()
            .map(|(x, y)| (x, 9 - y))
            .collect();
        assert_eq!(painted(&up, Rgb::RED), mirrored);

        let mut down = blank(10);
        let mut up = blank(10);
        draw_line(&mut down, Point::new(1, 0), Point::new(3, 8), Rgb::RED).unwrap();
        draw_line(&mut up, Point::new(1, 9), Point::new(3, 1), Rgb::RED).unwrap();
        let mirrored: HashSet<_> = painted(&down, Rgb::RED)
            .into_iter()
            .map(|(x, y)| (x, 9 - y))
            .collect();
        assert_eq!(painted(&up, Rgb::RED), mirrored);
    }

    #[test]
    fn test_vertical_lines_both_directions() {
        let mut canvas = blank(10);
        draw_line(&mut canvas, Point::new(2, 1), Point::new(2, 6), Rgb::RED).unwrap();
        draw_line(&mut canvas, Point::new(5, 6), Point::new(5, 1), Rgb::BLUE).unwrap();

        let red: HashSet<_> = (1..=6).map(|y| (2, y)).collect();
        let blue: HashSet<_> = (1..=6).map(|y| (5, y)).collect();
        assert_eq!(painted(&canvas, Rgb::RED), red);
        assert_eq!(painted(&canvas, Rgb::BLUE), blue);
    }

    #[test]
    fn test_reversed_segment_matches_forward() {
        let mut forward = blank(20);
        let mut reversed = blank(20);
        draw_line(&mut forward, Point::new(2, 3), Point::new(17, 11), Rgb::RED).unwrap();
        draw_line(&mut reversed, Point::new(17, 11), Point::new(2, 3), Rgb::RED).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_single_point_segment() {
        let mut canvas = blank(5);
        draw_line(&mut canvas, Point::new(3, 3), Point::new(3, 3), Rgb::RED).unwrap();
        assert_eq!(painted(&canvas, Rgb::RED), HashSet::from([(3, 3)]));
    }

    #[test]
    fn test_out_of_bounds_endpoint_is_an_error() {
        let mut canvas = blank(10);
        let err = draw_line(&mut canvas, Point::new(0, 0), Point::new(10, 0), Rgb::RED);
        assert!(matches!(err, Err(Error::OutOfBounds { x: 10, y: 0, .. })));
    }

    #[test]
    fn test_extreme_endpoints_are_errors() {
        let mut canvas = blank(10);

        let err = draw_line(&mut canvas, Point::new(i32::MIN, 0), Point::new(i32::MAX, 0), Rgb::RED);
        assert!(matches!(err, Err(Error::OutOfBounds { x: i32::MIN, y: 0, .. })));

        let err = draw_line(&mut canvas, Point::new(0, i32::MAX), Point::new(1, i32::MIN), Rgb::RED);
        assert!(matches!(err, Err(Error::OutOfBounds { x: 0, y: i32::MAX, .. })));

        let err = draw_line(&mut canvas, Point::new(2, 2), Point::new(i32::MAX, i32::MIN), Rgb::RED);
        assert!(matches!(err, Err(Error::OutOfBounds { x: i32::MAX, .. })));

        assert_eq!(canvas.count_color(Rgb::WHITE), 100);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// Endpoints are set and the pixel count equals the major-axis length + 1
        #[test]
        fn prop_line_covers_endpoints_once_per_step(
            x0 in 0i32..32, y0 in 0i32..32, x1 in 0i32..32, y1 in 0i32..32
        ) {
            let mut canvas = blank(32);
            draw_line(&mut canvas, Point::new(x0, y0), Point::new(x1, y1), Rgb::RED).unwrap();

            prop_assert_eq!(canvas.get_pixel(x0, y0).unwrap(), Rgb::RED);
            prop_assert_eq!(canvas.get_pixel(x1, y1).unwrap(), Rgb::RED);

            let major = (x1 - x0).abs().max((y1 - y0).abs()) as usize;
            prop_assert_eq!(canvas.count_color(Rgb::RED), major + 1);
        }

        /// Consecutive pixels along the major axis are 8-connected
        #[test]
        fn prop_line_is_connected(
            x0 in 0i32..32, y0 in 0i32..32, x1 in 0i32..32, y1 in 0i32..32
        ) {
            let mut canvas = blank(32);
            draw_line(&mut canvas, Point::new(x0, y0), Point::new(x1, y1), Rgb::RED).unwrap();

            let pixels = painted(&canvas, Rgb::RED);
            for &(x, y) in &pixels {
                if pixels.len() == 1 {
                    break;
                }
                let has_neighbor = (-1..=1)
                    .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
                    .filter(|&d| d != (0, 0))
                    .any(|(dx, dy)| pixels.contains(&(x + dx, y + dy)));
                prop_assert!(has_neighbor, "pixel ({}, {}) is isolated", x, y);
            }
        }
    }
}
