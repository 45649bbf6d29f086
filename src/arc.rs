//! Circle/ellipse arc rasterization.
//!
//! Arcs are drawn as a polyline over the parametric curve
//! `(x + rx*cos(theta), y - ry*sin(theta))`, sampled at an angle step
//! derived from the smaller radius so adjacent samples land roughly two
//! pixels apart. Subpixel arcs are out of scope; the polyline character is
//! intentional.

use crate::line::draw_line;
use crate::pixel_writer::PixelWriter;

/// Draw the arc of an axis-aligned ellipse centered at (x, y).
///
/// Angles are radians, counterclockwise, measured from the positive x
/// axis. The sampling step is `asin(2 / min_radius)` clamped to at least
/// 0.05 (or a whole radian for vanishing radii); the final segment may
/// overshoot `angle_stop` by up to one step.
pub fn draw_arc(
    pw: &mut PixelWriter,
    x: i32,
    y: i32,
    radius_x: i32,
    radius_y: i32,
    angle_start: f64,
    angle_stop: f64,
    color: u32,
) {
    let min_radius = radius_x.min(radius_y) as f64;
    let mut a_step = if min_radius < 1.0e-4 {
        1.0
    } else {
        (2.0 / min_radius).asin()
    };
    if a_step < 0.05 {
        a_step = 0.05;
    }

    let rx = radius_x as f64;
    let ry = radius_y as f64;
    let mut x_last = (x as f64 + angle_start.cos() * rx) as i32;
    let mut y_last = (y as f64 - angle_start.sin() * ry) as i32;

    let mut a = angle_start + a_step;
    while a <= angle_stop {
        let x_next = (x as f64 + a.cos() * rx) as i32;
        let y_next = (y as f64 - a.sin() * ry) as i32;
        draw_line(pw, x_last, y_last, x_next, y_next, color);
        x_last = x_next;
        y_last = y_next;
        a += a_step;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_format::PixelFormat;
    use crate::surface::Surface;

    const COLOR: u32 = 0xFF00_00AA;
    const PI: f64 = std::f64::consts::PI;

    fn drawn(w: i32, h: i32, f: impl FnOnce(&mut PixelWriter)) -> Vec<(i32, i32)> {
        let mut buf = vec![0u8; (w * h * 4) as usize];
        let mut surf = Surface::new(&mut buf, w, h, (w * 4) as usize, PixelFormat::rgba32())
            .unwrap();
        let mut pw = PixelWriter::new(&mut surf);
        f(&mut pw);
        let mut out = Vec::new();
        for y in 0..h {
            for x in 0..w {
                if surf.peek(x, y) == COLOR {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_quarter_arc_stays_in_top_right() {
        let px = drawn(30, 30, |pw| {
            draw_arc(pw, 14, 14, 10, 10, 0.0, PI / 2.0, COLOR)
        });
        assert!(!px.is_empty());
        assert!(px.iter().all(|&(x, y)| x >= 14 && y <= 14), "{px:?}");
        // Both ends of the quarter are reached
        assert!(px.contains(&(24, 14)));
        assert!(px.iter().any(|&(x, _)| x == 14 || x == 15));
    }

    #[test]
    fn test_full_sweep_stays_near_the_ring() {
        let px = drawn(40, 40, |pw| {
            draw_arc(pw, 20, 20, 12, 12, 0.0, 2.0 * PI, COLOR)
        });
        for &(x, y) in &px {
            let d = (((x - 20).pow(2) + (y - 20).pow(2)) as f64).sqrt();
            assert!((d - 12.0).abs() < 2.0, "({x},{y}) at distance {d}");
        }
    }

    #[test]
    fn test_elliptical_arc_respects_both_radii() {
        let px = drawn(40, 40, |pw| {
            draw_arc(pw, 20, 20, 15, 6, 0.0, 2.0 * PI, COLOR)
        });
        let max_dx = px.iter().map(|p| (p.0 - 20).abs()).max().unwrap();
        let max_dy = px.iter().map(|p| (p.1 - 20).abs()).max().unwrap();
        assert!(max_dx > 12 && max_dx <= 15);
        assert!(max_dy <= 6);
    }

    #[test]
    fn test_tiny_radius_draws_nothing() {
        // asin(2/r) is undefined below r = 2; the sweep never starts
        let px = drawn(10, 10, |pw| draw_arc(pw, 5, 5, 1, 1, 0.0, 2.0 * PI, COLOR));
        assert!(px.is_empty());
    }

    #[test]
    fn test_zero_length_sweep_draws_nothing() {
        let px = drawn(30, 30, |pw| draw_arc(pw, 15, 15, 10, 10, 1.0, 1.0, COLOR));
        assert!(px.is_empty());
    }
}
