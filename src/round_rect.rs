//! Rounded rectangle rasterization.
//!
//! Corner radii resolve against the general radius (negative means "use the
//! general one") and are uniformly rescaled when two corners on any side
//! would overlap. Filled mode decomposes the body into an 8-vertex polygon
//! whose segments end where the corner arcs begin, then draws the four
//! corner quadrants; stroked mode draws four thick edges centered inside
//! the rect plus four stroked quadrants. A side fully consumed by its
//! corner radii degenerates to a `width`-pixel patch instead of a
//! zero-length line.

use crate::circle::{draw_circle_quadrants, Quadrants};
use crate::error::DrawError;
use crate::fill_poly::draw_fillpoly;
use crate::line::draw_thick_line;
use crate::pixel_writer::PixelWriter;

/// Per-corner radius overrides for [`draw_round_rect`]; negative values
/// fall back to the general radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerRadii {
    pub top_left: i32,
    pub top_right: i32,
    pub bottom_left: i32,
    pub bottom_right: i32,
}

impl Default for CornerRadii {
    fn default() -> Self {
        Self {
            top_left: -1,
            top_right: -1,
            bottom_left: -1,
            bottom_right: -1,
        }
    }
}

/// Draw a rounded rectangle over the inclusive pixel box (x1, y1)-(x2, y2).
///
/// `width == 0` fills the shape; otherwise the outline is `width` pixels
/// thick.
#[allow(clippy::too_many_arguments)]
pub fn draw_round_rect(
    pw: &mut PixelWriter,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    radius: i32,
    width: i32,
    color: u32,
    corners: CornerRadii,
) -> Result<(), DrawError> {
    let mut top_left = if corners.top_left < 0 {
        radius
    } else {
        corners.top_left
    };
    let mut top_right = if corners.top_right < 0 {
        radius
    } else {
        corners.top_right
    };
    let mut bottom_left = if corners.bottom_left < 0 {
        radius
    } else {
        corners.bottom_left
    };
    let mut bottom_right = if corners.bottom_right < 0 {
        radius
    } else {
        corners.bottom_right
    };

    // Shrink all four radii by the worst side overflow so adjacent corners
    // never overlap.
    if (top_left + top_right) > (x2 - x1 + 1)
        || (bottom_left + bottom_right) > (x2 - x1 + 1)
        || (top_left + bottom_left) > (y2 - y1 + 1)
        || (top_right + bottom_right) > (y2 - y1 + 1)
    {
        let q_top = (x2 - x1 + 1) as f32 / (top_left + top_right) as f32;
        let q_left = (y2 - y1 + 1) as f32 / (top_left + bottom_left) as f32;
        let q_bottom = (x2 - x1 + 1) as f32 / (bottom_left + bottom_right) as f32;
        let q_right = (y2 - y1 + 1) as f32 / (top_right + bottom_right) as f32;
        let f = q_top.min(q_left).min(q_bottom).min(q_right);
        top_left = (top_left as f32 * f) as i32;
        top_right = (top_right as f32 * f) as i32;
        bottom_left = (bottom_left as f32 * f) as i32;
        bottom_right = (bottom_right as f32 * f) as i32;
    }

    if width == 0 {
        let vx = [
            x1,
            x1 + top_left,
            x2 - top_right,
            x2,
            x2,
            x2 - bottom_right,
            x1 + bottom_left,
            x1,
        ];
        let vy = [
            y1 + top_left,
            y1,
            y1,
            y1 + top_right,
            y2 - bottom_right,
            y2,
            y2,
            y2 - bottom_left,
        ];
        draw_fillpoly(pw, &vx, &vy, color)?;
        draw_circle_quadrants(
            pw,
            x2 - top_right + 1,
            y1 + top_right,
            top_right,
            0,
            Quadrants {
                top_right: true,
                ..Default::default()
            },
            color,
        );
        draw_circle_quadrants(
            pw,
            x1 + top_left,
            y1 + top_left,
            top_left,
            0,
            Quadrants {
                top_left: true,
                ..Default::default()
            },
            color,
        );
        draw_circle_quadrants(
            pw,
            x1 + bottom_left,
            y2 - bottom_left + 1,
            bottom_left,
            0,
            Quadrants {
                bottom_left: true,
                ..Default::default()
            },
            color,
        );
        draw_circle_quadrants(
            pw,
            x2 - bottom_right + 1,
            y2 - bottom_right + 1,
            bottom_right,
            0,
            Quadrants {
                bottom_right: true,
                ..Default::default()
            },
            color,
        );
    } else {
        // Edge strokes sit inside the outer rect; the half-width offset is
        // parity-compensated so even widths do not spill past it.
        let inset = width / 2 - 1 + width % 2;

        // Top
        if x2 - top_right == x1 + top_left {
            for i in 0..width {
                pw.set_at(x1 + top_left, y1 + i, color);
            }
        } else {
            draw_thick_line(
                pw,
                x1 + top_left,
                y1 + inset,
                x2 - top_right,
                y1 + inset,
                width,
                color,
            );
        }
        // Left
        if y2 - bottom_left == y1 + top_left {
            for i in 0..width {
                pw.set_at(x1 + i, y1 + top_left, color);
            }
        } else {
            draw_thick_line(
                pw,
                x1 + inset,
                y1 + top_left,
                x1 + inset,
                y2 - bottom_left,
                width,
                color,
            );
        }
        // Bottom
        if x2 - bottom_right == x1 + bottom_left {
            for i in 0..width {
                pw.set_at(x1 + bottom_left, y2 - i, color);
            }
        } else {
            draw_thick_line(
                pw,
                x1 + bottom_left,
                y2 - width / 2,
                x2 - bottom_right,
                y2 - width / 2,
                width,
                color,
            );
        }
        // Right
        if y2 - bottom_right == y1 + top_right {
            for i in 0..width {
                pw.set_at(x2 - i, y1 + top_right, color);
            }
        } else {
            draw_thick_line(
                pw,
                x2 - width / 2,
                y1 + top_right,
                x2 - width / 2,
                y2 - bottom_right,
                width,
                color,
            );
        }

        draw_circle_quadrants(
            pw,
            x2 - top_right + 1,
            y1 + top_right,
            top_right,
            width,
            Quadrants {
                top_right: true,
                ..Default::default()
            },
            color,
        );
        draw_circle_quadrants(
            pw,
            x1 + top_left,
            y1 + top_left,
            top_left,
            width,
            Quadrants {
                top_left: true,
                ..Default::default()
            },
            color,
        );
        draw_circle_quadrants(
            pw,
            x1 + bottom_left,
            y2 - bottom_left + 1,
            bottom_left,
            width,
            Quadrants {
                bottom_left: true,
                ..Default::default()
            },
            color,
        );
        draw_circle_quadrants(
            pw,
            x2 - bottom_right + 1,
            y2 - bottom_right + 1,
            bottom_right,
            width,
            Quadrants {
                bottom_right: true,
                ..Default::default()
            },
            color,
        );
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_format::PixelFormat;
    use crate::surface::Surface;

    const COLOR: u32 = 0xFF11_2233;

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
    fn test_filled_clips_the_corners() {
        let px = drawn(10, 10, |pw| {
            draw_round_rect(pw, 0, 0, 9, 9, 3, 0, COLOR, CornerRadii::default()).unwrap()
        });
        assert!(px.contains(&(5, 5)));
        assert!(!px.contains(&(0, 0)));
        assert!(!px.contains(&(9, 0)));
        assert!(!px.contains(&(0, 9)));
        assert!(!px.contains(&(9, 9)));
        // Straight edge midpoints are present
        assert!(px.contains(&(5, 0)));
        assert!(px.contains(&(0, 5)));
        assert!(px.contains(&(9, 5)));
        assert!(px.contains(&(5, 9)));
    }

    #[test]
    fn test_stroked_is_hollow() {
        let px = drawn(16, 16, |pw| {
            draw_round_rect(pw, 1, 1, 14, 14, 4, 2, COLOR, CornerRadii::default()).unwrap()
        });
        assert!(!px.contains(&(8, 8)));
        assert!(px.contains(&(8, 1)));
        assert!(px.contains(&(1, 8)));
        assert!(px.contains(&(14, 8)));
        assert!(px.contains(&(8, 14)));
        assert!(!px.contains(&(1, 1)));
    }

    #[test]
    fn test_oversized_radius_is_rescaled() {
        // Radii bigger than the rect collapse toward a disk without panicking
        let px = drawn(12, 12, |pw| {
            draw_round_rect(pw, 1, 1, 10, 10, 50, 0, COLOR, CornerRadii::default()).unwrap()
        });
        assert!(px.contains(&(5, 5)));
        assert!(!px.contains(&(1, 1)));
        assert!(!px.contains(&(10, 10)));
    }

    #[test]
    fn test_per_corner_overrides() {
        let corners = CornerRadii {
            top_left: 4,
            top_right: 0,
            bottom_left: 0,
            bottom_right: 0,
        };
        let px = drawn(12, 12, |pw| {
            draw_round_rect(pw, 0, 0, 11, 11, 0, 0, COLOR, corners).unwrap()
        });
        // Only the top-left corner is rounded away
        assert!(!px.contains(&(0, 0)));
        assert!(px.contains(&(11, 0)));
        assert!(px.contains(&(0, 11)));
        assert!(px.contains(&(11, 11)));
    }

    #[test]
    fn test_radius_eating_whole_side_paints_patch() {
        // The top corners meet in the middle (x2 - x1 == 2 * radius), so the
        // top edge degenerates to a width-tall patch instead of a line.
        let px = drawn(16, 20, |pw| {
            draw_round_rect(pw, 2, 2, 12, 17, 5, 2, COLOR, CornerRadii::default()).unwrap()
        });
        assert!(px.contains(&(7, 2)));
        assert!(px.contains(&(7, 3)));
        // Left edge midpoint present, interior hollow
        assert!(px.contains(&(2, 10)));
        assert!(!px.contains(&(7, 10)));
    }
}
