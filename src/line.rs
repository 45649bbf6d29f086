//! Integer line rasterization.
//!
//! A Bresenham line with dedicated point/horizontal/vertical fast paths,
//! plus the parallel-offset thick variant: `width` copies of the central
//! line, offset along whichever axis is minor, giving flat ends
//! perpendicular to the thickening axis. The offset-copy stroke is the
//! contract here, not a geometrically exact constant-width stroke.

use crate::pixel_writer::PixelWriter;

/// Draw a one-pixel line from (x1, y1) to (x2, y2).
///
/// Both endpoints are always written; along the major axis every column
/// (or row) gets exactly one pixel, and no pixel is visited twice.
pub fn draw_line(pw: &mut PixelWriter, x1: i32, y1: i32, x2: i32, y2: i32, color: u32) {
    // Single point
    if x1 == x2 && y1 == y2 {
        pw.set_at(x1, y1, color);
        return;
    }
    // Horizontal
    if y1 == y2 {
        let step = if x1 < x2 { 1 } else { -1 };
        for i in 0..=(x1 - x2).abs() {
            pw.set_at(x1 + step * i, y1, color);
        }
        return;
    }
    // Vertical
    if x1 == x2 {
        let step = if y1 < y2 { 1 } else { -1 };
        for i in 0..=(y1 - y2).abs() {
            pw.set_at(x1, y1 + step * i, color);
        }
        return;
    }

    let dx = (x2 - x1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let dy = (y2 - y1).abs();
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = if dx > dy { dx } else { -dy } / 2;
    let (mut x, mut y) = (x1, y1);
    while x != x2 || y != y2 {
        pw.set_at(x, y, color);
        let e2 = err;
        if e2 > -dx {
            err -= dy;
            x += sx;
        }
        if e2 < dy {
            err += dx;
            y += sy;
        }
    }
    pw.set_at(x2, y2, color);
}

/// Draw a line `width` pixels thick as parallel offset copies.
///
/// The thickening axis is the minor one: y when `|dx| > |dy|`, x otherwise
/// (ties thicken in x). Copies alternate positive then negative offsets
/// around the central line. `width` is expected to be >= 1.
pub fn draw_thick_line(
    pw: &mut PixelWriter,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    width: i32,
    color: u32,
) {
    let (xinc, yinc) = if (x1 - x2).abs() > (y1 - y2).abs() {
        (0, 1)
    } else {
        (1, 0)
    };

    draw_line(pw, x1, y1, x2, y2, color);
    if width == 1 {
        return;
    }
    let mut added = 1;
    while added < width {
        let off = added / 2 + 1;
        draw_line(
            pw,
            x1 + xinc * off,
            y1 + yinc * off,
            x2 + xinc * off,
            y2 + yinc * off,
            color,
        );
        if added + 1 < width {
            draw_line(
                pw,
                x1 - xinc * off,
                y1 - yinc * off,
                x2 - xinc * off,
                y2 - yinc * off,
                color,
            );
        }
        added += 2;
    }
}

// ============================================================================
// Tests
// ============================================================================
