//! Midpoint ellipse rasterization.
//!
//! Axis-aligned, centered ellipses driven by two x64 fixed-point
//! accumulators. The parity offsets `xoff`/`yoff` absorb the asymmetry of
//! even widths/heights so the ellipse fits its requested box exactly; four
//! "last value" guards suppress duplicate rows so solid mode never
//! overdraws a scanline. Degenerate extents collapse to a pixel or a
//! straight line.

use crate::line::draw_line;
use crate::pixel_writer::PixelWriter;

/// Draw an ellipse centered at (x, y) with full extents `width` x `height`.
///
/// `solid` fills the interior with horizontal spans; otherwise only the
/// four mirrored boundary points of each accepted step are written. The
/// accumulator walks one quadrant and mirrors, switching roles when the
/// ellipse is taller than wide so the step stays on the major axis.
pub fn draw_ellipse(
    pw: &mut PixelWriter,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    solid: bool,
    color: u32,
) {
    let xoff = (width & 1) ^ 1;
    let yoff = (height & 1) ^ 1;
    let rx = width >> 1;
    let mut ry = height >> 1;

    // Degenerate extents: a point or a straight line
    if rx == 0 && ry == 0 {
        pw.set_at(x, y, color);
        return;
    }
    if rx == 0 {
        draw_line(pw, x, y - ry, x, y + ry + (height & 1), color);
        return;
    }
    if ry == 0 {
        draw_line(pw, x - rx, y, x + rx + (width & 1), y, color);
        return;
    }

    ry += (solid as i32) - yoff;

    let mut oh = 0xFFFF;
    let mut oi = 0xFFFF;
    let mut oj = 0xFFFF;
    let mut ok = 0xFFFF;

    if rx >= ry {
        let mut ix = 0;
        let mut iy = rx * 64;

        loop {
            let h = (ix + 8) >> 6;
            let i = (iy + 8) >> 6;
            let j = (h * ry) / rx;
            let k = (i * ry) / rx;

            if ((ok != k) && (oj != k) && (k < ry)) || !solid {
                if solid {
                    draw_line(pw, x - h, y - k - yoff, x + h - xoff, y - k - yoff, color);
                    draw_line(pw, x - h, y + k, x + h - xoff, y + k, color);
                } else {
                    pw.set_at(x - h, y - k - yoff, color);
                    pw.set_at(x + h - xoff, y - k - yoff, color);
                    pw.set_at(x - h, y + k, color);
                    pw.set_at(x + h - xoff, y + k, color);
                }
                ok = k;
            }
            if ((oj != j) && (ok != j) && (k != j)) || !solid {
                if solid {
                    draw_line(pw, x - i, y + j, x + i - xoff, y + j, color);
                    draw_line(pw, x - i, y - j - yoff, x + i - xoff, y - j - yoff, color);
                } else {
                    pw.set_at(x - i, y + j, color);
                    pw.set_at(x + i - xoff, y + j, color);
                    pw.set_at(x - i, y - j - yoff, color);
                    pw.set_at(x + i - xoff, y - j - yoff, color);
                }
                oj = j;
            }

            ix += iy / rx;
            iy -= ix / rx;

            if i <= h {
                break;
            }
        }
    } else {
        let mut ix = 0;
        let mut iy = ry * 64;

        loop {
            let h = (ix + 8) >> 6;
            let i = (iy + 8) >> 6;
            let j = (h * rx) / ry;
            let k = (i * rx) / ry;

            if ((oi != i) && (oh != i) && (i < ry)) || !solid {
                if solid {
                    draw_line(pw, x - j, y + i, x + j - xoff, y + i, color);
                    draw_line(pw, x - j, y - i - yoff, x + j - xoff, y - i - yoff, color);
                } else {
                    pw.set_at(x - j, y + i, color);
                    pw.set_at(x + j - xoff, y + i, color);
                    pw.set_at(x - j, y - i - yoff, color);
                    pw.set_at(x + j - xoff, y - i - yoff, color);
                }
                oi = i;
            }
            if ((oh != h) && (oi != h) && (i != h)) || !solid {
                if solid {
                    draw_line(pw, x - k, y + h, x + k - xoff, y + h, color);
                    draw_line(pw, x - k, y - h - yoff, x + k - xoff, y - h - yoff, color);
                } else {
                    pw.set_at(x - k, y + h, color);
                    pw.set_at(x + k - xoff, y + h, color);
                    pw.set_at(x - k, y - h - yoff, color);
                    pw.set_at(x + k - xoff, y - h - yoff, color);
                }
                oh = h;
            }

            ix += iy / ry;
            iy -= ix / ry;

            if i <= h {
                break;
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
