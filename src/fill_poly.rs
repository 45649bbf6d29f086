//! Scanline polygon fill.
//!
//! Even-odd fill: each scanline collects the x coordinates where it crosses
//! a polygon edge, sorts them, and fills between successive pairs. Edges
//! are half-open at the bottom so shared vertices count once, with the
//! lowest scanline special-cased so the bottom edge still participates. A
//! final pass redraws interior horizontal edges, which the crossing rule
//! cannot see and which otherwise leave one-pixel gaps in some concave
//! polygons.

use crate::error::DrawError;
use crate::line::draw_line;
use crate::pixel_writer::PixelWriter;

/// Fill the polygon described by parallel x/y vertex arrays.
///
/// The caller guarantees at least three vertices. The scratch intersection
/// buffer is allocated fallibly and released before returning on every
/// path.
pub fn draw_fillpoly(
    pw: &mut PixelWriter,
    point_x: &[i32],
    point_y: &[i32],
    color: u32,
) -> Result<(), DrawError> {
    let num_points = point_x.len();
    debug_assert_eq!(num_points, point_y.len());
    debug_assert!(num_points >= 3);

    let mut x_intersect: Vec<i32> = Vec::new();
    x_intersect
        .try_reserve_exact(num_points)
        .map_err(|_| DrawError::OutOfMemory)?;

    let miny = *point_y.iter().min().unwrap_or(&0);
    let maxy = *point_y.iter().max().unwrap_or(&0);

    if miny == maxy {
        // Polygon is one scanline high
        let minx = *point_x.iter().min().unwrap_or(&0);
        let maxx = *point_x.iter().max().unwrap_or(&0);
        draw_line(pw, minx, miny, maxx, miny, color);
        return Ok(());
    }

    for y in miny..=maxy {
        x_intersect.clear();
        for i in 0..num_points {
            let i_previous = if i > 0 { i - 1 } else { num_points - 1 };

            let (x1, y1, x2, y2);
            if point_y[i_previous] < point_y[i] {
                x1 = point_x[i_previous];
                y1 = point_y[i_previous];
                x2 = point_x[i];
                y2 = point_y[i];
            } else if point_y[i_previous] > point_y[i] {
                x1 = point_x[i];
                y1 = point_y[i];
                x2 = point_x[i_previous];
                y2 = point_y[i_previous];
            } else {
                // Horizontal edge, handled by the fixup pass below
                continue;
            }
            if (y >= y1 && y < y2) || (y == maxy && y2 == maxy) {
                x_intersect.push((y - y1) * (x2 - x1) / (y2 - y1) + x1);
            }
        }
        x_intersect.sort_unstable();

        for pair in x_intersect.chunks_exact(2) {
            draw_line(pw, pair[0], y, pair[1], y, color);
        }
    }

    // Interior horizontal border lines
    for i in 0..num_points {
        let i_previous = if i > 0 { i - 1 } else { num_points - 1 };
        let y = point_y[i];

        if miny < y && point_y[i_previous] == y && y < maxy {
            draw_line(pw, point_x[i], y, point_x[i_previous], y, color);
        }
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

    const COLOR: u32 = 0xFF99_0000;

    fn drawn(w: i32, h: i32, vx: &[i32], vy: &[i32]) -> Vec<(i32, i32)> {
        let mut buf = vec![0u8; (w * h * 4) as usize];
        let mut surf = Surface::new(&mut buf, w, h, (w * 4) as usize, PixelFormat::rgba32())
            .unwrap();
        let mut pw = PixelWriter::new(&mut surf);
        draw_fillpoly(&mut pw, vx, vy, COLOR).unwrap();
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
    fn test_square_fills_inclusive_bounds() {
        let px = drawn(10, 10, &[1, 8, 8, 1], &[1, 1, 8, 8]);
        assert_eq!(px.len(), 64);
        for y in 1..=8 {
            for x in 1..=8 {
                assert!(px.contains(&(x, y)), "missing ({x},{y})");
            }
        }
    }

    #[test]
    fn test_triangle_fill() {
        let px = drawn(12, 12, &[5, 9, 1], &[1, 9, 9]);
        assert!(px.contains(&(5, 1)));
        assert!(px.contains(&(5, 5)));
        // Outside the slanted edges
        assert!(!px.contains(&(1, 2)));
        assert!(!px.contains(&(9, 2)));
        // Every row between the apex and base is a solid span
        for y in 1..=9 {
            let xs: Vec<i32> = px.iter().filter(|p| p.1 == y).map(|p| p.0).collect();
            assert!(!xs.is_empty(), "row {y} empty");
            let (lo, hi) = (*xs.iter().min().unwrap(), *xs.iter().max().unwrap());
            assert_eq!(xs.len() as i32, hi - lo + 1, "row {y} has holes");
        }
    }

    #[test]
    fn test_flat_polygon_collapses_to_line() {
        let px = drawn(10, 5, &[2, 7, 4], &[3, 3, 3]);
        assert_eq!(px, (2..=7).map(|x| (x, 3)).collect::<Vec<_>>());
    }

    #[test]
    fn test_concave_horizontal_edge_is_filled() {
        // A U-turned shape whose interior horizontal edge at y=4 is a
        // bottom border between the two prongs.
        let vx = [1, 8, 8, 6, 6, 3, 3, 1];
        let vy = [1, 1, 8, 8, 4, 4, 8, 8];
        let px = drawn(10, 10, &vx, &vy);
        for x in 3..=6 {
            assert!(px.contains(&(x, 4)), "gap at ({x},4)");
        }
        // The notch below the crossbar stays empty
        assert!(!px.contains(&(4, 6)));
        assert!(!px.contains(&(5, 7)));
    }

    #[test]
    fn test_shared_vertex_rows_counted_once() {
        // Diamond: apex vertices must not double-count and break pairing
        let px = drawn(12, 12, &[5, 9, 5, 1], &[1, 5, 9, 5]);
        assert!(px.contains(&(5, 1)));
        assert!(px.contains(&(5, 5)));
        assert!(px.contains(&(5, 9)));
        assert!(!px.contains(&(1, 1)));
    }
}
