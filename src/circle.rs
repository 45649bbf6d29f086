//! Bresenham circle rasterization.
//!
//! One incremental error driver yields octant points with `x` growing from
//! 0 while `y` descends from the radius; three front-ends consume it:
//!
//! - [`draw_circle_filled`]: vertical spans per step, filling the disk.
//! - [`draw_circle_outline`]: a second driver at `radius - thickness`
//!   bounds the ring from the inside; `thickness` pixels are laid radially
//!   at each of the eight octant positions, with seam guards where octants
//!   meet.
//! - [`draw_circle_quadrants`]: the same ring, masked to a subset of
//!   quadrants, or solid vertical spans per quadrant when `thickness == 0`.
//!
//! The `x0 + x - 1` / `x0 - x` offset asymmetry keeps the circle centered
//! in a `2r x 2r` pixel box; the filled and outline variants agree exactly
//! on the outermost ring.

use crate::pixel_writer::PixelWriter;

/// Quadrant selection mask for partial circles.
///
/// All-false means "whole circle" at the drawing API level; the quadrant
/// raster itself only emits quadrants whose flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Quadrants {
    pub top_right: bool,
    pub top_left: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl Quadrants {
    /// `true` if any quadrant is selected.
    pub fn any(&self) -> bool {
        self.top_right || self.top_left || self.bottom_left || self.bottom_right
    }
}

/// Incremental circle stepper: tracks the descending `y` of the octant
/// walk while the caller advances `x` by one per step.
struct RingStepper {
    f: i32,
    ddf_x: i32,
    ddf_y: i32,
    y: i32,
}

impl RingStepper {
    fn new(radius: i32) -> Self {
        Self {
            f: 1 - radius,
            ddf_x: 0,
            ddf_y: -2 * radius,
            y: radius,
        }
    }

    fn step(&mut self) {
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.ddf_x += 2;
        self.f += self.ddf_x + 1;
    }
}

/// Fill the disk of `radius` around (x0, y0).
pub fn draw_circle_filled(pw: &mut PixelWriter, x0: i32, y0: i32, radius: i32, color: u32) {
    let mut outer = RingStepper::new(radius);
    let mut x = 0;

    while x < outer.y {
        outer.step();
        x += 1;
        let y = outer.y;

        for y1 in (y0 - x)..(y0 + x) {
            pw.set_at(x0 + y - 1, y1, color);
            pw.set_at(x0 - y, y1, color);
        }
        for y1 in (y0 - y)..(y0 + y) {
            pw.set_at(x0 + x - 1, y1, color);
            pw.set_at(x0 - x, y1, color);
        }
    }
}

/// Draw a circle outline `thickness` pixels deep.
///
/// The ring is bounded by a second stepper at `radius - thickness`; once
/// the walk starts, the per-step depth is re-derived from the gap between
/// the two steppers so the band stays closed. The four seam guards keep
/// adjacent octants from overdrawing where they meet.
pub fn draw_circle_outline(
    pw: &mut PixelWriter,
    x0: i32,
    y0: i32,
    radius: i32,
    thickness: i32,
    color: u32,
) {
    let mut thickness = thickness;
    let mut outer = RingStepper::new(radius);
    let mut inner = RingStepper::new(radius - thickness);
    let mut x = 0;

    while x < outer.y {
        outer.step();
        inner.step();
        x += 1;

        if thickness > 1 {
            thickness = outer.y - inner.y;
        }

        for i in 0..thickness {
            let y1 = outer.y - i;
            if (y0 + y1 - 1) >= (y0 + x - 1) {
                pw.set_at(x0 + x - 1, y0 + y1 - 1, color);
                pw.set_at(x0 - x, y0 + y1 - 1, color);
            }
            if (y0 - y1) <= (y0 - x) {
                pw.set_at(x0 + x - 1, y0 - y1, color);
                pw.set_at(x0 - x, y0 - y1, color);
            }
            if (x0 + y1 - 1) >= (x0 + x - 1) {
                pw.set_at(x0 + y1 - 1, y0 + x - 1, color);
                pw.set_at(x0 + y1 - 1, y0 - x, color);
            }
            if (x0 - y1) <= (x0 - x) {
                pw.set_at(x0 - y1, y0 + x - 1, color);
                pw.set_at(x0 - y1, y0 - x, color);
            }
        }
    }
}

/// Draw the selected quadrants of a circle.
///
/// `thickness == 0` fills each selected quadrant solid; otherwise the
/// quadrant carries a `thickness`-deep ring. A radius of 1 collapses to
/// the 1-4 corner pixels next to the center.
pub fn draw_circle_quadrants(
    pw: &mut PixelWriter,
    x0: i32,
    y0: i32,
    radius: i32,
    thickness: i32,
    quadrants: Quadrants,
    color: u32,
) {
    if radius == 1 {
        if quadrants.top_right {
            pw.set_at(x0, y0 - 1, color);
        }
        if quadrants.top_left {
            pw.set_at(x0 - 1, y0 - 1, color);
        }
        if quadrants.bottom_left {
            pw.set_at(x0 - 1, y0, color);
        }
        if quadrants.bottom_right {
            pw.set_at(x0, y0, color);
        }
        return;
    }

    if thickness != 0 {
        let mut thickness = thickness;
        let mut outer = RingStepper::new(radius);
        let mut inner = RingStepper::new(radius - thickness);
        let mut x = 0;

        while x < outer.y {
            outer.step();
            inner.step();
            x += 1;

            if thickness > 1 {
                thickness = outer.y - inner.y;
            }

            if quadrants.top_right {
                for i in 0..thickness {
                    let y1 = outer.y - i;
                    if (y0 - y1) < (y0 - x) {
                        pw.set_at(x0 + x - 1, y0 - y1, color);
                    }
                    if (x0 + y1 - 1) >= (x0 + x - 1) {
                        pw.set_at(x0 + y1 - 1, y0 - x, color);
                    }
                }
            }
            if quadrants.top_left {
                for i in 0..thickness {
                    let y1 = outer.y - i;
                    if (y0 - y1) <= (y0 - x) {
                        pw.set_at(x0 - x, y0 - y1, color);
                    }
                    if (x0 - y1) < (x0 - x) {
                        pw.set_at(x0 - y1, y0 - x, color);
                    }
                }
            }
            if quadrants.bottom_left {
                for i in 0..thickness {
                    let y1 = outer.y - i;
                    if (x0 - y1) <= (x0 - x) {
                        pw.set_at(x0 - y1, y0 + x - 1, color);
                    }
                    if (y0 + y1 - 1) > (y0 + x - 1) {
                        pw.set_at(x0 - x, y0 + y1 - 1, color);
                    }
                }
            }
            if quadrants.bottom_right {
                for i in 0..thickness {
                    let y1 = outer.y - i;
                    if (y0 + y1 - 1) >= (y0 + x - 1) {
                        pw.set_at(x0 + x - 1, y0 + y1 - 1, color);
                    }
                    if (x0 + y1 - 1) > (x0 + x - 1) {
                        pw.set_at(x0 + y1 - 1, y0 + x - 1, color);
                    }
                }
            }
        }
    } else {
        let mut outer = RingStepper::new(radius);
        let mut x = 0;

        while x < outer.y {
            outer.step();
            x += 1;
            let y = outer.y;

            if quadrants.top_right {
                for y1 in (y0 - x)..=y0 {
                    pw.set_at(x0 + y - 1, y1, color);
                }
                for y1 in (y0 - y)..=y0 {
                    pw.set_at(x0 + x - 1, y1, color);
                }
            }
            if quadrants.top_left {
                for y1 in (y0 - x)..=y0 {
                    pw.set_at(x0 - y, y1, color);
                }
                for y1 in (y0 - y)..=y0 {
                    pw.set_at(x0 - x, y1, color);
                }
            }
            if quadrants.bottom_left {
                for y1 in y0..(y0 + x) {
                    pw.set_at(x0 - y, y1, color);
                }
                for y1 in y0..(y0 + y) {
                    pw.set_at(x0 - x, y1, color);
                }
            }
            if quadrants.bottom_right {
                for y1 in y0..(y0 + x) {
                    pw.set_at(x0 + y - 1, y1, color);
                }
                for y1 in y0..(y0 + y) {
                    pw.set_at(x0 + x - 1, y1, color);
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
