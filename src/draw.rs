//! Drawing primitives — the public surface of the crate.
//!
//! One function per primitive. Every call follows the same contract:
//! validate arguments, short-circuit trivially empty geometry to a
//! zero-size rect at the primitive's anchor, lock the surface, rasterize,
//! unlock (also on error paths), and return the bounding rect of the
//! pixels actually written. Pixels outside the surface clip rect are never
//! read or written, and never contribute to the returned rect.

use crate::aaline::draw_aaline;
use crate::arc::draw_arc;
use crate::basics::{PointF, PointI, Rect};
use crate::bounds::PixelBounds;
use crate::circle::{draw_circle_filled, draw_circle_outline, draw_circle_quadrants, Quadrants};
use crate::ellipse::draw_ellipse;
use crate::error::DrawError;
use crate::fill_poly::draw_fillpoly;
use crate::line::draw_thick_line;
use crate::pixel_writer::PixelWriter;
use crate::round_rect::{draw_round_rect, CornerRadii};
use crate::surface::Surface;

const TAU: f64 = 2.0 * std::f64::consts::PI;

fn with_lock<F>(surf: &mut Surface<'_>, f: F) -> Result<(PixelBounds, Result<(), DrawError>), DrawError>
where
    F: FnOnce(&mut PixelWriter) -> Result<(), DrawError>,
{
    if !surf.lock() {
        return Err(DrawError::LockFailed);
    }
    let mut pw = PixelWriter::new(surf);
    let result = f(&mut pw);
    let bounds = *pw.bounds();
    drop(pw);
    if !surf.unlock() {
        return Err(DrawError::UnlockFailed);
    }
    Ok((bounds, result))
}

/// Draw a straight line segment `width` pixels thick (default 1).
///
/// `width < 1` draws nothing and returns a zero-size rect at `start`.
pub fn line(
    surf: &mut Surface<'_>,
    color: u32,
    start: PointI,
    end: PointI,
    width: i32,
) -> Result<Rect, DrawError> {
    tracing::trace!(?start, ?end, width, "line");
    if width < 1 {
        return Ok(Rect::empty_at(start.x, start.y));
    }
    let (bounds, result) = with_lock(surf, |pw| {
        draw_thick_line(pw, start.x, start.y, end.x, end.y, width, color);
        Ok(())
    })?;
    result?;
    Ok(bounds.to_rect(start.x, start.y))
}

/// Draw an antialiased line segment between float endpoints.
///
/// With `blend` (the default) coverage mixes the color into the existing
/// destination pixels; without it the color is merely scaled by coverage.
pub fn aaline(
    surf: &mut Surface<'_>,
    color: u32,
    start: PointF,
    end: PointF,
    blend: bool,
) -> Result<Rect, DrawError> {
    tracing::trace!(?start, ?end, blend, "aaline");
    let (bounds, result) = with_lock(surf, |pw| {
        draw_aaline(pw, color, start.x, start.y, end.x, end.y, blend);
        Ok(())
    })?;
    result?;
    Ok(bounds.to_rect(start.x as i32, start.y as i32))
}

/// Draw a connected sequence of line segments through `points`.
///
/// With `closed`, and more than two points, the last point connects back
/// to the first. Requires at least two points; `width < 1` (default 1)
/// draws nothing.
pub fn lines(
    surf: &mut Surface<'_>,
    color: u32,
    closed: bool,
    points: &[PointI],
    width: i32,
) -> Result<Rect, DrawError> {
    tracing::trace!(n = points.len(), closed, width, "lines");
    if points.len() < 2 {
        return Err(DrawError::TooFewPoints {
            required: 2,
            given: points.len(),
        });
    }
    let anchor = points[0];
    if width < 1 {
        return Ok(Rect::empty_at(anchor.x, anchor.y));
    }
    let (bounds, result) = with_lock(surf, |pw| {
        for pair in points.windows(2) {
            draw_thick_line(pw, pair[0].x, pair[0].y, pair[1].x, pair[1].y, width, color);
        }
        if closed && points.len() > 2 {
            let last = points[points.len() - 1];
            let first = points[0];
            draw_thick_line(pw, last.x, last.y, first.x, first.y, width, color);
        }
        Ok(())
    })?;
    result?;
    Ok(bounds.to_rect(anchor.x, anchor.y))
}

/// Draw a connected sequence of antialiased line segments.
///
/// Same point-count and closing rules as [`lines`].
pub fn aalines(
    surf: &mut Surface<'_>,
    color: u32,
    closed: bool,
    points: &[PointF],
    blend: bool,
) -> Result<Rect, DrawError> {
    tracing::trace!(n = points.len(), closed, blend, "aalines");
    if points.len() < 2 {
        return Err(DrawError::TooFewPoints {
            required: 2,
            given: points.len(),
        });
    }
    let anchor = points[0];
    let (bounds, result) = with_lock(surf, |pw| {
        for pair in points.windows(2) {
            draw_aaline(pw, color, pair[0].x, pair[0].y, pair[1].x, pair[1].y, blend);
        }
        if closed && points.len() > 2 {
            let last = points[points.len() - 1];
            let first = points[0];
            draw_aaline(pw, color, last.x, last.y, first.x, first.y, blend);
        }
        Ok(())
    })?;
    result?;
    Ok(bounds.to_rect(anchor.x as i32, anchor.y as i32))
}

/// Draw an elliptical arc inside `rect` from `angle_start` to `angle_stop`
/// (radians, counterclockwise from the positive x axis).
///
/// A stop angle behind the start angle is advanced by a full turn. Thick
/// arcs are nested single-pixel arcs at shrinking radii; `width` (default
/// 1) is clamped to half the smaller rect extent, and `width < 0` draws
/// nothing.
pub fn arc(
    surf: &mut Surface<'_>,
    color: u32,
    rect: Rect,
    angle_start: f64,
    angle_stop: f64,
    width: i32,
) -> Result<Rect, DrawError> {
    tracing::trace!(?rect, angle_start, angle_stop, width, "arc");
    if width < 0 {
        return Ok(Rect::empty_at(rect.x, rect.y));
    }
    let mut width = width;
    if width > rect.w / 2 || width > rect.h / 2 {
        width = rect.w.max(rect.h) / 2;
    }
    let mut angle_stop = angle_stop;
    if angle_stop < angle_start {
        angle_stop += TAU;
    }
    let (bounds, result) = with_lock(surf, |pw| {
        let width = width.min(rect.w.min(rect.h) / 2);
        for k in 0..width {
            draw_arc(
                pw,
                rect.x + rect.w / 2,
                rect.y + rect.h / 2,
                rect.w / 2 - k,
                rect.h / 2 - k,
                angle_start,
                angle_stop,
                color,
            );
        }
        Ok(())
    })?;
    result?;
    Ok(bounds.to_rect(rect.x, rect.y))
}

/// Draw an ellipse inscribed in `rect`.
///
/// `width == 0` (the default) fills the ellipse; a positive width draws
/// that many nested outlines, clamped to half the smaller rect extent.
/// `width < 0` draws nothing.
pub fn ellipse(
    surf: &mut Surface<'_>,
    color: u32,
    rect: Rect,
    width: i32,
) -> Result<Rect, DrawError> {
    tracing::trace!(?rect, width, "ellipse");
    if width < 0 {
        return Ok(Rect::empty_at(rect.x, rect.y));
    }
    let mut width = width;
    if width > rect.w / 2 || width > rect.h / 2 {
        width = rect.w.max(rect.h) / 2;
    }
    let (bounds, result) = with_lock(surf, |pw| {
        let cx = rect.x + rect.w / 2;
        let cy = rect.y + rect.h / 2;
        if width == 0 {
            draw_ellipse(pw, cx, cy, rect.w, rect.h, true, color);
        } else {
            let width = width.min(rect.w.min(rect.h) / 2);
            for k in 0..width {
                draw_ellipse(pw, cx, cy, rect.w - k, rect.h - k, false, color);
            }
        }
        Ok(())
    })?;
    result?;
    Ok(bounds.to_rect(rect.x, rect.y))
}

/// Draw a circle around `center`.
///
/// `width == 0` (the default) or `width == radius` fills the disk; other
/// positive widths draw a ring that deep. Selecting any quadrant restricts
/// drawing to the selected quadrants. `radius < 1` or `width < 0` draws
/// nothing and anchors the empty rect at the center.
pub fn circle(
    surf: &mut Surface<'_>,
    color: u32,
    center: PointI,
    radius: i32,
    width: i32,
    quadrants: Quadrants,
) -> Result<Rect, DrawError> {
    tracing::trace!(?center, radius, width, "circle");
    if radius < 1 || width < 0 {
        return Ok(Rect::empty_at(center.x, center.y));
    }
    let width = width.min(radius);
    let (bounds, result) = with_lock(surf, |pw| {
        if !quadrants.any() {
            if width == 0 || width == radius {
                draw_circle_filled(pw, center.x, center.y, radius, color);
            } else {
                draw_circle_outline(pw, center.x, center.y, radius, width, color);
            }
        } else {
            draw_circle_quadrants(pw, center.x, center.y, radius, width, quadrants, color);
        }
        Ok(())
    })?;
    result?;
    Ok(bounds.to_rect(center.x, center.y))
}

/// Draw a polygon through `points`.
///
/// `width == 0` (the default) fills via even-odd scanlines; a positive
/// width is exactly [`lines`] with `closed = true`. Filling requires at
/// least three points.
pub fn polygon(
    surf: &mut Surface<'_>,
    color: u32,
    points: &[PointI],
    width: i32,
) -> Result<Rect, DrawError> {
    if width > 0 {
        return lines(surf, color, true, points, width);
    }
    tracing::trace!(n = points.len(), "polygon");
    if points.len() < 3 {
        return Err(DrawError::TooFewPoints {
            required: 3,
            given: points.len(),
        });
    }
    let anchor = points[0];

    let mut xs: Vec<i32> = Vec::new();
    let mut ys: Vec<i32> = Vec::new();
    xs.try_reserve_exact(points.len())
        .map_err(|_| DrawError::OutOfMemory)?;
    ys.try_reserve_exact(points.len())
        .map_err(|_| DrawError::OutOfMemory)?;
    for p in points {
        xs.push(p.x);
        ys.push(p.y);
    }

    let (bounds, result) = with_lock(surf, |pw| draw_fillpoly(pw, &xs, &ys, color))?;
    result?;
    Ok(bounds.to_rect(anchor.x, anchor.y))
}

/// Draw a rectangle, optionally with rounded corners.
///
/// `width == 0` (the default) fills; a positive width strokes the border.
/// With no positive radius anywhere this is exactly a four-corner
/// [`polygon`]; otherwise corner radii (per-corner values default to the
/// general `border_radius`) round the corners. `width < 0` draws nothing.
pub fn rect(
    surf: &mut Surface<'_>,
    color: u32,
    rect: Rect,
    width: i32,
    border_radius: i32,
    corners: CornerRadii,
) -> Result<Rect, DrawError> {
    tracing::trace!(?rect, width, border_radius, "rect");
    if width < 0 {
        return Ok(Rect::empty_at(rect.x, rect.y));
    }
    let mut width = width;
    if width > rect.w / 2 || width > rect.h / 2 {
        width = rect.w.max(rect.h) / 2;
    }

    if border_radius <= 0
        && corners.top_left <= 0
        && corners.top_right <= 0
        && corners.bottom_left <= 0
        && corners.bottom_right <= 0
    {
        let l = rect.x;
        let r = rect.x + rect.w - 1;
        let t = rect.y;
        let b = rect.y + rect.h - 1;
        let pts = [
            PointI::new(l, t),
            PointI::new(r, t),
            PointI::new(r, b),
            PointI::new(l, b),
        ];
        return polygon(surf, color, &pts, width);
    }

    let (bounds, result) = with_lock(surf, |pw| {
        draw_round_rect(
            pw,
            rect.x,
            rect.y,
            rect.x + rect.w - 1,
            rect.y + rect.h - 1,
            border_radius,
            width,
            color,
            corners,
        )
    })?;
    result?;
    Ok(bounds.to_rect(rect.x, rect.y))
}

// ============================================================================
// Tests
// ============================================================================
