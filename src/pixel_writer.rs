//! Clip-aware pixel writer and antialiased color sampler.
//!
//! [`PixelWriter`] is the single funnel every rasterizer writes through: it
//! performs the clip test, stores the pixel in the surface's format, and
//! grows the bounding-box accumulator. Keeping the clip test here means no
//! rasterizer has to reason about the clip rect at all.

use crate::bounds::PixelBounds;
use crate::surface::Surface;

/// Couples a surface with the bounding box of pixels written so far.
pub struct PixelWriter<'s, 'a> {
    surf: &'s mut Surface<'a>,
    bounds: PixelBounds,
}

impl<'s, 'a> PixelWriter<'s, 'a> {
    pub fn new(surf: &'s mut Surface<'a>) -> Self {
        Self {
            surf,
            bounds: PixelBounds::new(),
        }
    }

    /// Store `color` at (x, y) if the pixel is inside the clip rect.
    ///
    /// Returns `true` iff the pixel was written; on `true` the bounding box
    /// has been extended to cover it. Outside the clip rect this is a
    /// no-op.
    #[inline]
    pub fn set_at(&mut self, x: i32, y: i32, color: u32) -> bool {
        if !self.surf.clip().contains(x, y) {
            return false;
        }
        self.surf.poke(x, y, color);
        self.bounds.add(x, y);
        true
    }

    /// Compute the color to store for an antialiased pixel with coverage
    /// `brightness` in `[0, 1]`.
    ///
    /// With `blend` set, the destination pixel at (x, y) is read back and
    /// each channel interpolated toward it; a destination outside the clip
    /// rect returns the source color unchanged (the following `set_at`
    /// drops it anyway, and the clip rect must never be read through
    /// either). Without `blend` the source channels are simply scaled,
    /// darkening against black instead of compositing.
    pub fn aa_color(&self, x: i32, y: i32, color: u32, brightness: f32, blend: bool) -> u32 {
        let fmt = *self.surf.format();
        let src = fmt.get_rgba(color);
        let mixed: [u8; 4];
        if blend {
            if !self.surf.clip().contains(x, y) {
                return color;
            }
            let dst = fmt.get_rgba(self.surf.peek(x, y));
            let lerp = |s: u8, d: u8| {
                (brightness * s as f32 + (1.0 - brightness) * d as f32).round() as u8
            };
            mixed = [
                lerp(src[0], dst[0]),
                lerp(src[1], dst[1]),
                lerp(src[2], dst[2]),
                lerp(src[3], dst[3]),
            ];
        } else {
            mixed = [
                (brightness * src[0] as f32) as u8,
                (brightness * src[1] as f32) as u8,
                (brightness * src[2] as f32) as u8,
                (brightness * src[3] as f32) as u8,
            ];
        }
        fmt.map_rgba(mixed[0], mixed[1], mixed[2], mixed[3])
    }

    /// Bounding box of the pixels written through this writer.
    pub fn bounds(&self) -> &PixelBounds {
        &self.bounds
    }

    pub fn surface(&self) -> &Surface<'a> {
        self.surf
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::Rect;
    use crate::pixel_format::PixelFormat;

    fn surface(buf: &mut Vec<u8>, w: i32, h: i32) -> Surface<'_> {
        buf.resize((w * h * 4) as usize, 0);
        Surface::new(buf, w, h, (w * 4) as usize, PixelFormat::rgba32()).unwrap()
    }

    #[test]
    fn test_set_at_inside_and_outside_clip() {
        let mut buf = Vec::new();
        let mut surf = surface(&mut buf, 8, 8);
        surf.set_clip(Rect::new(2, 2, 4, 4));
        let mut pw = PixelWriter::new(&mut surf);

        assert!(pw.set_at(2, 2, 0xFF));
        assert!(pw.set_at(5, 5, 0xFF));
        assert!(!pw.set_at(1, 2, 0xFF));
        assert!(!pw.set_at(6, 2, 0xFF));
        assert!(!pw.set_at(2, 6, 0xFF));

        assert_eq!(pw.bounds().to_rect(0, 0), Rect::new(2, 2, 4, 4));
        assert_eq!(surf.peek(2, 2), 0xFF);
        assert_eq!(surf.peek(1, 2), 0);
    }

    #[test]
    fn test_bounds_untouched_by_rejected_writes() {
        let mut buf = Vec::new();
        let mut surf = surface(&mut buf, 4, 4);
        surf.set_clip(Rect::new(0, 0, 1, 1));
        let mut pw = PixelWriter::new(&mut surf);
        assert!(!pw.set_at(3, 3, 1));
        assert!(pw.bounds().is_empty());
    }

    #[test]
    fn test_aa_color_blend_interpolates() {
        let fmt = PixelFormat::rgba32();
        let mut buf = Vec::new();
        let mut surf = surface(&mut buf, 4, 4);
        let bg = fmt.map_rgba(0, 0, 0, 255);
        let red = fmt.map_rgba(255, 0, 0, 255);
        surf.poke(1, 1, bg);
        let pw = PixelWriter::new(&mut surf);

        let half = pw.aa_color(1, 1, red, 0.5, true);
        assert_eq!(fmt.get_rgba(half), [128, 0, 0, 255]);

        // Full coverage keeps the source exactly
        assert_eq!(pw.aa_color(1, 1, red, 1.0, true), red);
    }

    #[test]
    fn test_aa_color_blend_over_same_color_is_identity() {
        let fmt = PixelFormat::rgba32();
        let mut buf = Vec::new();
        let mut surf = surface(&mut buf, 4, 4);
        let red = fmt.map_rgba(255, 0, 0, 255);
        surf.poke(2, 2, red);
        let pw = PixelWriter::new(&mut surf);
        for brightness in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(pw.aa_color(2, 2, red, brightness, true), red);
        }
    }

    #[test]
    fn test_aa_color_outside_clip_returns_source() {
        let mut buf = Vec::new();
        let mut surf = surface(&mut buf, 4, 4);
        surf.set_clip(Rect::new(0, 0, 2, 2));
        let pw = PixelWriter::new(&mut surf);
        assert_eq!(pw.aa_color(3, 3, 0xDEAD_BEEF, 0.5, true), 0xDEAD_BEEF);
    }

    #[test]
    fn test_aa_color_scale_mode() {
        let fmt = PixelFormat::rgba32();
        let mut buf = Vec::new();
        let mut surf = surface(&mut buf, 4, 4);
        let c = fmt.map_rgba(200, 100, 50, 255);
        let pw = PixelWriter::new(&mut surf);
        let scaled = pw.aa_color(0, 0, c, 0.5, false);
        assert_eq!(fmt.get_rgba(scaled), [100, 50, 25, 127]);
    }
}
