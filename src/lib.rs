//! # rasterkit
//!
//! A 2D software rasterizer: pixel-exact geometric primitives drawn
//! directly into a caller-owned byte buffer.
//!
//! Primitives: lines, antialiased lines, polylines, polygons, rectangles,
//! rounded rectangles, circles (whole, ring, or per-quadrant), circle
//! arcs, and ellipses. Every call:
//!
//! - honors the surface's clip rectangle (pixels outside it are neither
//!   read nor written),
//! - returns the exact bounding rect of pixels touched (or a zero-size
//!   rect at a primitive-specific anchor when nothing was drawn),
//! - brackets the work in the surface's lock/unlock pair, releasing the
//!   lock on every exit path.
//!
//! Non-antialiased primitives use pure integer arithmetic (Bresenham
//! lines and circles, a x64 fixed-point midpoint ellipse, even-odd
//! scanline polygon fill) so results are identical across platforms; the
//! antialiased line and the arc sampler use floats.
//!
//! ## Example
//!
//! ```
//! use rasterkit::{circle, PixelFormat, PointI, Quadrants, Surface};
//!
//! let mut pixels = vec![0u8; 64 * 64 * 4];
//! let mut surf = Surface::new(&mut pixels, 64, 64, 64 * 4, PixelFormat::rgba32())?;
//! let color = surf.format().map_rgba(255, 0, 0, 255);
//! let drawn = circle(&mut surf, color, PointI::new(32, 32), 20, 0, Quadrants::default())?;
//! assert_eq!((drawn.w, drawn.h), (40, 40));
//! # Ok::<(), rasterkit::DrawError>(())
//! ```

pub mod aaline;
pub mod arc;
pub mod basics;
pub mod bounds;
pub mod circle;
pub mod draw;
pub mod ellipse;
pub mod error;
pub mod fill_poly;
pub mod line;
pub mod pixel_format;
pub mod pixel_writer;
pub mod round_rect;
pub mod surface;

pub use basics::{PointF, PointI, Rect};
pub use bounds::PixelBounds;
pub use circle::Quadrants;
pub use draw::{aaline, aalines, arc, circle, ellipse, line, lines, polygon, rect};
pub use error::DrawError;
pub use pixel_format::{ByteOrder, PixelFormat};
pub use pixel_writer::PixelWriter;
pub use round_rect::CornerRadii;
pub use surface::Surface;
