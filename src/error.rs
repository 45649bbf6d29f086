//! Error type for surface construction and drawing.

/// Errors surfaced by [`Surface`](crate::Surface) construction and by the
/// drawing primitives.
///
/// Degenerate-but-valid inputs (negative width, radius below 1, geometry
/// entirely outside the clip rect) are NOT errors; those calls succeed and
/// return a zero-size rect at the primitive's anchor point.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// The surface stores pixels at a depth the rasterizer cannot address.
    #[error("unsupported surface bit depth ({bytes_per_pixel} bytes per pixel) for drawing")]
    UnsupportedDepth { bytes_per_pixel: usize },

    /// The buffer/pitch/dimensions handed to `Surface::new` disagree.
    #[error("invalid surface geometry: {0}")]
    BadSurface(&'static str),

    /// A point-list primitive was given fewer points than it requires.
    #[error("points argument must contain {required} or more points, got {given}")]
    TooFewPoints { required: usize, given: usize },

    /// The surface lock could not be acquired.
    #[error("error locking surface")]
    LockFailed,

    /// The surface lock could not be released after drawing.
    #[error("error unlocking surface")]
    UnlockFailed,

    /// A scratch buffer allocation failed.
    #[error("cannot allocate working memory for drawing")]
    OutOfMemory,
}
