//! Line-screen halftone engine.
//!
//! Converts a grayscale brightness grid into a bi-level raster made of
//! parallel, rotated strokes whose local width follows local darkness.
//! Each line runs through a fixed pipeline: sample coarse widths, smooth
//! them with a natural cubic spline, build a variable-width strip and fill
//! it into a shared canvas.

pub mod canvas;
pub mod geometry;
pub mod grid;
pub mod pipeline;
pub mod polygon;
pub mod raster;
pub mod sampler;
pub mod schedule;
pub mod screen;
pub mod smoother;
pub mod spline;

// Re-exports for convenience
pub use canvas::Canvas;
pub use geometry::Point;
pub use grid::PixelGrid;
pub use pipeline::{LineOutcome, RenderStats, render, render_sequential};
pub use polygon::Polygon;
pub use sampler::WidthProfile;
pub use schedule::{Line, LineScheduler};
pub use screen::{LINES_PER_INCH, SCREEN_ANGLE_DEG, ScreenParams};
pub use smoother::Smoothed;
pub use spline::CubicSpline;

/// Errors that can occur while setting up a halftone render.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LineScreenError {
    #[error("Invalid resolution: dpi must be positive, got {0}")]
    InvalidDpi(u32),

    #[error("Invalid canvas dimensions {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("Pixel data length mismatch: expected {expected}, got {actual}")]
    GridLength { expected: usize, actual: usize },

    #[error("Spline knots and values differ in length ({knots} vs {values})")]
    SplineLength { knots: usize, values: usize },

    #[error("Spline needs at least 2 knots, got {0}")]
    SplineTooFewKnots(usize),

    #[error("Spline knots must be strictly increasing (index {0})")]
    SplineKnotOrder(usize),
}

/// Result type alias for line-screen operations.
pub type Result<T> = std::result::Result<T, LineScreenError>;
