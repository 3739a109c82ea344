//! Image preparation for line-screen halftoning.
//!
//! Provides grayscale decoding, physical-size resizing (Lanczos3) and
//! tone-curve adjustment (autoscale, gamma, gray range) ahead of the
//! halftone engine.

pub mod load;
pub mod resize;
pub mod tone;

// Re-exports for convenience
pub use load::{brightness_values, load_grayscale};
pub use resize::{OutputSize, output_size, resize_to_output, target_pixels};
pub use tone::{ToneCurve, ToneReport};

/// Millimetres per inch, for physical size conversions.
pub const MM_PER_INCH: f64 = 25.4;

/// Errors that can occur while preparing an image.
#[derive(Debug, thiserror::Error)]
pub enum ImageProcessorError {
    #[error("Failed to read image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Invalid gamma {0}: must be a positive finite number")]
    InvalidGamma(f64),

    #[error("Invalid physical size {width_mm} mm at {dpi} dpi")]
    InvalidPhysicalSize { width_mm: f64, dpi: u32 },
}

/// Result type alias for image-processor operations.
pub type Result<T> = std::result::Result<T, ImageProcessorError>;
