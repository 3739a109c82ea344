//! Grayscale decoding.

use std::path::Path;

use image::GrayImage;
use tracing::debug;

use crate::{ImageProcessorError, Result};

/// Decode an image file and convert it to 8-bit luma.
pub fn load_grayscale(path: impl AsRef<Path>) -> Result<GrayImage> {
    let path = path.as_ref();
    let img = image::open(path)?.to_luma8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageProcessorError::EmptyImage { width, height });
    }
    debug!(width, height, path = %path.display(), "Loaded grayscale image");
    Ok(img)
}

/// Row-major brightness values of `img` as floats in `[0, 255]`.
pub fn brightness_values(img: &GrayImage) -> Vec<f32> {
    img.as_raw().iter().map(|&v| f32::from(v)).collect()
}
