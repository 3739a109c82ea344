//! Physical-size resizing for halftone output.
//!
//! The smaller image side is scaled to the pixel count of the requested
//! physical size at the output resolution; the other side keeps the aspect
//! ratio. Resampling uses Lanczos3 filtering.

use image::GrayImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::{ImageProcessorError, MM_PER_INCH, Result};

/// Output raster size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSize {
    pub width: u32,
    pub height: u32,
}

impl OutputSize {
    /// Physical size in millimetres at `dpi`.
    pub fn physical_mm(&self, dpi: u32) -> (f64, f64) {
        let scale = MM_PER_INCH / f64::from(dpi);
        (f64::from(self.width) * scale, f64::from(self.height) * scale)
    }
}

/// Pixels covering `width_mm` at `dpi`, truncated.
pub fn target_pixels(width_mm: f64, dpi: u32) -> Result<u32> {
    let invalid = || ImageProcessorError::InvalidPhysicalSize { width_mm, dpi };
    if dpi == 0 || !width_mm.is_finite() || width_mm <= 0.0 {
        return Err(invalid());
    }
    let px = (width_mm / MM_PER_INCH * f64::from(dpi)).floor();
    if px < 1.0 || px > f64::from(u32::MAX) {
        return Err(invalid());
    }
    Ok(px as u32)
}

/// Scale `src_width x src_height` so that its smaller side becomes `target`.
///
/// Square sources are treated as landscape (height becomes `target`). The
/// other side is truncated and never drops below one pixel.
pub fn output_size(src_width: u32, src_height: u32, target: u32) -> OutputSize {
    let scaled = |side: u32, smaller: u32| -> u32 {
        let v = (u64::from(side) * u64::from(target) / u64::from(smaller.max(1))).max(1);
        u32::try_from(v).unwrap_or(u32::MAX)
    };
    if src_width < src_height {
        OutputSize {
            width: target,
            height: scaled(src_height, src_width),
        }
    } else {
        OutputSize {
            width: scaled(src_width, src_height),
            height: target,
        }
    }
}

/// Resize `img` to `size` with Lanczos3 filtering.
///
/// Returns the original image unchanged if it already has that size.
pub fn resize_to_output(img: &GrayImage, size: OutputSize) -> GrayImage {
    let (orig_w, orig_h) = img.dimensions();

    if (orig_w, orig_h) == (size.width, size.height) {
        debug!(
            width = orig_w,
            height = orig_h,
            "Image already at output size, skipping resize"
        );
        return img.clone();
    }

    debug!(
        orig_w,
        orig_h,
        new_width = size.width,
        new_height = size.height,
        "Resizing image to output size"
    );

    imageops::resize(img, size.width, size.height, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn create_test_image(width: u32, height: u32) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([128]))
    }

    #[test]
    fn test_target_pixels_default_width() {
        // 1500 mm at 300 dpi = 17716.5 px
        assert_eq!(target_pixels(1500.0, 300).unwrap(), 17716);
        assert_eq!(target_pixels(25.4, 300).unwrap(), 300);
    }

    #[test]
    fn test_target_pixels_rejects_bad_input() {
        assert!(target_pixels(0.0, 300).is_err());
        assert!(target_pixels(-5.0, 300).is_err());
        assert!(target_pixels(f64::NAN, 300).is_err());
        assert!(target_pixels(100.0, 0).is_err());
        // Less than one pixel.
        assert!(target_pixels(0.01, 72).is_err());
    }

    #[test]
    fn test_output_size_portrait() {
        let size = output_size(600, 900, 400);
        assert_eq!(size, OutputSize { width: 400, height: 600 });
    }

    #[test]
    fn test_output_size_landscape() {
        let size = output_size(1920, 1080, 300);
        // 1920 * 300 / 1080 = 533.3
        assert_eq!(size, OutputSize { width: 533, height: 300 });
    }

    #[test]
    fn test_output_size_square_uses_target_for_both() {
        assert_eq!(output_size(50, 50, 80), OutputSize { width: 80, height: 80 });
    }

    #[test]
    fn test_output_size_never_zero() {
        let size = output_size(1, 1000, 1);
        assert_eq!(size.width, 1);
        assert!(size.height >= 1);
    }

    #[test]
    fn test_physical_mm() {
        let (w, h) = OutputSize { width: 300, height: 600 }.physical_mm(300);
        assert!((w - 25.4).abs() < 1e-9);
        assert!((h - 50.8).abs() < 1e-9);
    }

    #[test]
    fn test_resize_to_output_dimensions() {
        let img = create_test_image(800, 600);
        let size = output_size(800, 600, 300);
        let result = resize_to_output(&img, size);
        assert_eq!(result.dimensions(), (400, 300));
    }

    #[test]
    fn test_resize_same_size_is_unchanged() {
        let mut img = create_test_image(20, 10);
        img.put_pixel(3, 4, Luma([7]));
        let result = resize_to_output(&img, OutputSize { width: 20, height: 10 });
        assert_eq!(result, img);
    }

    #[test]
    fn test_resize_uniform_stays_uniform() {
        let img = create_test_image(64, 48);
        let result = resize_to_output(&img, output_size(64, 48, 96));
        assert_eq!(result.dimensions(), (128, 96));
        assert!(result.pixels().all(|p| p.0[0].abs_diff(128) <= 1));
    }
}
