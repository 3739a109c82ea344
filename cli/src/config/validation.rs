//! Option value validation.

use std::path::Path;

use image::ImageFormat;

use super::defaults::{GRAY_LIMIT, MAX_DPI};

pub fn validate_gamma(value: f64) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err("must be a positive number".into());
    }
    Ok(())
}

pub fn validate_dpi(value: u32) -> Result<(), String> {
    if !(1..=MAX_DPI).contains(&value) {
        return Err(format!("must be between 1 and {MAX_DPI}"));
    }
    Ok(())
}

pub fn validate_width_mm(value: f64) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err("must be a positive length in millimetres".into());
    }
    Ok(())
}

/// Gray levels must fit in 8 bits. Returns the value as `u8`.
pub fn validate_gray(value: i32) -> Result<u8, String> {
    if !(0..=GRAY_LIMIT).contains(&value) {
        return Err(format!("must be between 0 and {GRAY_LIMIT}"));
    }
    Ok(value as u8)
}

/// The output format follows the extension, which must name a format the
/// encoder can write.
pub fn validate_output(path: &Path) -> Result<(), String> {
    match ImageFormat::from_path(path) {
        Ok(format) if format.writing_enabled() => Ok(()),
        Ok(format) => Err(format!("format {format:?} cannot be written")),
        Err(_) => Err("must end in a known image extension (.png, .tif, ...)".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma() {
        assert!(validate_gamma(1.0).is_ok());
        assert!(validate_gamma(0.2).is_ok());
        assert!(validate_gamma(0.0).is_err());
        assert!(validate_gamma(-2.0).is_err());
        assert!(validate_gamma(f64::INFINITY).is_err());
        assert!(validate_gamma(f64::NAN).is_err());
    }

    #[test]
    fn test_dpi() {
        assert!(validate_dpi(300).is_ok());
        assert!(validate_dpi(1).is_ok());
        assert!(validate_dpi(0).is_err());
        assert!(validate_dpi(MAX_DPI + 1).is_err());
    }

    #[test]
    fn test_width() {
        assert!(validate_width_mm(1500.0).is_ok());
        assert!(validate_width_mm(0.0).is_err());
        assert!(validate_width_mm(f64::NAN).is_err());
    }

    #[test]
    fn test_gray() {
        assert_eq!(validate_gray(0), Ok(0));
        assert_eq!(validate_gray(255), Ok(255));
        assert!(validate_gray(-1).is_err());
        assert!(validate_gray(256).is_err());
    }

    #[test]
    fn test_output_extension() {
        assert!(validate_output(Path::new("output.png")).is_ok());
        assert!(validate_output(Path::new("dir/OUT.PNG")).is_ok());
        assert!(validate_output(Path::new("print.tif")).is_ok());
        assert!(validate_output(Path::new("print.tiff")).is_ok());
        assert!(validate_output(Path::new("output.bmp")).is_ok());
        assert!(validate_output(Path::new("output.xyz")).is_err());
        assert!(validate_output(Path::new("output")).is_err());
    }
}
