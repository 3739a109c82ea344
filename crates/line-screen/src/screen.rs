//! Fixed screen constants and the resolution-derived line pitch.

use crate::{LineScreenError, Result};

/// Halftone screen frequency in lines per inch.
pub const LINES_PER_INCH: u32 = 8;

/// Rotation of the line set relative to the canvas x axis, in degrees.
pub const SCREEN_ANGLE_DEG: f64 = -30.0;

/// Number of fine samples per coarse step after smoothing.
pub const FINE_SUBDIVISION: f64 = 4.0;

/// Resolution-dependent screen parameters shared by every pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenParams {
    dpi: u32,
    spacing: f64,
    angle_rad: f64,
}

impl ScreenParams {
    /// Build the screen for an output resolution.
    pub fn new(dpi: u32) -> Result<Self> {
        if dpi == 0 {
            return Err(LineScreenError::InvalidDpi(dpi));
        }
        Ok(Self {
            dpi,
            spacing: f64::from(dpi) / f64::from(LINES_PER_INCH),
            angle_rad: SCREEN_ANGLE_DEG.to_radians(),
        })
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Perpendicular distance between neighbouring lines, in pixels.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Widest possible stroke. Equal to the pitch, so black fills solid.
    pub fn max_width(&self) -> f64 {
        self.spacing
    }

    /// Distance between coarse samples along a line.
    pub fn coarse_step(&self) -> f64 {
        self.spacing
    }

    /// Distance between fine samples along a line.
    pub fn fine_step(&self) -> f64 {
        self.spacing / FINE_SUBDIVISION
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_rad
    }
}
