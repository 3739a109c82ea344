//! Tone-curve adjustment applied before halftoning.
//!
//! Steps run in a fixed order on brightness values in `[0, 255]`:
//! 1. Autoscale: stretch the observed range to `0..255`.
//! 2. Gamma: `255 * (v / 255) ^ gamma`.
//! 3. Gray range: map `0..255` linearly onto `min_gray..max_gray`.
//!
//! Steps that would be identities are skipped.

use tracing::{debug, info};

use crate::{ImageProcessorError, Result};

/// Brightness transform settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneCurve {
    pub autoscale: bool,
    pub gamma: f64,
    /// Output brightness for source black. May exceed `max_gray` to invert.
    pub min_gray: u8,
    /// Output brightness for source white.
    pub max_gray: u8,
}

impl Default for ToneCurve {
    fn default() -> Self {
        Self {
            autoscale: false,
            gamma: 1.0,
            min_gray: 0,
            max_gray: 255,
        }
    }
}

/// Which steps ran, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ToneReport {
    /// Source range stretched by autoscale, if it ran.
    pub autoscaled: Option<(f32, f32)>,
    pub gamma_applied: bool,
    pub range_applied: bool,
}

impl ToneCurve {
    pub fn new(autoscale: bool, gamma: f64, min_gray: u8, max_gray: u8) -> Result<Self> {
        let curve = Self {
            autoscale,
            gamma,
            min_gray,
            max_gray,
        };
        curve.validate()?;
        Ok(curve)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(ImageProcessorError::InvalidGamma(self.gamma));
        }
        Ok(())
    }

    /// True when no step would change any value.
    pub fn is_identity(&self) -> bool {
        !self.autoscale && self.gamma == 1.0 && self.min_gray == 0 && self.max_gray == 255
    }

    /// Apply all enabled steps in place.
    pub fn apply(&self, values: &mut [f32]) -> Result<ToneReport> {
        self.validate()?;
        let mut report = ToneReport::default();
        if self.is_identity() {
            debug!("Tone curve is the identity, values left as decoded");
            return Ok(report);
        }

        if self.autoscale {
            report.autoscaled = autoscale(values);
            match report.autoscaled {
                Some((lo, hi)) => info!("Autoscale: {lo:.0}..{hi:.0} -> 0..255"),
                None => debug!("Autoscale skipped, image has a single tone"),
            }
        }

        if self.gamma != 1.0 {
            info!(gamma = self.gamma, "Applying gamma");
            apply_gamma(values, self.gamma);
            report.gamma_applied = true;
        }

        if self.min_gray != 0 || self.max_gray != 255 {
            info!("Gray range: {}..{}", self.min_gray, self.max_gray);
            remap_range(values, self.min_gray, self.max_gray);
            report.range_applied = true;
        }

        Ok(report)
    }
}

/// Stretch `values` so their minimum becomes 0 and maximum 255.
///
/// Returns the original `(min, max)`, or `None` (values untouched) when the
/// slice is empty or flat.
pub fn autoscale(values: &mut [f32]) -> Option<(f32, f32)> {
    let (lo, hi) = values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if values.is_empty() || hi <= lo {
        return None;
    }
    let range = f64::from(hi - lo);
    for v in values.iter_mut() {
        *v = (f64::from(*v - lo) / range * 255.0) as f32;
    }
    Some((lo, hi))
}

/// Power-law correction `255 * (v / 255) ^ gamma`.
pub fn apply_gamma(values: &mut [f32], gamma: f64) {
    for v in values.iter_mut() {
        *v = (255.0 * (f64::from(*v) / 255.0).powf(gamma)) as f32;
    }
}

/// Map `0..255` linearly onto `min_gray..max_gray`.
pub fn remap_range(values: &mut [f32], min_gray: u8, max_gray: u8) {
    let lo = f64::from(min_gray);
    let span = f64::from(max_gray) - lo;
    for v in values.iter_mut() {
        *v = (lo + f64::from(*v) / 255.0 * span) as f32;
    }
}
