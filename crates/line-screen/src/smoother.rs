//! Spline smoothing of coarse width profiles.

use tracing::debug;

use crate::Result;
use crate::geometry::unit_linspace;
use crate::sampler::{WidthProfile, sample_count};
use crate::schedule::Line;
use crate::screen::ScreenParams;
use crate::spline::CubicSpline;

/// Fewest coarse samples a line needs before it is smoothed and drawn.
pub const MIN_COARSE_SAMPLES: usize = 4;

/// Result of smoothing one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Smoothed {
    /// Fine profile, widths clamped to `[0, max_width]`.
    Profile(WidthProfile),
    /// The line had too few coarse samples and contributes no ink.
    TooFewSamples(usize),
}

/// Fit a natural spline through `coarse` and resample it at the fine step.
pub fn smooth(coarse: &WidthProfile, line: &Line, screen: &ScreenParams) -> Result<Smoothed> {
    if coarse.len() < MIN_COARSE_SAMPLES {
        debug!(
            line = line.index,
            samples = coarse.len(),
            "Too few coarse samples, skipping line"
        );
        return Ok(Smoothed::TooFewSamples(coarse.len()));
    }

    let spline = CubicSpline::natural(&coarse.t, &coarse.widths)?;
    let t = unit_linspace(sample_count(line.span, screen.fine_step()));
    let max_width = screen.max_width();
    let widths = spline
        .eval_many(&t)
        .into_iter()
        .map(|w| w.clamp(0.0, max_width))
        .collect();

    Ok(Smoothed::Profile(WidthProfile { t, widths }))
}
