//! Coarse brightness sampling along a single line.

use crate::geometry::unit_linspace;
use crate::grid::PixelGrid;
use crate::schedule::Line;
use crate::screen::ScreenParams;

/// Stroke widths at increasing parameters `t` along one line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidthProfile {
    pub t: Vec<f64>,
    pub widths: Vec<f64>,
}

impl WidthProfile {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.t.iter().copied().zip(self.widths.iter().copied())
    }
}

/// Number of samples spaced `step` apart along a line of length `span`.
pub fn sample_count(span: f64, step: f64) -> usize {
    (span / step).floor() as usize + 1
}

/// Stroke width for a brightness value: black is a full pitch, white is none.
pub fn width_for_brightness(brightness: f32, max_width: f64) -> f64 {
    (255.0 - f64::from(brightness)) / 255.0 * max_width
}

/// Sample the grid along `line` once per coarse step.
///
/// Positions are truncated toward zero to pixel indices. Samples that fall
/// outside the grid get zero width rather than any extrapolated brightness.
pub fn sample_coarse(grid: &PixelGrid, line: &Line, screen: &ScreenParams) -> WidthProfile {
    let t = unit_linspace(sample_count(line.span, screen.coarse_step()));
    let widths = t
        .iter()
        .map(|&t| {
            let p = line.point_at(t);
            grid.get(p.x as i64, p.y as i64)
                .map_or(0.0, |b| width_for_brightness(b, screen.max_width()))
        })
        .collect();
    WidthProfile { t, widths }
}
