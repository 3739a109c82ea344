//! Geometry of the rotated line set.
//!
//! Lines are spaced one pitch apart along the screen normal, centred on
//! the canvas, and extended by the canvas diagonal in both directions so
//! that every pixel is crossed whatever the angle.

use crate::geometry::Point;
use crate::screen::ScreenParams;

/// One halftone line, parameterised by `t` in `[0, 1]` from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub index: usize,
    /// Signed perpendicular offset from the canvas centre.
    pub offset: f64,
    pub direction: Point,
    pub normal: Point,
    pub start: Point,
    pub end: Point,
    /// Nominal length, twice the canvas diagonal.
    pub span: f64,
}

impl Line {
    /// Point on the line at parameter `t`.
    pub fn point_at(&self, t: f64) -> Point {
        Point::lerp(self.start, self.end, t)
    }
}

/// Computes every line crossing a `width x height` canvas.
#[derive(Debug, Clone, Copy)]
pub struct LineScheduler {
    screen: ScreenParams,
    diag: f64,
    center: Point,
    direction: Point,
    normal: Point,
    num_lines: usize,
}

impl LineScheduler {
    pub fn new(width: u32, height: u32, screen: ScreenParams) -> Self {
        let (w, h) = (f64::from(width), f64::from(height));
        let diag = w.hypot(h);
        let direction = Point::from_angle(screen.angle_rad());
        Self {
            screen,
            diag,
            center: Point::new(w / 2.0, h / 2.0),
            direction,
            normal: direction.perpendicular(),
            num_lines: (diag / screen.spacing()).floor() as usize + 1,
        }
    }

    pub fn num_lines(&self) -> usize {
        self.num_lines
    }

    /// Line `index`, for `index < num_lines()`.
    pub fn line(&self, index: usize) -> Line {
        let offset = -self.diag / 2.0 + index as f64 * self.screen.spacing();
        let anchor = self.center + self.normal * offset;
        let reach = self.direction * self.diag;
        Line {
            index,
            offset,
            direction: self.direction,
            normal: self.normal,
            start: anchor - reach,
            end: anchor + reach,
            span: 2.0 * self.diag,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        (0..self.num_lines).map(|i| self.line(i))
    }
}
