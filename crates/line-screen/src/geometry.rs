//! Minimal 2-D point arithmetic in canvas pixel space.

use std::ops::{Add, Mul, Neg, Sub};

/// A point (or vector) in canvas coordinates. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle_rad`.
    pub fn from_angle(angle_rad: f64) -> Self {
        let (sin, cos) = angle_rad.sin_cos();
        Self::new(cos, sin)
    }

    /// Rotate by +90 degrees: `(x, y) -> (-y, x)`.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Linear interpolation `a + t * (b - a)`.
    ///
    /// Every stage evaluates line positions through this one function so
    /// that equal `t` always yields the identical point.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        Self::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// `n` evenly spaced parameters covering `[0, 1]` inclusive.
///
/// A single sample sits at `t = 0`; zero samples yields an empty vector.
pub fn unit_linspace(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (n - 1) as f64;
            (0..n).map(|k| k as f64 / last).collect()
        }
    }
}
