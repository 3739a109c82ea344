//! Read-only brightness grid consumed by the sampler.

use crate::{LineScreenError, Result};

/// Row-major brightness values in `[0, 255]`, `0` being black.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl PixelGrid {
    /// Wrap row-major values. `values.len()` must equal `width * height`.
    pub fn new(width: u32, height: u32, values: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LineScreenError::EmptyCanvas { width, height });
        }
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(LineScreenError::GridLength {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// A grid where every pixel has the same brightness.
    pub fn uniform(width: u32, height: u32, value: f32) -> Result<Self> {
        Self::new(width, height, vec![value; width as usize * height as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Brightness at integer pixel indices, `None` outside the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<f32> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(self.values[y as usize * self.width as usize + x as usize])
    }
}
