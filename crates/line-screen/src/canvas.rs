//! Shared bi-level output canvas.
//!
//! Pixels are stored one bit each in atomic words. Painting only ever sets
//! bits (`fetch_or`), so any number of threads may paint concurrently and
//! the final raster does not depend on the order of writes.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use image::{GrayImage, Luma};
use tracing::debug;

const WORD_BITS: usize = 64;

/// Output raster; every pixel starts white.
#[derive(Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    words_per_row: usize,
    bits: Vec<AtomicU64>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let words_per_row = (width as usize).div_ceil(WORD_BITS);
        let bits = (0..words_per_row * height as usize)
            .map(|_| AtomicU64::new(0))
            .collect();
        Self {
            width,
            height,
            words_per_row,
            bits,
        }
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

    /// Paint pixels `x0..x1` of row `y` black. Out-of-range parts are ignored.
    pub fn paint_span(&self, y: u32, x0: u32, x1: u32) {
        let x1 = x1.min(self.width);
        if y >= self.height || x0 >= x1 {
            return;
        }
        let row = y as usize * self.words_per_row;
        let (start, end) = (x0 as usize, x1 as usize);
        let mut x = start;
        while x < end {
            let word = x / WORD_BITS;
            let bit = x % WORD_BITS;
            let run = (WORD_BITS - bit).min(end - x);
            let mask = if run == WORD_BITS {
                u64::MAX
            } else {
                ((1u64 << run) - 1) << bit
            };
            self.bits[row + word].fetch_or(mask, Ordering::Relaxed);
            x += run;
        }
    }

    pub fn is_black(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = y as usize * self.words_per_row + x as usize / WORD_BITS;
        (self.bits[idx].load(Ordering::Relaxed) >> (x as usize % WORD_BITS)) & 1 == 1
    }

    /// Number of black pixels.
    pub fn black_count(&self) -> u64 {
        self.bits
            .iter()
            .map(|w| u64::from(w.load(Ordering::Relaxed).count_ones()))
            .sum()
    }

    /// Fraction of the canvas painted black.
    pub fn coverage(&self) -> f64 {
        let total = u64::from(self.width) * u64::from(self.height);
        if total == 0 {
            return 0.0;
        }
        self.black_count() as f64 / total as f64
    }

    /// Render as 8-bit grayscale: black pixels 0, white pixels 255.
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            if self.is_black(x, y) {
                Luma([0])
            } else {
                Luma([255])
            }
        })
    }

    /// Encode and write the canvas; the format follows the path extension.
    pub fn save(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let path = path.as_ref();
        debug!(
            width = self.width,
            height = self.height,
            path = %path.display(),
            "Saving bi-level canvas"
        );
        self.to_gray_image().save(path)
    }
}

impl PartialEq for Canvas {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .bits
                .iter()
                .zip(&other.bits)
                .all(|(a, b)| a.load(Ordering::Relaxed) == b.load(Ordering::Relaxed))
    }
}
