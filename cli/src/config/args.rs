//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use super::defaults::{
    DEFAULT_DPI, DEFAULT_GAMMA, DEFAULT_MAX_GRAY, DEFAULT_MIN_GRAY, DEFAULT_OUTPUT, DEFAULT_WIDTH_MM,
};

/// Render a grayscale image as a line-screen halftone.
///
/// Every option except the input can also be set through a `HALFTONE_*`
/// environment variable or a `.env` file.
#[derive(Debug, Clone, Parser)]
#[command(version)]
pub struct Args {
    /// Input image (JPEG, PNG, ...).
    pub input: PathBuf,

    /// Output path; the extension picks the format.
    #[arg(short, long, env = "HALFTONE_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Stretch the tone range to 0..255 before gamma and gray range.
    #[arg(short, long, env = "HALFTONE_AUTOSCALE")]
    pub autoscale: bool,

    /// Gamma correction.
    #[arg(short, long, env = "HALFTONE_GAMMA", default_value_t = DEFAULT_GAMMA)]
    pub gamma: f64,

    /// Output resolution in dots per inch.
    #[arg(short, long, env = "HALFTONE_DPI", default_value_t = DEFAULT_DPI)]
    pub dpi: u32,

    /// Size of the smaller output side in millimetres.
    #[arg(short, long, env = "HALFTONE_WIDTH", default_value_t = DEFAULT_WIDTH_MM)]
    pub width: f64,

    /// Gray level that source black maps to.
    #[arg(long, env = "HALFTONE_MIN_GRAY", default_value_t = DEFAULT_MIN_GRAY, allow_negative_numbers = true)]
    pub min_gray: i32,

    /// Gray level that source white maps to.
    #[arg(long, env = "HALFTONE_MAX_GRAY", default_value_t = DEFAULT_MAX_GRAY, allow_negative_numbers = true)]
    pub max_gray: i32,

    /// Worker threads for line rendering (0 uses one per core).
    #[arg(short, long, env = "HALFTONE_JOBS", default_value_t = 0)]
    pub jobs: usize,
}
