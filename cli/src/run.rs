//! One halftone run: load, resize, tone-map, render, save.

use anyhow::Context;
use image::GrayImage;
use image_processor::{OutputSize, brightness_values, load_grayscale, output_size, resize_to_output};
use line_screen::{Canvas, PixelGrid, RenderStats, ScreenParams};
use tracing::info;

use crate::config::HalftoneConfig;

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub size: OutputSize,
    pub stats: RenderStats,
    /// Fraction of output pixels that are black.
    pub coverage: f64,
}

/// Execute a full run and write the output file.
pub fn run(config: &HalftoneConfig) -> anyhow::Result<RunSummary> {
    let img = load_grayscale(&config.input)
        .with_context(|| format!("cannot read input image {}", config.input.display()))?;

    let (canvas, stats) = render_image(&img, config)?;

    canvas
        .save(&config.output)
        .with_context(|| format!("cannot write {}", config.output.display()))?;
    info!("Saved: {}", config.output.display());

    Ok(RunSummary {
        size: OutputSize {
            width: canvas.width(),
            height: canvas.height(),
        },
        stats,
        coverage: canvas.coverage(),
    })
}

/// Resize, tone-map and halftone an already decoded image.
pub fn render_image(
    img: &GrayImage,
    config: &HalftoneConfig,
) -> anyhow::Result<(Canvas, RenderStats)> {
    let target = image_processor::target_pixels(config.width_mm, config.dpi)?;
    let size = output_size(img.width(), img.height(), target);
    let resized = resize_to_output(img, size);

    let mut values = brightness_values(&resized);
    config.tone.apply(&mut values)?;

    let (width_mm, height_mm) = size.physical_mm(config.dpi);
    info!(
        "Image size: {}x{} ({width_mm:.0}x{height_mm:.0} mm)",
        size.width, size.height
    );

    let grid = PixelGrid::new(size.width, size.height, values)?;
    let screen = ScreenParams::new(config.dpi)?;
    let rendered = if config.jobs == 1 {
        line_screen::render_sequential(&grid, &screen)?
    } else {
        line_screen::render(&grid, &screen)?
    };
    Ok(rendered)
}
