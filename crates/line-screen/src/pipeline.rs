//! Whole-image rendering: run every line through sample, smooth, build and
//! fill, writing into one shared canvas.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::Result;
use crate::canvas::Canvas;
use crate::grid::PixelGrid;
use crate::polygon::{PIECE_SEGMENTS, build_strip, strip_pieces};
use crate::raster::fill_polygon;
use crate::sampler::sample_coarse;
use crate::schedule::{Line, LineScheduler};
use crate::screen::ScreenParams;
use crate::smoother::{Smoothed, smooth};

/// Lines between progress messages.
const PROGRESS_INTERVAL: usize = 100;

/// What happened to a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The strip was filled; `spans` row spans landed on the canvas.
    Painted { spans: usize },
    /// Fewer coarse samples than the spline needs.
    TooFewSamples,
    /// The strip had fewer than three vertices.
    Degenerate,
}

/// Per-run line counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub lines: usize,
    pub painted: usize,
    pub too_few_samples: usize,
    pub degenerate: usize,
    pub spans: usize,
}

impl RenderStats {
    fn record(mut self, outcome: LineOutcome) -> Self {
        self.lines += 1;
        match outcome {
            LineOutcome::Painted { spans } => {
                self.painted += 1;
                self.spans += spans;
            }
            LineOutcome::TooFewSamples => self.too_few_samples += 1,
            LineOutcome::Degenerate => self.degenerate += 1,
        }
        self
    }
}

/// Run the four stages for one line.
pub fn process_line(
    grid: &PixelGrid,
    line: &Line,
    screen: &ScreenParams,
    canvas: &Canvas,
) -> Result<LineOutcome> {
    let coarse = sample_coarse(grid, line, screen);
    let fine = match smooth(&coarse, line, screen)? {
        Smoothed::Profile(fine) => fine,
        Smoothed::TooFewSamples(_) => return Ok(LineOutcome::TooFewSamples),
    };
    let Some(strip) = build_strip(&fine, line) else {
        debug!(line = line.index, "Degenerate strip, skipping line");
        return Ok(LineOutcome::Degenerate);
    };
    let spans: usize = strip_pieces(&strip, PIECE_SEGMENTS)
        .iter()
        .map(|piece| fill_polygon(canvas, piece))
        .sum();
    Ok(LineOutcome::Painted { spans })
}

/// Render `grid` on the rayon pool.
///
/// The canvas only accumulates black pixels, so the result is identical to
/// [`render_sequential`] regardless of thread scheduling.
pub fn render(grid: &PixelGrid, screen: &ScreenParams) -> Result<(Canvas, RenderStats)> {
    let (width, height) = grid.dimensions();
    let scheduler = LineScheduler::new(width, height, *screen);
    let canvas = Canvas::new(width, height);
    let num_lines = scheduler.num_lines();
    info!(num_lines, "Drawing lines");

    let done = AtomicUsize::new(0);
    let outcomes: Vec<LineOutcome> = (0..num_lines)
        .into_par_iter()
        .map(|i| -> Result<LineOutcome> {
            let outcome = process_line(grid, &scheduler.line(i), screen, &canvas)?;
            let finished = done.fetch_add(1, Ordering::Relaxed) + 1;
            if finished % PROGRESS_INTERVAL == 0 {
                info!(finished, num_lines, "Line progress");
            }
            Ok(outcome)
        })
        .collect::<Result<_>>()?;

    let stats = outcomes
        .into_iter()
        .fold(RenderStats::default(), RenderStats::record);
    log_stats(&stats);
    Ok((canvas, stats))
}

/// Render `grid` one line at a time on the calling thread.
pub fn render_sequential(grid: &PixelGrid, screen: &ScreenParams) -> Result<(Canvas, RenderStats)> {
    let (width, height) = grid.dimensions();
    let scheduler = LineScheduler::new(width, height, *screen);
    let canvas = Canvas::new(width, height);
    let num_lines = scheduler.num_lines();
    info!(num_lines, "Drawing lines");

    let mut stats = RenderStats::default();
    for line in scheduler.lines() {
        if line.index % PROGRESS_INTERVAL == 0 {
            info!(line = line.index, num_lines, "Line progress");
        }
        stats = stats.record(process_line(grid, &line, screen, &canvas)?);
    }
    log_stats(&stats);
    Ok((canvas, stats))
}

fn log_stats(stats: &RenderStats) {
    info!(
        lines = stats.lines,
        painted = stats.painted,
        too_few_samples = stats.too_few_samples,
        degenerate = stats.degenerate,
        "Rendering complete"
    );
}
