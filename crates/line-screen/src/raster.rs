//! Polygon fill into the shared canvas.
//!
//! Each polygon is filled with tiny-skia's non-anti-aliased even-odd
//! rasterizer into a mask covering only the polygon's bounds, and the
//! painted runs of that mask are then ORed into the canvas. A pixel is
//! painted when its centre lies inside the polygon.

use tiny_skia::{FillRule, Mask, Path, PathBuilder, Transform};

use crate::canvas::Canvas;
use crate::polygon::Polygon;

/// Pixel rectangle `x0..x1, y0..y1` on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelRect {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl PixelRect {
    /// Pixels that can have their centre inside `polygon`, clipped to the
    /// canvas. `None` when that leaves nothing or a vertex is not finite.
    fn covering(polygon: &Polygon, canvas: &Canvas) -> Option<Self> {
        let mut min = (f64::INFINITY, f64::INFINITY);
        let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &polygon.vertices {
            if !(p.x.is_finite() && p.y.is_finite()) {
                return None;
            }
            min = (min.0.min(p.x), min.1.min(p.y));
            max = (max.0.max(p.x), max.1.max(p.y));
        }

        let clip = |v: f64, limit: u32| v.clamp(0.0, f64::from(limit)) as u32;
        let rect = Self {
            x0: clip(min.0.floor(), canvas.width()),
            y0: clip(min.1.floor(), canvas.height()),
            x1: clip(max.0.ceil(), canvas.width()),
            y1: clip(max.1.ceil(), canvas.height()),
        };
        (rect.x0 < rect.x1 && rect.y0 < rect.y1).then_some(rect)
    }

    fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

/// Closed path through the vertices of `polygon`, shifted so that `rect`'s
/// corner is the origin.
fn local_path(polygon: &Polygon, rect: PixelRect) -> Option<Path> {
    let (ox, oy) = (f64::from(rect.x0), f64::from(rect.y0));
    let mut vertices = polygon.vertices.iter();
    let first = vertices.next()?;

    let mut builder = PathBuilder::new();
    builder.move_to((first.x - ox) as f32, (first.y - oy) as f32);
    for p in vertices {
        builder.line_to((p.x - ox) as f32, (p.y - oy) as f32);
    }
    builder.close();
    builder.finish()
}

/// OR the painted runs of `mask` into `canvas` at `rect`. Returns the number
/// of runs.
fn blit_mask(canvas: &Canvas, mask: &Mask, rect: PixelRect) -> usize {
    let width = rect.width() as usize;
    let mut spans = 0;
    for (row, data) in mask.data().chunks_exact(width).enumerate() {
        let y = rect.y0 + row as u32;
        let mut x = 0;
        while x < width {
            if data[x] == 0 {
                x += 1;
                continue;
            }
            let start = x;
            while x < width && data[x] != 0 {
                x += 1;
            }
            canvas.paint_span(y, rect.x0 + start as u32, rect.x0 + x as u32);
            spans += 1;
        }
    }
    spans
}

/// Fill `polygon` black on `canvas`. Returns the number of row spans painted.
///
/// Polygons with fewer than three vertices are ignored.
pub fn fill_polygon(canvas: &Canvas, polygon: &Polygon) -> usize {
    if polygon.len() < 3 {
        return 0;
    }
    let Some(rect) = PixelRect::covering(polygon, canvas) else {
        return 0;
    };
    let Some(path) = local_path(polygon, rect) else {
        return 0;
    };
    let Some(mut mask) = Mask::new(rect.width(), rect.height()) else {
        return 0;
    };
    mask.fill_path(&path, FillRule::EvenOdd, false, Transform::identity());
    blit_mask(canvas, &mask, rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn poly(points: &[(f64, f64)]) -> Polygon {
        Polygon {
            vertices: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    #[test]
    fn test_axis_aligned_square() {
        let canvas = Canvas::new(10, 10);
        fill_polygon(&canvas, &poly(&[(2.0, 2.0), (6.0, 2.0), (6.0, 5.0), (2.0, 5.0)]));
        assert_eq!(canvas.black_count(), 12);
        for y in 0..10 {
            for x in 0..10 {
                let inside = (2..6).contains(&x) && (2..5).contains(&y);
                assert_eq!(canvas.is_black(x, y), inside, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_orientation_does_not_matter() {
        let cw = Canvas::new(12, 12);
        let ccw = Canvas::new(12, 12);
        let pts = [(1.3, 0.7), (9.2, 3.1), (4.4, 10.8)];
        let mut rev = pts;
        rev.reverse();
        fill_polygon(&cw, &poly(&pts));
        fill_polygon(&ccw, &poly(&rev));
        assert!(cw.black_count() > 0);
        assert_eq!(cw, ccw);
    }

    #[test]
    fn test_shared_edge_leaves_no_gap() {
        // Two quads sharing the slanted edge (4,0)-(6,8) tile the rectangle.
        let canvas = Canvas::new(10, 8);
        fill_polygon(&canvas, &poly(&[(0.0, 0.0), (4.0, 0.0), (6.0, 8.0), (0.0, 8.0)]));
        fill_polygon(&canvas, &poly(&[(4.0, 0.0), (10.0, 0.0), (10.0, 8.0), (6.0, 8.0)]));
        assert_eq!(canvas.black_count(), 80);
    }

    #[test]
    fn test_even_odd_leaves_overlap_empty() {
        // A bow-tie ring around a square: the doubly wound middle stays white.
        let canvas = Canvas::new(10, 4);
        fill_polygon(
            &canvas,
            &poly(&[
                (0.0, 0.0),
                (6.0, 0.0),
                (6.0, 4.0),
                (4.0, 4.0),
                (4.0, 0.0),
                (10.0, 0.0),
                (10.0, 4.0),
                (0.0, 4.0),
            ]),
        );
        assert!(canvas.is_black(1, 2));
        assert!(!canvas.is_black(5, 2));
        assert!(canvas.is_black(8, 2));
    }

    #[test]
    fn test_clipped_to_canvas() {
        let canvas = Canvas::new(5, 5);
        fill_polygon(
            &canvas,
            &poly(&[(-10.0, -10.0), (20.0, -10.0), (20.0, 20.0), (-10.0, 20.0)]),
        );
        assert_eq!(canvas.black_count(), 25);
    }

    #[test]
    fn test_outside_canvas_paints_nothing() {
        let canvas = Canvas::new(5, 5);
        let spans = fill_polygon(&canvas, &poly(&[(10.0, 10.0), (20.0, 10.0), (15.0, 20.0)]));
        assert_eq!(spans, 0);
        assert_eq!(canvas.black_count(), 0);
    }

    #[test]
    fn test_degenerate_inputs() {
        let canvas = Canvas::new(5, 5);
        assert_eq!(fill_polygon(&canvas, &poly(&[(0.0, 0.0), (4.0, 4.0)])), 0);
        assert_eq!(
            fill_polygon(&canvas, &poly(&[(0.0, 0.0), (f64::NAN, 1.0), (3.0, 3.0)])),
            0
        );
        // Zero-area ring.
        assert_eq!(
            fill_polygon(&canvas, &poly(&[(0.0, 1.0), (2.0, 3.0), (4.0, 5.0), (2.0, 3.0)])),
            0
        );
        assert_eq!(canvas.black_count(), 0);
    }

    #[test]
    fn test_never_unpaints() {
        let canvas = Canvas::new(6, 6);
        canvas.paint_span(0, 0, 6);
        fill_polygon(&canvas, &poly(&[(1.0, 1.0), (5.0, 1.0), (5.0, 5.0), (1.0, 5.0)]));
        assert_eq!(canvas.black_count(), 6 + 16);
    }

    #[test]
    fn test_spans_count_painted_rows() {
        let canvas = Canvas::new(8, 8);
        let spans = fill_polygon(&canvas, &poly(&[(1.0, 2.0), (7.0, 2.0), (7.0, 6.0), (1.0, 6.0)]));
        assert_eq!(spans, 4);
        assert_eq!(canvas.black_count(), 24);
    }
}
