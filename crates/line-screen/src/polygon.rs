//! Variable-width strip construction.

use crate::geometry::Point;
use crate::sampler::WidthProfile;
use crate::schedule::Line;

/// Strip segments per fill piece; bounds the mask each piece is filled into.
pub const PIECE_SEGMENTS: usize = 64;

/// Closed ring of vertices; the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Build the strip for `line`: offsets on the normal side in order, then
/// the opposite side in reverse.
///
/// Returns `None` when fewer than three vertices would result.
pub fn build_strip(profile: &WidthProfile, line: &Line) -> Option<Polygon> {
    let mut upper = Vec::with_capacity(profile.len());
    let mut lower = Vec::with_capacity(profile.len());
    for (t, width) in profile.iter() {
        let center = line.point_at(t);
        let offset = line.normal * (width / 2.0);
        upper.push(center + offset);
        lower.push(center - offset);
    }

    upper.extend(lower.into_iter().rev());
    if upper.len() < 3 {
        return None;
    }
    Some(Polygon { vertices: upper })
}

/// Split a strip from [`build_strip`] into pieces of `segments` consecutive
/// segments each, neighbours overlapping by one segment. The pieces cover
/// exactly the area of the strip.
///
/// Rings that are not strips (odd vertex count) are returned whole.
pub fn strip_pieces(strip: &Polygon, segments: usize) -> Vec<Polygon> {
    let n = strip.len();
    if n % 2 != 0 || segments == 0 {
        return vec![strip.clone()];
    }
    let last = n / 2 - 1;
    let v = &strip.vertices;

    let mut pieces = Vec::with_capacity(last.div_ceil(segments).max(1));
    let mut i = 0;
    loop {
        let j = (i + segments + 1).min(last);
        // Upper side i..=j, then the lower side back from j to i.
        let mut ring = Vec::with_capacity(2 * (j - i + 1));
        ring.extend_from_slice(&v[i..=j]);
        ring.extend_from_slice(&v[n - 1 - j..=n - 1 - i]);
        pieces.push(Polygon { vertices: ring });
        if j == last {
            break;
        }
        i += segments;
    }
    pieces
}
