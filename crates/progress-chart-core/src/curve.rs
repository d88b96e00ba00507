// File: crates/progress-chart-core/src/curve.rs
// Summary: Smooth path construction: Catmull-Rom spline expressed as cubic Bezier segments.

use std::fmt::Write as _;

use serde::Serialize;

use crate::geometry::Point;

/// One cubic Bezier segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CubicSegment {
    pub start: Point,
    pub cp1: Point,
    pub cp2: Point,
    pub end: Point,
}

/// A "move" followed by cubic segments. Empty when there is nothing to draw.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PathDescriptor {
    pub move_to: Option<Point>,
    pub segments: Vec<CubicSegment>,
}

impl PathDescriptor {
    pub fn is_empty(&self) -> bool {
        self.move_to.is_none()
    }

    /// SVG path data (`M x y C ...`).
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let Some(m) = self.move_to else { return out };
        let _ = write!(out, "M{:.2} {:.2}", m.x, m.y);
        for s in &self.segments {
            let _ = write!(
                out,
                " C{:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                s.cp1.x, s.cp1.y, s.cp2.x, s.cp2.y, s.end.x, s.end.y
            );
        }
        out
    }
}

/// Pixel points of one series and the path through them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PathGeometry {
    pub points: Vec<Point>,
    pub path: PathDescriptor,
    /// `false` for fewer than two points: nothing to stroke or fill.
    pub stroke: bool,
}

/// Build the smooth path through `points`.
///
/// For each pair `(p1, p2)` with clamped neighbours `p0`, `p3`:
/// `cp1 = p1 + (p2 - p0) / 6`, `cp2 = p2 - (p3 - p1) / 6`.
/// Two points give one straight segment; the spline is never evaluated for them.
pub fn build_curve(points: &[Point]) -> PathGeometry {
    let path = match points {
        [] => PathDescriptor::default(),
        [only] => PathDescriptor { move_to: Some(*only), segments: Vec::new() },
        [a, b] => PathDescriptor { move_to: Some(*a), segments: vec![straight(*a, *b)] },
        _ => PathDescriptor { move_to: Some(points[0]), segments: catmull_rom(points) },
    };
    PathGeometry { points: points.to_vec(), path, stroke: points.len() >= 2 }
}

fn straight(a: Point, b: Point) -> CubicSegment {
    CubicSegment { start: a, cp1: a, cp2: b, end: b }
}

fn catmull_rom(points: &[Point]) -> Vec<CubicSegment> {
    let last = points.len() - 1;
    (0..last)
        .map(|i| {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(last)];
            CubicSegment {
                start: p1,
                cp1: p1 + (p2 - p0) / 6.0,
                cp2: p2 - (p3 - p1) / 6.0,
                end: p2,
            }
        })
        .collect()
}
