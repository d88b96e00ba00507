// File: crates/progress-chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

use serde::Serialize;

use crate::axis::TICK_DIVISIONS;
use crate::geometry::{Line, Point};
use crate::scale::IndexScale;
use crate::types::ChartDimensions;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GridLines {
    /// Equal divisions of the chart height, top to bottom.
    pub horizontal: Vec<Line>,
    pub vertical: Vec<Line>,
}

impl GridLines {
    pub fn layout(dims: &ChartDimensions, x: &IndexScale) -> Self {
        let (l, r, t, b) = (dims.left(), dims.right(), dims.top(), dims.bottom());
        let horizontal = linspace(t, b, TICK_DIVISIONS + 1)
            .into_iter()
            .map(|y| Line::new(Point::new(l, y), Point::new(r, y)))
            .collect();
        let vertical = (0..x.count())
            .map(|i| {
                let px = x.to_px(i);
                Line::new(Point::new(px, t), Point::new(px, b))
            })
            .collect();
        Self { horizontal, vertical }
    }
}
