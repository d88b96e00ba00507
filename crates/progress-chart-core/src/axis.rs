// File: crates/progress-chart-core/src/axis.rs
// Summary: Scale kinds and tick labels for the count (left) and percentage (right) axes.

use serde::Serialize;

use crate::grid::linspace;
use crate::scale::ValueScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ScaleKind {
    /// Counts, mapped through `[0, max]` of the data.
    Linear,
    /// Ratios, always mapped through `[0, 100]`.
    Percentage,
}

/// Number of equal divisions of the chart height.
pub const TICK_DIVISIONS: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub kind: ScaleKind,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<AxisTick>,
}

impl Axis {
    /// Ticks spread evenly across the scale's domain.
    ///
    /// For the percentage scale this always yields `0,20,40,60,80,100`.
    pub fn from_scale(kind: ScaleKind, scale: &ValueScale) -> Self {
        let ticks = linspace(scale.vmin, scale.vmax, TICK_DIVISIONS + 1)
            .into_iter()
            .map(|value| AxisTick { value, y: scale.to_px(value), label: format_tick(kind, value) })
            .collect();
        Self { kind, min: scale.vmin, max: scale.vmax, ticks }
    }
}

fn format_tick(kind: ScaleKind, value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let text = if rounded.fract() == 0.0 { format!("{rounded:.0}") } else { format!("{rounded:.1}") };
    match kind {
        ScaleKind::Linear => text,
        ScaleKind::Percentage => format!("{text}%"),
    }
}
