// File: crates/progress-chart-core/src/legend.rs
// Summary: Per-series data presence, visibility and legend opacity.

use serde::Serialize;

use crate::merge::CanonicalBucket;
use crate::series::Series;
use crate::theme::{Rgba, LEGEND_OPACITY_ABSENT, LEGEND_OPACITY_ACTIVE, LEGEND_OPACITY_ZERO};

/// How much data a series has across the merged buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DataPresence {
    /// No bucket offers the field.
    Absent,
    /// Offered somewhere, but every value is zero.
    AllZero,
    /// At least one non-zero value.
    Active,
}

impl DataPresence {
    pub fn of(series: &Series, buckets: &[CanonicalBucket]) -> Self {
        if buckets.iter().any(|b| b.value(&series.field) != 0.0) {
            DataPresence::Active
        } else if buckets.iter().any(|b| b.offers(&series.field)) {
            DataPresence::AllZero
        } else {
            DataPresence::Absent
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            DataPresence::Active => LEGEND_OPACITY_ACTIVE,
            DataPresence::AllZero => LEGEND_OPACITY_ZERO,
            DataPresence::Absent => LEGEND_OPACITY_ABSENT,
        }
    }
}

/// One legend row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub series_id: String,
    pub label: String,
    pub color: Rgba,
    pub opacity: f64,
    /// Whether the line itself is drawn.
    pub visible: bool,
    pub presence: DataPresence,
}

impl LegendEntry {
    pub fn for_series(series: &Series, buckets: &[CanonicalBucket]) -> Self {
        let presence = DataPresence::of(series, buckets);
        Self {
            series_id: series.id.clone(),
            label: series.display_label.clone(),
            color: series.color,
            opacity: presence.opacity(),
            visible: series.always_show || presence != DataPresence::Absent,
            presence,
        }
    }
}
