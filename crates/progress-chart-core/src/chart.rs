// File: crates/progress-chart-core/src/chart.rs
// Summary: Chart model and the build pipeline (normalize, merge, scale, curve, compose).

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::axis::{Axis, ScaleKind};
use crate::config::{ChartConfig, PeriodHint, Section};
use crate::curve::{build_curve, PathGeometry};
use crate::geometry::{Point, Rect};
use crate::grid::GridLines;
use crate::legend::LegendEntry;
use crate::merge::{CanonicalBucket, MergeOutcome, SeriesMerger};
use crate::scale::{AxisScaler, IndexScale};
use crate::series::Series;
use crate::source::{PrimaryBucketRaw, RawEventPoint, SourceKind};
use crate::timekey::TimeKeyNormalizer;
use crate::types::ChartDimensions;

/// Narrowest hover target, so 90 daily buckets stay hoverable.
pub const MIN_HIT_WIDTH_PX: f64 = 8.0;

/// Counters describing what the build had to drop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BuildDiagnostics {
    pub normalization_failures: usize,
}

/// One x-axis label; `visible` is thinned by the period hint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct XLabel {
    pub index: usize,
    pub x: f64,
    pub text: String,
    pub visible: bool,
}

/// Hover target of one bucket: its band, widened to the minimum hit width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HitRegion {
    pub index: usize,
    pub center_x: f64,
    pub rect: Rect,
}

/// Everything a renderer needs to paint the chart, in pixel space.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartModel {
    pub section: Section,
    pub period_hint: PeriodHint,
    pub dimensions: ChartDimensions,
    /// Sorted by `order`.
    pub buckets: Vec<CanonicalBucket>,
    /// Active series of the section, visible or not.
    pub series: Vec<Series>,
    /// Only visible series have a path.
    pub paths: BTreeMap<String, PathGeometry>,
    pub grid_lines: GridLines,
    pub x_labels: Vec<XLabel>,
    /// Left axis (counts).
    pub linear_axis: Axis,
    /// Right axis (0-100%).
    pub percentage_axis: Axis,
    pub legend: Vec<LegendEntry>,
    pub hit_regions: Vec<HitRegion>,
    pub hover_index: BTreeMap<usize, CanonicalBucket>,
    pub diagnostics: BuildDiagnostics,
}

impl ChartModel {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn series_by_id(&self, id: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.id == id)
    }

    pub fn legend_entry(&self, series_id: &str) -> Option<&LegendEntry> {
        self.legend.iter().find(|e| e.series_id == series_id)
    }

    pub fn is_visible(&self, series_id: &str) -> bool {
        self.legend_entry(series_id).is_some_and(|e| e.visible)
    }
}

/// Build a fresh chart model from one snapshot of inputs.
///
/// Pure: identical arguments give structurally equal models.
pub fn build_chart(
    primary: &[PrimaryBucketRaw],
    secondary: &HashMap<SourceKind, Vec<RawEventPoint>>,
    config: &ChartConfig,
) -> ChartModel {
    let normalizer = TimeKeyNormalizer::new(config.reference_date);
    let merged = SeriesMerger::new(normalizer, &config.source_priority).merge(primary, secondary);
    ChartComposer::new(config).compose(merged)
}

/// Turns merged buckets into a [`ChartModel`].
pub struct ChartComposer<'a> {
    config: &'a ChartConfig,
}

impl<'a> ChartComposer<'a> {
    pub fn new(config: &'a ChartConfig) -> Self {
        Self { config }
    }

    pub fn compose(&self, merged: MergeOutcome) -> ChartModel {
        let MergeOutcome { buckets, normalization_failures } = merged;
        let dims = self.config.dimensions;
        let series = self.config.catalog.for_section(self.config.section);
        if series.is_empty() {
            tracing::debug!(section = %self.config.section, "no series defined for section");
        }

        let x = IndexScale::new(dims.left(), dims.plot_width(), buckets.len());
        let scaler = AxisScaler::from_buckets(&buckets, &series, &dims);
        let legend: Vec<LegendEntry> = series.iter().map(|s| LegendEntry::for_series(s, &buckets)).collect();

        let paths = series
            .iter()
            .zip(&legend)
            .filter(|(_, entry)| entry.visible)
            .map(|(s, _)| (s.id.clone(), build_curve(&series_points(s, &buckets, &x, &scaler))))
            .collect();

        let stride = self.config.period_hint.label_stride(buckets.len());
        let x_labels = buckets
            .iter()
            .enumerate()
            .map(|(i, b)| XLabel { index: i, x: x.to_px(i), text: b.label.clone(), visible: i % stride == 0 })
            .collect();

        let model = ChartModel {
            section: self.config.section,
            period_hint: self.config.period_hint,
            dimensions: dims,
            grid_lines: GridLines::layout(&dims, &x),
            x_labels,
            linear_axis: Axis::from_scale(ScaleKind::Linear, &scaler.linear),
            percentage_axis: Axis::from_scale(ScaleKind::Percentage, &scaler.percentage),
            hit_regions: hit_regions(&dims, &x),
            hover_index: buckets.iter().cloned().enumerate().collect(),
            buckets,
            series,
            paths,
            legend,
            diagnostics: BuildDiagnostics { normalization_failures },
        };
        tracing::trace!(
            section = %model.section,
            buckets = model.buckets.len(),
            paths = model.paths.len(),
            dropped = normalization_failures,
            "chart model built"
        );
        model
    }
}

fn series_points(series: &Series, buckets: &[CanonicalBucket], x: &IndexScale, scaler: &AxisScaler) -> Vec<Point> {
    let kind = series.scale_kind();
    buckets
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let y = scaler.y_for(kind, b.value(&series.field)) + series.visual_offset_px;
            Point::new(x.to_px(i), y)
        })
        .collect()
}

fn hit_regions(dims: &ChartDimensions, x: &IndexScale) -> Vec<HitRegion> {
    let band = x.band();
    // Bands tile the plot; dense charts widen them symmetrically and overlap.
    let width = band.max(MIN_HIT_WIDTH_PX);
    let spill = (width - band) * 0.5;
    (0..x.count())
        .map(|i| HitRegion {
            index: i,
            center_x: x.to_px(i),
            rect: Rect::from_ltwh(x.band_start(i) - spill, dims.top(), width, dims.plot_height()),
        })
        .collect()
}
