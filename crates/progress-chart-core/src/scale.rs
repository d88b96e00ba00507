// File: crates/progress-chart-core/src/scale.rs
// Summary: Bucket-index (X) and value (Y) scale transforms, plus the dual-domain axis scaler.

use crate::axis::ScaleKind;
use crate::merge::CanonicalBucket;
use crate::series::Series;
use crate::types::ChartDimensions;

/// Upper bound of the fixed percentage domain.
pub const PERCENT_MAX: f64 = 100.0;

/// Horizontal band scale: bucket `i` owns `[left + i * band, left + (i + 1) * band)`
/// and is drawn at the middle of its band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f64,
    pub width_px: f64,
    count: usize,
}

impl IndexScale {
    pub fn new(left_px: f64, width_px: f64, count: usize) -> Self {
        Self { left_px, width_px: width_px.max(1.0), count }
    }

    pub fn count(&self) -> usize { self.count }

    pub fn band(&self) -> f64 {
        self.width_px / self.count.max(1) as f64
    }

    pub fn band_start(&self, index: usize) -> f64 {
        self.left_px + index as f64 * self.band()
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        self.left_px + (index as f64 + 0.5) * self.band()
    }
}

/// Vertical value scale mapping `[vmin, vmax]` onto `[top + height, top]` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub height_px: f64,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(top_px: f64, height_px: f64, vmin: f64, vmax: f64) -> Self {
        Self { top_px, height_px, vmin, vmax }
    }

    pub fn is_flat(&self) -> bool {
        self.vmax == self.vmin
    }

    /// `height - (v - min) / (max - min) * height + top`; a flat domain pins to the baseline.
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        if self.is_flat() {
            return self.height_px + self.top_px;
        }
        self.height_px - (v - self.vmin) / (self.vmax - self.vmin) * self.height_px + self.top_px
    }
}

/// The two value domains of one chart build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScaler {
    pub linear: ValueScale,
    pub percentage: ValueScale,
}

impl AxisScaler {
    /// Linear domain is `[0, max]` over every linear series' field, floored at 1.
    pub fn from_buckets(buckets: &[CanonicalBucket], series: &[Series], dims: &ChartDimensions) -> Self {
        let linear_max = series
            .iter()
            .filter(|s| s.scale_kind() == ScaleKind::Linear)
            .flat_map(|s| buckets.iter().map(move |b| b.value(&s.field)))
            .fold(1.0_f64, f64::max);
        Self::with_linear_domain(0.0, linear_max, dims)
    }

    pub fn with_linear_domain(min: f64, max: f64, dims: &ChartDimensions) -> Self {
        let (top, height) = (dims.top(), dims.plot_height());
        Self {
            linear: ValueScale::new(top, height, min, max),
            percentage: ValueScale::new(top, height, 0.0, PERCENT_MAX),
        }
    }

    pub fn scale(&self, kind: ScaleKind) -> &ValueScale {
        match kind {
            ScaleKind::Linear => &self.linear,
            ScaleKind::Percentage => &self.percentage,
        }
    }

    /// Pixel y for a value; percentage values are clamped into `[0, 100]` first.
    pub fn y_for(&self, kind: ScaleKind, value: f64) -> f64 {
        let value = match kind {
            ScaleKind::Linear => value,
            ScaleKind::Percentage => value.clamp(0.0, PERCENT_MAX),
        };
        self.scale(kind).to_px(value)
    }
}
