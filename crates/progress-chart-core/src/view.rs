// File: crates/progress-chart-core/src/view.rs
// Hover state shell: the only mutable piece around the pure chart build.

use crate::chart::ChartModel;
use crate::hover::{CountClassifier, HoverResolver, HoverSnapshot};

/// Holds the currently hovered bucket of one displayed model.
///
/// Everything else is derived on demand through [`HoverResolver`]; rebuilding the
/// model means starting a fresh state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    index: Option<usize>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Hover a bucket by index; out-of-range indices clear the hover.
    pub fn hover_index(&mut self, model: &ChartModel, index: usize) -> Option<usize> {
        self.index = model.hover_index.contains_key(&index).then_some(index);
        self.index
    }

    /// Regions can overlap once the minimum hit width kicks in; the region whose
    /// center is closest wins.
    pub fn hover_at_x(&mut self, model: &ChartModel, x: f64) -> Option<usize> {
        self.index = model
            .hit_regions
            .iter()
            .filter(|r| r.rect.contains_x(x))
            .min_by(|a, b| (a.center_x - x).abs().total_cmp(&(b.center_x - x).abs()))
            .map(|r| r.index);
        self.index
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    pub fn snapshot<C: CountClassifier>(&self, model: &ChartModel, resolver: &HoverResolver<C>) -> Option<HoverSnapshot> {
        resolver.resolve(model, self.index?)
    }
}
