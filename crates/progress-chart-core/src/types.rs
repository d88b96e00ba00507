// File: crates/progress-chart-core/src/types.rs
// Summary: Shared types and constants (surface size, paddings, field ids).

use serde::{Deserialize, Serialize};

// Default surface size
pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 300;

/// Identifier of one numeric field carried by buckets (e.g. `"theory"`).
pub type FieldId = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(48, 48, 20, 32)
    }
}

/// Outer size of the chart surface plus its paddings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub insets: Insets,
}

impl ChartDimensions {
    pub const fn new(width: u32, height: u32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    /// Drawable width between the left and right insets, never below 1px.
    pub fn plot_width(&self) -> f64 {
        (self.width.saturating_sub(self.insets.hsum()) as f64).max(1.0)
    }

    /// Drawable height between the top and bottom insets, never below 1px.
    pub fn plot_height(&self) -> f64 {
        (self.height.saturating_sub(self.insets.vsum()) as f64).max(1.0)
    }

    pub fn left(&self) -> f64 { self.insets.left as f64 }
    pub fn top(&self) -> f64 { self.insets.top as f64 }
    pub fn right(&self) -> f64 { self.left() + self.plot_width() }
    pub fn bottom(&self) -> f64 { self.top() + self.plot_height() }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
