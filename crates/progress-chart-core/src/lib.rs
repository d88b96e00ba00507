// File: crates/progress-chart-core/src/lib.rs
// Summary: Core library entry point; merges learning-activity feeds into a renderer-agnostic chart model.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod config;
pub mod error;
pub mod source;
pub mod timekey;
pub mod merge;
pub mod curve;
pub mod legend;
pub mod hover;

pub use chart::{build_chart, BuildDiagnostics, ChartComposer, ChartModel, HitRegion, XLabel};
pub use series::{Series, SeriesCatalog, UnitForms};
pub use axis::{Axis, ScaleKind};
pub use config::{ChartConfig, PeriodHint, RawChartConfig, Section};
pub use error::ConfigurationError;
pub use source::{PrimaryBucketRaw, RawEventPoint, SourceKind};
pub use timekey::{TimeKey, TimeKeyNormalizer};
pub use merge::{CanonicalBucket, MergeOutcome, SeriesMerger};
pub use scale::{AxisScaler, IndexScale, ValueScale};
pub use curve::{build_curve, CubicSegment, PathDescriptor, PathGeometry};
pub use legend::{DataPresence, LegendEntry};
pub use hover::{CountClassifier, HoverResolver, HoverSnapshot, PluralForm, ThreeFormClassifier};
pub use view::HoverState;
pub use geometry::Point;
