// File: crates/progress-chart-core/src/hover.rs
// Summary: Tooltip snapshots for one bucket, with a pluggable count-word classifier.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::axis::ScaleKind;
use crate::chart::ChartModel;
use crate::series::{Series, UnitForms};
use crate::theme::Rgba;
use crate::types::FieldId;

/// Grammatical form picked for a count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PluralForm {
    Singular,
    Few,
    Many,
}

impl PluralForm {
    pub fn pick<'a>(&self, forms: &'a UnitForms) -> &'a str {
        match self {
            PluralForm::Singular => &forms.singular,
            PluralForm::Few => &forms.few,
            PluralForm::Many => &forms.many,
        }
    }
}

/// Maps a count to a word form. Locales plug in their own rule.
pub trait CountClassifier {
    fn classify(&self, count: f64) -> PluralForm;
}

impl<F> CountClassifier for F
where
    F: Fn(f64) -> PluralForm,
{
    fn classify(&self, count: f64) -> PluralForm {
        self(count)
    }
}

/// The dashboard's rule: `1` → singular, `2 <= n < 5` → few, anything else → many.
///
/// This intentionally ignores compound numbers such as 21 or 22.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreeFormClassifier;

impl CountClassifier for ThreeFormClassifier {
    fn classify(&self, count: f64) -> PluralForm {
        if count == 1.0 {
            PluralForm::Singular
        } else if (2.0..5.0).contains(&count) {
            PluralForm::Few
        } else {
            PluralForm::Many
        }
    }
}

/// One series' value at the hovered bucket.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HoverEntry {
    pub series_id: String,
    pub label: String,
    pub color: Rgba,
    pub value: f64,
    /// Display text such as `"3 minutes"` or `"45%"`.
    pub text: String,
    /// Whether any source offered the field for this bucket.
    pub offered: bool,
    pub visible: bool,
}

/// Tooltip content for one bucket.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HoverSnapshot {
    pub index: usize,
    pub key: String,
    pub label: String,
    pub entries: Vec<HoverEntry>,
    /// Every field of the bucket, including ones no series reads.
    pub fields: BTreeMap<FieldId, f64>,
}

/// Resolves hovered bucket indices into [`HoverSnapshot`]s.
#[derive(Clone, Debug, Default)]
pub struct HoverResolver<C = ThreeFormClassifier> {
    classifier: C,
}

impl HoverResolver<ThreeFormClassifier> {
    pub fn new() -> Self {
        Self { classifier: ThreeFormClassifier }
    }
}

impl<C: CountClassifier> HoverResolver<C> {
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// `None` when `index` is outside the model's buckets.
    pub fn resolve(&self, model: &ChartModel, index: usize) -> Option<HoverSnapshot> {
        let bucket = model.hover_index.get(&index)?;
        let entries = model
            .series
            .iter()
            .map(|s| {
                let value = bucket.value(&s.field);
                HoverEntry {
                    series_id: s.id.clone(),
                    label: s.display_label.clone(),
                    color: s.color,
                    value,
                    text: self.value_text(s, value),
                    offered: bucket.offers(&s.field),
                    visible: model.is_visible(&s.id),
                }
            })
            .collect();
        Some(HoverSnapshot {
            index,
            key: bucket.key.clone(),
            label: bucket.label.clone(),
            entries,
            fields: bucket.fields.clone(),
        })
    }

    /// Value plus unit: `"45%"` for ratios, `"3 minutes"` for counts with a unit.
    pub fn value_text(&self, series: &Series, value: f64) -> String {
        let number = format_value(value);
        match (series.scale_kind(), &series.unit) {
            (ScaleKind::Percentage, _) => format!("{number}%"),
            (ScaleKind::Linear, Some(unit)) => {
                format!("{number} {}", self.classifier.classify(value).pick(unit))
            }
            (ScaleKind::Linear, None) => number,
        }
    }
}

fn format_value(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v:.0}") } else { format!("{v:.1}") }
}
