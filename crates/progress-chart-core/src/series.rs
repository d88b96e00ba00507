// File: crates/progress-chart-core/src/series.rs
// Summary: Line definitions (field, scale kind, offset, color, unit) and the per-section catalog.
// Notes:
// - The scale kind is fixed at construction; there is no setter, so it cannot
//   change while a build is in flight.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::axis::ScaleKind;
use crate::config::Section;
use crate::source::fields;
use crate::theme::{Palette, Rgba};
use crate::types::FieldId;

/// Word forms of a count unit, picked by a [`crate::hover::CountClassifier`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnitForms {
    pub singular: String,
    pub few: String,
    pub many: String,
}

impl UnitForms {
    pub fn new(singular: impl Into<String>, few: impl Into<String>, many: impl Into<String>) -> Self {
        Self { singular: singular.into(), few: few.into(), many: many.into() }
    }

    /// Languages with one plural form reuse it for `few` and `many`.
    pub fn two_form(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        let plural = plural.into();
        Self::new(singular, plural.clone(), plural)
    }
}

/// One line of the chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub id: String,
    pub display_label: String,
    /// Bucket field read by this line.
    pub field: FieldId,
    scale_kind: ScaleKind,
    /// Vertical nudge used to keep overlapping lines apart.
    pub visual_offset_px: f64,
    /// Aggregate lines (efficiency, scores) stay visible without data.
    pub always_show: bool,
    pub color: Rgba,
    /// Count unit for tooltips; percentage series ignore it.
    pub unit: Option<UnitForms>,
}

impl Series {
    pub fn new(
        id: impl Into<String>,
        display_label: impl Into<String>,
        field: impl Into<FieldId>,
        scale_kind: ScaleKind,
    ) -> Self {
        Self {
            id: id.into(),
            display_label: display_label.into(),
            field: field.into(),
            scale_kind,
            visual_offset_px: 0.0,
            always_show: false,
            color: Rgba::from_argb(255, 64, 160, 255),
            unit: None,
        }
    }

    pub fn scale_kind(&self) -> ScaleKind { self.scale_kind }

    pub fn with_offset(mut self, px: f64) -> Self {
        self.visual_offset_px = px;
        self
    }

    pub fn always_shown(mut self) -> Self {
        self.always_show = true;
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_unit(mut self, unit: UnitForms) -> Self {
        self.unit = Some(unit);
        self
    }
}

/// Series definitions per section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesCatalog {
    sections: BTreeMap<&'static str, Vec<Series>>,
}

impl SeriesCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section: Section, series: Vec<Series>) -> Self {
        self.sections.insert(section.id(), series);
        self
    }

    /// Active series of `section`; empty when the catalog has none.
    pub fn for_section(&self, section: Section) -> Vec<Series> {
        self.sections.get(section.id()).cloned().unwrap_or_default()
    }

    /// The dashboard's stock definitions.
    pub fn builtin() -> Self {
        let lessons = Palette::lessons();
        let challenges = Palette::challenges();
        let quizzes = Palette::quizzes();
        let exercises = Palette::exercises();
        let minutes = UnitForms::two_form("minute", "minutes");

        Self::empty()
            .with_section(
                Section::Lessons,
                vec![
                    Series::new("video", "Video", fields::VIDEO_MINUTES, ScaleKind::Linear)
                        .with_color(lessons.primary)
                        .with_unit(minutes),
                    Series::new("theory", "Theory", fields::THEORY, ScaleKind::Linear)
                        .with_color(lessons.secondary_or_primary())
                        .with_offset(2.0)
                        .with_unit(UnitForms::two_form("topic", "topics")),
                    Series::new("efficiency", "Efficiency", fields::EFFICIENCY, ScaleKind::Percentage)
                        .with_color(lessons.ratio)
                        .always_shown(),
                ],
            )
            .with_section(
                Section::Challenges,
                vec![
                    Series::new("solved", "Solved", fields::CHALLENGES_SOLVED, ScaleKind::Linear)
                        .with_color(challenges.primary)
                        .with_unit(UnitForms::two_form("challenge", "challenges")),
                    Series::new("attempted", "Attempted", fields::CHALLENGES_ATTEMPTED, ScaleKind::Linear)
                        .with_color(challenges.secondary_or_primary())
                        .with_offset(2.0)
                        .with_unit(UnitForms::two_form("attempt", "attempts")),
                    Series::new("success", "Success rate", fields::CHALLENGE_SUCCESS, ScaleKind::Percentage)
                        .with_color(challenges.ratio)
                        .always_shown(),
                ],
            )
            .with_section(
                Section::Quizzes,
                vec![
                    Series::new("passed", "Passed", fields::QUIZZES_PASSED, ScaleKind::Linear)
                        .with_color(quizzes.primary)
                        .with_unit(UnitForms::two_form("quiz", "quizzes")),
                    Series::new("score", "Score", fields::QUIZ_SCORE, ScaleKind::Percentage)
                        .with_color(quizzes.ratio)
                        .always_shown(),
                ],
            )
            .with_section(
                Section::Exercises,
                vec![
                    Series::new("done", "Completed", fields::EXERCISES_DONE, ScaleKind::Linear)
                        .with_color(exercises.primary)
                        .with_unit(UnitForms::two_form("exercise", "exercises")),
                    Series::new("accuracy", "Accuracy", fields::EXERCISE_ACCURACY, ScaleKind::Percentage)
                        .with_color(exercises.ratio)
                        .with_offset(-2.0)
                        .always_shown(),
                ],
            )
    }
}
