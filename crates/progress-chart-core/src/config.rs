// File: crates/progress-chart-core/src/config.rs
// Summary: Chart build configuration: section, period hint, source priority, dimensions.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::series::SeriesCatalog;
use crate::source::SourceKind;
use crate::types::ChartDimensions;

/// Dashboard section; selects the active series set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Lessons,
    Challenges,
    Quizzes,
    Exercises,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Lessons => "lessons",
            Section::Challenges => "challenges",
            Section::Quizzes => "quizzes",
            Section::Exercises => "exercises",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lessons" => Ok(Section::Lessons),
            "challenges" => Ok(Section::Challenges),
            "quizzes" => Ok(Section::Quizzes),
            "exercises" => Ok(Section::Exercises),
            _ => Err(ConfigurationError::UnknownSection(s.to_string())),
        }
    }
}

/// Requested time window. Only affects label density.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodHint {
    Day,
    #[default]
    Week,
    Month,
    Quarter,
}

impl PeriodHint {
    /// Upper bound on the number of visible x labels.
    pub fn max_x_labels(&self) -> usize {
        match self {
            PeriodHint::Day => 8,
            PeriodHint::Week => 7,
            PeriodHint::Month => 10,
            PeriodHint::Quarter => 13,
        }
    }

    /// Show every `stride`-th label so at most [`Self::max_x_labels`] remain.
    pub fn label_stride(&self, bucket_count: usize) -> usize {
        bucket_count.div_ceil(self.max_x_labels()).max(1)
    }
}

impl FromStr for PeriodHint {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(PeriodHint::Day),
            "week" => Ok(PeriodHint::Week),
            "month" => Ok(PeriodHint::Month),
            "quarter" => Ok(PeriodHint::Quarter),
            _ => Err(ConfigurationError::UnknownPeriod(s.to_string())),
        }
    }
}

/// Resolved, typed configuration of one build.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub section: Section,
    pub period_hint: PeriodHint,
    /// Fold order of secondary sources when two of them create the same new bucket.
    pub source_priority: Vec<SourceKind>,
    pub dimensions: ChartDimensions,
    /// "Today" for time-only records.
    pub reference_date: NaiveDate,
    pub catalog: SeriesCatalog,
}

impl ChartConfig {
    pub fn new(section: Section, period_hint: PeriodHint, reference_date: NaiveDate) -> Self {
        Self {
            section,
            period_hint,
            source_priority: SourceKind::ALL.to_vec(),
            dimensions: ChartDimensions::default(),
            reference_date,
            catalog: SeriesCatalog::builtin(),
        }
    }

    pub fn with_source_priority(mut self, priority: Vec<SourceKind>) -> Self {
        self.source_priority = priority;
        self
    }

    pub fn with_dimensions(mut self, dimensions: ChartDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_catalog(mut self, catalog: SeriesCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}

/// String-typed configuration as it arrives from settings files or callers.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawChartConfig {
    pub section: String,
    #[serde(default)]
    pub period_hint: Option<String>,
    #[serde(default)]
    pub source_priority: Vec<String>,
    #[serde(default)]
    pub dimensions: Option<ChartDimensions>,
    /// `YYYY-MM-DD`; defaults to the local date.
    #[serde(default)]
    pub reference_date: Option<String>,
}

impl RawChartConfig {
    /// Resolve into a [`ChartConfig`], failing only on contract violations.
    pub fn resolve(&self) -> Result<ChartConfig, ConfigurationError> {
        let section: Section = self.section.parse()?;
        let period_hint = match &self.period_hint {
            Some(p) => p.parse()?,
            None => PeriodHint::default(),
        };
        let reference_date = match &self.reference_date {
            Some(d) => NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                .map_err(|_| ConfigurationError::InvalidReferenceDate(d.clone()))?,
            None => chrono::Local::now().date_naive(),
        };

        let mut priority = Vec::with_capacity(self.source_priority.len());
        for id in &self.source_priority {
            match id.parse::<SourceKind>() {
                Ok(kind) => priority.push(kind),
                Err(unknown) => tracing::warn!(source = %unknown, "ignoring unknown source in priority list"),
            }
        }
        if priority.is_empty() {
            priority = SourceKind::ALL.to_vec();
        }

        Ok(ChartConfig::new(section, period_hint, reference_date)
            .with_source_priority(priority)
            .with_dimensions(self.dimensions.unwrap_or_default()))
    }
}

impl TryFrom<RawChartConfig> for ChartConfig {
    type Error = ConfigurationError;

    fn try_from(raw: RawChartConfig) -> Result<Self, Self::Error> {
        raw.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_stride_thins_dense_axes() {
        assert_eq!(PeriodHint::Week.label_stride(7), 1);
        assert_eq!(PeriodHint::Day.label_stride(24), 3);
        assert_eq!(PeriodHint::Quarter.label_stride(90), 7);
        assert_eq!(PeriodHint::Month.label_stride(0), 1);
    }

    #[test]
    fn section_parse_is_case_insensitive() {
        assert_eq!("Quizzes".parse::<Section>(), Ok(Section::Quizzes));
    }
}
