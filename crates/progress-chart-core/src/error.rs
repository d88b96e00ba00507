// File: crates/progress-chart-core/src/error.rs
// Summary: Contract-violation errors raised while resolving chart configuration.

use thiserror::Error;

/// Raised only for caller mistakes in configuration. Messy input data never
/// produces an error; it degrades to zero or absence instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown section '{0}' (expected lessons, challenges, quizzes or exercises)")]
    UnknownSection(String),
    #[error("unknown period hint '{0}' (expected day, week, month or quarter)")]
    UnknownPeriod(String),
    #[error("invalid reference date '{0}' (expected YYYY-MM-DD)")]
    InvalidReferenceDate(String),
}
