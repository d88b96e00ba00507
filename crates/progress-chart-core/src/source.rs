// File: crates/progress-chart-core/src/source.rs
// Summary: Typed activity sources and raw input records, validated once at ingestion.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::FieldId;

/// Field ids produced by the secondary timelines.
pub mod fields {
    pub const VIDEO_MINUTES: &str = "video_minutes";
    pub const THEORY: &str = "theory";
    pub const CHALLENGES_SOLVED: &str = "challenges_solved";
    pub const CHALLENGES_ATTEMPTED: &str = "challenges_attempted";
    pub const CHALLENGE_SUCCESS: &str = "challenge_success";
    pub const QUIZZES_PASSED: &str = "quizzes_passed";
    pub const QUIZ_SCORE: &str = "quiz_score";
    pub const EXERCISES_DONE: &str = "exercises_done";
    pub const EXERCISE_ACCURACY: &str = "exercise_accuracy";
    pub const EFFICIENCY: &str = "efficiency";
}

/// One secondary activity feed. Declaration order is the fallback merge priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Video,
    Theory,
    Challenge,
    Quiz,
    Exercise,
}

impl SourceKind {
    pub const ALL: [SourceKind; 5] = [
        SourceKind::Video,
        SourceKind::Theory,
        SourceKind::Challenge,
        SourceKind::Quiz,
        SourceKind::Exercise,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SourceKind::Video => "video",
            SourceKind::Theory => "theory",
            SourceKind::Challenge => "challenge",
            SourceKind::Quiz => "quiz",
            SourceKind::Exercise => "exercise",
        }
    }

    /// Maps a raw record of this source onto canonical field ids.
    ///
    /// Fields the source does not own are dropped, non-finite values become `0`.
    pub fn extract(&self, raw: &BTreeMap<String, f64>) -> BTreeMap<FieldId, f64> {
        let table: &[(&str, &str)] = match self {
            SourceKind::Video => &[
                (fields::VIDEO_MINUTES, fields::VIDEO_MINUTES),
                ("minutes", fields::VIDEO_MINUTES),
                ("watch_time", fields::VIDEO_MINUTES),
            ],
            SourceKind::Theory => &[
                (fields::THEORY, fields::THEORY),
                ("pages", fields::THEORY),
                ("count", fields::THEORY),
            ],
            SourceKind::Challenge => &[
                (fields::CHALLENGES_SOLVED, fields::CHALLENGES_SOLVED),
                ("solved", fields::CHALLENGES_SOLVED),
                (fields::CHALLENGES_ATTEMPTED, fields::CHALLENGES_ATTEMPTED),
                ("attempts", fields::CHALLENGES_ATTEMPTED),
                (fields::CHALLENGE_SUCCESS, fields::CHALLENGE_SUCCESS),
            ],
            SourceKind::Quiz => &[
                (fields::QUIZZES_PASSED, fields::QUIZZES_PASSED),
                ("passed", fields::QUIZZES_PASSED),
                (fields::QUIZ_SCORE, fields::QUIZ_SCORE),
                ("score", fields::QUIZ_SCORE),
            ],
            SourceKind::Exercise => &[
                (fields::EXERCISES_DONE, fields::EXERCISES_DONE),
                ("completed", fields::EXERCISES_DONE),
                (fields::EXERCISE_ACCURACY, fields::EXERCISE_ACCURACY),
                ("accuracy", fields::EXERCISE_ACCURACY),
            ],
        };
        let mut out = BTreeMap::new();
        // Canonical names come first in each table, so they win over aliases.
        for (raw_name, field) in table {
            if let Some(v) = raw.get(*raw_name) {
                out.entry(field.to_string()).or_insert_with(|| finite_or_zero(*v));
            }
        }
        out
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceKind::ALL
            .into_iter()
            .find(|k| k.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.to_string())
    }
}

/// One observation from one secondary source.
#[derive(Clone, Debug, PartialEq)]
pub struct RawEventPoint {
    pub source: SourceKind,
    pub raw_date: Option<String>,
    pub raw_time: Option<String>,
    pub fields: BTreeMap<String, f64>,
}

impl RawEventPoint {
    pub fn new(source: SourceKind) -> Self {
        Self { source, raw_date: None, raw_time: None, fields: BTreeMap::new() }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.raw_date = Some(date.into());
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.raw_time = Some(time.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>, value: f64) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    /// Ingest a loosely shaped JSON object.
    ///
    /// The date is read from `date`, `timestamp` or `day`; the time from `time` or
    /// `hour`. Every other key becomes a numeric field.
    pub fn from_json(source: SourceKind, value: &Value) -> Self {
        let (raw_date, raw_time, fields) = split_json_record(value);
        Self { source, raw_date, raw_time, fields }
    }
}

/// One row of the authoritative per-day counters.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimaryBucketRaw {
    pub date: String,
    pub time: Option<String>,
    pub fields: BTreeMap<String, f64>,
}

impl PrimaryBucketRaw {
    pub fn new(date: impl Into<String>) -> Self {
        Self { date: date.into(), time: None, fields: BTreeMap::new() }
    }

    pub fn with_field(mut self, field: impl Into<String>, value: f64) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    /// Same key conventions as [`RawEventPoint::from_json`]. A missing date becomes an
    /// empty string: the row is then keyed by its time alone, under the reference date,
    /// or dropped and counted when it has no usable time either.
    pub fn from_json(value: &Value) -> Self {
        let (date, time, fields) = split_json_record(value);
        Self { date: date.unwrap_or_default(), time, fields }
    }
}

const DATE_KEYS: [&str; 3] = ["date", "timestamp", "day"];
const TIME_KEYS: [&str; 2] = ["time", "hour"];

fn split_json_record(value: &Value) -> (Option<String>, Option<String>, BTreeMap<String, f64>) {
    let mut date = None;
    let mut time = None;
    let mut fields = BTreeMap::new();
    let Some(obj) = value.as_object() else {
        return (date, time, fields);
    };
    for (k, v) in obj {
        if DATE_KEYS.contains(&k.as_str()) {
            if date.is_none() {
                date = v.as_str().map(str::to_string);
            }
        } else if TIME_KEYS.contains(&k.as_str()) {
            if time.is_none() {
                time = json_time(v);
            }
        } else {
            fields.insert(k.clone(), coerce_number(v));
        }
    }
    (date, time, fields)
}

/// An integer `hour` is accepted as `"HH:00"`.
fn json_time(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_u64().map(|h| format!("{h:02}:00")),
        _ => None,
    }
}

/// Numbers pass through, numeric strings parse, everything else is `0`.
pub fn coerce_number(v: &Value) -> f64 {
    let n = match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    };
    finite_or_zero(n)
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
