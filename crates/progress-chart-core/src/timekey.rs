// File: crates/progress-chart-core/src/timekey.rs
// Summary: Normalizes heterogeneous date/time strings into canonical "DD.MM[ HH:MM]" bucket keys.

use chrono::{Datelike, NaiveDate};

/// Canonical time key of one bucket.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimeKey {
    /// `"DD.MM"` part.
    pub date: String,
    /// `"HH:MM"` part for hourly buckets.
    pub time: Option<String>,
}

impl TimeKey {
    /// Full key: `"DD.MM"` or `"DD.MM HH:MM"`.
    pub fn key(&self) -> String {
        match &self.time {
            Some(t) => format!("{} {}", self.date, t),
            None => self.date.clone(),
        }
    }

    /// Short axis label: the time for hourly buckets, the date otherwise.
    pub fn label(&self) -> String {
        self.time.clone().unwrap_or_else(|| self.date.clone())
    }
}

/// Parses raw date/time pairs into [`TimeKey`]s.
///
/// Records that carry only a time of day are bucketed under `today`, so two
/// such records from different days but the same hour share one bucket.
#[derive(Clone, Copy, Debug)]
pub struct TimeKeyNormalizer {
    today: NaiveDate,
}

impl TimeKeyNormalizer {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Returns `None` when nothing parseable is present; the caller drops the record.
    pub fn normalize(&self, raw_date: Option<&str>, raw_time: Option<&str>) -> Option<TimeKey> {
        let raw_date = raw_date.map(str::trim).filter(|s| !s.is_empty());
        let raw_time = raw_time.map(str::trim).filter(|s| !s.is_empty());

        let Some(date) = raw_date else {
            // Time-only record.
            let time = parse_hour_minute(raw_time?)?;
            return Some(TimeKey { date: format_day_month(self.today), time: Some(time) });
        };

        if is_day_month(date) {
            return Some(TimeKey { date: date.to_string(), time: separate_time(raw_time) });
        }

        if let Some((date_part, time_part)) = date.split_once('T') {
            let day_month = parse_iso_date(date_part)?;
            // The embedded time wins over a separately supplied one.
            let time = parse_hour_minute(time_part).or_else(|| separate_time(raw_time));
            return Some(TimeKey { date: day_month, time });
        }

        let day_month = parse_iso_date(date)?;
        Some(TimeKey { date: day_month, time: separate_time(raw_time) })
    }
}

fn separate_time(raw_time: Option<&str>) -> Option<String> {
    let raw = raw_time?;
    let parsed = parse_hour_minute(raw);
    if parsed.is_none() {
        tracing::debug!(raw_time = raw, "ignoring malformed time next to a valid date");
    }
    parsed
}

/// `DD.MM` exactly: two digits, a dot, two digits.
fn is_day_month(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 5
        && b[0].is_ascii_digit()
        && b[1].is_ascii_digit()
        && b[2] == b'.'
        && b[3].is_ascii_digit()
        && b[4].is_ascii_digit()
}

/// `YYYY-MM-DD` → `DD.MM`, rejecting impossible calendar dates.
fn parse_iso_date(s: &str) -> Option<String> {
    if s.len() != 10 {
        return None;
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(format_day_month(date))
}

/// Accepts `H:MM`, `HH:MM` and a longer `HH:MM:SS...` tail, returning `HH:MM`.
fn parse_hour_minute(s: &str) -> Option<String> {
    let mut parts = s.splitn(3, ':');
    let hour = parts.next()?;
    let minute = parts.next()?;
    let minute = minute.get(..2)?;
    if hour.is_empty() || hour.len() > 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !minute.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let h: u32 = hour.parse().ok()?;
    let m: u32 = minute.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(format!("{h:02}:{m:02}"))
}

pub(crate) fn format_day_month(date: NaiveDate) -> String {
    format!("{:02}.{:02}", date.day(), date.month())
}
