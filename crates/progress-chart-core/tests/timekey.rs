// File: crates/progress-chart-core/tests/timekey.rs
// Purpose: Literal date/time normalization cases, including the time-only "today" bucketing.

use chrono::NaiveDate;
use progress_chart_core::TimeKeyNormalizer;

fn normalizer() -> TimeKeyNormalizer {
    TimeKeyNormalizer::new(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
}

fn key(date: Option<&str>, time: Option<&str>) -> Option<String> {
    normalizer().normalize(date, time).map(|k| k.key())
}

#[test]
fn iso_date_drops_year_and_reorders() {
    assert_eq!(key(Some("2025-03-07"), None).as_deref(), Some("07.03"));
}

#[test]
fn iso_timestamp_keeps_hour_and_minute() {
    assert_eq!(key(Some("2025-03-07T14:30:00"), None).as_deref(), Some("07.03 14:30"));
}

#[test]
fn day_month_passes_through_unchanged() {
    assert_eq!(key(Some("07.03"), None).as_deref(), Some("07.03"));
}

#[test]
fn unparsable_date_is_rejected() {
    assert_eq!(key(Some("N/A"), None), None);
    assert_eq!(key(None, None), None);
    assert_eq!(key(Some(""), Some("")), None);
}

#[test]
fn separate_time_is_appended() {
    assert_eq!(key(Some("07.03"), Some("09:00")).as_deref(), Some("07.03 09:00"));
    assert_eq!(key(Some("2025-03-07"), Some("18:45")).as_deref(), Some("07.03 18:45"));
}

#[test]
fn embedded_time_wins_over_separate_time() {
    assert_eq!(key(Some("2025-03-07T08:15:00"), Some("22:00")).as_deref(), Some("07.03 08:15"));
}

#[test]
fn time_only_records_land_on_the_reference_date() {
    assert_eq!(key(None, Some("14:00")).as_deref(), Some("09.03 14:00"));
    // Same hour on two different real days collapses into one bucket.
    assert_eq!(key(None, Some("14:00")), key(None, Some("14:00")));
}

#[test]
fn labels_prefer_time_for_hourly_buckets() {
    let daily = normalizer().normalize(Some("2025-03-07"), None).unwrap();
    let hourly = normalizer().normalize(Some("2025-03-07T14:30:00"), None).unwrap();
    assert_eq!(daily.label(), "07.03");
    assert_eq!(hourly.label(), "14:30");
}
