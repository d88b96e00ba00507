// File: crates/progress-chart-core/tests/merge.rs
// Purpose: Multi-source merge: first-write-wins, source priority, commutativity, edge cases.

use std::collections::HashMap;

use chrono::NaiveDate;
use progress_chart_core::{PrimaryBucketRaw, RawEventPoint, SeriesMerger, SourceKind, TimeKeyNormalizer};

fn merger(priority: &[SourceKind]) -> SeriesMerger {
    let today = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
    SeriesMerger::new(TimeKeyNormalizer::new(today), priority)
}

fn video(date: &str, minutes: f64) -> RawEventPoint {
    RawEventPoint::new(SourceKind::Video).with_date(date).with_field("video_minutes", minutes)
}

fn theory(date: &str, count: f64) -> RawEventPoint {
    RawEventPoint::new(SourceKind::Theory).with_date(date).with_field("theory", count)
}

#[test]
fn end_to_end_scenario_merges_video_into_primary_days() {
    let primary = vec![
        PrimaryBucketRaw::new("01.03").with_field("theory", 2.0),
        PrimaryBucketRaw::new("02.03").with_field("theory", 0.0),
    ];
    let secondary = HashMap::from([(SourceKind::Video, vec![video("2025-03-01", 5.0)])]);

    let out = merger(&SourceKind::ALL).merge(&primary, &secondary);

    assert_eq!(out.buckets.len(), 2);
    let first = &out.buckets[0];
    assert_eq!(first.key, "01.03");
    assert_eq!(first.value("theory"), 2.0);
    assert_eq!(first.value("video_minutes"), 5.0);
    let second = &out.buckets[1];
    assert_eq!(second.key, "02.03");
    assert_eq!(second.value("theory"), 0.0);
    assert_eq!(second.value("video_minutes"), 0.0);
    assert_eq!(second.fields.get("video_minutes"), Some(&0.0));
    // Zero-filled is not the same as offered.
    assert!(second.offers("theory"));
    assert!(!second.offers("video_minutes"));
}

#[test]
fn primary_value_wins_over_secondary() {
    let primary = vec![PrimaryBucketRaw::new("01.03").with_field("theory", 2.0)];
    let secondary = HashMap::from([(SourceKind::Theory, vec![theory("2025-03-01", 9.0)])]);

    let out = merger(&[]).merge(&primary, &secondary);

    assert_eq!(out.buckets[0].value("theory"), 2.0);
}

#[test]
fn primary_zero_is_still_authoritative() {
    let primary = vec![PrimaryBucketRaw::new("02.03").with_field("theory", 0.0)];
    let secondary = HashMap::from([(SourceKind::Theory, vec![theory("02.03", 4.0)])]);

    let out = merger(&[]).merge(&primary, &secondary);

    assert_eq!(out.buckets[0].value("theory"), 0.0);
}

#[test]
fn secondary_only_buckets_append_after_primary() {
    let primary = vec![
        PrimaryBucketRaw::new("01.03").with_field("theory", 1.0),
        PrimaryBucketRaw::new("02.03").with_field("theory", 1.0),
    ];
    let secondary = HashMap::from([(
        SourceKind::Video,
        vec![video("2025-03-05", 3.0), video("2025-03-04", 2.0), video("2025-03-05", 8.0)],
    )]);

    let out = merger(&[]).merge(&primary, &secondary);

    let keys: Vec<_> = out.buckets.iter().map(|b| (b.key.as_str(), b.order)).collect();
    assert_eq!(keys, vec![("01.03", 0), ("02.03", 1), ("05.03", 2), ("04.03", 3)]);
    // Second 05.03 record does not overwrite the first.
    assert_eq!(out.buckets[2].value("video_minutes"), 3.0);
}

#[test]
fn priority_decides_which_source_creates_a_new_bucket() {
    let secondary = HashMap::from([
        (SourceKind::Video, vec![video("2025-03-03", 5.0), video("2025-03-04", 1.0)]),
        (SourceKind::Theory, vec![theory("2025-03-04", 2.0), theory("2025-03-03", 7.0)]),
    ]);

    let video_first = merger(&[SourceKind::Video, SourceKind::Theory]).merge(&[], &secondary);
    let theory_first = merger(&[SourceKind::Theory, SourceKind::Video]).merge(&[], &secondary);

    let keys = |o: &progress_chart_core::MergeOutcome| o.buckets.iter().map(|b| b.key.clone()).collect::<Vec<_>>();
    assert_eq!(keys(&video_first), vec!["03.03", "04.03"]);
    assert_eq!(keys(&theory_first), vec!["04.03", "03.03"]);
    // Disjoint fields, so values agree regardless of who created the bucket.
    assert_eq!(video_first.buckets[0].value("theory"), 7.0);
    assert_eq!(theory_first.buckets[1].value("video_minutes"), 5.0);
}

#[test]
fn merge_is_independent_of_map_iteration_order() {
    let pairs = vec![
        (SourceKind::Video, vec![video("2025-03-03", 5.0)]),
        (SourceKind::Theory, vec![theory("2025-03-03", 7.0), theory("2025-03-06", 1.0)]),
        (
            SourceKind::Quiz,
            vec![RawEventPoint::new(SourceKind::Quiz).with_date("2025-03-06").with_field("score", 80.0)],
        ),
    ];
    let priority = [SourceKind::Quiz, SourceKind::Video, SourceKind::Theory];
    let baseline: HashMap<_, _> = pairs.iter().cloned().collect();
    let expected = merger(&priority).merge(&[], &baseline);

    for rotation in 1..pairs.len() {
        let mut permuted = pairs.clone();
        permuted.rotate_left(rotation);
        permuted.reverse();
        let mut map = HashMap::new();
        for (k, v) in permuted {
            map.insert(k, v);
        }
        assert_eq!(merger(&priority).merge(&[], &map), expected);
    }
}

#[test]
fn empty_primary_builds_buckets_from_secondaries() {
    let secondary = HashMap::from([(SourceKind::Video, vec![video("2025-03-02", 4.0)])]);

    let out = merger(&[]).merge(&[], &secondary);

    assert_eq!(out.buckets.len(), 1);
    assert_eq!(out.buckets[0].order, 0);
    assert_eq!(out.buckets[0].key, "02.03");
}

#[test]
fn all_inputs_empty_yield_no_buckets() {
    let out = merger(&[]).merge(&[], &HashMap::new());
    assert!(out.buckets.is_empty());
    assert_eq!(out.normalization_failures, 0);
}

#[test]
fn unparsable_records_are_dropped_and_counted() {
    let secondary = HashMap::from([(
        SourceKind::Video,
        vec![video("N/A", 3.0), RawEventPoint::new(SourceKind::Video).with_field("video_minutes", 1.0)],
    )]);

    let out = merger(&[]).merge(&[PrimaryBucketRaw::new("someday")], &secondary);

    assert!(out.buckets.is_empty());
    assert_eq!(out.normalization_failures, 3);
}

#[test]
fn hourly_timeline_records_get_their_own_buckets() {
    let secondary = HashMap::from([(
        SourceKind::Video,
        vec![
            RawEventPoint::new(SourceKind::Video).with_date("2025-03-07T09:10:00").with_field("minutes", 3.0),
            RawEventPoint::new(SourceKind::Video).with_date("07.03").with_time("11:00").with_field("minutes", 6.0),
        ],
    )]);

    let out = merger(&[]).merge(&[PrimaryBucketRaw::new("07.03")], &secondary);

    let keys: Vec<_> = out.buckets.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, vec!["07.03", "07.03 09:10", "07.03 11:00"]);
    assert_eq!(out.buckets[2].value("video_minutes"), 6.0);
}

#[test]
fn dateless_primary_rows_fall_back_to_their_time_or_are_dropped() {
    let primary = vec![
        PrimaryBucketRaw::from_json(&serde_json::json!({ "hour": "9:30", "theory": 2 })),
        PrimaryBucketRaw::from_json(&serde_json::json!({ "theory": 5 })),
    ];

    let out = merger(&[]).merge(&primary, &HashMap::new());

    let keys: Vec<_> = out.buckets.iter().map(|b| b.key.as_str()).collect();
    assert_eq!(keys, vec!["09.03 09:30"]);
    assert_eq!(out.buckets[0].value("theory"), 2.0);
    assert_eq!(out.normalization_failures, 1);
}
