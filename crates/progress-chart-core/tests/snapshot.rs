// File: crates/progress-chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Builds a deterministic small chart model and serializes it to pretty JSON.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, compares the JSON values against the committed snapshot for exact match.

use std::collections::HashMap;

use chrono::NaiveDate;
use progress_chart_core::types::{ChartDimensions, Insets};
use progress_chart_core::{build_chart, ChartConfig, PeriodHint, PrimaryBucketRaw, RawEventPoint, Section, SourceKind};

fn render_json() -> String {
    let primary = vec![
        PrimaryBucketRaw::new("01.03").with_field("theory", 2.0).with_field("efficiency", 40.0),
        PrimaryBucketRaw::new("02.03").with_field("theory", 0.0).with_field("efficiency", 55.0),
        PrimaryBucketRaw::new("03.03").with_field("theory", 4.0).with_field("efficiency", 70.0),
    ];
    let secondary = HashMap::from([(
        SourceKind::Video,
        vec![
            RawEventPoint::new(SourceKind::Video).with_date("2025-03-01").with_field("video_minutes", 5.0),
            RawEventPoint::new(SourceKind::Video).with_date("2025-03-03").with_field("minutes", 12.0),
        ],
    )]);
    // 300 x 200 plot: three 100px bands starting at x = 40.
    let config = ChartConfig::new(Section::Lessons, PeriodHint::Week, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
        .with_dimensions(ChartDimensions::new(380, 240, Insets::new(40, 40, 20, 20)));
    let model = build_chart(&primary, &secondary, &config);
    serde_json::to_string_pretty(&model).expect("serialize model")
}

#[test]
fn golden_lessons_model() {
    let json = render_json();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("lessons_model.json");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &json).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), json.len());
        return;
    }

    let want = std::fs::read_to_string(&snap_path)
        .unwrap_or_else(|e| panic!("read {}: {e}; set UPDATE_SNAPSHOTS=1 to bless", snap_path.display()));
    // Compare parsed values to avoid whitespace variance
    let got: serde_json::Value = serde_json::from_str(&json).expect("parse got");
    let want: serde_json::Value = serde_json::from_str(&want).expect("parse want");
    assert_eq!(got, want, "chart model differs from golden snapshot: {}", snap_path.display());
}
