use std::collections::HashMap;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use progress_chart_core::{build_chart, build_curve, ChartConfig, PeriodHint, Point, PrimaryBucketRaw, Section};

fn gen_primary(days: u64) -> Vec<PrimaryBucketRaw> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..days)
        .map(|i| {
            let d = start + chrono::Days::new(i);
            // simple waveform with drift
            let theory = ((i as f64 * 0.3).sin() * 4.0 + 4.0).round();
            PrimaryBucketRaw::new(d.format("%Y-%m-%d").to_string())
                .with_field("theory", theory)
                .with_field("video_minutes", (i % 11) as f64 * 3.0)
                .with_field("efficiency", (i as f64 * 1.7) % 100.0)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_chart");
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    for (days, period) in [(7u64, PeriodHint::Week), (30, PeriodHint::Month), (90, PeriodHint::Quarter)] {
        let primary = gen_primary(days);
        let config = ChartConfig::new(Section::Lessons, period, today);
        let secondary = HashMap::new();
        group.bench_function(format!("lessons_{days}"), |b| {
            b.iter(|| black_box(build_chart(&primary, &secondary, &config)));
        });
    }
    group.finish();
}

fn bench_curve(c: &mut Criterion) {
    let points: Vec<Point> = (0..1_000).map(|i| Point::new(i as f64, (i as f64 * 0.05).sin() * 100.0)).collect();
    c.bench_function("build_curve_1000", |b| b.iter(|| black_box(build_curve(&points))));
}

criterion_group!(benches, bench_build, bench_curve);
criterion_main!(benches);
