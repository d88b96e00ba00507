use std::collections::HashMap;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use progress_chart_core::{PrimaryBucketRaw, RawEventPoint, SeriesMerger, SourceKind, TimeKeyNormalizer};

fn gen_inputs(days: u64) -> (Vec<PrimaryBucketRaw>, HashMap<SourceKind, Vec<RawEventPoint>>) {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let mut primary = Vec::with_capacity(days as usize);
    let mut video = Vec::new();
    let mut quiz = Vec::new();
    for i in 0..days {
        let d = start + chrono::Days::new(i);
        primary.push(PrimaryBucketRaw::new(d.format("%d.%m").to_string()).with_field("theory", (i % 5) as f64));
        // hourly timeline events, a few per day
        for h in [9u64, 13, 18] {
            let ts = format!("{}T{:02}:00:00", d.format("%Y-%m-%d"), h);
            video.push(RawEventPoint::new(SourceKind::Video).with_date(ts).with_field("minutes", (h + i) as f64));
        }
        quiz.push(RawEventPoint::new(SourceKind::Quiz).with_date(d.format("%Y-%m-%d").to_string()).with_field("score", 70.0));
    }
    let secondary = HashMap::from([(SourceKind::Video, video), (SourceKind::Quiz, quiz)]);
    (primary, secondary)
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let merger = SeriesMerger::new(TimeKeyNormalizer::new(today), &SourceKind::ALL);
    for &days in &[7u64, 30, 90] {
        let (primary, secondary) = gen_inputs(days);
        group.bench_with_input(BenchmarkId::from_parameter(format!("days{days}")), &days, |b, _| {
            b.iter_batched(
                || (primary.clone(), secondary.clone()),
                |(p, s)| { let _ = black_box(merger.merge(&p, &s)); },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
