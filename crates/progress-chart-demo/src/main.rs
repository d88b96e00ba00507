// File: crates/progress-chart-demo/src/main.rs
// Summary: Demo loads a primary CSV export plus optional JSON timelines, builds the chart model,
// and writes it as JSON and SVG.

mod svg;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use progress_chart_core::{
    build_chart, ChartModel, HoverResolver, PrimaryBucketRaw, RawChartConfig, RawEventPoint, SourceKind,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Accept paths from CLI or fall back to the bundled sample data
    let mut args = std::env::args().skip(1);
    let primary_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| sample_path("primary.csv"));
    let timelines_path = args.next().map(PathBuf::from).or_else(|| {
        let p = sample_path("timelines.json");
        p.exists().then_some(p)
    });

    let raw_config = load_settings().context("failed to load chart settings")?;
    let config = raw_config.resolve().context("invalid chart settings")?;
    info!(section = %config.section, period = ?config.period_hint, "settings resolved");

    let primary = load_primary_csv(&primary_path)
        .with_context(|| format!("failed to load CSV '{}'", primary_path.display()))?;
    info!(rows = primary.len(), path = %primary_path.display(), "primary series loaded");

    let timelines = match &timelines_path {
        Some(p) => load_timelines_json(p).with_context(|| format!("failed to load timelines '{}'", p.display()))?,
        None => HashMap::new(),
    };
    for (source, records) in &timelines {
        info!(%source, records = records.len(), "timeline loaded");
    }

    let model = build_chart(&primary, &timelines, &config);
    if model.diagnostics.normalization_failures > 0 {
        warn!(dropped = model.diagnostics.normalization_failures, "records dropped: unparsable date/time");
    }
    if model.is_empty() {
        warn!("no buckets to chart; a renderer would show the empty state here");
    }

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)?;
    let stem = format!("progress_{}", config.section);

    let json_path = out_dir.join(format!("{stem}.json"));
    std::fs::write(&json_path, serde_json::to_string_pretty(&model)?)?;
    println!("Wrote {}", json_path.display());

    let svg_path = out_dir.join(format!("{stem}.svg"));
    std::fs::write(&svg_path, svg::render(&model))?;
    println!("Wrote {}", svg_path.display());

    print_last_tooltip(&model);
    Ok(())
}

/// Settings file `progress-chart.{toml,json,...}` (optional) overlaid by `PROGRESS_CHART_*` env vars.
fn load_settings() -> Result<RawChartConfig> {
    let settings = config::Config::builder()
        .set_default("section", "lessons")?
        .add_source(config::File::with_name("progress-chart").required(false))
        .add_source(
            config::Environment::with_prefix("PROGRESS_CHART")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("source_priority"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

/// Load the per-day counters: a date column, an optional time column, numeric fields.
fn load_primary_csv(path: &Path) -> Result<Vec<PrimaryBucketRaw>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_date = idx(&["date", "day", "timestamp"]);
    let i_time = idx(&["time", "hour"]);
    if i_date.is_none() {
        warn!(?headers, "no date column; every row will be dropped");
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let date = i_date.and_then(|i| rec.get(i)).unwrap_or_default();
        let mut row = PrimaryBucketRaw::new(date);
        row.time = i_time.and_then(|i| rec.get(i)).filter(|t| !t.is_empty()).map(str::to_string);
        for (i, name) in headers.iter().enumerate() {
            if Some(i) == i_date || Some(i) == i_time {
                continue;
            }
            // Empty cells are not offered; malformed numbers degrade to zero
            let Some(cell) = rec.get(i).filter(|s| !s.is_empty()) else { continue };
            row = row.with_field(name.clone(), cell.parse::<f64>().unwrap_or(0.0));
        }
        out.push(row);
    }
    Ok(out)
}

/// Load `{ "<source>": [ {record}, ... ], ... }`.
fn load_timelines_json(path: &Path) -> Result<HashMap<SourceKind, Vec<RawEventPoint>>> {
    let text = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    let Some(obj) = value.as_object() else {
        anyhow::bail!("expected a JSON object keyed by source id");
    };

    let mut out = HashMap::new();
    for (id, records) in obj {
        let Ok(source) = id.parse::<SourceKind>() else {
            warn!(source = %id, "skipping unknown timeline source");
            continue;
        };
        let points = records
            .as_array()
            .map(|arr| arr.iter().map(|r| RawEventPoint::from_json(source, r)).collect())
            .unwrap_or_default();
        out.insert(source, points);
    }
    Ok(out)
}

fn print_last_tooltip(model: &ChartModel) {
    let Some(last) = model.buckets.len().checked_sub(1) else { return };
    let Some(snap) = HoverResolver::new().resolve(model, last) else { return };
    println!("Tooltip for {}:", snap.key);
    for e in snap.entries.iter().filter(|e| e.visible) {
        println!("  {:<14} {}", e.label, e.text);
    }
}
