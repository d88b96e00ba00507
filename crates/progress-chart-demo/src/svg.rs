// File: crates/progress-chart-demo/src/svg.rs
// Summary: Minimal SVG painter for a chart model (stands in for the dashboard's renderer).

use std::fmt::Write as _;

use progress_chart_core::ChartModel;

const GRID: &str = "#e6e6eb";
const LABEL: &str = "#646470";

pub(crate) fn render(model: &ChartModel) -> String {
    let dims = model.dimensions;
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="10">"#,
        w = dims.width,
        h = dims.height,
    );

    for line in model.grid_lines.horizontal.iter().chain(&model.grid_lines.vertical) {
        let _ = writeln!(
            out,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{GRID}" stroke-width="1"/>"#,
            line.from.x, line.from.y, line.to.x, line.to.y
        );
    }

    // Left axis: counts; right axis: percentages
    let left = dims.left() - 6.0;
    let right = dims.right() + 6.0;
    for t in &model.linear_axis.ticks {
        let _ = writeln!(out, r#"  <text x="{left:.2}" y="{:.2}" fill="{LABEL}" text-anchor="end">{}</text>"#, t.y + 3.0, t.label);
    }
    for t in &model.percentage_axis.ticks {
        let _ = writeln!(out, r#"  <text x="{right:.2}" y="{:.2}" fill="{LABEL}">{}</text>"#, t.y + 3.0, t.label);
    }

    let label_y = dims.bottom() + 14.0;
    for l in model.x_labels.iter().filter(|l| l.visible) {
        let _ = writeln!(out, r#"  <text x="{:.2}" y="{label_y:.2}" fill="{LABEL}" text-anchor="middle">{}</text>"#, l.x, l.text);
    }

    for s in &model.series {
        let Some(geom) = model.paths.get(&s.id) else { continue };
        if !geom.stroke {
            continue;
        }
        let _ = writeln!(
            out,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            geom.path.to_svg(),
            s.color.to_hex()
        );
    }

    for (row, entry) in model.legend.iter().enumerate() {
        let y = 12.0 + row as f64 * 14.0;
        let x = dims.left() + 4.0;
        let _ = writeln!(
            out,
            r#"  <g opacity="{:.2}"><rect x="{x:.2}" y="{:.2}" width="10" height="10" fill="{}"/><text x="{:.2}" y="{y:.2}" fill="{LABEL}">{}</text></g>"#,
            entry.opacity,
            y - 9.0,
            entry.color.to_hex(),
            x + 14.0,
            entry.label
        );
    }

    out.push_str("</svg>\n");
    out
}
