//! Inline SVG rendering for the four chart kinds on the dashboard.

use ci_core::view::{BarChart, Chart, Heatmap, ScatterChart, StackedBarChart};

use crate::html::esc;

const WIDTH: f64 = 640.0;
const LEFT: f64 = 64.0;
const RIGHT: f64 = 20.0;
const TOP: f64 = 50.0;
const BOTTOM: f64 = 48.0;
const LEGEND_WIDTH: f64 = 170.0;
const TICKS: usize = 5;

const AXIS: &str = "#4b5563";
const GRID: &str = "#1f2937";
const TEXT: &str = "#e5e7eb";
const MUTED: &str = "#9ca3af";

/// Categorical palette (plotly's default qualitative set).
const PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Viridis, sampled at five evenly spaced stops.
const VIRIDIS: [&str; 5] = ["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"];

pub fn render_chart(chart: &Chart) -> String {
    match chart {
        Chart::Bar(c) => bar(c),
        Chart::StackedBar(c) => stacked_bar(c),
        Chart::Scatter(c) => scatter(c),
        Chart::Heatmap(c) => heatmap(c),
    }
}

/// Plot area inside the SVG viewport.
struct Frame {
    height: f64,
    left: f64,
    right: f64,
}

impl Frame {
    fn new(height: u32, right: f64) -> Self {
        Self {
            height: f64::from(height),
            left: LEFT,
            right,
        }
    }

    fn x0(&self) -> f64 {
        self.left
    }

    fn x1(&self) -> f64 {
        WIDTH - self.right
    }

    fn y0(&self) -> f64 {
        self.height - BOTTOM
    }

    fn y1(&self) -> f64 {
        TOP
    }

    fn plot_width(&self) -> f64 {
        self.x1() - self.x0()
    }

    fn plot_height(&self) -> f64 {
        self.y0() - self.y1()
    }

    /// Maps a value in `lo..=hi` to a y pixel.
    fn y(&self, v: f64, lo: f64, hi: f64) -> f64 {
        self.y0() - (v - lo) / (hi - lo) * self.plot_height()
    }

    fn x(&self, v: f64, lo: f64, hi: f64) -> f64 {
        self.x0() + (v - lo) / (hi - lo) * self.plot_width()
    }
}

fn open(height: u32, title: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {height}" role="img" aria-label="{t}"><text x="{x}" y="28" font-size="15" font-weight="600" fill="{TEXT}">{t}</text>"##,
        t = esc(title),
        x = LEFT,
    )
}

/// Rounds `v` up to 1, 2, 2.5 or 5 times a power of ten.
pub(crate) fn nice_ceiling(v: f64) -> f64 {
    if v <= 0.0 || !v.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(v.log10().floor());
    let normalized = v / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| normalized <= *s)
        .unwrap_or(10.0);
    step * magnitude
}

pub(crate) fn tick_label(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Horizontal grid lines with labels on the left axis.
fn y_axis(frame: &Frame, lo: f64, hi: f64, label: &str) -> String {
    let mut out = String::new();
    for i in 0..=TICKS {
        let v = lo + (hi - lo) * i as f64 / TICKS as f64;
        let y = frame.y(v, lo, hi);
        out.push_str(&format!(
            r##"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{GRID}"/><text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11" fill="{MUTED}">{}</text>"##,
            frame.x0(),
            frame.x1(),
            frame.x0() - 8.0,
            y + 4.0,
            tick_label(v),
        ));
    }
    let mid = (frame.y0() + frame.y1()) / 2.0;
    out.push_str(&format!(
        r##"<text x="16" y="{mid:.1}" text-anchor="middle" font-size="12" fill="{MUTED}" transform="rotate(-90, 16, {mid:.1})">{}</text>"##,
        esc(label)
    ));
    out.push_str(&format!(
        r##"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="{AXIS}"/><line x1="{x:.1}" y1="{y0:.1}" x2="{:.1}" y2="{y0:.1}" stroke="{AXIS}"/>"##,
        frame.y1(),
        frame.y0(),
        frame.x1(),
        x = frame.x0(),
        y0 = frame.y0(),
    ));
    out
}

fn legend(frame: &Frame, entries: &[(&str, &str)]) -> String {
    let x = frame.x1() + 16.0;
    let mut out = String::new();
    for (i, (name, color)) in entries.iter().enumerate() {
        let y = frame.y1() + 8.0 + i as f64 * 20.0;
        out.push_str(&format!(
            r##"<rect x="{x:.1}" y="{:.1}" width="12" height="12" rx="2" fill="{color}"/><text x="{:.1}" y="{:.1}" font-size="11" fill="{TEXT}">{}</text>"##,
            y - 10.0,
            x + 18.0,
            y,
            esc(name),
        ));
    }
    out
}

fn bar(chart: &BarChart) -> String {
    let frame = Frame::new(chart.height, RIGHT);
    let max = chart.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let hi = nice_ceiling(max);
    let band = frame.plot_width() / chart.bars.len().max(1) as f64;

    let mut out = open(chart.height, &chart.title);
    out.push_str(&y_axis(&frame, 0.0, hi, &chart.y_label));

    for (i, (label, value)) in chart.bars.iter().enumerate() {
        let x = frame.x0() + i as f64 * band + band * 0.2;
        let w = band * 0.6;
        let y = frame.y(*value, 0.0, hi);
        let h = frame.y0() - y;
        let cx = x + w / 2.0;
        out.push_str(&format!(
            r##"<rect class="bar" x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{}"><title>{}: {:.*}</title></rect>"##,
            PALETTE[0],
            esc(label),
            chart.value_precision,
            value,
        ));
        out.push_str(&format!(
            r##"<text x="{cx:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{TEXT}">{:.*}</text>"##,
            y - 6.0,
            chart.value_precision,
            value,
        ));
        out.push_str(&format!(
            r##"<text x="{cx:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{MUTED}">{}</text>"##,
            frame.y0() + 20.0,
            esc(label),
        ));
    }

    out.push_str("</svg>");
    out
}

fn stacked_bar(chart: &StackedBarChart) -> String {
    let frame = Frame::new(chart.height, LEGEND_WIDTH);
    let max = (0..chart.categories.len())
        .map(|i| {
            chart
                .series
                .iter()
                .map(|s| s.values.get(i).copied().unwrap_or(0.0))
                .sum::<f64>()
        })
        .fold(0.0, f64::max);
    let hi = nice_ceiling(max);
    let band = frame.plot_width() / chart.categories.len().max(1) as f64;

    let mut out = open(chart.height, &chart.title);
    out.push_str(&y_axis(&frame, 0.0, hi, &chart.y_label));

    for (i, category) in chart.categories.iter().enumerate() {
        let x = frame.x0() + i as f64 * band + band * 0.2;
        let w = band * 0.6;
        let mut base = 0.0;
        for (s, series) in chart.series.iter().enumerate() {
            let value = series.values.get(i).copied().unwrap_or(0.0);
            let top = frame.y(base + value, 0.0, hi);
            let bottom = frame.y(base, 0.0, hi);
            out.push_str(&format!(
                r##"<rect class="segment" x="{x:.1}" y="{top:.1}" width="{w:.1}" height="{:.1}" fill="{}"><title>{} · {}: {}</title></rect>"##,
                bottom - top,
                PALETTE[s % PALETTE.len()],
                esc(category),
                esc(&series.name),
                tick_label(value),
            ));
            base += value;
        }
        out.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{MUTED}">{}</text>"##,
            x + w / 2.0,
            frame.y0() + 20.0,
            esc(category),
        ));
    }

    let entries: Vec<(&str, &str)> = chart
        .series
        .iter()
        .enumerate()
        .map(|(s, series)| (series.name.as_str(), PALETTE[s % PALETTE.len()]))
        .collect();
    out.push_str(&legend(&frame, &entries));
    out.push_str("</svg>");
    out
}

/// Pads a data range so markers don't sit on the axes.
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let span = (hi - lo).max(1.0);
    (lo - span * 0.15, hi + span * 0.15)
}

fn scatter(chart: &ScatterChart) -> String {
    let right = if chart.show_labels { RIGHT } else { LEGEND_WIDTH };
    let frame = Frame::new(chart.height, right);

    let (x_lo, x_hi) = match &chart.x_ticks {
        Some(ticks) if !ticks.is_empty() => {
            let lo = ticks.iter().map(|t| t.0).fold(f64::INFINITY, f64::min);
            let hi = ticks.iter().map(|t| t.0).fold(f64::NEG_INFINITY, f64::max);
            (lo - 0.5, hi + 0.5)
        }
        _ => padded(
            chart.points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min),
            chart.points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max),
        ),
    };
    let (y_lo, y_hi) = padded(
        chart.points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min),
        chart.points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max),
    );
    let max_size = chart
        .points
        .iter()
        .filter_map(|p| p.size)
        .fold(0.0, f64::max);

    let mut out = open(chart.height, &chart.title);
    out.push_str(&y_axis(&frame, y_lo, y_hi, &chart.y_label));

    let x_ticks: Vec<(f64, String)> = match &chart.x_ticks {
        Some(ticks) => ticks.clone(),
        None => (0..=TICKS)
            .map(|i| {
                let v = x_lo + (x_hi - x_lo) * i as f64 / TICKS as f64;
                (v, tick_label(v))
            })
            .collect(),
    };
    for (v, label) in &x_ticks {
        out.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11" fill="{MUTED}">{}</text>"##,
            frame.x(*v, x_lo, x_hi),
            frame.y0() + 18.0,
            esc(label),
        ));
    }
    out.push_str(&format!(
        r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{MUTED}">{}</text>"##,
        (frame.x0() + frame.x1()) / 2.0,
        frame.height - 10.0,
        esc(&chart.x_label),
    ));

    for (i, point) in chart.points.iter().enumerate() {
        let cx = frame.x(point.x, x_lo, x_hi);
        let cy = frame.y(point.y, y_lo, y_hi);
        let r = match point.size {
            Some(size) if max_size > 0.0 => 6.0 + 18.0 * (size / max_size).sqrt(),
            _ => 8.0,
        };
        let color = PALETTE[i % PALETTE.len()];
        out.push_str(&format!(
            r##"<circle class="marker" cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="{color}" fill-opacity="0.8" stroke="{TEXT}" stroke-width="0.5"><title>{}: ({}, {})</title></circle>"##,
            esc(&point.label),
            tick_label(point.x),
            tick_label(point.y),
        ));
        if chart.show_labels {
            out.push_str(&format!(
                r##"<text x="{cx:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{TEXT}">{}</text>"##,
                cy - r - 6.0,
                esc(&point.label),
            ));
        }
    }

    if !chart.show_labels {
        let entries: Vec<(&str, &str)> = chart
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (p.label.as_str(), PALETTE[i % PALETTE.len()]))
            .collect();
        out.push_str(&legend(&frame, &entries));
    }

    out.push_str("</svg>");
    out
}

fn heat_color(value: u8, min: u8, max: u8) -> &'static str {
    if max <= min {
        return VIRIDIS[VIRIDIS.len() / 2];
    }
    let t = f64::from(value.clamp(min, max) - min) / f64::from(max - min);
    let idx = (t * (VIRIDIS.len() - 1) as f64).round() as usize;
    VIRIDIS[idx.min(VIRIDIS.len() - 1)]
}

fn heatmap(map: &Heatmap) -> String {
    let left = 120.0;
    let right = 110.0;
    let height = f64::from(map.height);
    let plot_w = WIDTH - left - right;
    let plot_h = height - TOP - BOTTOM;
    let cell_w = plot_w / map.columns.len().max(1) as f64;
    let cell_h = plot_h / map.rows.len().max(1) as f64;

    let mut out = open(map.height, &map.title);

    for (r, (row_label, row)) in map.rows.iter().zip(&map.values).enumerate() {
        let y = TOP + r as f64 * cell_h;
        out.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="12" fill="{MUTED}">{}</text>"##,
            left - 8.0,
            y + cell_h / 2.0 + 4.0,
            esc(row_label),
        ));
        for (c, value) in row.iter().enumerate() {
            let x = left + c as f64 * cell_w;
            let fill = heat_color(*value, map.min, map.max);
            // Dark text on the bright end of the scale.
            let ink = if *value >= map.max.saturating_sub(1) { "#111827" } else { TEXT };
            let column = map.columns.get(c).map(String::as_str).unwrap_or_default();
            out.push_str(&format!(
                r##"<rect class="cell" x="{x:.1}" y="{y:.1}" width="{cell_w:.1}" height="{cell_h:.1}" fill="{fill}" stroke="#111827"><title>{} · {}: {value}</title></rect><text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13" fill="{ink}">{value}</text>"##,
                esc(row_label),
                esc(column),
                x + cell_w / 2.0,
                y + cell_h / 2.0 + 5.0,
            ));
        }
    }

    for (c, column) in map.columns.iter().enumerate() {
        out.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11" fill="{MUTED}">{}</text>"##,
            left + c as f64 * cell_w + cell_w / 2.0,
            TOP + plot_h + 18.0,
            esc(column),
        ));
    }

    // Colour bar, max at the top.
    let bar_x = WIDTH - right + 24.0;
    let steps = usize::from(map.max.saturating_sub(map.min)) + 1;
    let step_h = plot_h / steps as f64;
    for i in 0..steps {
        let value = map.max - i as u8;
        let y = TOP + i as f64 * step_h;
        out.push_str(&format!(
            r##"<rect x="{bar_x:.1}" y="{y:.1}" width="14" height="{step_h:.1}" fill="{}"/><text x="{:.1}" y="{:.1}" font-size="11" fill="{MUTED}">{value}</text>"##,
            heat_color(value, map.min, map.max),
            bar_x + 20.0,
            y + step_h / 2.0 + 4.0,
        ));
    }
    out.push_str(&format!(
        r##"<text x="{bar_x:.1}" y="{:.1}" font-size="11" fill="{MUTED}">{}</text>"##,
        TOP - 8.0,
        esc(&map.scale_label),
    ));

    out.push_str("</svg>");
    out
}
