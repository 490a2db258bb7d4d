//! SVG export of a [`DaysChart`] for non-interactive use.

use std::fmt;
use std::io;
use std::path::Path;

use super::{DaysChart, PIXELS_PER_UNIT};

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 25.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 55.0;

const LINE_COLOR: &str = "#1f77b4";
const GRID_COLOR: &str = "#d9d9d9";
const TEXT_COLOR: &str = "#333333";

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Maps data coordinates to pixel coordinates of the plot area
struct PlotArea {
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl PlotArea {
    fn new(chart: &DaysChart, width: f64, height: f64) -> Self {
        Self {
            x_bounds: chart.x_bounds(),
            y_bounds: chart.y_bounds(),
            left: MARGIN_LEFT,
            right: width - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: height - MARGIN_BOTTOM,
        }
    }

    fn x(&self, value: f64) -> f64 {
        let [lo, hi] = self.x_bounds;
        self.left + (value - lo) / (hi - lo) * (self.right - self.left)
    }

    fn y(&self, value: f64) -> f64 {
        let [lo, hi] = self.y_bounds;
        self.bottom - (value - lo) / (hi - lo) * (self.bottom - self.top)
    }
}

/// Render the chart as a standalone SVG document.
pub fn render_svg(chart: &DaysChart) -> Result<String, fmt::Error> {
    let mut svg = String::new();
    write_document(&mut svg, chart)?;
    Ok(svg)
}

fn write_document(out: &mut impl fmt::Write, chart: &DaysChart) -> fmt::Result {
    let width = chart.size.0 * PIXELS_PER_UNIT;
    let height = chart.size.1 * PIXELS_PER_UNIT;
    let area = PlotArea::new(chart, width, height);
    let x_ticks = DaysChart::ticks(area.x_bounds);
    let y_ticks = DaysChart::ticks(area.y_bounds);

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
    )?;
    writeln!(
        out,
        r#"<rect width="{width}" height="{height}" fill="white"/>"#
    )?;

    // Title
    writeln!(
        out,
        r#"<text x="{:.1}" y="24" text-anchor="middle" font-size="16" font-weight="bold">{}</text>"#,
        width / 2.0,
        escape(&chart.title)
    )?;
    writeln!(
        out,
        r#"<text x="{:.1}" y="44" text-anchor="middle" font-size="13">{}</text>"#,
        width / 2.0,
        escape(&chart.subtitle)
    )?;

    // Grid and tick labels
    writeln!(out, r#"<g class="grid" stroke="{GRID_COLOR}" stroke-width="1">"#)?;
    if chart.grid {
        for &x in &x_ticks {
            let px = area.x(x);
            writeln!(
                out,
                r#"<line x1="{px:.1}" y1="{:.1}" x2="{px:.1}" y2="{:.1}"/>"#,
                area.top, area.bottom
            )?;
        }
        for &y in &y_ticks {
            let py = area.y(y);
            writeln!(
                out,
                r#"<line x1="{:.1}" y1="{py:.1}" x2="{:.1}" y2="{py:.1}"/>"#,
                area.left, area.right
            )?;
        }
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="ticks" font-size="11" fill="{TEXT_COLOR}">"#)?;
    for &x in &x_ticks {
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{x:.1}</text>"#,
            area.x(x),
            area.bottom + 16.0
        )?;
    }
    for &y in &y_ticks {
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{y:.0}</text>"#,
            area.left - 8.0,
            area.y(y) + 4.0
        )?;
    }
    writeln!(out, "</g>")?;

    // Axes
    writeln!(
        out,
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="black"/>"#,
        area.left,
        area.top,
        area.right - area.left,
        area.bottom - area.top
    )?;
    writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13">{}</text>"#,
        (area.left + area.right) / 2.0,
        height - 14.0,
        escape(&chart.x_label)
    )?;
    writeln!(
        out,
        r#"<text x="18" y="{0:.1}" text-anchor="middle" font-size="13" transform="rotate(-90 18 {0:.1})">{1}</text>"#,
        (area.top + area.bottom) / 2.0,
        escape(&chart.y_label)
    )?;

    // Data
    if !chart.points.is_empty() {
        let path: Vec<String> = chart
            .points
            .iter()
            .map(|&(x, y)| format!("{:.2},{:.2}", area.x(x), area.y(y)))
            .collect();
        writeln!(
            out,
            r#"<polyline class="series" fill="none" stroke="{LINE_COLOR}" stroke-width="2" points="{}"/>"#,
            path.join(" ")
        )?;
        for &(x, y) in &chart.points {
            writeln!(
                out,
                r#"<circle class="point" cx="{:.2}" cy="{:.2}" r="4" fill="{LINE_COLOR}" data-lift="{x}" data-days="{y}"/>"#,
                area.x(x),
                area.y(y)
            )?;
        }
    }

    writeln!(out, "</svg>")
}

/// Render the chart and write it to `path`.
pub fn write_svg(chart: &DaysChart, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let svg = render_svg(chart).map_err(io::Error::other)?;
    std::fs::write(path, svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chart() -> DaysChart {
        DaysChart {
            title: "Days & lift".to_string(),
            subtitle: "baseline rate=3.0%".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            points: vec![(1.0, 30.0), (2.0, 8.0), (3.0, 4.0)],
            grid: true,
            size: (8.0, 5.0),
        }
    }

    #[test]
    fn test_svg_has_one_circle_per_point() {
        let svg = render_svg(&sample_chart()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(r#"width="800""#));
        assert!(svg.contains(r#"height="500""#));
    }

    #[test]
    fn test_svg_escapes_text() {
        let svg = render_svg(&sample_chart()).unwrap();
        assert!(svg.contains("Days &amp; lift"));
    }

    #[test]
    fn test_grid_can_be_disabled() {
        let mut chart = sample_chart();
        let with_grid = render_svg(&chart).unwrap().matches("<line").count();
        chart.grid = false;
        let without_grid = render_svg(&chart).unwrap().matches("<line").count();
        assert_eq!(with_grid, 10);
        assert_eq!(without_grid, 0);
    }

    /// Accepts a fixed number of bytes, then fails
    struct LimitedWriter {
        remaining: usize,
    }

    impl fmt::Write for LimitedWriter {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.remaining = self.remaining.checked_sub(s.len()).ok_or(fmt::Error)?;
            Ok(())
        }
    }

    #[test]
    fn test_writer_errors_are_returned() {
        let chart = sample_chart();
        let full = render_svg(&chart).unwrap().len();

        let mut short = LimitedWriter { remaining: 200 };
        assert!(write_document(&mut short, &chart).is_err());

        let mut exact = LimitedWriter { remaining: full };
        assert!(write_document(&mut exact, &chart).is_ok());
        assert_eq!(exact.remaining, 0);
    }

    #[test]
    fn test_higher_days_are_drawn_higher() {
        let chart = sample_chart();
        let area = PlotArea::new(&chart, 800.0, 500.0);
        assert!(area.y(30.0) < area.y(4.0));
        assert!(area.x(1.0) < area.x(3.0));
    }
}
