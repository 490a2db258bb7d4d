//! Chart of required days against relative lift.
//!
//! [`DaysChart`] is the renderer-independent description of the chart; the
//! `terminal` and `svg` modules draw it.

mod svg;
mod terminal;

pub use svg::{render_svg, write_svg};
pub use terminal::render_chart;

use abtest_core::SweepResult;

use crate::util::format::{format_grouped, format_rate};

/// Default chart size in display units (8 x 5), rendered at 100 px per unit
pub const DEFAULT_SIZE: (f64, f64) = (8.0, 5.0);
pub const PIXELS_PER_UNIT: f64 = 100.0;

/// Number of labelled ticks per axis
const TICKS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct DaysChart {
    pub title: String,
    pub subtitle: String,
    pub x_label: String,
    pub y_label: String,
    /// `(lift %, days)` pairs, ascending by lift
    pub points: Vec<(f64, f64)>,
    pub grid: bool,
    /// Width and height in display units
    pub size: (f64, f64),
}

impl DaysChart {
    pub fn from_sweep(result: &SweepResult) -> Self {
        Self {
            title: "A/B test days required vs relative lift".to_string(),
            subtitle: format!(
                "baseline rate={}, daily traffic={}",
                format_rate(result.config.base_rate),
                format_grouped(result.config.daily_traffic)
            ),
            x_label: "Relative lift (%)".to_string(),
            y_label: "Days required".to_string(),
            points: result.chart_points(),
            grid: true,
            size: DEFAULT_SIZE,
        }
    }

    /// Horizontal bounds with a small margin around the data
    pub fn x_bounds(&self) -> [f64; 2] {
        let x_min = self.points.first().map(|p| p.0).unwrap_or(0.0);
        let x_max = self.points.last().map(|p| p.0).unwrap_or(1.0);
        let padding = ((x_max - x_min).abs() * 0.02).max(0.1);
        [x_min - padding, x_max + padding]
    }

    /// Vertical bounds from zero to just above the largest value
    pub fn y_bounds(&self) -> [f64; 2] {
        let y_max = self
            .points
            .iter()
            .map(|p| p.1)
            .fold(0.0_f64, f64::max)
            .max(1.0);
        [0.0, (y_max * 1.1).ceil()]
    }

    /// Evenly spaced tick positions across `bounds`
    pub fn ticks(bounds: [f64; 2]) -> Vec<f64> {
        let step = (bounds[1] - bounds[0]) / (TICKS - 1) as f64;
        (0..TICKS).map(|i| bounds[0] + step * i as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abtest_core::ExperimentConfig;
    use abtest_core::sweep::{LiftSweep, sweep};

    fn default_chart() -> DaysChart {
        let result = sweep(&ExperimentConfig::default(), &LiftSweep::default()).unwrap();
        DaysChart::from_sweep(&result)
    }

    #[test]
    fn test_title_mentions_baseline_and_traffic() {
        let chart = default_chart();
        assert_eq!(chart.subtitle, "baseline rate=3.0%, daily traffic=100,000");
        assert!(chart.grid);
    }

    #[test]
    fn test_points_are_percentages_in_order() {
        let chart = default_chart();
        assert_eq!(chart.points.len(), 20);
        assert!((chart.points[0].0 - 0.5).abs() < 1e-12);
        assert!((chart.points[19].0 - 20.0).abs() < 1e-12);
        assert!(chart.points.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_bounds_cover_points() {
        let chart = default_chart();
        let [x_lo, x_hi] = chart.x_bounds();
        let [y_lo, y_hi] = chart.y_bounds();
        for &(x, y) in &chart.points {
            assert!(x > x_lo && x < x_hi);
            assert!(y >= y_lo && y < y_hi);
        }
    }

    #[test]
    fn test_ticks_span_bounds() {
        let ticks = DaysChart::ticks([0.0, 100.0]);
        assert_eq!(ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }
}
