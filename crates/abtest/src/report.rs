//! Days-versus-lift report.
//!
//! Runs the lift sweep for the configured experiment and presents it as a
//! chart, either interactively in the terminal or as an SVG file. Any invalid
//! point aborts the report before anything is drawn or written.

use std::path::PathBuf;

use abtest_core::SweepResult;
use abtest_core::sweep::sweep;

use crate::chart::{DaysChart, write_svg};
use crate::error::ReportError;
use crate::settings::Settings;
use crate::util::format::{format_count, format_percentage};
use crate::viewer::ChartViewer;

/// Where a report ends up
#[derive(Debug, Clone, PartialEq)]
pub enum ReportTarget {
    /// Full-screen chart in the terminal
    Terminal,
    /// SVG image written to the given path
    Svg(PathBuf),
    /// Plain text table on stdout
    Table,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub result: SweepResult,
    pub chart: DaysChart,
}

/// Run the sweep and build its chart.
pub fn build_report(settings: &Settings) -> Result<Report, ReportError> {
    let result = sweep(&settings.experiment, &settings.sweep)?;
    let chart = DaysChart::from_sweep(&result);
    tracing::info!(
        points = result.len(),
        base_rate = settings.experiment.base_rate,
        daily_traffic = settings.experiment.daily_traffic,
        "built days-vs-lift report"
    );
    Ok(Report { result, chart })
}

/// Build the report and present it on `target`.
pub fn render(settings: &Settings, target: &ReportTarget) -> Result<(), ReportError> {
    let report = build_report(settings)?;

    match target {
        ReportTarget::Terminal => {
            let mut viewer = ChartViewer::new(report.chart);
            ratatui::run(|terminal| viewer.run(terminal))?;
        }
        ReportTarget::Svg(path) => {
            write_svg(&report.chart, path).map_err(|source| ReportError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote chart");
        }
        ReportTarget::Table => {
            print!("{}", format_table(&report));
        }
    }

    Ok(())
}

/// Text rendition of a report: title lines followed by one row per lift.
pub fn format_table(report: &Report) -> String {
    let mut lines = vec![
        report.chart.title.clone(),
        report.chart.subtitle.clone(),
        String::new(),
        format!("{:>10}  {:>14}  {:>6}", "lift", "total subjects", "days"),
    ];
    lines.extend(report.result.points.iter().map(|point| {
        format!(
            "{:>10}  {:>14}  {:>6}",
            format_percentage(point.lift),
            format_count(point.total_sample_size),
            point.days_required
        )
    }));

    let mut table = lines.join("\n");
    table.push('\n');
    table
}
