//! A/B experiment planning front end
//!
//! Loads experiment settings, runs the calculations from `abtest_core` and
//! presents them:
//! - A days-versus-lift chart in the terminal (ratatui) or as an SVG file
//! - Plain text tables and single-lift plans on stdout
//! - YAML settings files overridden by command-line flags

// ============================================================================
// Presentation modules
// ============================================================================

pub mod chart;
pub mod report;
pub mod viewer;

// ============================================================================
// Support modules
// ============================================================================

pub mod cli;
pub mod error;
pub mod logging;
pub mod settings;
pub mod util;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use chart::DaysChart;
pub use error::ReportError;
pub use logging::{LogSink, init_logging};
pub use report::{Report, ReportTarget, build_report, render};
pub use settings::Settings;
pub use viewer::ChartViewer;
