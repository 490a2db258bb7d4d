//! Lift sweep analysis.
//!
//! Runs the power calculation over an evenly spaced grid of relative lifts,
//! holding every other experiment parameter fixed:
//!
//! ```ignore
//! use abtest_core::{ExperimentConfig, sweep::{LiftSweep, sweep}};
//!
//! let config = ExperimentConfig::builder().daily_traffic(50_000.0).build();
//! let results = sweep(&config, &LiftSweep::default())?;
//!
//! for point in &results.points {
//!     println!("{:.2}% -> {} days", point.lift * 100.0, point.days_required);
//! }
//! ```

mod config;
mod evaluator;

pub use config::*;
pub use evaluator::*;
