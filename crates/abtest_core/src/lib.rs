//! A/B experiment planning library
//!
//! This crate estimates how much traffic, and therefore how many days, a
//! two-arm conversion-rate experiment needs to detect a given relative lift.
//! It supports:
//! - Sample size from Cohen's h and the two-sample normal approximation
//! - Unequal traffic allocation between treatment and control
//! - Achieved power and minimum detectable lift for a fixed duration
//! - Sweeps of required days across a grid of lifts
//! - Monte Carlo verification of the analytic power
//!
//! # Example
//!
//! ```ignore
//! use abtest_core::{ExperimentConfig, power::compute};
//!
//! let config = ExperimentConfig::builder()
//!     .daily_traffic(100_000.0)
//!     .base_rate(0.03)
//!     .lift(0.10)
//!     .build();
//!
//! let plan = compute(&config)?;
//! println!("{} days, {:.0} subjects", plan.days_required, plan.total_sample_size);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod config;
pub mod error;
pub mod normal;
pub mod power;
pub mod simulation;
pub mod sweep;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{ExperimentConfig, ExperimentConfigBuilder};
pub use error::{PowerError, Result};
pub use power::{PowerResult, achieved_power, compute, minimum_detectable_lift};
pub use simulation::{SimulatedPower, simulate_power};
pub use sweep::{LiftSweep, SweepPoint, SweepResult};
