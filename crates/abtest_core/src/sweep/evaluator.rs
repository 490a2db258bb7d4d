//! Evaluate the power calculation across a lift sweep.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::power::{self, PowerResult};

use super::LiftSweep;

/// Result of the power calculation at one lift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub lift: f64,
    pub days_required: u64,
    pub total_sample_size: f64,
}

impl SweepPoint {
    fn new(lift: f64, result: &PowerResult) -> Self {
        Self {
            lift,
            days_required: result.days_required,
            total_sample_size: result.total_sample_size,
        }
    }
}

/// Ordered sweep results, ascending by lift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Fixed parameters of the sweep (its `lift` field is unused)
    pub config: ExperimentConfig,
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn lifts(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.lift).collect()
    }

    #[cfg(test)]
    pub(crate) fn days(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.days_required).collect()
    }

    /// `(lift %, days)` pairs ready for plotting
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.lift * 100.0, p.days_required as f64))
            .collect()
    }
}

/// Run the power calculation at every lift of `sweep`.
///
/// The first failing point aborts the whole sweep.
pub fn sweep(config: &ExperimentConfig, sweep: &LiftSweep) -> Result<SweepResult> {
    sweep.validate()?;
    config.validate_design()?;

    let lifts = sweep.sweep_values();
    tracing::debug!(points = lifts.len(), "running lift sweep");

    let evaluate = |&lift: &f64| -> Result<SweepPoint> {
        let result = power::compute(&config.with_lift(lift))?;
        tracing::debug!(lift, days = result.days_required, "sweep point");
        Ok(SweepPoint::new(lift, &result))
    };

    #[cfg(feature = "parallel")]
    let points = lifts.par_iter().map(evaluate).collect::<Result<Vec<_>>>()?;
    #[cfg(not(feature = "parallel"))]
    let points = lifts.iter().map(evaluate).collect::<Result<Vec<_>>>()?;

    Ok(SweepResult {
        config: *config,
        points,
    })
}
