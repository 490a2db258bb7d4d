//! Configuration for a lift sweep.

use serde::{Deserialize, Serialize};

use crate::error::{PowerError, Result};

/// Evenly spaced grid of relative lifts, endpoints inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftSweep {
    /// First lift of the grid
    pub min_lift: f64,
    /// Last lift of the grid
    pub max_lift: f64,
    /// Number of points (a single step yields only `min_lift`)
    pub step_count: usize,
}

impl Default for LiftSweep {
    fn default() -> Self {
        Self {
            min_lift: 0.005,
            max_lift: 0.20,
            step_count: 20,
        }
    }
}

impl LiftSweep {
    pub fn new(min_lift: f64, max_lift: f64, step_count: usize) -> Self {
        Self {
            min_lift,
            max_lift,
            step_count,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.step_count == 0 {
            return Err(PowerError::domain(
                "step_count",
                0.0,
                "sweep needs at least one point",
            ));
        }
        if !self.min_lift.is_finite() || !self.max_lift.is_finite() {
            return Err(PowerError::domain(
                "lift range",
                self.max_lift - self.min_lift,
                "bounds must be finite",
            ));
        }
        if self.min_lift > self.max_lift {
            return Err(PowerError::domain(
                "min_lift",
                self.min_lift,
                "must not exceed max_lift",
            ));
        }
        Ok(())
    }

    /// Generate the sweep values
    pub fn sweep_values(&self) -> Vec<f64> {
        if self.step_count <= 1 {
            return vec![self.min_lift];
        }
        let step_size = (self.max_lift - self.min_lift) / (self.step_count - 1) as f64;
        (0..self.step_count)
            .map(|i| {
                if i == self.step_count - 1 {
                    self.max_lift
                } else {
                    self.min_lift + step_size * i as f64
                }
            })
            .collect()
    }
}
