//! Experiment parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::error::{PowerError, Result};

pub const DEFAULT_DAILY_TRAFFIC: f64 = 100_000.0;
pub const DEFAULT_BASE_RATE: f64 = 0.03;
pub const DEFAULT_LIFT: f64 = 0.01;
pub const DEFAULT_ALPHA: f64 = 0.05;
pub const DEFAULT_POWER: f64 = 0.8;
pub const DEFAULT_ALLOCATION: f64 = 0.5;

/// Inputs describing a two-arm conversion-rate experiment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Visitors entering the experiment per day (both arms combined)
    pub daily_traffic: f64,
    /// Conversion rate of the control arm
    pub base_rate: f64,
    /// Relative change of the treatment rate, e.g. 0.01 = +1% of `base_rate`
    pub lift: f64,
    /// Two-sided significance level
    pub alpha: f64,
    /// Target probability of detecting the lift
    pub power: f64,
    /// Share of traffic sent to the treatment arm
    pub allocation: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            daily_traffic: DEFAULT_DAILY_TRAFFIC,
            base_rate: DEFAULT_BASE_RATE,
            lift: DEFAULT_LIFT,
            alpha: DEFAULT_ALPHA,
            power: DEFAULT_POWER,
            allocation: DEFAULT_ALLOCATION,
        }
    }
}

impl ExperimentConfig {
    pub fn builder() -> ExperimentConfigBuilder {
        ExperimentConfigBuilder::default()
    }

    /// Conversion rate of the treatment arm implied by `lift`.
    pub fn treatment_rate(&self) -> f64 {
        self.base_rate * (1.0 + self.lift)
    }

    /// Ratio of control to treatment arm sizes (`n2 / n1`).
    pub fn ratio(&self) -> f64 {
        (1.0 - self.allocation) / self.allocation
    }

    /// Same config with a different lift.
    pub fn with_lift(mut self, lift: f64) -> Self {
        self.lift = lift;
        self
    }

    /// Check every parameter except `lift`, which only matters through the
    /// treatment rate.
    pub fn validate_design(&self) -> Result<()> {
        if !self.daily_traffic.is_finite() || self.daily_traffic <= 0.0 {
            return Err(PowerError::domain(
                "daily_traffic",
                self.daily_traffic,
                "must be a positive number",
            ));
        }
        open_unit("base_rate", self.base_rate)?;
        open_unit("alpha", self.alpha)?;
        open_unit("power", self.power)?;
        open_unit("allocation", self.allocation)?;
        Ok(())
    }

    /// Validate the full config and return the treatment rate.
    pub fn validate(&self) -> Result<f64> {
        self.validate_design()?;
        if !self.lift.is_finite() {
            return Err(PowerError::domain("lift", self.lift, "must be finite"));
        }
        let p2 = self.treatment_rate();
        if !(0.0..=1.0).contains(&p2) {
            return Err(PowerError::domain(
                "treatment rate",
                p2,
                "base_rate * (1 + lift) must be within [0, 1]",
            ));
        }
        Ok(p2)
    }
}

fn open_unit(parameter: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(PowerError::domain(parameter, value, "must be in (0, 1)"))
    }
}

/// Fluent construction of an [`ExperimentConfig`] starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct ExperimentConfigBuilder {
    config: ExperimentConfig,
}

impl ExperimentConfigBuilder {
    pub fn daily_traffic(mut self, daily_traffic: f64) -> Self {
        self.config.daily_traffic = daily_traffic;
        self
    }

    pub fn base_rate(mut self, base_rate: f64) -> Self {
        self.config.base_rate = base_rate;
        self
    }

    pub fn lift(mut self, lift: f64) -> Self {
        self.config.lift = lift;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    pub fn power(mut self, power: f64) -> Self {
        self.config.power = power;
        self
    }

    pub fn allocation(mut self, allocation: f64) -> Self {
        self.config.allocation = allocation;
        self
    }

    pub fn build(self) -> ExperimentConfig {
        self.config
    }
}
