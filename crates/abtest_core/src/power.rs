//! Sample size and duration for a two-proportion experiment.
//!
//! The required size comes from inverting the normal-approximation power
//! function of a two-sided z-test on Cohen's arcsine-transformed proportions:
//!
//! ```text
//! h  = 2·asin(√p2) − 2·asin(√p1)
//! n1 = ((z(1−α/2) + z(power)) / |h|)² · (1 + 1/r)      r = n2 / n1
//! N  = n1 / allocation
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ExperimentConfig;
use crate::error::{PowerError, Result};
use crate::normal;

/// Sample size and duration needed to reach the target power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerResult {
    /// Whole days of traffic needed, `ceil(total_sample_size / daily_traffic)`
    pub days_required: u64,
    /// Subjects across both arms
    pub total_sample_size: f64,
    /// Subjects in the treatment arm
    pub treatment_size: f64,
    /// Subjects in the control arm
    pub control_size: f64,
    /// Cohen's h between treatment and control rates (signed)
    pub effect_size: f64,
}

/// Cohen's h for two proportions. Positive when `p2 > p1`.
pub fn effect_size(p1: f64, p2: f64) -> f64 {
    2.0 * p2.sqrt().asin() - 2.0 * p1.sqrt().asin()
}

/// Whole days needed to collect `total_n` subjects.
///
/// Fails with [`PowerError::UndefinedResult`] when the day count does not fit
/// in a `u64`.
pub fn days_for(total_n: f64, daily_traffic: f64) -> Result<u64> {
    let days = (total_n / daily_traffic).ceil();
    if !days.is_finite() || days >= u64::MAX as f64 {
        return Err(PowerError::UndefinedResult {
            reason: "required days exceed the representable range",
        });
    }
    Ok(days as u64)
}

/// `z(1−α/2) + z(power)`, the standardized distance the test must cover.
fn critical_sum(config: &ExperimentConfig) -> f64 {
    normal::quantile(1.0 - config.alpha / 2.0) + normal::quantile(config.power)
}

/// Compute the sample size and run time for `config`.
///
/// Fails with [`PowerError::Domain`] for out-of-range inputs and with
/// [`PowerError::UndefinedResult`] when the lift produces no effect at all.
pub fn compute(config: &ExperimentConfig) -> Result<PowerResult> {
    let p2 = config.validate()?;
    let h = effect_size(config.base_rate, p2);

    if h == 0.0 {
        return Err(PowerError::UndefinedResult {
            reason: "zero effect size requires an infinite sample",
        });
    }

    let treatment_size = (critical_sum(config) / h.abs()).powi(2) * (1.0 + 1.0 / config.ratio());
    let total_sample_size = treatment_size / config.allocation;

    if !total_sample_size.is_finite() {
        return Err(PowerError::UndefinedResult {
            reason: "effect size too small for a finite sample",
        });
    }

    let result = PowerResult {
        days_required: days_for(total_sample_size, config.daily_traffic)?,
        total_sample_size,
        treatment_size,
        control_size: total_sample_size - treatment_size,
        effect_size: h,
    };

    tracing::debug!(
        lift = config.lift,
        effect_size = h,
        total = total_sample_size,
        days = result.days_required,
        "computed sample size"
    );

    Ok(result)
}

/// Power of the two-sided test when `total_n` subjects are split per `config`.
///
/// Both rejection regions are counted, so the result is slightly larger than
/// the one-tail approximation `compute` inverts.
pub fn achieved_power(config: &ExperimentConfig, total_n: f64) -> Result<f64> {
    let p2 = config.validate()?;
    if !total_n.is_finite() || total_n <= 0.0 {
        return Err(PowerError::domain(
            "total_n",
            total_n,
            "must be a positive number",
        ));
    }

    let h = effect_size(config.base_rate, p2).abs();
    let n1 = total_n * config.allocation;
    let shift = h * (n1 / (1.0 + 1.0 / config.ratio())).sqrt();
    let crit = normal::quantile(1.0 - config.alpha / 2.0);

    Ok(normal::cdf(shift - crit) + normal::cdf(-shift - crit))
}

/// Smallest positive relative lift detectable within `days` days.
///
/// Fails with [`PowerError::UndefinedResult`] when even a treatment rate of
/// 100% could not be detected with that much traffic.
pub fn minimum_detectable_lift(config: &ExperimentConfig, days: u64) -> Result<f64> {
    config.validate_design()?;
    if days == 0 {
        return Err(PowerError::domain("days", 0.0, "must be at least one day"));
    }

    // Slightly under budget: the forward computation must stay within `days`.
    let total_n = days as f64 * config.daily_traffic * (1.0 - 1e-9);
    let n1 = total_n * config.allocation;
    let h = critical_sum(config) * ((1.0 + 1.0 / config.ratio()) / n1).sqrt();

    let angle = config.base_rate.sqrt().asin() + h / 2.0;
    if angle >= std::f64::consts::FRAC_PI_2 {
        return Err(PowerError::UndefinedResult {
            reason: "traffic too low to detect any lift",
        });
    }

    let p2 = angle.sin().powi(2);
    let lift = p2 / config.base_rate - 1.0;

    tracing::debug!(days, total_n, lift, "computed minimum detectable lift");
    Ok(lift)
}

#[cfg(test)]
mod tests {
    use super::*;

    const Z_975: f64 = 1.959_963_984_540_054;
    const Z_80: f64 = 0.841_621_233_572_914_3;

    fn reference_total(base_rate: f64, lift: f64, allocation: f64) -> f64 {
        let p2 = base_rate * (1.0 + lift);
        let h = 2.0 * p2.sqrt().asin() - 2.0 * base_rate.sqrt().asin();
        let ratio = (1.0 - allocation) / allocation;
        ((Z_975 + Z_80) / h.abs()).powi(2) * (1.0 + 1.0 / ratio) / allocation
    }

    #[test]
    fn test_effect_size_sign() {
        assert!(effect_size(0.03, 0.033) > 0.0);
        assert!(effect_size(0.033, 0.03) < 0.0);
        assert_eq!(effect_size(0.2, 0.2), 0.0);
        assert!((effect_size(0.0, 1.0) - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn test_days_for_is_ceiling() {
        assert_eq!(days_for(200_000.0, 100_000.0), Ok(2));
        assert_eq!(days_for(200_001.0, 100_000.0), Ok(3));
        assert_eq!(days_for(1.0, 100_000.0), Ok(1));
    }

    #[test]
    fn test_compute_reference_scenario() {
        let config = ExperimentConfig::builder().lift(0.10).build();
        let result = compute(&config).unwrap();

        let expected = reference_total(0.03, 0.10, 0.5);
        assert!((result.total_sample_size - expected).abs() / expected < 1e-6);
        assert!((result.total_sample_size - 106_363.84).abs() < 0.01);
        assert_eq!(result.days_required, 2);
        assert!((result.treatment_size - result.control_size).abs() < 1e-6);
    }

    #[test]
    fn test_compute_unequal_allocation() {
        let config = ExperimentConfig::builder().lift(0.10).allocation(0.3).build();
        let result = compute(&config).unwrap();

        let expected = reference_total(0.03, 0.10, 0.3);
        assert!((result.total_sample_size - expected).abs() / expected < 1e-6);
        assert!((result.treatment_size / result.total_sample_size - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_zero_lift_is_undefined() {
        let config = ExperimentConfig::builder().lift(0.0).build();
        assert!(compute(&config).unwrap_err().is_undefined());
    }

    #[test]
    fn test_negative_lift_uses_magnitude() {
        let config = ExperimentConfig::builder().lift(-0.10).build();
        let result = compute(&config).unwrap();
        assert!(result.effect_size < 0.0);
        assert!(result.total_sample_size > 0.0);

        let expected = reference_total(0.03, -0.10, 0.5);
        assert!((result.total_sample_size - expected).abs() / expected < 1e-6);
    }

    #[test]
    fn test_achieved_power_meets_target() {
        let config = ExperimentConfig::builder().lift(0.10).build();
        let result = compute(&config).unwrap();
        let power = achieved_power(&config, result.total_sample_size).unwrap();
        assert!(power >= config.power - 1e-9);
        assert!(power < config.power + 1e-5);
    }

    #[test]
    fn test_achieved_power_rejects_empty_sample() {
        let config = ExperimentConfig::default();
        assert!(achieved_power(&config, 0.0).unwrap_err().is_domain());
    }

    #[test]
    fn test_minimum_detectable_lift_round_trip() {
        let config = ExperimentConfig::default();
        for days in [1, 3, 14, 30] {
            let lift = minimum_detectable_lift(&config, days).unwrap();
            assert!(lift > 0.0);
            let result = compute(&config.with_lift(lift)).unwrap();
            assert!(result.days_required <= days, "days = {days}");
            let budget = days as f64 * config.daily_traffic;
            assert!((result.total_sample_size - budget).abs() / budget < 1e-6);
        }
    }

    #[test]
    fn test_minimum_detectable_lift_shrinks_with_time() {
        let config = ExperimentConfig::default();
        let week = minimum_detectable_lift(&config, 7).unwrap();
        let month = minimum_detectable_lift(&config, 28).unwrap();
        assert!(month < week);
    }

    #[test]
    fn test_minimum_detectable_lift_errors() {
        let config = ExperimentConfig::default();
        assert!(minimum_detectable_lift(&config, 0).unwrap_err().is_domain());

        let tiny = ExperimentConfig::builder()
            .daily_traffic(1.0)
            .base_rate(0.5)
            .build();
        assert!(minimum_detectable_lift(&tiny, 1).unwrap_err().is_undefined());
    }
}
