//! Monte Carlo check of the power of a two-proportion z-test.
//!
//! Each iteration draws binomial conversion counts for both arms at the true
//! rates and runs a pooled two-sided z-test. The share of rejections estimates
//! the power the analytic formula promises.

use rand::{SeedableRng, rngs::SmallRng};
use rand_distr::{Binomial, Distribution};
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

use crate::config::ExperimentConfig;
use crate::error::{PowerError, Result};
use crate::normal;

const MAX_BATCH_SIZE: usize = 1_000;

/// Estimated power with its Monte Carlo standard error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulatedPower {
    pub power: f64,
    pub standard_error: f64,
    pub iterations: usize,
    pub rejections: usize,
}

/// Pooled two-proportion z statistic. Zero when both arms are all-or-nothing.
pub fn z_statistic(successes_a: u64, n_a: u64, successes_b: u64, n_b: u64) -> f64 {
    let (n_a, n_b) = (n_a as f64, n_b as f64);
    let p_a = successes_a as f64 / n_a;
    let p_b = successes_b as f64 / n_b;
    let pooled = (successes_a + successes_b) as f64 / (n_a + n_b);
    let variance = pooled * (1.0 - pooled) * (1.0 / n_a + 1.0 / n_b);
    if variance <= 0.0 {
        return 0.0;
    }
    (p_a - p_b) / variance.sqrt()
}

/// Estimate the power of the test for `total_n` subjects split per `config`.
///
/// Deterministic for a given `seed`.
pub fn simulate_power(
    config: &ExperimentConfig,
    total_n: f64,
    iterations: usize,
    seed: u64,
) -> Result<SimulatedPower> {
    let p2 = config.validate()?;
    if iterations == 0 {
        return Err(PowerError::domain(
            "iterations",
            0.0,
            "at least one iteration is required",
        ));
    }

    let n_treatment = (total_n * config.allocation).round();
    let n_control = (total_n * (1.0 - config.allocation)).round();
    if !total_n.is_finite() || n_treatment < 1.0 || n_control < 1.0 {
        return Err(PowerError::domain(
            "total_n",
            total_n,
            "each arm needs at least one subject",
        ));
    }
    let (n_treatment, n_control) = (n_treatment as u64, n_control as u64);

    let treatment = Binomial::new(n_treatment, p2)
        .map_err(|_| PowerError::domain("treatment rate", p2, "not a valid probability"))?;
    let control = Binomial::new(n_control, config.base_rate).map_err(|_| {
        PowerError::domain("base_rate", config.base_rate, "not a valid probability")
    })?;
    let crit = normal::quantile(1.0 - config.alpha / 2.0);

    let num_batches = iterations.div_ceil(MAX_BATCH_SIZE);
    let run_batch = |i: usize| -> usize {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
        let batch_size = if i == num_batches - 1 {
            iterations - i * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        };

        (0..batch_size)
            .filter(|_| {
                let x_t = treatment.sample(&mut rng);
                let x_c = control.sample(&mut rng);
                z_statistic(x_t, n_treatment, x_c, n_control).abs() > crit
            })
            .count()
    };

    #[cfg(feature = "parallel")]
    let rejections: usize = (0..num_batches).into_par_iter().map(run_batch).sum();
    #[cfg(not(feature = "parallel"))]
    let rejections: usize = (0..num_batches).map(run_batch).sum();

    let power = rejections as f64 / iterations as f64;
    let standard_error = (power * (1.0 - power) / iterations as f64).sqrt();

    tracing::debug!(iterations, rejections, power, "simulated power");

    Ok(SimulatedPower {
        power,
        standard_error,
        iterations,
        rejections,
    })
}
