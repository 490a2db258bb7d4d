//! Command-line interface.
//!
//! Flags override values loaded from `--config`, which override the defaults.

use std::path::PathBuf;

use abtest_core::{ExperimentConfig, LiftSweep};
use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "abtest")]
#[command(about = "Plan how long an A/B experiment must run to detect a lift")]
pub struct Args {
    /// YAML settings file with `experiment` and `sweep` sections
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for the log file when the chart is shown (default: ~/.abtest/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Defaults to `sweep` with default settings
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Sample size and days for a single lift
    Plan {
        #[command(flatten)]
        experiment: ExperimentArgs,
    },
    /// Chart required days across a range of lifts
    Sweep {
        #[command(flatten)]
        experiment: ExperimentArgs,
        #[command(flatten)]
        sweep: SweepArgs,
        /// Write the chart as SVG instead of showing it
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print a table instead of opening the terminal chart
        #[arg(long)]
        no_interactive: bool,
    },
    /// Smallest lift detectable within a number of days
    Mde {
        #[command(flatten)]
        experiment: ExperimentArgs,
        /// Days the experiment will run
        #[arg(long)]
        days: u64,
    },
    /// Monte Carlo estimate of the power actually achieved
    Simulate {
        #[command(flatten)]
        experiment: ExperimentArgs,
        /// Total subjects (default: the planned sample size)
        #[arg(long)]
        total: Option<f64>,
        #[arg(long, default_value_t = 10_000)]
        iterations: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Print the effective settings as YAML, ready for `--config`
    Settings {
        #[command(flatten)]
        experiment: ExperimentArgs,
        #[command(flatten)]
        sweep: SweepArgs,
    },
}

/// Experiment parameters; unset flags keep the configured values
#[derive(ClapArgs, Debug, Clone, Default, PartialEq)]
pub struct ExperimentArgs {
    /// Visitors per day across both arms [default: 100000]
    #[arg(long)]
    pub daily_traffic: Option<f64>,
    /// Baseline conversion rate [default: 0.03]
    #[arg(long)]
    pub base_rate: Option<f64>,
    /// Relative lift to detect, 0.01 = +1% [default: 0.01]
    #[arg(long, allow_hyphen_values = true)]
    pub lift: Option<f64>,
    /// Significance level [default: 0.05]
    #[arg(long)]
    pub alpha: Option<f64>,
    /// Target power [default: 0.8]
    #[arg(long)]
    pub power: Option<f64>,
    /// Share of traffic sent to the treatment arm [default: 0.5]
    #[arg(long)]
    pub allocation: Option<f64>,
}

impl ExperimentArgs {
    pub fn apply(&self, config: &mut ExperimentConfig) {
        if let Some(v) = self.daily_traffic {
            config.daily_traffic = v;
        }
        if let Some(v) = self.base_rate {
            config.base_rate = v;
        }
        if let Some(v) = self.lift {
            config.lift = v;
        }
        if let Some(v) = self.alpha {
            config.alpha = v;
        }
        if let Some(v) = self.power {
            config.power = v;
        }
        if let Some(v) = self.allocation {
            config.allocation = v;
        }
    }
}

/// Lift grid; unset flags keep the configured values
#[derive(ClapArgs, Debug, Clone, Default, PartialEq)]
pub struct SweepArgs {
    /// Smallest lift of the sweep [default: 0.005]
    #[arg(long)]
    pub min_lift: Option<f64>,
    /// Largest lift of the sweep [default: 0.2]
    #[arg(long)]
    pub max_lift: Option<f64>,
    /// Number of evenly spaced lifts [default: 20]
    #[arg(long)]
    pub steps: Option<usize>,
}

impl SweepArgs {
    pub fn apply(&self, sweep: &mut LiftSweep) {
        if let Some(v) = self.min_lift {
            sweep.min_lift = v;
        }
        if let Some(v) = self.max_lift {
            sweep.max_lift = v;
        }
        if let Some(v) = self.steps {
            sweep.step_count = v;
        }
    }
}

impl Command {
    /// Default command when none is given: the default sweep chart
    pub fn default_sweep() -> Self {
        Command::Sweep {
            experiment: ExperimentArgs::default(),
            sweep: SweepArgs::default(),
            output: None,
            no_interactive: false,
        }
    }

    /// Merge this command's flags into `settings`
    pub fn apply(&self, settings: &mut Settings) {
        match self {
            Command::Plan { experiment }
            | Command::Mde { experiment, .. }
            | Command::Simulate { experiment, .. } => experiment.apply(&mut settings.experiment),
            Command::Sweep {
                experiment, sweep, ..
            }
            | Command::Settings { experiment, sweep } => {
                experiment.apply(&mut settings.experiment);
                sweep.apply(&mut settings.sweep);
            }
        }
    }

    /// Whether this command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            Command::Sweep {
                output: None,
                no_interactive: false,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["abtest"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.log_level, "info");
        assert!(Command::default_sweep().is_interactive());
    }

    #[test]
    fn test_plan_flags_override_settings() {
        let args = Args::try_parse_from([
            "abtest",
            "plan",
            "--daily-traffic",
            "2500",
            "--lift",
            "-0.05",
        ])
        .unwrap();

        let mut settings = Settings::default();
        let command = args.command.unwrap();
        command.apply(&mut settings);

        assert_eq!(settings.experiment.daily_traffic, 2500.0);
        assert_eq!(settings.experiment.lift, -0.05);
        assert_eq!(settings.experiment.base_rate, 0.03);
        assert!(!command.is_interactive());
    }

    #[test]
    fn test_sweep_output_is_not_interactive() {
        let args = Args::try_parse_from([
            "abtest",
            "sweep",
            "--steps",
            "5",
            "--output",
            "days.svg",
        ])
        .unwrap();
        let command = args.command.unwrap();
        assert!(!command.is_interactive());

        let mut settings = Settings::default();
        command.apply(&mut settings);
        assert_eq!(settings.sweep.step_count, 5);
        assert_eq!(settings.sweep.min_lift, 0.005);
    }

    #[test]
    fn test_settings_command_merges_flags() {
        let args = Args::try_parse_from([
            "abtest",
            "settings",
            "--base-rate",
            "0.12",
            "--max-lift",
            "0.5",
        ])
        .unwrap();
        let command = args.command.unwrap();
        assert!(!command.is_interactive());

        let mut settings = Settings::default();
        command.apply(&mut settings);
        assert_eq!(settings.experiment.base_rate, 0.12);
        assert_eq!(settings.sweep.max_lift, 0.5);

        let yaml = settings.to_yaml().unwrap();
        assert_eq!(Settings::from_yaml(&yaml).unwrap(), settings);
    }

    #[test]
    fn test_mde_requires_days() {
        assert!(Args::try_parse_from(["abtest", "mde"]).is_err());
        let args = Args::try_parse_from(["abtest", "mde", "--days", "14"]).unwrap();
        assert!(matches!(args.command, Some(Command::Mde { days: 14, .. })));
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let args =
            Args::try_parse_from(["abtest", "simulate", "--config", "plan.yaml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("plan.yaml")));
        assert!(matches!(
            args.command,
            Some(Command::Simulate {
                iterations: 10_000,
                seed: 42,
                total: None,
                ..
            })
        ));
    }
}
