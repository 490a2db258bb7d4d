use std::path::PathBuf;

use abtest::cli::{Args, Command};
use abtest::report::{self, ReportTarget};
use abtest::util::format::{format_count, format_grouped, format_percentage};
use abtest::{LogSink, Settings, init_logging};
use abtest_core::{
    ExperimentConfig, achieved_power, compute, minimum_detectable_lift, simulate_power,
};
use clap::Parser;
use color_eyre::eyre::WrapErr;

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".abtest")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let command = args.command.unwrap_or_else(Command::default_sweep);

    let sink = if command.is_interactive() {
        LogSink::File(data_dir)
    } else {
        LogSink::Stderr
    };
    init_logging(&sink, &args.log_level)?;

    let mut settings = Settings::load_or_default(args.config.as_deref())
        .wrap_err("Failed to load settings")?;
    command.apply(&mut settings);
    warn_unusual(&settings.experiment);

    match command {
        Command::Plan { .. } => plan(&settings.experiment)?,
        Command::Sweep {
            output,
            no_interactive,
            ..
        } => {
            let target = match output {
                Some(path) => ReportTarget::Svg(path),
                None if no_interactive => ReportTarget::Table,
                None => ReportTarget::Terminal,
            };
            report::render(&settings, &target).wrap_err("Failed to render report")?;

            if target == ReportTarget::Terminal {
                if let Err(err) = ratatui::try_restore() {
                    tracing::error!("Failed to restore terminal: {err}");
                }
            }
        }
        Command::Mde { days, .. } => {
            let lift = minimum_detectable_lift(&settings.experiment, days)
                .wrap_err("Failed to compute minimum detectable lift")?;
            println!(
                "Minimum detectable lift in {days} days: {}",
                format_percentage(lift)
            );
        }
        Command::Simulate {
            total,
            iterations,
            seed,
            ..
        } => {
            let total = match total {
                Some(total) => total,
                None => compute(&settings.experiment)?.total_sample_size,
            };
            let simulated = simulate_power(&settings.experiment, total, iterations, seed)
                .wrap_err("Failed to simulate power")?;
            let analytic = achieved_power(&settings.experiment, total)?;
            println!("Total subjects:   {}", format_count(total));
            println!("Analytic power:   {}", format_percentage(analytic));
            println!(
                "Simulated power:  {} ± {} ({} iterations)",
                format_percentage(simulated.power),
                format_percentage(simulated.standard_error),
                format_grouped(simulated.iterations as f64)
            );
        }
        Command::Settings { .. } => {
            let yaml = settings
                .to_yaml()
                .wrap_err("Failed to serialize settings")?;
            print!("{yaml}");
        }
    }

    tracing::info!("abtest finished");
    Ok(())
}

fn plan(config: &ExperimentConfig) -> color_eyre::Result<()> {
    let result = compute(config).wrap_err("Failed to compute sample size")?;
    let power = achieved_power(config, result.total_sample_size)?;
    tracing::info!(
        days = result.days_required,
        total = result.total_sample_size,
        "computed plan"
    );

    println!("Lift:             {}", format_percentage(config.lift));
    println!("Days required:    {}", result.days_required);
    println!("Total subjects:   {}", format_count(result.total_sample_size));
    println!("  treatment:      {}", format_count(result.treatment_size));
    println!("  control:        {}", format_count(result.control_size));
    println!("Effect size (h):  {:.4}", result.effect_size);
    println!("Achieved power:   {}", format_percentage(power));
    Ok(())
}

fn warn_unusual(config: &ExperimentConfig) {
    if config.allocation < 0.1 || config.allocation > 0.9 {
        tracing::warn!(
            allocation = config.allocation,
            "allocation is far from balanced; sample sizes will be large"
        );
    }
    if config.power < 0.5 {
        tracing::warn!(power = config.power, "target power below 50%");
    }
}
