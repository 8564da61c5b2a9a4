//! Sprout - Entry Point
//!
//! Grows one plant in a chosen climate, printing a report every
//! simulated interval and a final report (text or JSON) at the end.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use sprout::core::config::{ClimateConfig, SimulationConfig};
use sprout::core::error::{Result, SproutError};
use sprout::simulation::{text_report, Simulation, SimulationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Plant growth simulation
#[derive(Parser, Debug)]
#[command(name = "sprout")]
#[command(about = "Grow a plant through simulated days and report on it")]
struct Args {
    /// TOML config file (defaults used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name of the plant
    #[arg(long)]
    name: Option<String>,

    /// Simulated hours to run
    #[arg(long)]
    hours: Option<u64>,

    /// Simulated seconds per tick
    #[arg(long)]
    tick_seconds: Option<u64>,

    /// Simulated seconds between progress reports
    #[arg(long)]
    report_every: Option<u64>,

    /// Climate: eden, or constant (requires the config file's values)
    #[arg(long)]
    climate: Option<String>,

    /// Output format for the final report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Suppress periodic reports
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn build_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(name) = &args.name {
        config.plant_name = name.clone();
    }
    if let Some(hours) = args.hours {
        config.hours = hours;
    }
    if let Some(tick_seconds) = args.tick_seconds {
        config.tick_seconds = tick_seconds;
    }
    if let Some(report_every) = args.report_every {
        config.report_interval = report_every;
    }
    if let Some(climate) = &args.climate {
        match climate.as_str() {
            "eden" => config.climate = ClimateConfig::Eden,
            "constant" => {
                if !matches!(config.climate, ClimateConfig::Constant { .. }) {
                    return Err(SproutError::InvalidConfig(
                        "constant climate needs temperature, moisture and light in --config"
                            .into(),
                    ));
                }
            }
            other => return Err(SproutError::UnknownClimate(other.to_string())),
        }
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    tracing::info!(
        plant = %config.plant_name,
        hours = config.hours,
        tick_seconds = config.tick_seconds,
        climate = ?config.climate,
        "Sprout starting"
    );

    let mut sim = Simulation::from_config(&config);
    let print_progress = !args.quiet && args.format == OutputFormat::Text;

    let summary = sim.run_with(
        config.total_ticks(),
        config.tick_seconds,
        config.report_interval,
        |s| {
            if print_progress {
                println!("{}", text_report(s));
                println!("{}", "*".repeat(80));
            }
        },
    );

    match args.format {
        OutputFormat::Text => {
            if !summary.survived {
                println!("{}", "!".repeat(80));
                println!("Plant Died");
                println!("{}", "!".repeat(80));
            }
            println!("{}", text_report(&sim));
            println!("{}", summary.summary());
        }
        OutputFormat::Json => {
            let report = SimulationReport::new(&sim, summary);
            println!("{}", report.to_json()?);
        }
    }

    Ok(())
}
