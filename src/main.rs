use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io;
use std::path::PathBuf;

use trainstats::config::AppConfig;
use trainstats::export::{write_summaries, ExportFormat};
use trainstats::import::{process_packages, read_packages_file, BatchReport};
use trainstats::logging::{init_logging, LogFormat, LogLevel};
use trainstats::{read_package, MessageLocale, Package, Training, TrainStatsError};

/// TrainStats - Workout Statistics CLI
///
/// Computes distance, mean speed and spent calories for running, sports
/// walking and swimming sessions from raw sensor packages.
#[derive(Parser)]
#[command(name = "trainstats")]
#[command(version)]
#[command(about = "Workout statistics from sensor packages", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    /// Log output format (pretty, json, compact)
    #[arg(long, global = true, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a single package
    Calc {
        /// Workout code (SWM, RUN, WLK)
        #[arg(short, long)]
        code: String,

        /// Comma-separated package values, e.g. 15000,1,75
        #[arg(long, value_delimiter = ',', num_args = 1.., allow_hyphen_values = true)]
        values: Vec<f64>,

        /// Output format (defaults to the configured one)
        #[arg(short = 'f', long, value_enum)]
        format: Option<ExportFormat>,

        /// Report language
        #[arg(short, long, value_enum)]
        locale: Option<MessageLocale>,
    },

    /// Summarise the built-in demo packages
    Demo {
        /// Output format (defaults to the configured one)
        #[arg(short = 'f', long, value_enum)]
        format: Option<ExportFormat>,

        /// Report language
        #[arg(short, long, value_enum)]
        locale: Option<MessageLocale>,
    },

    /// Summarise every package of a CSV file (code,v1,v2,... per line)
    Batch {
        /// Input file path
        #[arg(long)]
        file: PathBuf,

        /// Output format (defaults to the configured one)
        #[arg(short = 'f', long, value_enum)]
        format: Option<ExportFormat>,

        /// Report language
        #[arg(short, long, value_enum)]
        locale: Option<MessageLocale>,

        /// Process records one after another
        #[arg(long)]
        sequential: bool,

        /// Stop at the first rejected package
        #[arg(long)]
        stop_on_error: bool,
    },

    /// Show or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        show: bool,

        /// Write a default configuration file
        #[arg(short, long)]
        init: bool,
    },
}

fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn report_error(err: TrainStatsError) -> anyhow::Error {
    if err.severity().to_tracing_level() == tracing::Level::WARN {
        tracing::warn!(error = %err, "Input rejected");
    } else {
        tracing::error!(error = %err, "Operation failed");
    }
    anyhow!(err.user_message())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let creating_config = matches!(cli.command, Commands::Config { init: true, .. });
    let mut config = match &cli.config {
        Some(path) if creating_config && !path.exists() => AppConfig::default(),
        Some(path) => AppConfig::load_from_file(path)
            .map_err(|e| report_error(TrainStatsError::Configuration(format!("{:#}", e))))?,
        None => AppConfig::load_or_default(),
    };

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    config.logging.level = config.logging.level.raised_by(cli.verbose);
    init_logging(&config.logging)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let stdout = io::stdout();

    match cli.command {
        Commands::Calc {
            code,
            values,
            format,
            locale,
        } => {
            let workout = read_package(&code, &values)
                .map_err(|e| report_error(TrainStatsError::from(e)))?;

            write_summaries(
                &mut stdout.lock(),
                &[workout.summary()],
                format.unwrap_or(config.output.format),
                locale.unwrap_or(config.output.locale),
            )
            .map_err(report_error)?;
        }

        Commands::Demo { format, locale } => {
            let summaries = demo_packages()
                .iter()
                .map(|package| package.read().map(|workout| workout.summary()))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| report_error(TrainStatsError::from(e)))?;

            write_summaries(
                &mut stdout.lock(),
                &summaries,
                format.unwrap_or(config.output.format),
                locale.unwrap_or(config.output.locale),
            )
            .map_err(report_error)?;
        }

        Commands::Batch {
            file,
            format,
            locale,
            sequential,
            stop_on_error,
        } => {
            let records = read_packages_file(&file)
                .map_err(report_error)
                .with_context(|| format!("Failed to read packages from {}", file.display()))?;

            let mut batch_config = config.batch.clone();
            batch_config.parallel &= !sequential;
            batch_config.stop_on_error |= stop_on_error;

            let outcomes = process_packages(&records, &batch_config);

            let mut summaries = Vec::with_capacity(outcomes.len());
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(summary) => summaries.push(summary.clone()),
                    Err(e) => eprintln!(
                        "{} line {} ({}): {}",
                        "✗".red().bold(),
                        outcome.line,
                        outcome.code,
                        e
                    ),
                }
            }

            write_summaries(
                &mut stdout.lock(),
                &summaries,
                format.unwrap_or(config.output.format),
                locale.unwrap_or(config.output.locale),
            )
            .map_err(report_error)?;

            let report = BatchReport::from_outcomes(&outcomes);
            if report.is_fully_successful() {
                eprintln!("{}", report.to_string_pretty().green());
            } else {
                eprintln!("{}", report.to_string_pretty().yellow());
                std::process::exit(1);
            }
        }

        Commands::Config { show, init } => {
            if init {
                let path = match &cli.config {
                    Some(path) => {
                        config.save_to_file(path)?;
                        path.clone()
                    }
                    None => config.save_default()?,
                };
                eprintln!(
                    "{}",
                    format!("✓ Configuration written to {}", path.display()).green()
                );
            }
            if show || !init {
                let rendered = toml::to_string_pretty(&config)
                    .context("Failed to serialize configuration to TOML")?;
                println!("{}", rendered);
            }
        }
    }

    Ok(())
}
