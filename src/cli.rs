//! Command-line interface.

use crate::report::{render_all, Locale, OutputFormat};
use crate::storage::{config, load_plan, AppConfig};
use crate::training::{demo_workouts, CaloriesCalculator, Workout, WorkoutSpec};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rusttrain")]
#[command(version)]
#[command(about = "Workout statistics for running, walking and swimming", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Summary language, overrides the config file
    #[arg(long, global = true, value_enum)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize a running session
    Run {
        /// Number of steps
        #[arg(long)]
        steps: u32,
        /// Duration in minutes
        #[arg(long)]
        minutes: f64,
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
        /// Step length in meters
        #[arg(long)]
        step_length: Option<f64>,
    },
    /// Summarize a walking session
    Walk {
        /// Number of steps
        #[arg(long)]
        steps: u32,
        /// Duration in minutes
        #[arg(long)]
        minutes: f64,
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
        /// Height in centimeters
        #[arg(long)]
        height_cm: Option<f64>,
        /// Step length in meters
        #[arg(long)]
        step_length: Option<f64>,
    },
    /// Summarize a pool swimming session
    Swim {
        /// Number of strokes
        #[arg(long)]
        strokes: u32,
        /// Duration in minutes
        #[arg(long)]
        minutes: f64,
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
        /// Pool length in meters
        #[arg(long)]
        pool_length: u32,
        /// Number of pool lengths swum
        #[arg(long)]
        pool_count: u32,
    },
    /// Summarize every workout in a TOML plan file
    Plan {
        /// Plan file with [[workout]] tables
        file: PathBuf,
    },
    /// Summarize the built-in reference workouts
    Demo,
}

impl Command {
    /// Workout described by a single-session subcommand.
    fn to_spec(&self) -> Option<WorkoutSpec> {
        match *self {
            Command::Run {
                steps,
                minutes,
                weight,
                step_length,
            } => Some(WorkoutSpec::Running {
                steps,
                minutes,
                weight_kg: weight,
                step_length_m: step_length,
            }),
            Command::Walk {
                steps,
                minutes,
                weight,
                height_cm,
                step_length,
            } => Some(WorkoutSpec::Walking {
                steps,
                minutes,
                weight_kg: weight,
                height_cm,
                step_length_m: step_length,
            }),
            Command::Swim {
                strokes,
                minutes,
                weight,
                pool_length,
                pool_count,
            } => Some(WorkoutSpec::Swimming {
                strokes,
                minutes,
                weight_kg: weight,
                length_pool: pool_length,
                count_pool: pool_count,
            }),
            Command::Plan { .. } | Command::Demo => None,
        }
    }
}

/// Execute the parsed command line and return the rendered output.
pub fn run(cli: Cli) -> Result<String> {
    let app_config = match &cli.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable config: {}", e);
            AppConfig::default()
        }),
    };

    let format = cli.format.unwrap_or(app_config.output.format);
    let locale = cli.locale.unwrap_or(app_config.output.locale);

    let workouts: Vec<Workout> = match &cli.command {
        Command::Plan { file } => load_plan(file, &app_config.athlete)
            .with_context(|| format!("failed to load plan {}", file.display()))?,
        Command::Demo => demo_workouts(),
        single => {
            let spec = single.to_spec().context("command does not describe a workout")?;
            vec![spec.into_workout(&app_config.athlete).context("invalid workout")?]
        }
    };

    tracing::debug!(count = workouts.len(), %format, %locale, "Summarizing workouts");

    let infos: Vec<_> = workouts.iter().map(|w| w.training_info()).collect();
    Ok(render_all(&infos, format, locale)?)
}
