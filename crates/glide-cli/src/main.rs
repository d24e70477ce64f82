//! Operator CLI for the glide task computer.
//!
//! Recomputes task geometry from a task file and inspects glide polars.
//! The task file carries what the surrounding application would hold in
//! its waypoint repository and configuration store.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glide_core::polar::{self, GlidePolar, PolarSample};
use glide_core::{refresh_task, Task, TaskLeg, TaskSettings, Waypoint};

#[derive(Parser)]
#[command(name = "glide-cli", about = "Task geometry and glide polar tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recompute sector, target and leg geometry for a task file
    Refresh {
        /// Path to a task JSON file (waypoints + settings + legs)
        task: PathBuf,
    },
    /// Print a built-in glide polar
    Polar {
        /// Built-in polar id
        #[arg(long)]
        id: usize,
    },
    /// Fit a polar from three reference samples
    Fit {
        /// Reference speeds in km/h (three values)
        #[arg(long, num_args = 3)]
        speed: Vec<f64>,
        /// Reference sink rates in m/s, negative down (three values)
        #[arg(long, num_args = 3, allow_negative_numbers = true)]
        sink: Vec<f64>,
        /// Dry gross mass in kg
        #[arg(long)]
        mass: f64,
        /// Maximum water ballast in kg
        #[arg(long, default_value_t = 0.0)]
        ballast: f64,
    },
}

/// On-disk task description consumed by `refresh`.
#[derive(Deserialize)]
struct TaskFile {
    waypoints: Vec<Waypoint>,
    #[serde(default)]
    settings: TaskSettings,
    legs: Vec<TaskLeg>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Refresh { task } => refresh(&task),
        Command::Polar { id } => print_json(&polar::builtin(id)?),
        Command::Fit {
            speed,
            sink,
            mass,
            ballast,
        } => {
            let samples = [
                PolarSample { speed_kph: speed[0], sink_mps: sink[0] },
                PolarSample { speed_kph: speed[1], sink_mps: sink[1] },
                PolarSample { speed_kph: speed[2], sink_mps: sink[2] },
            ];
            print_json(&GlidePolar::from_reference(samples, mass, ballast))
        }
    }
}

fn refresh(path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading task file {}", path.display()))?;
    let file: TaskFile = serde_json::from_str(&raw).context("parsing task file")?;

    let mut task = Task::new(file.legs);
    let problems = task.validate(file.waypoints.len());
    if !problems.is_empty() {
        bail!("invalid task: {}", problems.join("; "));
    }

    refresh_task(&mut task, &file.waypoints, &file.settings);
    tracing::info!(
        "Refreshed {} legs, {:.1} km total",
        task.legs.len(),
        task.total_distance_m / 1000.0
    );

    print_json(&task)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
