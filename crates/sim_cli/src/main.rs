//! Fleet simulation entry point.
//!
//! Runs with no arguments using the production defaults (20 vehicles, 3
//! chargers, 3 h horizon, 0.1 h ticks); every parameter can be overridden.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use bevy_ecs::prelude::World;
use clap::Parser;
use sim_core::fleet::{default_fleet, VehicleType};
use sim_core::runner::{run_to_horizon, tick_schedule};
use sim_core::scenario::{build_scenario_with_fleet, ScenarioParams};
use sim_core::telemetry::FleetTelemetry;

mod report;

#[derive(Debug, Parser)]
#[command(name = "sim_cli", about = "Electric aircraft fleet simulation")]
struct Args {
    /// Number of aircraft in the fleet.
    #[arg(long, default_value_t = 20)]
    vehicles: usize,

    /// Number of charging slots.
    #[arg(long, default_value_t = 3)]
    chargers: usize,

    /// Simulation horizon in hours.
    #[arg(long, default_value_t = 3.0)]
    hours: f64,

    /// Tick duration in hours.
    #[arg(long, default_value_t = 0.1)]
    tick: f64,

    /// Random seed; omit for a different fleet mix and fault pattern per run.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with the vehicle type roster (defaults to the built-in
    /// fleet).
    #[arg(long)]
    fleet: Option<PathBuf>,

    /// Write the per-type summary to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn load_fleet(path: &PathBuf) -> anyhow::Result<Vec<Arc<VehicleType>>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading fleet roster {}", path.display()))?;
    let types: Vec<VehicleType> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing fleet roster {}", path.display()))?;
    anyhow::ensure!(!types.is_empty(), "fleet roster is empty");

    let mut fleet = Vec::with_capacity(types.len());
    for vehicle_type in types {
        vehicle_type.validate()?;
        fleet.push(Arc::new(vehicle_type));
    }
    Ok(fleet)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let fleet = match &args.fleet {
        Some(path) => load_fleet(path)?,
        None => default_fleet(),
    };

    let params = ScenarioParams {
        num_vehicles: args.vehicles,
        num_chargers: args.chargers,
        horizon_hours: args.hours,
        tick_hours: args.tick,
        seed: args.seed,
    };
    anyhow::ensure!(params.tick_hours > 0.0, "tick duration must be positive");
    anyhow::ensure!(params.horizon_hours >= 0.0, "horizon must not be negative");

    tracing::info!(
        vehicles = params.num_vehicles,
        chargers = params.num_chargers,
        horizon_hours = params.horizon_hours,
        tick_hours = params.tick_hours,
        seed = ?params.seed,
        "starting simulation"
    );

    let mut world = World::new();
    build_scenario_with_fleet(&mut world, params.clone(), fleet);
    let mut schedule = tick_schedule();
    let ticks = run_to_horizon(&mut world, &mut schedule);
    tracing::info!(ticks, "simulation complete");

    let telemetry = world.resource::<FleetTelemetry>();
    report::print_summary(telemetry, &params, ticks);

    if let Some(path) = &args.csv {
        report::export_csv(telemetry, path)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        tracing::info!(path = %path.display(), "summary exported");
    }

    Ok(())
}
