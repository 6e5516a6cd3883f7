//! Run the 20 vehicle / 3 charger production scenario and print the summary.
//!
//! Run with: cargo run -p sim_core --example fleet_run

use bevy_ecs::prelude::World;
use sim_core::runner::{run_to_horizon, tick_schedule};
use sim_core::scenario::{build_scenario, ScenarioParams};
use sim_core::telemetry::FleetTelemetry;

fn main() {
    let params = ScenarioParams::default().with_seed(123);
    let mut world = World::new();
    build_scenario(&mut world, params.clone());

    let mut schedule = tick_schedule();
    let ticks = run_to_horizon(&mut world, &mut schedule);

    println!(
        "--- Fleet run ({} vehicles, {} chargers, {:.1} h horizon, seed 123) ---",
        params.num_vehicles, params.num_chargers, params.horizon_hours
    );
    println!("Ticks executed: {}", ticks);

    let telemetry = world.resource::<FleetTelemetry>();
    for (name, stats) in telemetry.iter() {
        println!(
            "{:<12}  flights={:<3} avg_flight={:.3} h  avg_distance={:.1} mi  charges={:<3} avg_charge={:.3} h  passenger_miles={:.0}  faults={}",
            name,
            stats.flight_count,
            stats.avg_flight_hours(),
            stats.avg_distance_miles(),
            stats.charge_count,
            stats.avg_charge_hours(),
            stats.total_passenger_miles,
            stats.total_faults,
        );
    }
    println!("Fault events logged: {}", telemetry.faults().len());
}
