//! Simulation runner: builds the per-tick schedule and advances the clock.
//!
//! The schedule runs [`flight_system`] then [`charging_system`], chained, so
//! the charger pool advances exactly once per tick and only after every
//! vehicle has made its flight/charge-request decision for that tick.

use bevy_ecs::prelude::{Schedule, World};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::clock::SimulationClock;
use crate::ecs::VehicleState;
use crate::systems::charging::charging_system;
use crate::systems::flight::flight_system;
use crate::telemetry::FleetTelemetry;

/// Builds the per-tick schedule.
pub fn tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((flight_system, charging_system).chain());
    schedule
}

/// Runs one tick and advances the clock. Returns `false` without running
/// anything once the horizon has been reached.
pub fn run_tick(world: &mut World, schedule: &mut Schedule) -> bool {
    if world.resource::<SimulationClock>().is_complete() {
        return false;
    }
    schedule.run(world);
    world.resource_mut::<SimulationClock>().advance();
    true
}

/// Runs at most `max_ticks` ticks; stops early at the horizon. Returns the
/// number of ticks executed. Open sessions are not flushed, so partial runs
/// can be resumed with further calls.
pub fn run_ticks(world: &mut World, schedule: &mut Schedule, max_ticks: usize) -> usize {
    let mut ticks = 0;
    while ticks < max_ticks && run_tick(world, schedule) {
        ticks += 1;
    }
    ticks
}

/// Runs to the horizon, then folds any open flight session into the totals so
/// the summary reflects completed sessions only. Returns the number of ticks
/// executed.
pub fn run_to_horizon(world: &mut World, schedule: &mut Schedule) -> usize {
    let mut ticks = 0;
    while run_tick(world, schedule) {
        ticks += 1;
    }
    flush_open_sessions(world);
    ticks
}

/// Finalizes every in-progress flight session and records it.
pub fn flush_open_sessions(world: &mut World) {
    let mut flights = Vec::new();
    let mut query = world.query::<&mut VehicleState>();
    for mut vehicle in query.iter_mut(world) {
        if let Some(session) = vehicle.finalize_flight_session() {
            flights.push((
                vehicle.type_name().to_string(),
                session,
                vehicle.vehicle_type().passenger_count,
            ));
        }
    }
    let mut telemetry = world.resource_mut::<FleetTelemetry>();
    for (type_name, session, passenger_count) in flights {
        telemetry.record_flight(
            &type_name,
            session.flight_hours,
            session.distance_miles,
            passenger_count,
        );
    }
}
