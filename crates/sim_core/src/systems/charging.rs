//! Charging system: progresses active charges once per tick, records
//! completions, and promotes queued vehicles into freed slots.
//!
//! Completion telemetry is emitted here, for exactly the vehicles released
//! this tick, so no separate was-charging bookkeeping is needed.

use bevy_ecs::prelude::{Entity, Query, Res, ResMut};

use crate::charger::ChargerPool;
use crate::clock::SimulationClock;
use crate::ecs::VehicleState;
use crate::telemetry::FleetTelemetry;

pub fn charging_system(
    clock: Res<SimulationClock>,
    mut pool: ResMut<ChargerPool>,
    mut telemetry: ResMut<FleetTelemetry>,
    mut vehicles: Query<&mut VehicleState>,
) {
    let dt = clock.tick_hours();

    let active: Vec<Entity> = pool.active().to_vec();
    let mut finished = Vec::new();
    for entity in active {
        let Ok(mut vehicle) = vehicles.get_mut(entity) else {
            continue;
        };
        vehicle.charge(dt);
        if vehicle.is_fully_charged() {
            finished.push(entity);
        }
    }

    for &entity in &finished {
        let Ok(mut vehicle) = vehicles.get_mut(entity) else {
            continue;
        };
        let session_hours = vehicle.take_charge_session();
        tracing::debug!(
            vehicle_type = vehicle.type_name(),
            session_hours,
            "charge complete"
        );
        telemetry.record_charge(vehicle.type_name(), session_hours);
    }

    pool.release_finished(&finished);
}
