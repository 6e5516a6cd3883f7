//! Flight system: advances flight physics and fault draws for every vehicle
//! with battery left, and submits charge requests for depleted ones.
//!
//! Runs before the charging system each tick, so every vehicle has made its
//! flight/charge-request decision before the charger pool advances.

use bevy_ecs::prelude::{Entity, Query, Res, ResMut};

use crate::charger::ChargerPool;
use crate::clock::SimulationClock;
use crate::ecs::VehicleState;
use crate::fault::FaultModel;
use crate::telemetry::{FaultRecord, FleetTelemetry};

pub fn flight_system(
    clock: Res<SimulationClock>,
    mut fault_model: ResMut<FaultModel>,
    mut pool: ResMut<ChargerPool>,
    mut telemetry: ResMut<FleetTelemetry>,
    mut vehicles: Query<(Entity, &mut VehicleState)>,
) {
    let dt = clock.tick_hours();
    let now = clock.now_hours();

    for (entity, mut vehicle) in vehicles.iter_mut() {
        if vehicle.is_depleted() {
            // Waiting or charging since an earlier tick; the request is
            // idempotent while the vehicle is tracked by the pool.
            pool.request_charge(entity);
            continue;
        }

        vehicle.fly(dt);

        if vehicle.simulate_fault(dt, fault_model.rng()) {
            vehicle.degrade_cruise_speed();
            let record = FaultRecord {
                at_hours: now,
                type_name: vehicle.type_name().to_string(),
                fault_count: vehicle.fault_count(),
                cruise_speed_mph: vehicle.cruise_speed_mph(),
            };
            tracing::warn!(
                at_hours = record.at_hours,
                vehicle_type = record.type_name.as_str(),
                fault_count = record.fault_count,
                cruise_speed_mph = record.cruise_speed_mph,
                "fault degraded cruise speed"
            );
            telemetry.record_fault(record);
        }

        if vehicle.is_depleted() {
            // The step straddled depletion: close out the flight and get in
            // line for a charger.
            if let Some(session) = vehicle.finalize_flight_session() {
                telemetry.record_flight(
                    vehicle.type_name(),
                    session.flight_hours,
                    session.distance_miles,
                    vehicle.vehicle_type().passenger_count,
                );
            }
            pool.request_charge(entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::Schedule;

    use crate::test_helpers::{
        create_test_world, spawn_vehicle, test_vehicle_type, test_vehicle_type_with_fault_rate,
    };

    #[test]
    fn flying_vehicle_accumulates_and_stays_out_of_the_pool() {
        let mut world = create_test_world(3, 0.1, 3.0);
        let entity = spawn_vehicle(&mut world, test_vehicle_type("Cruiser"));

        let mut schedule = Schedule::default();
        schedule.add_systems(flight_system);
        schedule.run(&mut world);

        let vehicle = world.entity(entity).get::<VehicleState>().expect("vehicle");
        assert!((vehicle.battery_kwh() - 90.0).abs() < 1e-9);
        assert!((vehicle.session_flight_hours() - 0.1).abs() < 1e-9);
        assert_eq!(world.resource::<ChargerPool>().active_len(), 0);
        assert!(world.resource::<FleetTelemetry>().stats("Cruiser").is_none());
    }

    #[test]
    fn depletion_mid_step_finalizes_the_session_and_requests_a_charge() {
        let mut world = create_test_world(3, 0.1, 3.0);
        let entity = spawn_vehicle(&mut world, test_vehicle_type("ShortHop"));
        world
            .entity_mut(entity)
            .get_mut::<VehicleState>()
            .expect("vehicle")
            .set_battery_kwh(5.0);

        let mut schedule = Schedule::default();
        schedule.add_systems(flight_system);
        schedule.run(&mut world);

        let vehicle = world.entity(entity).get::<VehicleState>().expect("vehicle");
        assert!(vehicle.is_depleted());
        // 5 kWh affords 5 miles = 0.05 h at 100 mph.
        assert!((vehicle.total_flight_hours() - 0.05).abs() < 1e-9);
        assert_eq!(vehicle.session_flight_hours(), 0.0);

        let telemetry = world.resource::<FleetTelemetry>();
        let stats = telemetry.stats("ShortHop").expect("stats");
        assert_eq!(stats.flight_count, 1);
        assert!((stats.total_distance_miles - 5.0).abs() < 1e-9);

        let pool = world.resource::<ChargerPool>();
        assert_eq!(pool.active_len(), 1);
        assert!(pool.is_tracked(entity));
    }

    #[test]
    fn fault_applies_speed_penalty_and_is_recorded() {
        // A full-hour tick at fault rate 1.0 makes the per-step probability
        // 1.0, so the fault is certain regardless of the seed.
        let mut world = create_test_world(3, 1.0, 3.0);
        let entity = spawn_vehicle(
            &mut world,
            test_vehicle_type_with_fault_rate("Gremlin", 1.0),
        );

        let mut schedule = Schedule::default();
        schedule.add_systems(flight_system);
        schedule.run(&mut world);

        let vehicle = world.entity(entity).get::<VehicleState>().expect("vehicle");
        assert_eq!(vehicle.fault_count(), 1);
        assert!((vehicle.cruise_speed_mph() - 98.0).abs() < 1e-9);

        let telemetry = world.resource::<FleetTelemetry>();
        assert_eq!(telemetry.fault_count("Gremlin"), 1);
        let record = telemetry.faults().last().expect("fault record");
        assert_eq!(record.type_name, "Gremlin");
        assert_eq!(record.fault_count, 1);
        assert!((record.cruise_speed_mph - 98.0).abs() < 1e-9);
    }
}
