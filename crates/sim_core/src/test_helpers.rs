//! Test helpers shared by unit tests, integration tests, and benches.

use std::sync::Arc;

use bevy_ecs::prelude::{Entity, World};

use crate::charger::ChargerPool;
use crate::clock::SimulationClock;
use crate::ecs::VehicleState;
use crate::fault::FaultModel;
use crate::fleet::VehicleType;
use crate::telemetry::FleetTelemetry;

/// A vehicle type with round numbers: one hour of cruise (100 miles at
/// 1 kWh/mile) drains the 100 kWh battery exactly, and a full charge takes
/// one hour. No faults.
pub fn test_vehicle_type(name: &str) -> Arc<VehicleType> {
    test_vehicle_type_with_fault_rate(name, 0.0)
}

/// Same round numbers with an explicit fault rate.
pub fn test_vehicle_type_with_fault_rate(name: &str, fault_rate: f64) -> Arc<VehicleType> {
    Arc::new(
        VehicleType::new(name, 100.0, 100.0, 1.0, 1.0, 4, fault_rate)
            .expect("test vehicle type is valid"),
    )
}

/// World with every core resource inserted (fault model seeded to 1) and no
/// vehicles.
pub fn create_test_world(chargers: usize, tick_hours: f64, horizon_hours: f64) -> World {
    let mut world = World::new();
    world.insert_resource(SimulationClock::new(tick_hours, horizon_hours));
    world.insert_resource(FleetTelemetry::default());
    world.insert_resource(ChargerPool::new(chargers));
    world.insert_resource(FaultModel::new(Some(1)));
    world
}

/// Spawns a vehicle with a full battery.
pub fn spawn_vehicle(world: &mut World, vehicle_type: Arc<VehicleType>) -> Entity {
    world.spawn(VehicleState::new(vehicle_type)).id()
}

/// Spawns a vehicle with an empty battery.
pub fn spawn_depleted_vehicle(world: &mut World, vehicle_type: Arc<VehicleType>) -> Entity {
    let mut state = VehicleState::new(vehicle_type);
    state.set_battery_kwh(0.0);
    world.spawn(state).id()
}
