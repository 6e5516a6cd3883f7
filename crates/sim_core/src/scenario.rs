//! Scenario setup: inserts the core resources and spawns the fleet.

use std::sync::Arc;

use bevy_ecs::prelude::World;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::charger::ChargerPool;
use crate::clock::SimulationClock;
use crate::ecs::VehicleState;
use crate::fault::FaultModel;
use crate::fleet::{default_fleet, VehicleType};
use crate::telemetry::FleetTelemetry;

/// Tag mixed into the scenario seed so the fault model draws from its own
/// stream.
const FAULT_SEED_TAG: u64 = 0xFA_0175;

/// Parameters for building a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub num_vehicles: usize,
    pub num_chargers: usize,
    pub horizon_hours: f64,
    pub tick_hours: f64,
    /// Random seed for reproducibility (optional; if `None`, uses entropy).
    pub seed: Option<u64>,
}

impl Default for ScenarioParams {
    /// The production run: 20 aircraft, 3 chargers, 3 h in 0.1 h ticks.
    fn default() -> Self {
        Self {
            num_vehicles: 20,
            num_chargers: 3,
            horizon_hours: 3.0,
            tick_hours: 0.1,
            seed: None,
        }
    }
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_vehicles(mut self, num_vehicles: usize) -> Self {
        self.num_vehicles = num_vehicles;
        self
    }

    pub fn with_chargers(mut self, num_chargers: usize) -> Self {
        self.num_chargers = num_chargers;
        self
    }

    pub fn with_horizon_hours(mut self, hours: f64) -> Self {
        self.horizon_hours = hours;
        self
    }

    pub fn with_tick_hours(mut self, hours: f64) -> Self {
        self.tick_hours = hours;
        self
    }
}

/// Populates `world` with clock, telemetry, charger pool, fault model, and a
/// fleet drawn uniformly from the default roster.
pub fn build_scenario(world: &mut World, params: ScenarioParams) {
    build_scenario_with_fleet(world, params, default_fleet());
}

/// Same as [`build_scenario`] but with an explicit roster.
pub fn build_scenario_with_fleet(
    world: &mut World,
    params: ScenarioParams,
    fleet: Vec<Arc<VehicleType>>,
) {
    debug_assert!(!fleet.is_empty(), "fleet roster must not be empty");

    world.insert_resource(SimulationClock::new(
        params.tick_hours,
        params.horizon_hours,
    ));
    world.insert_resource(FleetTelemetry::default());
    world.insert_resource(ChargerPool::new(params.num_chargers));
    world.insert_resource(FaultModel::new(
        params.seed.map(|seed| seed ^ FAULT_SEED_TAG),
    ));

    let mut rng: StdRng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for _ in 0..params.num_vehicles {
        let vehicle_type = Arc::clone(&fleet[rng.gen_range(0..fleet.len())]);
        world.spawn(VehicleState::new(vehicle_type));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_scenario_spawns_the_fleet_and_resources() {
        let mut world = World::new();
        build_scenario(
            &mut world,
            ScenarioParams {
                num_vehicles: 10,
                num_chargers: 2,
                ..Default::default()
            }
            .with_seed(42),
        );

        let vehicle_count = world.query::<&VehicleState>().iter(&world).count();
        assert_eq!(vehicle_count, 10);

        assert_eq!(world.resource::<ChargerPool>().capacity(), 2);
        assert_eq!(world.resource::<SimulationClock>().now_hours(), 0.0);
        assert!(world.resource::<FleetTelemetry>().iter().next().is_none());

        let mut query = world.query::<&VehicleState>();
        for vehicle in query.iter(&world) {
            assert!(!vehicle.is_depleted(), "vehicles start with a full battery");
            assert!(vehicle.is_fully_charged());
        }
    }

    #[test]
    fn same_seed_assigns_the_same_vehicle_types() {
        let params = ScenarioParams::default().with_seed(7).with_vehicles(15);

        let mut world_a = World::new();
        build_scenario(&mut world_a, params.clone());
        let mut world_b = World::new();
        build_scenario(&mut world_b, params);

        let names = |world: &mut World| -> Vec<String> {
            world
                .query::<&VehicleState>()
                .iter(world)
                .map(|vehicle| vehicle.type_name().to_string())
                .collect()
        };
        assert_eq!(names(&mut world_a), names(&mut world_b));
    }
}
