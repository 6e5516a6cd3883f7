#![allow(dead_code)]

use bevy_ecs::prelude::World;
use sim_core::charger::ChargerPool;
use sim_core::clock::SimulationClock;
use sim_core::fault::FaultModel;
use sim_core::telemetry::FleetTelemetry;

/// Builder configuration for reproducible test worlds.
#[derive(Clone, Debug)]
pub struct TestWorldConfig {
    pub seed: u64,
    pub chargers: usize,
    pub tick_hours: f64,
    pub horizon_hours: f64,
}

impl Default for TestWorldConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            chargers: 3,
            tick_hours: 0.1,
            horizon_hours: 3.0,
        }
    }
}

/// Helper that populates the ECS world with the shared resources used in
/// integration tests.
#[derive(Debug, Default)]
pub struct TestWorldBuilder {
    config: TestWorldConfig,
}

impl TestWorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the RNG seed used by the fault model.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_chargers(mut self, chargers: usize) -> Self {
        self.config.chargers = chargers;
        self
    }

    pub fn with_tick_hours(mut self, tick_hours: f64) -> Self {
        self.config.tick_hours = tick_hours;
        self
    }

    pub fn with_horizon_hours(mut self, horizon_hours: f64) -> Self {
        self.config.horizon_hours = horizon_hours;
        self
    }

    /// Build the ECS world with the configured resources.
    pub fn build(self) -> World {
        let TestWorldConfig {
            seed,
            chargers,
            tick_hours,
            horizon_hours,
        } = self.config;

        let mut world = World::new();
        world.insert_resource(SimulationClock::new(tick_hours, horizon_hours));
        world.insert_resource(FleetTelemetry::default());
        world.insert_resource(ChargerPool::new(chargers));
        world.insert_resource(FaultModel::new(Some(seed)));
        world
    }
}
