pub mod charger;
pub mod clock;
pub mod ecs;
pub mod fault;
pub mod fleet;
pub mod runner;
pub mod scenario;
pub mod systems;
pub mod telemetry;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
