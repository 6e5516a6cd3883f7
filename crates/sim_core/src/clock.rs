//! Fixed-increment simulation clock.
//!
//! Time is measured in hours. Each call to [`SimulationClock::advance`] moves
//! `now` forward by one tick; the runner stops running the schedule once `now`
//! reaches the horizon.

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, Resource)]
pub struct SimulationClock {
    now_hours: f64,
    tick_hours: f64,
    horizon_hours: f64,
}

impl SimulationClock {
    pub fn new(tick_hours: f64, horizon_hours: f64) -> Self {
        debug_assert!(tick_hours > 0.0, "tick duration must be positive");
        debug_assert!(horizon_hours >= 0.0, "horizon must not be negative");
        Self {
            now_hours: 0.0,
            tick_hours,
            horizon_hours,
        }
    }

    pub fn now_hours(&self) -> f64 {
        self.now_hours
    }

    pub fn tick_hours(&self) -> f64 {
        self.tick_hours
    }

    pub fn horizon_hours(&self) -> f64 {
        self.horizon_hours
    }

    /// Moves time forward by one tick.
    pub fn advance(&mut self) {
        self.now_hours += self.tick_hours;
    }

    /// True once the horizon has been reached.
    pub fn is_complete(&self) -> bool {
        self.now_hours >= self.horizon_hours
    }
}

impl Default for SimulationClock {
    /// The production cadence: 0.1 h ticks over a 3 h horizon.
    fn default() -> Self {
        Self::new(0.1, 3.0)
    }
}
