//! ECS components: the per-aircraft energy and fault state machine.
//!
//! The component keeps `battery_kwh` inside [0, capacity] on every mutation.
//! Flight accumulates into a *session* first; [`VehicleState::finalize_flight_session`]
//! folds a session into the lifetime totals when the vehicle depletes or the
//! run ends, so totals only ever reflect completed sessions.

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use rand::Rng;

use crate::fleet::VehicleType;

/// Tolerance for the full-charge comparison.
pub const FULL_CHARGE_EPSILON: f64 = 1e-6;
/// Charge increments below this are treated as no charge at all.
const NEGLIGIBLE_KWH: f64 = 1e-9;
/// Multiplicative cruise-speed penalty applied per fault.
const FAULT_SPEED_FACTOR: f64 = 0.98;
/// Cruise speed never degrades below this fraction of the nominal speed.
const MIN_SPEED_FRACTION: f64 = 0.5;

/// A completed flight session, as folded into the lifetime totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSession {
    pub flight_hours: f64,
    pub distance_miles: f64,
    pub passenger_miles: f64,
}

/// Mutable runtime state of one aircraft.
#[derive(Debug, Clone, Component)]
pub struct VehicleState {
    vehicle_type: Arc<VehicleType>,
    battery_kwh: f64,
    /// Actual cruise speed; degrades permanently on faults.
    cruise_speed_mph: f64,
    session_flight_hours: f64,
    session_distance_miles: f64,
    session_passenger_miles: f64,
    session_charge_hours: f64,
    total_flight_hours: f64,
    total_charging_hours: f64,
    distance_flown_miles: f64,
    passenger_miles: f64,
    fault_count: u32,
}

impl VehicleState {
    /// A new aircraft starts with a full battery at nominal cruise speed.
    pub fn new(vehicle_type: Arc<VehicleType>) -> Self {
        let battery_kwh = vehicle_type.battery_capacity_kwh;
        let cruise_speed_mph = vehicle_type.cruise_speed_mph;
        Self {
            vehicle_type,
            battery_kwh,
            cruise_speed_mph,
            session_flight_hours: 0.0,
            session_distance_miles: 0.0,
            session_passenger_miles: 0.0,
            session_charge_hours: 0.0,
            total_flight_hours: 0.0,
            total_charging_hours: 0.0,
            distance_flown_miles: 0.0,
            passenger_miles: 0.0,
            fault_count: 0,
        }
    }

    pub fn vehicle_type(&self) -> &Arc<VehicleType> {
        &self.vehicle_type
    }

    pub fn type_name(&self) -> &str {
        &self.vehicle_type.name
    }

    pub fn battery_kwh(&self) -> f64 {
        self.battery_kwh
    }

    pub fn cruise_speed_mph(&self) -> f64 {
        self.cruise_speed_mph
    }

    pub fn fault_count(&self) -> u32 {
        self.fault_count
    }

    pub fn session_flight_hours(&self) -> f64 {
        self.session_flight_hours
    }

    pub fn session_charge_hours(&self) -> f64 {
        self.session_charge_hours
    }

    pub fn total_flight_hours(&self) -> f64 {
        self.total_flight_hours
    }

    pub fn total_charging_hours(&self) -> f64 {
        self.total_charging_hours
    }

    pub fn distance_flown_miles(&self) -> f64 {
        self.distance_flown_miles
    }

    pub fn passenger_miles(&self) -> f64 {
        self.passenger_miles
    }

    /// Advances flight physics by `dt` hours.
    ///
    /// When the battery cannot cover the full step, the flight is clipped
    /// exactly at the depletion point: only the affordable distance and the
    /// fractional time it takes are accumulated, and the battery goes to zero.
    /// The vehicle never flies on energy it does not have.
    pub fn fly(&mut self, dt: f64) {
        debug_assert!(dt > 0.0, "flight step must be positive");
        if dt <= 0.0 {
            return;
        }
        let energy_per_mile = self.vehicle_type.energy_per_mile_kwh;
        let passengers = self.vehicle_type.passenger_count as f64;

        let distance = self.cruise_speed_mph * dt;
        let demand = distance * energy_per_mile;

        if self.battery_kwh >= demand {
            self.battery_kwh -= demand;
            self.session_flight_hours += dt;
            self.session_distance_miles += distance;
            self.session_passenger_miles += passengers * distance;
        } else {
            let max_distance = self.battery_kwh / energy_per_mile;
            let flown_hours = max_distance / self.cruise_speed_mph;
            self.session_flight_hours += flown_hours;
            self.session_distance_miles += max_distance;
            self.session_passenger_miles += passengers * max_distance;
            self.battery_kwh = 0.0;
        }
    }

    /// Folds the in-progress flight session into the lifetime totals and
    /// returns it for telemetry. `None` when no flight has accumulated since
    /// the last call; calling twice in a row changes nothing.
    pub fn finalize_flight_session(&mut self) -> Option<FlightSession> {
        if self.session_flight_hours <= 0.0 {
            return None;
        }
        let session = FlightSession {
            flight_hours: self.session_flight_hours,
            distance_miles: self.session_distance_miles,
            passenger_miles: self.session_passenger_miles,
        };
        self.total_flight_hours += session.flight_hours;
        self.distance_flown_miles += session.distance_miles;
        self.passenger_miles += session.passenger_miles;
        self.session_flight_hours = 0.0;
        self.session_distance_miles = 0.0;
        self.session_passenger_miles = 0.0;
        Some(session)
    }

    /// Charges for `dt` hours at the type's nominal rate, clamping at
    /// capacity. Only the fraction of `dt` that produced the clamped delta
    /// counts as charging time.
    pub fn charge(&mut self, dt: f64) {
        debug_assert!(dt > 0.0, "charge step must be positive");
        if dt <= 0.0 {
            return;
        }
        let capacity = self.vehicle_type.battery_capacity_kwh;
        let offered = self.vehicle_type.charge_rate_kw() * dt;
        if offered <= NEGLIGIBLE_KWH {
            return;
        }
        let before = self.battery_kwh;
        self.battery_kwh = (self.battery_kwh + offered).min(capacity);
        let accepted = self.battery_kwh - before;

        let effective = dt * (accepted / offered);
        self.session_charge_hours += effective;
        self.total_charging_hours += effective;
    }

    /// Returns and resets the charging time accumulated this session.
    pub fn take_charge_session(&mut self) -> f64 {
        std::mem::take(&mut self.session_charge_hours)
    }

    /// Draws one fault for a step of `dt` hours. The per-step probability is
    /// `fault_probability_per_hour * dt`, a linear-in-time approximation.
    /// Increments the fault counter on occurrence; the speed penalty is the
    /// caller's decision, via [`VehicleState::degrade_cruise_speed`].
    pub fn simulate_fault<R: Rng>(&mut self, dt: f64, rng: &mut R) -> bool {
        debug_assert!(dt > 0.0, "fault step must be positive");
        if dt <= 0.0 {
            return false;
        }
        let probability = self.vehicle_type.fault_probability_per_hour * dt;
        if rng.gen::<f64>() < probability {
            self.fault_count += 1;
            true
        } else {
            false
        }
    }

    /// Applies the per-fault cruise-speed penalty, floored at 50% of the
    /// type's nominal speed.
    pub fn degrade_cruise_speed(&mut self) {
        let floor = self.vehicle_type.cruise_speed_mph * MIN_SPEED_FRACTION;
        self.cruise_speed_mph = (self.cruise_speed_mph * FAULT_SPEED_FACTOR).max(floor);
    }

    pub fn is_depleted(&self) -> bool {
        self.battery_kwh <= 0.0
    }

    pub fn is_fully_charged(&self) -> bool {
        self.battery_kwh >= self.vehicle_type.battery_capacity_kwh - FULL_CHARGE_EPSILON
    }

    /// Overrides the battery level, clamped to [0, capacity].
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn set_battery_kwh(&mut self, kwh: f64) {
        self.battery_kwh = kwh.clamp(0.0, self.vehicle_type.battery_capacity_kwh);
    }
}
