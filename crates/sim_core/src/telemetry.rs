//! Telemetry: per-vehicle-type aggregates and the fault log.
//!
//! The simulation only ever *records* into this resource; reading happens in
//! reports and tests. Keys are vehicle-type names; a `BTreeMap` keeps the
//! summary in stable order across runs.

use std::collections::BTreeMap;

use bevy_ecs::prelude::Resource;

/// Aggregates for a single vehicle type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeStats {
    pub total_flight_hours: f64,
    pub total_distance_miles: f64,
    pub total_charging_hours: f64,
    pub total_passenger_miles: f64,
    pub total_faults: u32,
    pub flight_count: u32,
    pub charge_count: u32,
}

impl TypeStats {
    pub fn avg_flight_hours(&self) -> f64 {
        if self.flight_count > 0 {
            self.total_flight_hours / self.flight_count as f64
        } else {
            0.0
        }
    }

    pub fn avg_distance_miles(&self) -> f64 {
        if self.flight_count > 0 {
            self.total_distance_miles / self.flight_count as f64
        } else {
            0.0
        }
    }

    pub fn avg_charge_hours(&self) -> f64 {
        if self.charge_count > 0 {
            self.total_charging_hours / self.charge_count as f64
        } else {
            0.0
        }
    }
}

/// One fault occurrence, recorded when the flight system applies the penalty.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultRecord {
    /// Simulation time of the tick in which the fault occurred.
    pub at_hours: f64,
    pub type_name: String,
    /// The vehicle's fault count after this fault.
    pub fault_count: u32,
    /// The vehicle's cruise speed after the penalty.
    pub cruise_speed_mph: f64,
}

/// Collects per-type statistics for the whole run.
#[derive(Debug, Default, Resource)]
pub struct FleetTelemetry {
    per_type: BTreeMap<String, TypeStats>,
    faults: Vec<FaultRecord>,
}

impl FleetTelemetry {
    /// Records one completed flight session.
    pub fn record_flight(
        &mut self,
        type_name: &str,
        flight_hours: f64,
        distance_miles: f64,
        passenger_count: u32,
    ) {
        let stats = self.entry(type_name);
        stats.total_flight_hours += flight_hours;
        stats.total_distance_miles += distance_miles;
        stats.total_passenger_miles += distance_miles * passenger_count as f64;
        stats.flight_count += 1;
    }

    /// Records one completed charging session.
    pub fn record_charge(&mut self, type_name: &str, charge_hours: f64) {
        let stats = self.entry(type_name);
        stats.total_charging_hours += charge_hours;
        stats.charge_count += 1;
    }

    /// Records a fault, both in the per-type aggregate and the fault log.
    pub fn record_fault(&mut self, record: FaultRecord) {
        self.entry(&record.type_name).total_faults += 1;
        self.faults.push(record);
    }

    pub fn stats(&self, type_name: &str) -> Option<&TypeStats> {
        self.per_type.get(type_name)
    }

    pub fn charge_event_count(&self, type_name: &str) -> u32 {
        self.stats(type_name).map_or(0, |stats| stats.charge_count)
    }

    pub fn fault_count(&self, type_name: &str) -> u32 {
        self.stats(type_name).map_or(0, |stats| stats.total_faults)
    }

    /// Per-type summaries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeStats)> {
        self.per_type
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn faults(&self) -> &[FaultRecord] {
        &self.faults
    }

    fn entry(&mut self, type_name: &str) -> &mut TypeStats {
        self.per_type.entry(type_name.to_string()).or_default()
    }
}
