//! Vehicle type configuration and the production fleet roster.
//!
//! A [`VehicleType`] is created once at setup and shared read-only (via `Arc`)
//! by every aircraft of that type. Construction validates the fields that the
//! physics divides by, so a roster loaded from a file cannot smuggle in a
//! zero charge duration or consumption rate.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FleetError {
    #[error("vehicle type {type_name}: {field} must be positive")]
    NonPositive {
        type_name: String,
        field: &'static str,
    },
    #[error("vehicle type {type_name}: fault probability {value} outside [0, 1]")]
    FaultProbabilityOutOfRange { type_name: String, value: f64 },
}

/// Immutable configuration shared by every aircraft of a given type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    /// Unique key used for per-type statistics aggregation.
    pub name: String,
    pub cruise_speed_mph: f64,
    pub battery_capacity_kwh: f64,
    /// Hours to charge an empty battery to full at the nominal rate.
    pub charge_duration_hours: f64,
    pub energy_per_mile_kwh: f64,
    pub passenger_count: u32,
    pub fault_probability_per_hour: f64,
}

impl VehicleType {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        cruise_speed_mph: f64,
        battery_capacity_kwh: f64,
        charge_duration_hours: f64,
        energy_per_mile_kwh: f64,
        passenger_count: u32,
        fault_probability_per_hour: f64,
    ) -> Result<Self, FleetError> {
        let vehicle_type = Self {
            name: name.into(),
            cruise_speed_mph,
            battery_capacity_kwh,
            charge_duration_hours,
            energy_per_mile_kwh,
            passenger_count,
            fault_probability_per_hour,
        };
        vehicle_type.validate()?;
        Ok(vehicle_type)
    }

    /// Re-checks the field invariants, e.g. after deserializing a roster file.
    pub fn validate(&self) -> Result<(), FleetError> {
        let positive = [
            ("cruise speed", self.cruise_speed_mph),
            ("battery capacity", self.battery_capacity_kwh),
            ("charge duration", self.charge_duration_hours),
            ("energy per mile", self.energy_per_mile_kwh),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(FleetError::NonPositive {
                    type_name: self.name.clone(),
                    field,
                });
            }
        }
        if self.passenger_count == 0 {
            return Err(FleetError::NonPositive {
                type_name: self.name.clone(),
                field: "passenger count",
            });
        }
        if !(0.0..=1.0).contains(&self.fault_probability_per_hour) {
            return Err(FleetError::FaultProbabilityOutOfRange {
                type_name: self.name.clone(),
                value: self.fault_probability_per_hour,
            });
        }
        Ok(())
    }

    /// Nominal charge rate in kW.
    pub fn charge_rate_kw(&self) -> f64 {
        self.battery_capacity_kwh / self.charge_duration_hours
    }
}

/// The five production vehicle types.
pub fn default_fleet() -> Vec<Arc<VehicleType>> {
    let types = [
        ("JobyS4", 100.0, 80.0, 1.5, 0.8, 4, 0.01),
        ("CityAirbus", 90.0, 70.0, 1.2, 1.0, 4, 0.02),
        ("ArcherMaker", 110.0, 85.0, 1.8, 0.75, 5, 0.015),
        ("LiliumJet", 120.0, 75.0, 1.6, 0.9, 6, 0.018),
        ("WiskCora", 80.0, 65.0, 1.3, 1.1, 2, 0.025),
    ];
    types
        .into_iter()
        .map(|(name, speed, capacity, charge, energy, passengers, fault)| {
            Arc::new(
                VehicleType::new(name, speed, capacity, charge, energy, passengers, fault)
                    .expect("default fleet roster is valid"),
            )
        })
        .collect()
}
