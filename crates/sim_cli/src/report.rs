//! Per-type summary reporting: console and CSV.

use std::path::Path;

use sim_core::scenario::ScenarioParams;
use sim_core::telemetry::FleetTelemetry;

pub fn print_summary(telemetry: &FleetTelemetry, params: &ScenarioParams, ticks: usize) {
    println!(
        "\n--- Simulation Summary ({} vehicles, {} chargers, {:.1} h horizon, {} ticks) ---",
        params.num_vehicles, params.num_chargers, params.horizon_hours, ticks
    );

    for (name, stats) in telemetry.iter() {
        println!("\nVehicle Type: {name}");
        println!(
            "  Average flight time per flight  = {:.3} h",
            stats.avg_flight_hours()
        );
        println!(
            "  Average distance per flight     = {:.2} miles",
            stats.avg_distance_miles()
        );
        println!(
            "  Average charge time per session = {:.3} h",
            stats.avg_charge_hours()
        );
        println!(
            "  Total passenger miles           = {:.0} miles",
            stats.total_passenger_miles
        );
        println!(
            "  Total faults                    = {}",
            stats.total_faults
        );
    }

    if !telemetry.faults().is_empty() {
        println!("\nFault log ({} events):", telemetry.faults().len());
        for fault in telemetry.faults() {
            println!(
                "  t={:.1} h  {}  fault #{}  cruise speed now {:.1} mph",
                fault.at_hours, fault.type_name, fault.fault_count, fault.cruise_speed_mph
            );
        }
    }
}

pub fn export_csv(telemetry: &FleetTelemetry, path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "vehicle_type",
        "flight_count",
        "total_flight_hours",
        "avg_flight_hours",
        "total_distance_miles",
        "avg_distance_miles",
        "charge_count",
        "total_charging_hours",
        "avg_charge_hours",
        "total_passenger_miles",
        "total_faults",
    ])?;

    for (name, stats) in telemetry.iter() {
        writer.write_record(&[
            name.to_string(),
            stats.flight_count.to_string(),
            stats.total_flight_hours.to_string(),
            stats.avg_flight_hours().to_string(),
            stats.total_distance_miles.to_string(),
            stats.avg_distance_miles().to_string(),
            stats.charge_count.to_string(),
            stats.total_charging_hours.to_string(),
            stats.avg_charge_hours().to_string(),
            stats.total_passenger_miles.to_string(),
            stats.total_faults.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
