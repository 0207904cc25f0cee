//! Typed sensor readings — the two request-scoped snapshots the dashboard
//! consumes.
//!
//! The collector daemon stores flat `name → value` readings; the storage
//! adapter lifts them into [`SensorSnapshot`] (instantaneous values) and
//! [`DailyCounters`] (per-day deltas of the cumulative counters). Both are
//! read-only once built — nothing in this crate mutates them.

pub mod boiler;
pub mod circuit;
pub mod hot_water;

pub use boiler::{BoilerReadings, BurnerActivity};
pub use circuit::{CircuitMode, HeatingCircuit};
pub use hot_water::HotWaterReadings;

use serde::{Deserialize, Serialize};

/// Instantaneous readings of the whole installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    /// Boiler (Kessel) readings.
    pub boiler: BoilerReadings,
    /// Heating circuit 1 (HK1).
    pub hk1: HeatingCircuit,
    /// Heating circuit 2 (HK2).
    pub hk2: HeatingCircuit,
    /// Mixer valve position for HK2 (Mischersteuerung).
    pub mixer_position: f64,
    /// Return flow temperature in °C (Rücklauf).
    pub return_temp: f64,
    /// Domestic hot water (Warmwasser).
    pub hot_water: HotWaterReadings,
    /// Outdoor and room temperatures.
    pub ambient: AmbientReadings,
    /// Cumulative counters, pressure, and service/error codes.
    pub totals: OperatingTotals,
}

/// Outdoor and room temperatures in °C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientReadings {
    /// Outdoor temperature (Außen).
    pub outdoor_temp: f64,
    /// Damped outdoor temperature (Außen gedämpft).
    pub outdoor_temp_damped: f64,
    /// Measured room temperature.
    pub room_actual_temp: f64,
    /// Room temperature setpoint.
    pub room_target_temp: f64,
}

/// Lifetime counters and operating status of the unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingTotals {
    /// Total burner runtime in seconds (Betriebszeit).
    pub burner_runtime_secs: u64,
    /// Total number of burner starts.
    pub burner_starts: u64,
    /// System water pressure in bar (Systemdruck).
    pub system_pressure: f64,
    /// Current service code reported by the unit.
    pub service_code: String,
    /// Current error code reported by the unit.
    pub error_code: String,
}

/// Per-day deltas of the cumulative counters, as stored by the collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCounters {
    /// Burner runtime in seconds (Brennerlaufzeit).
    pub burner_runtime_secs: u64,
    /// Number of burner starts (Brennerstarts).
    pub burner_starts: u64,
    /// Burner runtime spent on heating, in seconds (HeizZeit).
    pub heating_runtime_secs: u64,
    /// Burner runtime spent on hot-water loading, in seconds.
    pub hot_water_runtime_secs: u64,
    /// Number of hot-water loading cycles (Warmwasserbereitungen).
    pub hot_water_cycles: u64,
}
