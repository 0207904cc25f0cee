//! Domestic hot water (Warmwasser) readings.

use serde::{Deserialize, Serialize};

/// Instantaneous hot-water tank readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotWaterReadings {
    /// Measured tank temperature in °C (Warmwasser IST).
    pub actual_temp: f64,
    /// Tank temperature setpoint in °C (Warmwasser SOLL).
    pub target_temp: f64,
    /// Tank temperature within the target band (WarmwasserTempOK).
    pub temp_ok: bool,
    /// Day program active for hot water (vs. night setback).
    pub day_mode: bool,
    /// Circulation pump running (Zirkulation).
    pub circulation_pump: bool,
    /// Hot water has priority over the heating circuits (WW-Vorrang).
    pub priority: bool,
}
