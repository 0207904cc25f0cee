//! # kesselblick-adapter-virtual
//!
//! Virtual/demo implementation of the sensor-reader port.
//!
//! Serves a fixed, plausible winter-morning snapshot so the dashboard can be
//! run and demonstrated without a collector database. Also convenient as a
//! fully-wired reader in integration tests.
//!
//! ## Dependency rule
//!
//! Depends on `kesselblick-app` (port trait) and `kesselblick-domain` only.

use kesselblick_app::ports::SensorReader;
use kesselblick_domain::error::KesselblickError;
use kesselblick_domain::readings::{
    AmbientReadings, BoilerReadings, DailyCounters, HeatingCircuit, HotWaterReadings,
    OperatingTotals, SensorSnapshot,
};

/// Sensor reader that always returns the same demo readings.
#[derive(Debug, Default, Clone, Copy)]
pub struct VirtualSensorReader;

impl VirtualSensorReader {
    /// The demo snapshot: burner heating, HK1 pumping, everything nominal.
    #[must_use]
    pub fn snapshot() -> SensorSnapshot {
        SensorSnapshot {
            boiler: BoilerReadings {
                actual_temp: 61.8,
                target_temp: 65.0,
                pump: true,
                three_way_valve: false,
                burner: true,
                hot_water_loading: false,
                flame: true,
                flame_current: 12.4,
                current_output: 48.0,
                max_output: 75.0,
                summer_mode: false,
            },
            hk1: HeatingCircuit {
                flow_target_temp: 52.0,
                flow_actual_temp: 51.2,
                party: false,
                vacation: false,
                automatic: true,
                day_mode: true,
                pump: true,
            },
            hk2: HeatingCircuit {
                flow_target_temp: 35.0,
                flow_actual_temp: 34.1,
                party: false,
                vacation: false,
                automatic: true,
                day_mode: true,
                pump: true,
            },
            mixer_position: 30.0,
            return_temp: 41.0,
            hot_water: HotWaterReadings {
                actual_temp: 57.3,
                target_temp: 60.0,
                temp_ok: true,
                day_mode: true,
                circulation_pump: false,
                priority: true,
            },
            ambient: AmbientReadings {
                outdoor_temp: -3.5,
                outdoor_temp_damped: -1.0,
                room_actual_temp: 21.5,
                room_target_temp: 21.0,
            },
            totals: OperatingTotals {
                burner_runtime_secs: 4_442_880,
                burner_starts: 53_210,
                system_pressure: 1.52,
                service_code: "-H".to_string(),
                error_code: "0".to_string(),
            },
        }
    }

    /// The demo daily counters.
    #[must_use]
    pub fn counters() -> DailyCounters {
        DailyCounters {
            burner_runtime_secs: 7_920,
            burner_starts: 14,
            heating_runtime_secs: 6_300,
            hot_water_runtime_secs: 1_620,
            hot_water_cycles: 3,
        }
    }
}

impl SensorReader for VirtualSensorReader {
    async fn current(&self) -> Result<SensorSnapshot, KesselblickError> {
        Ok(Self::snapshot())
    }

    async fn changes_for_day(&self, _day_offset: u32) -> Result<DailyCounters, KesselblickError> {
        Ok(Self::counters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_serve_the_demo_snapshot() {
        let reader = VirtualSensorReader;
        let snapshot = reader.current().await.unwrap();
        assert_eq!(snapshot, VirtualSensorReader::snapshot());
        assert!(snapshot.boiler.flame);
    }

    #[tokio::test]
    async fn should_serve_the_same_counters_for_any_day() {
        let reader = VirtualSensorReader;
        let today = reader.changes_for_day(0).await.unwrap();
        let last_week = reader.changes_for_day(7).await.unwrap();
        assert_eq!(today, last_week);
    }
}
