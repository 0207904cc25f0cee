//! Status service — use-cases for reading and presenting the heating status.

use kesselblick_domain::error::KesselblickError;
use kesselblick_domain::readings::{DailyCounters, SensorSnapshot};
use kesselblick_domain::report::{self, Section};
use kesselblick_domain::time::{self, Timestamp};

use crate::ports::SensorReader;

/// Everything the status page shows: when it was generated, and the six
/// labeled sections.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    /// Time the readings were fetched.
    pub generated_at: Timestamp,
    /// Day offset the daily-activity section covers (`0` = today).
    pub day_offset: u32,
    /// Dashboard sections in display order.
    pub sections: Vec<Section>,
}

/// Application service backing every endpoint of the dashboard.
pub struct StatusService<R> {
    reader: R,
}

impl<R: SensorReader> StatusService<R> {
    /// Create a new service backed by the given sensor reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Fetch the current snapshot (export and JSON endpoints).
    ///
    /// # Errors
    ///
    /// Propagates reader errors unchanged.
    pub async fn current_snapshot(&self) -> Result<SensorSnapshot, KesselblickError> {
        self.reader.current().await
    }

    /// Fetch the counter deltas for a day (`0` = today).
    ///
    /// # Errors
    ///
    /// Propagates reader errors unchanged.
    pub async fn daily_counters(
        &self,
        day_offset: u32,
    ) -> Result<DailyCounters, KesselblickError> {
        self.reader.changes_for_day(day_offset).await
    }

    /// Fetch both snapshots and build the report the status page renders.
    ///
    /// # Errors
    ///
    /// Propagates reader errors unchanged.
    pub async fn status_report(&self, day_offset: u32) -> Result<StatusReport, KesselblickError> {
        let snapshot = self.reader.current().await?;
        let counters = self.reader.changes_for_day(day_offset).await?;
        tracing::debug!(day_offset, "built status report");

        Ok(StatusReport {
            generated_at: time::now(),
            day_offset,
            sections: report::build_sections(&snapshot, &counters),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kesselblick_domain::error::MissingSensorError;
    use kesselblick_domain::readings::{
        AmbientReadings, BoilerReadings, HeatingCircuit, HotWaterReadings, OperatingTotals,
    };
    use std::future::Future;
    use std::sync::Mutex;

    struct FakeReader {
        snapshot: SensorSnapshot,
        counters: DailyCounters,
        requested_offsets: Mutex<Vec<u32>>,
    }

    impl FakeReader {
        fn new() -> Self {
            Self {
                snapshot: snapshot(),
                counters: DailyCounters {
                    burner_runtime_secs: 600,
                    burner_starts: 2,
                    heating_runtime_secs: 600,
                    hot_water_runtime_secs: 0,
                    hot_water_cycles: 0,
                },
                requested_offsets: Mutex::new(Vec::new()),
            }
        }
    }

    impl SensorReader for FakeReader {
        fn current(
            &self,
        ) -> impl Future<Output = Result<SensorSnapshot, KesselblickError>> + Send {
            let result = Ok(self.snapshot.clone());
            async { result }
        }

        fn changes_for_day(
            &self,
            day_offset: u32,
        ) -> impl Future<Output = Result<DailyCounters, KesselblickError>> + Send {
            self.requested_offsets.lock().unwrap().push(day_offset);
            let result = Ok(self.counters.clone());
            async { result }
        }
    }

    struct FailingReader;

    impl SensorReader for FailingReader {
        fn current(
            &self,
        ) -> impl Future<Output = Result<SensorSnapshot, KesselblickError>> + Send {
            async { Err(MissingSensorError::new("KesselIstTemp").into()) }
        }

        fn changes_for_day(
            &self,
            _day_offset: u32,
        ) -> impl Future<Output = Result<DailyCounters, KesselblickError>> + Send {
            async { Err(MissingSensorError::new("Betriebszeit").into()) }
        }
    }

    fn snapshot() -> SensorSnapshot {
        SensorSnapshot {
            boiler: BoilerReadings {
                actual_temp: 48.0,
                target_temp: 60.0,
                pump: true,
                three_way_valve: false,
                burner: true,
                hot_water_loading: false,
                flame: true,
                flame_current: 11.0,
                current_output: 40.0,
                max_output: 75.0,
                summer_mode: false,
            },
            hk1: circuit(),
            hk2: circuit(),
            mixer_position: 35.0,
            return_temp: 40.0,
            hot_water: HotWaterReadings {
                actual_temp: 55.0,
                target_temp: 60.0,
                temp_ok: true,
                day_mode: true,
                circulation_pump: false,
                priority: true,
            },
            ambient: AmbientReadings {
                outdoor_temp: 4.0,
                outdoor_temp_damped: 5.5,
                room_actual_temp: 21.0,
                room_target_temp: 21.0,
            },
            totals: OperatingTotals {
                burner_runtime_secs: 1000,
                burner_starts: 10,
                system_pressure: 1.4,
                service_code: "-H".to_string(),
                error_code: "0".to_string(),
            },
        }
    }

    fn circuit() -> HeatingCircuit {
        HeatingCircuit {
            flow_target_temp: 45.0,
            flow_actual_temp: 44.0,
            party: false,
            vacation: false,
            automatic: true,
            day_mode: true,
            pump: true,
        }
    }

    #[tokio::test]
    async fn should_build_report_with_six_sections() {
        let service = StatusService::new(FakeReader::new());
        let report = service.status_report(0).await.unwrap();
        assert_eq!(report.sections.len(), 6);
        assert_eq!(report.day_offset, 0);
    }

    #[tokio::test]
    async fn should_pass_day_offset_through_to_reader() {
        let reader = FakeReader::new();
        let service = StatusService::new(reader);
        service.status_report(3).await.unwrap();
        let offsets = service.reader.requested_offsets.lock().unwrap().clone();
        assert_eq!(offsets, vec![3]);
    }

    #[tokio::test]
    async fn should_return_snapshot_unchanged() {
        let service = StatusService::new(FakeReader::new());
        let result = service.current_snapshot().await.unwrap();
        assert_eq!(result, snapshot());
    }

    #[tokio::test]
    async fn should_propagate_missing_sensor_error() {
        let service = StatusService::new(FailingReader);
        let err = service.status_report(0).await.unwrap_err();
        assert!(matches!(err, KesselblickError::MissingSensor(_)));
    }
}
