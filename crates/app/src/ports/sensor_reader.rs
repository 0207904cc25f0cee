//! Sensor reader port — the data-access boundary of the dashboard.

use std::future::Future;

use kesselblick_domain::error::KesselblickError;
use kesselblick_domain::readings::{DailyCounters, SensorSnapshot};

/// Read access to the sensor store the collector daemon writes.
///
/// The futures carry an explicit `Send` bound so the trait can be used from
/// generic axum handlers.
pub trait SensorReader {
    /// Fetch the current value of every sensor as one snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`KesselblickError::MissingSensor`] when a required sensor has
    /// no stored reading, or a storage error from the underlying store.
    fn current(
        &self,
    ) -> impl Future<Output = Result<SensorSnapshot, KesselblickError>> + Send;

    /// Fetch the counter deltas for a day, `day_offset` days before today
    /// (`0` = today).
    ///
    /// # Errors
    ///
    /// Returns a storage error from the underlying store.
    fn changes_for_day(
        &self,
        day_offset: u32,
    ) -> impl Future<Output = Result<DailyCounters, KesselblickError>> + Send;
}
