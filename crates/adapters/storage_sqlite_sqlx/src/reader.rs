//! `SQLite` implementation of [`SensorReader`].
//!
//! The collector appends one row per observation; the newest row per sensor
//! is the current value, and the per-day counter change is the spread
//! (`MAX - MIN`) of the cumulative counter within the UTC day window.

use std::collections::HashMap;

use chrono::{Days, NaiveDate, NaiveTime, Utc};
use sqlx::SqlitePool;

use kesselblick_app::ports::SensorReader;
use kesselblick_domain::error::{KesselblickError, MissingSensorError};
use kesselblick_domain::readings::{
    AmbientReadings, BoilerReadings, DailyCounters, HeatingCircuit, HotWaterReadings,
    OperatingTotals, SensorSnapshot,
};

use crate::error::StorageError;

/// Sensor names as the collector writes them.
pub mod keys {
    pub const KESSEL_IST_TEMP: &str = "KesselIstTemp";
    pub const KESSEL_SOLL_TEMP: &str = "KesselSollTemp";
    pub const KESSEL_PUMPE: &str = "KesselPumpe";
    pub const DREI_WEGE_VENTIL: &str = "3WegeVentil";
    pub const BRENNER: &str = "Brenner";
    pub const WARMWASSER_BEREITUNG: &str = "WarmwasserBereitung";
    pub const FLAMME: &str = "Flamme";
    pub const FLAMMENSTROM: &str = "Flammenstrom";
    pub const MOM_LEISTUNG: &str = "MomLeistung";
    pub const MAX_LEISTUNG: &str = "MaxLeistung";
    pub const SOMMERBETRIEB: &str = "Sommerbetrieb";

    pub const VORLAUF_HK1_SOLL_TEMP: &str = "VorlaufHK1SollTemp";
    pub const VORLAUF_HK1_IST_TEMP: &str = "VorlaufHK1IstTemp";
    pub const HK1_PARTY: &str = "HK1Party";
    pub const HK1_FERIEN: &str = "HK1Ferien";
    pub const HK1_AUTOMATIK: &str = "HK1Automatik";
    pub const HK1_TAGBETRIEB: &str = "HK1Tagbetrieb";
    pub const HK1_PUMPE: &str = "HK1Pumpe";
    pub const VORLAUF_HK2_SOLL_TEMP: &str = "VorlaufHK2SollTemp";
    pub const VORLAUF_HK2_IST_TEMP: &str = "VorlaufHK2IstTemp";
    pub const HK2_PARTY: &str = "HK2Party";
    pub const HK2_FERIEN: &str = "HK2Ferien";
    pub const HK2_AUTOMATIK: &str = "HK2Automatik";
    pub const HK2_TAGBETRIEB: &str = "HK2Tagbetrieb";
    pub const HK2_PUMPE: &str = "HK2Pumpe";
    pub const MISCHERSTEUERUNG: &str = "Mischersteuerung";
    pub const RUECKLAUF_TEMP: &str = "RuecklaufTemp";

    pub const WARMWASSER_IST_TEMP: &str = "WarmwasserIstTemp";
    pub const WARMWASSER_SOLL_TEMP: &str = "WarmwasserSollTemp";
    pub const WARMWASSER_TEMP_OK: &str = "WarmwasserTempOK";
    pub const WW_TAGBETRIEB: &str = "WWTagbetrieb";
    pub const ZIRKULATION: &str = "Zirkulation";
    pub const WW_VORRANG: &str = "WWVorrang";

    pub const AUSSEN_TEMP: &str = "AussenTemp";
    pub const GEDAEMPFTE_AUSSEN_TEMP: &str = "GedaempfteAussenTemp";
    pub const RAUM_IST_TEMP: &str = "RaumIstTemp";
    pub const RAUM_SOLL_TEMP: &str = "RaumSollTemp";

    pub const BETRIEBSZEIT: &str = "Betriebszeit";
    pub const BRENNERSTARTS: &str = "Brennerstarts";
    pub const SYSTEMDRUCK: &str = "Systemdruck";
    pub const SERVICE_CODE: &str = "ServiceCode";
    pub const FEHLER_CODE: &str = "FehlerCode";
    pub const HEIZ_ZEIT: &str = "HeizZeit";
    pub const WARMWASSERBEREITUNGS_ZEIT: &str = "WarmwasserbereitungsZeit";
    pub const WARMWASSER_BEREITUNGEN: &str = "WarmwasserBereitungen";
}

const LATEST_NUMERIC: &str = r"
    SELECT sensor, value FROM numeric_readings AS r
    WHERE recorded_at = (
        SELECT MAX(recorded_at) FROM numeric_readings WHERE sensor = r.sensor
    )
";

const LATEST_BOOLEAN: &str = r"
    SELECT sensor, value FROM boolean_readings AS r
    WHERE recorded_at = (
        SELECT MAX(recorded_at) FROM boolean_readings WHERE sensor = r.sensor
    )
";

const LATEST_TEXT: &str = r"
    SELECT sensor, value FROM text_readings AS r
    WHERE recorded_at = (
        SELECT MAX(recorded_at) FROM text_readings WHERE sensor = r.sensor
    )
";

const COUNTER_DELTA: &str = r"
    SELECT MAX(value) - MIN(value) FROM numeric_readings
    WHERE sensor = ? AND recorded_at >= ? AND recorded_at < ?
";

/// `SQLite`-backed sensor reader.
pub struct SqliteSensorReader {
    pool: SqlitePool,
}

impl SqliteSensorReader {
    /// Create a new reader using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn latest_numeric(&self) -> Result<HashMap<String, f64>, StorageError> {
        let rows: Vec<(String, f64)> = sqlx::query_as(LATEST_NUMERIC)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().collect())
    }

    async fn latest_boolean(&self) -> Result<HashMap<String, bool>, StorageError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(LATEST_BOOLEAN)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(sensor, value)| (sensor, value != 0))
            .collect())
    }

    async fn latest_text(&self) -> Result<HashMap<String, String>, StorageError> {
        let rows: Vec<(String, String)> = sqlx::query_as(LATEST_TEXT)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().collect())
    }

    async fn counter_delta(
        &self,
        sensor: &str,
        start: &str,
        end: &str,
    ) -> Result<u64, StorageError> {
        let delta: Option<f64> = sqlx::query_scalar(COUNTER_DELTA)
            .bind(sensor)
            .bind(start)
            .bind(end)
            .fetch_one(&self.pool)
            .await?;
        Ok(to_count(delta.unwrap_or(0.0)))
    }
}

impl SensorReader for SqliteSensorReader {
    async fn current(&self) -> Result<SensorSnapshot, KesselblickError> {
        let numeric = self.latest_numeric().await?;
        let boolean = self.latest_boolean().await?;
        let text = self.latest_text().await?;

        let snapshot = SensorSnapshot {
            boiler: BoilerReadings {
                actual_temp: require(&numeric, keys::KESSEL_IST_TEMP)?,
                target_temp: require(&numeric, keys::KESSEL_SOLL_TEMP)?,
                pump: require(&boolean, keys::KESSEL_PUMPE)?,
                three_way_valve: require(&boolean, keys::DREI_WEGE_VENTIL)?,
                burner: require(&boolean, keys::BRENNER)?,
                hot_water_loading: require(&boolean, keys::WARMWASSER_BEREITUNG)?,
                flame: require(&boolean, keys::FLAMME)?,
                flame_current: require(&numeric, keys::FLAMMENSTROM)?,
                current_output: require(&numeric, keys::MOM_LEISTUNG)?,
                max_output: require(&numeric, keys::MAX_LEISTUNG)?,
                summer_mode: require(&boolean, keys::SOMMERBETRIEB)?,
            },
            hk1: HeatingCircuit {
                flow_target_temp: require(&numeric, keys::VORLAUF_HK1_SOLL_TEMP)?,
                flow_actual_temp: require(&numeric, keys::VORLAUF_HK1_IST_TEMP)?,
                party: require(&boolean, keys::HK1_PARTY)?,
                vacation: require(&boolean, keys::HK1_FERIEN)?,
                automatic: require(&boolean, keys::HK1_AUTOMATIK)?,
                day_mode: require(&boolean, keys::HK1_TAGBETRIEB)?,
                pump: require(&boolean, keys::HK1_PUMPE)?,
            },
            hk2: HeatingCircuit {
                flow_target_temp: require(&numeric, keys::VORLAUF_HK2_SOLL_TEMP)?,
                flow_actual_temp: require(&numeric, keys::VORLAUF_HK2_IST_TEMP)?,
                party: require(&boolean, keys::HK2_PARTY)?,
                vacation: require(&boolean, keys::HK2_FERIEN)?,
                automatic: require(&boolean, keys::HK2_AUTOMATIK)?,
                day_mode: require(&boolean, keys::HK2_TAGBETRIEB)?,
                pump: require(&boolean, keys::HK2_PUMPE)?,
            },
            mixer_position: require(&numeric, keys::MISCHERSTEUERUNG)?,
            return_temp: require(&numeric, keys::RUECKLAUF_TEMP)?,
            hot_water: HotWaterReadings {
                actual_temp: require(&numeric, keys::WARMWASSER_IST_TEMP)?,
                target_temp: require(&numeric, keys::WARMWASSER_SOLL_TEMP)?,
                temp_ok: require(&boolean, keys::WARMWASSER_TEMP_OK)?,
                day_mode: require(&boolean, keys::WW_TAGBETRIEB)?,
                circulation_pump: require(&boolean, keys::ZIRKULATION)?,
                priority: require(&boolean, keys::WW_VORRANG)?,
            },
            ambient: AmbientReadings {
                outdoor_temp: require(&numeric, keys::AUSSEN_TEMP)?,
                outdoor_temp_damped: require(&numeric, keys::GEDAEMPFTE_AUSSEN_TEMP)?,
                room_actual_temp: require(&numeric, keys::RAUM_IST_TEMP)?,
                room_target_temp: require(&numeric, keys::RAUM_SOLL_TEMP)?,
            },
            totals: OperatingTotals {
                burner_runtime_secs: to_count(require(&numeric, keys::BETRIEBSZEIT)?),
                burner_starts: to_count(require(&numeric, keys::BRENNERSTARTS)?),
                system_pressure: require(&numeric, keys::SYSTEMDRUCK)?,
                service_code: require(&text, keys::SERVICE_CODE)?,
                error_code: require(&text, keys::FEHLER_CODE)?,
            },
        };

        Ok(snapshot)
    }

    async fn changes_for_day(&self, day_offset: u32) -> Result<DailyCounters, KesselblickError> {
        let (start, end) = day_window(day_offset);
        tracing::debug!(day_offset, %start, %end, "querying counter deltas");

        let counters = DailyCounters {
            burner_runtime_secs: self
                .counter_delta(keys::BETRIEBSZEIT, &start, &end)
                .await?,
            burner_starts: self
                .counter_delta(keys::BRENNERSTARTS, &start, &end)
                .await?,
            heating_runtime_secs: self
                .counter_delta(keys::HEIZ_ZEIT, &start, &end)
                .await?,
            hot_water_runtime_secs: self
                .counter_delta(keys::WARMWASSERBEREITUNGS_ZEIT, &start, &end)
                .await?,
            hot_water_cycles: self
                .counter_delta(keys::WARMWASSER_BEREITUNGEN, &start, &end)
                .await?,
        };

        Ok(counters)
    }
}

/// Look up a sensor in one of the latest-value maps.
fn require<T: Clone>(
    map: &HashMap<String, T>,
    sensor: &'static str,
) -> Result<T, MissingSensorError> {
    map.get(sensor)
        .cloned()
        .ok_or(MissingSensorError { sensor })
}

/// Counters are stored as REAL but are semantically non-negative integers.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(value: f64) -> u64 {
    value.max(0.0) as u64
}

/// UTC day window `[start, end)` as RFC 3339 strings, `day_offset` days
/// before today. RFC 3339 UTC timestamps compare lexicographically.
fn day_window(day_offset: u32) -> (String, String) {
    let day = Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(u64::from(day_offset)))
        .unwrap_or(NaiveDate::MIN);
    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = day
        .checked_add_days(Days::new(1))
        .unwrap_or(NaiveDate::MAX)
        .and_time(NaiveTime::MIN)
        .and_utc();
    (start.to_rfc3339(), end.to_rfc3339())
}
