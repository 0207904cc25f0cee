//! JSON API handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use kesselblick_app::ports::SensorReader;
use kesselblick_domain::readings::{DailyCounters, SensorSnapshot};
use kesselblick_domain::time::{self, Timestamp};

use crate::error::ApiError;
use crate::state::AppState;

/// Response body of `GET /api/status`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Time the readings were fetched.
    pub generated_at: Timestamp,
    /// Current snapshot of every sensor.
    pub sensors: SensorSnapshot,
    /// Counter deltas for the requested day.
    pub counters: DailyCounters,
}

/// Query parameters of the status endpoint.
#[derive(Deserialize)]
pub struct StatusQuery {
    /// Day offset for the counters (`0` = today).
    #[serde(default)]
    pub day: u32,
}

/// `GET /api/status` — machine-readable snapshot plus daily counters.
pub async fn status<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<StatusResponse>, ApiError>
where
    R: SensorReader + Send + Sync + 'static,
{
    let sensors = state.status_service.current_snapshot().await?;
    let counters = state.status_service.daily_counters(query.day).await?;

    Ok(Json(StatusResponse {
        generated_at: time::now(),
        sensors,
        counters,
    }))
}
