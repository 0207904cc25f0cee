//! openHAB export — fixed `Name=value` lines polled by the automation system.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use kesselblick_app::ports::SensorReader;
use kesselblick_domain::readings::SensorSnapshot;

use crate::error::ApiError;
use crate::state::AppState;

/// Plain-text export body.
pub struct ExportResponse(String);

impl IntoResponse for ExportResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0,
        )
            .into_response()
    }
}

/// `GET /openhab` — the nine export items in fixed order.
pub async fn export<R>(State(state): State<AppState<R>>) -> Result<ExportResponse, ApiError>
where
    R: SensorReader + Send + Sync + 'static,
{
    let snapshot = state.status_service.current_snapshot().await?;
    Ok(ExportResponse(render_items(&snapshot)))
}

fn open_closed(on: bool) -> &'static str {
    if on { "OPEN" } else { "CLOSED" }
}

/// Render the export body. Line order and names are the contract with the
/// openHAB item configuration — do not reorder.
#[must_use]
pub fn render_items(snapshot: &SensorSnapshot) -> String {
    let lines = [
        format!("RaumIstTemp={:.1}", snapshot.ambient.room_actual_temp),
        format!("RaumSollTemp={:.1}", snapshot.ambient.room_target_temp),
        format!("AussenTemp={:.1}", snapshot.ambient.outdoor_temp),
        format!("SystemDruck={:.2}", snapshot.totals.system_pressure),
        format!("ServiceCode={}", snapshot.totals.service_code),
        format!("FehlerCode={}", snapshot.totals.error_code),
        format!("WarmwasserIstTemp={:.1}", snapshot.hot_water.actual_temp),
        format!(
            "WarmwasserBereitung={}",
            open_closed(snapshot.boiler.hot_water_loading)
        ),
        format!("Flamme={}", open_closed(snapshot.boiler.flame)),
    ];
    let mut body = lines.join("\n");
    body.push('\n');
    body
}
