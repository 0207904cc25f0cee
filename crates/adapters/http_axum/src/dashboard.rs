//! Server-side rendered HTML status page (no JavaScript).

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use kesselblick_app::ports::SensorReader;
use kesselblick_domain::report::Section;
use kesselblick_domain::time;

use crate::error::ApiError;
use crate::state::AppState;

/// Reload interval of the status page in seconds.
const REFRESH_SECONDS: u32 = 30;

/// Status page template.
#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusTemplate {
    refresh_seconds: u32,
    generated_at: String,
    sections: Vec<Section>,
}

impl IntoResponse for StatusTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Query parameters of the status page.
#[derive(Deserialize)]
pub struct StatusQuery {
    /// Day offset for the daily-activity section (`0` = today).
    #[serde(default)]
    pub day: u32,
}

/// `GET /` — the status page.
pub async fn status<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<StatusQuery>,
) -> Result<StatusTemplate, ApiError>
where
    R: SensorReader + Send + Sync + 'static,
{
    let report = state.status_service.status_report(query.day).await?;

    Ok(StatusTemplate {
        refresh_seconds: REFRESH_SECONDS,
        generated_at: time::format_timestamp(report.generated_at),
        sections: report.sections,
    })
}
