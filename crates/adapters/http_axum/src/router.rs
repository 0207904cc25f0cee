//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use kesselblick_app::ports::SensorReader;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Wires the status page, the openHAB export, and the JSON API. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: SensorReader + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(crate::dashboard::status::<R>))
        .route("/openhab", get(crate::openhab::export::<R>))
        .route("/api/status", get(crate::api::status::<R>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StatusResponse;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use kesselblick_adapter_virtual::VirtualSensorReader;
    use kesselblick_app::services::StatusService;
    use tower::ServiceExt;

    fn app() -> Router {
        build(AppState::new(StatusService::new(VirtualSensorReader)))
    }

    async fn body_string(response: axum::response::Response) -> String {
        String::from_utf8(
            response
                .into_body()
                .collect()
                .await
                .unwrap()
                .to_bytes()
                .to_vec(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_render_status_page_with_all_sections() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        for title in [
            "Heizung",
            "Heizkreise",
            "Warmwasser",
            "Sonstige Temperaturen",
            "Heutige Aktivität",
            "Betriebsstatus",
        ] {
            assert!(body.contains(title), "missing section {title}");
        }
        assert!(body.contains("Momentaner Status"));
        // Demo snapshot has the flame on.
        assert!(body.contains("- an, 12.4 µA -"));
        assert!(body.contains(r#"class="value red""#));
    }

    #[tokio::test]
    async fn should_accept_day_offset_on_status_page() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/?day=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_export_as_plain_text() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/openhab")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(content_type, "text/plain; charset=utf-8");

        let body = body_string(response).await;
        assert!(body.starts_with("RaumIstTemp="));
        assert!(body.contains("Flamme=OPEN\n"));
        assert_eq!(body.lines().count(), 9);
    }

    #[tokio::test]
    async fn should_serve_json_status() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        let parsed: StatusResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.sensors, VirtualSensorReader::snapshot());
        assert_eq!(parsed.counters, VirtualSensorReader::counters());
    }
}
