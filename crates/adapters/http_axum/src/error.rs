//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use kesselblick_domain::error::KesselblickError;

/// JSON error body returned on failure.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`KesselblickError`] to an HTTP response with appropriate status.
pub struct ApiError(KesselblickError);

impl From<KesselblickError> for ApiError {
    fn from(err: KesselblickError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            // The collector stopped writing a sensor we need — name it so the
            // operator can see what broke, but it is still a server fault.
            KesselblickError::MissingSensor(err) => {
                tracing::warn!(error = %err, "sensor data incomplete");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            KesselblickError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
