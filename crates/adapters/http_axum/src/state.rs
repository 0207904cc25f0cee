//! Shared application state for axum handlers.

use std::sync::Arc;

use kesselblick_app::ports::SensorReader;
use kesselblick_app::services::StatusService;

/// Application state shared across all axum handlers.
///
/// Generic over the sensor reader to avoid dynamic dispatch. `Clone` is
/// implemented manually so the reader itself does not need to be `Clone` —
/// only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Status use-case service backing every endpoint.
    pub status_service: Arc<StatusService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            status_service: Arc::clone(&self.status_service),
        }
    }
}

impl<R> AppState<R>
where
    R: SensorReader + Send + Sync + 'static,
{
    /// Create a new application state from the status service.
    pub fn new(status_service: StatusService<R>) -> Self {
        Self {
            status_service: Arc::new(status_service),
        }
    }
}
