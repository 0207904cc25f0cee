//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`KesselblickError`] via `#[from]` / explicit boxing. The renderer itself
//! has no fallback path: a sensor missing from the store is an
//! external-data-contract violation and is surfaced by the adapter that
//! noticed it.

/// Top-level error shared between the application layer and the adapters.
#[derive(Debug, thiserror::Error)]
pub enum KesselblickError {
    /// The data source is missing a reading the dashboard requires.
    #[error("missing sensor reading")]
    MissingSensor(#[from] MissingSensorError),

    /// The underlying store failed; details carried by the adapter error.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A required sensor has no stored reading.
#[derive(Debug, thiserror::Error)]
#[error("no reading stored for sensor `{sensor}`")]
pub struct MissingSensorError {
    /// The storage key of the missing sensor (e.g. `KesselIstTemp`).
    pub sensor: &'static str,
}

impl MissingSensorError {
    /// Shorthand constructor used by adapters.
    #[must_use]
    pub fn new(sensor: &'static str) -> Self {
        Self { sensor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_missing_sensor_in_message() {
        let err = MissingSensorError::new("KesselIstTemp");
        assert_eq!(
            err.to_string(),
            "no reading stored for sensor `KesselIstTemp`"
        );
    }

    #[test]
    fn should_convert_missing_sensor_into_top_level_error() {
        let err: KesselblickError = MissingSensorError::new("Flamme").into();
        assert!(matches!(err, KesselblickError::MissingSensor(_)));
    }
}
