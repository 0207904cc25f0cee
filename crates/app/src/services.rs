//! Application services — use-case entry points for the HTTP adapter.

pub mod status_service;

pub use status_service::{StatusReport, StatusService};
