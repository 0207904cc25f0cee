//! # kesselblick-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** adapters must implement (driven/outbound):
//!   - [`ports::SensorReader`] — the two data-access operations the dashboard
//!     consumes: the current sensor snapshot and the per-day counters
//! - Define **driving/inbound ports** as use-case structs:
//!   - [`services::StatusService`] — fetch readings, build the status report
//! - Orchestrate domain objects without knowing *how* the readings are stored
//!
//! ## Dependency rule
//! Depends on `kesselblick-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
