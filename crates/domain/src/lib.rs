//! # kesselblick-domain
//!
//! Pure domain model for the kesselblick heating-status dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, display formatting
//! - Define the **sensor snapshot** (instantaneous boiler, heating-circuit,
//!   hot-water, and ambient readings) and the **daily counters**
//!   (per-day runtime and start-count deltas)
//! - Contain all derived logic: pump derivation from boiler pump and
//!   three-way valve, burner activity classification, circuit operating-mode
//!   priority (Party > Ferien > Auto/Manuell × Tag/Nacht)
//! - Build the **status report**: the pure mapping from readings to the
//!   labeled, colored rows the dashboard displays
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod readings;
pub mod report;
pub mod time;
