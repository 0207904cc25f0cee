//! # kesselblick-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered HTML status page** (`GET /`) — pure
//!   HTML with `<meta http-equiv="refresh">` for the 30-second auto-reload,
//!   no JavaScript
//! - Serve the **openHAB export** (`GET /openhab`) — the fixed `Name=value`
//!   lines an external automation system polls
//! - Serve a **JSON API** (`GET /api/status`) for programmatic access
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `kesselblick-app` (for the port trait and service) and
//! `kesselblick-domain` (for the types rendered into responses). Never leaks
//! axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod openhab;
pub mod router;
pub mod state;
