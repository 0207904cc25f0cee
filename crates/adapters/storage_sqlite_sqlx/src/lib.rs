//! # kesselblick-adapter-storage-sqlite-sqlx
//!
//! `SQLite` read adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the [`SensorReader`](kesselblick_app::ports::SensorReader)
//!   port against the reading tables the EMS collector daemon writes
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations) so a fresh file
//!   matches the collector's schema
//! - Map stored rows into the typed domain snapshot
//!
//! ## Dependency rule
//! Depends on `kesselblick-app` (for the port trait) and
//! `kesselblick-domain` (for domain types). The `app` and `domain` crates
//! must never reference this adapter.

pub mod error;
pub mod pool;
pub mod reader;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use reader::SqliteSensorReader;
