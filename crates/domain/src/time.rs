//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for reading times and the page header.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a timestamp the way the dashboard header shows it
/// (`30.08.2026 14:05:33`, German day-first order).
#[must_use]
pub fn format_timestamp(ts: Timestamp) -> String {
    ts.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// Format a runtime given in seconds as `Hh Mmin`.
///
/// Totals can exceed a day by orders of magnitude, so hours are not wrapped.
#[must_use]
pub fn format_runtime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    format!("{hours}h {minutes}min")
}
