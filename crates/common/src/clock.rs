//! Clock and time utilities for event timestamps.
//!
//! Cast timestamps are fractional seconds since the start of the recording.
//! Repeated float arithmetic on them drifts, so edits that shift many events
//! snap the result back to a fixed decimal precision.

use chrono::{DateTime, Utc};

/// Decimal places kept by [`round_millis`].
pub const MILLIS_DIGITS: i32 = 3;

/// Decimal places kept by [`round_micros`].
pub const MICROS_DIGITS: i32 = 6;

/// Round `secs` to `digits` decimal places, half away from zero.
pub fn round_to_digits(secs: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (secs * scale).round() / scale
}

/// Round to millisecond precision (half away from zero).
pub fn round_millis(secs: f64) -> f64 {
    round_to_digits(secs, MILLIS_DIGITS)
}

/// Round to microsecond precision (half away from zero).
pub fn round_micros(secs: f64) -> f64 {
    round_to_digits(secs, MICROS_DIGITS)
}

/// Convert a unix timestamp (seconds) to a UTC datetime.
pub fn unix_to_utc(timestamp: u64) -> Option<DateTime<Utc>> {
    let secs = i64::try_from(timestamp).ok()?;
    DateTime::<Utc>::from_timestamp(secs, 0)
}

/// Render a duration in seconds as `HH:MM:SS.mmm`.
pub fn format_duration(secs: f64) -> String {
    let total_ms = (secs.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}
