//! Common helper functions for tests and benchmarks.
//!
//! The builders mirror the usual "days, hours, minutes, seconds, millis"
//! constructor shape so fixtures read like the durations they describe.
use std::time::Duration;

// --- Constants ---
pub const SECOND: Duration = Duration::from_secs(1);
pub const MINUTE: Duration = Duration::from_secs(60);
pub const HOUR: Duration = Duration::from_secs(3_600);
pub const DAY: Duration = Duration::from_secs(86_400);

// --- Duration Builders ---

/// Hours, minutes and seconds.
pub fn hms(hours: u64, minutes: u64, seconds: u64) -> Duration {
    dhms(0, hours, minutes, seconds)
}

/// Days, hours, minutes and seconds.
pub fn dhms(days: u64, hours: u64, minutes: u64, seconds: u64) -> Duration {
    dhms_ms(days, hours, minutes, seconds, 0)
}

/// Days, hours, minutes, seconds and milliseconds.
pub fn dhms_ms(days: u64, hours: u64, minutes: u64, seconds: u64, millis: u64) -> Duration {
    let secs = days * DAY.as_secs() + hours * HOUR.as_secs() + minutes * MINUTE.as_secs() + seconds * SECOND.as_secs();
    Duration::from_secs(secs) + Duration::from_millis(millis)
}

/// Fractional milliseconds, rounded to the nearest nanosecond (`ms(999.9)`).
pub fn ms(millis: f64) -> Duration {
    Duration::from_nanos((millis * 1_000_000.0).round() as u64)
}
