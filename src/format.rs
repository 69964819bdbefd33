// Duration formatting: turns a raw elapsed `Duration` into a compact,
// human-friendly string such as "950ns", "3.52s", "1h55m08s" or "exactly 7h".


use crate::util::group_thousands;
use std::fmt;
use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_CENTI: u32 = 10_000_000;

/// A duration split into calendar-free components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    /// Whole days.
    pub days: u64,
    /// Hours within the day, 0-23.
    pub hours: u64,
    /// Minutes within the hour, 0-59.
    pub minutes: u64,
    /// Seconds within the minute, 0-59.
    pub seconds: u64,
    /// Sub-second remainder in nanoseconds.
    pub subsec_nanos: u32,
}

impl DurationParts {
    /// Hour count with the days folded in (`days * 24 + hours`).
    #[must_use]
    pub fn total_hours(&self) -> u64 {
        self.days * 24 + self.hours
    }
}

/// Splits `duration` into days, hours, minutes, seconds and the sub-second remainder.
#[must_use]
pub fn decompose(duration: Duration) -> DurationParts {
    let secs = duration.as_secs();
    DurationParts {
        days: secs / SECS_PER_DAY,
        hours: secs % SECS_PER_DAY / SECS_PER_HOUR,
        minutes: secs % SECS_PER_HOUR / SECS_PER_MINUTE,
        seconds: secs % SECS_PER_MINUTE,
        subsec_nanos: duration.subsec_nanos(),
    }
}

/// `Display` adapter that renders a duration in the friendly format.
///
/// ```
/// use startwatch::FriendlyDuration;
/// use std::time::Duration;
///
/// let status = format!("finished in {}", FriendlyDuration(Duration::from_secs(6548)));
/// assert_eq!(status, "finished in 1h49m08s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FriendlyDuration(pub Duration);

impl From<Duration> for FriendlyDuration {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl fmt::Display for FriendlyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duration = self.0;

        // Regime selection looks at the raw value; only the printed millis are rounded.
        if duration < Duration::from_secs(1) {
            let nanos = duration.as_nanos();
            return if nanos < NANOS_PER_MILLI {
                write!(f, "{}ns", group_thousands(nanos))
            } else {
                // Rounds half up; at most 1000, so never grouped.
                let millis = (nanos + NANOS_PER_MILLI / 2) / NANOS_PER_MILLI;
                write!(f, "{millis}ms")
            };
        }

        let parts = decompose(duration);
        let hours = parts.total_hours();
        let has_hours = hours > 0;
        let has_minutes = parts.minutes > 0;
        let has_seconds = parts.seconds > 0;

        // Checked on the whole-second field alone, whatever the higher units are.
        if !has_seconds {
            f.write_str("exactly ")?;
        }

        if has_hours {
            write!(f, "{}h", group_thousands(u128::from(hours)))?;
        }

        match (has_hours, has_minutes) {
            (true, true) => write!(f, "{:02}m", parts.minutes)?,
            (false, true) => write!(f, "{}m", parts.minutes)?,
            _ => {}
        }

        // The seconds cases key on the hour-of-day field, not the folded count.
        match (parts.hours > 0, has_minutes, has_seconds) {
            (false, false, true) => write!(
                f,
                "{}.{:02}s",
                parts.seconds,
                parts.subsec_nanos / NANOS_PER_CENTI
            )?,
            (true, _, true) | (_, true, true) => write!(f, "{:02}s", parts.seconds)?,
            _ => {}
        }

        Ok(())
    }
}

/// Formats `duration` as a short, friendly string.
///
/// Below one millisecond the value is printed in nanoseconds, below one second in
/// rounded milliseconds. From one second up the output is built from hours (days
/// folded in), minutes and seconds, with an `"exactly "` prefix when the seconds
/// field is zero.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    FriendlyDuration(duration).to_string()
}
