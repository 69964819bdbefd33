// Module declarations for the library crate.

pub mod cli;
pub mod clock;
pub mod config;
pub mod format;
pub mod report;
pub mod telemetry;
pub mod timer;
pub mod util;

// Re-export the core API so callers can write `startwatch::format_duration`.
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use format::{format_duration, FriendlyDuration};
pub use timer::Timer;
