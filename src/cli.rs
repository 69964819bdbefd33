use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::time::Duration;
use thiserror::Error;

/// A stopwatch for the terminal that reports elapsed time as short, friendly strings
/// such as "3.52s", "1h55m08s" or "exactly 7h".
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging to stderr (ignored when --log-filter or RUST_LOG is set).
    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Tracing filter directive, e.g. "startwatch=trace".
    #[arg(long, global = true, env = "RUST_LOG", value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Format of diagnostic log lines written to stderr.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Emit reports as JSON objects instead of plain text.
    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format an amount of time the way the stopwatch reports it.
    Format(FormatArgs),
    /// Run a program and report how long it took.
    Run(RunArgs),
    /// Show a live elapsed-time line until interrupted (SIGHUP restarts it).
    Watch(WatchArgs),
}

#[derive(ClapArgs, Debug)]
pub struct FormatArgs {
    /// Non-negative amount of time, decimals allowed (e.g. 999.9).
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Unit of VALUE.
    #[arg(short, long, value_enum, default_value_t = Unit::Ms)]
    pub unit: Unit,
}

#[derive(ClapArgs, Debug)]
pub struct RunArgs {
    /// Program to run.
    pub program: OsString,

    /// Arguments passed to the program.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

#[derive(ClapArgs, Debug)]
pub struct WatchArgs {
    /// How often the status line is refreshed (e.g. "500ms", "2s").
    #[arg(short, long, default_value = "1s", value_parser = humantime::parse_duration)]
    pub interval: Duration,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Unit accepted by `startwatch format`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    /// Nanoseconds
    Ns,
    /// Microseconds
    Us,
    /// Milliseconds
    Ms,
    /// Seconds
    S,
    /// Minutes
    M,
    /// Hours
    H,
    /// Days
    D,
}

impl Unit {
    /// Length of one unit in nanoseconds.
    pub fn nanos(self) -> u64 {
        match self {
            Unit::Ns => 1,
            Unit::Us => 1_000,
            Unit::Ms => 1_000_000,
            Unit::S => 1_000_000_000,
            Unit::M => 60 * 1_000_000_000,
            Unit::H => 3_600 * 1_000_000_000,
            Unit::D => 86_400 * 1_000_000_000,
        }
    }
}

/// Why a `format` value could not be turned into a duration.
#[derive(Debug, Error, PartialEq)]
pub enum DurationArgError {
    #[error("duration must not be negative (got {0})")]
    Negative(f64),
    #[error("duration must be a finite number (got {0})")]
    NotFinite(f64),
    #[error("duration of {0} {1:?} is too large")]
    Overflow(f64, Unit),
}

/// Converts `value` units into a `Duration`, rounded to the nearest nanosecond.
pub fn to_duration(value: f64, unit: Unit) -> Result<Duration, DurationArgError> {
    if !value.is_finite() {
        return Err(DurationArgError::NotFinite(value));
    }
    if value < 0.0 {
        return Err(DurationArgError::Negative(value));
    }
    let nanos = (value * unit.nanos() as f64).round();
    if nanos >= u64::MAX as f64 {
        return Err(DurationArgError::Overflow(value, unit));
    }
    Ok(Duration::from_nanos(nanos as u64))
}

impl FormatArgs {
    pub fn duration(&self) -> Result<Duration, DurationArgError> {
        to_duration(self.value, self.unit)
    }
}

/// Parses command line arguments using clap.
pub fn parse_args() -> Args {
    Args::parse()
}
