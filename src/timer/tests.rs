//! Unit tests for Timer on a manually driven clock.

use super::Timer;
use crate::clock::ManualClock;
use std::time::Duration;

fn manual_timer() -> (Timer<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (Timer::with_clock(clock.clone()), clock)
}

#[test]
fn starts_at_zero() {
    let (timer, _clock) = manual_timer();
    assert_eq!(timer.elapsed(), Duration::ZERO);
    assert_eq!(timer.elapsed_friendly(), "0ns");
}

#[test]
fn tracks_clock_advances() {
    let (timer, clock) = manual_timer();
    clock.advance(Duration::from_millis(3_520));
    assert_eq!(timer.elapsed(), Duration::from_millis(3_520));
    assert_eq!(timer.elapsed_friendly(), "3.52s");
}

#[test]
fn reading_does_not_reset() {
    let (timer, clock) = manual_timer();
    clock.advance(Duration::from_secs(90));
    assert_eq!(timer.elapsed_friendly(), "1m30s");
    assert_eq!(timer.elapsed_friendly(), "1m30s");
}

#[test]
fn restart_discards_prior_elapsed() {
    let (mut timer, clock) = manual_timer();
    clock.advance(Duration::from_secs(7 * 3_600));
    assert_eq!(timer.elapsed_friendly(), "exactly 7h");

    timer.restart();
    assert_eq!(timer.elapsed(), Duration::ZERO);

    clock.advance(Duration::from_micros(950));
    assert_eq!(timer.elapsed_friendly(), "950,000ns");
}

#[test]
fn display_renders_elapsed() {
    let (timer, clock) = manual_timer();
    clock.advance(Duration::from_secs(3_600 + 55 * 60 + 8));
    assert_eq!(timer.to_string(), "1h55m08s");
}

#[test]
fn borrowed_clock_works() {
    let clock = ManualClock::new();
    let timer = Timer::with_clock(&clock);
    clock.advance(Duration::from_millis(1));
    assert_eq!(timer.elapsed_friendly(), "1ms");
}
