//! Reference behaviour table for `format_duration`.

use startwatch::format_duration;
use std::time::Duration;

use test_helpers::*;

fn check(duration: Duration, expected: &str) {
    assert_eq!(
        format_duration(duration),
        expected,
        "formatting {duration:?}"
    );
}

// --- Milliseconds ---

#[test]
fn milliseconds_one_digit() {
    check(ms(1.0), "1ms");
}

#[test]
fn milliseconds_two_digits() {
    check(ms(99.0), "99ms");
}

#[test]
fn milliseconds_three_digits() {
    check(ms(999.0), "999ms");
}

#[test]
fn milliseconds_small_fraction_rounds_down() {
    check(ms(999.3), "999ms");
}

#[test]
fn milliseconds_large_fraction_rounds_up_and_keeps_unit() {
    check(ms(999.9), "1000ms");
}

#[test]
fn sub_millisecond_is_nanoseconds() {
    check(Duration::from_nanos(950), "950ns");
    check(Duration::from_nanos(12_345), "12,345ns");
}

// --- Seconds ---

#[test]
fn seconds_only() {
    check(hms(0, 0, 3), "3.00s");
}

#[test]
fn seconds_with_500_millis() {
    check(dhms_ms(0, 0, 0, 3, 500), "3.50s");
}

#[test]
fn seconds_with_520_millis() {
    check(dhms_ms(0, 0, 0, 3, 520), "3.52s");
}

// --- Minutes ---

#[test]
fn minute_no_seconds() {
    check(hms(0, 1, 0), "exactly 1m");
}

#[test]
fn minute_30_seconds() {
    check(hms(0, 1, 30), "1m30s");
}

#[test]
fn minutes_two_digits_no_seconds() {
    check(hms(0, 59, 0), "exactly 59m");
}

#[test]
fn minutes_two_digits_with_seconds() {
    check(hms(0, 59, 30), "59m30s");
}

// --- Hours ---

#[test]
fn single_digit_hour_only() {
    check(hms(7, 0, 0), "exactly 7h");
}

#[test]
fn single_digit_hour_with_minutes() {
    check(hms(7, 20, 0), "exactly 7h20m");
}

#[test]
fn single_digit_hour_with_seconds() {
    check(hms(7, 0, 47), "7h47s");
}

#[test]
fn double_digit_hour_only() {
    check(hms(13, 0, 0), "exactly 13h");
}

#[test]
fn hour_with_single_digit_minutes_is_padded() {
    check(hms(1, 5, 0), "exactly 1h05m");
}

#[test]
fn hour_with_double_digit_minutes() {
    check(hms(1, 55, 0), "exactly 1h55m");
}

#[test]
fn hour_minutes_and_single_digit_seconds() {
    check(hms(1, 55, 8), "1h55m08s");
}

#[test]
fn double_digit_hour_padded_minutes_and_seconds() {
    check(hms(12, 5, 8), "12h05m08s");
}

#[test]
fn hours_past_a_day() {
    check(hms(36, 59, 59), "36h59m59s");
}

// --- Days ---

#[test]
fn days_only_fold_into_hours() {
    check(dhms(10, 0, 0, 0), "exactly 240h");
}

#[test]
fn days_with_hours_minutes_and_seconds() {
    check(dhms(4, 4, 59, 59), "100h59m59s");
}

#[test]
fn whole_day_with_fractional_seconds_keeps_fraction() {
    check(dhms_ms(1, 0, 0, 5, 520), "24h5.52s");
}

#[test]
fn triple_digit_days_group_hours() {
    check(dhms(100, 23, 59, 59), "2,423h59m59s");
}
