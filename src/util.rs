//! Utility functions shared across modules.

use std::time::Duration;

/// Renders an integer with a `,` between every group of three digits, counted
/// from the right (`2423` -> `"2,423"`).
pub fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a `std::time::Duration` into an exact, multi-unit string using `humantime`.
/// Used for log fields where the friendly form hides precision.
#[inline]
pub fn format_debug(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_from_the_right() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(2423), "2,423");
        assert_eq!(group_thousands(999_999), "999,999");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn debug_format_keeps_every_unit() {
        assert_eq!(format_debug(Duration::from_millis(1500)), "1s 500ms");
    }
}
