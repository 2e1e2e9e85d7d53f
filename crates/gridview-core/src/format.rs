//! Display Formatting
//!
//! Pure helpers turning raw telemetry values into display strings:
//! - Lap times: seconds → "m:ss.mmm"
//! - Timestamps: ISO-8601 → "Mar 15, 2024, 02:00 PM"
//! - Positions: 1 → "1st", 22 → "22nd"

use chrono::{DateTime, Utc};

/// Placeholder for values that are missing
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a duration in seconds as "m:ss.mmm"
///
/// Every component is floored, never rounded, so 92.532 renders as
/// "1:32.531" due to float representation. Missing or zero input renders
/// "N/A".
pub fn format_time(seconds: Option<f64>) -> String {
    let t = match seconds {
        Some(t) if t != 0.0 && t.is_finite() => t,
        _ => return NOT_AVAILABLE.to_string(),
    };

    let minutes = (t / 60.0).floor();
    let secs = (t % 60.0).floor();
    let millis = ((t % 1.0) * 1000.0).floor();

    format!("{}:{:02}.{:03}", minutes as i64, secs as i64, millis as i64)
}

/// Format an ISO-8601 timestamp for display (UTC)
///
/// Returns "Invalid Date" when the input cannot be parsed.
pub fn format_date(date: &str) -> String {
    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => format_timestamp(parsed.with_timezone(&Utc)),
        Err(_) => "Invalid Date".to_string(),
    }
}

/// Format a typed timestamp for display (UTC)
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// English ordinal suffix for a number ("st", "nd", "rd", "th")
///
/// Zero has no suffix.
pub fn number_suffix(number: u32) -> &'static str {
    if number == 0 {
        return "";
    }

    let last_two = number % 100;
    if (11..=13).contains(&last_two) {
        return "th";
    }

    match number % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Format a position as an ordinal ("1st", "11th", "22nd")
pub fn format_ordinal(number: Option<u32>) -> String {
    match number {
        Some(n) if n != 0 => format!("{}{}", n, number_suffix(n)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Convert milliseconds to seconds
pub fn ms_to_seconds(ms: f64) -> f64 {
    ms / 1000.0
}

/// Convert seconds to milliseconds
pub fn seconds_to_ms(seconds: f64) -> f64 {
    seconds * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_floors_components() {
        assert_eq!(format_time(Some(92.532)), "1:32.531");
        assert_eq!(format_time(Some(61.5)), "1:01.500");
        assert_eq!(format_time(Some(59.25)), "0:59.250");
    }

    #[test]
    fn test_format_time_missing() {
        assert_eq!(format_time(None), "N/A");
        assert_eq!(format_time(Some(0.0)), "N/A");
        assert_eq!(format_time(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn test_suffix_teens() {
        for n in [11, 12, 13, 111, 112, 113] {
            assert_eq!(number_suffix(n), "th", "{}", n);
        }
        assert_eq!(number_suffix(0), "");
    }
}
