use chrono::{TimeZone, Utc};
use gridview_core::format::{
    format_date, format_ordinal, format_time, format_timestamp, ms_to_seconds, number_suffix,
    seconds_to_ms,
};

#[test]
fn test_ordinal_first() {
    assert_eq!(format_ordinal(Some(1)), "1st");
    assert_eq!(format_ordinal(Some(2)), "2nd");
    assert_eq!(format_ordinal(Some(3)), "3rd");
    assert_eq!(format_ordinal(Some(4)), "4th");
}

#[test]
fn test_ordinal_teens_use_th() {
    assert_eq!(format_ordinal(Some(11)), "11th");
    assert_eq!(format_ordinal(Some(12)), "12th");
    assert_eq!(format_ordinal(Some(13)), "13th");
}

#[test]
fn test_ordinal_twenties() {
    assert_eq!(format_ordinal(Some(21)), "21st");
    assert_eq!(format_ordinal(Some(22)), "22nd");
    assert_eq!(format_ordinal(Some(23)), "23rd");
}

#[test]
fn test_ordinal_missing() {
    assert_eq!(format_ordinal(None), "N/A");
    assert_eq!(format_ordinal(Some(0)), "N/A");
}

#[test]
fn test_suffix_hundreds() {
    assert_eq!(number_suffix(101), "st");
    assert_eq!(number_suffix(111), "th");
    assert_eq!(number_suffix(122), "nd");
}

#[test]
fn test_time_fastest_lap() {
    // 92.532 % 1 is just below 0.532, and milliseconds are floored
    assert_eq!(format_time(Some(92.532)), "1:32.531");
}

#[test]
fn test_time_pads_seconds_and_millis() {
    assert_eq!(format_time(Some(65.007)), "1:05.007");
    assert_eq!(format_time(Some(120.0)), "2:00.000");
    assert_eq!(format_time(Some(0.5)), "0:00.500");
}

#[test]
fn test_time_missing() {
    assert_eq!(format_time(None), "N/A");
}

#[test]
fn test_date_rendering() {
    assert_eq!(format_date("2024-03-15T14:00:00Z"), "Mar 15, 2024, 02:00 PM");
    assert_eq!(format_date("2024-03-15T09:05:30.250+00:00"), "Mar 15, 2024, 09:05 AM");
}

#[test]
fn test_date_offset_normalized_to_utc() {
    assert_eq!(format_date("2024-03-15T16:00:00+02:00"), "Mar 15, 2024, 02:00 PM");
}

#[test]
fn test_date_invalid() {
    assert_eq!(format_date("not a date"), "Invalid Date");
}

#[test]
fn test_timestamp_rendering() {
    let ts = Utc.with_ymd_and_hms(2024, 12, 1, 0, 30, 0).unwrap();
    assert_eq!(format_timestamp(ts), "Dec 1, 2024, 12:30 AM");
}

#[test]
fn test_ms_seconds_conversion() {
    assert_eq!(ms_to_seconds(92_532.0), 92.532);
    assert_eq!(seconds_to_ms(1.5), 1500.0);
}
