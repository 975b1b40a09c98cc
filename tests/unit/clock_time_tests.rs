// Parameterized tests for ClockTime parsing and 12-hour formatting

use month_planner::models::event::{ClockTime, ValidationError};
use month_planner::utils::date::format_12h;
use test_case::test_case;

#[test_case("00:00", "12:00 AM" ; "midnight")]
#[test_case("00:30", "12:30 AM" ; "half past midnight")]
#[test_case("9:00", "9:00 AM" ; "single digit hour")]
#[test_case("09:05", "9:05 AM" ; "padded hour")]
#[test_case("11:59", "11:59 AM" ; "just before noon")]
#[test_case("12:00", "12:00 PM" ; "noon")]
#[test_case("13:15", "1:15 PM" ; "afternoon")]
#[test_case("23:59", "11:59 PM" ; "end of day")]
fn test_twelve_hour_format(input: &str, expected: &str) {
    let time: ClockTime = input.parse().unwrap();
    assert_eq!(format_12h(time), expected);
}

#[test_case("9:00", "09:00" ; "pads hour")]
#[test_case("18:45", "18:45" ; "unchanged")]
fn test_display_is_zero_padded(input: &str, expected: &str) {
    let time: ClockTime = input.parse().unwrap();
    assert_eq!(time.to_string(), expected);
}

#[test_case("" ; "empty")]
#[test_case("24:00" ; "hour out of range")]
#[test_case("12:60" ; "minute out of range")]
#[test_case("12:5" ; "single digit minute")]
#[test_case("12:00:00" ; "seconds")]
#[test_case("noon" ; "words")]
#[test_case("123:00" ; "three digit hour")]
fn test_rejects_malformed(input: &str) {
    assert_eq!(
        input.parse::<ClockTime>(),
        Err(ValidationError::InvalidTime(input.to_string()))
    );
}

#[test_case("08:59", "09:00" ; "minute boundary")]
#[test_case("09:59", "10:00" ; "hour boundary")]
#[test_case("9:30", "10:00" ; "mixed widths")]
fn test_ordering_is_chronological(earlier: &str, later: &str) {
    let earlier: ClockTime = earlier.parse().unwrap();
    let later: ClockTime = later.parse().unwrap();
    assert!(earlier < later);
}
