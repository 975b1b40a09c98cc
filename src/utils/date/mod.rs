// Date utility functions
// Local wall-clock helpers shared by models and services

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};

use crate::models::event::ClockTime;

pub fn is_same_day(moment: DateTime<Local>, date: NaiveDate) -> bool {
    moment.date_naive() == date
}

/// First local instant of `date`.
///
/// Where midnight does not exist (DST gap) the first valid hour is used.
pub fn start_of_day(date: NaiveDate) -> DateTime<Local> {
    (0..24)
        .filter_map(|hour| date.and_hms_opt(hour, 0, 0))
        .find_map(|naive| Local.from_local_datetime(&naive).earliest())
        .unwrap_or_else(|| Local.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

pub fn to_epoch_millis(moment: DateTime<Local>) -> i64 {
    moment.timestamp_millis()
}

/// `None` when `millis` lies outside chrono's representable range.
pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Local>> {
    match Local.timestamp_millis_opt(millis) {
        LocalResult::Single(moment) => Some(moment),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

/// Day-cell time text, e.g. `9:00 AM`.
pub fn format_12h(time: ClockTime) -> String {
    time.to_12h()
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
