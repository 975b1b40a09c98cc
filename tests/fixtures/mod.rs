// Test fixtures - reusable test data
// Dates, forms and sessions shared by the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use month_planner::models::settings::Settings;
use month_planner::services::event::EventStore;
use month_planner::services::session::{EventForm, Session};
use month_planner::services::storage::KeyValueStore;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Tuesday, March 5, 2024
    pub fn march_5_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample event forms
pub mod forms {
    use super::*;

    pub fn all_day(title: &str, label: &str, day: NaiveDate) -> EventForm {
        EventForm {
            title: title.to_string(),
            label: label.to_string(),
            is_all_day: true,
            ..EventForm::new(day)
        }
    }

    pub fn timed(title: &str, day: NaiveDate, start: &str, end: &str) -> EventForm {
        EventForm {
            title: title.to_string(),
            label: "Blue Event".to_string(),
            is_all_day: false,
            start_time: start.to_string(),
            end_time: end.to_string(),
            ..EventForm::new(day)
        }
    }
}

/// Session over `storage` with default settings, "today" fixed to March 5, 2024.
pub fn open_session<S: KeyValueStore>(storage: S) -> Session<S> {
    Session::new(
        EventStore::load(storage),
        &Settings::default(),
        dates::march_5_2024(),
    )
    .expect("session should open")
}
