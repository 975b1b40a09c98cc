// Event module
// Day-scoped calendar event with optional start/end clock times

use chrono::{DateTime, Local, NaiveDate};
use thiserror::Error;

use crate::models::label;
use crate::utils::date;

mod clock;
mod id;

pub use clock::ClockTime;
pub use id::EventId;

/// A calendar day, compared and ordered by date only.
pub type CalendarDate = NaiveDate;

/// Rejections raised while validating user-entered event data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event day is required")]
    MissingDay,
    #[error("Unknown label '{0}'")]
    UnknownLabel(String),
    #[error("Both start time and end time are required for non-all-day events.")]
    MissingTime,
    #[error("Invalid time '{0}' (expected HH:MM)")]
    InvalidTime(String),
    #[error("Start time must be before end time.")]
    StartNotBeforeEnd,
}

/// When during its day an event happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTiming {
    AllDay,
    Timed { start: ClockTime, end: ClockTime },
}

impl EventTiming {
    /// Timed slot; `start` must be strictly before `end`.
    pub fn timed(start: ClockTime, end: ClockTime) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::StartNotBeforeEnd);
        }
        Ok(Self::Timed { start, end })
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    pub fn start_time(&self) -> Option<ClockTime> {
        match self {
            Self::AllDay => None,
            Self::Timed { start, .. } => Some(*start),
        }
    }

    pub fn end_time(&self) -> Option<ClockTime> {
        match self {
            Self::AllDay => None,
            Self::Timed { end, .. } => Some(*end),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::AllDay => Ok(()),
            Self::Timed { start, end } if start < end => Ok(()),
            Self::Timed { .. } => Err(ValidationError::StartNotBeforeEnd),
        }
    }
}

/// Calendar event anchored to a single day.
///
/// Events are never edited in place by the store: every change is a whole
/// replacement carrying the same `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub label: String,
    /// Point in time whose local calendar date is the event's day.
    pub day: DateTime<Local>,
    pub timing: EventTiming,
}

impl Event {
    /// Create an event, validating the title and the timing.
    ///
    /// # Examples
    /// ```
    /// use month_planner::models::event::{ClockTime, Event, EventId, EventTiming};
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    /// let timing = EventTiming::timed(
    ///     ClockTime::new(9, 0).unwrap(),
    ///     ClockTime::new(9, 15).unwrap(),
    /// )
    /// .unwrap();
    /// let event = Event::new(EventId::Number(1), "Standup", "Blue Event", day, timing).unwrap();
    /// assert_eq!(event.calendar_date(), day);
    /// ```
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        label: impl Into<String>,
        day: CalendarDate,
        timing: EventTiming,
    ) -> Result<Self, ValidationError> {
        let event = Self {
            id,
            title: title.into(),
            label: label.into(),
            day: date::start_of_day(day),
            timing,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events field by field
    pub fn builder(id: impl Into<EventId>) -> EventBuilder {
        EventBuilder::new(id.into())
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        self.timing.validate()
    }

    /// The local calendar date this event belongs to.
    pub fn calendar_date(&self) -> CalendarDate {
        self.day.date_naive()
    }

    pub fn occurs_on(&self, day: CalendarDate) -> bool {
        date::is_same_day(self.day, day)
    }

    pub fn is_all_day(&self) -> bool {
        self.timing.is_all_day()
    }

    pub fn start_time(&self) -> Option<ClockTime> {
        self.timing.start_time()
    }

    pub fn end_time(&self) -> Option<ClockTime> {
        self.timing.end_time()
    }

    /// `"<title> at <h:mm AM/PM>"` for timed events.
    pub fn timed_line(&self) -> Option<String> {
        self.start_time()
            .map(|start| format!("{} at {}", self.title, date::format_12h(start)))
    }

    /// Display color of this event's label.
    pub fn color(&self) -> &'static str {
        label::label_color(&self.label)
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: EventId,
    title: Option<String>,
    label: Option<String>,
    day: Option<CalendarDate>,
    timing: EventTiming,
}

impl EventBuilder {
    pub fn new(id: EventId) -> Self {
        Self {
            id,
            title: None,
            label: None,
            day: None,
            timing: EventTiming::AllDay,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Label name; defaults to the first palette entry.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn day(mut self, day: CalendarDate) -> Self {
        self.day = Some(day);
        self
    }

    pub fn all_day(mut self) -> Self {
        self.timing = EventTiming::AllDay;
        self
    }

    pub fn timing(mut self, timing: EventTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn build(self) -> Result<Event, ValidationError> {
        let title = self.title.ok_or(ValidationError::EmptyTitle)?;
        let day = self.day.ok_or(ValidationError::MissingDay)?;
        let label = self
            .label
            .unwrap_or_else(|| label::default_label().name.to_string());

        Event::new(self.id, title, label, day, self.timing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_5() -> CalendarDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn time(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_event_success() {
        let timing = EventTiming::timed(time("09:00"), time("09:15")).unwrap();
        let event = Event::new(EventId::Number(1), "Standup", "Blue Event", march_5(), timing)
            .unwrap();

        assert_eq!(event.title, "Standup");
        assert_eq!(event.calendar_date(), march_5());
        assert!(!event.is_all_day());
        assert_eq!(event.start_time(), Some(time("09:00")));
        assert_eq!(event.end_time(), Some(time("09:15")));
    }

    #[test]
    fn test_new_event_empty_title() {
        let result = Event::new(EventId::Number(1), "  ", "Blue Event", march_5(), EventTiming::AllDay);
        assert_eq!(result.unwrap_err(), ValidationError::EmptyTitle);
    }

    #[test]
    fn test_timed_rejects_equal_and_reversed() {
        assert_eq!(
            EventTiming::timed(time("10:00"), time("10:00")),
            Err(ValidationError::StartNotBeforeEnd)
        );
        assert_eq!(
            EventTiming::timed(time("10:00"), time("09:00")),
            Err(ValidationError::StartNotBeforeEnd)
        );
    }

    #[test]
    fn test_validate_catches_hand_built_timing() {
        let mut event = Event::builder(EventId::Number(1)).title("Gym").day(march_5()).build().unwrap();
        event.timing = EventTiming::Timed {
            start: time("18:00"),
            end: time("17:00"),
        };
        assert_eq!(event.validate(), Err(ValidationError::StartNotBeforeEnd));
    }

    #[test]
    fn test_all_day_has_no_times() {
        let event = Event::builder(EventId::Number(1)).title("Holiday").day(march_5()).all_day().build().unwrap();
        assert!(event.is_all_day());
        assert!(event.start_time().is_none());
        assert!(event.end_time().is_none());
        assert!(event.timed_line().is_none());
    }

    #[test]
    fn test_builder_defaults_label() {
        let event = Event::builder(EventId::Number(1)).title("Holiday").day(march_5()).build().unwrap();
        assert_eq!(event.label, label::default_label().name);
    }

    #[test]
    fn test_builder_missing_fields() {
        assert_eq!(
            Event::builder(EventId::Number(1)).day(march_5()).build().unwrap_err(),
            ValidationError::EmptyTitle
        );
        assert_eq!(
            Event::builder(EventId::Number(1)).title("Gym").build().unwrap_err(),
            ValidationError::MissingDay
        );
    }

    #[test]
    fn test_timed_line() {
        let timing = EventTiming::timed(time("09:00"), time("09:15")).unwrap();
        let event = Event::builder(EventId::Number(1))
            .title("Standup")
            .day(march_5())
            .timing(timing)
            .build()
            .unwrap();
        assert_eq!(event.timed_line().as_deref(), Some("Standup at 9:00 AM"));
    }

    #[test]
    fn test_occurs_on_ignores_time_of_day() {
        let mut event = Event::builder(EventId::Number(1)).title("Late").day(march_5()).build().unwrap();
        event.day = event.day + chrono::Duration::hours(23);
        assert!(event.occurs_on(march_5()));
        assert!(!event.occurs_on(march_5().succ_opt().unwrap()));
    }

    #[test]
    fn test_color_follows_label() {
        let event = Event::builder(EventId::Number(1))
            .title("Gym")
            .label("Green Event")
            .day(march_5())
            .build()
            .unwrap();
        assert_eq!(event.color(), "hsl(150, 80%, 30%)");
    }
}
