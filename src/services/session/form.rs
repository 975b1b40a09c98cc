use crate::models::event::{
    CalendarDate, ClockTime, Event, EventId, EventTiming, ValidationError,
};
use crate::models::label;

/// Values entered in the create/edit event dialog.
///
/// Submission only borrows the form, so a rejected submission leaves the
/// entered values with the caller for correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    /// Id of the event being edited; `None` creates a new event.
    pub editing: Option<EventId>,
    pub title: String,
    pub label: String,
    pub day: CalendarDate,
    pub is_all_day: bool,
    /// "HH:MM", ignored for all-day events.
    pub start_time: String,
    pub end_time: String,
}

impl EventForm {
    /// Blank form for a new event on `day`.
    pub fn new(day: CalendarDate) -> Self {
        Self {
            editing: None,
            title: String::new(),
            label: label::default_label().name.to_string(),
            day,
            is_all_day: false,
            start_time: String::new(),
            end_time: String::new(),
        }
    }

    /// Form prefilled from an existing event.
    pub fn from_event(event: &Event) -> Self {
        let label = label::resolve_label_class(&event.label)
            .unwrap_or_else(label::default_label)
            .name
            .to_string();

        Self {
            editing: Some(event.id.clone()),
            title: event.title.clone(),
            label,
            day: event.calendar_date(),
            is_all_day: event.is_all_day(),
            start_time: event.start_time().map(|t| t.to_string()).unwrap_or_default(),
            end_time: event.end_time().map(|t| t.to_string()).unwrap_or_default(),
        }
    }

    pub fn timing(&self) -> Result<EventTiming, ValidationError> {
        if self.is_all_day {
            return Ok(EventTiming::AllDay);
        }

        let start = self.start_time.trim();
        let end = self.end_time.trim();
        if start.is_empty() || end.is_empty() {
            return Err(ValidationError::MissingTime);
        }

        let start: ClockTime = start.parse()?;
        let end: ClockTime = end.parse()?;
        EventTiming::timed(start, end)
    }

    /// Check every field; returns the timing the event would get.
    pub fn validate(&self) -> Result<EventTiming, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if label::find_label_class(&self.label).is_none() {
            return Err(ValidationError::UnknownLabel(self.label.clone()));
        }
        self.timing()
    }

    pub fn to_event(&self, id: EventId) -> Result<Event, ValidationError> {
        let timing = self.validate()?;
        Event::new(id, self.title.trim(), self.label.as_str(), self.day, timing)
    }
}
