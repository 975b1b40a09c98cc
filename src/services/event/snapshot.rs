//! Wire format of the persisted event list.
//!
//! The whole list is stored as one JSON array under [`STORAGE_KEY`]:
//!
//! ```json
//! [{"id":1709625600000,"title":"Standup","label":"Blue Event","day":1709596800000,
//!   "startTime":"09:00","endTime":"09:15","isAllDay":false}]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::event::{ClockTime, Event, EventId, EventTiming, ValidationError};
use crate::models::label;
use crate::services::storage::KeyValueStore;
use crate::utils::date;

/// Storage key holding the serialized event list.
pub const STORAGE_KEY: &str = "savedEvents";

/// One element of the persisted array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEvent {
    pub id: EventId,
    pub title: String,
    pub label: String,
    /// Epoch milliseconds.
    pub day: i64,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub is_all_day: bool,
}

/// Why a stored element could not become an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotEntryError {
    #[error("day {0} is outside the supported date range")]
    DayOutOfRange(i64),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl From<&Event> for StoredEvent {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            label: event.label.clone(),
            day: date::to_epoch_millis(event.day),
            start_time: event.start_time().map(|t| t.to_string()),
            end_time: event.end_time().map(|t| t.to_string()),
            is_all_day: event.is_all_day(),
        }
    }
}

impl TryFrom<StoredEvent> for Event {
    type Error = SnapshotEntryError;

    fn try_from(stored: StoredEvent) -> Result<Self, Self::Error> {
        let day = date::from_epoch_millis(stored.day)
            .ok_or(SnapshotEntryError::DayOutOfRange(stored.day))?;

        // All-day entries ignore any leftover times.
        let timing = if stored.is_all_day {
            EventTiming::AllDay
        } else {
            match (stored.start_time.as_deref(), stored.end_time.as_deref()) {
                (Some(start), Some(end)) => {
                    let start: ClockTime = start.parse()?;
                    let end: ClockTime = end.parse()?;
                    EventTiming::timed(start, end)?
                }
                _ => return Err(ValidationError::MissingTime.into()),
            }
        };

        // Older snapshots stored the palette color instead of the name.
        let label = match label::resolve_label_class(&stored.label) {
            Some(class) => class.name.to_string(),
            None => stored.label,
        };

        let event = Event {
            id: stored.id,
            title: stored.title,
            label,
            day,
            timing,
        };
        event.validate()?;
        Ok(event)
    }
}

/// Serialize the full list.
pub fn encode_snapshot(events: &[Event]) -> Result<String> {
    let stored: Vec<StoredEvent> = events.iter().map(StoredEvent::from).collect();
    serde_json::to_string(&stored).context("failed to serialize events")
}

/// Parse a snapshot, skipping elements that are malformed or break the
/// event invariants.
///
/// Fails only when the text is not a JSON array.
pub fn decode_snapshot(json: &str) -> Result<Vec<Event>> {
    let elements: Vec<serde_json::Value> =
        serde_json::from_str(json).context("failed to deserialize saved events")?;

    let events = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match decode_entry(element) {
            Ok(event) => Some(event),
            Err(err) => {
                log::warn!("Skipping saved event #{}: {:#}", index, err);
                None
            }
        })
        .collect();

    Ok(events)
}

fn decode_entry(element: serde_json::Value) -> Result<Event> {
    let stored: StoredEvent =
        serde_json::from_value(element).context("malformed event entry")?;
    let id = stored.id.clone();
    Event::try_from(stored).with_context(|| format!("invalid event {}", id))
}

/// Read the saved events; a missing or unreadable snapshot yields an empty list.
pub fn load_events<S: KeyValueStore + ?Sized>(storage: &S) -> Vec<Event> {
    let json = match storage.get(STORAGE_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => {
            log::info!("No saved events found; starting empty");
            return Vec::new();
        }
        Err(err) => {
            log::warn!("Failed to read saved events: {err:#}");
            return Vec::new();
        }
    };

    match decode_snapshot(&json) {
        Ok(events) => {
            log::info!("Loaded {} saved events", events.len());
            events
        }
        Err(err) => {
            log::warn!("Ignoring unparsable saved events: {err:#}");
            Vec::new()
        }
    }
}

/// Overwrite the snapshot with `events`.
pub fn save_events<S: KeyValueStore + ?Sized>(storage: &mut S, events: &[Event]) -> Result<()> {
    let json = encode_snapshot(events)?;
    storage
        .set(STORAGE_KEY, &json)
        .with_context(|| format!("failed to write {}", STORAGE_KEY))
}
