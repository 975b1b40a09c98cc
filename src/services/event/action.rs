use crate::models::event::{Event, EventId};

/// Mutations accepted by the event store.
#[derive(Debug, Clone, PartialEq)]
pub enum EventAction {
    /// Append a new event; its id must not be in the store yet.
    Create(Event),
    /// Replace the event with the same id, keeping its position.
    Update(Event),
    Delete(EventId),
}

impl EventAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }

    pub fn event_id(&self) -> &EventId {
        match self {
            Self::Create(event) | Self::Update(event) => &event.id,
            Self::Delete(id) => id,
        }
    }
}

/// Apply `action` to `events`, returning whether the list changed.
///
/// Updating or deleting an unknown id is a silent no-op. A create that would
/// duplicate an id is ignored so ids stay unique.
pub fn reduce(events: &mut Vec<Event>, action: EventAction) -> bool {
    match action {
        EventAction::Create(event) => {
            if events.iter().any(|existing| existing.id == event.id) {
                log::warn!("Ignoring create for duplicate event id {}", event.id);
                return false;
            }
            events.push(event);
            true
        }
        EventAction::Update(event) => match events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                *slot = event;
                true
            }
            None => false,
        },
        EventAction::Delete(id) => {
            let before = events.len();
            events.retain(|event| event.id != id);
            events.len() != before
        }
    }
}
