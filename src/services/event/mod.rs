//! Event store entry point.
//! Holds the canonical event list, applies create/update/delete actions and
//! writes the full snapshot back to storage after every change.

use chrono::Local;
use thiserror::Error;

use crate::models::event::{Event, EventId};
use crate::services::storage::KeyValueStore;

pub mod action;
pub mod snapshot;

pub use action::EventAction;

/// A snapshot write failed. The in-memory change it followed still stands.
#[derive(Debug, Error)]
#[error("failed to persist events: {0:#}")]
pub struct PersistenceWarning(anyhow::Error);

impl PersistenceWarning {
    pub fn cause(&self) -> &anyhow::Error {
        &self.0
    }
}

/// Result of dispatching one action.
#[derive(Debug)]
#[must_use]
pub struct DispatchOutcome {
    /// False for no-ops (unknown id on update/delete, duplicate id on create).
    pub changed: bool,
    pub warning: Option<PersistenceWarning>,
}

/// Ordered list of events backed by a key-value snapshot.
pub struct EventStore<S: KeyValueStore> {
    storage: S,
    events: Vec<Event>,
    last_issued_id: i64,
}

impl<S: KeyValueStore> EventStore<S> {
    /// Load the saved snapshot from `storage`; problems yield an empty store.
    pub fn load(storage: S) -> Self {
        let events = snapshot::load_events(&storage);
        let last_issued_id = events
            .iter()
            .filter_map(|event| event.id.as_number())
            .max()
            .unwrap_or(0);

        Self {
            storage,
            events,
            last_issued_id,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Fresh time-based id, strictly greater than any numeric id seen so far.
    pub fn next_id(&mut self) -> EventId {
        let now = Local::now().timestamp_millis();
        let id = now.max(self.last_issued_id.saturating_add(1));
        self.last_issued_id = id;
        EventId::Number(id)
    }

    /// Apply `action`, then persist the whole list if it changed.
    pub fn dispatch(&mut self, action: EventAction) -> DispatchOutcome {
        let name = action.name();
        let id = action.event_id().clone();

        if let EventAction::Create(event) = &action {
            if let Some(n) = event.id.as_number() {
                self.last_issued_id = self.last_issued_id.max(n);
            }
        }

        let changed = action::reduce(&mut self.events, action);
        if !changed {
            log::debug!("{} of event {} changed nothing", name, id);
            return DispatchOutcome {
                changed,
                warning: None,
            };
        }

        log::debug!("Applied {} of event {} ({} events)", name, id, self.events.len());
        DispatchOutcome {
            changed,
            warning: self.persist().err(),
        }
    }

    pub fn create(&mut self, event: Event) -> DispatchOutcome {
        self.dispatch(EventAction::Create(event))
    }

    pub fn update(&mut self, event: Event) -> DispatchOutcome {
        self.dispatch(EventAction::Update(event))
    }

    pub fn delete(&mut self, id: EventId) -> DispatchOutcome {
        self.dispatch(EventAction::Delete(id))
    }

    /// Write the full snapshot.
    pub fn persist(&mut self) -> Result<(), PersistenceWarning> {
        snapshot::save_events(&mut self.storage, &self.events).map_err(|err| {
            log::warn!("Failed to persist events: {err:#}");
            PersistenceWarning(err)
        })
    }
}
