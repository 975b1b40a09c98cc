//! Calendar session: the single state container owned by the front end.
//!
//! Every mutation runs the same synchronous pipeline before returning:
//! mutate the store, recompute the label list, recompute the filtered view.
//! Readers therefore never observe labels or filtered events that lag
//! behind the store.

use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};

use crate::models::event::{CalendarDate, Event, EventId, ValidationError};
use crate::models::label::Label;
use crate::models::settings::Settings;
use crate::services::calendar::{self, CellInfo, DayPartition, MonthMatrix};
use crate::services::event::{DispatchOutcome, EventAction, EventStore, PersistenceWarning};
use crate::services::filter;
use crate::services::label::LabelRegistry;
use crate::services::storage::KeyValueStore;

mod form;
mod navigation;

pub use form::EventForm;

/// Result of an accepted form submission.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub id: EventId,
    /// False when an edit targeted an event that no longer exists.
    pub changed: bool,
    pub warning: Option<PersistenceWarning>,
}

pub struct Session<S: KeyValueStore> {
    store: EventStore<S>,
    labels: LabelRegistry,
    /// Indices into `store.events()` of events with a checked label.
    filtered: Vec<usize>,
    month_index: i32,
    reference_year: i32,
    grid: MonthMatrix,
    today: NaiveDate,
    selected_day: NaiveDate,
    selected_event: Option<EventId>,
    max_visible_all_day: usize,
}

impl<S: KeyValueStore> Session<S> {
    /// Start a session showing the month of `today`.
    pub fn new(store: EventStore<S>, settings: &Settings, today: NaiveDate) -> Result<Self> {
        let month_index = today.month0() as i32;
        let reference_year = today.year();
        let grid = calendar::build_month_matrix(month_index, reference_year)
            .ok_or_else(|| anyhow!("{} is outside the supported calendar range", today))?;

        let mut session = Self {
            store,
            labels: LabelRegistry::new(),
            filtered: Vec::new(),
            month_index,
            reference_year,
            grid,
            today,
            selected_day: today,
            selected_event: None,
            max_visible_all_day: settings.max_visible_all_day.max(1),
        };
        session.refresh();

        log::info!(
            "Session started with {} events and {} labels",
            session.store.len(),
            session.labels.labels().len()
        );
        Ok(session)
    }

    fn refresh(&mut self) {
        self.labels.recompute(self.store.events());
        self.refresh_filtered();
    }

    fn refresh_filtered(&mut self) {
        self.filtered = filter::visible_indices(self.store.events(), self.labels.labels());
    }

    fn apply(&mut self, action: EventAction) -> DispatchOutcome {
        let outcome = self.store.dispatch(action);
        if outcome.changed {
            self.refresh();
        }
        outcome
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    pub fn labels(&self) -> &[Label] {
        self.labels.labels()
    }

    /// Events whose label is checked, in store order.
    pub fn filtered_events(&self) -> Vec<&Event> {
        let events = self.store.events();
        self.filtered
            .iter()
            .filter_map(|&index| events.get(index))
            .collect()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn grid(&self) -> &MonthMatrix {
        &self.grid
    }

    pub fn cell_info(&self, date: CalendarDate) -> CellInfo {
        CellInfo::for_date(date, &self.grid, self.today)
    }

    /// Validate the form, then create or replace the event.
    ///
    /// On error nothing changes and the form stays with the caller.
    pub fn submit_event(&mut self, form: &EventForm) -> Result<SubmitOutcome, ValidationError> {
        form.validate()?;

        let id = match &form.editing {
            Some(id) => id.clone(),
            None => self.store.next_id(),
        };
        let event = form.to_event(id.clone())?;
        let action = if form.editing.is_some() {
            EventAction::Update(event)
        } else {
            EventAction::Create(event)
        };

        let outcome = self.apply(action);
        self.selected_event = None;

        Ok(SubmitOutcome {
            id,
            changed: outcome.changed,
            warning: outcome.warning,
        })
    }

    /// Delete by id; unknown ids are a silent no-op.
    pub fn request_delete(&mut self, id: &EventId) -> DispatchOutcome {
        if self.selected_event.as_ref() == Some(id) {
            self.selected_event = None;
        }
        self.apply(EventAction::Delete(id.clone()))
    }

    /// Flip a label's visibility; `None` if no stored event uses it.
    pub fn toggle_label(&mut self, name: &str) -> Option<bool> {
        let checked = self.labels.toggle(name)?;
        self.refresh_filtered();
        Some(checked)
    }

    pub fn set_label_checked(&mut self, name: &str, checked: bool) -> bool {
        let found = self.labels.set_checked(name, checked);
        if found {
            self.refresh_filtered();
        }
        found
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.selected_day
    }

    /// Select a day and return its events split for display.
    pub fn select_day(&mut self, date: CalendarDate) -> DayPartition<'_> {
        self.selected_day = date;
        self.day_partition(date)
    }

    pub fn day_partition(&self, date: CalendarDate) -> DayPartition<'_> {
        calendar::partition_with_cap(date, self.filtered_events(), self.max_visible_all_day)
    }

    /// Open an existing event for editing.
    pub fn select_event(&mut self, id: &EventId) -> Option<&Event> {
        let event = self.store.get(id)?;
        self.selected_event = Some(event.id.clone());
        Some(event)
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.selected_event
            .as_ref()
            .and_then(|id| self.store.get(id))
    }

    /// Form for the editor: the selected event, or a blank one on the selected day.
    pub fn edit_form(&self) -> EventForm {
        match self.selected_event() {
            Some(event) => EventForm::from_event(event),
            None => EventForm::new(self.selected_day),
        }
    }

    pub fn close_editor(&mut self) {
        self.selected_event = None;
    }
}
