//! Label registry: the labels present in the store and their visibility.
//!
//! The label list is derived from the events rather than stored. Each
//! recompute keeps the checked flag of labels that were already known and
//! marks new ones as checked.

use crate::models::event::Event;
use crate::models::label::Label;

/// Distinct labels of `events` in first-seen order, carrying over the
/// checked flag from `previous` where the label already existed.
pub fn recompute_labels(events: &[Event], previous: &[Label]) -> Vec<Label> {
    let mut labels: Vec<Label> = Vec::new();

    for event in events {
        if labels.iter().any(|label| label.name == event.label) {
            continue;
        }

        let checked = previous
            .iter()
            .find(|label| label.name == event.label)
            .map_or(true, |label| label.checked);
        labels.push(Label::new(event.label.as_str()).with_checked(checked));
    }

    labels
}

/// Labels currently shown in the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelRegistry {
    labels: Vec<Label>,
}

impl LabelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Rebuild from the current events, keeping existing checked flags.
    pub fn recompute(&mut self, events: &[Event]) {
        self.labels = recompute_labels(events, &self.labels);
        log::debug!("Recomputed {} labels", self.labels.len());
    }

    /// Set one label's flag; returns `false` if no label has that name.
    pub fn set_checked(&mut self, name: &str, checked: bool) -> bool {
        match self.labels.iter_mut().find(|label| label.name == name) {
            Some(label) => {
                label.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Flip one label's flag; returns the new value, or `None` if unknown.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let label = self.labels.iter_mut().find(|label| label.name == name)?;
        label.checked = !label.checked;
        Some(label.checked)
    }
}
