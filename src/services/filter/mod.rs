//! Label-based event filtering.

use crate::models::event::Event;
use crate::models::label::Label;

fn is_visible(event: &Event, labels: &[Label]) -> bool {
    labels
        .iter()
        .any(|label| label.checked && label.name == event.label)
}

/// Events whose label is present in `labels` and checked, in input order.
///
/// An event whose label is missing from `labels` is treated as unchecked.
pub fn visible_events<'a>(events: &'a [Event], labels: &[Label]) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| is_visible(event, labels))
        .collect()
}

/// Positions in `events` of the visible events, ascending.
pub fn visible_indices(events: &[Event], labels: &[Label]) -> Vec<usize> {
    events
        .iter()
        .enumerate()
        .filter(|(_, event)| is_visible(event, labels))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventId;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn event(id: i64, label: &str) -> Event {
        Event::builder(EventId::Number(id))
            .title(format!("event {id}"))
            .label(label)
            .day(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
            .build()
            .unwrap()
    }

    fn sample() -> Vec<Event> {
        vec![
            event(1, "Blue Event"),
            event(2, "Red Event"),
            event(3, "Blue Event"),
            event(4, "Green Event"),
        ]
    }

    #[test]
    fn test_all_checked_keeps_everything() {
        let events = sample();
        let labels = vec![
            Label::new("Blue Event"),
            Label::new("Red Event"),
            Label::new("Green Event"),
        ];
        assert_eq!(visible_events(&events, &labels).len(), 4);
    }

    #[test]
    fn test_unchecked_label_hidden_order_kept() {
        let events = sample();
        let labels = vec![
            Label::new("Blue Event"),
            Label::new("Red Event").with_checked(false),
            Label::new("Green Event"),
        ];

        let ids: Vec<&EventId> = visible_events(&events, &labels)
            .into_iter()
            .map(|event| &event.id)
            .collect();
        assert_eq!(
            ids,
            vec![&EventId::Number(1), &EventId::Number(3), &EventId::Number(4)]
        );
        assert_eq!(visible_indices(&events, &labels), vec![0, 2, 3]);
    }

    #[test]
    fn test_unknown_label_excluded() {
        let events = sample();
        let labels = vec![Label::new("Blue Event")];
        assert_eq!(visible_indices(&events, &labels), vec![0, 2]);
    }

    #[test]
    fn test_returns_store_references() {
        let events = sample();
        let labels = vec![Label::new("Green Event")];
        let visible = visible_events(&events, &labels);
        assert!(std::ptr::eq(visible[0], &events[3]));
    }
}
