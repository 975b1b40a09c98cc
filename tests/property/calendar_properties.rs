// Property-based tests for the month grid, label filtering and snapshots

use chrono::{Datelike, Days, NaiveDate, Weekday};
use month_planner::models::event::{ClockTime, Event, EventId, EventTiming};
use month_planner::models::label::{Label, LABEL_CLASSES};
use month_planner::models::settings::Settings;
use month_planner::services::calendar::{build_month_matrix, partition_with_cap};
use month_planner::services::event::snapshot::{decode_snapshot, encode_snapshot, STORAGE_KEY};
use month_planner::services::event::EventStore;
use month_planner::services::filter::visible_events;
use month_planner::services::label::recompute_labels;
use month_planner::services::session::{EventForm, Session};
use month_planner::services::storage::{KeyValueStore, MemoryKeyValueStore};
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2000..2040i32, 1..=12u32, 1..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_timing() -> impl Strategy<Value = EventTiming> {
    prop_oneof![
        Just(EventTiming::AllDay),
        (0..1439u16, 1..=120u16).prop_map(|(start, len)| {
            let end = (start + len).min(1439);
            let start = ClockTime::new((start / 60) as u8, (start % 60) as u8).unwrap();
            let end = ClockTime::new((end / 60) as u8, (end % 60) as u8).unwrap();
            EventTiming::timed(start, end).unwrap()
        }),
    ]
}

/// Well-formed, out-of-range and garbage time text.
fn arb_time_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-2]?[0-9]:[0-5][0-9]",
        "[0-9]{1,3}:[0-9]{1,2}",
        ".{0,6}",
    ]
}

fn seeded_session() -> Session<MemoryKeyValueStore> {
    let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let store = EventStore::load(MemoryKeyValueStore::new());
    let mut session = Session::new(store, &Settings::default(), today).unwrap();

    let mut form = EventForm::new(today);
    form.title = "Existing".to_string();
    form.is_all_day = true;
    session.submit_event(&form).unwrap();
    session
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(
        (arb_date(), 0..LABEL_CLASSES.len(), arb_timing(), "[a-z]{1,8}"),
        0..20,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (day, label, timing, title))| {
                Event::new(
                    EventId::Number(i as i64),
                    title,
                    LABEL_CLASSES[label].name,
                    day,
                    timing,
                )
                .unwrap()
            })
            .collect()
    })
}

proptest! {
    /// Property: the grid always holds 35 consecutive days starting on a Sunday
    #[test]
    fn prop_grid_is_35_consecutive_days(month in -240..240i32, year in 1900..2100i32) {
        let grid = build_month_matrix(month, year).unwrap();
        let dates: Vec<NaiveDate> = grid.dates().collect();

        prop_assert_eq!(dates.len(), 35);
        prop_assert_eq!(dates[0].weekday(), Weekday::Sun);
        for pair in dates.windows(2) {
            prop_assert_eq!(pair[0].checked_add_days(Days::new(1)), Some(pair[1]));
        }
    }

    /// Property: at least 28 cells belong to the displayed month
    #[test]
    fn prop_grid_mostly_in_month(month in 0..12i32, year in 1900..2100i32) {
        let grid = build_month_matrix(month, year).unwrap();
        let in_month = grid.dates().filter(|d| grid.is_in_month(*d)).count();
        prop_assert!(in_month >= 28);
        prop_assert!(grid.dates().any(|d| d.day() == 1 && grid.is_in_month(d)));
    }

    /// Property: the middle row is always inside the displayed month
    #[test]
    fn prop_middle_row_in_month(month in 0..12i32, year in 1900..2100i32) {
        let grid = build_month_matrix(month, year).unwrap();
        for column in 0..7 {
            let date = grid.cell(2, column).unwrap();
            prop_assert!(grid.is_in_month(date));
        }
    }

    /// Property: filtering keeps a subsequence of the input, in order
    #[test]
    fn prop_filter_is_order_preserving_subsequence(
        events in arb_events(),
        hidden in prop::collection::vec(any::<bool>(), LABEL_CLASSES.len()),
    ) {
        let labels: Vec<Label> = LABEL_CLASSES
            .iter()
            .zip(&hidden)
            .map(|(class, &hide)| Label::new(class.name).with_checked(!hide))
            .collect();

        let visible = visible_events(&events, &labels);
        let mut remaining = events.iter();
        for event in &visible {
            prop_assert!(remaining.any(|candidate| std::ptr::eq(candidate, *event)));
            let label = labels.iter().find(|l| l.name == event.label).unwrap();
            prop_assert!(label.checked);
        }
    }

    /// Property: recomputing labels twice gives the same list
    #[test]
    fn prop_recompute_labels_idempotent(events in arb_events()) {
        let once = recompute_labels(&events, &[]);
        let twice = recompute_labels(&events, &once);
        prop_assert_eq!(&once, &twice);

        for label in &once {
            prop_assert!(events.iter().any(|e| e.label == label.name));
        }
    }

    /// Property: a day partition never loses or duplicates events
    #[test]
    fn prop_partition_accounts_for_every_event(events in arb_events(), date in arb_date(), cap in 1..4usize) {
        let day = partition_with_cap(date, &events, cap);
        let expected = events.iter().filter(|e| e.occurs_on(date)).count();

        prop_assert!(day.visible.len() <= cap);
        prop_assert_eq!(day.visible.len() + day.overflow.len() + day.timed.len(), expected);
        prop_assert!(day.overflow.is_empty() || day.visible.len() == cap);
        prop_assert!(day.timed.windows(2).all(|w| w[0].start_time() <= w[1].start_time()));
    }

    /// Property: saving then loading a snapshot gives back the same events
    #[test]
    fn prop_snapshot_round_trip(events in arb_events()) {
        let json = encode_snapshot(&events).unwrap();
        prop_assert_eq!(decode_snapshot(&json).unwrap(), events);
    }

    /// Property: accepted timed submissions start before they end, and
    /// rejected ones leave the events and the saved snapshot untouched
    #[test]
    fn prop_submit_keeps_start_before_end(
        start in arb_time_text(),
        end in arb_time_text(),
        title in "[ a-z]{0,6}",
    ) {
        let mut session = seeded_session();
        let events_before = session.events().to_vec();
        let saved_before = session.store().storage().get(STORAGE_KEY).unwrap();

        let mut form = EventForm::new(session.today());
        form.title = title;
        form.start_time = start;
        form.end_time = end;

        match session.submit_event(&form) {
            Ok(outcome) => {
                let event = session.events().iter().find(|e| e.id == outcome.id).unwrap();
                prop_assert!(event.start_time().unwrap() < event.end_time().unwrap());
                prop_assert_eq!(session.events().len(), events_before.len() + 1);
            }
            Err(_) => {
                prop_assert_eq!(session.events(), events_before.as_slice());
                prop_assert_eq!(session.store().storage().get(STORAGE_KEY).unwrap(), saved_before);
            }
        }
    }
}
