//! Splits one day's events for display in a grid cell.
//!
//! All-day events fill the cell first, up to a cap, with the rest behind a
//! "+N More" overflow view. Timed events are listed separately, earliest
//! start first.

use crate::models::event::{CalendarDate, Event};
use crate::models::settings::DEFAULT_MAX_VISIBLE_ALL_DAY;

/// Events of one day, borrowed from the store so that selecting any of them
/// refers to the canonical entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayPartition<'a> {
    /// All-day events shown in the cell.
    pub visible: Vec<&'a Event>,
    /// All-day events beyond the cap.
    pub overflow: Vec<&'a Event>,
    /// Timed events ordered by start time.
    pub timed: Vec<&'a Event>,
}

impl<'a> DayPartition<'a> {
    pub fn overflow_count(&self) -> usize {
        self.overflow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.overflow.is_empty() && self.timed.is_empty()
    }

    /// Every all-day event of the day, visible ones first.
    pub fn all_day(&self) -> impl Iterator<Item = &'a Event> + '_ {
        self.visible.iter().chain(self.overflow.iter()).copied()
    }

    /// `"<title> at <h:mm AM/PM>"` for each timed event.
    pub fn timed_lines(&self) -> Vec<String> {
        self.timed.iter().filter_map(|event| event.timed_line()).collect()
    }
}

/// Partition with the default cap of two visible all-day events.
pub fn partition<'a, I>(date: CalendarDate, events: I) -> DayPartition<'a>
where
    I: IntoIterator<Item = &'a Event>,
{
    partition_with_cap(date, events, DEFAULT_MAX_VISIBLE_ALL_DAY)
}

pub fn partition_with_cap<'a, I>(date: CalendarDate, events: I, cap: usize) -> DayPartition<'a>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut day_events: Vec<&'a Event> = events
        .into_iter()
        .filter(|event| event.occurs_on(date))
        .collect();

    // Stable: ties keep their input order.
    day_events.sort_by_key(|event| !event.is_all_day());

    let mut visible: Vec<&'a Event> = day_events
        .iter()
        .copied()
        .filter(|event| event.is_all_day())
        .collect();
    let overflow = visible.split_off(cap.min(visible.len()));

    let mut timed: Vec<&'a Event> = day_events
        .into_iter()
        .filter(|event| !event.is_all_day())
        .collect();
    timed.sort_by_key(|event| event.start_time());

    DayPartition {
        visible,
        overflow,
        timed,
    }
}
