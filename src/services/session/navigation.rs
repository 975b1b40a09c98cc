// Month navigation for the session grid.
// The month index is zero-based and relative to the year the session started
// in, so it may run past 11 or below 0.

use chrono::Datelike;

use super::Session;
use crate::services::calendar::{self, MonthMatrix};
use crate::services::storage::KeyValueStore;

impl<S: KeyValueStore> Session<S> {
    pub fn month_index(&self) -> i32 {
        self.month_index
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Show the month at `index`; out-of-range indices keep the current grid.
    pub fn select_month(&mut self, index: i32) -> &MonthMatrix {
        match calendar::build_month_matrix(index, self.reference_year) {
            Some(grid) => {
                self.month_index = index;
                self.grid = grid;
                log::debug!("Showing {}-{:02}", self.grid.year(), self.grid.month());
            }
            None => log::warn!(
                "Month index {} relative to {} is out of range; keeping current month",
                index,
                self.reference_year
            ),
        }
        &self.grid
    }

    pub fn next_month(&mut self) -> &MonthMatrix {
        self.select_month(self.month_index.saturating_add(1))
    }

    pub fn previous_month(&mut self) -> &MonthMatrix {
        self.select_month(self.month_index.saturating_sub(1))
    }

    /// Jump back to the month containing today.
    pub fn reset_month(&mut self) -> &MonthMatrix {
        self.reference_year = self.today.year();
        self.select_month(self.today.month0() as i32)
    }

    /// Header text for the displayed month, e.g. `March 2024`.
    pub fn month_title(&self) -> String {
        calendar::month_title(self.month_index, self.reference_year)
            .unwrap_or_else(|| format!("{}-{:02}", self.grid.year(), self.grid.month()))
    }
}
