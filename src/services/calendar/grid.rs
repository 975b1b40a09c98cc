//! Fixed 5x7 month grid.
//!
//! The grid starts on the Sunday on or before the 1st of the month and always
//! holds exactly 35 consecutive dates. Months whose last days fall after the
//! fifth row are clipped; the grid never grows a sixth row.

use chrono::{Datelike, Days, NaiveDate};

pub const ROWS: usize = 5;
pub const COLUMNS: usize = 7;

/// Column headers shown above the first row.
pub const WEEKDAY_HEADERS: [&str; COLUMNS] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Resolve a zero-based month index relative to `reference_year`.
///
/// Index 12 is January of the following year, -1 is December of the
/// previous one. Returns `(year, 1-based month)`.
pub fn normalize_month(month: i32, reference_year: i32) -> Option<(i32, u32)> {
    let year = reference_year.checked_add(month.div_euclid(12))?;
    let month = month.rem_euclid(12) as u32 + 1;
    Some((year, month))
}

/// Dates displayed for one month, row-major, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthMatrix {
    year: i32,
    month: u32,
    cells: [[NaiveDate; COLUMNS]; ROWS],
}

impl MonthMatrix {
    /// Year of the displayed month.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn rows(&self) -> &[[NaiveDate; COLUMNS]; ROWS] {
        &self.cells
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<NaiveDate> {
        self.cells.get(row)?.get(column).copied()
    }

    /// All 35 dates in row-major order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn first(&self) -> NaiveDate {
        self.cells[0][0]
    }

    pub fn last(&self) -> NaiveDate {
        self.cells[ROWS - 1][COLUMNS - 1]
    }

    /// Whether `date` is one of the displayed cells.
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.first()..=self.last()).contains(&date)
    }

    /// Whether `date` belongs to the displayed month (not a neighbor).
    pub fn is_in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Build the grid for zero-based `month` relative to `reference_year`.
///
/// Any month index is accepted; out-of-range indexes roll into adjacent
/// years. `None` only when the resulting year is outside chrono's range.
///
/// # Examples
/// ```
/// use month_planner::services::calendar::build_month_matrix;
/// use chrono::NaiveDate;
///
/// // March 2024 starts on a Friday.
/// let grid = build_month_matrix(2, 2024).unwrap();
/// assert_eq!(grid.first(), NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
/// assert_eq!(grid.dates().count(), 35);
/// ```
pub fn build_month_matrix(month: i32, reference_year: i32) -> Option<MonthMatrix> {
    let (year, month) = normalize_month(month, reference_year)?;
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = first_of_month.weekday().num_days_from_sunday();
    let start = first_of_month.checked_sub_days(Days::new(u64::from(offset)))?;

    let mut cells = [[start; COLUMNS]; ROWS];
    for (k, cell) in cells.iter_mut().flatten().enumerate() {
        *cell = start.checked_add_days(Days::new(k as u64))?;
    }

    Some(MonthMatrix { year, month, cells })
}

/// Header text such as `March 2024`.
pub fn month_title(month: i32, reference_year: i32) -> Option<String> {
    let (year, month) = normalize_month(month, reference_year)?;
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(first_of_month.format("%B %Y").to_string())
}

/// Display flags for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellInfo {
    /// False for leading/trailing days of neighboring months.
    pub in_month: bool,
    pub is_today: bool,
    pub is_past: bool,
}

impl CellInfo {
    pub fn for_date(date: NaiveDate, matrix: &MonthMatrix, today: NaiveDate) -> Self {
        Self {
            in_month: matrix.is_in_month(date),
            is_today: date == today,
            is_past: date < today,
        }
    }
}
