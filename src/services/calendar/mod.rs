//! Calendar computations: the month grid and per-day event partitioning.

pub mod day;
pub mod grid;

pub use day::{partition, partition_with_cap, DayPartition};
pub use grid::{build_month_matrix, month_title, CellInfo, MonthMatrix, WEEKDAY_HEADERS};
