//! Month-grid math shared by the date picker components.
//!
//! ## Usage
//!
//! Derive the fixed six-week day grid for a month and step a cursor between
//! months.

use chrono::{Datelike, Days, Local, NaiveDate};

/// Number of cells in the fixed six-week day grid.
pub const GRID_CELLS: usize = 42;

/// Number of columns (weekdays) in the day grid.
pub const GRID_COLUMNS: usize = 7;

/// One entry of the day grid: a calendar date plus a flag for whether the
/// date falls outside the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// The calendar date this cell represents.
    pub date: NaiveDate,
    /// Whether the date belongs to an adjacent month rather than the
    /// displayed one.
    pub other_month: bool,
}

/// The currently displayed (year, month) pair, independent of any selected
/// date.
///
/// Months are 0-based (`0` = January .. `11` = December), matching chrono's
/// `month0` accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month0: u32,
}

impl MonthCursor {
    /// Creates a cursor anchored at the given year and 0-based month.
    ///
    /// # Panics
    ///
    /// Panics when `month0` is outside `0..=11`.
    pub fn new(year: i32, month0: u32) -> Self {
        assert!(month0 < 12, "month0 must be in 0..=11, got {month0}");
        Self { year, month0 }
    }

    /// Creates a cursor anchored at the month containing `date`.
    pub fn at(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// Creates a cursor anchored at the current local month.
    pub fn current_month() -> Self {
        Self::at(Local::now().date_naive())
    }

    /// Returns the displayed year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the displayed 0-based month.
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// Moves the cursor one month back, wrapping January to December of the
    /// previous year.
    pub fn retreat(&mut self) {
        if self.month0 == 0 {
            self.month0 = 11;
            self.year -= 1;
        } else {
            self.month0 -= 1;
        }
    }

    /// Moves the cursor one month forward, wrapping December to January of
    /// the next year.
    pub fn advance(&mut self) {
        if self.month0 == 11 {
            self.month0 = 0;
            self.year += 1;
        } else {
            self.month0 += 1;
        }
    }

    /// Returns the first day of the displayed month.
    pub fn first_day(&self) -> NaiveDate {
        first_of_month(self.year, self.month0)
    }
}

impl Default for MonthCursor {
    fn default() -> Self {
        Self::current_month()
    }
}

fn first_of_month(year: i32, month0: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .expect("displayed month is within the supported date range")
}

/// Returns the number of days in the given 0-based month.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let first = first_of_month(year, month0);
    let mut next = MonthCursor::new(year, month0);
    next.advance();
    next.first_day().signed_duration_since(first).num_days() as u32
}

/// Builds the fixed 42-cell day grid for the given 0-based month.
///
/// The grid is anchored on the Sunday column: it opens with the trailing
/// days of the previous month needed to reach the 1st, continues with every
/// day of the displayed month, and fills the remainder with the leading days
/// of the next month. Cells are in strictly ascending date order.
pub fn month_grid(year: i32, month0: u32) -> Vec<DayCell> {
    let first = first_of_month(year, month0);
    let leading = u64::from(first.weekday().num_days_from_sunday());
    let start = first
        .checked_sub_days(Days::new(leading))
        .expect("grid start is within the supported date range");

    (0..GRID_CELLS as u64)
        .map(|offset| {
            let date = start
                .checked_add_days(Days::new(offset))
                .expect("grid end is within the supported date range");
            DayCell {
                date,
                other_month: date.year() != year || date.month0() != month0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
    }

    #[test]
    fn grid_has_42_strictly_ascending_unique_cells() {
        let months = [
            (2024, 1),
            (2024, 8),
            (2023, 11),
            (2024, 0),
            (1999, 11),
            (2000, 1),
            (1970, 0),
            (2100, 1),
        ];
        for (year, month0) in months {
            let grid = month_grid(year, month0);
            assert_eq!(grid.len(), GRID_CELLS, "{year}-{month0}");
            for pair in grid.windows(2) {
                assert!(
                    pair[0].date < pair[1].date,
                    "{year}-{month0}: {} !< {}",
                    pair[0].date,
                    pair[1].date
                );
            }
            // Consecutive dates, so no gaps either.
            let span = grid[GRID_CELLS - 1]
                .date
                .signed_duration_since(grid[0].date)
                .num_days();
            assert_eq!(span, GRID_CELLS as i64 - 1, "{year}-{month0}");
        }
    }

    #[test]
    fn in_month_count_matches_days_in_month() {
        for (year, month0) in [(2024, 1), (2023, 1), (2024, 3), (2024, 11), (1999, 11)] {
            let grid = month_grid(year, month0);
            let in_month = grid.iter().filter(|cell| !cell.other_month).count();
            assert_eq!(in_month, days_in_month(year, month0) as usize);
        }
    }

    #[test]
    fn february_2024_grid_starts_on_jan_28() {
        // Feb 1, 2024 is a Thursday, so the grid opens with four January days.
        let grid = month_grid(2024, 1);
        assert_eq!(grid[0].date, date(2024, 1, 28));
        assert!(grid[0].other_month);
        assert_eq!(grid[4].date, date(2024, 2, 1));
        assert!(!grid[4].other_month);
        assert_eq!(grid[32].date, date(2024, 2, 29));
        assert!(!grid[32].other_month);
        assert_eq!(grid[33].date, date(2024, 3, 1));
        assert!(grid[33].other_month);
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_cells() {
        // Sep 1, 2024 is a Sunday.
        let grid = month_grid(2024, 8);
        assert_eq!(grid[0].date, date(2024, 9, 1));
        assert!(!grid[0].other_month);
        assert_eq!(grid[29].date, date(2024, 9, 30));
        assert_eq!(grid[30].date, date(2024, 10, 1));
        assert!(grid[30].other_month);
        assert_eq!(grid.len(), GRID_CELLS);
    }

    #[test]
    fn grid_wraps_across_year_boundaries() {
        let january = month_grid(2024, 0);
        assert_eq!(january[0].date, date(2023, 12, 31));
        assert!(january[0].other_month);

        let december = month_grid(2023, 11);
        let last = december[GRID_CELLS - 1];
        assert_eq!(last.date, date(2024, 1, 11));
        assert!(last.other_month);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2024, 3), 30);
        assert_eq!(days_in_month(2024, 11), 31);
    }

    #[test]
    fn retreat_wraps_january_to_previous_december() {
        let mut cursor = MonthCursor::new(2024, 0);
        cursor.retreat();
        assert_eq!((cursor.year(), cursor.month0()), (2023, 11));
    }

    #[test]
    fn advance_wraps_december_to_next_january() {
        let mut cursor = MonthCursor::new(2023, 11);
        cursor.advance();
        assert_eq!((cursor.year(), cursor.month0()), (2024, 0));
    }

    #[test]
    fn retreat_and_advance_are_inverses() {
        for month0 in 0..12 {
            let start = MonthCursor::new(2024, month0);

            let mut cursor = start;
            cursor.retreat();
            cursor.advance();
            assert_eq!(cursor, start);

            let mut cursor = start;
            cursor.advance();
            cursor.retreat();
            assert_eq!(cursor, start);
        }
    }

    #[test]
    fn twelve_advances_increment_the_year() {
        for month0 in 0..12 {
            let mut cursor = MonthCursor::new(2024, month0);
            for _ in 0..12 {
                cursor.advance();
            }
            assert_eq!((cursor.year(), cursor.month0()), (2025, month0));
        }
    }

    #[test]
    fn cursor_anchors_to_a_date() {
        let cursor = MonthCursor::at(date(2024, 2, 29));
        assert_eq!((cursor.year(), cursor.month0()), (2024, 1));
        assert_eq!(cursor.first_day(), date(2024, 2, 1));
    }
}
