//! Month grid for the date picker.

use chrono::{Datelike, Months, NaiveDate};

/// Weekday column headers, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Days of one month laid out in Monday-first weeks.
///
/// Cells outside the month are `None`; every week has seven cells.
pub struct MonthGrid {
    /// First day of the month shown.
    pub first: NaiveDate,
    /// Weeks, top to bottom.
    pub weeks: Vec<[Option<NaiveDate>; 7]>,
}

impl MonthGrid {
    /// Grid for the month containing `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        let first = first_of_month(date);
        let leading = first.weekday().num_days_from_monday() as usize;
        let days = days_in_month(first);

        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        let mut column = leading;
        for day in first.iter_days().take(days) {
            week[column] = Some(day);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }
        Self { first, weeks }
    }

    /// Heading such as `March 2024`.
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> usize {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days() as usize,
        None => 31,
    }
}

/// First day of the month `delta` months away from the month containing `date`.
///
/// Out-of-range results saturate to the input month.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(date);
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn grid_starts_on_monday_with_leading_blanks() {
        // 1 March 2024 is a Friday.
        let grid = MonthGrid::for_date(ymd(2024, 3, 15));
        assert_eq!(grid.title(), "March 2024");
        assert_eq!(grid.weeks[0][..4], [None, None, None, None]);
        assert_eq!(grid.weeks[0][4], Some(ymd(2024, 3, 1)));
        assert_eq!(grid.weeks.len(), 5);
        let last_week = grid.weeks[4];
        assert_eq!(last_week[6], Some(ymd(2024, 3, 31)));
    }

    #[test]
    fn trailing_blanks_fill_the_last_week() {
        let grid = MonthGrid::for_date(ymd(2024, 2, 1));
        let days = grid.weeks.iter().flatten().flatten().count();
        assert_eq!(days, 29);
        // 29 February 2024 is a Thursday.
        assert_eq!(grid.weeks.last().map(|week| week[3]), Some(Some(ymd(2024, 2, 29))));
        assert_eq!(grid.weeks.last().map(|week| week[4]), Some(None));
    }

    #[test]
    fn month_shifts_cross_year_boundaries() {
        assert_eq!(shift_month(ymd(2024, 1, 31), -1), ymd(2023, 12, 1));
        assert_eq!(shift_month(ymd(2024, 12, 5), 1), ymd(2025, 1, 1));
        assert_eq!(days_in_month(ymd(2023, 2, 10)), 28);
    }
}
