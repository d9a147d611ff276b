//! Month layout for calendar views.
//!
//! Grids are derived, never stored: a [`MonthGrid`] is a pure function of a
//! date and can be recomputed on every frame.

use chrono::{Datelike, Days, Months, NaiveDate};

/// One calendar month laid out for display.
///
/// Cells run Monday-first: one leading `None` per weekday slot before the
/// 1st, then every day of the month in order. A month starting on Monday
/// has no blanks, one starting on Sunday has six. There is no trailing
/// padding; views pad the last visual row themselves if they need to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    cells: Vec<Option<NaiveDate>>,
}

impl MonthGrid {
    /// Grid of the month `anchor` falls in.
    pub fn of(anchor: NaiveDate) -> Self {
        let first = first_of_month(anchor);
        let blanks = first.weekday().num_days_from_monday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; blanks];
        cells.extend(
            first
                .iter_days()
                .take_while(|d| d.month() == first.month())
                .map(Some),
        );
        Self {
            year: first.year(),
            month: first.month(),
            cells,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn cells(&self) -> &[Option<NaiveDate>] {
        &self.cells
    }

    /// Cells chunked into rows of seven; the last row may be short.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<NaiveDate>]> {
        self.cells.chunks(7)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The twelve month grids of `year`, January first.
pub fn year_grids(year: i32) -> Vec<MonthGrid> {
    (1..=12)
        .map(|month| {
            let first = NaiveDate::from_ymd_opt(year, month, 1)
                .expect("every month of a representable year has a first day");
            MonthGrid::of(first)
        })
        .collect()
}

/// First day of the month `anchor` falls in.
pub fn first_of_month(anchor: NaiveDate) -> NaiveDate {
    anchor.with_day(1).unwrap_or(anchor)
}

/// First day of the previous month. Saturates at the calendar's edge.
pub fn prev_month(anchor: NaiveDate) -> NaiveDate {
    first_of_month(anchor)
        .checked_sub_months(Months::new(1))
        .unwrap_or(anchor)
}

/// First day of the next month. Saturates at the calendar's edge.
pub fn next_month(anchor: NaiveDate) -> NaiveDate {
    first_of_month(anchor)
        .checked_add_months(Months::new(1))
        .unwrap_or(anchor)
}

/// January 1 of the previous year. Saturates at the calendar's edge.
pub fn prev_year(anchor: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(anchor.year() - 1, 1, 1).unwrap_or(anchor)
}

/// January 1 of the next year. Saturates at the calendar's edge.
pub fn next_year(anchor: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(anchor.year() + 1, 1, 1).unwrap_or(anchor)
}

/// `anchor` shifted by whole days, staying put when the result would leave
/// the representable range.
pub fn shift_days(anchor: NaiveDate, days: i64) -> NaiveDate {
    let result = if days >= 0 {
        anchor.checked_add_days(Days::new(days as u64))
    } else {
        anchor.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    result.unwrap_or(anchor)
}
