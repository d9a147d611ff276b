use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::member::MemberId;

pub type VacationId = u32;

/// Lifecycle of a leave request.
///
/// Transitions only move forward: Created -> Pending -> Approved. There is
/// no rejection and nothing ever un-approves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VacationStatus {
    Created,
    Pending,
    Approved,
}

/// A leave request over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacation {
    pub id: VacationId,
    /// The member who asked for the leave.
    pub requester: MemberId,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: VacationStatus,
    /// Who approved so far, in the order the approvals arrived.
    pub approved_by: Vec<MemberId>,
    pub notes: String,
}

impl Vacation {
    /// True when `date` falls inside `[start, end]`. Both ends count.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when the request touches month `month` (1-12) of `year`.
    ///
    /// A request counts in the months its start and end fall in, plus every
    /// month between them when both ends share `year`. A request crossing a
    /// year boundary only counts in its start and end months.
    pub fn touches_month(&self, year: i32, month: u32) -> bool {
        let starts_here = self.start.year() == year && self.start.month() == month;
        let ends_here = self.end.year() == year && self.end.month() == month;
        let spans = self.start.year() == year
            && self.end.year() == year
            && self.start.month() <= month
            && month <= self.end.month();
        starts_here || ends_here || spans
    }

    pub fn has_approval_from(&self, member: MemberId) -> bool {
        self.approved_by.contains(&member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn vacation(start: NaiveDate, end: NaiveDate) -> Vacation {
        Vacation {
            id: 1,
            requester: 1,
            start,
            end,
            status: VacationStatus::Created,
            approved_by: Vec::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn contains_includes_both_ends() {
        let v = vacation(date(2025, 4, 5), date(2025, 4, 12));
        assert!(v.contains(date(2025, 4, 5)));
        assert!(v.contains(date(2025, 4, 8)));
        assert!(v.contains(date(2025, 4, 12)));
        assert!(!v.contains(date(2025, 4, 4)));
        assert!(!v.contains(date(2025, 4, 13)));
    }

    #[test]
    fn single_day_range_contains_itself() {
        let v = vacation(date(2025, 6, 9), date(2025, 6, 9));
        assert!(v.contains(date(2025, 6, 9)));
        assert!(!v.contains(date(2025, 6, 10)));
    }

    #[test]
    fn touches_every_month_it_spans() {
        let v = vacation(date(2025, 4, 28), date(2025, 6, 3));
        assert!(v.touches_month(2025, 4));
        assert!(v.touches_month(2025, 5));
        assert!(v.touches_month(2025, 6));
        assert!(!v.touches_month(2025, 3));
        assert!(!v.touches_month(2025, 7));
        assert!(!v.touches_month(2024, 5));
    }

    #[test]
    fn year_crossing_counts_start_and_end_months_only() {
        let v = vacation(date(2025, 12, 28), date(2026, 1, 2));
        assert!(v.touches_month(2025, 12));
        assert!(v.touches_month(2026, 1));
        assert!(!v.touches_month(2025, 11));
        assert!(!v.touches_month(2026, 2));
    }
}
