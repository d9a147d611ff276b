use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A national holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

/// The fixed set of holidays the calendar knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self { holidays }
    }

    /// The ten Dutch national holidays of 2025.
    pub fn dutch_2025() -> Self {
        let table: [(u32, u32, &str); 10] = [
            (1, 1, "Nieuwjaarsdag"),
            (4, 18, "Goede Vrijdag"),
            (4, 20, "Eerste Paasdag"),
            (4, 21, "Tweede Paasdag"),
            (5, 5, "Bevrijdingsdag"),
            (5, 29, "Hemelvaartsdag"),
            (6, 8, "Eerste Pinksterdag"),
            (6, 9, "Tweede Pinksterdag"),
            (12, 25, "Eerste Kerstdag"),
            (12, 26, "Tweede Kerstdag"),
        ];
        let holidays = table
            .iter()
            .map(|&(month, day, name)| Holiday {
                date: NaiveDate::from_ymd_opt(2025, month, day)
                    .expect("holiday table holds valid dates"),
                name: name.to_string(),
            })
            .collect();
        Self { holidays }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    pub fn name_of(&self, date: NaiveDate) -> Option<&str> {
        self.holidays
            .iter()
            .find(|h| h.date == date)
            .map(|h| h.name.as_str())
    }

    /// Holidays falling in month `month` (1-12) of `year`.
    pub fn in_month(&self, year: i32, month: u32) -> impl Iterator<Item = &Holiday> {
        self.holidays
            .iter()
            .filter(move |h| h.date.year() == year && h.date.month() == month)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.iter()
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn dutch_calendar_has_ten_days() {
        assert_eq!(HolidayCalendar::dutch_2025().len(), 10);
    }

    #[test]
    fn easter_weekend_is_marked() {
        let cal = HolidayCalendar::dutch_2025();
        assert!(cal.contains(date(2025, 4, 18)));
        assert_eq!(cal.name_of(date(2025, 4, 20)), Some("Eerste Paasdag"));
        assert_eq!(cal.name_of(date(2025, 4, 21)), Some("Tweede Paasdag"));
    }

    #[test]
    fn ordinary_days_are_not_holidays() {
        let cal = HolidayCalendar::dutch_2025();
        assert!(!cal.contains(date(2025, 4, 19)));
        assert_eq!(cal.name_of(date(2025, 7, 1)), None);
    }

    #[test]
    fn april_has_three_holidays() {
        let cal = HolidayCalendar::dutch_2025();
        assert_eq!(cal.in_month(2025, 4).count(), 3);
        assert_eq!(cal.in_month(2025, 5).count(), 2);
        assert_eq!(cal.in_month(2025, 7).count(), 0);
        assert_eq!(cal.in_month(2024, 4).count(), 0);
    }
}
