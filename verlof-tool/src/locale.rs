//! Dutch calendar and status strings.
//!
//! The UI language is fixed; these tables are the whole translation layer.

use chrono::{Datelike, NaiveDate};
use ratatui::style::Color;
use verlof_core::{MemberId, Planner, VacationStatus};

pub const MONTHS: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

/// Column headers for the month view, Monday first.
pub const WEEKDAYS_SHORT: [&str; 7] = ["Ma", "Di", "Wo", "Do", "Vr", "Za", "Zo"];

/// Single-letter headers for the year view's mini months.
pub const WEEKDAYS_LETTER: [&str; 7] = ["M", "D", "W", "D", "V", "Z", "Z"];

/// Shown wherever a member id no longer resolves to a roster entry.
pub const UNKNOWN_MEMBER: &str = "Onbekend";

pub const HOLIDAY_COLOR: Color = Color::Red;

pub fn month_name(month: u32) -> &'static str {
    MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// `5-4-2025`, the unpadded Dutch short form.
pub fn short_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.day(), date.month(), date.year())
}

/// `april 2025`, the month view title.
pub fn month_title(date: NaiveDate) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

/// `5-4-2025 t/m 12-4-2025`, both ends inclusive.
pub fn period(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} t/m {}", short_date(start), short_date(end))
}

pub fn status_label(status: VacationStatus) -> &'static str {
    match status {
        VacationStatus::Created => "Aangemaakt",
        VacationStatus::Pending => "In afwachting",
        VacationStatus::Approved => "Goedgekeurd",
    }
}

pub fn status_color(status: VacationStatus) -> Color {
    match status {
        VacationStatus::Created => Color::Gray,
        VacationStatus::Pending => Color::Yellow,
        VacationStatus::Approved => Color::Green,
    }
}

/// Member name with the fallback for ids that left the roster.
pub fn member_name(planner: &Planner, id: MemberId) -> &str {
    planner
        .member(id)
        .map(|m| m.name.as_str())
        .unwrap_or(UNKNOWN_MEMBER)
}
