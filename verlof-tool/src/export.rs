//! Planner exports: JSON/YAML snapshots and an iCalendar feed.

use std::path::Path;

use chrono::NaiveDate;
use icalendar::{Calendar, Component, Property, ValueType};
use serde::Serialize;
use tracing::debug;
use verlof_core::{Holiday, Planner, TeamMember, Vacation, VacationStatus, shift_days};

use crate::error::VlfError;
use crate::locale;

/// Default target of the in-app export key.
pub const ICS_FILENAME: &str = "verlof.ics";

/// Export format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Ics,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "ics" | "ical" => Ok(ExportFormat::Ics),
            _ => Err(format!("unknown format: {}", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Yaml => write!(f, "yaml"),
            ExportFormat::Ics => write!(f, "ics"),
        }
    }
}

/// Everything a snapshot export carries.
#[derive(Serialize)]
struct Snapshot<'a> {
    members: &'a [TeamMember],
    vacations: &'a [Vacation],
    holidays: Vec<&'a Holiday>,
}

impl<'a> Snapshot<'a> {
    fn of(planner: &'a Planner) -> Self {
        Self {
            members: planner.members(),
            vacations: planner.vacations(),
            holidays: planner.holidays().iter().collect(),
        }
    }
}

/// Render the planner state in the requested format.
pub fn export(planner: &Planner, format: ExportFormat) -> Result<String, VlfError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(&Snapshot::of(planner))?),
        ExportFormat::Yaml => Ok(serde_yaml::to_string(&Snapshot::of(planner))?),
        ExportFormat::Ics => Ok(to_ics(planner)),
    }
}

/// Render the ICS feed and write it to `path`.
pub fn write_ics(planner: &Planner, path: &Path) -> Result<(), VlfError> {
    std::fs::write(path, to_ics(planner))?;
    debug!(path = %path.display(), "wrote ics export");
    Ok(())
}

/// One all-day VEVENT per request.
///
/// All-day DTEND is exclusive per RFC 5545, so it lands on the day after
/// the last vacation day. STATUS is only emitted while approvals are still
/// outstanding; CONFIRMED is the implied default.
fn to_ics(planner: &Planner) -> String {
    let mut cal = Calendar::new();

    for vacation in planner.vacations() {
        let mut event = icalendar::Event::new();
        event.uid(&format!("vakantie-{}@verlof", vacation.id));
        event.summary(&format!(
            "Vakantie {}",
            locale::member_name(planner, vacation.requester)
        ));

        let dtstamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        event.add_property("DTSTAMP", &dtstamp);

        add_date_property(&mut event, "DTSTART", vacation.start);
        add_date_property(&mut event, "DTEND", shift_days(vacation.end, 1));

        if !vacation.notes.is_empty() {
            event.description(&vacation.notes);
        }

        match vacation.status {
            VacationStatus::Approved => {}
            VacationStatus::Pending | VacationStatus::Created => {
                event.add_property("STATUS", "TENTATIVE");
            }
        }

        cal.push(event.done());
    }

    cal.done().to_string()
}

/// Date-only property (`VALUE=DATE`, no time part).
fn add_date_property(event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    event.append_property(prop);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing_accepts_aliases() {
        assert_eq!("json".parse(), Ok(ExportFormat::Json));
        assert_eq!("YAML".parse(), Ok(ExportFormat::Yaml));
        assert_eq!("yml".parse(), Ok(ExportFormat::Yaml));
        assert_eq!("ical".parse(), Ok(ExportFormat::Ics));
        assert!("csv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn json_snapshot_carries_the_whole_planner() {
        let planner = Planner::demo();

        let out = export(&planner, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["members"].as_array().unwrap().len(), 5);
        assert_eq!(value["vacations"].as_array().unwrap().len(), 5);
        assert_eq!(value["holidays"].as_array().unwrap().len(), 10);
        assert_eq!(value["vacations"][0]["status"], "approved");
        assert_eq!(value["vacations"][0]["start"], "2025-04-05");
    }

    #[test]
    fn yaml_snapshot_parses_back() {
        let planner = Planner::demo();

        let out = export(&planner, ExportFormat::Yaml).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();

        assert_eq!(value["members"].as_sequence().unwrap().len(), 5);
        assert_eq!(value["holidays"][0]["name"], "Nieuwjaarsdag");
    }

    #[test]
    fn ics_feed_has_one_all_day_event_per_request() {
        let planner = Planner::demo();

        let out = export(&planner, ExportFormat::Ics).unwrap();

        assert!(out.contains("BEGIN:VCALENDAR"));
        assert_eq!(out.matches("BEGIN:VEVENT").count(), 5);
        assert!(out.contains("UID:vakantie-1@verlof"));
        assert!(out.contains("SUMMARY:Vakantie Jan Jansen"));
        assert!(out.contains("DTSTART;VALUE=DATE:20250405"));
        // Inclusive 2025-04-12 end becomes an exclusive DTEND a day later.
        assert!(out.contains("DTEND;VALUE=DATE:20250413"));
        assert!(out.contains("DESCRIPTION:Voorjaarsvakantie"));
    }

    #[test]
    fn ics_marks_unapproved_requests_tentative() {
        let planner = Planner::demo();

        let out = export(&planner, ExportFormat::Ics).unwrap();

        // Three of the five demo requests still lack approvals.
        assert_eq!(out.matches("STATUS:TENTATIVE").count(), 3);
        assert!(!out.contains("STATUS:CONFIRMED"));
    }
}
