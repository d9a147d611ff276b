//! Integration tests walking the demo data through full scenarios.

use chrono::NaiveDate;
use verlof_core::{MonthGrid, Planner, VacationStatus, year_grids};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn demo_data_shape() {
    let planner = Planner::demo();

    assert_eq!(planner.members().len(), 5);
    assert_eq!(planner.vacations().len(), 5);
    assert_eq!(planner.holidays().len(), 10);
    assert_eq!(planner.current_user().name, "Jan Jansen");
}

#[test]
fn request_lifecycle_from_created_to_approved() {
    let mut planner = Planner::demo();

    // Lucas' long weekend (request 3) starts untouched.
    let v = planner.vacation(3).unwrap();
    assert_eq!(v.status, VacationStatus::Created);
    assert!(v.approved_by.is_empty());

    planner.approve(3, 1);
    assert_eq!(planner.vacation(3).unwrap().status, VacationStatus::Pending);

    // Approvals from the rest of the team, one of them twice.
    planner.approve(3, 2);
    planner.approve(3, 2);
    planner.approve(3, 4);
    assert_eq!(planner.vacation(3).unwrap().status, VacationStatus::Pending);

    planner.approve(3, 5);
    let v = planner.vacation(3).unwrap();
    assert_eq!(v.status, VacationStatus::Approved);
    assert_eq!(v.approved_by, vec![1, 2, 4, 5]);

    // Unrelated requests were never touched.
    assert_eq!(planner.vacation(2).unwrap().status, VacationStatus::Pending);
}

#[test]
fn filing_a_request_extends_the_calendar() {
    let mut planner = Planner::demo();

    let id = planner.add_vacation(date(2025, 8, 4), date(2025, 8, 15), "Zomervakantie");

    assert_eq!(id, 6);
    assert_eq!(planner.vacations_for_date(date(2025, 8, 8)).len(), 1);
    assert_eq!(planner.vacations_in_month(2025, 8), 1);

    // Everyone but Jan has to sign off before it counts as approved.
    planner.approve(id, 2);
    planner.approve(id, 3);
    planner.approve(id, 4);
    assert_eq!(planner.vacation(id).unwrap().status, VacationStatus::Pending);
    planner.approve(id, 5);
    assert_eq!(
        planner.vacation(id).unwrap().status,
        VacationStatus::Approved
    );
}

#[test]
fn april_2025_layout_and_contents() {
    let planner = Planner::demo();
    let grid = MonthGrid::of(date(2025, 4, 1));

    // April 2025 starts on a Tuesday: one blank, then the 1st.
    assert_eq!(grid.cells()[0], None);
    assert_eq!(grid.cells()[1], Some(date(2025, 4, 1)));
    assert_eq!(grid.cells().last(), Some(&Some(date(2025, 4, 30))));

    // Easter weekend is marked, and Jan and Emma are away mid-month.
    assert_eq!(
        planner.holidays().name_of(date(2025, 4, 18)),
        Some("Goede Vrijdag")
    );
    let away: Vec<_> = planner
        .vacations_for_date(date(2025, 4, 12))
        .iter()
        .map(|v| v.requester)
        .collect();
    assert_eq!(away, vec![1]);
    assert!(planner.vacations_for_date(date(2025, 4, 16)).len() == 1);
}

#[test]
fn year_view_summaries() {
    let planner = Planner::demo();
    let grids = year_grids(2025);

    assert_eq!(grids.len(), 12);

    let vacation_counts: Vec<_> = grids
        .iter()
        .map(|g| planner.vacations_in_month(g.year(), g.month()))
        .collect();
    assert_eq!(vacation_counts, vec![0, 0, 0, 3, 2, 0, 0, 0, 0, 0, 0, 0]);

    let holiday_counts: Vec<_> = grids
        .iter()
        .map(|g| planner.holidays().in_month(g.year(), g.month()).count())
        .collect();
    assert_eq!(holiday_counts, vec![1, 0, 0, 3, 2, 2, 0, 0, 0, 0, 0, 2]);
}

#[test]
fn status_serializes_lowercase() {
    // Seed files and exports use the lowercase wire form.
    let json = serde_json::to_value(VacationStatus::Pending).unwrap();
    assert_eq!(json, serde_json::json!("pending"));

    let parsed: VacationStatus = serde_json::from_str("\"approved\"").unwrap();
    assert_eq!(parsed, VacationStatus::Approved);
}
