//! Built-in demo data: a five-person team and its current leave requests.

use chrono::NaiveDate;

use crate::member::TeamMember;
use crate::vacation::{Vacation, VacationStatus};

/// The demo roster. The first entry doubles as the current user.
pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember::new(1, "Jan Jansen", "Developer", 'J'),
        TeamMember::new(2, "Emma de Vries", "Designer", 'E'),
        TeamMember::new(3, "Lucas Bakker", "Project Manager", 'L'),
        TeamMember::new(4, "Sophie Visser", "Marketing", 'S'),
        TeamMember::new(5, "Tim Hendriks", "Developer", 'T'),
    ]
}

/// Requests in every lifecycle stage, spread over April and May 2025.
pub fn vacations() -> Vec<Vacation> {
    vec![
        Vacation {
            id: 1,
            requester: 1,
            start: date(2025, 4, 5),
            end: date(2025, 4, 12),
            status: VacationStatus::Approved,
            approved_by: vec![2, 3, 4, 5],
            notes: "Voorjaarsvakantie".to_string(),
        },
        Vacation {
            id: 2,
            requester: 2,
            start: date(2025, 4, 15),
            end: date(2025, 4, 22),
            status: VacationStatus::Pending,
            approved_by: vec![1, 3],
            notes: "Stedentrip Barcelona".to_string(),
        },
        Vacation {
            id: 3,
            requester: 3,
            start: date(2025, 4, 25),
            end: date(2025, 4, 28),
            status: VacationStatus::Created,
            approved_by: vec![],
            notes: "Lang weekend weg".to_string(),
        },
        Vacation {
            id: 4,
            requester: 4,
            start: date(2025, 5, 10),
            end: date(2025, 5, 15),
            status: VacationStatus::Approved,
            approved_by: vec![1, 2, 3, 5],
            notes: "Vakantie Italië".to_string(),
        },
        Vacation {
            id: 5,
            requester: 5,
            start: date(2025, 5, 20),
            end: date(2025, 5, 27),
            status: VacationStatus::Pending,
            approved_by: vec![1, 2],
            notes: "Wandelvakantie Schotland".to_string(),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed table holds valid dates")
}
