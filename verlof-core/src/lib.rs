//! Verlof is a team vacation planner: members request leave, teammates
//! approve it, and a shared calendar keeps holidays and overlaps visible.
//!
//! Core concepts:
//! - **TeamMember**: a roster entry; the first one acts as the current user
//! - **Vacation**: a leave request over an inclusive date range
//! - **VacationStatus**: Created until someone approves, Pending until
//!   everyone has, then Approved
//! - **HolidayCalendar**: fixed national holidays shown alongside requests
//! - **MonthGrid**: a month laid out Monday-first for display
//! - **Planner**: owns the state and applies the approval rules
//!
//! # Example
//!
//! ```
//! use verlof_core::{Planner, VacationStatus};
//!
//! let mut planner = Planner::demo();
//!
//! // Lucas (3) wants a long weekend; the rest of the team signs off.
//! planner.approve(3, 1);
//! planner.approve(3, 2);
//! planner.approve(3, 4);
//! planner.approve(3, 5);
//!
//! let vacation = planner.vacation(3).unwrap();
//! assert_eq!(vacation.status, VacationStatus::Approved);
//! ```

pub mod grid;
pub mod holiday;
pub mod member;
pub mod planner;
pub mod seed;
pub mod vacation;

pub use grid::{
    MonthGrid, first_of_month, next_month, next_year, prev_month, prev_year, shift_days,
    year_grids,
};
pub use holiday::{Holiday, HolidayCalendar};
pub use member::{MemberId, TeamMember};
pub use planner::{Planner, PlannerError};
pub use vacation::{Vacation, VacationId, VacationStatus};
