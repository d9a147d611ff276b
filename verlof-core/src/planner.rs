use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::holiday::HolidayCalendar;
use crate::member::{MemberId, TeamMember};
use crate::seed;
use crate::vacation::{Vacation, VacationId, VacationStatus};

#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// The first roster entry acts as the current user, so a planner
    /// cannot be built over an empty roster.
    #[error("team roster is empty")]
    EmptyRoster,
    /// Members are looked up by id, so the roster must not repeat one.
    #[error("duplicate member id {0}")]
    DuplicateMemberId(MemberId),
    /// Requests are looked up and approved by id, so the list must not
    /// repeat one.
    #[error("duplicate vacation id {0}")]
    DuplicateVacationId(VacationId),
}

/// Central state: the roster, every leave request, and the holiday
/// calendar.
///
/// All mutation goes through [`Planner::approve`] and
/// [`Planner::add_vacation`]; everything a view shows is recomputed from
/// the current state, nothing derived is cached.
#[derive(Debug, Clone)]
pub struct Planner {
    members: Vec<TeamMember>,
    vacations: Vec<Vacation>,
    holidays: HolidayCalendar,
    current_user: MemberId,
}

impl Planner {
    /// Builds a planner over an existing roster and request list. The
    /// first roster entry becomes the current user. Both lists are
    /// keyed by id everywhere, so a repeated id on either is rejected.
    pub fn new(
        members: Vec<TeamMember>,
        vacations: Vec<Vacation>,
        holidays: HolidayCalendar,
    ) -> Result<Self, PlannerError> {
        let current_user = members.first().ok_or(PlannerError::EmptyRoster)?.id;
        let mut seen = HashSet::new();
        for member in &members {
            if !seen.insert(member.id) {
                return Err(PlannerError::DuplicateMemberId(member.id));
            }
        }
        let mut seen = HashSet::new();
        for vacation in &vacations {
            if !seen.insert(vacation.id) {
                return Err(PlannerError::DuplicateVacationId(vacation.id));
            }
        }
        Ok(Self {
            members,
            vacations,
            holidays,
            current_user,
        })
    }

    /// Planner over the built-in demo roster and requests.
    pub fn demo() -> Self {
        Self::new(seed::team(), seed::vacations(), HolidayCalendar::dutch_2025())
            .expect("demo seed data is valid")
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn vacations(&self) -> &[Vacation] {
        &self.vacations
    }

    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// The member acting in this session. Fixed at construction; there is
    /// no login or user switching.
    pub fn current_user(&self) -> &TeamMember {
        self.member(self.current_user)
            .expect("current user is always on the roster")
    }

    pub fn member(&self, id: MemberId) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn vacation(&self, id: VacationId) -> Option<&Vacation> {
        self.vacations.iter().find(|v| v.id == id)
    }

    /// Requests covering `date`, in the order they were created.
    pub fn vacations_for_date(&self, date: NaiveDate) -> Vec<&Vacation> {
        self.vacations.iter().filter(|v| v.contains(date)).collect()
    }

    /// Requests made by `member`, in the order they were created.
    pub fn vacations_of(&self, member: MemberId) -> Vec<&Vacation> {
        self.vacations
            .iter()
            .filter(|v| v.requester == member)
            .collect()
    }

    /// Number of requests touching month `month` (1-12) of `year`.
    pub fn vacations_in_month(&self, year: i32, month: u32) -> usize {
        self.vacations
            .iter()
            .filter(|v| v.touches_month(year, month))
            .count()
    }

    /// Records an approval and recomputes the request's status.
    ///
    /// Unknown ids, self-approval, and repeated approvals are ignored.
    /// Once every roster member other than the requester has approved, the
    /// status becomes [`VacationStatus::Approved`]; until then any
    /// approval leaves it [`VacationStatus::Pending`].
    pub fn approve(&mut self, vacation: VacationId, approver: MemberId) {
        let Some(idx) = self.vacations.iter().position(|v| v.id == vacation) else {
            debug!(vacation, approver, "approval for unknown vacation ignored");
            return;
        };
        let requester = self.vacations[idx].requester;
        if approver == requester {
            return;
        }
        if self.vacations[idx].has_approval_from(approver) {
            return;
        }

        self.vacations[idx].approved_by.push(approver);
        let unanimous = self
            .members
            .iter()
            .filter(|m| m.id != requester)
            .all(|m| self.vacations[idx].has_approval_from(m.id));
        self.vacations[idx].status = if unanimous {
            VacationStatus::Approved
        } else {
            VacationStatus::Pending
        };
        debug!(
            vacation,
            approver,
            status = ?self.vacations[idx].status,
            "approval recorded"
        );
    }

    /// Files a new request for the current user and returns its id.
    ///
    /// The id is one past the highest id already in the list, so it never
    /// collides with requests loaded from a seed file. Dates are stored as
    /// given, the form in front of this keeps nonsense ranges out.
    pub fn add_vacation(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
        notes: impl Into<String>,
    ) -> VacationId {
        let id = self.vacations.iter().map(|v| v.id).max().unwrap_or(0) + 1;
        self.vacations.push(Vacation {
            id,
            requester: self.current_user,
            start,
            end,
            status: VacationStatus::Created,
            approved_by: Vec::new(),
            notes: notes.into(),
        });
        debug!(id, %start, %end, "vacation requested");
        id
    }

    /// Whether `member` may still approve `vacation`: not their own
    /// request, not already approved by them, not already unanimous.
    pub fn can_approve(&self, vacation: &Vacation, member: MemberId) -> bool {
        member != vacation.requester
            && !vacation.has_approval_from(member)
            && vacation.status != VacationStatus::Approved
    }

    /// Members who approved, in the order the approvals arrived. Ids that
    /// are not on the roster are skipped.
    pub fn approvers(&self, vacation: &Vacation) -> Vec<&TeamMember> {
        vacation
            .approved_by
            .iter()
            .filter_map(|id| self.member(*id))
            .collect()
    }

    /// Roster members whose approval is still missing, in roster order.
    pub fn pending_approvers(&self, vacation: &Vacation) -> Vec<&TeamMember> {
        self.members
            .iter()
            .filter(|m| m.id != vacation.requester && !vacation.has_approval_from(m.id))
            .collect()
    }

    /// `(done, required)` approval counts. Only roster members count
    /// towards either side.
    pub fn approval_progress(&self, vacation: &Vacation) -> (usize, usize) {
        let mut done = 0;
        let mut required = 0;
        for m in &self.members {
            if m.id == vacation.requester {
                continue;
            }
            required += 1;
            if vacation.has_approval_from(m.id) {
                done += 1;
            }
        }
        (done, required)
    }
}
