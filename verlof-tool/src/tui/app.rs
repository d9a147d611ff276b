//! TUI application state machine.
//!
//! All UI state lives in [`App`]; every change goes through
//! [`App::apply`] as an [`Action`]. Key bindings live in `input`, so the
//! transitions here can be exercised directly in tests.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use verlof_core::{Planner, VacationId, next_month, next_year, prev_month, prev_year, shift_days};

use crate::export;

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Calendar,
    Team,
    AddVacation,
}

/// Calendar zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Start,
    End,
    Notes,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Start => FormField::End,
            FormField::End => FormField::Notes,
            FormField::Notes => FormField::Start,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Start => FormField::Notes,
            FormField::End => FormField::Start,
            FormField::Notes => FormField::End,
        }
    }
}

/// Everything the user can do, independent of key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ShowCalendar,
    ShowTeam,
    OpenForm,
    SetScale(Scale),
    Move(Direction),
    PrevPage,
    NextPage,
    Activate,
    CloseModal,
    Approve,
    Export,
    FormInput(char),
    FormBackspace,
    FormDelete,
    FormLeft,
    FormRight,
    FormHome,
    FormEnd,
    FormNext,
    FormPrev,
    FormSubmit,
    FormCancel,
}

/// One text field with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub value: String,
    pub cursor: usize,
}

impl TextField {
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.value[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.value.len());
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// State of the request form.
#[derive(Debug, Clone, Default)]
pub struct VacationForm {
    pub start: TextField,
    pub end: TextField,
    pub notes: TextField,
    pub focus: FormField,
    pub error: Option<String>,
}

impl VacationForm {
    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            FormField::Start => &mut self.start,
            FormField::End => &mut self.end,
            FormField::Notes => &mut self.notes,
        }
    }

    pub fn reset(&mut self) {
        self.start.clear();
        self.end.clear();
        self.notes.clear();
        self.focus = FormField::Start;
        self.error = None;
    }
}

/// Date modal state: the day being inspected plus the list selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInfo {
    pub date: NaiveDate,
    pub selected: usize,
}

/// Application state.
pub struct App {
    pub planner: Planner,
    pub view: View,
    pub scale: Scale,
    /// Selected day; its month and year decide what the calendar shows.
    pub cursor: NaiveDate,
    pub today: NaiveDate,
    /// Selected month (1-12) in the year view.
    pub year_cursor: u32,
    /// Selected row in the team view's flattened request list.
    pub team_cursor: usize,
    pub detail: Option<VacationId>,
    pub approval: Option<VacationId>,
    pub date_info: Option<DateInfo>,
    pub form: VacationForm,
    /// Transient feedback shown in place of the key hints.
    pub status_line: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(planner: Planner, today: NaiveDate) -> Self {
        Self {
            planner,
            view: View::Calendar,
            scale: Scale::Month,
            cursor: today,
            today,
            year_cursor: today.month(),
            team_cursor: 0,
            detail: None,
            approval: None,
            date_info: None,
            form: VacationForm::default(),
            status_line: None,
            should_quit: false,
        }
    }

    pub fn any_modal_open(&self) -> bool {
        self.detail.is_some() || self.approval.is_some() || self.date_info.is_some()
    }

    /// Requests shown in the team view, one row per request, roster order.
    pub fn team_rows(&self) -> Vec<VacationId> {
        self.planner
            .members()
            .iter()
            .flat_map(|m| self.planner.vacations_of(m.id))
            .map(|v| v.id)
            .collect()
    }

    /// Applies one transition. Every state change funnels through here.
    pub fn apply(&mut self, action: Action) {
        self.status_line = None;

        match action {
            Action::Quit => self.should_quit = true,
            Action::ShowCalendar => self.view = View::Calendar,
            Action::ShowTeam => {
                self.view = View::Team;
                self.clamp_team_cursor();
            }
            Action::OpenForm => {
                self.form.reset();
                self.view = View::AddVacation;
            }
            Action::SetScale(scale) => {
                if scale == Scale::Year {
                    self.year_cursor = self.cursor.month();
                }
                self.scale = scale;
            }
            Action::Move(dir) => self.move_cursor(dir),
            Action::PrevPage => self.page(false),
            Action::NextPage => self.page(true),
            Action::Activate => self.activate(),
            Action::CloseModal => self.close_topmost(),
            Action::Approve => self.approve_from_modal(),
            Action::Export => self.export_ics(),
            Action::FormInput(c) => self.form.focused_mut().insert(c),
            Action::FormBackspace => self.form.focused_mut().backspace(),
            Action::FormDelete => self.form.focused_mut().delete(),
            Action::FormLeft => self.form.focused_mut().left(),
            Action::FormRight => self.form.focused_mut().right(),
            Action::FormHome => self.form.focused_mut().home(),
            Action::FormEnd => self.form.focused_mut().end(),
            Action::FormNext => self.form.focus = self.form.focus.next(),
            Action::FormPrev => self.form.focus = self.form.focus.prev(),
            Action::FormSubmit => self.submit_form(),
            Action::FormCancel => {
                self.form.reset();
                self.view = View::Calendar;
            }
        }
    }

    fn move_cursor(&mut self, dir: Direction) {
        if let Some(info) = self.date_info {
            let len = self.planner.vacations_for_date(info.date).len();
            if let Some(info) = self.date_info.as_mut() {
                match dir {
                    Direction::Up => info.selected = info.selected.saturating_sub(1),
                    Direction::Down if info.selected + 1 < len => info.selected += 1,
                    _ => {}
                }
            }
            return;
        }
        if self.detail.is_some() || self.approval.is_some() {
            return;
        }

        match self.view {
            View::Calendar => match self.scale {
                Scale::Month => {
                    let delta = match dir {
                        Direction::Left => -1,
                        Direction::Right => 1,
                        Direction::Up => -7,
                        Direction::Down => 7,
                    };
                    // The cursor stays inside the visible month; paging
                    // is the only way to leave it.
                    let next = shift_days(self.cursor, delta);
                    if next.year() == self.cursor.year() && next.month() == self.cursor.month() {
                        self.cursor = next;
                    }
                }
                Scale::Year => {
                    // Mini months sit in a 3-wide raster.
                    let next = match dir {
                        Direction::Left => self.year_cursor.saturating_sub(1),
                        Direction::Right => self.year_cursor + 1,
                        Direction::Up => self.year_cursor.saturating_sub(3),
                        Direction::Down => self.year_cursor + 3,
                    };
                    if (1..=12).contains(&next) {
                        self.year_cursor = next;
                    }
                }
            },
            View::Team => {
                let rows = self.team_rows().len();
                match dir {
                    Direction::Up => self.team_cursor = self.team_cursor.saturating_sub(1),
                    Direction::Down if self.team_cursor + 1 < rows => self.team_cursor += 1,
                    _ => {}
                }
            }
            View::AddVacation => {}
        }
    }

    fn page(&mut self, forward: bool) {
        if self.any_modal_open() || self.view != View::Calendar {
            return;
        }
        self.cursor = match (self.scale, forward) {
            (Scale::Month, false) => prev_month(self.cursor),
            (Scale::Month, true) => next_month(self.cursor),
            (Scale::Year, false) => prev_year(self.cursor),
            (Scale::Year, true) => next_year(self.cursor),
        };
    }

    fn activate(&mut self) {
        if let Some(info) = self.date_info {
            // Picking a request in the date modal swaps it for the detail
            // modal.
            let picked = self
                .planner
                .vacations_for_date(info.date)
                .get(info.selected)
                .map(|v| v.id);
            if let Some(id) = picked {
                self.date_info = None;
                self.detail = Some(id);
            }
            return;
        }
        if self.detail.is_some() || self.approval.is_some() {
            return;
        }

        match self.view {
            View::Calendar => match self.scale {
                Scale::Month => {
                    // Only days with something to show get a modal.
                    let has_requests = !self.planner.vacations_for_date(self.cursor).is_empty();
                    let is_holiday = self.planner.holidays().contains(self.cursor);
                    if has_requests || is_holiday {
                        self.date_info = Some(DateInfo {
                            date: self.cursor,
                            selected: 0,
                        });
                    }
                }
                Scale::Year => {
                    self.cursor = NaiveDate::from_ymd_opt(self.cursor.year(), self.year_cursor, 1)
                        .unwrap_or(self.cursor);
                    self.scale = Scale::Month;
                }
            },
            View::Team => {
                if let Some(id) = self.team_rows().get(self.team_cursor).copied() {
                    self.approval = Some(id);
                }
            }
            View::AddVacation => self.submit_form(),
        }
    }

    fn close_topmost(&mut self) {
        if self.approval.is_some() {
            self.approval = None;
        } else if self.detail.is_some() {
            self.detail = None;
        } else if self.date_info.is_some() {
            self.date_info = None;
        }
    }

    /// Approve out of whichever modal is showing a request. The approver
    /// is always the current user; a recorded approval dismisses the modal
    /// it came from.
    fn approve_from_modal(&mut self) {
        let Some(id) = self.approval.or(self.detail) else {
            return;
        };
        let me = self.planner.current_user().id;
        let eligible = self
            .planner
            .vacation(id)
            .map(|v| self.planner.can_approve(v, me))
            .unwrap_or(false);
        if eligible {
            self.planner.approve(id, me);
            if self.approval.is_some() {
                self.approval = None;
            } else {
                self.detail = None;
            }
        }
    }

    fn submit_form(&mut self) {
        let start_text = self.form.start.value.trim().to_string();
        let end_text = self.form.end.value.trim().to_string();

        // Unfilled forms are ignored rather than reported.
        if start_text.is_empty() || end_text.is_empty() {
            return;
        }

        match (parse_date(&start_text), parse_date(&end_text)) {
            (Some(start), Some(end)) if start <= end => {
                let notes = self.form.notes.value.trim().to_string();
                self.planner.add_vacation(start, end, notes);
                self.form.reset();
                self.view = View::Calendar;
            }
            (Some(_), Some(_)) => {
                self.form.error = Some("Einddatum ligt voor startdatum".to_string());
            }
            _ => {
                self.form.error = Some("Datum als JJJJ-MM-DD, bijvoorbeeld 2025-07-01".to_string());
            }
        }
    }

    fn export_ics(&mut self) {
        match export::write_ics(&self.planner, Path::new(export::ICS_FILENAME)) {
            Ok(()) => {
                self.status_line = Some(format!("Geëxporteerd naar {}", export::ICS_FILENAME));
            }
            Err(e) => {
                self.status_line = Some(format!("Export mislukt: {}", e));
            }
        }
    }

    fn clamp_team_cursor(&mut self) {
        let rows = self.team_rows().len();
        if rows == 0 {
            self.team_cursor = 0;
        } else if self.team_cursor >= rows {
            self.team_cursor = rows - 1;
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use verlof_core::VacationStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app() -> App {
        App::new(Planner::demo(), date(2025, 4, 15))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.apply(Action::FormInput(c));
        }
    }

    #[test]
    fn starts_on_todays_month_in_calendar_view() {
        let app = app();

        assert_eq!(app.view, View::Calendar);
        assert_eq!(app.scale, Scale::Month);
        assert_eq!(app.cursor, date(2025, 4, 15));
        assert!(!app.any_modal_open());
    }

    #[test]
    fn month_cursor_stays_inside_the_month() {
        let mut app = app();
        app.cursor = date(2025, 4, 1);

        app.apply(Action::Move(Direction::Left));
        assert_eq!(app.cursor, date(2025, 4, 1));
        app.apply(Action::Move(Direction::Up));
        assert_eq!(app.cursor, date(2025, 4, 1));

        app.apply(Action::Move(Direction::Right));
        assert_eq!(app.cursor, date(2025, 4, 2));
        app.apply(Action::Move(Direction::Down));
        assert_eq!(app.cursor, date(2025, 4, 9));
    }

    #[test]
    fn paging_changes_the_month() {
        let mut app = app();

        app.apply(Action::NextPage);
        assert_eq!(app.cursor, date(2025, 5, 1));

        app.apply(Action::PrevPage);
        app.apply(Action::PrevPage);
        assert_eq!(app.cursor, date(2025, 3, 1));
    }

    #[test]
    fn year_scale_pages_whole_years() {
        let mut app = app();
        app.apply(Action::SetScale(Scale::Year));

        assert_eq!(app.year_cursor, 4);

        app.apply(Action::NextPage);
        assert_eq!(app.cursor, date(2026, 1, 1));

        app.apply(Action::PrevPage);
        app.apply(Action::PrevPage);
        assert_eq!(app.cursor, date(2024, 1, 1));
    }

    #[test]
    fn year_cursor_moves_in_the_raster() {
        let mut app = app();
        app.apply(Action::SetScale(Scale::Year));

        app.apply(Action::Move(Direction::Right));
        assert_eq!(app.year_cursor, 5);
        app.apply(Action::Move(Direction::Down));
        assert_eq!(app.year_cursor, 8);
        app.apply(Action::Move(Direction::Up));
        app.apply(Action::Move(Direction::Up));
        assert_eq!(app.year_cursor, 2);
        app.apply(Action::Move(Direction::Up));
        assert_eq!(app.year_cursor, 2);
    }

    #[test]
    fn activating_a_mini_month_zooms_in() {
        let mut app = app();
        app.apply(Action::SetScale(Scale::Year));
        app.apply(Action::Move(Direction::Right));

        app.apply(Action::Activate);

        assert_eq!(app.scale, Scale::Month);
        assert_eq!(app.cursor, date(2025, 5, 1));
    }

    #[test]
    fn date_modal_needs_content() {
        let mut app = app();

        // 2025-04-03: no requests, no holiday.
        app.cursor = date(2025, 4, 3);
        app.apply(Action::Activate);
        assert_eq!(app.date_info, None);

        // Good Friday has no requests but is a holiday.
        app.cursor = date(2025, 4, 18);
        app.apply(Action::Activate);
        assert_eq!(
            app.date_info,
            Some(DateInfo {
                date: date(2025, 4, 18),
                selected: 0
            })
        );
    }

    #[test]
    fn date_modal_chains_into_the_detail_modal() {
        let mut app = app();
        app.cursor = date(2025, 4, 16);

        app.apply(Action::Activate);
        assert!(app.date_info.is_some());

        app.apply(Action::Activate);
        assert_eq!(app.date_info, None);
        assert_eq!(app.detail, Some(2));
    }

    #[test]
    fn navigation_is_blocked_under_modals() {
        let mut app = app();
        app.cursor = date(2025, 4, 16);
        app.apply(Action::Activate);

        app.apply(Action::PrevPage);
        app.apply(Action::NextPage);

        assert_eq!(app.cursor, date(2025, 4, 16));
    }

    #[test]
    fn close_peels_modals_one_at_a_time() {
        let mut app = app();
        app.detail = Some(1);
        app.approval = Some(2);
        app.date_info = Some(DateInfo {
            date: date(2025, 4, 16),
            selected: 0,
        });

        app.apply(Action::CloseModal);
        assert_eq!(app.approval, None);
        assert_eq!(app.detail, Some(1));

        app.apply(Action::CloseModal);
        assert_eq!(app.detail, None);

        app.apply(Action::CloseModal);
        assert_eq!(app.date_info, None);
    }

    #[test]
    fn team_rows_follow_roster_order() {
        let mut app = app();
        app.apply(Action::ShowTeam);

        assert_eq!(app.team_rows(), vec![1, 2, 3, 4, 5]);

        app.apply(Action::Move(Direction::Down));
        app.apply(Action::Move(Direction::Down));
        app.apply(Action::Activate);

        assert_eq!(app.approval, Some(3));
    }

    #[test]
    fn approving_from_the_modal_updates_the_planner() {
        let mut app = app();
        app.detail = Some(3);

        app.apply(Action::Approve);

        let v = app.planner.vacation(3).unwrap();
        assert_eq!(v.status, VacationStatus::Pending);
        assert_eq!(v.approved_by, vec![1]);
        // A recorded approval dismisses the modal it came from.
        assert_eq!(app.detail, None);
    }

    #[test]
    fn approving_closes_the_approval_modal() {
        let mut app = app();
        app.approval = Some(3);

        app.apply(Action::Approve);

        assert_eq!(app.planner.vacation(3).unwrap().approved_by, vec![1]);
        assert_eq!(app.approval, None);
    }

    #[test]
    fn approve_is_refused_when_ineligible() {
        let mut app = app();
        // Jan already approved request 2.
        app.detail = Some(2);

        app.apply(Action::Approve);

        assert_eq!(app.planner.vacation(2).unwrap().approved_by, vec![1, 3]);
        // Nothing happened, so the modal stays up.
        assert_eq!(app.detail, Some(2));
    }

    #[test]
    fn empty_form_submission_is_silently_ignored() {
        let mut app = app();
        app.apply(Action::OpenForm);

        app.apply(Action::FormSubmit);

        assert_eq!(app.view, View::AddVacation);
        assert_eq!(app.form.error, None);
        assert_eq!(app.planner.vacations().len(), 5);
    }

    #[test]
    fn form_files_a_request_and_returns_to_the_calendar() {
        let mut app = app();
        app.apply(Action::OpenForm);

        type_text(&mut app, "2025-07-01");
        app.apply(Action::FormNext);
        type_text(&mut app, "2025-07-04");
        app.apply(Action::FormNext);
        type_text(&mut app, "Zomer");
        app.apply(Action::FormSubmit);

        assert_eq!(app.view, View::Calendar);
        let v = app.planner.vacation(6).unwrap();
        assert_eq!(v.requester, 1);
        assert_eq!(v.status, VacationStatus::Created);
        assert_eq!(v.notes, "Zomer");
    }

    #[test]
    fn reversed_range_is_reported_on_the_form() {
        let mut app = app();
        app.apply(Action::OpenForm);

        type_text(&mut app, "2025-07-04");
        app.apply(Action::FormNext);
        type_text(&mut app, "2025-07-01");
        app.apply(Action::FormSubmit);

        assert_eq!(app.view, View::AddVacation);
        assert!(app.form.error.is_some());
        assert_eq!(app.planner.vacations().len(), 5);
    }

    #[test]
    fn unparseable_dates_are_reported_on_the_form() {
        let mut app = app();
        app.apply(Action::OpenForm);

        type_text(&mut app, "volgende week");
        app.apply(Action::FormNext);
        type_text(&mut app, "2025-07-01");
        app.apply(Action::FormSubmit);

        assert_eq!(app.view, View::AddVacation);
        assert!(app.form.error.is_some());
        assert_eq!(app.planner.vacations().len(), 5);
    }

    #[test]
    fn cancelling_the_form_discards_input() {
        let mut app = app();
        app.apply(Action::OpenForm);
        type_text(&mut app, "2025-07-01");

        app.apply(Action::FormCancel);
        assert_eq!(app.view, View::Calendar);

        app.apply(Action::OpenForm);
        assert_eq!(app.form.start.value, "");
    }

    #[test]
    fn text_fields_edit_at_char_boundaries() {
        let mut field = TextField::default();
        for c in "Itali".chars() {
            field.insert(c);
        }
        field.insert('ë');
        assert_eq!(field.value, "Italië");

        field.backspace();
        assert_eq!(field.value, "Itali");

        field.home();
        field.delete();
        field.insert('i');
        assert_eq!(field.value, "itali");

        field.end();
        field.left();
        field.insert('_');
        assert_eq!(field.value, "ital_i");
    }
}
