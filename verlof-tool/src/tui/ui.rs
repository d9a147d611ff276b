//! TUI rendering with ratatui.
//!
//! Render functions take `&App` and never mutate it; everything they show
//! is recomputed from the planner each frame.

use chrono::{Datelike, NaiveDate};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};
use verlof_core::{MonthGrid, Vacation, year_grids};

use crate::locale;

use super::app::{App, DateInfo, FormField, Scale, View};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with tabs
            Constraint::Min(5),    // Active view
            Constraint::Length(3), // Key hints / status
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.view {
        View::Calendar => match app.scale {
            Scale::Month => render_month(frame, app, chunks[1]),
            Scale::Year => render_year(frame, app, chunks[1]),
        },
        View::Team => render_team(frame, app, chunks[1]),
        View::AddVacation => render_form(frame, app, chunks[1]),
    }
    render_hints(frame, app, chunks[2]);

    // Overlays; the date modal sits under the other two.
    if let Some(info) = app.date_info {
        render_date_modal(frame, app, info);
    }
    if let Some(id) = app.detail {
        render_detail_modal(frame, app, id);
    }
    if let Some(id) = app.approval {
        render_approval_modal(frame, app, id);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Teamvakantie-planner ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(25)])
        .split(inner);

    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Style::default().fg(Color::DarkGray))
        }
    };
    let tabs = Line::from(vec![
        tab("Kalender", app.view != View::Team),
        Span::raw("   "),
        tab("Team", app.view == View::Team),
    ]);
    frame.render_widget(Paragraph::new(tabs), halves[0]);

    let me = app.planner.current_user();
    let user = Line::from(vec![
        Span::styled(
            format!("({}) ", me.avatar),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(me.name.clone()),
    ]);
    frame.render_widget(Paragraph::new(user).alignment(Alignment::Right), halves[1]);
}

fn render_month(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", locale::month_title(app.cursor)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(inner);

    let grid = MonthGrid::of(app.cursor);
    let header = Row::new(
        locale::WEEKDAYS_SHORT
            .iter()
            .map(|d| Cell::from(*d))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let row_height = cell_height(sections[0], grid.weeks().count());
    let rows: Vec<Row> = grid
        .weeks()
        .map(|week| {
            let mut cells: Vec<Cell> = week.iter().map(|day| day_cell(app, *day)).collect();
            cells.resize(7, Cell::from(""));
            Row::new(cells).height(row_height)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Ratio(1, 7); 7])
        .header(header)
        .column_spacing(1);
    frame.render_widget(table, sections[0]);

    frame.render_widget(Paragraph::new(legend_line()), sections[1]);
}

/// Rows share the space under the weekday header, at least two lines each.
fn cell_height(area: Rect, weeks: usize) -> u16 {
    let available = area.height.saturating_sub(1);
    (available / weeks.max(1) as u16).clamp(2, 5)
}

fn day_cell<'a>(app: &'a App, day: Option<NaiveDate>) -> Cell<'a> {
    let Some(date) = day else {
        return Cell::from("");
    };

    let is_holiday = app.planner.holidays().contains(date);
    let mut number_style = Style::default();
    if is_holiday {
        number_style = number_style.fg(locale::HOLIDAY_COLOR);
    }
    if date == app.today {
        number_style = number_style
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED);
    }
    if date == app.cursor {
        number_style = number_style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    let mut lines = vec![Line::from(Span::styled(
        format!("{:>2}", date.day()),
        number_style,
    ))];

    if let Some(name) = app.planner.holidays().name_of(date) {
        lines.push(Line::from(Span::styled(
            name,
            Style::default()
                .fg(locale::HOLIDAY_COLOR)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    // At most three request chips fit a cell; the rest collapse into a counter.
    let vacations = app.planner.vacations_for_date(date);
    for vacation in vacations.iter().take(3) {
        let label = app
            .planner
            .member(vacation.requester)
            .map(|m| format!("{} {}", m.avatar, m.first_name()))
            .unwrap_or_else(|| locale::UNKNOWN_MEMBER.to_string());
        lines.push(Line::from(Span::styled(
            label,
            Style::default()
                .bg(locale::status_color(vacation.status))
                .fg(Color::Black),
        )));
    }
    if vacations.len() > 3 {
        lines.push(Line::from(Span::styled(
            format!("+{} meer", vacations.len() - 3),
            Style::default().fg(Color::DarkGray),
        )));
    }

    Cell::from(Text::from(lines))
}

fn render_year(frame: &mut Frame, app: &App, area: Rect) {
    let year = app.cursor.year();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", year));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(inner);

    let quarters = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(sections[0]);

    let grids = year_grids(year);
    for (quarter, quarter_area) in quarters.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*quarter_area);
        for (column, column_area) in columns.iter().enumerate() {
            render_mini_month(frame, app, &grids[quarter * 3 + column], *column_area);
        }
    }

    frame.render_widget(Paragraph::new(legend_line()), sections[1]);
}

fn render_mini_month(frame: &mut Frame, app: &App, grid: &MonthGrid, area: Rect) {
    let (year, month) = (grid.year(), grid.month());
    let selected = month == app.year_cursor;
    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", locale::month_name(month)), title_style));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    let letters = locale::WEEKDAYS_LETTER
        .iter()
        .map(|l| Span::styled(format!("{:>2} ", l), Style::default().fg(Color::DarkGray)))
        .collect::<Vec<_>>();
    lines.push(Line::from(letters));

    for week in grid.weeks() {
        let mut spans: Vec<Span> = Vec::new();
        for day in week {
            spans.push(match day {
                None => Span::raw("   "),
                Some(date) => mini_day_span(app, *date),
            });
        }
        lines.push(Line::from(spans));
    }

    let vacations = app.planner.vacations_in_month(year, month);
    let holidays = app.planner.holidays().in_month(year, month).count();
    let mut counts: Vec<Span> = Vec::new();
    if vacations > 0 {
        counts.push(Span::styled(
            format!("{} vakantie(s) ", vacations),
            Style::default().fg(Color::Blue),
        ));
    }
    if holidays > 0 {
        counts.push(Span::styled(
            format!("{} feestdag(en)", holidays),
            Style::default().fg(locale::HOLIDAY_COLOR),
        ));
    }
    if !counts.is_empty() {
        lines.push(Line::from(counts));
    }

    frame.render_widget(Paragraph::new(Text::from(lines)), inner);
}

fn mini_day_span(app: &App, date: NaiveDate) -> Span<'static> {
    let mut style = Style::default();
    if app.planner.holidays().contains(date) {
        style = style.fg(locale::HOLIDAY_COLOR);
    } else if !app.planner.vacations_for_date(date).is_empty() {
        style = style.fg(Color::Green);
    }
    if date == app.today {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    Span::styled(format!("{:>2} ", date.day()), style)
}

fn render_team(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Team Overzicht ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0usize;
    let mut row = 0usize;

    for member in app.planner.members() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("({}) ", member.avatar),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                member.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", member.role),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        let requests = app.planner.vacations_of(member.id);
        if requests.is_empty() {
            lines.push(Line::from(Span::styled(
                "   Geen geplande vakanties",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        for vacation in requests {
            let (done, required) = app.planner.approval_progress(vacation);
            let current = row == app.team_cursor;
            if current {
                selected_line = lines.len();
            }
            let marker = if current { " > " } else { "   " };
            let mut line_style = Style::default();
            if current {
                line_style = line_style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(vec![
                Span::styled(marker.to_string(), line_style),
                Span::styled(locale::period(vacation.start, vacation.end), line_style),
                Span::styled("  ", line_style),
                Span::styled(
                    locale::status_label(vacation.status),
                    line_style.fg(locale::status_color(vacation.status)),
                ),
                Span::styled(
                    format!("  {}/{} goedkeuringen", done, required),
                    line_style.fg(Color::DarkGray),
                ),
            ]));
            row += 1;
        }
        lines.push(Line::from(""));
    }

    let visible = inner.height.saturating_sub(1) as usize;
    let scroll = selected_line.saturating_sub(visible.saturating_sub(1)) as u16;
    let paragraph = Paragraph::new(Text::from(lines)).scroll((scroll, 0));
    frame.render_widget(paragraph, inner);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let panel = centered_rect(60, 70, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Nieuwe Vakantie Toevoegen ");
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_field(frame, app, FormField::Start, "Startdatum (JJJJ-MM-DD)", rows[0]);
    render_field(frame, app, FormField::End, "Einddatum (JJJJ-MM-DD)", rows[1]);
    render_field(frame, app, FormField::Notes, "Opmerkingen", rows[2]);

    if let Some(error) = &app.form.error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )),
            rows[3],
        );
    }
}

fn render_field(frame: &mut Frame, app: &App, field: FormField, label: &str, area: Rect) {
    let focused = app.form.focus == field;
    let value = match field {
        FormField::Start => &app.form.start,
        FormField::End => &app.form.end,
        FormField::Notes => &app.form.notes,
    };

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(label.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(value.value.clone()), inner);

    if focused {
        let column = value.value[..value.cursor].chars().count() as u16;
        frame.set_cursor_position((inner.x + column, inner.y));
    }
}

fn render_date_modal(frame: &mut Frame, app: &App, info: DateInfo) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Vakanties op {} ", locale::short_date(info.date)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top_lines = date_modal_intro(app, info.date);
    let vacations = app.planner.vacations_for_date(info.date);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(top_lines.len() as u16), Constraint::Min(0)])
        .split(inner);
    frame.render_widget(Paragraph::new(Text::from(top_lines)), sections[0]);

    let items: Vec<ListItem> = vacations
        .iter()
        .map(|vacation| {
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(
                    locale::member_name(&app.planner, vacation.requester).to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::raw(locale::period(vacation.start, vacation.end)),
                    Span::raw("  "),
                    Span::styled(
                        locale::status_label(vacation.status),
                        Style::default().fg(locale::status_color(vacation.status)),
                    ),
                ]),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(info.selected));
    frame.render_stateful_widget(list, sections[1], &mut state);
}

/// Lines above the date modal's request list: a holiday banner when the
/// date is one, a placeholder when it has neither a holiday nor requests.
fn date_modal_intro(app: &App, date: NaiveDate) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(name) = app.planner.holidays().name_of(date) {
        lines.push(Line::from(Span::styled(
            format!("Feestdag: {}", name),
            Style::default()
                .fg(locale::HOLIDAY_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Officiële Nederlandse feestdag",
            Style::default()
                .fg(locale::HOLIDAY_COLOR)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    } else if app.planner.vacations_for_date(date).is_empty() {
        lines.push(Line::from(Span::styled(
            "Geen vakanties gepland op deze datum.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

fn render_detail_modal(frame: &mut Frame, app: &App, id: verlof_core::VacationId) {
    let Some(vacation) = app.planner.vacation(id) else {
        return;
    };
    let area = centered_rect(55, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title(" Vakantie Details ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let approvals = if vacation.approved_by.is_empty() {
        "Nog niemand".to_string()
    } else {
        format!("{} teamleden", vacation.approved_by.len())
    };

    let mut lines = vec![
        detail_line("Medewerker:", locale::member_name(&app.planner, vacation.requester)),
        detail_line("Periode:", &locale::period(vacation.start, vacation.end)),
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                locale::status_label(vacation.status),
                Style::default().fg(locale::status_color(vacation.status)),
            ),
        ]),
        detail_line("Goedgekeurd door:", &approvals),
    ];
    if !vacation.notes.is_empty() {
        lines.push(detail_line("Opmerkingen:", &vacation.notes));
    }
    lines.push(Line::from(""));
    lines.push(approve_hint(app, vacation));

    frame.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }),
        inner,
    );
}

fn render_approval_modal(frame: &mut Frame, app: &App, id: verlof_core::VacationId) {
    let Some(vacation) = app.planner.vacation(id) else {
        return;
    };
    let area = centered_rect(55, 70, frame.area());
    frame.render_widget(Clear, area);

    let title = format!(
        " Vakantie van {} ",
        locale::member_name(&app.planner, vacation.requester)
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(vec![
            Span::raw(locale::period(vacation.start, vacation.end)),
            Span::raw("  "),
            Span::styled(
                locale::status_label(vacation.status),
                Style::default().fg(locale::status_color(vacation.status)),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Goedgekeurd door:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let approvers = app.planner.approvers(vacation);
    if approvers.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Nog niemand heeft goedgekeurd",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    for member in approvers {
        lines.push(Line::from(Span::styled(
            format!("  ({}) {}", member.avatar, member.name),
            Style::default().fg(Color::Green),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Wachten op goedkeuring van:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let pending = app.planner.pending_approvers(vacation);
    if pending.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Geen wachtende goedkeuringen",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    for member in pending {
        lines.push(Line::from(Span::styled(
            format!("  ({}) {}", member.avatar, member.name),
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(""));
    lines.push(approve_hint(app, vacation));

    frame.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }),
        inner,
    );
}

fn detail_line(label: &'static str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", label), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ])
}

fn approve_hint(app: &App, vacation: &Vacation) -> Line<'static> {
    let me = app.planner.current_user().id;
    if app.planner.can_approve(vacation, me) {
        Line::from(vec![
            Span::styled("g", Style::default().fg(Color::Yellow)),
            Span::raw(" Goedkeuren"),
        ])
    } else if vacation.has_approval_from(me) {
        Line::from(Span::styled(
            "Je hebt deze vakantie al goedgekeurd",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from("")
    }
}

fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(status) = &app.status_line {
        frame.render_widget(
            Paragraph::new(Span::styled(
                status.clone(),
                Style::default().fg(Color::Yellow),
            )),
            inner,
        );
        return;
    }

    let pairs: &[(&str, &str)] = if app.date_info.is_some() {
        &[("↑↓", "Kiezen"), ("Enter", "Openen"), ("Esc", "Sluiten")]
    } else if app.detail.is_some() || app.approval.is_some() {
        &[("g", "Goedkeuren"), ("Esc", "Sluiten")]
    } else {
        match (app.view, app.scale) {
            (View::AddVacation, _) => &[
                ("Tab", "Volgend veld"),
                ("Enter", "Toevoegen"),
                ("Esc", "Annuleren"),
            ],
            (View::Team, _) => &[
                ("↑↓", "Verzoek"),
                ("Enter", "Goedkeuring"),
                ("1", "Kalender"),
                ("a", "Aanvragen"),
                ("e", "Exporteren"),
                ("q", "Stoppen"),
            ],
            (View::Calendar, Scale::Month) => &[
                ("←↑↓→", "Dag"),
                ("Enter", "Daginfo"),
                ("n/p", "Maand"),
                ("y", "Jaar"),
                ("2", "Team"),
                ("a", "Aanvragen"),
                ("e", "Exporteren"),
                ("q", "Stoppen"),
            ],
            (View::Calendar, Scale::Year) => &[
                ("←↑↓→", "Maand"),
                ("Enter", "Openen"),
                ("n/p", "Jaar"),
                ("m", "Maand"),
                ("2", "Team"),
                ("a", "Aanvragen"),
                ("e", "Exporteren"),
                ("q", "Stoppen"),
            ],
        }
    };

    let mut spans: Vec<Span> = Vec::new();
    for (key, label) in pairs {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {}  ", label)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn legend_line() -> Line<'static> {
    let swatch = |color: Color| Span::styled("■ ", Style::default().fg(color));
    Line::from(vec![
        Span::styled("Legenda:  ", Style::default().fg(Color::DarkGray)),
        swatch(Color::Green),
        Span::raw("Goedgekeurd  "),
        swatch(Color::Yellow),
        Span::raw("In afwachting  "),
        swatch(Color::Gray),
        Span::raw("Aangemaakt  "),
        swatch(locale::HOLIDAY_COLOR),
        Span::raw("Feestdag"),
    ])
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    use verlof_core::Planner;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app() -> App {
        App::new(Planner::demo(), date(2025, 4, 15))
    }

    fn intro_text(app: &App, date: NaiveDate) -> String {
        date_modal_intro(app, date)
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn holiday_banner_replaces_the_empty_placeholder() {
        let app = app();

        // Bevrijdingsdag has no requests, but it is not an empty date.
        let text = intro_text(&app, date(2025, 5, 5));

        assert!(text.contains("Feestdag: Bevrijdingsdag"));
        assert!(text.contains("Officiële Nederlandse feestdag"));
        assert!(!text.contains("Geen vakanties gepland"));
    }

    #[test]
    fn empty_dates_get_a_placeholder() {
        let app = app();

        let text = intro_text(&app, date(2025, 4, 3));

        assert_eq!(text, "Geen vakanties gepland op deze datum.");
    }

    #[test]
    fn dates_with_requests_get_no_intro() {
        let app = app();

        assert!(date_modal_intro(&app, date(2025, 4, 16)).is_empty());
    }
}
