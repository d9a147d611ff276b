//! Key bindings. Keys map to [`Action`]s here; what an action does to the
//! state is `app`'s business.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{Action, App, Direction, Scale, View};

pub fn handle_event(app: &App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => None,
    }
}

fn handle_key(app: &App, key: KeyEvent) -> Option<Action> {
    if app.any_modal_open() {
        return modal_key(key);
    }
    match app.view {
        View::AddVacation => form_key(key),
        View::Calendar | View::Team => browse_key(key),
    }
}

/// Modals see keys first; navigation underneath stays frozen.
fn modal_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(Direction::Down)),
        KeyCode::Char('g') => Some(Action::Approve),
        _ => None,
    }
}

fn form_key(key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Some(Action::FormCancel),
        (KeyCode::Enter, _) => Some(Action::FormSubmit),
        (KeyCode::Tab, _) | (KeyCode::Down, _) => Some(Action::FormNext),
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => Some(Action::FormPrev),
        (KeyCode::Backspace, _) => Some(Action::FormBackspace),
        (KeyCode::Delete, _) => Some(Action::FormDelete),
        (KeyCode::Left, _) => Some(Action::FormLeft),
        (KeyCode::Right, _) => Some(Action::FormRight),
        (KeyCode::Home, _) => Some(Action::FormHome),
        (KeyCode::End, _) => Some(Action::FormEnd),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            Some(Action::FormInput(c))
        }
        _ => None,
    }
}

fn browse_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('1') => Some(Action::ShowCalendar),
        KeyCode::Char('2') => Some(Action::ShowTeam),
        KeyCode::Char('a') => Some(Action::OpenForm),
        KeyCode::Char('m') => Some(Action::SetScale(Scale::Month)),
        KeyCode::Char('y') => Some(Action::SetScale(Scale::Year)),
        KeyCode::Char('e') => Some(Action::Export),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(Direction::Right)),
        KeyCode::PageUp | KeyCode::Char('p') => Some(Action::PrevPage),
        KeyCode::PageDown | KeyCode::Char('n') => Some(Action::NextPage),
        KeyCode::Enter => Some(Action::Activate),
        _ => None,
    }
}
