mod app;
mod input;
mod ui;

use std::io;
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::{
    event,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use verlof_core::Planner;

pub use app::App;

use crate::error::VlfError;

pub fn run(planner: Planner, today: NaiveDate) -> Result<(), VlfError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(planner, today);

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<(), VlfError> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            if let Some(action) = input::handle_event(app, event) {
                app.apply(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
