#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Screen;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;

fn render<B: Backend>(frame: &mut Frame<B>, app_state: &AppState<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1), Constraint::Min(1)])
        .split(frame.size());

    frame.render_widget(
        Paragraph::new(format!(
            "docsign {}   CTRL+L: Login   CTRL+T: Records   CTRL+C: Quit",
            app_state.route.path()
        ))
        .style(Style::default().fg(Color::DarkGray)),
        layout[0],
    );

    match app_state.screen() {
        Screen::Login => {
            app_state.login.render(frame, layout[1]);
        }
        Screen::Table => {
            app_state.table.render(frame, layout[1], &app_state.store);

            if let Some(dialog) = &app_state.dialog {
                dialog.render(frame, layout[1]);
            }
        }
        Screen::NotFound => {
            frame.render_widget(
                Paragraph::new("Nothing here").alignment(Alignment::Center),
                layout[1],
            );
        }
    }

    if let Some(notification) = &app_state.notification {
        let body = layout[1];
        let height = body.height.min(3);
        notification.render(
            frame,
            Rect {
                x: body.x,
                y: body.y + body.height - height,
                width: body.width,
                height,
            },
        );
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);

    app_state.sync_route(&tx)?;

    loop {
        terminal.draw(|frame| {
            render(frame, app_state);
        })?;

        let event = events.next().await?;
        if app_state.handle_event(event, &tx)? {
            break;
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::new(
        &Config::get(ConfigKey::StartPath),
        &Config::get(ConfigKey::Username),
    );

    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
