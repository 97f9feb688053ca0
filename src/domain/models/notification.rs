use std::time::Duration;
use std::time::Instant;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Failure;

pub const AUTO_HIDE: Duration = Duration::from_secs(6);

/// Transient, dismissible error message shown at the bottom of the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub failure: Failure,
    shown_at: Instant,
}

impl Notification {
    pub fn new(failure: Failure) -> Notification {
        return Notification {
            failure,
            shown_at: Instant::now(),
        };
    }

    pub fn message(&self) -> String {
        return self.failure.to_string();
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        return now.saturating_duration_since(self.shown_at) >= AUTO_HIDE;
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(format!("{} (Esc to dismiss)", self.message()))
                .style(Style::default().fg(Color::Red))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .padding(Padding::new(1, 1, 0, 0)),
                ),
            rect,
        );
    }
}
