#[cfg(test)]
#[path = "login_form_test.rs"]
mod tests;

use ratatui::prelude::Alignment;
use ratatui::prelude::Backend;
use ratatui::prelude::Constraint;
use ratatui::prelude::Direction;
use ratatui::prelude::Layout;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Credentials;
use crate::domain::models::Failure;
use crate::domain::models::TextArea;

const USERNAME_TITLE: &str = "Username";
const PASSWORD_TITLE: &str = "Password";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoginFocus {
    Username,
    Password,
}

pub struct LoginForm<'a> {
    username: tui_textarea::TextArea<'a>,
    password: tui_textarea::TextArea<'a>,
    pub focus: LoginFocus,
    pub error: Option<Failure>,
}

impl<'a> LoginForm<'a> {
    pub fn new(username: &str) -> LoginForm<'a> {
        let mut form = LoginForm {
            username: TextArea::field(USERNAME_TITLE, username),
            password: TextArea::field(PASSWORD_TITLE, ""),
            focus: LoginFocus::Username,
            error: None,
        };
        if !username.is_empty() {
            form.focus = LoginFocus::Password;
        }
        form.sync_focus();

        return form;
    }

    pub fn username(&self) -> String {
        return TextArea::value(&self.username);
    }

    pub fn password(&self) -> String {
        return TextArea::value(&self.password);
    }

    pub fn credentials(&self) -> Credentials {
        return Credentials::new(&self.username(), &self.password());
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginFocus::Username => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Username,
        };
        self.sync_focus();
    }

    pub fn input(&mut self, input: Input) {
        if let Input {
            key: Key::Char(_),
            ctrl: true,
            ..
        } = input
        {
            return;
        }

        match self.focus {
            LoginFocus::Username => self.username.input(input),
            LoginFocus::Password => self.password.input(input),
        };
    }

    fn sync_focus(&mut self) {
        TextArea::set_focus(
            &mut self.username,
            USERNAME_TITLE,
            self.focus == LoginFocus::Username,
        );
        TextArea::set_focus(
            &mut self.password,
            PASSWORD_TITLE,
            self.focus == LoginFocus::Password,
        );
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(rect);

        frame.render_widget(
            Paragraph::new("Sign in")
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            layout[0],
        );

        if let Some(error) = self.error {
            frame.render_widget(
                Paragraph::new(error.to_string())
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center),
                layout[1],
            );
        }

        frame.render_widget(self.username.widget(), layout[2]);

        let masked = "*".repeat(self.password().chars().count());
        frame.render_widget(
            Paragraph::new(masked).block(TextArea::block(
                PASSWORD_TITLE,
                self.focus == LoginFocus::Password,
            )),
            layout[3],
        );

        frame.render_widget(
            Paragraph::new("Tab to switch fields, Enter to sign in, Ctrl+C to quit")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            layout[4],
        );
    }
}
