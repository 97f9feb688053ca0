use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use tui_textarea::CursorMove;

pub struct TextArea {}

impl<'a> TextArea {
    /// Single line input with a titled border. Focus is shown through the
    /// border style.
    pub fn field(title: &str, value: &str) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::new(vec![value.to_string()]);
        textarea.move_cursor(CursorMove::End);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_block(TextArea::block(title, false));

        return textarea;
    }

    pub fn set_focus(textarea: &mut tui_textarea::TextArea<'a>, title: &str, focused: bool) {
        textarea.set_block(TextArea::block(title, focused));
    }

    pub fn value(textarea: &tui_textarea::TextArea<'a>) -> String {
        return textarea.lines().join("");
    }

    pub fn block(title: &str, focused: bool) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .padding(Padding::new(1, 1, 0, 0));

        if focused {
            block = block
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Yellow));
        }

        return block;
    }
}
