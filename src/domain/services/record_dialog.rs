#[cfg(test)]
#[path = "record_dialog_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Constraint;
use ratatui::prelude::Direction;
use ratatui::prelude::Layout;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use strum::IntoEnumIterator;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Draft;
use crate::domain::models::DraftField;
use crate::domain::models::FieldKind;
use crate::domain::models::Record;
use crate::domain::models::TextArea;

const DATE_TIME_HINT: &str = "YYYY-MM-DDTHH:MM";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(i64),
}

impl DialogMode {
    pub fn title(&self) -> &'static str {
        return match self {
            DialogMode::Create => "Add record",
            DialogMode::Edit(_) => "Edit record",
        };
    }

    pub fn submit_label(&self) -> &'static str {
        return match self {
            DialogMode::Create => "Add",
            DialogMode::Edit(_) => "Save",
        };
    }
}

fn field_title(field: DraftField) -> String {
    if field.kind() == FieldKind::DateTime {
        return format!("{} ({DATE_TIME_HINT})", field.label());
    }

    return field.label().to_string();
}

/// Modal form over a draft. Dropping it discards the draft.
pub struct RecordDialog<'a> {
    pub mode: DialogMode,
    fields: Vec<(DraftField, tui_textarea::TextArea<'a>)>,
    focus: usize,
}

impl<'a> RecordDialog<'a> {
    fn with_draft(mode: DialogMode, draft: &Draft) -> RecordDialog<'a> {
        let fields = DraftField::iter()
            .map(|field| {
                return (field, TextArea::field(&field_title(field), draft.get(field)));
            })
            .collect();

        let mut dialog = RecordDialog {
            mode,
            fields,
            focus: 0,
        };
        dialog.sync_focus();

        return dialog;
    }

    /// Add mode starts from an all-empty draft.
    pub fn create() -> RecordDialog<'a> {
        return RecordDialog::with_draft(DialogMode::Create, &Draft::default());
    }

    /// Edit mode copies all eight editable fields of the record.
    pub fn edit(record: &Record) -> RecordDialog<'a> {
        return RecordDialog::with_draft(DialogMode::Edit(record.id), &record.fields);
    }

    pub fn draft(&self) -> Draft {
        let mut draft = Draft::default();
        for (field, textarea) in self.fields.iter() {
            draft.set(*field, &TextArea::value(textarea));
        }

        return draft;
    }

    pub fn focused_field(&self) -> DraftField {
        return self.fields[self.focus].0;
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
        self.sync_focus();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        self.sync_focus();
    }

    pub fn input(&mut self, input: Input) {
        let (field, textarea) = &mut self.fields[self.focus];
        match input {
            Input {
                key: Key::Char(_),
                ctrl: true,
                ..
            } => {}
            Input {
                key: Key::Char(c), ..
            } => {
                if field.kind().accepts(c) {
                    textarea.input(input);
                }
            }
            _ => {
                textarea.input(input);
            }
        }
    }

    fn sync_focus(&mut self) {
        let focus = self.focus;
        for (idx, (field, textarea)) in self.fields.iter_mut().enumerate() {
            TextArea::set_focus(textarea, &field_title(*field), idx == focus);
        }
    }

    fn popup_rect(rect: Rect, height: u16) -> Rect {
        let width = rect.width.saturating_sub(4).min(80);
        let height = height.min(rect.height);

        return Rect {
            x: rect.x + (rect.width - width) / 2,
            y: rect.y + (rect.height - height) / 2,
            width,
            height,
        };
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        let field_count = self.fields.len() as u16;
        let popup = RecordDialog::popup_rect(rect, field_count * 3 + 3);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.mode.title());

        frame.render_widget(Clear, popup);
        frame.render_widget(block.clone(), popup);

        let mut constraints = self
            .fields
            .iter()
            .map(|_| return Constraint::Length(3))
            .collect::<Vec<Constraint>>();
        constraints.push(Constraint::Length(1));

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(block.inner(popup));

        for (idx, (_, textarea)) in self.fields.iter().enumerate() {
            frame.render_widget(textarea.widget(), layout[idx]);
        }

        frame.render_widget(
            Paragraph::new(format!(
                "Enter: {}   Esc: Cancel   Tab/Shift+Tab: Next/previous field",
                self.mode.submit_label()
            ))
            .style(Style::default().fg(Color::DarkGray)),
            layout[self.fields.len()],
        );
    }
}
