#[cfg(test)]
#[path = "record_table_test.rs"]
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
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Cell;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Row;
use ratatui::widgets::Table;
use ratatui::widgets::TableState;
use ratatui::Frame;
use strum::IntoEnumIterator;

use super::RecordStore;
use crate::domain::models::DraftField;
use crate::domain::models::Record;

const ACTIONS_LABEL: &str = "Actions";
const ROW_ACTIONS: &str = "e: edit  d: delete";
const COLUMN_WIDTHS: [Constraint; 9] = [Constraint::Ratio(1, 9); 9];

/// Row cursor over the store. Kept in bounds as the store changes.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RecordTable {
    selected: Option<usize>,
}

impl RecordTable {
    pub fn selected_index(&self) -> Option<usize> {
        return self.selected;
    }

    pub fn selected<'s>(&self, store: &'s RecordStore) -> Option<&'s Record> {
        return self.selected.and_then(|idx| return store.records().get(idx));
    }

    pub fn up(&mut self) {
        if let Some(idx) = self.selected {
            self.selected = Some(idx.saturating_sub(1));
        }
    }

    pub fn down(&mut self, store: &RecordStore) {
        if store.is_empty() {
            self.selected = None;
            return;
        }

        let next = self.selected.map(|idx| return idx + 1).unwrap_or(0);
        self.selected = Some(next.min(store.len() - 1));
    }

    pub fn last(&mut self, store: &RecordStore) {
        self.selected = store.len().checked_sub(1);
    }

    pub fn clamp(&mut self, store: &RecordStore) {
        if store.is_empty() {
            self.selected = None;
            return;
        }

        self.selected = Some(self.selected.unwrap_or(0).min(store.len() - 1));
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, store: &RecordStore) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Min(1), Constraint::Length(1)])
            .split(rect);

        if store.loading {
            frame.render_widget(
                Paragraph::new("Loading records...")
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("Document signatures"),
                    )
                    .alignment(Alignment::Center),
                layout[0],
            );
            return;
        }

        let mut header_cells = DraftField::iter()
            .map(|field| return Cell::from(field.label()))
            .collect::<Vec<Cell>>();
        header_cells.push(Cell::from(ACTIONS_LABEL));
        let header = Row::new(header_cells)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .height(2);

        let rows = store
            .records()
            .iter()
            .map(|record| {
                let mut cells = record
                    .fields
                    .values()
                    .into_iter()
                    .map(|value| return Cell::from(value.to_string()))
                    .collect::<Vec<Cell>>();
                cells.push(
                    Cell::from(ROW_ACTIONS).style(Style::default().fg(Color::DarkGray)),
                );
                return Row::new(cells);
            })
            .collect::<Vec<Row>>();

        let table = Table::new(rows)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Document signatures ({})", store.len())),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .widths(&COLUMN_WIDTHS);

        let mut state = TableState::default();
        state.select(self.selected);
        frame.render_stateful_widget(table, layout[0], &mut state);

        frame.render_widget(
            Paragraph::new(
                "a: Add record   e/Enter: Edit   d: Delete   r: Reload   Up/Down: Select   Ctrl+C: Quit",
            )
            .style(Style::default().fg(Color::DarkGray)),
            layout[1],
        );
    }
}
