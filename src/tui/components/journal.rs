//! # Journal Screen
//!
//! The travel notebook: add a note with Enter, pick one with Up/Down,
//! delete it with Ctrl+X. The list mirrors the persisted file.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::JournalState;
use crate::tui::component::Component;
use crate::tui::components::input_field::InputField;

pub struct JournalScreen<'a> {
    pub journal: &'a JournalState,
    pub input: &'a InputField,
    /// Note selection (presentation state, owned by the TUI).
    pub cursor: usize,
}

impl Component for JournalScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [input_area, list_area, hint_area] =
            Layout::vertical([Length(3), Min(0), Length(1)]).areas(area);

        self.input.render(frame, input_area, "Add a note", true);

        if self.journal.notes.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "Your journal is empty for now.",
                Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
            )))
            .block(Block::bordered().title("Travel Journal"));
            frame.render_widget(empty, list_area);
        } else {
            let cursor = self.cursor.min(self.journal.notes.len() - 1);
            let mut lines = Vec::new();
            for (i, note) in self.journal.notes.iter().enumerate() {
                let selected = i == cursor;
                let marker = if selected { "> " } else { "  " };
                let style = if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(
                    format!("{marker}{}", note.text),
                    style,
                )));
                lines.push(Line::from(Span::styled(
                    format!("    {}", note.date),
                    Style::default().add_modifier(Modifier::DIM),
                )));
            }
            let list = Paragraph::new(lines)
                .block(Block::bordered().title("Travel Journal"))
                .wrap(Wrap { trim: false });
            frame.render_widget(list, list_area);
        }

        frame.render_widget(
            Line::from(Span::styled(
                "Enter: add | Up/Down: choose | Ctrl+X: delete",
                Style::default().add_modifier(Modifier::DIM),
            )),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::journal::JournalNote;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_journal_screen_draws_empty_and_filled() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut state = JournalState::new();
        let input = InputField::new("Add a note...");

        let mut screen = JournalScreen {
            journal: &state,
            input: &input,
            cursor: 0,
        };
        terminal.draw(|f| screen.render(f, f.area())).unwrap();

        state.notes.push(JournalNote {
            id: 1,
            text: "Visit the souk".to_string(),
            date: "3 March 2026".to_string(),
        });
        let mut screen = JournalScreen {
            journal: &state,
            input: &input,
            cursor: 5, // out of range: render clamps
        };
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
    }
}
