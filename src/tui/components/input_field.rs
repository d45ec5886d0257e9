//! # InputField Component
//!
//! Single-line text input shared by every screen that takes typed input.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, cursor movement, paste)
//! - Handle submission (Enter)
//!
//! The buffer is internal state; the owning screen decides whether to
//! clear it after a submission is accepted (a rejected submission keeps
//! the text so the user can fix it).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// User pressed Enter. Carries the current buffer contents.
    Submit(String),
    /// Text content changed.
    Changed,
}

pub struct InputField {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Byte offset of the cursor within `buffer`.
    cursor: usize,
    /// Shown dimmed while the buffer is empty.
    placeholder: &'static str,
}

impl InputField {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            placeholder,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    /// Render into a bordered one-line box. `focused` controls the border
    /// style and whether the cursor is drawn.
    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(
                self.placeholder,
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(Span::raw(self.buffer.clone()))
        };

        let paragraph = Paragraph::new(line).block(
            Block::bordered()
                .title(title.to_string())
                .border_style(border_style),
        );
        frame.render_widget(paragraph, area);

        if focused {
            let prefix_width = self.buffer[..self.cursor].width() as u16;
            let inner_width = area.width.saturating_sub(2);
            frame.set_cursor_position((
                area.x + 1 + prefix_width.min(inner_width.saturating_sub(1)),
                area.y + 1,
            ));
        }
    }
}

impl EventHandler for InputField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FieldEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(FieldEvent::Changed)
            }
            TuiEvent::Paste(data) => {
                // Single-line field: newlines become spaces
                let sanitized: String = data
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.buffer.insert_str(self.cursor, &sanitized);
                self.cursor += sanitized.len();
                Some(FieldEvent::Changed)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.buffer.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::Submit => Some(FieldEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(field: &mut InputField, text: &str) {
        for c in text.chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_builds_buffer() {
        let mut field = InputField::new("...");
        type_str(&mut field, "souk");
        assert_eq!(field.buffer, "souk");
    }

    #[test]
    fn test_backspace_respects_char_boundaries() {
        let mut field = InputField::new("...");
        type_str(&mut field, "café");
        field.handle_event(&TuiEvent::Backspace);
        assert_eq!(field.buffer, "caf");
    }

    #[test]
    fn test_cursor_movement_and_insert() {
        let mut field = InputField::new("...");
        type_str(&mut field, "Fs");
        field.handle_event(&TuiEvent::CursorLeft);
        field.handle_event(&TuiEvent::InputChar('e'));
        assert_eq!(field.buffer, "Fes");
    }

    #[test]
    fn test_submit_carries_buffer_and_keeps_it() {
        let mut field = InputField::new("...");
        type_str(&mut field, "hello");
        let event = field.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(FieldEvent::Submit("hello".to_string())));
        assert_eq!(field.buffer, "hello", "caller decides when to clear");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut field = InputField::new("...");
        field.handle_event(&TuiEvent::Paste("two\nlines".to_string()));
        assert_eq!(field.buffer, "two lines");
    }
}
