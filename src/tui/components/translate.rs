//! # Translation Screen
//!
//! One source text, one result. Ctrl+D flips the direction, Ctrl+Y copies
//! the result to the clipboard.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::TranslateState;
use crate::tui::component::Component;
use crate::tui::components::chat::SPINNER_FRAMES;
use crate::tui::components::input_field::InputField;

pub struct TranslateScreen<'a> {
    pub translate: &'a TranslateState,
    pub input: &'a InputField,
    pub spinner_frame: usize,
}

impl Component for TranslateScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [header_area, input_area, result_area, hint_area] =
            Layout::vertical([Length(2), Length(3), Min(5), Length(1)]).areas(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Terjman AI",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.translate.direction.label(),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ]);
        frame.render_widget(header, header_area);

        self.input.render(frame, input_area, "Source", true);

        let result_line = if self.translate.in_flight {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            Line::from(Span::styled(
                format!("{spinner} Translating..."),
                Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
            ))
        } else {
            match &self.translate.translated {
                Some(text) => Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(Color::Green),
                )),
                None => Line::from(Span::styled(
                    "The translation will appear here.",
                    Style::default().add_modifier(Modifier::DIM),
                )),
            }
        };

        let result = Paragraph::new(result_line)
            .block(Block::bordered().title("Translation"))
            .wrap(Wrap { trim: false });
        frame.render_widget(result, result_area);

        frame.render_widget(
            Line::from(Span::styled(
                "Enter: translate | Ctrl+D: switch direction | Ctrl+Y: copy result",
                Style::default().add_modifier(Modifier::DIM),
            )),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_translate_screen_draws_with_result() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TranslateState::new();
        state.translated = Some("Salam sahbi".to_string());

        let input = InputField::new("Type in English...");
        let mut screen = TranslateScreen {
            translate: &state,
            input: &input,
            spinner_frame: 0,
        };
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
    }
}
