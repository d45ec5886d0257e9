//! # Guide Screen
//!
//! Scrollable transcript of the guide conversation plus the question
//! input. Guide turns are rendered from Markdown; user turns are plain
//! text.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::{ChatState, Speaker};
use crate::tui::component::Component;
use crate::tui::components::input_field::InputField;
use crate::tui::markdown::render_markdown;

pub const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

struct RenderedTurn<'a> {
    paragraph: Paragraph<'a>,
    height: u16,
}

impl RenderedTurn<'_> {
    fn new(speaker: Speaker, text: &str, content_width: u16) -> Self {
        let (title, style) = match speaker {
            Speaker::User => ("you", Style::default().fg(Color::Cyan)),
            Speaker::Guide => ("zelig", Style::default().fg(Color::Green)),
        };

        let body: Text = match speaker {
            Speaker::Guide => Text::from(render_markdown(text)),
            Speaker::User => Text::from(text.trim().to_string()),
        };

        let paragraph = Paragraph::new(body)
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(style.add_modifier(Modifier::DIM))
                    .title_style(style),
            )
            .style(style)
            .wrap(Wrap { trim: false });

        let inner_width = content_width.saturating_sub(2);
        let height = paragraph.line_count(inner_width) as u16;

        RenderedTurn { paragraph, height }
    }
}

pub struct ChatScreen<'a> {
    pub chat: &'a ChatState,
    pub input: &'a InputField,
    pub scroll: &'a mut ScrollViewState,
    pub spinner_frame: usize,
}

impl Component for ChatScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [transcript_area, status_area, input_area] =
            Layout::vertical([Min(0), Length(1), Length(3)]).areas(area);

        self.render_transcript(frame, transcript_area);

        if self.chat.in_flight {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            frame.render_widget(
                Line::from(Span::styled(
                    format!("{spinner} Zelig is typing..."),
                    Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
                )),
                status_area,
            );
        }

        self.input
            .render(frame, input_area, "Ask your question", true);
    }
}

impl ChatScreen<'_> {
    fn render_transcript(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1);

        let turns: Vec<RenderedTurn> = self
            .chat
            .transcript
            .iter()
            .map(|turn| RenderedTurn::new(turn.speaker, &turn.text, content_width))
            .collect();

        let total_height: u16 = turns.iter().map(|t| t.height).sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for turn in &turns {
            let rect = Rect::new(0, y_offset, content_width, turn.height);
            scroll_view.render_widget(turn.paragraph.clone(), rect);
            y_offset += turn.height;
        }

        frame.render_stateful_widget(scroll_view, area, self.scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::WELCOME_MESSAGE;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_rendered_turn_height_includes_borders() {
        let turn = RenderedTurn::new(Speaker::User, "Single line", 80);
        // 1 line of content + 2 for borders = 3
        assert_eq!(turn.height, 3);
    }

    #[test]
    fn test_chat_screen_draws_welcome_state() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let chat = ChatState::new();
        assert_eq!(chat.transcript[0].text, WELCOME_MESSAGE);

        let input = InputField::new("Ask away...");
        let mut scroll = ScrollViewState::new();
        let mut screen = ChatScreen {
            chat: &chat,
            input: &input,
            scroll: &mut scroll,
            spinner_frame: 0,
        };
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
    }
}
