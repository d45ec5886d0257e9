//! # Guestbook Screen
//!
//! Social feed with a post form. The feed is replaced wholesale on every
//! refresh; posting always triggers a refresh, successful or not.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::GuestbookState;
use crate::tui::component::Component;
use crate::tui::components::chat::SPINNER_FRAMES;
use crate::tui::components::input_field::InputField;

/// Which form field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestField {
    Name,
    Message,
}

impl GuestField {
    pub fn toggled(self) -> Self {
        match self {
            GuestField::Name => GuestField::Message,
            GuestField::Message => GuestField::Name,
        }
    }
}

pub struct GuestbookScreen<'a> {
    pub guestbook: &'a GuestbookState,
    pub name: &'a InputField,
    pub message: &'a InputField,
    pub focus: GuestField,
    pub scroll: &'a mut ScrollViewState,
    pub spinner_frame: usize,
}

impl Component for GuestbookScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [name_area, message_area, status_area, feed_area, hint_area] =
            Layout::vertical([Length(3), Length(3), Length(1), Min(0), Length(1)]).areas(area);

        self.name
            .render(frame, name_area, "Your name", self.focus == GuestField::Name);
        self.message.render(
            frame,
            message_area,
            "Share a moment",
            self.focus == GuestField::Message,
        );

        if self.guestbook.posting || self.guestbook.loading {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            let label = if self.guestbook.posting {
                "Posting..."
            } else {
                "Refreshing feed..."
            };
            frame.render_widget(
                Line::from(Span::styled(
                    format!("{spinner} {label}"),
                    Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
                )),
                status_area,
            );
        }

        self.render_feed(frame, feed_area);

        frame.render_widget(
            Line::from(Span::styled(
                "Enter: post | Up/Down: switch field | PgUp/PgDn: scroll | Ctrl+R: refresh",
                Style::default().add_modifier(Modifier::DIM),
            )),
            hint_area,
        );
    }
}

impl GuestbookScreen<'_> {
    fn render_feed(&mut self, frame: &mut Frame, area: Rect) {
        if self.guestbook.posts.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "Be the first to share a memory!",
                Style::default().add_modifier(Modifier::DIM),
            )))
            .block(Block::bordered().title("Guestbook"));
            frame.render_widget(empty, area);
            return;
        }

        let content_width = area.width.saturating_sub(1);
        let inner_width = content_width.saturating_sub(2);

        struct RenderedPost<'a> {
            paragraph: Paragraph<'a>,
            height: u16,
        }

        let posts: Vec<RenderedPost> = self
            .guestbook
            .posts
            .iter()
            .map(|post| {
                let paragraph = Paragraph::new(Line::from(Span::raw(post.content.clone())))
                    .block(
                        Block::bordered()
                            .title(format!("@{}", post.username))
                            .title_style(Style::default().fg(Color::Cyan)),
                    )
                    .wrap(Wrap { trim: false });
                let height = paragraph.line_count(inner_width) as u16;
                RenderedPost { paragraph, height }
            })
            .collect();

        let total_height: u16 = posts.iter().map(|p| p.height).sum();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for post in &posts {
            let rect = Rect::new(0, y_offset, content_width, post.height);
            scroll_view.render_widget(post.paragraph.clone(), rect);
            y_offset += post.height;
        }

        frame.render_stateful_widget(scroll_view, area, self.scroll);
    }
}
