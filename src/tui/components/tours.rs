//! # Tour Screen
//!
//! List view over the static catalog with drill-down into a day-by-day
//! detail view. Pure local state, no I/O.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::TourState;
use crate::core::tours::{self, Tour};
use crate::tui::component::Component;

pub struct TourScreen<'a> {
    pub tour: &'a TourState,
    /// List selection (presentation state, owned by the TUI).
    pub cursor: usize,
}

impl Component for TourScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.tour.selected {
            Some(tour) => render_detail(frame, area, tour),
            None => self.render_list(frame, area),
        }
    }
}

impl TourScreen<'_> {
    fn render_list(&self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [list_area, hint_area] = Layout::vertical([Min(0), Length(1)]).areas(area);

        let mut lines = vec![
            Line::from(Span::styled(
                "The Grand Tour",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        for (i, tour) in tours::catalog().iter().enumerate() {
            let selected = i == self.cursor;
            let marker = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("{marker}{} — {}, {}", tour.title, tour.duration, tour.level),
                style,
            )));
            lines.push(Line::from(Span::styled(
                format!("    {}", tour.description),
                Style::default().add_modifier(Modifier::DIM),
            )));
            lines.push(Line::default());
        }

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            list_area,
        );
        frame.render_widget(
            Line::from(Span::styled(
                "Up/Down: choose | Enter: details",
                Style::default().add_modifier(Modifier::DIM),
            )),
            hint_area,
        );
    }
}

fn render_detail(frame: &mut Frame, area: Rect, tour: &Tour) {
    use Constraint::{Length, Min};
    let [body_area, hint_area] = Layout::vertical([Min(0), Length(1)]).areas(area);

    let mut lines = vec![
        Line::from(Span::styled(
            tour.title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} — {}", tour.duration, tour.level),
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::default(),
        Line::from(Span::styled(
            tour.description,
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
    ];

    for (i, day) in tour.itinerary.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>2}. ", i + 1),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("{} — {}", day.day, day.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::raw(format!("      {}", day.description))));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::bordered())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, body_area);
    frame.render_widget(
        Line::from(Span::styled(
            "Esc: back to the list",
            Style::default().add_modifier(Modifier::DIM),
        )),
        hint_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_list_view_draws() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = TourState::new();
        let mut screen = TourScreen {
            tour: &state,
            cursor: 1,
        };
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
    }

    #[test]
    fn test_detail_view_draws_every_day() {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TourState::new();
        state.selected = tours::find("desert");
        let mut screen = TourScreen {
            tour: &state,
            cursor: 0,
        };
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
    }
}
