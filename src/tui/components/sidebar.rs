//! # Sidebar and Navigation Overlay
//!
//! The sidebar lists every screen with the active one highlighted. The
//! overlay is the keyboard equivalent of the mobile menu: Tab opens it,
//! Up/Down or a digit picks a screen, and navigating closes it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::core::state::Screen;
use crate::tui::component::Component;

pub struct Sidebar {
    pub active: Screen,
}

impl Component for Sidebar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                " ZELIG",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                " Digital Morocco",
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::default(),
        ];

        for (i, screen) in Screen::ALL.iter().enumerate() {
            let label = format!(" {} {}", i + 1, screen.label());
            let style = if *screen == self.active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(label, style)));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Tab: menu",
            Style::default().add_modifier(Modifier::DIM),
        )));

        let paragraph = Paragraph::new(lines).block(Block::bordered());
        frame.render_widget(paragraph, area);
    }
}

/// Modal screen picker. `cursor` is presentation state owned by the TUI.
pub struct NavMenu {
    pub active: Screen,
    pub cursor: usize,
}

impl Component for NavMenu {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = 30u16;
        let height = Screen::ALL.len() as u16 + 2;
        let [centered] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(centered);

        let lines: Vec<Line> = Screen::ALL
            .iter()
            .enumerate()
            .map(|(i, screen)| {
                let marker = if *screen == self.active { "*" } else { " " };
                let label = format!("{marker} {} {}", i + 1, screen.label());
                let style = if i == self.cursor {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(label, style))
            })
            .collect();

        frame.render_widget(Clear, centered);
        let menu = Paragraph::new(lines).block(
            Block::bordered()
                .title("Go to")
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(menu, centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_sidebar_renders_all_screens() {
        let backend = TestBackend::new(24, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut sidebar = Sidebar {
            active: Screen::Guide,
        };
        terminal
            .draw(|f| sidebar.render(f, f.area()))
            .unwrap();
    }

    #[test]
    fn test_nav_menu_renders_in_small_area() {
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut menu = NavMenu {
            active: Screen::Journal,
            cursor: 2,
        };
        terminal.draw(|f| menu.render(f, f.area())).unwrap();
    }
}
