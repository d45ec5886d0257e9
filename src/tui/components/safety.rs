//! # Safety Screen
//!
//! City risk lookup. The report is replaced wholesale on every scan; a
//! failed scan shows the neutral empty state, never stale data. Unknown
//! risk colors render at the most severe level.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::types::{RiskColor, SecurityReport};
use crate::core::state::SafetyState;
use crate::tui::component::Component;
use crate::tui::components::chat::SPINNER_FRAMES;
use crate::tui::components::input_field::InputField;

/// Map a report color to its rendered severity. Unknown values fall back
/// to the most severe rendering — fail safe, not fail quiet.
pub fn severity_color(color: RiskColor) -> Color {
    match color {
        RiskColor::Green => Color::Green,
        RiskColor::Orange => Color::Yellow,
        RiskColor::Red | RiskColor::Unknown => Color::Red,
    }
}

pub struct SafetyScreen<'a> {
    pub safety: &'a SafetyState,
    pub input: &'a InputField,
    pub spinner_frame: usize,
}

impl Component for SafetyScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [input_area, report_area, emergency_area] =
            Layout::vertical([Length(3), Min(6), Length(4)]).areas(area);

        self.input
            .render(frame, input_area, "Scan a destination", true);

        if self.safety.in_flight {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            let scanning = Paragraph::new(Line::from(Span::styled(
                format!("{spinner} Scanning {}...", self.safety.place),
                Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
            )))
            .block(Block::bordered());
            frame.render_widget(scanning, report_area);
        } else {
            match &self.safety.report {
                Some(report) => render_report(frame, report_area, report),
                None => {
                    let empty = Paragraph::new(Line::from(Span::styled(
                        "No report yet. Enter a city and press Enter.",
                        Style::default().add_modifier(Modifier::DIM),
                    )))
                    .block(Block::bordered());
                    frame.render_widget(empty, report_area);
                }
            }
        }

        render_emergency_numbers(frame, emergency_area);
    }
}

fn render_report(frame: &mut Frame, area: Rect, report: &SecurityReport) {
    let color = severity_color(report.risk_color);

    let city = match &report.city_ar {
        Some(local) => format!("{} ({})", report.city, local),
        None => report.city.clone(),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(city, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", report.risk_level.to_uppercase()),
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(Span::raw(report.recommendation.clone())),
        Line::default(),
        Line::from(Span::styled(
            format!("Based on {} local press sources.", report.sources_count),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    if let Some(hits) = &report.hits {
        let counts: Vec<String> = hits.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        lines.push(Line::from(Span::styled(
            format!("Mentions — {}", counts.join(", ")),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::bordered()
                .title("Risk report")
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_emergency_numbers(frame: &mut Frame, area: Rect) {
    let cards = [
        ("Police", "19", Color::Red),
        ("Ambulance", "15", Color::Yellow),
        ("Gendarmerie", "177", Color::Blue),
    ];
    let areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

    for ((title, number, color), card_area) in cards.into_iter().zip(areas.iter()) {
        let card = Paragraph::new(Line::from(Span::styled(
            number,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .centered()
        .block(Block::bordered().title(title));
        frame.render_widget(card, *card_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_unknown_color_renders_most_severe() {
        assert_eq!(severity_color(RiskColor::Unknown), Color::Red);
        assert_eq!(severity_color(RiskColor::Red), Color::Red);
        assert_eq!(severity_color(RiskColor::Orange), Color::Yellow);
        assert_eq!(severity_color(RiskColor::Green), Color::Green);
    }

    #[test]
    fn test_safety_screen_draws_full_report() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut state = SafetyState::new();
        state.report = Some(SecurityReport {
            city: "Tangier".to_string(),
            city_ar: Some("طنجة".to_string()),
            risk_level: "Low".to_string(),
            risk_color: RiskColor::Green,
            recommendation: "Enjoy the medina.".to_string(),
            sources_count: 12,
            hits: Some([("crime".to_string(), 1)].into_iter().collect()),
        });

        let input = InputField::new("City (e.g. Tangier)...");
        let mut screen = SafetyScreen {
            safety: &state,
            input: &input,
            spinner_frame: 0,
        };
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
    }

    #[test]
    fn test_safety_screen_draws_empty_state() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = SafetyState::new();
        let input = InputField::new("City...");
        let mut screen = SafetyScreen {
            safety: &state,
            input: &input,
            spinner_frame: 0,
        };
        terminal.draw(|f| screen.render(f, f.area())).unwrap();
    }
}
