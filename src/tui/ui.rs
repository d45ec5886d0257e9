//! Top-level layout: title bar, sidebar, the active screen, status line,
//! and the navigation overlay when open.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ChatScreen, GuestbookScreen, JournalScreen, NavMenu, SafetyScreen, Sidebar, TourScreen,
    TranslateScreen,
};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, body_area, status_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [sidebar_area, screen_area] =
        Layout::horizontal([Length(24), Min(0)]).areas(body_area);

    frame.render_widget(
        Line::from(Span::styled(
            format!(" Zelig — {}", app.screen.label()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        title_area,
    );

    Sidebar { active: app.screen }.render(frame, sidebar_area);

    match app.screen {
        Screen::Guide => ChatScreen {
            chat: &app.chat,
            input: &tui.chat_input,
            scroll: &mut tui.chat_scroll,
            spinner_frame: tui.spinner_frame,
        }
        .render(frame, screen_area),
        Screen::Translate => TranslateScreen {
            translate: &app.translate,
            input: &tui.translate_input,
            spinner_frame: tui.spinner_frame,
        }
        .render(frame, screen_area),
        Screen::Tour => TourScreen {
            tour: &app.tour,
            cursor: tui.tour_cursor,
        }
        .render(frame, screen_area),
        Screen::Safety => SafetyScreen {
            safety: &app.safety,
            input: &tui.safety_input,
            spinner_frame: tui.spinner_frame,
        }
        .render(frame, screen_area),
        Screen::Journal => JournalScreen {
            journal: &app.journal,
            input: &tui.journal_input,
            cursor: tui.journal_cursor,
        }
        .render(frame, screen_area),
        Screen::Guestbook => GuestbookScreen {
            guestbook: &app.guestbook,
            name: &tui.guest_name,
            message: &tui.guest_message,
            focus: tui.guest_focus,
            scroll: &mut tui.guest_scroll,
            spinner_frame: tui.spinner_frame,
        }
        .render(frame, screen_area),
    }

    frame.render_widget(
        Line::from(Span::styled(
            format!(" {}", app.status_message),
            Style::default().add_modifier(Modifier::DIM),
        )),
        status_area,
    );

    if app.menu_open {
        NavMenu {
            active: app.screen,
            cursor: tui.menu_cursor,
        }
        .render(frame, frame.area());
    }
}
