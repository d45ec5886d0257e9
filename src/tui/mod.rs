//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a request in flight): draws every ~80ms for a smooth
//!   spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Async completions
//!
//! Backend calls run in spawned tokio tasks that send completion actions
//! over an `mpsc` channel back into this loop. The reducer drops any
//! completion whose owning screen is no longer active, so a response that
//! lands after the user switched screens never mutates a discarded view.

pub mod clipboard;
mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use log::{debug, info, warn};
use tui_scrollview::ScrollViewState;

use crate::api::client::{GuideApi, HttpGuideApi};
use crate::api::types::Direction;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::journal::FileNoteStore;
use crate::core::state::{App, Screen};
use crate::core::tours;
use crate::tui::component::EventHandler;
use crate::tui::components::{FieldEvent, GuestField, InputField};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic).
/// Recreated whenever the active screen changes — screens re-mount.
pub struct TuiState {
    pub menu_cursor: usize,
    pub chat_input: InputField,
    pub chat_scroll: ScrollViewState,
    pub translate_input: InputField,
    pub safety_input: InputField,
    pub journal_input: InputField,
    pub journal_cursor: usize,
    pub tour_cursor: usize,
    pub guest_name: InputField,
    pub guest_message: InputField,
    pub guest_focus: GuestField,
    pub guest_scroll: ScrollViewState,
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            menu_cursor: 0,
            chat_input: InputField::new("Ask your question..."),
            chat_scroll: ScrollViewState::new(),
            translate_input: InputField::new("Hello friend..."),
            safety_input: InputField::new("City (e.g. Tangier)..."),
            journal_input: InputField::new("Add a note..."),
            journal_cursor: 0,
            tour_cursor: 0,
            guest_name: InputField::new("Your name"),
            guest_message: InputField::new("What did you discover today?"),
            guest_focus: GuestField::Name,
            guest_scroll: ScrollViewState::new(),
            spinner_frame: 0,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api: Arc<dyn GuideApi> = match HttpGuideApi::new(&config.base_url) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };
    let notes = Arc::new(FileNoteStore::new(config.notes_path.clone()));
    let mut app = App::new(api, notes);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for completion actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    loop {
        let animating = app.chat.in_flight
            || app.translate.in_flight
            || app.safety.in_flight
            || app.guestbook.loading
            || app.guestbook.posting;

        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        if first_event.is_some() {
            needs_redraw = true;
        }
        // Process first event + drain all pending events before next draw
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(tui_event, TuiEvent::Resize) {
                continue;
            }

            let Some(action) = handle_event(&tui_event, &app, &mut tui) else {
                continue;
            };

            let previous_screen = app.screen;
            let clear_on_accept = clear_target(&action);
            let effect = update(&mut app, action);

            if effect != Effect::None {
                match clear_on_accept {
                    Some(ClearTarget::ChatInput) => {
                        tui.chat_input.clear();
                        tui.chat_scroll.scroll_to_bottom();
                    }
                    Some(ClearTarget::JournalInput) => tui.journal_input.clear(),
                    Some(ClearTarget::GuestMessage) => tui.guest_message.clear(),
                    None => {}
                }
            }
            if app.screen != previous_screen {
                // Screens re-mount: presentation state starts fresh
                tui = TuiState::new();
            }

            if run_effect(effect, &mut app, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Apply completion actions from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let is_chat_reply = matches!(action, Action::ChatCompleted(_));
            let effect = update(&mut app, action);
            if is_chat_reply && app.screen == Screen::Guide {
                tui.chat_scroll.scroll_to_bottom();
            }
            if run_effect(effect, &mut app, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Which input field to clear once its submission is accepted.
enum ClearTarget {
    ChatInput,
    JournalInput,
    GuestMessage,
}

fn clear_target(action: &Action) -> Option<ClearTarget> {
    match action {
        Action::SubmitChat(_) => Some(ClearTarget::ChatInput),
        Action::AddNote(_) => Some(ClearTarget::JournalInput),
        Action::SubmitPost { .. } => Some(ClearTarget::GuestMessage),
        _ => None,
    }
}

/// Translate a terminal event into a core action, updating presentation
/// state (cursors, input buffers) along the way.
fn handle_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    if matches!(event, TuiEvent::ToggleMenu) {
        // Opening the menu starts the cursor on the active screen
        if !app.menu_open {
            tui.menu_cursor = Screen::ALL
                .iter()
                .position(|s| *s == app.screen)
                .unwrap_or(0);
        }
        return Some(Action::ToggleMenu);
    }

    // While the overlay is open it captures everything
    if app.menu_open {
        return match event {
            TuiEvent::CursorUp => {
                tui.menu_cursor = tui.menu_cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                tui.menu_cursor = (tui.menu_cursor + 1).min(Screen::ALL.len() - 1);
                None
            }
            TuiEvent::Submit => Some(Action::Navigate(Screen::ALL[tui.menu_cursor])),
            TuiEvent::InputChar(c @ '1'..='6') => {
                let index = c.to_digit(10)? as usize - 1;
                Some(Action::Navigate(Screen::ALL[index]))
            }
            TuiEvent::Escape => Some(Action::ToggleMenu),
            _ => None,
        };
    }

    match app.screen {
        Screen::Guide => match event {
            TuiEvent::CursorUp => {
                tui.chat_scroll.scroll_up();
                None
            }
            TuiEvent::CursorDown => {
                tui.chat_scroll.scroll_down();
                None
            }
            TuiEvent::ScrollPageUp => {
                tui.chat_scroll.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                tui.chat_scroll.scroll_page_down();
                None
            }
            _ => match tui.chat_input.handle_event(event)? {
                FieldEvent::Submit(text) => Some(Action::SubmitChat(text)),
                FieldEvent::Changed => None,
            },
        },

        Screen::Translate => match event {
            TuiEvent::ToggleDirection => Some(Action::ToggleDirection),
            TuiEvent::CopyResult => Some(Action::CopyTranslation),
            _ => match tui.translate_input.handle_event(event)? {
                FieldEvent::Submit(text) => Some(Action::SubmitTranslation(text)),
                FieldEvent::Changed => None,
            },
        },

        Screen::Tour => {
            if app.tour.selected.is_some() {
                return match event {
                    TuiEvent::Escape | TuiEvent::Backspace => Some(Action::TourBack),
                    _ => None,
                };
            }
            match event {
                TuiEvent::CursorUp => {
                    tui.tour_cursor = tui.tour_cursor.saturating_sub(1);
                    None
                }
                TuiEvent::CursorDown => {
                    tui.tour_cursor = (tui.tour_cursor + 1).min(tours::catalog().len() - 1);
                    None
                }
                TuiEvent::Submit => {
                    let tour = tours::catalog().get(tui.tour_cursor)?;
                    Some(Action::SelectTour(tour.id.to_string()))
                }
                _ => None,
            }
        }

        Screen::Safety => match tui.safety_input.handle_event(event)? {
            FieldEvent::Submit(place) => Some(Action::SubmitScan(place)),
            FieldEvent::Changed => None,
        },

        Screen::Journal => match event {
            TuiEvent::CursorUp => {
                tui.journal_cursor = tui.journal_cursor.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                let last = app.journal.notes.len().saturating_sub(1);
                tui.journal_cursor = (tui.journal_cursor + 1).min(last);
                None
            }
            TuiEvent::DeleteSelected => {
                let note = app.journal.notes.get(tui.journal_cursor)?;
                Some(Action::DeleteNote(note.id))
            }
            _ => match tui.journal_input.handle_event(event)? {
                FieldEvent::Submit(text) => Some(Action::AddNote(text)),
                FieldEvent::Changed => None,
            },
        },

        Screen::Guestbook => match event {
            TuiEvent::CursorUp | TuiEvent::CursorDown => {
                tui.guest_focus = tui.guest_focus.toggled();
                None
            }
            TuiEvent::ScrollPageUp => {
                tui.guest_scroll.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                tui.guest_scroll.scroll_page_down();
                None
            }
            TuiEvent::Refresh => Some(Action::RefreshFeed),
            _ => {
                let field = match tui.guest_focus {
                    GuestField::Name => &mut tui.guest_name,
                    GuestField::Message => &mut tui.guest_message,
                };
                match field.handle_event(event)? {
                    FieldEvent::Submit(_) => Some(Action::SubmitPost {
                        username: tui.guest_name.buffer.clone(),
                        content: tui.guest_message.buffer.clone(),
                    }),
                    FieldEvent::Changed => None,
                }
            }
        },
    }
}

/// Execute the I/O an `update()` asked for. Returns true when the loop
/// should quit.
fn run_effect(mut effect: Effect, app: &mut App, tx: &mpsc::Sender<Action>) -> bool {
    loop {
        match effect {
            Effect::None => return false,
            Effect::Quit => return true,
            Effect::SendChat(query) => {
                spawn_chat(app.api.clone(), query, tx.clone());
                return false;
            }
            Effect::Translate { text, direction } => {
                spawn_translate(app.api.clone(), text, direction, tx.clone());
                return false;
            }
            Effect::Scan(place) => {
                spawn_scan(app.api.clone(), place, tx.clone());
                return false;
            }
            Effect::FetchFeed => {
                spawn_feed_refresh(app.api.clone(), tx.clone());
                return false;
            }
            Effect::SendPost { username, content } => {
                spawn_post(app.api.clone(), username, content, tx.clone());
                return false;
            }
            Effect::SaveJournal => {
                if let Err(e) = app.notes.save(&app.journal.notes) {
                    warn!("Failed to save journal: {e}");
                    app.status_message = format!("Journal save failed: {e}");
                }
                return false;
            }
            Effect::LoadJournal => {
                // Synchronous and local; feed the result straight back in
                let notes = app.notes.load();
                effect = update(app, Action::JournalLoaded(notes));
            }
            Effect::CopyToClipboard(text) => {
                match clipboard::copy(&text) {
                    Ok(()) => app.status_message = "Translation copied to clipboard".to_string(),
                    Err(e) => {
                        warn!("Clipboard write failed: {e}");
                        app.status_message = "Clipboard unavailable".to_string();
                    }
                }
                return false;
            }
        }
    }
}

fn spawn_chat(api: Arc<dyn GuideApi>, query: String, tx: mpsc::Sender<Action>) {
    info!("Spawning chat request");
    tokio::spawn(async move {
        let result = api.chat(&query).await.map_err(|e| e.to_string());
        if tx.send(Action::ChatCompleted(result)).is_err() {
            warn!("Failed to send chat completion: receiver dropped");
        }
    });
}

fn spawn_translate(
    api: Arc<dyn GuideApi>,
    text: String,
    direction: Direction,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning translation request ({})", direction.label());
    tokio::spawn(async move {
        let result = api
            .translate(&text, direction)
            .await
            .map_err(|e| e.to_string());
        if tx.send(Action::TranslationCompleted(result)).is_err() {
            warn!("Failed to send translation completion: receiver dropped");
        }
    });
}

fn spawn_scan(api: Arc<dyn GuideApi>, place: String, tx: mpsc::Sender<Action>) {
    info!("Spawning security scan for {place}");
    tokio::spawn(async move {
        let result = api.check_city(&place).await.map_err(|e| e.to_string());
        if tx.send(Action::ScanCompleted(result)).is_err() {
            warn!("Failed to send scan completion: receiver dropped");
        }
    });
}

fn spawn_feed_refresh(api: Arc<dyn GuideApi>, tx: mpsc::Sender<Action>) {
    info!("Spawning feed refresh");
    tokio::spawn(async move {
        let result = api.feed().await.map_err(|e| e.to_string());
        if tx.send(Action::FeedRefreshed(result)).is_err() {
            warn!("Failed to send feed refresh: receiver dropped");
        }
    });
}

fn spawn_post(api: Arc<dyn GuideApi>, username: String, content: String, tx: mpsc::Sender<Action>) {
    info!("Spawning guestbook post");
    tokio::spawn(async move {
        let result = api
            .post(&username, &content)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string());
        if tx.send(Action::PostCompleted(result)).is_err() {
            warn!("Failed to send post completion: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_menu_digit_navigates() {
        let mut app = test_app();
        app.menu_open = true;
        let mut tui = TuiState::new();

        let action = handle_event(&TuiEvent::InputChar('4'), &app, &mut tui);
        assert_eq!(action, Some(Action::Navigate(Screen::Safety)));
    }

    #[test]
    fn test_menu_cursor_stays_in_bounds() {
        let mut app = test_app();
        app.menu_open = true;
        let mut tui = TuiState::new();

        for _ in 0..20 {
            handle_event(&TuiEvent::CursorDown, &app, &mut tui);
        }
        assert_eq!(tui.menu_cursor, Screen::ALL.len() - 1);

        for _ in 0..20 {
            handle_event(&TuiEvent::CursorUp, &app, &mut tui);
        }
        assert_eq!(tui.menu_cursor, 0);
    }

    #[test]
    fn test_typing_and_enter_submits_chat() {
        let app = test_app();
        let mut tui = TuiState::new();

        for c in "hello".chars() {
            assert_eq!(handle_event(&TuiEvent::InputChar(c), &app, &mut tui), None);
        }
        let action = handle_event(&TuiEvent::Submit, &app, &mut tui);
        assert_eq!(action, Some(Action::SubmitChat("hello".to_string())));
    }

    #[test]
    fn test_tour_enter_selects_under_cursor() {
        let mut app = test_app();
        app.screen = Screen::Tour;
        let mut tui = TuiState::new();
        tui.tour_cursor = 1;

        let action = handle_event(&TuiEvent::Submit, &app, &mut tui);
        assert_eq!(action, Some(Action::SelectTour("desert".to_string())));
    }

    #[test]
    fn test_tour_detail_escape_goes_back() {
        let mut app = test_app();
        app.screen = Screen::Tour;
        app.tour.selected = tours::find("nord");
        let mut tui = TuiState::new();

        let action = handle_event(&TuiEvent::Escape, &app, &mut tui);
        assert_eq!(action, Some(Action::TourBack));
    }

    #[test]
    fn test_journal_delete_targets_selected_note() {
        let mut app = test_app();
        app.screen = Screen::Journal;
        crate::core::action::update(&mut app, Action::AddNote("older".to_string()));
        crate::core::action::update(&mut app, Action::AddNote("newer".to_string()));
        let mut tui = TuiState::new();
        tui.journal_cursor = 1;

        let action = handle_event(&TuiEvent::DeleteSelected, &app, &mut tui);
        let expected_id = app.journal.notes[1].id;
        assert_eq!(action, Some(Action::DeleteNote(expected_id)));
    }

    #[test]
    fn test_guestbook_enter_posts_both_fields() {
        let mut app = test_app();
        app.screen = Screen::Guestbook;
        let mut tui = TuiState::new();

        for c in "aya".chars() {
            handle_event(&TuiEvent::InputChar(c), &app, &mut tui);
        }
        handle_event(&TuiEvent::CursorDown, &app, &mut tui);
        for c in "hi".chars() {
            handle_event(&TuiEvent::InputChar(c), &app, &mut tui);
        }

        let action = handle_event(&TuiEvent::Submit, &app, &mut tui);
        assert_eq!(
            action,
            Some(Action::SubmitPost {
                username: "aya".to_string(),
                content: "hi".to_string(),
            })
        );
    }
}
