//! # Actions
//!
//! Everything that can happen in Zelig becomes an `Action`.
//! User presses Enter on the guide screen? That's `Action::SubmitChat`.
//! The backend answers? That's `Action::ChatCompleted(result)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state, returning an `Effect` describing any I/O the event
//! loop must perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Liveness
//!
//! Requests are never cancelled, so a response can arrive after the user
//! has switched screens. Every completion action is applied only when the
//! owning screen is still active AND that screen's in-flight flag is still
//! set. Navigation re-mounts screen state (clearing the flag), so a stale
//! completion can never touch a re-mounted screen.

use log::{debug, warn};

use crate::api::types::{Direction, FeedPost, SecurityReport};
use crate::core::journal::{self, JournalNote};
use crate::core::state::{
    App, ChatState, ChatTurn, GuestbookState, SafetyState, Screen, Speaker, TourState,
    TranslateState, CHAT_FALLBACK, TRANSLATION_FAILED,
};
use crate::core::tours;

/// Everything that can happen in the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(Screen),
    ToggleMenu,
    Quit,

    // Guide screen
    SubmitChat(String),
    ChatCompleted(Result<String, String>),

    // Translation screen
    SubmitTranslation(String),
    TranslationCompleted(Result<String, String>),
    ToggleDirection,
    CopyTranslation,

    // Safety screen
    SubmitScan(String),
    ScanCompleted(Result<SecurityReport, String>),

    // Tour screen
    SelectTour(String),
    TourBack,

    // Journal screen
    AddNote(String),
    DeleteNote(i64),
    JournalLoaded(Vec<JournalNote>),

    // Guestbook screen
    RefreshFeed,
    SubmitPost { username: String, content: String },
    PostCompleted(Result<(), String>),
    FeedRefreshed(Result<Vec<FeedPost>, String>),
}

/// I/O the event loop must perform after an `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SendChat(String),
    Translate { text: String, direction: Direction },
    Scan(String),
    FetchFeed,
    SendPost { username: String, content: String },
    SaveJournal,
    LoadJournal,
    CopyToClipboard(String),
}

/// The reducer. Applies `action` to `app`, returns the effect to run.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::ToggleMenu => {
            app.menu_open = !app.menu_open;
            Effect::None
        }

        Action::Navigate(screen) => navigate(app, screen),

        // --- Guide ---
        Action::SubmitChat(text) => {
            if text.trim().is_empty() || app.chat.in_flight {
                return Effect::None;
            }
            app.chat.transcript.push(ChatTurn {
                speaker: Speaker::User,
                text: text.clone(),
            });
            app.chat.in_flight = true;
            Effect::SendChat(text)
        }

        Action::ChatCompleted(result) => {
            if app.screen != Screen::Guide || !app.chat.in_flight {
                debug!("Dropping stale chat completion");
                return Effect::None;
            }
            app.chat.in_flight = false;
            let text = match result {
                Ok(reply) => reply,
                Err(e) => {
                    warn!("Chat request failed: {e}");
                    CHAT_FALLBACK.to_string()
                }
            };
            app.chat.transcript.push(ChatTurn {
                speaker: Speaker::Guide,
                text,
            });
            Effect::None
        }

        // --- Translation ---
        Action::SubmitTranslation(text) => {
            if text.trim().is_empty() || app.translate.in_flight {
                return Effect::None;
            }
            app.translate.source_text = text.clone();
            app.translate.in_flight = true;
            Effect::Translate {
                text,
                direction: app.translate.direction,
            }
        }

        Action::TranslationCompleted(result) => {
            if app.screen != Screen::Translate || !app.translate.in_flight {
                debug!("Dropping stale translation completion");
                return Effect::None;
            }
            app.translate.in_flight = false;
            app.translate.translated = Some(match result {
                Ok(translation) => translation,
                Err(e) => {
                    warn!("Translation request failed: {e}");
                    TRANSLATION_FAILED.to_string()
                }
            });
            Effect::None
        }

        Action::ToggleDirection => {
            app.translate.direction = app.translate.direction.toggled();
            app.status_message = app.translate.direction.label().to_string();
            Effect::None
        }

        Action::CopyTranslation => match &app.translate.translated {
            Some(text) if !text.is_empty() => Effect::CopyToClipboard(text.clone()),
            _ => Effect::None,
        },

        // --- Safety ---
        Action::SubmitScan(place) => {
            if place.trim().is_empty() || app.safety.in_flight {
                return Effect::None;
            }
            // Previous report is cleared before the call; the UI shows a
            // neutral state until the new result lands.
            app.safety.report = None;
            app.safety.place = place.clone();
            app.safety.in_flight = true;
            Effect::Scan(place)
        }

        Action::ScanCompleted(result) => {
            if app.screen != Screen::Safety || !app.safety.in_flight {
                debug!("Dropping stale scan completion");
                return Effect::None;
            }
            app.safety.in_flight = false;
            match result {
                Ok(report) => app.safety.report = Some(report),
                Err(e) => {
                    warn!("Security scan failed: {e}");
                    app.safety.report = None;
                }
            }
            Effect::None
        }

        // --- Tour ---
        Action::SelectTour(id) => {
            if let Some(tour) = tours::find(&id) {
                app.tour.selected = Some(tour);
            }
            Effect::None
        }

        Action::TourBack => {
            app.tour.selected = None;
            Effect::None
        }

        // --- Journal ---
        Action::AddNote(text) => {
            if text.trim().is_empty() {
                return Effect::None;
            }
            let id = journal::next_note_id(app.journal.last_id);
            app.journal.last_id = id;
            app.journal.notes.insert(
                0,
                JournalNote {
                    id,
                    text,
                    date: journal::date_label(),
                },
            );
            Effect::SaveJournal
        }

        Action::DeleteNote(id) => {
            let before = app.journal.notes.len();
            app.journal.notes.retain(|n| n.id != id);
            if app.journal.notes.len() == before {
                // Nothing removed, nothing to rewrite.
                return Effect::None;
            }
            Effect::SaveJournal
        }

        Action::JournalLoaded(notes) => {
            app.journal.last_id = notes.iter().map(|n| n.id).max().unwrap_or(0);
            app.journal.notes = notes;
            Effect::None
        }

        // --- Guestbook ---
        Action::RefreshFeed => {
            app.guestbook.loading = true;
            Effect::FetchFeed
        }

        Action::SubmitPost { username, content } => {
            if username.trim().is_empty()
                || content.trim().is_empty()
                || app.guestbook.posting
            {
                return Effect::None;
            }
            app.guestbook.posting = true;
            Effect::SendPost { username, content }
        }

        Action::PostCompleted(result) => {
            if app.screen != Screen::Guestbook || !app.guestbook.posting {
                debug!("Dropping stale post completion");
                return Effect::None;
            }
            app.guestbook.posting = false;
            if let Err(e) = result {
                warn!("Guestbook post failed: {e}");
            }
            // A refresh follows unconditionally; a failed post simply
            // won't show up in it.
            app.guestbook.loading = true;
            Effect::FetchFeed
        }

        Action::FeedRefreshed(result) => {
            if app.screen != Screen::Guestbook {
                debug!("Dropping stale feed refresh");
                return Effect::None;
            }
            app.guestbook.loading = false;
            match result {
                Ok(posts) => app.guestbook.posts = posts,
                Err(e) => warn!("Feed refresh failed: {e}"),
            }
            Effect::None
        }
    }
}

/// Switch screens. Every screen re-mounts its local state; the journal
/// reloads from the store and the guestbook refreshes its feed on entry.
fn navigate(app: &mut App, screen: Screen) -> Effect {
    app.screen = screen;
    app.menu_open = false;

    app.chat = ChatState::new();
    app.translate = TranslateState::new();
    app.safety = SafetyState::new();
    app.tour = TourState::new();
    app.guestbook = GuestbookState::new();
    // journal.notes is replaced by JournalLoaded when the screen mounts

    match screen {
        Screen::Journal => Effect::LoadJournal,
        Screen::Guestbook => {
            app.guestbook.loading = true;
            Effect::FetchFeed
        }
        _ => Effect::None,
    }
}
