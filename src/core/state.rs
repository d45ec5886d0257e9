//! # Application State
//!
//! Core business state for Zelig. This module contains domain logic only -
//! no TUI-specific types. Presentation state (cursors, scroll offsets)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── api: Arc<dyn GuideApi>         // HTTP collaborator
//! ├── notes: Arc<dyn NoteStore>      // journal persistence port
//! ├── screen: Screen                 // active screen
//! ├── menu_open: bool                // navigation overlay visibility
//! ├── status_message: String         // status bar text
//! ├── chat: ChatState                // guide transcript
//! ├── translate: TranslateState      // latest translation pair
//! ├── safety: SafetyState            // last risk report
//! ├── tour: TourState                // selected catalog entry
//! ├── journal: JournalState          // persisted note list
//! └── guestbook: GuestbookState      // social feed
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations. Each screen owns
//! its state independently; nothing here is shared across screens.

use std::sync::Arc;

use crate::api::client::GuideApi;
use crate::api::types::{Direction, FeedPost, SecurityReport};
use crate::core::journal::{JournalNote, NoteStore};
use crate::core::tours::Tour;

/// Seeded greeting shown before the first user message.
pub const WELCOME_MESSAGE: &str =
    "Salam! I'm Zelig, your Morocco travel guide. Ask me anything about the country.";

/// Fixed assistant turn appended when the chat collaborator is unreachable.
pub const CHAT_FALLBACK: &str = "Sorry, I can't reach the server right now.";

/// Fixed string shown when a translation request fails.
pub const TRANSLATION_FAILED: &str = "Translation failed.";

/// The closed set of screens. Exactly one is visible at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Guide,
    Translate,
    Tour,
    Safety,
    Journal,
    Guestbook,
}

impl Screen {
    /// All screens, in sidebar order.
    pub const ALL: [Screen; 6] = [
        Screen::Guide,
        Screen::Translate,
        Screen::Tour,
        Screen::Safety,
        Screen::Journal,
        Screen::Guestbook,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Guide => "Royal Guide",
            Screen::Translate => "Terjman",
            Screen::Tour => "Grand Tour",
            Screen::Safety => "Travel Safety",
            Screen::Journal => "Travel Journal",
            Screen::Guestbook => "Guestbook",
        }
    }
}

/// Who said a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Guide,
}

/// One turn of the guide conversation. Session-only, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
}

pub struct ChatState {
    /// Ordered transcript, append-only within a session.
    pub transcript: Vec<ChatTurn>,
    pub in_flight: bool,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatTurn {
                speaker: Speaker::Guide,
                text: WELCOME_MESSAGE.to_string(),
            }],
            in_flight: false,
        }
    }
}

pub struct TranslateState {
    /// Text most recently submitted for translation.
    pub source_text: String,
    /// Latest result (or the fixed failure string). None until first request.
    pub translated: Option<String>,
    pub direction: Direction,
    pub in_flight: bool,
}

impl TranslateState {
    pub fn new() -> Self {
        Self {
            source_text: String::new(),
            translated: None,
            direction: Direction::ToDarija,
            in_flight: false,
        }
    }
}

pub struct SafetyState {
    /// Place most recently queried.
    pub place: String,
    /// Last report. None = neutral empty state, never stale data.
    pub report: Option<SecurityReport>,
    pub in_flight: bool,
}

impl SafetyState {
    pub fn new() -> Self {
        Self {
            place: String::new(),
            report: None,
            in_flight: false,
        }
    }
}

pub struct TourState {
    /// Drill-down target. None = list view.
    pub selected: Option<&'static Tour>,
}

impl TourState {
    pub fn new() -> Self {
        Self { selected: None }
    }
}

pub struct JournalState {
    /// Newest first. Mirrors the persisted file after every mutation.
    pub notes: Vec<JournalNote>,
    /// Highest id issued or loaded; keeps new ids strictly monotonic.
    pub last_id: i64,
}

impl JournalState {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            last_id: 0,
        }
    }
}

pub struct GuestbookState {
    pub posts: Vec<FeedPost>,
    /// True while a feed fetch is pending (display only).
    pub loading: bool,
    /// In-flight flag for post submission.
    pub posting: bool,
}

impl GuestbookState {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            loading: false,
            posting: false,
        }
    }
}

pub struct App {
    pub api: Arc<dyn GuideApi>,
    pub notes: Arc<dyn NoteStore>,
    pub screen: Screen,
    pub menu_open: bool,
    pub status_message: String,
    pub chat: ChatState,
    pub translate: TranslateState,
    pub safety: SafetyState,
    pub tour: TourState,
    pub journal: JournalState,
    pub guestbook: GuestbookState,
}

impl App {
    pub fn new(api: Arc<dyn GuideApi>, notes: Arc<dyn NoteStore>) -> Self {
        Self {
            api,
            notes,
            screen: Screen::Guide,
            menu_open: false,
            status_message: String::from("Welcome to Zelig!"),
            chat: ChatState::new(),
            translate: TranslateState::new(),
            safety: SafetyState::new(),
            tour: TourState::new(),
            journal: JournalState::new(),
            guestbook: GuestbookState::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.screen, Screen::Guide);
        assert!(!app.menu_open);
        assert_eq!(app.status_message, "Welcome to Zelig!");
    }

    #[test]
    fn test_chat_state_seeds_welcome_turn() {
        let chat = ChatState::new();
        assert_eq!(chat.transcript.len(), 1);
        assert_eq!(chat.transcript[0].speaker, Speaker::Guide);
        assert_eq!(chat.transcript[0].text, WELCOME_MESSAGE);
        assert!(!chat.in_flight);
    }

    #[test]
    fn test_screen_labels_are_distinct() {
        let labels: Vec<_> = Screen::ALL.iter().map(|s| s.label()).collect();
        let mut deduped = labels.clone();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
    }
}
