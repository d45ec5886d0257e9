use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Always-on controls
    ForceQuit,   // Ctrl+C / Ctrl+Q
    ToggleMenu,  // Tab opens/closes the navigation overlay
    Escape,
    Submit, // Enter

    // Text editing
    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    CursorLeft,
    CursorRight,

    // Lists and scrolling
    CursorUp,
    CursorDown,
    ScrollPageUp,
    ScrollPageDown,

    // Screen-specific controls
    ToggleDirection, // Ctrl+D (translation)
    CopyResult,      // Ctrl+Y (translation)
    Refresh,         // Ctrl+R (guestbook)
    DeleteSelected,  // Ctrl+X (journal)

    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c' | 'q')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(TuiEvent::ToggleDirection),
                (KeyModifiers::CONTROL, KeyCode::Char('y')) => Some(TuiEvent::CopyResult),
                (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
                (KeyModifiers::CONTROL, KeyCode::Char('x')) => Some(TuiEvent::DeleteSelected),
                (_, KeyCode::Tab) => Some(TuiEvent::ToggleMenu),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                _ => None,
            }
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
