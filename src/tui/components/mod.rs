//! # TUI Components
//!
//! One component per screen, plus the shared building blocks.
//!
//! ## Component Architecture
//!
//! Components receive external data as "props" (struct fields holding
//! references into `App`), not by reaching into global state. Presentation
//! state the core doesn't care about — list cursors, scroll offsets, input
//! buffers — lives in `TuiState` and is passed in mutably.
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── input_field.rs  (shared single-line text input)
//! ├── sidebar.rs      (screen list + navigation overlay)
//! ├── chat.rs         (guide transcript)
//! ├── translate.rs    (translation pair)
//! ├── safety.rs       (risk report + emergency numbers)
//! ├── tours.rs        (catalog list and detail)
//! ├── journal.rs      (note list)
//! └── guestbook.rs    (social feed + post form)
//! ```

pub mod chat;
pub mod guestbook;
pub mod input_field;
pub mod journal;
pub mod safety;
pub mod sidebar;
pub mod tours;
pub mod translate;

pub use chat::ChatScreen;
pub use guestbook::{GuestField, GuestbookScreen};
pub use input_field::{FieldEvent, InputField};
pub use journal::JournalScreen;
pub use safety::SafetyScreen;
pub use sidebar::{NavMenu, Sidebar};
pub use tours::TourScreen;
pub use translate::TranslateScreen;
