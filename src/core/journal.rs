//! # Journal Persistence
//!
//! Travel notes and the storage port they persist through.
//!
//! The note list lives in one JSON file (default `~/.zelig/notes.json`).
//! It is read once when the journal screen mounts and rewritten wholesale
//! after every add or delete. An absent or unparsable file loads as an
//! empty list. Writes use atomic rename (write `.tmp`, then `rename()`)
//! for crash safety.
//!
//! Persistence goes through the [`NoteStore`] trait so the journal screen
//! never touches the filesystem directly; tests substitute an in-memory
//! store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// One free-text travel note.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JournalNote {
    /// Unique within the list. Millisecond timestamp, bumped when two
    /// notes land in the same millisecond.
    pub id: i64,
    pub text: String,
    /// Locale-formatted creation date label, e.g. "3 March 2026".
    pub date: String,
}

/// Storage port for the note list.
///
/// `load` never fails: missing or corrupt data degrades to an empty list.
/// `save` rewrites the entire list.
pub trait NoteStore: Send + Sync {
    fn load(&self) -> Vec<JournalNote>;
    fn save(&self, notes: &[JournalNote]) -> io::Result<()>;
}

/// Issue a note id strictly greater than every previously issued one.
///
/// Creation-time ids alone are not unique when two notes are added within
/// the same millisecond, so the last issued id wins the tie.
pub fn next_note_id(last_id: i64) -> i64 {
    Utc::now().timestamp_millis().max(last_id + 1)
}

/// Today's date label for a new note.
pub fn date_label() -> String {
    Local::now().format("%-d %B %Y").to_string()
}

/// Returns the default notes file path, `~/.zelig/notes.json`.
pub fn default_notes_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".zelig").join("notes.json"))
}

/// File-backed note store.
pub struct FileNoteStore {
    path: PathBuf,
}

impl FileNoteStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteStore for FileNoteStore {
    fn load(&self) -> Vec<JournalNote> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No notes file at {}, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(notes) => notes,
            Err(e) => {
                warn!(
                    "Notes file {} is unparsable ({}), starting empty",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, notes: &[JournalNote]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(notes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        // Write to a temp file, then rename into place.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Saved {} notes to {}", notes.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileNoteStore {
        let path = std::env::temp_dir().join(format!(
            "zelig-test-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        FileNoteStore::new(path)
    }

    fn note(id: i64, text: &str) -> JournalNote {
        JournalNote {
            id,
            text: text.to_string(),
            date: "1 January 2026".to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let store = temp_store("missing");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = temp_store("roundtrip");
        let notes = vec![note(2, "Visit the souk"), note(1, "Try the tagine")];

        store.save(&notes).unwrap();
        let loaded = store.load();

        assert_eq!(loaded, notes);
        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "not json {{{").unwrap();

        assert!(store.load().is_empty());
        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn test_save_rewrites_wholesale() {
        let store = temp_store("rewrite");
        store.save(&[note(1, "first"), note(2, "second")]).unwrap();
        store.save(&[note(2, "second")]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "second");
        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn test_next_note_id_is_strictly_increasing() {
        let first = next_note_id(0);
        let second = next_note_id(first);
        let third = next_note_id(second);
        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn test_next_note_id_outruns_the_clock() {
        // A last id far in the future must still be exceeded.
        let future = Utc::now().timestamp_millis() + 1_000_000;
        assert_eq!(next_note_id(future), future + 1);
    }
}
