//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::client::{ApiError, GuideApi};
use crate::api::types::{Direction, FeedPost, SecurityReport};
use crate::core::journal::{JournalNote, NoteStore};
use crate::core::state::App;

/// A no-op collaborator for reducer tests that never reach the network.
pub struct NoopApi;

#[async_trait]
impl GuideApi for NoopApi {
    async fn chat(&self, _query: &str) -> Result<String, ApiError> {
        Ok(String::new())
    }

    async fn translate(&self, _text: &str, _direction: Direction) -> Result<String, ApiError> {
        Ok(String::new())
    }

    async fn check_city(&self, _city: &str) -> Result<SecurityReport, ApiError> {
        Err(ApiError::Network("noop".to_string()))
    }

    async fn feed(&self) -> Result<Vec<FeedPost>, ApiError> {
        Ok(Vec::new())
    }

    async fn post(&self, _username: &str, _content: &str) -> Result<FeedPost, ApiError> {
        Err(ApiError::Network("noop".to_string()))
    }
}

/// In-memory note store, so journal tests never touch the filesystem.
#[derive(Default)]
pub struct MemoryNoteStore {
    notes: Mutex<Vec<JournalNote>>,
}

impl NoteStore for MemoryNoteStore {
    fn load(&self) -> Vec<JournalNote> {
        self.notes.lock().unwrap().clone()
    }

    fn save(&self, notes: &[JournalNote]) -> io::Result<()> {
        *self.notes.lock().unwrap() = notes.to_vec();
        Ok(())
    }
}

/// Creates a test App with a NoopApi and an in-memory note store.
pub fn test_app() -> App {
    App::new(Arc::new(NoopApi), Arc::new(MemoryNoteStore::default()))
}
