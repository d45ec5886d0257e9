//! Wire types for the backend API.
//!
//! Shapes follow the canonical contract: chat and translate exchange small
//! JSON envelopes, the security check returns the rich report shape
//! (`city`/`city_ar`/`risk_color`/`hits`), and the social feed is a flat
//! list of posts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatQuery<'a> {
    pub query: &'a str,
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Translation direction. Serialized as the backend's `target` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// English → Darija.
    #[serde(rename = "darija")]
    ToDarija,
    /// Darija → English.
    #[serde(rename = "english")]
    ToEnglish,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::ToDarija => Direction::ToEnglish,
            Direction::ToEnglish => Direction::ToDarija,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::ToDarija => "English -> Darija",
            Direction::ToEnglish => "Darija -> English",
        }
    }
}

/// Request body for `POST /api/translate`.
#[derive(Debug, Serialize)]
pub struct TranslateQuery<'a> {
    pub text: &'a str,
    pub target: Direction,
}

/// Response body for `POST /api/translate`.
#[derive(Debug, Deserialize)]
pub struct Translation {
    pub translation: String,
}

/// Visual severity of a risk report.
///
/// The backend only ever sends `green`, `orange` or `red`; anything else
/// deserializes to `Unknown`, which renders at the most severe level
/// (fail safe, not fail quiet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    Green,
    Orange,
    Red,
    #[serde(other)]
    #[default]
    Unknown,
}

/// Result of a city safety query, replaced wholesale on every scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityReport {
    pub city: String,
    /// Local (Arabic) name, when the backend knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_ar: Option<String>,
    pub risk_level: String,
    #[serde(default)]
    pub risk_color: RiskColor,
    pub recommendation: String,
    #[serde(default)]
    pub sources_count: u32,
    /// Per-category mention counts (e.g. "crime", "accident").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hits: Option<BTreeMap<String, u32>>,
}

/// One guestbook entry. Fetched as a full replace-on-refresh list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPost {
    pub username: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Request body for `POST /api/social`.
#[derive(Debug, Serialize)]
pub struct NewPost<'a> {
    pub username: &'a str,
    pub content: &'a str,
}
