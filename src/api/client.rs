//! The [`GuideApi`] trait and its reqwest implementation.
//!
//! Every call is a single request/response exchange: no streaming, no
//! retries, no explicit timeout (the transport default applies). Failures
//! are returned as values; call sites decide the fallback per screen.

use std::fmt;

use async_trait::async_trait;
use log::debug;
use reqwest::Url;

use super::types::{
    ChatQuery, ChatReply, Direction, FeedPost, NewPost, SecurityReport, TranslateQuery,
    Translation,
};

/// Errors that can occur when talking to the backend.
#[derive(Debug)]
pub enum ApiError {
    /// Bad base URL or an unbuildable request. Not a transport problem.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The backend answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body did not match the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Parse(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// The backend collaborator contract: one method per endpoint.
#[async_trait]
pub trait GuideApi: Send + Sync {
    /// `POST /api/chat` — ask the travel guide a question.
    async fn chat(&self, query: &str) -> Result<String, ApiError>;

    /// `POST /api/translate` — translate `text` in the given direction.
    async fn translate(&self, text: &str, direction: Direction) -> Result<String, ApiError>;

    /// `GET /api/security/{city}` — fetch the safety report for a city.
    async fn check_city(&self, city: &str) -> Result<SecurityReport, ApiError>;

    /// `GET /api/social` — fetch the full guestbook feed.
    async fn feed(&self) -> Result<Vec<FeedPost>, ApiError>;

    /// `POST /api/social` — append a guestbook post.
    async fn post(&self, username: &str, content: &str) -> Result<FeedPost, ApiError>;
}

/// reqwest-backed [`GuideApi`].
pub struct HttpGuideApi {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpGuideApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::Config(format!("bad base URL: {e}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut parts = url
                .path_segments_mut()
                .map_err(|_| ApiError::Config("base URL cannot have segments".into()))?;
            parts.pop_if_empty();
            for segment in segments {
                // push() percent-encodes, so city names with spaces are fine
                parts.push(segment);
            }
        }
        Ok(url)
    }

    /// Convert a non-success response into `ApiError::Api`.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl GuideApi for HttpGuideApi {
    async fn chat(&self, query: &str) -> Result<String, ApiError> {
        let url = self.endpoint(&["api", "chat"])?;
        debug!("POST {url}");
        let response = self.http.post(url).json(&ChatQuery { query }).send().await?;
        let reply: ChatReply = Self::check_status(response).await?.json().await?;
        Ok(reply.response)
    }

    async fn translate(&self, text: &str, direction: Direction) -> Result<String, ApiError> {
        let url = self.endpoint(&["api", "translate"])?;
        debug!("POST {url} ({})", direction.label());
        let response = self
            .http
            .post(url)
            .json(&TranslateQuery {
                text,
                target: direction,
            })
            .send()
            .await?;
        let result: Translation = Self::check_status(response).await?.json().await?;
        Ok(result.translation)
    }

    async fn check_city(&self, city: &str) -> Result<SecurityReport, ApiError> {
        let url = self.endpoint(&["api", "security", city])?;
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        let report = Self::check_status(response).await?.json().await?;
        Ok(report)
    }

    async fn feed(&self) -> Result<Vec<FeedPost>, ApiError> {
        let url = self.endpoint(&["api", "social"])?;
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        let posts = Self::check_status(response).await?.json().await?;
        Ok(posts)
    }

    async fn post(&self, username: &str, content: &str) -> Result<FeedPost, ApiError> {
        let url = self.endpoint(&["api", "social"])?;
        debug!("POST {url}");
        let response = self
            .http
            .post(url)
            .json(&NewPost { username, content })
            .send()
            .await?;
        let created = Self::check_status(response).await?.json().await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_and_encodes_segments() {
        let api = HttpGuideApi::new("http://127.0.0.1:8001").unwrap();
        let url = api.endpoint(&["api", "security", "El Jadida"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8001/api/security/El%20Jadida");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let api = HttpGuideApi::new("http://127.0.0.1:8001/").unwrap();
        let url = api.endpoint(&["api", "chat"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8001/api/chat");
    }

    #[test]
    fn test_bad_base_url_is_config_error() {
        assert!(matches!(
            HttpGuideApi::new("not a url"),
            Err(ApiError::Config(_))
        ));
    }
}
