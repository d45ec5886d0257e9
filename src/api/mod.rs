//! # HTTP Collaborator Boundary
//!
//! Everything that talks to the backend lives here: the wire types and the
//! [`client::GuideApi`] trait with its reqwest-backed implementation. The
//! rest of the app only sees the trait, so tests substitute canned
//! collaborators and integration tests point the real client at a mock
//! server.

pub mod client;
pub mod types;

pub use client::{ApiError, GuideApi, HttpGuideApi};
pub use types::{Direction, FeedPost, RiskColor, SecurityReport};
