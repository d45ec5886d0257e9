//! # Core Application Logic
//!
//! This module contains Zelig's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  GuideApi  │      │  NoteStore │
//!     │  Adapter   │      │ (reqwest)  │      │   (file)   │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`journal`]: Travel notes and the storage port they persist through
//! - [`tours`]: The static tour catalog
//! - [`config`]: Settings resolution (defaults → file → env → CLI)

pub mod action;
pub mod config;
pub mod journal;
pub mod state;
pub mod tours;
