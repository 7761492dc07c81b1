//! # Notes App
//!
//! A self-hosted notes service with token authentication, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate is split into layers with one-way dependencies:
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Services holding the business rules
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered pages for login and note management
//! - **Page Client Layer** ([`browser`]) - Typed counterpart of the in-page scripts
//!
//! ## Features
//!
//! - Username/password accounts with signed bearer tokens
//! - Notes with categories, full-text search, and pagination
//! - JSON API and server-rendered web UI over the same services
//! - In-process page client for the login form and note visibility toggles
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export DATABASE_URL="sqlite://notes.db"
//! export TOKEN_SIGNING_SECRET="a-long-random-string-of-at-least-32-chars"
//!
//! # Start the service (migrations are applied on startup)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod browser;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, NoteService, UserService};
    pub use crate::browser::{Document, PageSession, TokenClient};
    pub use crate::domain::entities::{Category, NewNote, Note, User};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
