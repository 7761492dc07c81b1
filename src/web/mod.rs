//! Web layer for the browser-based UI.
//!
//! Provides server-rendered HTML pages for signing in, reading, and writing
//! notes. Uses Askama templates for server-side rendering; sessions ride in
//! an HttpOnly cookie.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Web-specific middleware (cookie auth)
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
