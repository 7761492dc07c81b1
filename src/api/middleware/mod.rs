//! Middleware applied to the API routes.
//!
//! Bearer token authentication, per-IP rate limiting, and request tracing.

pub mod auth;
pub mod rate_limit;
pub mod tracing;

pub use auth::CurrentUser;
