//! Request and response types for the REST API.
//!
//! Serde handles the wire format; the `validator` derive checks inputs
//! before they reach the services.

pub mod categories;
pub mod health;
pub mod notes;
pub mod pagination;
pub mod token;
pub mod users;
