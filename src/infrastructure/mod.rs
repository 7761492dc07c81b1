//! Infrastructure layer for external system integrations.
//!
//! Contains concrete implementations of domain interfaces:
//!
//! - [`persistence`] - SQLite repository implementations

pub mod persistence;
