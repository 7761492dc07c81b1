//! Domain layer with core business entities and repository contracts.
//!
//! This layer has no dependencies on web, database, or other infrastructure
//! concerns. It defines what the system stores and which operations the
//! storage must support.

pub mod entities;
pub mod repositories;
