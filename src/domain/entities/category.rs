//! Category entity for grouping a user's notes.

use chrono::{DateTime, Utc};

/// A note category owned by a single user.
///
/// Category names are unique per owner. A note belongs to at most one
/// category; deleting the category detaches its notes.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Creates a new Category instance.
    pub fn new(id: i64, name: String, owner_id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            owner_id,
            created_at,
        }
    }
}

/// Input data for creating a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub owner_id: i64,
}
