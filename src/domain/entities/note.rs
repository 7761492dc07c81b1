//! Note entity and its creation/update/filter companions.

use chrono::{DateTime, Utc};

/// A note owned by a single user.
///
/// The `category` field carries the joined category name when the note was
/// loaded with its category; it is `None` for uncategorized notes.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub category_id: Option<i64>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new Note instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: String,
        body: String,
        category_id: Option<i64>,
        category: Option<String>,
        image_url: Option<String>,
        owner_id: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            body,
            category_id,
            category,
            image_url,
            owner_id,
            created_at,
        }
    }

    /// Returns true if the note is assigned to a category.
    pub fn is_categorized(&self) -> bool {
        self.category_id.is_some()
    }
}

/// Input data for creating a new note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub body: String,
    pub category_id: Option<i64>,
    pub image_url: Option<String>,
    pub owner_id: i64,
}

/// Partial update for an existing note.
///
/// `None` fields are left unchanged.
/// `category_id: Some(None)` detaches the note from its category;
/// `Some(Some(id))` assigns it. `image_url` follows the same pattern.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category_id: Option<Option<i64>>,
    pub image_url: Option<Option<String>>,
}

impl NotePatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.category_id.is_none()
            && self.image_url.is_none()
    }
}

/// Filter for listing notes.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    /// Case-insensitive substring match against the title.
    pub title: Option<String>,
    /// Restrict to notes in this category.
    pub category_id: Option<i64>,
}
