//! DTOs for the note CRUD endpoints.

use crate::api::dto::pagination::{PageMeta, PaginationParams};
use crate::domain::entities::{Note, NoteFilter, NotePatch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

/// Request body for `POST /api/notes`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNoteRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 10000))]
    pub body: String,

    /// Category to file the note under; must belong to the caller.
    pub category_id: Option<i64>,

    /// Optional illustration (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub image_url: Option<String>,
}

/// Request body for `PATCH /api/notes/{id}`.
///
/// All fields are optional; only provided fields are changed.
///
/// # `category_id` / `image_url` semantics
///
/// - **Absent** (key not in JSON) → leave existing value unchanged
/// - **`null`** → clear the field
/// - **Value** → set the new value
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNoteRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 10000))]
    pub body: Option<String>,

    /// Category assignment. Absent = no change, null = uncategorize, value = move.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category_id: Option<Option<i64>>,

    /// Illustration URL. Absent = no change, null = remove, value = replace.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image_url: Option<Option<String>>,
}

impl From<UpdateNoteRequest> for NotePatch {
    fn from(req: UpdateNoteRequest) -> Self {
        NotePatch {
            title: req.title,
            body: req.body,
            category_id: req.category_id,
            image_url: req.image_url,
        }
    }
}

/// Query parameters for `GET /api/notes`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ListNotesParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,

    /// Case-insensitive substring match on the title.
    pub q: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl ListNotesParams {
    pub fn filter(&self) -> NoteFilter {
        NoteFilter {
            title: self.q.clone(),
            category_id: self.category_id,
        }
    }
}

/// Public view of a note.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub category_id: Option<i64>,
    /// Resolved category name, when the note is filed under one.
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            body: note.body,
            category_id: note.category_id,
            category: note.category,
            image_url: note.image_url,
            created_at: note.created_at,
        }
    }
}

/// Response body for `GET /api/notes`.
#[derive(Debug, Serialize)]
pub struct NoteListResponse {
    pub items: Vec<NoteResponse>,
    pub pagination: PageMeta,
}
