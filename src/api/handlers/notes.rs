//! Handlers for note CRUD endpoints.
//!
//! All endpoints operate on the authenticated user's notes only; the user is
//! taken from request extensions, where the auth middleware placed it.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::notes::{
    CreateNoteRequest, ListNotesParams, NoteListResponse, NoteResponse, UpdateNoteRequest,
};
use crate::api::dto::pagination::PageMeta;
use crate::api::middleware::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a note for the authenticated user.
///
/// # Endpoint
///
/// `POST /api/notes`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Groceries",
///   "body": "milk, eggs",
///   "category_id": 2,                          // optional
///   "image_url": "https://example.com/a.png"   // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if `category_id` does not name one of the caller's
/// categories.
pub async fn create_note_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), AppError> {
    payload.validate()?;

    let note = state
        .note_service
        .create_note(
            user.id,
            &payload.title,
            &payload.body,
            payload.category_id,
            payload.image_url.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(NoteResponse::from(note))))
}

/// Lists the authenticated user's notes, newest first.
///
/// # Endpoint
///
/// `GET /api/notes?page=1&page_size=20&q=grocery&category_id=2`
///
/// # Query Parameters
///
/// - `page`, `page_size` - pagination (defaults: 1, 20; max page size 100)
/// - `q` - case-insensitive substring match on the title
/// - `category_id` - only notes filed under this category
///
/// # Response
///
/// ```json
/// {
///   "items": [ ... ],
///   "pagination": { "page": 1, "page_size": 20, "total": 37 }
/// }
/// ```
pub async fn list_notes_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(params): Query<ListNotesParams>,
) -> Result<Json<NoteListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|message| AppError::bad_request(message, json!({})))?;

    let (notes, total) = state
        .note_service
        .list_notes(user.id, params.filter(), offset, limit)
        .await?;

    Ok(Json(NoteListResponse {
        items: notes.into_iter().map(NoteResponse::from).collect(),
        pagination: PageMeta::new(&params.pagination, total),
    }))
}

/// Fetches a single note.
///
/// # Endpoint
///
/// `GET /api/notes/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the note does not exist or belongs to another
/// user.
pub async fn get_note_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<NoteResponse>, AppError> {
    let note = state.note_service.get_note(user.id, id).await?;

    Ok(Json(NoteResponse::from(note)))
}

/// Partially updates a note.
///
/// # Endpoint
///
/// `PATCH /api/notes/{id}`
///
/// # Request Body
///
/// All fields are optional. Only provided fields are changed.
///
/// ```json
/// {
///   "title": "Groceries (updated)",
///   "category_id": null   // null clears the category
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or no fields are provided.
/// Returns 404 Not Found if the note is missing or the new category is not
/// the caller's.
pub async fn update_note_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>, AppError> {
    payload.validate()?;

    let note = state
        .note_service
        .update_note(user.id, id, payload.into())
        .await?;

    Ok(Json(NoteResponse::from(note)))
}

/// Deletes a note.
///
/// # Endpoint
///
/// `DELETE /api/notes/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the note does not exist or belongs to another
/// user.
pub async fn delete_note_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<StatusCode, AppError> {
    state.note_service.delete_note(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
