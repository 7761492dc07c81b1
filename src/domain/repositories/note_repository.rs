//! Repository trait for note data access.

use crate::domain::entities::{NewNote, Note, NoteFilter, NotePatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing notes.
///
/// All lookups are scoped to an owner: a note is only visible to the user
/// who created it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteNoteRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_notes.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Creates a new note.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_note: NewNote) -> Result<Note, AppError>;

    /// Finds a note by ID, scoped to its owner.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Note))` if found and owned by `owner_id`
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64, owner_id: i64) -> Result<Option<Note>, AppError>;

    /// Lists an owner's notes with filtering and pagination.
    ///
    /// Notes are ordered by creation time, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        owner_id: i64,
        filter: NoteFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Note>, AppError>;

    /// Counts an owner's notes matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, owner_id: i64, filter: NoteFilter) -> Result<i64, AppError>;

    /// Partially updates a note.
    ///
    /// Only fields present in [`NotePatch`] are modified. `None` fields are
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no note matches `id` + `owner_id`.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, owner_id: i64, patch: NotePatch) -> Result<Note, AppError>;

    /// Deletes a note.
    ///
    /// Returns `Ok(true)` if the note was found and deleted, `Ok(false)` if
    /// not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64, owner_id: i64) -> Result<bool, AppError>;
}
