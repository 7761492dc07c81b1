//! Note and category management service.

use std::sync::Arc;

use crate::domain::entities::{Category, NewCategory, NewNote, Note, NoteFilter, NotePatch};
use crate::domain::repositories::{CategoryRepository, NoteRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for the note CRUD surface and category bookkeeping.
///
/// All operations are scoped to an owner; a note or category belonging to
/// another user is indistinguishable from one that does not exist.
pub struct NoteService<N: NoteRepository, C: CategoryRepository> {
    notes: Arc<N>,
    categories: Arc<C>,
}

impl<N: NoteRepository, C: CategoryRepository> NoteService<N, C> {
    pub fn new(notes: Arc<N>, categories: Arc<C>) -> Self {
        Self { notes, categories }
    }

    /// Creates a note for `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `category_id` is set but does not
    /// name a category owned by `owner_id`.
    pub async fn create_note(
        &self,
        owner_id: i64,
        title: &str,
        body: &str,
        category_id: Option<i64>,
        image_url: Option<&str>,
    ) -> Result<Note, AppError> {
        if let Some(category_id) = category_id {
            self.require_category(owner_id, category_id).await?;
        }

        let note = self
            .notes
            .create(NewNote {
                title: title.to_string(),
                body: body.to_string(),
                category_id,
                image_url: image_url.map(str::to_string),
                owner_id,
            })
            .await?;

        metrics::counter!("notes_created_total").increment(1);
        tracing::debug!(note_id = note.id, owner_id, "note created");

        Ok(note)
    }

    /// Fetches a single note owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with the message `Note not found` if
    /// the note does not exist or belongs to someone else.
    pub async fn get_note(&self, owner_id: i64, note_id: i64) -> Result<Note, AppError> {
        self.notes
            .find_by_id(note_id, owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found", json!({ "id": note_id })))
    }

    /// Lists notes owned by `owner_id`, newest first, with the total count
    /// matching the filter (ignoring pagination).
    pub async fn list_notes(
        &self,
        owner_id: i64,
        filter: NoteFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Note>, i64), AppError> {
        let notes = self
            .notes
            .list(owner_id, filter.clone(), offset, limit)
            .await?;
        let total = self.notes.count(owner_id, filter).await?;
        Ok((notes, total))
    }

    /// Applies a partial update to a note owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patch carries no fields,
    /// [`AppError::NotFound`] if the note is missing or foreign, and
    /// [`AppError::NotFound`] (`Category not found`) if the patch reassigns
    /// the note to a category the owner does not have.
    pub async fn update_note(
        &self,
        owner_id: i64,
        note_id: i64,
        patch: NotePatch,
    ) -> Result<Note, AppError> {
        if patch.is_empty() {
            return Err(AppError::bad_request(
                "No fields provided for update",
                json!({}),
            ));
        }

        if let Some(Some(category_id)) = patch.category_id {
            self.require_category(owner_id, category_id).await?;
        }

        let note = self.notes.update(note_id, owner_id, patch).await?;

        tracing::debug!(note_id, owner_id, "note updated");

        Ok(note)
    }

    /// Deletes a note owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with the message `Note not found` if
    /// nothing was deleted.
    pub async fn delete_note(&self, owner_id: i64, note_id: i64) -> Result<(), AppError> {
        if !self.notes.delete(note_id, owner_id).await? {
            return Err(AppError::not_found(
                "Note not found",
                json!({ "id": note_id }),
            ));
        }

        metrics::counter!("notes_deleted_total").increment(1);
        tracing::debug!(note_id, owner_id, "note deleted");

        Ok(())
    }

    /// Creates a category for `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the owner already has a category
    /// with this name.
    pub async fn create_category(&self, owner_id: i64, name: &str) -> Result<Category, AppError> {
        let category = self
            .categories
            .create(NewCategory {
                name: name.to_string(),
                owner_id,
            })
            .await?;

        tracing::debug!(category_id = category.id, owner_id, "category created");

        Ok(category)
    }

    /// Lists the owner's categories in name order.
    pub async fn list_categories(&self, owner_id: i64) -> Result<Vec<Category>, AppError> {
        self.categories.list(owner_id).await
    }

    /// Renames a category owned by `owner_id`.
    pub async fn rename_category(
        &self,
        owner_id: i64,
        category_id: i64,
        name: &str,
    ) -> Result<Category, AppError> {
        self.categories.rename(category_id, owner_id, name).await
    }

    /// Deletes a category owned by `owner_id`. Notes referencing it are kept
    /// and become uncategorized.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with the message `Category not found`
    /// if nothing was deleted.
    pub async fn delete_category(&self, owner_id: i64, category_id: i64) -> Result<(), AppError> {
        if !self.categories.delete(category_id, owner_id).await? {
            return Err(AppError::not_found(
                "Category not found",
                json!({ "id": category_id }),
            ));
        }

        tracing::debug!(category_id, owner_id, "category deleted");

        Ok(())
    }

    async fn require_category(&self, owner_id: i64, category_id: i64) -> Result<(), AppError> {
        match self.categories.find_by_id(category_id, owner_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(
                "Category not found",
                json!({ "id": category_id }),
            )),
        }
    }
}
