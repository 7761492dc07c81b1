//! Repository trait for category data access.

use crate::domain::entities::{Category, NewCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing note categories.
///
/// Categories are scoped to their owner like notes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteCategoryRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Creates a new category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the owner already has a category
    /// with this name.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError>;

    /// Finds a category by ID, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64, owner_id: i64) -> Result<Option<Category>, AppError>;

    /// Lists an owner's categories ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, owner_id: i64) -> Result<Vec<Category>, AppError>;

    /// Renames a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no category matches `id` + `owner_id`.
    /// Returns [`AppError::Conflict`] if the new name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn rename(&self, id: i64, owner_id: i64, name: &str) -> Result<Category, AppError>;

    /// Deletes a category, detaching its notes.
    ///
    /// Returns `Ok(true)` if the category was found and deleted, `Ok(false)`
    /// if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64, owner_id: i64) -> Result<bool, AppError>;
}
