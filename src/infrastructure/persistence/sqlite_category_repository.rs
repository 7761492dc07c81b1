//! SQLite implementation of the category repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

/// SQLite repository for note categories.
pub struct SqliteCategoryRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCategoryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, owner_id)
            VALUES (?1, ?2)
            RETURNING id, name, owner_id, created_at
            "#,
        )
        .bind(&new_category.name)
        .bind(new_category.owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(category)
    }

    async fn find_by_id(&self, id: i64, owner_id: i64) -> Result<Option<Category>, AppError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, owner_id, created_at
            FROM categories
            WHERE id = ?1 AND owner_id = ?2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(category)
    }

    async fn list(&self, owner_id: i64) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, owner_id, created_at
            FROM categories
            WHERE owner_id = ?1
            ORDER BY name
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(categories)
    }

    async fn rename(&self, id: i64, owner_id: i64, name: &str) -> Result<Category, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET name = ?3
            WHERE id = ?1 AND owner_id = ?2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(name)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Category not found",
                json!({ "id": id }),
            ));
        }

        self.find_by_id(id, owner_id).await?.ok_or_else(|| {
            AppError::internal(
                "Renamed category could not be read back",
                json!({ "id": id }),
            )
        })
    }

    async fn delete(&self, id: i64, owner_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE id = ?1 AND owner_id = ?2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
