//! SQLite implementation of the note repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewNote, Note, NoteFilter, NotePatch};
use crate::domain::repositories::NoteRepository;
use crate::error::AppError;

/// Columns selected for every note query, joined with the category name.
const NOTE_COLUMNS: &str = r#"
    n.id, n.title, n.body, n.category_id, c.name AS category,
    n.image_url, n.owner_id, n.created_at
"#;

/// SQLite repository for note storage and retrieval.
///
/// Every query joins the category table so returned notes carry their
/// category name.
pub struct SqliteNoteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteNoteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn fetch_joined(&self, id: i64, owner_id: i64) -> Result<Option<Note>, AppError> {
        let note = sqlx::query_as::<_, Note>(&format!(
            r#"
            SELECT {NOTE_COLUMNS}
            FROM notes n
            LEFT JOIN categories c ON c.id = n.category_id
            WHERE n.id = ?1 AND n.owner_id = ?2
            "#
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(note)
    }
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn create(&self, new_note: NewNote) -> Result<Note, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO notes (title, body, category_id, image_url, owner_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id
            "#,
        )
        .bind(&new_note.title)
        .bind(&new_note.body)
        .bind(new_note.category_id)
        .bind(&new_note.image_url)
        .bind(new_note.owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        self.fetch_joined(id, new_note.owner_id).await?.ok_or_else(|| {
            AppError::internal("Inserted note could not be read back", json!({ "id": id }))
        })
    }

    async fn find_by_id(&self, id: i64, owner_id: i64) -> Result<Option<Note>, AppError> {
        self.fetch_joined(id, owner_id).await
    }

    async fn list(
        &self,
        owner_id: i64,
        filter: NoteFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Note>, AppError> {
        let notes = sqlx::query_as::<_, Note>(&format!(
            r#"
            SELECT {NOTE_COLUMNS}
            FROM notes n
            LEFT JOIN categories c ON c.id = n.category_id
            WHERE n.owner_id = ?1
              AND (?2 IS NULL OR n.title LIKE '%' || ?2 || '%')
              AND (?3 IS NULL OR n.category_id = ?3)
            ORDER BY n.created_at DESC, n.id DESC
            LIMIT ?4 OFFSET ?5
            "#
        ))
        .bind(owner_id)
        .bind(&filter.title)
        .bind(filter.category_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(notes)
    }

    async fn count(&self, owner_id: i64, filter: NoteFilter) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM notes n
            WHERE n.owner_id = ?1
              AND (?2 IS NULL OR n.title LIKE '%' || ?2 || '%')
              AND (?3 IS NULL OR n.category_id = ?3)
            "#,
        )
        .bind(owner_id)
        .bind(&filter.title)
        .bind(filter.category_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, owner_id: i64, patch: NotePatch) -> Result<Note, AppError> {
        // CASE flags distinguish "leave unchanged" from "set to NULL" for the
        // double-option fields.
        let result = sqlx::query(
            r#"
            UPDATE notes SET
                title = COALESCE(?3, title),
                body = COALESCE(?4, body),
                category_id = CASE WHEN ?5 THEN ?6 ELSE category_id END,
                image_url = CASE WHEN ?7 THEN ?8 ELSE image_url END
            WHERE id = ?1 AND owner_id = ?2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(&patch.title)
        .bind(&patch.body)
        .bind(patch.category_id.is_some())
        .bind(patch.category_id.flatten())
        .bind(patch.image_url.is_some())
        .bind(patch.image_url.clone().flatten())
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Note not found", json!({ "id": id })));
        }

        self.fetch_joined(id, owner_id).await?.ok_or_else(|| {
            AppError::internal("Updated note could not be read back", json!({ "id": id }))
        })
    }

    async fn delete(&self, id: i64, owner_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM notes
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
