//! Repository for the `notes` table.
//!
//! Notes have no cascade relationship: a note's `project_id` may outlive
//! the project it points at.

use jobmanager_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{Note, NoteInput};

/// Column list for `notes` queries.
const COLUMNS: &str = "id, title, content, tags, project_id, created_at, updated_at";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning the created row.
    pub async fn create(pool: &PgPool, input: &NoteInput) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, content, tags, project_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.tags)
            .bind(input.project_id)
            .fetch_one(pool)
            .await
    }

    /// Find a note by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all notes, most recently updated first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY updated_at DESC, id DESC");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// Replace a note's content wholesale (title, content, tags, project
    /// reference). Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NoteInput,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET \
                title = $2, content = $3, tags = $4, project_id = $5, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.tags)
            .bind(input.project_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
