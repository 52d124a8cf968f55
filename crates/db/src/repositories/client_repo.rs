//! Repository for the `clients` table.

use jobmanager_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient, UpdateClient};

/// Column list for `clients` queries.
const COLUMNS: &str = "id, name, email, phone, created_at";

/// Outcome of a client-initiated cascade deletion.
#[derive(Debug, Clone, Copy)]
pub struct ClientCascade {
    /// Whether the client row itself existed and was deleted.
    pub client_deleted: bool,
    /// How many of its projects were deleted alongside it.
    pub projects_deleted: u64,
}

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    ///
    /// An absent phone is stored as the empty string.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, email, phone) \
             VALUES ($1, $2, COALESCE($3, '')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a client by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Update a client. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET \
                name = COALESCE($2, name), \
                email = COALESCE($3, email), \
                phone = COALESCE($4, phone) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client together with every project that references it.
    ///
    /// Both deletes run in one transaction; a failure of either leaves the
    /// pre-operation state intact. Deleting an absent client is not an
    /// error (`client_deleted` is simply `false`).
    pub async fn delete_cascading(pool: &PgPool, id: DbId) -> Result<ClientCascade, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let projects_deleted = sqlx::query("DELETE FROM projects WHERE client_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let client_deleted = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        tx.commit().await?;

        Ok(ClientCascade {
            client_deleted,
            projects_deleted,
        })
    }
}
