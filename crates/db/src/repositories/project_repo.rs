//! Repository for the `projects` table, including the two transactional
//! flows that cross into the `clients` table: joint creation and the
//! orphan-cleanup cascade on deletion.

use jobmanager_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::Client;
use crate::models::project::{
    CreateProjectWithClient, Project, ProjectWithClient, ProjectWithClientRow, UpdateProject,
};

/// Column list for `projects` queries.
const COLUMNS: &str = "\
    id, title, status, deadline, paid, payment_method, \
    total_bill, paid_amount, remaining, client_id, created_at, updated_at";

/// Outcome of a project deletion cascade.
#[derive(Debug, Clone, Copy)]
pub struct ProjectCascade {
    /// The client the deleted project referenced.
    pub client_id: DbId,
    /// Whether that client was deleted because no other project references it.
    pub client_deleted: bool,
}

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Create a client and a project referencing it, in one transaction.
    ///
    /// Either both rows exist afterwards or neither does, so a failed
    /// project insert cannot strand an orphaned client.
    pub async fn create_with_client(
        pool: &PgPool,
        input: &CreateProjectWithClient,
    ) -> Result<(Project, Client), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let client_query = "INSERT INTO clients (name, email, phone) \
             VALUES ($1, $2, COALESCE($3, '')) \
             RETURNING id, name, email, phone, created_at";
        let client = sqlx::query_as::<_, Client>(client_query)
            .bind(&input.client.name)
            .bind(&input.client.email)
            .bind(&input.client.phone)
            .fetch_one(&mut *tx)
            .await?;

        let project_query = format!(
            "INSERT INTO projects \
                (title, status, deadline, paid, payment_method, \
                 total_bill, paid_amount, remaining, client_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $6 - $7, $8) \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&project_query)
            .bind(&input.title)
            .bind(input.status.as_str())
            .bind(input.deadline)
            .bind(input.paid.as_str())
            .bind(input.payment_method.as_str())
            .bind(input.total_bill)
            .bind(input.paid_amount)
            .bind(client.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok((project, client))
    }

    /// Find a project by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List all projects with their client embedded, newest first.
    ///
    /// Projects whose `client_id` dangles surface with `client: None`
    /// rather than being omitted.
    pub async fn list_with_clients(pool: &PgPool) -> Result<Vec<ProjectWithClient>, sqlx::Error> {
        let query = "\
            SELECT p.id, p.title, p.status, p.deadline, p.paid, p.payment_method, \
                   p.total_bill, p.paid_amount, p.remaining, p.created_at, p.updated_at, \
                   c.id AS client_id, c.name AS client_name, \
                   c.email AS client_email, c.phone AS client_phone \
            FROM projects p \
            LEFT JOIN clients c ON c.id = p.client_id \
            ORDER BY p.created_at DESC, p.id DESC";
        let rows = sqlx::query_as::<_, ProjectWithClientRow>(query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ProjectWithClient::from).collect())
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// `remaining` and `updated_at` are always recomputed from the
    /// effective values, whatever the caller touched. The payment guard has
    /// already been checked by the service layer against the same effective
    /// values before this runs.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                title = COALESCE($2, title), \
                status = COALESCE($3, status), \
                deadline = COALESCE($4, deadline), \
                paid = COALESCE($5, paid), \
                payment_method = COALESCE($6, payment_method), \
                total_bill = COALESCE($7, total_bill), \
                paid_amount = COALESCE($8, paid_amount), \
                remaining = COALESCE($7, total_bill) - COALESCE($8, paid_amount), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.status.map(|s| s.as_str()))
            .bind(input.deadline)
            .bind(input.paid.map(|p| p.as_str()))
            .bind(input.payment_method.map(|m| m.as_str()))
            .bind(input.total_bill)
            .bind(input.paid_amount)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project; if it was the last one referencing its client,
    /// delete the client too.
    ///
    /// The delete, the reference count, and the conditional client delete
    /// share one transaction, with the client row locked while counting, so
    /// a concurrent creation for the same client cannot slip between the
    /// count and the client deletion. Returns `None` if the project does
    /// not exist (nothing is deleted in that case).
    pub async fn delete_cascading(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectCascade>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted: Option<(DbId,)> =
            sqlx::query_as("DELETE FROM projects WHERE id = $1 RETURNING client_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some((client_id,)) = deleted else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("SELECT id FROM clients WHERE id = $1 FOR UPDATE")
            .bind(client_id)
            .fetch_optional(&mut *tx)
            .await?;

        let (surviving,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM projects WHERE client_id = $1")
                .bind(client_id)
                .fetch_one(&mut *tx)
                .await?;

        let client_deleted = if surviving == 0 {
            sqlx::query("DELETE FROM clients WHERE id = $1")
                .bind(client_id)
                .execute(&mut *tx)
                .await?
                .rows_affected()
                > 0
        } else {
            false
        };

        tx.commit().await?;

        Ok(Some(ProjectCascade {
            client_id,
            client_deleted,
        }))
    }
}
