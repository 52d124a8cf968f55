//! Handlers for the `/projects` resource.
//!
//! The payment guard runs here, on the effective values of every write that
//! can mark a project paid or done: for creation the incoming fields, for
//! updates the incoming changes merged over the stored record. A rejected
//! write persists nothing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use jobmanager_core::error::CoreError;
use jobmanager_core::types::DbId;
use jobmanager_core::{client, project};
use jobmanager_db::models::project::{CreateProjectWithClient, Project, UpdateProject};
use jobmanager_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for the joint creation flow: both new ids, plus the
/// full project row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProject {
    pub project_id: DbId,
    pub client_id: DbId,
    pub project: Project,
}

// ---------------------------------------------------------------------------
// POST /projects
// ---------------------------------------------------------------------------

/// Create a project together with a new client, in one transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectWithClient>,
) -> AppResult<impl IntoResponse> {
    project::validate_fields(&input.title, input.total_bill, input.paid_amount)?;
    client::validate_new(&input.client.name, &input.client.email)?;
    project::check_payment_guard(input.status, input.paid, input.total_bill, input.paid_amount)?;

    let (created, new_client) = ProjectRepo::create_with_client(&state.pool, &input).await?;

    tracing::info!(
        project_id = created.id,
        client_id = new_client.id,
        "Project and client created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedProject {
                project_id: created.id,
                client_id: new_client.id,
                project: created,
            },
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /projects
// ---------------------------------------------------------------------------

/// List all projects, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

// ---------------------------------------------------------------------------
// GET /projects/with-clients
// ---------------------------------------------------------------------------

/// List all projects with their client embedded; a dangling client
/// reference surfaces as `client: null`.
pub async fn list_with_clients(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list_with_clients(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

// ---------------------------------------------------------------------------
// GET /projects/{id}
// ---------------------------------------------------------------------------

/// Get a single project by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: found }))
}

// ---------------------------------------------------------------------------
// PUT /projects/{id}
// ---------------------------------------------------------------------------

/// Apply a partial update to a project.
///
/// The guard is checked against the merged effective values before any
/// write; `remaining` is recomputed by the repository from those same
/// values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    let current = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    // Effective values: incoming changes merged over the stored record.
    let title = input.title.as_deref().unwrap_or(current.title.as_str());
    let status = input.status.unwrap_or(current.status);
    let paid = input.paid.unwrap_or(current.paid);
    let total_bill = input.total_bill.unwrap_or(current.total_bill);
    let paid_amount = input.paid_amount.unwrap_or(current.paid_amount);

    project::validate_fields(title, total_bill, paid_amount)?;
    project::check_payment_guard(status, paid, total_bill, paid_amount)?;

    let updated = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    tracing::info!(
        project_id = id,
        status = %updated.status,
        paid = %updated.paid,
        remaining = updated.remaining,
        "Project updated",
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /projects/{id}
// ---------------------------------------------------------------------------

/// Delete a project; if its client has no other projects, the client is
/// deleted in the same transaction.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let cascade = ProjectRepo::delete_cascading(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    tracing::info!(
        project_id = id,
        client_id = cascade.client_id,
        client_deleted = cascade.client_deleted,
        "Project delete cascade",
    );

    Ok(StatusCode::NO_CONTENT)
}
