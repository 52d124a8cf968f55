//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use jobmanager_core::client;
use jobmanager_core::error::CoreError;
use jobmanager_core::types::DbId;
use jobmanager_db::models::client::{CreateClient, UpdateClient};
use jobmanager_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /clients
// ---------------------------------------------------------------------------

/// Create a standalone client (no project yet).
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<impl IntoResponse> {
    client::validate_new(&input.name, &input.email)?;

    let created = ClientRepo::create(&state.pool, &input).await?;

    tracing::info!(client_id = created.id, "Client created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /clients
// ---------------------------------------------------------------------------

/// List all clients, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: clients }))
}

// ---------------------------------------------------------------------------
// GET /clients/{id}
// ---------------------------------------------------------------------------

/// Get a single client by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(DataResponse { data: found }))
}

// ---------------------------------------------------------------------------
// PUT /clients/{id}
// ---------------------------------------------------------------------------

/// Apply a partial update to a client. Only the allow-listed fields
/// (name, email, phone) are accepted; provided required fields must not be
/// blanked out.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.name {
        if name.trim().is_empty() {
            return Err(CoreError::Validation("Client name must not be empty".into()).into());
        }
    }
    if let Some(ref email) = input.email {
        if email.trim().is_empty() {
            return Err(CoreError::Validation("Client email must not be empty".into()).into());
        }
    }

    let updated = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;

    tracing::info!(client_id = id, "Client updated");

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /clients/{id}
// ---------------------------------------------------------------------------

/// Delete a client and every project referencing it, in one transaction.
///
/// Deleting an absent client is acked rather than rejected; the end state
/// (no such client, no projects pointing at it) already holds.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let cascade = ClientRepo::delete_cascading(&state.pool, id).await?;

    tracing::info!(
        client_id = id,
        client_deleted = cascade.client_deleted,
        projects_deleted = cascade.projects_deleted,
        "Client delete cascade",
    );

    Ok(StatusCode::NO_CONTENT)
}
