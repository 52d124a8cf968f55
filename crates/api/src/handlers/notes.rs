//! Handlers for the `/notes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use jobmanager_core::error::CoreError;
use jobmanager_core::note;
use jobmanager_core::types::DbId;
use jobmanager_db::models::note::NoteInput;
use jobmanager_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /notes
// ---------------------------------------------------------------------------

/// Create a note, optionally referencing a project.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NoteInput>,
) -> AppResult<impl IntoResponse> {
    note::validate_content(&input.title, &input.content)?;

    let created = NoteRepo::create(&state.pool, &input).await?;

    tracing::info!(note_id = created.id, "Note created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /notes
// ---------------------------------------------------------------------------

/// List all notes, most recently updated first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = NoteRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: notes }))
}

// ---------------------------------------------------------------------------
// GET /notes/{id}
// ---------------------------------------------------------------------------

/// Get a single note by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;
    Ok(Json(DataResponse { data: found }))
}

// ---------------------------------------------------------------------------
// PUT /notes/{id}
// ---------------------------------------------------------------------------

/// Replace a note's content wholesale.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<NoteInput>,
) -> AppResult<impl IntoResponse> {
    note::validate_content(&input.title, &input.content)?;

    let updated = NoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    tracing::info!(note_id = id, "Note updated");

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /notes/{id}
// ---------------------------------------------------------------------------

/// Delete a note by ID.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = NoteRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(note_id = id, "Note deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Note", id }))
    }
}
