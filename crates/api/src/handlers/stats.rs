//! Handler for the `/stats` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use jobmanager_db::repositories::SummaryRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/stats/summary
///
/// Aggregate counts over the project and client collections, recomputed on
/// every call.
pub async fn summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = SummaryRepo::fetch(&state.pool).await?;
    Ok(Json(DataResponse { data: summary }))
}
