//! Route definitions for `/clients`.

use axum::routing::get;
use axum::Router;

use crate::handlers::clients;
use crate::state::AppState;

/// Client routes.
///
/// ```text
/// POST   /       -> create
/// GET    /       -> list
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete (cascades to the client's projects)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(clients::list).post(clients::create))
        .route(
            "/{id}",
            get(clients::get_by_id)
                .put(clients::update)
                .delete(clients::delete),
        )
}
