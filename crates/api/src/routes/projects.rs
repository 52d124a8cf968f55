//! Route definitions for `/projects`.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Project routes.
///
/// ```text
/// POST   /               -> create (joint project + client creation)
/// GET    /               -> list
/// GET    /with-clients   -> list_with_clients (embedded client or null)
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update (payment guard applies)
/// DELETE /{id}           -> delete (cascades to orphaned client)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route("/with-clients", get(projects::list_with_clients))
        .route(
            "/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
}
