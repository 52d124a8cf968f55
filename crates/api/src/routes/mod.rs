pub mod auth;
pub mod clients;
pub mod health;
pub mod notes;
pub mod projects;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                 login (env-credential compare)
///
/// /clients                    list, create
/// /clients/{id}               get, update, delete (cascades to projects)
///
/// /projects                   list, create (with embedded client)
/// /projects/with-clients      list with embedded client record
/// /projects/{id}              get, update, delete (cascades to orphaned client)
///
/// /notes                      list, create
/// /notes/{id}                 get, update, delete
///
/// /stats/summary              aggregate counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/clients", clients::router())
        .nest("/projects", projects::router())
        .nest("/notes", notes::router())
        .nest("/stats", stats::router())
}
