pub mod grade;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /internal/grade                                  list, create
/// /internal/grade/{id}                             get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/internal", internal_routes())
}

/// Routes under `/api/v1/internal`.
fn internal_routes() -> Router<AppState> {
    Router::new().nest("/grade", grade::router())
}
