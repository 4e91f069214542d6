//! Route definitions for grade records.

use axum::routing::get;
use axum::Router;

use crate::handlers::grade;
use crate::state::AppState;

/// Grade routes mounted at `/grade`.
///
/// ```text
/// GET    /          -> list_grades
/// POST   /          -> create_grade
/// GET    /{id}      -> get_grade
/// PUT    /{id}      -> update_grade
/// DELETE /{id}      -> delete_grade
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(grade::list_grades).post(grade::create_grade))
        .route(
            "/{id}",
            get(grade::get_grade)
                .put(grade::update_grade)
                .delete(grade::delete_grade),
        )
}
