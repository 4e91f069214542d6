//! Handlers for grade records.
//!
//! Each handler validates the request shape through its extractors and the
//! body schema, then delegates to the [`GradeStore`](gradebox_db::GradeStore)
//! in [`AppState`]. Business rule failures come back from the store as
//! [`CoreError::Rule`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gradebox_core::error::CoreError;
use gradebox_core::types::DbId;
use gradebox_db::models::grade::{GradeListParams, GradeRequest};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery, GradeId};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

fn grade_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Grade", id })
}

/// GET /api/v1/internal/grade
///
/// List grades, optionally filtered by student name, subject (both
/// case-insensitive substring) and institution type (exact).
pub async fn list_grades(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<GradeListParams>,
) -> AppResult<impl IntoResponse> {
    let grades = state.grades.list(&params).await?;

    tracing::debug!(count = grades.len(), "Grades listed");

    Ok(Json(DataResponse::ok(grades)))
}

/// POST /api/v1/internal/grade
pub async fn create_grade(
    State(state): State<AppState>,
    AppJson(input): AppJson<GradeRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate_shape()?;

    let grade = state.grades.create(input.into()).await?;

    tracing::info!(grade_id = grade.id, "Grade created");

    Ok((StatusCode::CREATED, Json(DataResponse::ok(grade))))
}

/// GET /api/v1/internal/grade/{id}
pub async fn get_grade(
    State(state): State<AppState>,
    GradeId(id): GradeId,
) -> AppResult<impl IntoResponse> {
    let grade = state
        .grades
        .get(id)
        .await?
        .ok_or_else(|| grade_not_found(id))?;

    Ok(Json(DataResponse::ok(grade)))
}

/// PUT /api/v1/internal/grade/{id}
///
/// Full replace: every field must be supplied again. An omitted
/// `institutionType` clears the stored one.
pub async fn update_grade(
    State(state): State<AppState>,
    GradeId(id): GradeId,
    AppJson(input): AppJson<GradeRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate_shape()?;

    let grade = state
        .grades
        .update(id, input.into())
        .await?
        .ok_or_else(|| grade_not_found(id))?;

    tracing::info!(grade_id = id, "Grade updated");

    Ok(Json(DataResponse::ok(grade)))
}

/// DELETE /api/v1/internal/grade/{id}
pub async fn delete_grade(
    State(state): State<AppState>,
    GradeId(id): GradeId,
) -> AppResult<impl IntoResponse> {
    if !state.grades.delete(id).await? {
        return Err(grade_not_found(id));
    }

    tracing::info!(grade_id = id, "Grade deleted");

    Ok(Json(DataResponse::ok(MessageResponse {
        message: "Grade deleted successfully",
    })))
}
