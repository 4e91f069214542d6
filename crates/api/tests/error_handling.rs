//! Tests for `AppError` -> HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code and envelope. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use assert_matches::assert_matches;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use gradebox_api::error::{AppError, VALIDATION_FAILED};
use gradebox_core::error::{CoreError, GradeRuleViolation};
use gradebox_db::models::grade::GradeRequest;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Grade",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Grade not found");
    assert!(json["error"].get("details").is_none());
    assert!(json["timestamp"].is_string());
}

// ---------------------------------------------------------------------------
// Test: every grade rule maps to 400 with its own name
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rule_violations_return_400_with_rule_name() {
    for rule in [
        GradeRuleViolation::StudentNameRequired,
        GradeRuleViolation::SubjectRequired,
        GradeRuleViolation::GradeValueRequired,
        GradeRuleViolation::GradeValueOutOfRange,
        GradeRuleViolation::InvalidInstitutionType,
    ] {
        let (status, json) = error_to_response(AppError::Core(CoreError::Rule(rule))).await;

        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], rule.code());
        assert_eq!(json["error"]["details"]["rule"], rule.code());
    }
}

// ---------------------------------------------------------------------------
// Test: AppError::Validation maps to 400 and keeps its details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_with_details() {
    let err = AppError::invalid(
        "Invalid ID parameter",
        "id",
        "invalid_id",
        "Expected a positive integer, received 'abc'".into(),
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "Invalid ID parameter");
    assert_eq!(json["error"]["details"][0]["field"], "id");
}

// ---------------------------------------------------------------------------
// Test: internal errors map to 500 and sanitize the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    for err in [
        AppError::InternalError("secret store state leaked".into()),
        AppError::Core(CoreError::Internal("secret backend failure".into())),
    ] {
        let (status, json) = error_to_response(err).await;

        assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "INTERNAL_SERVER_ERROR");

        // The response body must NOT contain the original error details.
        let body_text = json.to_string();
        assert!(
            !body_text.contains("secret"),
            "Internal error response must not leak sensitive details"
        );
        assert_eq!(json["error"]["message"], "An unexpected error occurred");
    }
}

// ---------------------------------------------------------------------------
// Test: RouteNotFound carries method and path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn route_not_found_returns_404_with_route() {
    let err = AppError::RouteNotFound {
        method: "DELETE".into(),
        path: "/nowhere".into(),
    };

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["message"], "Route DELETE /nowhere not found");
    assert_eq!(json["error"]["method"], "DELETE");
    assert_eq!(json["error"]["path"], "/nowhere");
}

// ---------------------------------------------------------------------------
// Test: validator output converts into AppError::Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_errors_convert_to_sorted_camel_case_details() {
    let errors = GradeRequest {
        institution_type: Some(None),
        ..GradeRequest::default()
    }
    .validate_shape()
    .unwrap_err();

    let err = AppError::from(errors);
    assert_matches!(&err, AppError::Validation { message, .. } if message == VALIDATION_FAILED);

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);

    let details = json["error"]["details"].as_array().unwrap();
    let fields: Vec<_> = details.iter().map(|d| d["field"].as_str().unwrap()).collect();
    assert_eq!(
        fields,
        vec!["gradeValue", "institutionType", "studentName", "subject"]
    );
    assert_eq!(details[1]["code"], "invalid_type");
}

#[tokio::test]
async fn core_errors_convert_into_app_error() {
    let err: AppError = CoreError::Rule(GradeRuleViolation::SubjectRequired).into();
    assert_matches!(
        err,
        AppError::Core(CoreError::Rule(GradeRuleViolation::SubjectRequired))
    );

    let err: AppError = CoreError::NotFound { entity: "Grade", id: 7 }.into();
    assert_matches!(err, AppError::Core(CoreError::NotFound { id: 7, .. }));
}
