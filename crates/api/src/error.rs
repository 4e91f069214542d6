use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gradebox_core::error::CoreError;
use serde_json::json;
use validator::ValidationErrors;

use crate::response::ErrorResponse;

/// Message used for every request-shape failure on a body.
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the JSON error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gradebox_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request did not have the expected shape (path, query or body).
    /// The store is never reached.
    #[error("{message}")]
    Validation {
        message: String,
        details: serde_json::Value,
    },

    /// No route matched the request.
    #[error("Route {method} {path} not found")]
    RouteNotFound { method: String, path: String },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shape error with a single detail entry.
    pub fn invalid(message: impl Into<String>, field: &str, code: &str, detail: String) -> Self {
        AppError::Validation {
            message: message.into(),
            details: json!([{ "field": field, "code": code, "message": detail }]),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        ErrorResponse::new("NOT_FOUND", format!("{entity} not found")),
                    )
                }
                CoreError::Rule(rule) => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("VALIDATION_ERROR", rule.code())
                        .with_details(json!({ "rule": rule.code() })),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            // --- HTTP-specific errors ---
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_ERROR", message).with_details(details),
            ),
            AppError::RouteNotFound { method, path } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NOT_FOUND", format!("Route {method} {path} not found"))
                    .with_route(method, path),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, ErrorResponse) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::new("INTERNAL_SERVER_ERROR", "An unexpected error occurred"),
    )
}

// ---------------------------------------------------------------------------
// Conversions from extractor and validator failures
// ---------------------------------------------------------------------------

/// Flatten validator output into `[{ field, code, message }]`, sorted by
/// field so the payload is deterministic.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let details: Vec<serde_json::Value> = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = camel_case(&field);
                errs.iter()
                    .map(|e| {
                        let message = match &e.message {
                            Some(msg) => msg.to_string(),
                            None => default_message(&e.code, &e.params),
                        };
                        json!({ "field": field, "code": e.code, "message": message })
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        AppError::Validation {
            message: VALIDATION_FAILED.to_string(),
            details: serde_json::Value::Array(details),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid(VALIDATION_FAILED, "body", "invalid_body", rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::invalid(
            "Invalid query parameters",
            "query",
            "invalid_query",
            rejection.body_text(),
        )
    }
}

/// Human-readable text for the built-in validator codes.
fn default_message(
    code: &str,
    params: &std::collections::HashMap<std::borrow::Cow<'static, str>, serde_json::Value>,
) -> String {
    let param = |name: &str| {
        params
            .get(name)
            .map(|v| v.to_string())
            .unwrap_or_default()
    };
    match code {
        "required" => "Required".to_string(),
        "length" => format!(
            "Length must be between {} and {} characters",
            param("min"),
            param("max")
        ),
        "range" => format!(
            "Value must be between {} and {}",
            param("min"),
            param("max")
        ),
        other => format!("Invalid value ({other})"),
    }
}

/// `student_name` -> `studentName`; already camel-cased input is unchanged.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
