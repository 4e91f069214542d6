//! Request extractors that perform shape validation.
//!
//! Failures are reported as [`AppError::Validation`] (HTTP 400) before any
//! handler code or store call runs.

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use gradebox_core::types::DbId;

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError`] envelope instead
/// of axum's plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string extractor with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// The `{id}` path segment coerced to a positive integer.
///
/// Accepts surrounding whitespace, integral decimal forms (`"7"`, `" 7 "`,
/// `"7.0"`, `"1e2"`) and `0x`/`0o`/`0b` literals; rejects anything that is
/// not a whole number >= 1. Whole numbers past `DbId::MAX` saturate to it.
/// No stored id gets that large, so those requests end in a 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeId(pub DbId);

impl<S> FromRequestParts<S> for GradeId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| invalid_id(&rejection.body_text()))?;

        coerce_positive_id(&raw)
            .map(GradeId)
            .ok_or_else(|| invalid_id(&format!("Expected a positive integer, received '{raw}'")))
    }
}

fn invalid_id(detail: &str) -> AppError {
    AppError::invalid("Invalid ID parameter", "id", "invalid_id", detail.to_string())
}

/// Parse a path segment as a positive integer id.
pub fn coerce_positive_id(raw: &str) -> Option<DbId> {
    let trimmed = raw.trim();

    if let Some(id) = parse_radix_literal(trimmed) {
        return (id >= 1).then(|| DbId::try_from(id).unwrap_or(DbId::MAX));
    }

    if let Ok(id) = trimmed.parse::<DbId>() {
        return (id >= 1).then_some(id);
    }

    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || value.fract() != 0.0 || value < 1.0 {
        return None;
    }
    // `as` saturates at `DbId::MAX`.
    Some(value as DbId)
}

/// `0x1f`, `0o17`, `0b101`. Unsigned only; a sign makes the literal invalid.
fn parse_radix_literal(s: &str) -> Option<u128> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    // Digits past u128 still name an id no record can have.
    Some(u128::from_str_radix(digits, radix).unwrap_or(u128::MAX))
}
