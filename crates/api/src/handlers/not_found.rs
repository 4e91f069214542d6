//! Fallback for requests that match no route.

use axum::extract::OriginalUri;
use axum::http::Method;

use crate::error::AppError;

/// Respond 404 with the `NOT_FOUND` envelope naming the method and path.
pub async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    tracing::debug!(%method, path = uri.path(), "No route matched");
    AppError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
