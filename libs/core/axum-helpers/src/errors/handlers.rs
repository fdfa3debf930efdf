use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Fallback handler for requests that match no route.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(error_code = ErrorCode::RouteNotFound.code(), %uri, "No route matched");

    let body = Json(ErrorResponse::new(
        ErrorCode::RouteNotFound.default_message(),
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}
