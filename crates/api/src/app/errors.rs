use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use stockroom_core::DomainError;
use stockroom_infra::StoreError;

use crate::app::dto::ErrorResponse;

/// Caller mistakes caught before delegation: 400.
pub fn domain_error_to_response(err: DomainError) -> Response {
    match err {
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_body", msg),
    }
}

/// Backend failures: logged, then 500. Never retried.
pub fn store_error_to_response(operation: &'static str, err: StoreError) -> Response {
    tracing::error!(operation, error = %err, "product store failure");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", err.to_string())
}

pub fn not_found(message: impl Into<String>) -> Response {
    json_error(StatusCode::NOT_FOUND, "not_found", message)
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: message.into(),
        }),
    )
        .into_response()
}
