use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match &err {
        DomainError::Validation(_) | DomainError::Conflict(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    tracing::debug!(status = status.as_u16(), "request rejected: {err}");
    json_error(status, err.message())
}

/// Body could not be read as the expected JSON shape.
///
/// Every variant maps to 400, including a missing `content-type`, so clients
/// see one status for "the body is unusable".
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::debug!("request body rejected: {rejection}");
    json_error(StatusCode::BAD_REQUEST, rejection.body_text())
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "errorMessage": message.into(),
        })),
    )
        .into_response()
}
