//! Response handling and error translation.
//!
//! # Responsibilities
//! - Serialize successful models as compact JSON with status 200
//! - Map error kinds to HTTP status codes
//! - Keep internal error detail out of response bodies
//!
//! # Design Decisions
//! - Validation errors map one-to-one: BadRequest → 400
//! - Upstream errors: NotFound → 404, every other kind → 500
//! - Detail is logged at the point of translation, then dropped

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::{ApiError, ApiResult, ErrorKind};

/// JSON body sent with every error status.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: &'static str,
    pub status: u16,
}

/// Status code for an error raised by this service itself.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Status code for an error reported by the upstream client.
pub fn upstream_status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let error = match status {
        StatusCode::BAD_REQUEST => ErrorKind::BadRequest.as_str(),
        StatusCode::NOT_FOUND => ErrorKind::NotFound.as_str(),
        _ => ErrorKind::Internal.as_str(),
    };
    let body = ErrorBody {
        message: message.to_string(),
        error,
        status: status.as_u16(),
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.kind());
        tracing::debug!(status = %status, detail = %self.detail(), "Request rejected");
        error_response(status, self.message())
    }
}

/// Translate an upstream client failure into a response.
pub fn upstream_failure(err: ApiError) -> Response {
    let status = upstream_status_for(err.kind());
    if status.is_server_error() {
        tracing::error!(kind = %err.kind(), detail = %err.detail(), "Upstream failure");
        error_response(status, ApiError::internal().message())
    } else {
        tracing::info!(kind = %err.kind(), detail = %err.detail(), "Upstream reported not found");
        error_response(status, err.message())
    }
}

/// Turn a client result into the final response.
pub fn respond<T: Serialize>(result: ApiResult<T>) -> Response {
    match result {
        Ok(model) => (StatusCode::OK, Json(model)).into_response(),
        Err(err) => upstream_failure(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::BadRequest), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Internal), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_mapping_collapses_to_500() {
        assert_eq!(upstream_status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(upstream_status_for(ErrorKind::Internal), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            upstream_status_for(ErrorKind::BadRequest),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_hides_detail() {
        let response = upstream_failure(ApiError::internal_with("db password is hunter2"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(
            body,
            r#"{"message":"Internal server error","error":"internal_server_error","status":500}"#
        );
    }

    #[tokio::test]
    async fn test_bad_request_response() {
        let response = ApiError::bad_request("Invalid id", "x").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            &bytes[..],
            br#"{"message":"Invalid id","error":"bad_request","status":400}"#
        );
    }
}
