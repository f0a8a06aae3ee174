//! Error taxonomy shared by the upstream client and the HTTP handlers.
//!
//! # Design Decisions
//! - One error type with a kind tag rather than one enum variant per failure
//! - `message` is safe to show to clients; `detail` is for logs only
//! - Status mapping lives in `http::response`, not here

use std::fmt;

use thiserror::Error;

/// Category of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed client input, detected before any upstream call.
    BadRequest,
    /// The upstream service reported the resource as absent.
    NotFound,
    /// Any other failure: transport, upstream 5xx, undecodable payload.
    Internal,
}

impl ErrorKind {
    /// Short machine-readable name used in error bodies and metrics labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Internal => "internal_server_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by every client operation and input validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message} ({detail})")]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
    detail: String,
}

/// Result type for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message, detail)
    }

    pub fn not_found(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message, detail)
    }

    /// Generic internal error with no further detail.
    pub fn internal() -> Self {
        Self::internal_with("")
    }

    /// Internal error carrying a detail for the logs.
    pub fn internal_with(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, "Internal server error", detail)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}
