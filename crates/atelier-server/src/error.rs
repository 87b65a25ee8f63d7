//! HTTP handler error type mapping to the uniform response envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::handler::response::ApiResponse;

/// A specialized [`Result`] type for HTTP handler operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of handler errors with fixed status codes and default messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or semantically invalid request.
    BadRequest,
    /// Request failed field validation.
    ValidationFailed,
    /// The requested resource does not exist.
    NotFound,
    /// A required backing service is not available.
    ServiceUnavailable,
    /// Unexpected internal failure.
    Internal,
}

impl ErrorKind {
    /// Returns the HTTP status code for this kind.
    pub const fn status(self) -> StatusCode {
        match self {
            Self::BadRequest | Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the default user-facing message for this kind.
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::ValidationFailed => "Request validation failed",
            Self::NotFound => "Resource not found",
            Self::ServiceUnavailable => "Service unavailable",
            Self::Internal => "Internal server error",
        }
    }
}

/// The error type for HTTP handlers.
#[derive(Debug, Clone)]
#[must_use = "errors do nothing unless serialized"]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
}

impl Error {
    /// Creates a new error with the specified kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Sets a custom user-facing message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the user-facing message.
    pub fn message(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| self.kind.default_message())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.kind.status())
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::new(ErrorKind::ValidationFailed).with_message(errors.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let envelope = ApiResponse::<()>::failure(
            self.kind.default_message(),
            self.message().to_owned(),
        );
        (self.kind.status(), axum::Json(envelope)).into_response()
    }
}

impl IntoResponse for ErrorKind {
    fn into_response(self) -> Response {
        Error::new(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_statuses() {
        assert_eq!(ErrorKind::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::ValidationFailed.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorKind::ServiceUnavailable.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn custom_message_overrides_default() {
        let error = Error::new(ErrorKind::NotFound).with_message("Image not found: foo.png");
        assert_eq!(error.message(), "Image not found: foo.png");
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }
}
