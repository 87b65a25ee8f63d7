//! Error types for the Tavily client.

use std::fmt;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during search operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport failure (connect, timeout, body read).
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("search api error: status {status}: {message}")]
    Api { status: u16, message: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Response body could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates an API error from a status code and message.
    pub fn api(status: u16, message: impl fmt::Display) -> Self {
        Self::Api {
            status,
            message: message.to_string(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl fmt::Display) -> Self {
        Self::Config(message.to_string())
    }
}

impl From<Error> for atelier_core::Error {
    fn from(err: Error) -> Self {
        let core = match &err {
            Error::Transport(e) if e.is_timeout() => atelier_core::Error::timeout(),
            Error::Transport(_) => atelier_core::Error::network_error(),
            Error::Api { status: 429, .. } => atelier_core::Error::rate_limited(),
            Error::Api { status, .. } if *status >= 500 => {
                atelier_core::Error::service_unavailable()
            }
            Error::Api { .. } => atelier_core::Error::external_error(),
            Error::Config(_) => atelier_core::Error::configuration(),
            Error::Serialization(_) => atelier_core::Error::serialization(),
        };
        core.with_message(err.to_string()).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_map_to_core_kinds() {
        let rate_limited: atelier_core::Error = Error::api(429, "slow down").into();
        assert_eq!(rate_limited.kind(), atelier_core::ErrorKind::RateLimited);

        let unavailable: atelier_core::Error = Error::api(503, "maintenance").into();
        assert_eq!(
            unavailable.kind(),
            atelier_core::ErrorKind::ServiceUnavailable
        );

        let bad_request: atelier_core::Error = Error::api(400, "bad query").into();
        assert_eq!(bad_request.kind(), atelier_core::ErrorKind::ExternalError);
    }
}
