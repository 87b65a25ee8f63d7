//! Error types for the Gemini client.

use std::fmt;

/// Result type alias for Gemini operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during Gemini operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport failure (connect, timeout, body read).
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("gemini api error: status {status}: {message}")]
    Api { status: u16, message: String },

    /// The response contained no usable content part.
    #[error("missing content: {0}")]
    MissingContent(String),

    /// Inline data could not be base64-decoded.
    #[error("invalid inline data: {0}")]
    InvalidInlineData(#[from] base64::DecodeError),

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

    /// Creates a missing-content error.
    pub fn missing_content(message: impl fmt::Display) -> Self {
        Self::MissingContent(message.to_string())
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
            Error::MissingContent(_) => atelier_core::Error::external_error(),
            Error::InvalidInlineData(_) => atelier_core::Error::serialization(),
            Error::Config(_) => atelier_core::Error::configuration(),
            Error::Serialization(_) => atelier_core::Error::serialization(),
        };
        core.with_message(err.to_string()).with_source(err)
    }
}
