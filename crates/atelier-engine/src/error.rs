//! Error types for the pipeline engine.

use std::fmt;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during pipeline execution.
///
/// Most of these never escape a stage boundary: stages catch their own
/// failures, record them in the workflow state, and substitute fallbacks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Web search failed.
    #[error("search error: {0}")]
    Search(String),

    /// Text generation failed.
    #[error("generation error: {0}")]
    Generation(String),

    /// The trend-analysis response could not be decoded into the expected
    /// structure. Carriers of this error substitute the static fallback.
    #[error("trend parse error: {0}")]
    TrendParse(String),

    /// Image generation or extraction failed.
    #[error("image error: {0}")]
    Image(String),

    /// Writing or listing stored images failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error bubbled up from a core service.
    #[error(transparent)]
    Core(#[from] atelier_core::Error),
}

impl Error {
    /// Creates a search error.
    pub fn search(message: impl fmt::Display) -> Self {
        Self::Search(message.to_string())
    }

    /// Creates a generation error.
    pub fn generation(message: impl fmt::Display) -> Self {
        Self::Generation(message.to_string())
    }

    /// Creates a trend-parse error.
    pub fn trend_parse(message: impl fmt::Display) -> Self {
        Self::TrendParse(message.to_string())
    }

    /// Creates an image error.
    pub fn image(message: impl fmt::Display) -> Self {
        Self::Image(message.to_string())
    }

    /// Creates a storage error.
    pub fn storage(message: impl fmt::Display) -> Self {
        Self::Storage(message.to_string())
    }

    /// Creates a configuration error.
    pub fn config(message: impl fmt::Display) -> Self {
        Self::Config(message.to_string())
    }
}
