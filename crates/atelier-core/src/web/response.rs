//! Response types for web search operations.

use serde::{Deserialize, Serialize};

/// One search hit.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Page title.
    pub title: String,
    /// Page URL.
    pub url: String,
    /// Snippet or extracted content.
    pub content: String,
    /// Relevance score assigned by the backend, if any.
    #[serde(default)]
    pub score: Option<f64>,
    /// Full page content when requested.
    #[serde(default)]
    pub raw_content: Option<String>,
}

/// Results for a single query.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Synthesized answer when requested and available.
    #[serde(default)]
    pub answer: Option<String>,
    /// Ranked result list.
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    /// Returns true if the backend found nothing.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
