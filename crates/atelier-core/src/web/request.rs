//! Request types for web search operations.

use serde::{Deserialize, Serialize};

/// How much work the search backend should invest per query.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

/// A single search query with result-shaping options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The query text.
    pub query: String,
    /// Maximum number of results to return.
    pub max_results: usize,
    /// Search effort level.
    pub search_depth: SearchDepth,
    /// Whether to include a synthesized answer.
    pub include_answer: bool,
    /// Whether to include full page content alongside snippets.
    pub include_raw_content: bool,
}

impl SearchRequest {
    /// Creates a request with the defaults used for trend gathering:
    /// 3 advanced-depth results with answer and raw content included.
    pub fn trend_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: 3,
            search_depth: SearchDepth::Advanced,
            include_answer: true,
            include_raw_content: true,
        }
    }

    /// Sets the maximum result count.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}
