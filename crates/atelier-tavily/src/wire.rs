//! Wire types for the Tavily `/search` endpoint.

use atelier_core::web::{SearchDepth, SearchRequest, SearchResponse, SearchResult};
use serde::{Deserialize, Serialize};

/// Request body for `POST /search`.
#[derive(Debug, Serialize)]
pub(crate) struct WireSearchRequest<'a> {
    pub api_key: &'a str,
    pub query: &'a str,
    pub max_results: usize,
    pub search_depth: &'static str,
    pub include_answer: bool,
    pub include_raw_content: bool,
}

impl<'a> WireSearchRequest<'a> {
    pub fn new(api_key: &'a str, request: &'a SearchRequest) -> Self {
        let search_depth = match request.search_depth {
            SearchDepth::Basic => "basic",
            SearchDepth::Advanced => "advanced",
        };
        Self {
            api_key,
            query: &request.query,
            max_results: request.max_results,
            search_depth,
            include_answer: request.include_answer,
            include_raw_content: request.include_raw_content,
        }
    }
}

/// Response body for `POST /search`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireSearchResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub results: Vec<WireSearchResult>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireSearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub raw_content: Option<String>,
}

impl From<WireSearchResponse> for SearchResponse {
    fn from(wire: WireSearchResponse) -> Self {
        Self {
            answer: wire.answer,
            results: wire.results.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<WireSearchResult> for SearchResult {
    fn from(wire: WireSearchResult) -> Self {
        Self {
            title: wire.title,
            url: wire.url,
            content: wire.content,
            score: wire.score,
            raw_content: wire.raw_content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_snake_case_fields() {
        let request = SearchRequest::trend_query("fall 2025 fashion trends dresses");
        let wire = WireSearchRequest::new("tvly-key", &request);
        let value = serde_json::to_value(&wire).unwrap();

        assert_eq!(value["api_key"], "tvly-key");
        assert_eq!(value["query"], "fall 2025 fashion trends dresses");
        assert_eq!(value["max_results"], 3);
        assert_eq!(value["search_depth"], "advanced");
        assert_eq!(value["include_answer"], true);
        assert_eq!(value["include_raw_content"], true);
    }

    #[test]
    fn response_tolerates_missing_fields() {
        let wire: WireSearchResponse =
            serde_json::from_str(r#"{"results":[{"title":"Trend report"}]}"#).unwrap();
        let response: SearchResponse = wire.into();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].title, "Trend report");
        assert!(response.answer.is_none());
    }
}
