//! Web trend-data gathering.

use atelier_core::types::{GarmentCategory, Season};
use atelier_core::web::SearchRequest;
use serde::{Deserialize, Serialize};

use super::keywords::{bucket_mentions, truncate_chars};
use super::queries::trend_search_queries;
use super::TRACING_TARGET;
use crate::context::EngineContext;

/// Character budget for source previews.
const PREVIEW_CHARS: usize = 200;

/// Character budget for mention snippets.
const MENTION_CHARS: usize = 100;

/// A bounded preview of one source page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcePreview {
    pub title: String,
    pub url: String,
    pub content_preview: String,
}

/// A full source document kept for AI analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSource {
    pub title: String,
    pub content: String,
    pub url: String,
}

/// Processed output of one gathering pass.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatheredTrendData {
    pub sources: Vec<SourcePreview>,
    pub raw_content: Vec<RawSource>,
    pub trend_mentions: Vec<String>,
    pub color_mentions: Vec<String>,
    pub material_mentions: Vec<String>,
    pub style_mentions: Vec<String>,
}

impl GatheredTrendData {
    /// Folds one search hit into the processed record.
    ///
    /// Hits without content are skipped entirely.
    pub fn absorb(&mut self, title: &str, url: &str, content: &str) {
        if content.is_empty() {
            return;
        }

        let preview = if content.chars().count() > PREVIEW_CHARS {
            format!("{}...", truncate_chars(content, PREVIEW_CHARS))
        } else {
            content.to_owned()
        };

        self.sources.push(SourcePreview {
            title: title.to_owned(),
            url: url.to_owned(),
            content_preview: preview,
        });
        self.raw_content.push(RawSource {
            title: title.to_owned(),
            content: content.to_owned(),
            url: url.to_owned(),
        });

        let snippet = truncate_chars(content, MENTION_CHARS).to_owned();
        let buckets = bucket_mentions(content);
        if buckets.color {
            self.color_mentions.push(snippet.clone());
        }
        if buckets.material {
            self.material_mentions.push(snippet.clone());
        }
        if buckets.style {
            self.style_mentions.push(snippet.clone());
        }
        if buckets.trend {
            self.trend_mentions.push(snippet);
        }
    }
}

/// Gathers trend data for a category by running the full query battery.
///
/// Per-query failures are logged and skipped; a pass where every query fails
/// simply yields an empty record. This function never fails the pipeline.
pub async fn gather_trend_data(
    ctx: &EngineContext,
    category: GarmentCategory,
    garment_type: &str,
    season: Season,
    year: i16,
) -> GatheredTrendData {
    let queries = trend_search_queries(category, garment_type, season, year);
    let mut gathered = GatheredTrendData::default();

    tracing::debug!(
        target: TRACING_TARGET,
        category = %category,
        garment_type = %garment_type,
        query_count = queries.len(),
        "Gathering web trend data"
    );

    for (kind, query) in queries {
        let request = SearchRequest::trend_query(query);
        match ctx.services.web.search(&request).await {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    query_kind = kind,
                    result_count = response.results.len(),
                    "Search query completed"
                );
                for result in &response.results {
                    gathered.absorb(&result.title, &result.url, &result.content);
                }
            }
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    query_kind = kind,
                    error = %error,
                    "Search query failed, skipping"
                );
            }
        }
    }

    tracing::info!(
        target: TRACING_TARGET,
        source_count = gathered.sources.len(),
        trend_mentions = gathered.trend_mentions.len(),
        "Trend gathering completed"
    );

    gathered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_skips_empty_content() {
        let mut gathered = GatheredTrendData::default();
        gathered.absorb("Empty", "https://example.com", "");
        assert!(gathered.sources.is_empty());
    }

    #[test]
    fn absorb_truncates_previews() {
        let mut gathered = GatheredTrendData::default();
        let long = "style ".repeat(60);
        gathered.absorb("Long", "https://example.com", &long);

        let preview = &gathered.sources[0].content_preview;
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
        // "style" lands the snippet in the style bucket only.
        assert_eq!(gathered.style_mentions.len(), 1);
        assert!(gathered.color_mentions.is_empty());
        assert_eq!(gathered.style_mentions[0].chars().count(), MENTION_CHARS);
    }

    #[test]
    fn absorb_buckets_into_all_matching_sets() {
        let mut gathered = GatheredTrendData::default();
        gathered.absorb(
            "Report",
            "https://example.com",
            "bold color blocking in recycled fabric is trending",
        );
        assert_eq!(gathered.color_mentions.len(), 1);
        assert_eq!(gathered.material_mentions.len(), 1);
        assert_eq!(gathered.trend_mentions.len(), 1);
        assert!(gathered.style_mentions.is_empty());
    }
}
